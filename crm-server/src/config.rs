use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DB_PATH: &str = "subscribers.db";
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_EMAIL_FROM: &str = "Trade CRM <updates@tradecrm.app>";

#[derive(Clone, Debug, PartialEq)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    /// `None` when no API key is configured; emails are then skipped.
    pub email: Option<EmailConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let bind = lookup("CRM_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| format!("invalid CRM_BIND_ADDR '{bind}': {e}"))?;

        let email = lookup("EMAIL_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| EmailConfig {
                api_url: lookup("EMAIL_API_URL").unwrap_or_else(|| DEFAULT_EMAIL_API_URL.into()),
                api_key,
                from: lookup("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.into()),
            });

        Ok(Self {
            bind_addr,
            db_path: lookup("CRM_SUBSCRIBERS_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().expect("addr"));
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert!(config.email.is_none());
    }

    #[test]
    fn email_enabled_by_api_key() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("EMAIL_API_KEY", "re_123"),
            ("EMAIL_FROM", "CRM <crm@example.com>"),
        ]))
        .expect("config");
        let email = config.email.expect("email config");
        assert_eq!(email.api_url, DEFAULT_EMAIL_API_URL);
        assert_eq!(email.api_key, "re_123");
        assert_eq!(email.from, "CRM <crm@example.com>");
    }

    #[test]
    fn blank_api_key_disables_email() {
        let config =
            ServerConfig::from_lookup(lookup(&[("EMAIL_API_KEY", "  ")])).expect("config");
        assert!(config.email.is_none());
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("CRM_BIND_ADDR", "nowhere")]))
            .expect_err("should fail");
        assert!(err.contains("CRM_BIND_ADDR"));
    }
}
