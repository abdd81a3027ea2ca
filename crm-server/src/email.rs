use crate::config::EmailConfig;
use crate::error::EmailError;
use async_trait::async_trait;
use serde::Serialize;

pub const WELCOME_SUBJECT: &str = "Welcome to Trade CRM updates";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    pub fn welcome(to: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: WELCOME_SUBJECT.into(),
            html: format!(
                "<p>Hi,</p>\
                 <p>Thanks for subscribing with <strong>{to}</strong>. \
                 You will hear from us about new trade tools, market insights \
                 and product releases.</p>\
                 <p>The Trade CRM team</p>"
            ),
        }
    }
}

#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

/// Posts to a transactional email API (Resend-compatible JSON body, bearer
/// token auth).
pub struct HttpEmailSender {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailSender {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&SendRequest {
                from: &self.config.from,
                to: [email.to.as_str()],
                subject: &email.subject,
                html: &email.html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(to = %email.to, "email accepted by api");
        Ok(())
    }
}

/// Used when no API key is configured.
pub struct DisabledEmailSender;

#[async_trait]
impl EmailSender for DisabledEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        tracing::warn!(to = %email.to, "email api not configured, skipping welcome email");
        Ok(())
    }
}

pub fn sender_from_config(config: Option<EmailConfig>) -> Box<dyn EmailSender> {
    match config {
        Some(config) => Box::new(HttpEmailSender::new(config)),
        None => Box::new(DisabledEmailSender),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: String) -> EmailConfig {
        EmailConfig {
            api_url: url,
            api_key: "re_test".into(),
            from: "CRM <crm@example.com>".into(),
        }
    }

    #[test]
    fn welcome_mentions_recipient() {
        let email = OutgoingEmail::welcome("buyer@example.com");
        assert_eq!(email.subject, WELCOME_SUBJECT);
        assert!(email.html.contains("buyer@example.com"));
    }

    #[tokio::test]
    async fn http_sender_posts_authenticated_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "from": "CRM <crm@example.com>",
                "to": ["buyer@example.com"],
                "subject": WELCOME_SUBJECT
            })))
            .with_status(200)
            .with_body(r#"{"id":"email-1"}"#)
            .create_async()
            .await;

        let sender = HttpEmailSender::new(config(format!("{}/emails", server.url())));
        sender
            .send(&OutgoingEmail::welcome("buyer@example.com"))
            .await
            .expect("send");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_sender_reports_api_rejection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/emails")
            .with_status(422)
            .with_body("invalid from address")
            .create_async()
            .await;

        let sender = HttpEmailSender::new(config(format!("{}/emails", server.url())));
        let err = sender
            .send(&OutgoingEmail::welcome("buyer@example.com"))
            .await
            .expect_err("should fail");
        match err {
            EmailError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "invalid from address");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn disabled_sender_succeeds() {
        DisabledEmailSender
            .send(&OutgoingEmail::welcome("buyer@example.com"))
            .await
            .expect("noop send");
    }
}
