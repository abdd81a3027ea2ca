use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the remote store. The shell reads `id`
/// and `email`; everything else is kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            claims: serde_json::Map::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// What the shell knows about the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum IdentityState {
    /// The initial check has not resolved yet.
    #[default]
    Unknown,
    Authenticated(Identity),
    Unauthenticated,
}

impl IdentityState {
    pub fn from_session(session: Option<Identity>) -> Self {
        match session {
            Some(identity) => IdentityState::Authenticated(identity),
            None => IdentityState::Unauthenticated,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, IdentityState::Unknown)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            IdentityState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_session_user_with_extra_claims() {
        let identity: Identity = serde_json::from_value(serde_json::json!({
            "id": "user-a",
            "email": "a@example.com",
            "role": "authenticated"
        }))
        .expect("decode");

        assert_eq!(identity.display_name(), "a@example.com");
        assert_eq!(identity.claims.get("role"), Some(&serde_json::json!("authenticated")));
    }

    #[test]
    fn session_maps_to_state() {
        assert_eq!(IdentityState::from_session(None), IdentityState::Unauthenticated);
        let state = IdentityState::from_session(Some(Identity::new("user-a")));
        assert!(state.is_resolved());
        assert_eq!(state.identity().map(|i| i.id.as_str()), Some("user-a"));
        assert!(!IdentityState::Unknown.is_resolved());
    }
}
