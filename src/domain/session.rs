use serde::{Deserialize, Serialize};

/// The authenticated player's identity and bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Player id on the gamification service (the login name)
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// A session is only usable when both fields are present
    pub fn is_valid(&self) -> bool {
        !self.username.trim().is_empty() && !self.token.trim().is_empty()
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
