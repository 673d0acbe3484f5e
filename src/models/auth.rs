use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated identity, persisted as `{"email", "token"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "email", alias = "identity")]
    pub identity: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(identity: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            token: token.into(),
            signed_in_at: Some(Utc::now()),
        }
    }
}

/// Login form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
