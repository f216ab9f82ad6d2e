//! User record persisted alongside the session tokens.

use serde::{Deserialize, Serialize};

/// The signed-in admin user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Backend user id, kept as a string to match the serialized form.
    pub id: String,
    /// Email address used to sign in.
    pub email: String,
}

impl UserInfo {
    /// Record stored at login. The token endpoint returns only a token pair,
    /// so the profile is synthesised from the submitted email.
    pub fn for_email(email: impl Into<String>) -> Self {
        Self {
            id: "1".to_string(),
            email: email.into(),
        }
    }
}
