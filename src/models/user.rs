//! Identity and profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::AuthUser;

/// The signed-in identity as screens see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_partner: bool,
}

impl Identity {
    /// Project the auth surface's user object onto an identity, reading
    /// display fields out of the profile metadata.
    pub fn from_auth_user(user: &AuthUser) -> Self {
        let meta = &user.user_metadata;
        Self {
            id: user.id.clone(),
            username: meta
                .get("username")
                .and_then(|v| v.as_str())
                .unwrap_or("partner")
                .to_string(),
            avatar: meta
                .get("avatar")
                .and_then(|v| v.as_str())
                .map(String::from),
            created_at: user.created_at,
            is_partner: meta
                .get("is_partner")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        }
    }
}

/// Row in the `user_profiles` table, mirroring the identity metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_partner: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_from_metadata() {
        let user = AuthUser {
            id: "u-1".into(),
            email: Some("a@b.co".into()),
            created_at: None,
            user_metadata: json!({ "username": "panda", "is_partner": true }),
        };

        let identity = Identity::from_auth_user(&user);
        assert_eq!(identity.username, "panda");
        assert!(identity.is_partner);
        assert!(identity.avatar.is_none());
    }

    #[test]
    fn test_identity_defaults_without_metadata() {
        let user = AuthUser {
            id: "u-2".into(),
            email: None,
            created_at: None,
            user_metadata: serde_json::Value::Null,
        };

        let identity = Identity::from_auth_user(&user);
        assert_eq!(identity.username, "partner");
        assert!(!identity.is_partner);
    }
}
