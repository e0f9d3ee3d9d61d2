use serde::{Deserialize, Serialize};

use super::OauthProvider;

/// User record returned by the activation-link check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub delegate: Option<DelegateSummary>,
    /// Auth token issued alongside the user, used for the follow-up updates.
    #[serde(default)]
    pub token: Option<String>,
}

impl User {
    pub fn user_id(&self) -> i64 {
        self.id
    }

    pub fn delegate_id(&self) -> Option<i64> {
        self.delegate.as_ref().map(|d| d.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateSummary {
    pub id: i64,
    #[serde(default)]
    pub oauth_provider: Option<OauthProvider>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    pub uidb64: String,
    pub token: String,
}

/// Partial update sent once the activation form passes validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateUpdate {
    pub oauth_provider: OauthProvider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_delegate_exposes_both_ids() {
        let user: User = serde_json::from_str(
            r#"{"id": 7, "email": "ada@example.com", "delegate": {"id": 42, "oauth_provider": "twitter"}}"#,
        )
        .unwrap();

        assert_eq!(user.user_id(), 7);
        assert_eq!(user.delegate_id(), Some(42));
        assert_eq!(user.delegate.unwrap().oauth_provider, Some(OauthProvider::Twitter));
        assert!(user.token.is_none());
    }

    #[test]
    fn test_user_without_delegate() {
        let user: User = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(user.delegate_id(), None);
        assert!(user.first_name.is_empty());
    }

    #[test]
    fn test_delegate_update_wire_format() {
        let body = serde_json::to_value(DelegateUpdate { oauth_provider: OauthProvider::GitHub }).unwrap();
        assert_eq!(body, serde_json::json!({ "oauth_provider": "github" }));
    }
}
