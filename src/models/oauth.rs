use serde::{Deserialize, Serialize};

/// Session storage key holding the OAuth correlation value.
pub const OAUTH_STATE_KEY: &str = "oauthState";
/// Session storage key holding the Twitter request-token secret.
pub const TWITTER_SECRET_KEY: &str = "twitterOauthSecret";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OauthProvider {
    #[default]
    GitHub,
    Twitter,
}

impl OauthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OauthProvider::GitHub => "github",
            OauthProvider::Twitter => "twitter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OauthProvider::GitHub => "Verify with Github",
            OauthProvider::Twitter => "Verify with Twitter",
        }
    }

    /// Maps a `<select>` value back to a provider. Anything unknown is GitHub.
    pub fn from_select_value(value: &str) -> Self {
        match value {
            "twitter" => OauthProvider::Twitter,
            _ => OauthProvider::GitHub,
        }
    }

    pub fn all() -> [OauthProvider; 2] {
        [OauthProvider::GitHub, OauthProvider::Twitter]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterRequestToken {
    pub oauth_token: String,
    pub oauth_secret: String,
}

/// Values written to session storage right before leaving for the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct OauthHandoffState {
    pub state: String,
    pub secret: Option<String>,
}

impl OauthHandoffState {
    pub fn session_entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![(OAUTH_STATE_KEY, self.state.as_str())];
        if let Some(secret) = &self.secret {
            entries.push((TWITTER_SECRET_KEY, secret.as_str()));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_value_falls_back_to_github() {
        assert_eq!(OauthProvider::from_select_value("twitter"), OauthProvider::Twitter);
        assert_eq!(OauthProvider::from_select_value("github"), OauthProvider::GitHub);
        assert_eq!(OauthProvider::from_select_value("myspace"), OauthProvider::GitHub);
    }

    #[test]
    fn test_select_values_match_wire_names() {
        for provider in OauthProvider::all() {
            let wire = serde_json::to_value(provider).unwrap();
            assert_eq!(wire, serde_json::Value::String(provider.as_str().to_string()));
            assert_eq!(OauthProvider::from_select_value(provider.as_str()), provider);
        }
    }

    #[test]
    fn test_handoff_entries() {
        let github = OauthHandoffState { state: "abc".into(), secret: None };
        assert_eq!(github.session_entries(), vec![(OAUTH_STATE_KEY, "abc")]);

        let twitter = OauthHandoffState { state: "tok".into(), secret: Some("sec".into()) };
        assert_eq!(
            twitter.session_entries(),
            vec![(OAUTH_STATE_KEY, "tok"), (TWITTER_SECRET_KEY, "sec")]
        );
    }
}
