//! Redirect targets for each OAuth provider.

use reqwest::Url;

use crate::browser::BrowserError;
use crate::config::OauthSettings;

pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const TWITTER_AUTHENTICATE_URL: &str = "https://api.twitter.com/oauth/authenticate";

pub fn github_authorize_url(settings: &OauthSettings, state: &str) -> Result<Url, BrowserError> {
    Url::parse_with_params(
        GITHUB_AUTHORIZE_URL,
        &[
            ("client_id", settings.github_client_id.as_str()),
            ("redirect_uri", settings.github_redirect_uri.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| BrowserError::InvalidUrl(e.to_string()))
}

pub fn twitter_authenticate_url(oauth_token: &str) -> Result<Url, BrowserError> {
    Url::parse_with_params(TWITTER_AUTHENTICATE_URL, &[("oauth_token", oauth_token)])
        .map_err(|e| BrowserError::InvalidUrl(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_github_url_carries_client_redirect_and_state() {
        let url = github_authorize_url(&OauthSettings::default(), "1234-abcd").unwrap();

        assert_eq!(url.host_str(), Some("github.com"));
        assert_eq!(url.path(), "/login/oauth/authorize");
        assert_eq!(query(&url, "client_id").as_deref(), Some("f9be73dc7af4857809e0"));
        assert_eq!(
            query(&url, "redirect_uri").as_deref(),
            Some("https://voice.radicalxchange.org/oauth2/callback")
        );
        assert_eq!(query(&url, "state").as_deref(), Some("1234-abcd"));
    }

    #[test]
    fn test_twitter_url_escapes_token() {
        let url = twitter_authenticate_url("a&b=c").unwrap();
        assert_eq!(url.host_str(), Some("api.twitter.com"));
        assert_eq!(query(&url, "oauth_token").as_deref(), Some("a&b=c"));
        assert_eq!(url.query_pairs().count(), 1);
    }
}
