//! Browser side effects: session storage and full-page navigation.

use reqwest::Url;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrowserError {
    #[error("Browser window unavailable")]
    NoWindow,
    #[error("Session storage error: {0}")]
    Storage(String),
    #[error("Navigation failed: {0}")]
    Navigation(String),
    #[error("Invalid redirect URL: {0}")]
    InvalidUrl(String),
}

pub trait Browser {
    fn set_session_item(&self, key: &str, value: &str) -> Result<(), BrowserError>;
    fn navigate(&self, url: &Url) -> Result<(), BrowserError>;
}

/// The real page the app is running in.
#[derive(Clone, Copy, Default)]
pub struct WebBrowser;

#[cfg(target_arch = "wasm32")]
impl Browser for WebBrowser {
    fn set_session_item(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let storage = window
            .session_storage()
            .map_err(|e| BrowserError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| BrowserError::Storage("sessionStorage disabled".to_string()))?;

        storage
            .set_item(key, value)
            .map_err(|e: wasm_bindgen::JsValue| BrowserError::Storage(format!("{:?}", e)))
    }

    fn navigate(&self, url: &Url) -> Result<(), BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        window
            .location()
            .set_href(url.as_str())
            .map_err(|e| BrowserError::Navigation(format!("{:?}", e)))
    }
}

// Desktop renders in a webview, so the same page APIs are reached through eval.
#[cfg(not(target_arch = "wasm32"))]
impl Browser for WebBrowser {
    fn set_session_item(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        let script = session_item_script(key, value).map_err(|e| BrowserError::Storage(e.to_string()))?;
        run_script("sessionStorage.setItem", script);
        Ok(())
    }

    fn navigate(&self, url: &Url) -> Result<(), BrowserError> {
        let script = navigate_script(url).map_err(|e| BrowserError::Navigation(e.to_string()))?;
        run_script("navigation", script);
        Ok(())
    }
}

// The webview answers asynchronously; a failed script is only visible once it settles.
#[cfg(not(target_arch = "wasm32"))]
fn run_script(what: &'static str, script: String) {
    let eval = dioxus::document::eval(&script);
    dioxus::prelude::spawn(async move {
        if let Err(e) = eval.join::<serde_json::Value>().await {
            tracing::warn!("Webview {} failed: {:?}", what, e);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn session_item_script(key: &str, value: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        "window.sessionStorage.setItem({}, {}); return null;",
        serde_json::to_string(key)?,
        serde_json::to_string(value)?
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate_script(url: &Url) -> Result<String, serde_json::Error> {
    Ok(format!(
        "window.location.href = {}; return null;",
        serde_json::to_string(url.as_str())?
    ))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_session_item_script_quotes_values() {
        let script = session_item_script("oauthState", r#"a"b</script>"#).unwrap();
        assert_eq!(
            script,
            r#"window.sessionStorage.setItem("oauthState", "a\"b</script>"); return null;"#
        );
    }

    #[test]
    fn test_navigate_script_uses_serialized_url() {
        let url = Url::parse("https://api.twitter.com/oauth/authenticate?oauth_token=x").unwrap();
        assert_eq!(
            navigate_script(&url).unwrap(),
            r#"window.location.href = "https://api.twitter.com/oauth/authenticate?oauth_token=x"; return null;"#
        );
    }
}
