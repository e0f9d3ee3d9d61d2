//! Application configuration
//!
//! Native builds read `.env` and the process environment. Web builds talk to
//! the page's own origin and take OAuth settings from build-time env.

use anyhow::Context;
use std::sync::OnceLock;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_GITHUB_CLIENT_ID: &str = "f9be73dc7af4857809e0";
pub const DEFAULT_GITHUB_REDIRECT_URI: &str = "https://voice.radicalxchange.org/oauth2/callback";

#[derive(Debug, Clone, PartialEq)]
pub struct OauthSettings {
    pub github_client_id: String,
    pub github_redirect_uri: String,
}

impl Default for OauthSettings {
    fn default() -> Self {
        OauthSettings {
            github_client_id: DEFAULT_GITHUB_CLIENT_ID.to_string(),
            github_redirect_uri: DEFAULT_GITHUB_REDIRECT_URI.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub oauth: OauthSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            oauth: OauthSettings::default(),
        }
    }
}

impl AppConfig {
    /// Builds a config from a key lookup, keeping defaults for unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let api_url = get("API_URL", DEFAULT_API_URL);
        reqwest::Url::parse(&api_url).with_context(|| format!("API_URL is not a valid URL: {}", api_url))?;

        let github_redirect_uri = get("GITHUB_REDIRECT_URI", DEFAULT_GITHUB_REDIRECT_URI);
        reqwest::Url::parse(&github_redirect_uri)
            .with_context(|| format!("GITHUB_REDIRECT_URI is not a valid URL: {}", github_redirect_uri))?;

        Ok(AppConfig {
            api_url,
            oauth: OauthSettings {
                github_client_id: get("GITHUB_CLIENT_ID", DEFAULT_GITHUB_CLIENT_ID),
                github_redirect_uri,
            },
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> anyhow::Result<Self> {
        // Load environment variables
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> anyhow::Result<Self> {
        // On web, use the same origin as the page (for same-origin API requests)
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());

        Self::from_lookup(|key| match key {
            "API_URL" => origin.clone(),
            "GITHUB_CLIENT_ID" => option_env!("GITHUB_CLIENT_ID").map(str::to_string),
            "GITHUB_REDIRECT_URI" => option_env!("GITHUB_REDIRECT_URI").map(str::to_string),
            _ => None,
        })
    }
}

// Global configuration instance
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn init_config(config: AppConfig) {
    let _ = APP_CONFIG.set(config);
}

/// The configuration installed at start-up, or the defaults if none was.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::default)
}
