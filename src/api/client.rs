use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use std::sync::RwLock;
use thiserror::Error;

/// Validation errors as the backend reports them in a failed response body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldErrors {
    #[serde(default)]
    pub non_field_errors: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Access denied")]
    Forbidden,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {}", .0.non_field_errors.join(", "))]
    Rejected(FieldErrors),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text suitable for an alert: the first field error when the backend sent one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(errors) => errors
                .non_field_errors
                .first()
                .cloned()
                .unwrap_or_else(|| self.to_string()),
            _ => self.to_string(),
        }
    }

    /// Any failed status carrying `non_field_errors` is a rejection, whatever the code.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        if let Ok(errors) = serde_json::from_str::<FieldErrors>(body) {
            if !errors.non_field_errors.is_empty() {
                return ApiError::Rejected(errors);
            }
        }

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound(body.to_string()),
            _ => ApiError::Server(format!("{}: {}", status, body)),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    client: Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: base_url.trim_end_matches('/').to_string(),
                client: Client::new(),
                token: RwLock::new(None),
            }),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.inner.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn get_token(&self) -> Option<String> {
        self.inner.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.get_token() {
            Some(token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.inner.client.get(self.url(path)));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = self.authorize(self.inner.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// PATCH where only the status matters.
    pub async fn patch_no_response<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self.authorize(self.inner.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        self.handle_empty_response(response).await
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED | StatusCode::NO_CONTENT => Ok(()),
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(status, &text))
            }
        }
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
                response.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(status, &text))
            }
        }
    }
}

// Global API client instance
static API_CLIENT: std::sync::OnceLock<ApiClient> = std::sync::OnceLock::new();

pub fn init_api_client(base_url: &str) {
    let _ = API_CLIENT.set(ApiClient::new(base_url));
}

/// The shared client, built from the installed configuration on first use.
pub fn api_client() -> &'static ApiClient {
    API_CLIENT.get_or_init(|| ApiClient::new(&crate::config::app_config().api_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_with_field_errors_is_rejected() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"non_field_errors": ["Link expired"]}"#);
        assert_eq!(
            err,
            ApiError::Rejected(FieldErrors { non_field_errors: vec!["Link expired".to_string()] })
        );
        assert_eq!(err.user_message(), "Link expired");
    }

    #[test]
    fn test_bad_request_without_field_errors_is_server_error() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"email": ["taken"]}"#);
        assert!(matches!(err, ApiError::Server(_)));

        let err = ApiError::from_status(StatusCode::BAD_REQUEST, "not json");
        assert!(matches!(err, ApiError::Server(_)));
    }

    #[test]
    fn test_field_errors_win_over_status_code() {
        let body = r#"{"non_field_errors": ["Link expired"]}"#;
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN, StatusCode::NOT_FOUND, StatusCode::GONE] {
            let err = ApiError::from_status(status, body);
            assert!(matches!(err, ApiError::Rejected(_)), "{} was not a rejection", status);
            assert_eq!(err.user_message(), "Link expired");
        }
    }

    #[test]
    fn test_empty_field_errors_fall_back_to_status() {
        let body = r#"{"non_field_errors": []}"#;
        assert_eq!(ApiError::from_status(StatusCode::FORBIDDEN, body), ApiError::Forbidden);
        assert!(matches!(ApiError::from_status(StatusCode::BAD_REQUEST, body), ApiError::Server(_)));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(StatusCode::UNAUTHORIZED, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(StatusCode::FORBIDDEN, ""), ApiError::Forbidden);
        assert_eq!(
            ApiError::from_status(StatusCode::NOT_FOUND, "gone"),
            ApiError::NotFound("gone".to_string())
        );
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::Server(_)
        ));
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        assert_eq!(ApiError::Unauthorized.user_message(), "Authentication required");
        assert_eq!(
            ApiError::Rejected(FieldErrors::default()).user_message(),
            "Request rejected: "
        );
    }

    #[test]
    fn test_token_round_trip_and_base_url_trim() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/api/users/1/"), "http://localhost:8000/api/users/1/");
        assert_eq!(client.get_token(), None);
        client.set_token(Some("abc".to_string()));
        assert_eq!(client.get_token(), Some("abc".to_string()));
        client.set_token(None);
        assert_eq!(client.get_token(), None);
    }
}
