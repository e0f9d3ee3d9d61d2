pub mod client;
pub mod delegates;
pub mod oauth;
pub mod users;

pub use client::*;

use async_trait::async_trait;

use crate::models::{DelegateUpdate, TwitterRequestToken, User, UserUpdate};

/// The backend calls the activation page depends on.
///
/// Futures are not `Send`: in the browser everything runs on the UI thread.
#[async_trait(?Send)]
pub trait WebService {
    async fn validate_token(&self, uidb64: &str, token: &str) -> Result<User, ApiError>;
    async fn modify_user(&self, update: &UserUpdate, user_id: i64) -> Result<(), ApiError>;
    async fn modify_delegate(&self, update: &DelegateUpdate, delegate_id: i64) -> Result<(), ApiError>;
    async fn twitter_request_token(&self) -> Result<TwitterRequestToken, ApiError>;
}

#[async_trait(?Send)]
impl WebService for ApiClient {
    async fn validate_token(&self, uidb64: &str, token: &str) -> Result<User, ApiError> {
        users::validate_token(self, uidb64, token).await
    }

    async fn modify_user(&self, update: &UserUpdate, user_id: i64) -> Result<(), ApiError> {
        users::modify_user(self, update, user_id).await
    }

    async fn modify_delegate(&self, update: &DelegateUpdate, delegate_id: i64) -> Result<(), ApiError> {
        delegates::modify_delegate(self, update, delegate_id).await
    }

    async fn twitter_request_token(&self) -> Result<TwitterRequestToken, ApiError> {
        oauth::twitter_request_token(self).await
    }
}
