use super::client::{ApiClient, ApiError};
use crate::models::{User, UserUpdate, ValidateTokenRequest};

/// Checks an activation link. Stores the returned auth token for the follow-up calls.
pub async fn validate_token(client: &ApiClient, uidb64: &str, token: &str) -> Result<User, ApiError> {
    let request = ValidateTokenRequest {
        uidb64: uidb64.to_string(),
        token: token.to_string(),
    };

    let user: User = client
        .post("/api/users/validate_token/", &request)
        .await?;

    if let Some(token) = &user.token {
        client.set_token(Some(token.clone()));
    }

    Ok(user)
}

pub async fn modify_user(client: &ApiClient, update: &UserUpdate, user_id: i64) -> Result<(), ApiError> {
    client
        .patch_no_response(&format!("/api/users/{}/", user_id), update)
        .await
}
