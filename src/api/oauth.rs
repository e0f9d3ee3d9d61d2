use super::client::{ApiClient, ApiError};
use crate::models::TwitterRequestToken;

pub async fn twitter_request_token(client: &ApiClient) -> Result<TwitterRequestToken, ApiError> {
    client.get::<TwitterRequestToken>("/api/twitter/request_token/").await
}
