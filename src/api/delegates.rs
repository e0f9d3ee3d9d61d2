use super::client::{ApiClient, ApiError};
use crate::models::DelegateUpdate;

pub async fn modify_delegate(client: &ApiClient, update: &DelegateUpdate, delegate_id: i64) -> Result<(), ApiError> {
    client
        .patch_no_response(&format!("/api/delegates/{}/", delegate_id), update)
        .await
}
