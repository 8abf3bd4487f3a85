mod get_request;

use get_request::GetRequest;

use crate::api::client::{ApiClient, ApiError};
use crate::api::platform::ApiUser;

pub async fn get(client: &ApiClient, user_id: &str) -> Result<ApiUser, ApiError> {
    client.request_full(GetRequest::new(user_id.into())).await
}
