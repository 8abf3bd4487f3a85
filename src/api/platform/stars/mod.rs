mod get_request;

use get_request::GetRequest;

use crate::api::client::{ApiClient, ApiError};
use crate::membership::{Resource, ResourceKind};

pub async fn get(client: &ApiClient, star_id: &str) -> Result<Resource, ApiError> {
    let star = client.request_full(GetRequest::new(star_id.into())).await?;
    Ok(star.into_resource(ResourceKind::Star))
}
