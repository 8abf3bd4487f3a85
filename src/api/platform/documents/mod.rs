mod get_request;

use get_request::GetRequest;

use crate::api::client::{ApiClient, ApiError};
use crate::membership::{Resource, ResourceKind};

/// Documents live under the star they were attached to.
pub async fn get(
    client: &ApiClient,
    star_id: &str,
    document_id: &str,
) -> Result<Resource, ApiError> {
    let request = GetRequest::new(star_id.into(), document_id.into());
    let document = client.request_full(request).await?;
    Ok(document.into_resource(ResourceKind::Document))
}
