mod get_request;

use get_request::GetRequest;

use crate::api::client::{ApiClient, ApiError};
use crate::api::platform::AlbumKind;
use crate::membership::Resource;

pub async fn get(
    client: &ApiClient,
    kind: AlbumKind,
    album_id: &str,
) -> Result<Resource, ApiError> {
    let album = client
        .request_full(GetRequest::new(kind, album_id.into()))
        .await?;

    Ok(album.into_resource(kind.resource_kind()))
}
