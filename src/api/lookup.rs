use async_trait::async_trait;

use crate::api::client::{ApiClient, ApiError};
use crate::api::platform::{self, AlbumKind};
use crate::membership::{
    LookupError, Resource, ResourceKind, ResourceRef, ResourceSource, UserId, UsernameLookup,
};

/// Resolves display names through `GET /users/{id}`.
#[derive(Clone, Debug)]
pub struct ApiUsernameLookup {
    client: ApiClient,
}

impl ApiUsernameLookup {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl UsernameLookup for ApiUsernameLookup {
    async fn get_username(&self, user_id: &UserId) -> Result<String, LookupError> {
        let user = platform::users::get(&self.client, user_id.as_str()).await?;
        Ok(user.username)
    }
}

/// Loads stars, albums and documents from their detail endpoints.
#[derive(Clone, Debug)]
pub struct ApiResourceSource {
    client: ApiClient,
}

impl ApiResourceSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ResourceSource for ApiResourceSource {
    async fn fetch_resource(&self, reference: &ResourceRef) -> Result<Resource, LookupError> {
        let id = reference.id.as_str();

        let resource = match reference.kind {
            ResourceKind::Star => platform::stars::get(&self.client, id).await?,
            ResourceKind::Document => {
                let Some(star_id) = &reference.parent_id else {
                    return Err(LookupError::NotFound(format!(
                        "document {id} has no parent star"
                    )));
                };

                platform::documents::get(&self.client, star_id.as_str(), id).await?
            }
            kind => {
                let album_kind = AlbumKind::try_from(kind).map_err(|kind| {
                    LookupError::NotFound(format!("{kind} is not an album kind"))
                })?;

                platform::albums::get(&self.client, album_kind, id).await?
            }
        };

        Ok(resource)
    }
}

impl From<ApiError> for LookupError {
    fn from(err: ApiError) -> Self {
        if err.is_not_found() {
            LookupError::NotFound(err.to_string())
        } else if err.is_timeout() {
            LookupError::TimedOut
        } else {
            LookupError::Unavailable(err.to_string())
        }
    }
}
