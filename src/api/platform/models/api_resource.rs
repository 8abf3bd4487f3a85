use serde::{Deserialize, Serialize};

use crate::membership::{Permissions, Resource, ResourceKind};

/// Detail payload shared by stars, albums and documents. The server sends a lot more than this
/// (media URLs, descriptions, coordinates in the starfield) which is ignored here.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "RawApiResource")]
pub struct ApiResource {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "ownerId")]
    pub owner_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub permissions: Permissions,
}

/// Every spelling the endpoints have used for the id, owner and name. Payloads may carry more
/// than one of them at once, so each is its own field and the first present one wins.
#[derive(Deserialize)]
struct RawApiResource {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,

    #[serde(rename = "ownerId")]
    owner_id: Option<String>,
    owner: Option<String>,
    #[serde(rename = "userId")]
    user_id: Option<String>,

    name: Option<String>,
    title: Option<String>,

    #[serde(flatten)]
    permissions: Permissions,
}

impl TryFrom<RawApiResource> for ApiResource {
    type Error = &'static str;

    fn try_from(raw: RawApiResource) -> Result<Self, Self::Error> {
        let id = raw.mongo_id.or(raw.id).ok_or("resource payload has no `_id` or `id`")?;
        let owner_id = raw
            .owner_id
            .or(raw.owner)
            .or(raw.user_id)
            .ok_or("resource payload has no `ownerId`, `owner` or `userId`")?;

        Ok(ApiResource {
            id,
            owner_id,
            name: raw.name.or(raw.title),
            permissions: raw.permissions,
        })
    }
}

impl ApiResource {
    pub fn into_resource(self, kind: ResourceKind) -> Resource {
        Resource::new(self.id, kind, self.owner_id, self.permissions)
    }
}
