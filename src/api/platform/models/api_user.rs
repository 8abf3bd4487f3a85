use serde::{Deserialize, Serialize};

/// The subset of a `/users/{id}` response the client cares about.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(from = "RawApiUser")]
pub struct ApiUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub username: String,
}

// Documents serialized with virtuals carry the id twice, as `_id` and as `id`.
#[derive(Deserialize)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
struct RawApiUser {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    username: String,
}

impl From<RawApiUser> for ApiUser {
    fn from(raw: RawApiUser) -> Self {
        ApiUser {
            id: raw.mongo_id.or(raw.id),
            username: raw.username,
        }
    }
}
