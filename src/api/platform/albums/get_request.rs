use crate::api::client::ApiRequest;
use crate::api::platform::{AlbumKind, ApiResource};

#[derive(Debug)]
pub(crate) struct GetRequest {
    kind: AlbumKind,
    album_id: String,
}

impl GetRequest {
    pub(crate) fn new(kind: AlbumKind, album_id: String) -> Self {
        GetRequest { kind, album_id }
    }
}

impl ApiRequest for GetRequest {
    type Response = ApiResource;

    fn path_segments(&self) -> Vec<&str> {
        vec![self.kind.path_segment(), "detail", self.album_id.as_str()]
    }
}
