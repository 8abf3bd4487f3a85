use crate::api::client::ApiRequest;
use crate::api::platform::ApiResource;

#[derive(Debug)]
pub(crate) struct GetRequest {
    star_id: String,
}

impl GetRequest {
    pub(crate) fn new(star_id: String) -> Self {
        GetRequest { star_id }
    }
}

impl ApiRequest for GetRequest {
    type Response = ApiResource;

    fn path_segments(&self) -> Vec<&str> {
        vec!["stars", self.star_id.as_str()]
    }
}
