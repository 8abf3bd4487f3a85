use crate::api::client::ApiRequest;
use crate::api::platform::ApiUser;

#[derive(Debug)]
pub(crate) struct GetRequest {
    user_id: String,
}

impl GetRequest {
    pub(crate) fn new(user_id: String) -> Self {
        GetRequest { user_id }
    }
}

impl ApiRequest for GetRequest {
    type Response = ApiUser;

    fn path_segments(&self) -> Vec<&str> {
        vec!["users", self.user_id.as_str()]
    }
}
