use std::fmt::{self, Debug, Formatter};

use reqwest::RequestBuilder;

/// Session token issued by the Astorya auth endpoints. Passed in by the caller, the client never
/// signs anyone in on its own.
#[derive(Clone)]
pub(crate) struct ApiAuth {
    token: String,
}

impl ApiAuth {
    pub(crate) fn apply(&self, request_builder: RequestBuilder) -> RequestBuilder {
        request_builder.bearer_auth(&self.token)
    }

    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Debug for ApiAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("ApiAuth(<redacted>)")
    }
}
