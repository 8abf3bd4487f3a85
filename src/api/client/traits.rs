use reqwest::Method;
use serde::de::DeserializeOwned;

pub(crate) trait ApiRequest {
    type Response: DeserializeOwned;

    const METHOD: Method = Method::GET;

    /// Path below the client's base URL, one entry per segment. Entries are percent-encoded
    /// when the URL is built, so an id containing `/`, `?` or `#` stays a single segment.
    fn path_segments(&self) -> Vec<&str>;

    fn requires_auth(&self) -> bool {
        true
    }
}
