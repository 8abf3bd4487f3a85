mod api_auth;
mod config;
mod error;
mod traits;

pub use config::{ApiConfig, DEFAULT_TIMEOUT};
pub use error::ApiClientError;
pub(crate) use traits::ApiRequest;

use std::time::Duration;

use api_auth::ApiAuth;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as RClient, StatusCode, Url};
use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct ApiClient {
    auth: Option<ApiAuth>,
    base_url: Url,
    client: RClient,
}

impl ApiClient {
    pub fn anonymous(base_url: &str) -> Result<Self, ApiClientError> {
        Self::from_config(&ApiConfig::new(base_url))
    }

    pub fn authenticated(base_url: &str, token: &str) -> Result<Self, ApiClientError> {
        Self::from_config(&ApiConfig::new(base_url).with_token(token))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiClientError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let auth = config.token.as_deref().map(ApiAuth::new);
        let client = default_reqwest_client(config.timeout)?;

        Ok(Self {
            auth,
            base_url,
            client,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        // The url crate silently drops `.` and `..` when pushing segments.
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ApiError::InvalidPathSegment(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub(crate) async fn request_full<R: ApiRequest>(
        &self,
        request: R,
    ) -> Result<R::Response, ApiError> {
        if request.requires_auth() && self.auth.is_none() {
            return Err(ApiError::RequiresAuth);
        }

        let full_url = self.endpoint_url(&request.path_segments())?;
        tracing::debug!(method = %R::METHOD, url = %full_url, "api_request");

        let mut request_builder = self.client.request(R::METHOD, full_url);
        if let Some(auth) = &self.auth {
            request_builder = auth.apply(request_builder);
        }

        let response = request_builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_body(status, &body);
            tracing::debug!(status_code = status.as_u16(), "api_request::failed: {err}");
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn default_reqwest_client(timeout: Duration) -> Result<RClient, ApiClientError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));

    let user_agent = crate::version::user_agent();

    let client = RClient::builder()
        .default_headers(default_headers)
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Stores the base URL with a trailing slash so a path prefix such as `/api` is displayed and
/// extended consistently. `mailto:`-style URLs have no path to extend and are refused.
fn normalize_base_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API returned {status_code} response with message: {message}")]
    Message { status_code: u16, message: String },

    #[error("API request requires authentication but client is not authenticated")]
    RequiresAuth,

    #[error("Request URL is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("refusing to request a path with segment {0:?}")]
    InvalidPathSegment(String),

    #[error("unable to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    fn from_body(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<RawApiError>(body) {
            Ok(raw) => raw.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };

        ApiError::Message {
            status_code: status.as_u16(),
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Message { status_code, .. } if *status_code == 404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(err) if err.is_timeout())
    }
}

#[derive(Debug, Deserialize)]
pub struct RawApiError {
    #[serde(alias = "msg", alias = "error")]
    pub message: String,
}
