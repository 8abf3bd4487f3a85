//! This module contains an HTTP client for the Astorya REST API along with implementations of
//! the membership lookup capabilities backed by it. The client accepts a custom base URL so
//! staging and self-hosted deployments work the same way.

pub mod platform;

pub(crate) mod client;

mod lookup;

pub use client::{ApiClient, ApiClientError, ApiConfig, ApiError, DEFAULT_TIMEOUT};
pub use lookup::{ApiResourceSource, ApiUsernameLookup};
