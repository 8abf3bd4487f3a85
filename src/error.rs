use std::fmt::{self, Display, Formatter};

use crate::membership::{LookupError, MembershipError};

#[derive(Debug)]
pub struct AstoryaError(pub String);

impl From<&'static str> for AstoryaError {
    fn from(val: &'static str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for AstoryaError {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl Display for AstoryaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for AstoryaError {}

impl From<LookupError> for AstoryaError {
    fn from(error: LookupError) -> Self {
        Self(error.to_string())
    }
}

impl From<MembershipError> for AstoryaError {
    fn from(error: MembershipError) -> Self {
        Self(error.to_string())
    }
}

#[cfg(feature = "astorya-api")]
impl From<crate::api::ApiClientError> for AstoryaError {
    fn from(error: crate::api::ApiClientError) -> Self {
        Self(error.to_string())
    }
}

#[cfg(feature = "astorya-api")]
impl From<crate::api::ApiError> for AstoryaError {
    fn from(error: crate::api::ApiError) -> Self {
        Self(error.to_string())
    }
}

impl From<serde_json::Error> for AstoryaError {
    fn from(error: serde_json::Error) -> Self {
        Self(error.to_string())
    }
}

pub type AstoryaResult<T> = Result<T, AstoryaError>;
