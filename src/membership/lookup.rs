use std::collections::HashMap;

use async_trait::async_trait;

use crate::membership::{Resource, ResourceRef, UserId};

/// Source of display names for user identifiers. Implementations own their own timeouts and
/// retries; the resolver only cares whether a name came back.
#[async_trait(?Send)]
pub trait UsernameLookup {
    /// Returns the display handle for `user_id`. A missing account, an unreachable backend and
    /// a timeout are all reported as errors and handled identically by callers.
    async fn get_username(&self, user_id: &UserId) -> Result<String, LookupError>;
}

/// Source of full resource records (owner plus permission lists).
#[async_trait(?Send)]
pub trait ResourceSource {
    async fn fetch_resource(&self, reference: &ResourceRef) -> Result<Resource, LookupError>;
}

#[async_trait(?Send)]
impl<T: UsernameLookup + ?Sized> UsernameLookup for &T {
    async fn get_username(&self, user_id: &UserId) -> Result<String, LookupError> {
        (**self).get_username(user_id).await
    }
}

#[async_trait(?Send)]
impl<T: ResourceSource + ?Sized> ResourceSource for &T {
    async fn fetch_resource(&self, reference: &ResourceRef) -> Result<Resource, LookupError> {
        (**self).fetch_resource(reference).await
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no record found for {0}")]
    NotFound(String),

    #[error("lookup did not complete in time")]
    TimedOut,

    #[error("lookup backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Debug, Default)]
pub struct MemoryUsernameLookup {
    usernames: HashMap<UserId, String>,
}

impl MemoryUsernameLookup {
    pub fn insert(&mut self, user_id: impl Into<UserId>, username: impl Into<String>) {
        self.usernames.insert(user_id.into(), username.into());
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl<U: Into<UserId>, N: Into<String>> FromIterator<(U, N)> for MemoryUsernameLookup {
    fn from_iter<I: IntoIterator<Item = (U, N)>>(iter: I) -> Self {
        let usernames = iter
            .into_iter()
            .map(|(id, name)| (id.into(), name.into()))
            .collect();

        Self { usernames }
    }
}

#[async_trait(?Send)]
impl UsernameLookup for MemoryUsernameLookup {
    async fn get_username(&self, user_id: &UserId) -> Result<String, LookupError> {
        self.usernames
            .get(user_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(user_id.to_string()))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryResourceSource {
    resources: HashMap<ResourceRef, Resource>,
}

impl MemoryResourceSource {
    /// Stores `resource` under its top level reference. Documents should go through
    /// [`MemoryResourceSource::insert_at`] so they can be found under their star.
    pub fn insert(&mut self, resource: Resource) {
        self.resources.insert(resource.reference(), resource);
    }

    pub fn insert_at(&mut self, reference: ResourceRef, resource: Resource) {
        self.resources.insert(reference, resource);
    }

    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl ResourceSource for MemoryResourceSource {
    async fn fetch_resource(&self, reference: &ResourceRef) -> Result<Resource, LookupError> {
        self.resources
            .get(reference)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(reference.to_string()))
    }
}
