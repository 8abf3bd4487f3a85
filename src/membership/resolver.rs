use futures::future::join_all;

use crate::membership::{
    AccessLevel, LookupError, MembershipRecord, Permissions, Resource, ResourceRef,
    ResourceSource, UserId, UsernameLookup,
};

/// Turns a resource's permission lists into the ordered member list shown on the "Members"
/// screens of stars, albums and documents.
///
/// The resolver keeps no state between calls. Dropping a resolution future part way through is
/// always safe: nothing is written back anywhere and the in-flight lookups simply stop being
/// polled.
#[derive(Clone, Debug)]
pub struct MemberResolver<L> {
    lookup: L,
}

impl<L: UsernameLookup> MemberResolver<L> {
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolves every member of `resource`. One username lookup is issued per unique member
    /// and all of them run concurrently. A failed lookup still produces a record, carrying
    /// [`UNKNOWN_USERNAME`](crate::membership::UNKNOWN_USERNAME) as the display name.
    pub async fn resolve_members(&self, resource: &Resource) -> Vec<MembershipRecord> {
        tracing::debug!(
            resource_id = %resource.id(),
            kind = %resource.kind(),
            "resolve_members"
        );

        self.resolve_permissions(resource.permissions()).await
    }

    /// Same as [`MemberResolver::resolve_members`] for bare permission lists.
    pub async fn resolve_permissions(&self, permissions: &Permissions) -> Vec<MembershipRecord> {
        let table = permissions.access_table();

        let pending = table
            .members()
            .map(|(user_id, level)| self.resolve_one(user_id.clone(), level));

        let records = join_all(pending).await;

        let unresolved = records.iter().filter(|r| !r.is_resolved()).count();
        tracing::debug!(
            member_count = records.len(),
            unresolved,
            "resolve_permissions::complete"
        );

        records
    }

    /// Fetches the resource behind `reference` and resolves its members. Unlike username
    /// failures a fetch failure is returned, there is no member list to show without it.
    pub async fn resolve_from_source<S: ResourceSource>(
        &self,
        source: &S,
        reference: &ResourceRef,
    ) -> Result<Vec<MembershipRecord>, MembershipError> {
        let resource = source.fetch_resource(reference).await.map_err(|err| {
            tracing::error!(%reference, "failed to fetch resource: {err}");
            MembershipError::ResourceUnavailable {
                resource: reference.to_string(),
                source: err,
            }
        })?;

        Ok(self.resolve_members(&resource).await)
    }

    async fn resolve_one(&self, user_id: UserId, level: AccessLevel) -> MembershipRecord {
        match self.lookup.get_username(&user_id).await {
            Ok(username) => MembershipRecord::new(user_id, username, level),
            Err(err) => {
                tracing::warn!(%user_id, "username lookup failed: {err}");
                MembershipRecord::unresolved(user_id, level)
            }
        }
    }
}

/// Resolves the members of `resource` with a one-off lookup.
pub async fn resolve_members<L: UsernameLookup>(
    lookup: &L,
    resource: &Resource,
) -> Vec<MembershipRecord> {
    MemberResolver::new(lookup).resolve_members(resource).await
}

#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("unable to load {resource}: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: LookupError,
    },
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Barrier;

    use super::*;
    use crate::membership::{
        MemoryResourceSource, MemoryUsernameLookup, ResourceKind, UNKNOWN_USERNAME,
    };

    fn ids(raw: &[&str]) -> Vec<UserId> {
        raw.iter().map(|id| UserId::from(*id)).collect()
    }

    fn scenario_star() -> Resource {
        let permissions = Permissions::new(ids(&["u2", "u3"]), ids(&["u3"]));
        Resource::new("s1", ResourceKind::Star, "u1", permissions)
    }

    fn known_users() -> MemoryUsernameLookup {
        [("u1", "owner"), ("u2", "ada"), ("u3", "grace"), ("u4", "linus")]
            .into_iter()
            .collect()
    }

    /// Counts calls so tests can check how many lookups a resolution issued.
    struct CountingLookup {
        inner: MemoryUsernameLookup,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl UsernameLookup for CountingLookup {
        async fn get_username(&self, user_id: &UserId) -> Result<String, LookupError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.get_username(user_id).await
        }
    }

    /// Only completes once `expected` lookups are waiting at the same time.
    struct RendezvousLookup {
        barrier: Barrier,
    }

    #[async_trait(?Send)]
    impl UsernameLookup for RendezvousLookup {
        async fn get_username(&self, user_id: &UserId) -> Result<String, LookupError> {
            self.barrier.wait().await;
            Ok(format!("name-{user_id}"))
        }
    }

    #[tokio::test]
    async fn test_scenario_members() {
        let resolver = MemberResolver::new(known_users());
        let records = resolver.resolve_members(&scenario_star()).await;

        assert_eq!(
            records,
            vec![
                MembershipRecord::new("u2".into(), "ada", AccessLevel::View),
                MembershipRecord::new("u3".into(), "grace", AccessLevel::Edit),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_member() {
        let lookup: MemoryUsernameLookup = [("u3", "grace")].into_iter().collect();
        let records = resolve_members(&lookup, &scenario_star()).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_id, UserId::from("u2"));
        assert_eq!(records[0].username, UNKNOWN_USERNAME);
        assert!(!records[0].is_resolved());
        assert_eq!(records[1].username, "grace");

        let sentinel_count = records.iter().filter(|r| !r.is_resolved()).count();
        assert_eq!(sentinel_count, 1);
    }

    #[tokio::test]
    async fn test_duplicates_resolve_once() {
        let permissions =
            Permissions::new(ids(&["u2", "u3", "u2", "u4"]), ids(&["u3", "u4", "u3"]));
        let resource = Resource::new("a1", ResourceKind::PhotoAlbum, "u1", permissions);

        let lookup = CountingLookup {
            inner: known_users(),
            calls: Cell::new(0),
        };
        let resolver = MemberResolver::new(lookup);
        let records = resolver.resolve_members(&resource).await;

        assert_eq!(records.len(), 3);
        assert_eq!(resolver.lookup().calls.get(), 3);

        let levels: Vec<AccessLevel> = records.iter().map(|r| r.access_level).collect();
        assert_eq!(
            levels,
            vec![AccessLevel::View, AccessLevel::Edit, AccessLevel::Edit]
        );
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let resolver = MemberResolver::new(known_users());
        let resource = scenario_star();

        let first = resolver.resolve_members(&resource).await;
        let second = resolver.resolve_members(&resource).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_owner_and_outsiders_are_not_listed() {
        let permissions = Permissions::new(ids(&["u2"]), ids(&[]));
        let resource = Resource::new("s1", ResourceKind::Star, "u1", permissions);

        let records = resolve_members(&known_users(), &resource).await;
        let listed: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(listed, vec!["u2"]);
    }

    #[tokio::test]
    async fn test_edit_only_member_is_listed() {
        let permissions = Permissions::new(ids(&["u2"]), ids(&["u4"]));
        let resource = Resource::new("v1", ResourceKind::VideoAlbum, "u1", permissions);

        let records = resolve_members(&known_users(), &resource).await;
        assert_eq!(
            records[1],
            MembershipRecord::new("u4".into(), "linus", AccessLevel::Edit)
        );
    }

    #[tokio::test]
    async fn test_empty_resource_has_no_members() {
        let resource = Resource::new("s1", ResourceKind::Star, "u1", Permissions::default());
        assert!(resolve_members(&known_users(), &resource).await.is_empty());
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently() {
        let permissions = Permissions::new(ids(&["u2", "u3", "u4"]), ids(&["u5"]));
        let resource = Resource::new("s1", ResourceKind::Star, "u1", permissions);

        let lookup = RendezvousLookup {
            barrier: Barrier::new(4),
        };
        let resolver = MemberResolver::new(lookup);

        // Sequential lookups would never get all four callers to the barrier at once
        let records = tokio::time::timeout(
            Duration::from_secs(5),
            resolver.resolve_members(&resource),
        )
        .await
        .expect("lookups should be issued together");

        assert_eq!(records.len(), 4);
        assert_eq!(records[3].username, "name-u5");
    }

    #[tokio::test]
    async fn test_resolve_from_source() {
        let mut source = MemoryResourceSource::new();
        source.insert(scenario_star());

        let resolver = MemberResolver::new(known_users());
        let records = resolver
            .resolve_from_source(&source, &ResourceRef::new(ResourceKind::Star, "s1"))
            .await
            .unwrap();
        assert_eq!(records.len(), 2);

        let err = resolver
            .resolve_from_source(&source, &ResourceRef::new(ResourceKind::Star, "missing"))
            .await
            .unwrap_err();

        let MembershipError::ResourceUnavailable { resource, source } = err;
        assert_eq!(resource, "star:missing");
        assert_eq!(source, LookupError::NotFound("star:missing".to_string()));
    }
}
