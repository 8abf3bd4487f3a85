use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::membership::{Access, AccessTable, Permissions, UserId};

/// Opaque identifier of a star, album or document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(val: &str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(val: String) -> Self {
        Self(val)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Star,
    PhotoAlbum,
    VideoAlbum,
    AudioAlbum,
    Document,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Star => f.write_str("star"),
            ResourceKind::PhotoAlbum => f.write_str("photo_album"),
            ResourceKind::VideoAlbum => f.write_str("video_album"),
            ResourceKind::AudioAlbum => f.write_str("audio_album"),
            ResourceKind::Document => f.write_str("document"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "star" => Ok(ResourceKind::Star),
            "photo_album" => Ok(ResourceKind::PhotoAlbum),
            "video_album" => Ok(ResourceKind::VideoAlbum),
            "audio_album" => Ok(ResourceKind::AudioAlbum),
            "document" => Ok(ResourceKind::Document),
            other => Err(format!("unknown resource kind: {other}")),
        }
    }
}

/// Full access summary for one user, including the implicit owner grant which the raw
/// permission lists never carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResourceAccess {
    None,
    View,
    Edit,
    Owner,
}

/// A star, photo album, video album, audio album or document. For access purposes they are all
/// the same shape: an owner and two permission lists.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    id: ResourceId,
    kind: ResourceKind,
    owner_id: UserId,

    #[serde(flatten)]
    permissions: Permissions,
}

impl Resource {
    pub fn access_for(&self, user_id: &UserId) -> ResourceAccess {
        if self.is_owner(user_id) {
            return ResourceAccess::Owner;
        }

        match self.classify(user_id) {
            Access::Edit => ResourceAccess::Edit,
            Access::View => ResourceAccess::View,
            Access::NotAMember => ResourceAccess::None,
        }
    }

    pub fn access_table(&self) -> AccessTable {
        self.permissions.access_table()
    }

    pub fn can_edit(&self, user_id: &UserId) -> bool {
        self.is_owner(user_id) || self.permissions.can_edit().contains(user_id)
    }

    /// Classifies `user_id` against the permission lists only. The owner is not a list member
    /// unless the server also put them in one of the lists.
    pub fn classify(&self, user_id: &UserId) -> Access {
        crate::membership::classify(
            user_id,
            self.permissions.can_view(),
            self.permissions.can_edit(),
        )
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn is_accessible_to(&self, user_id: &UserId) -> bool {
        self.is_owner(user_id) || self.permissions.mentions(user_id)
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn new(
        id: impl Into<ResourceId>,
        kind: ResourceKind,
        owner_id: impl Into<UserId>,
        permissions: Permissions,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            owner_id: owner_id.into(),
            permissions,
        }
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut Permissions {
        &mut self.permissions
    }

    pub fn reference(&self) -> ResourceRef {
        ResourceRef {
            kind: self.kind,
            id: self.id.clone(),
            parent_id: None,
        }
    }
}

/// Enough information to fetch a resource from wherever it lives. Documents are nested under
/// their star so they also need the parent star's id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: ResourceId,
    pub parent_id: Option<ResourceId>,
}

impl ResourceRef {
    pub fn document(star_id: impl Into<ResourceId>, document_id: impl Into<ResourceId>) -> Self {
        Self {
            kind: ResourceKind::Document,
            id: document_id.into(),
            parent_id: Some(star_id.into()),
        }
    }

    pub fn new(kind: ResourceKind, id: impl Into<ResourceId>) -> Self {
        Self {
            kind,
            id: id.into(),
            parent_id: None,
        }
    }
}

impl Display for ResourceRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.parent_id {
            Some(parent) => write!(f, "{}:{}/{}", self.kind, parent, self.id),
            None => write!(f, "{}:{}", self.kind, self.id),
        }
    }
}

impl std::str::FromStr for ResourceRef {
    type Err = String;

    /// Parses the `kind:id` form produced by `Display`, with `document:star_id/document_id` for
    /// documents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <kind>:<id>, got {s}"))?;
        let kind: ResourceKind = kind.parse()?;

        if rest.is_empty() {
            return Err(format!("missing id in {s}"));
        }

        match (kind, rest.split_once('/')) {
            (ResourceKind::Document, Some((star_id, document_id)))
                if !star_id.is_empty() && !document_id.is_empty() =>
            {
                Ok(ResourceRef::document(star_id, document_id))
            }
            (ResourceKind::Document, _) => Err(format!("expected document:<star>/<id>, got {s}")),
            (_, Some(_)) => Err(format!("only documents take a parent id, got {s}")),
            (kind, None) => Ok(ResourceRef::new(kind, rest)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<UserId> {
        raw.iter().map(|id| UserId::from(*id)).collect()
    }

    fn scenario_star() -> Resource {
        let permissions = Permissions::new(ids(&["u2", "u3"]), ids(&["u3"]));
        Resource::new("s1", ResourceKind::Star, "u1", permissions)
    }

    #[test]
    fn test_owner_has_implicit_access() {
        let resource = Resource::new("s1", ResourceKind::Star, "u1", Permissions::default());

        assert!(resource.is_accessible_to(&"u1".into()));
        assert!(resource.can_edit(&"u1".into()));
        assert_eq!(resource.access_for(&"u1".into()), ResourceAccess::Owner);
        assert_eq!(resource.classify(&"u1".into()), Access::NotAMember);
    }

    #[test]
    fn test_access_for_members() {
        let resource = scenario_star();

        assert_eq!(resource.access_for(&"u2".into()), ResourceAccess::View);
        assert_eq!(resource.access_for(&"u3".into()), ResourceAccess::Edit);
        assert_eq!(resource.access_for(&"u9".into()), ResourceAccess::None);

        assert!(!resource.can_edit(&"u2".into()));
        assert!(resource.can_edit(&"u3".into()));
        assert!(!resource.is_accessible_to(&"u9".into()));
    }

    #[test]
    fn test_deserialize_flattened_permissions() {
        let raw = r#"{
            "id": "a1",
            "kind": "photo_album",
            "ownerId": "u1",
            "canView": ["u2"],
            "canEdit": null
        }"#;

        let resource: Resource = serde_json::from_str(raw).unwrap();
        assert_eq!(resource.kind(), ResourceKind::PhotoAlbum);
        assert_eq!(resource.owner_id(), &UserId::from("u1"));
        assert_eq!(resource.permissions().can_view(), ids(&["u2"]).as_slice());
        assert!(resource.permissions().can_edit().is_empty());
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [
            ResourceKind::Star,
            ResourceKind::PhotoAlbum,
            ResourceKind::VideoAlbum,
            ResourceKind::AudioAlbum,
            ResourceKind::Document,
        ] {
            let parsed: ResourceKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }

        assert!("galaxy".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_reference_display() {
        assert_eq!(
            ResourceRef::new(ResourceKind::Star, "s1").to_string(),
            "star:s1"
        );
        assert_eq!(ResourceRef::document("s1", "d4").to_string(), "document:s1/d4");
    }

    #[test]
    fn test_reference_parsing() {
        let star: ResourceRef = "star:s1".parse().unwrap();
        assert_eq!(star, ResourceRef::new(ResourceKind::Star, "s1"));

        let document: ResourceRef = "document:s1/d4".parse().unwrap();
        assert_eq!(document, ResourceRef::document("s1", "d4"));

        for bad in ["s1", "star:", "document:d4", "document:/d4", "star:s1/x", "moon:m1"] {
            assert!(bad.parse::<ResourceRef>().is_err(), "{bad}");
        }
    }
}
