use std::fmt::{Display, Formatter};

use crate::membership::ResourceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlbumKind {
    Photo,
    Video,
    Audio,
}

impl AlbumKind {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            AlbumKind::Photo => "photo-albums",
            AlbumKind::Video => "video-albums",
            AlbumKind::Audio => "audio-albums",
        }
    }

    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            AlbumKind::Photo => ResourceKind::PhotoAlbum,
            AlbumKind::Video => ResourceKind::VideoAlbum,
            AlbumKind::Audio => ResourceKind::AudioAlbum,
        }
    }
}

impl Display for AlbumKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbumKind::Photo => f.write_str("photo"),
            AlbumKind::Video => f.write_str("video"),
            AlbumKind::Audio => f.write_str("audio"),
        }
    }
}

impl TryFrom<ResourceKind> for AlbumKind {
    type Error = ResourceKind;

    fn try_from(kind: ResourceKind) -> Result<Self, Self::Error> {
        match kind {
            ResourceKind::PhotoAlbum => Ok(AlbumKind::Photo),
            ResourceKind::VideoAlbum => Ok(AlbumKind::Video),
            ResourceKind::AudioAlbum => Ok(AlbumKind::Audio),
            other => Err(other),
        }
    }
}
