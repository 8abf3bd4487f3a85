mod album_kind;
mod api_resource;
mod api_user;

pub use album_kind::AlbumKind;
pub use api_resource::ApiResource;
pub use api_user::ApiUser;
