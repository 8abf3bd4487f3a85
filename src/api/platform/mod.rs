pub mod albums;
pub mod documents;
pub mod stars;
pub mod users;

mod models;

pub use models::{AlbumKind, ApiResource, ApiUser};
