//! Membership and access resolution shared by every "who can see or edit this" view.
//!
//! Stars, photo albums, video albums, audio albums and documents all carry an owner and a pair
//! of `canView` / `canEdit` lists. Everything in this module is derived from those lists plus
//! explicitly passed user identifiers; nothing reads a global "current user" and nothing is
//! cached between calls.

mod access;
mod common;
mod identity_set;
mod lookup;
mod permissions;
mod record;
mod resolver;
mod resource;
mod user_id;

pub use access::{classify, Access, AccessLevel, AccessTable};
pub use common::{accessible_resources, common_resources, common_resources_of_kind};
pub use identity_set::unique_identifiers;
pub use lookup::{
    LookupError, MemoryResourceSource, MemoryUsernameLookup, ResourceSource, UsernameLookup,
};
pub use permissions::Permissions;
pub use record::{MembershipRecord, UNKNOWN_USERNAME};
pub use resolver::{resolve_members, MemberResolver, MembershipError};
pub use resource::{Resource, ResourceAccess, ResourceId, ResourceKind, ResourceRef};
pub use user_id::UserId;
