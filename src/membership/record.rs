use serde::Serialize;

use crate::membership::{AccessLevel, UserId};

/// Display name used for a member whose identity couldn't be looked up. The grant still exists
/// so the member is listed rather than dropped.
pub const UNKNOWN_USERNAME: &str = "unknown";

/// One row of a "Members" list. Records are rebuilt on every resolution and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRecord {
    pub user_id: UserId,
    pub username: String,
    pub access_level: AccessLevel,
}

impl MembershipRecord {
    pub fn is_resolved(&self) -> bool {
        self.username != UNKNOWN_USERNAME
    }

    pub fn new(user_id: UserId, username: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            user_id,
            username: username.into(),
            access_level,
        }
    }

    pub fn unresolved(user_id: UserId, access_level: AccessLevel) -> Self {
        Self::new(user_id, UNKNOWN_USERNAME, access_level)
    }
}
