use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::membership::{unique_identifiers, Permissions, UserId};

/// The level of access a member holds on a resource. Ordered from least to most access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    View,
    Edit,
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::View => f.write_str("view"),
            AccessLevel::Edit => f.write_str("edit"),
        }
    }
}

/// Outcome of classifying a single identifier against a resource's permission lists.
/// `NotAMember` is an ordinary answer and callers must not render such an identifier as a
/// member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    NotAMember,
    View,
    Edit,
}

impl Access {
    pub fn is_member(&self) -> bool {
        !matches!(self, Access::NotAMember)
    }

    pub fn level(&self) -> Option<AccessLevel> {
        match self {
            Access::NotAMember => None,
            Access::View => Some(AccessLevel::View),
            Access::Edit => Some(AccessLevel::Edit),
        }
    }
}

impl From<AccessLevel> for Access {
    fn from(level: AccessLevel) -> Self {
        match level {
            AccessLevel::View => Access::View,
            AccessLevel::Edit => Access::Edit,
        }
    }
}

/// Classifies `user_id` against raw permission lists. Presence in `can_edit` wins over
/// presence in `can_view`; the lists are treated independently so an identifier that only
/// appears in `can_edit` is still an edit member.
pub fn classify(user_id: &UserId, can_view: &[UserId], can_edit: &[UserId]) -> Access {
    if can_edit.contains(user_id) {
        Access::Edit
    } else if can_view.contains(user_id) {
        Access::View
    } else {
        Access::NotAMember
    }
}

/// Tagged form of a resource's permission lists, built once so repeated questions about the
/// same resource don't have to walk both raw lists again. Keeps the first-occurrence order of
/// `can_view` followed by `can_edit`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessTable {
    order: Vec<UserId>,
    levels: HashMap<UserId, AccessLevel>,
}

impl AccessTable {
    pub fn classify(&self, user_id: &UserId) -> Access {
        self.levels
            .get(user_id)
            .map(|level| Access::from(*level))
            .unwrap_or(Access::NotAMember)
    }

    pub fn from_permissions(permissions: &Permissions) -> Self {
        let can_view = permissions.can_view();
        let can_edit = permissions.can_edit();

        let order = unique_identifiers([can_view, can_edit]);
        let editors: HashSet<&UserId> = can_edit.iter().collect();

        // Every id came from one of the two lists, so anyone who is not an editor can view.
        let levels = order
            .iter()
            .map(|id| {
                let level = if editors.contains(id) {
                    AccessLevel::Edit
                } else {
                    AccessLevel::View
                };
                (id.clone(), level)
            })
            .collect();

        Self { order, levels }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Members in a stable order paired with their access level.
    pub fn members(&self) -> impl Iterator<Item = (&UserId, AccessLevel)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.levels.get(id).map(|level| (id, *level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<UserId> {
        raw.iter().map(|id| UserId::from(*id)).collect()
    }

    #[test]
    fn test_access_level_ordering() {
        assert!(AccessLevel::Edit > AccessLevel::View);

        let mut levels = vec![AccessLevel::Edit, AccessLevel::View, AccessLevel::Edit];
        levels.sort();
        assert_eq!(
            levels,
            vec![AccessLevel::View, AccessLevel::Edit, AccessLevel::Edit]
        );
    }

    #[test]
    fn test_access_level_wire_format() {
        let encoded = serde_json::to_string(&AccessLevel::Edit).unwrap();
        assert_eq!(encoded, "\"edit\"");

        let decoded: AccessLevel = serde_json::from_str("\"view\"").unwrap();
        assert_eq!(decoded, AccessLevel::View);
    }

    #[test]
    fn test_classify_precedence() {
        let can_view = ids(&["u2", "u3"]);
        let can_edit = ids(&["u3"]);

        assert_eq!(classify(&"u3".into(), &can_view, &can_edit), Access::Edit);
        assert_eq!(classify(&"u2".into(), &can_view, &can_edit), Access::View);
        assert_eq!(
            classify(&"u9".into(), &can_view, &can_edit),
            Access::NotAMember
        );
    }

    #[test]
    fn test_classify_edit_without_view() {
        let can_view = ids(&["u2"]);
        let can_edit = ids(&["u5"]);

        let access = classify(&"u5".into(), &can_view, &can_edit);
        assert_eq!(access, Access::Edit);
        assert!(access.is_member());
    }

    #[test]
    fn test_not_a_member_has_no_level() {
        assert_eq!(Access::NotAMember.level(), None);
        assert!(!Access::NotAMember.is_member());
        assert_eq!(Access::View.level(), Some(AccessLevel::View));
    }

    #[test]
    fn test_table_matches_classify() {
        let permissions = Permissions::new(ids(&["u2", "u3", "u2", "u7"]), ids(&["u3", "u4"]));
        let table = AccessTable::from_permissions(&permissions);

        assert_eq!(table.len(), 4);
        for id in ["u2", "u3", "u4", "u7", "u9"] {
            let id = UserId::from(id);
            assert_eq!(
                table.classify(&id),
                classify(&id, permissions.can_view(), permissions.can_edit())
            );
        }

        let members: Vec<(&str, AccessLevel)> = table
            .members()
            .map(|(id, level)| (id.as_str(), level))
            .collect();

        assert_eq!(
            members,
            vec![
                ("u2", AccessLevel::View),
                ("u3", AccessLevel::Edit),
                ("u7", AccessLevel::View),
                ("u4", AccessLevel::Edit),
            ]
        );
    }

    #[test]
    fn test_large_table_matches_classify() {
        let viewers: Vec<UserId> = (0..2_000).map(|n| UserId::new(format!("u{n}"))).collect();
        let editors: Vec<UserId> = (1_000..3_000)
            .step_by(3)
            .map(|n| UserId::new(format!("u{n}")))
            .collect();
        let permissions = Permissions::new(viewers, editors);
        let table = AccessTable::from_permissions(&permissions);

        // u0..u1999 view, plus the editors u2002, u2005, ..., u2998 that are not viewers
        assert_eq!(table.len(), 2_333);
        for (id, level) in table.members() {
            assert_eq!(
                Access::from(level),
                classify(id, permissions.can_view(), permissions.can_edit())
            );
        }
        assert_eq!(table.classify(&"u1000".into()), Access::Edit);
        assert_eq!(table.classify(&"u1001".into()), Access::View);
        assert_eq!(table.classify(&"u2998".into()), Access::Edit);
        assert_eq!(table.classify(&"u3000".into()), Access::NotAMember);
    }

    #[test]
    fn test_empty_table() {
        let table = AccessTable::from_permissions(&Permissions::default());
        assert!(table.is_empty());
        assert_eq!(table.classify(&"u1".into()), Access::NotAMember);
    }
}
