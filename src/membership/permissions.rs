use serde::{Deserialize, Deserializer, Serialize};

use crate::membership::{AccessLevel, AccessTable, UserId};

/// The raw `canView` / `canEdit` lists attached to a star, album or document. The server does
/// not keep these consistent with each other: duplicates happen, and an id may show up in
/// `canEdit` without being in `canView`. Nothing here assumes otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default, deserialize_with = "null_as_empty")]
    can_view: Vec<UserId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    can_edit: Vec<UserId>,
}

impl Permissions {
    pub fn access_table(&self) -> AccessTable {
        AccessTable::from_permissions(self)
    }

    pub fn can_edit(&self) -> &[UserId] {
        &self.can_edit
    }

    pub fn can_view(&self) -> &[UserId] {
        &self.can_view
    }

    /// Adds a grant for `user_id`. Edit grants are recorded in both lists so older clients that
    /// only look at `canView` still list the member.
    pub fn grant(&mut self, user_id: UserId, level: AccessLevel) {
        if level == AccessLevel::Edit && !self.can_edit.contains(&user_id) {
            self.can_edit.push(user_id.clone());
        }

        if !self.can_view.contains(&user_id) {
            self.can_view.push(user_id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.can_view.is_empty() && self.can_edit.is_empty()
    }

    pub fn mentions(&self, user_id: &UserId) -> bool {
        self.can_view.contains(user_id) || self.can_edit.contains(user_id)
    }

    pub fn new(can_view: Vec<UserId>, can_edit: Vec<UserId>) -> Self {
        Self { can_view, can_edit }
    }

    /// Drops the edit grant for `user_id` while leaving any view grant alone. A user that was
    /// only ever in `canEdit` gets moved to `canView` so they remain a member.
    pub fn restrict_to_view(&mut self, user_id: &UserId) {
        let had_edit = self.can_edit.contains(user_id);
        self.can_edit.retain(|id| id != user_id);

        if had_edit && !self.can_view.contains(user_id) {
            self.can_view.push(user_id.clone());
        }
    }

    /// Removes every occurrence of `user_id` from both lists.
    pub fn revoke(&mut self, user_id: &UserId) {
        self.can_view.retain(|id| id != user_id);
        self.can_edit.retain(|id| id != user_id);
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Option::<Vec<UserId>>::deserialize(deserializer)?;
    Ok(ids.unwrap_or_default())
}
