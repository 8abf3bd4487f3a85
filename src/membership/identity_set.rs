use std::collections::HashSet;

use crate::membership::UserId;

/// Merges any number of identifier lists into a single list of unique identifiers. The result
/// keeps the order in which each identifier was first seen so repeated calls over the same
/// input render the same way.
pub fn unique_identifiers<'a, I, L>(lists: I) -> Vec<UserId>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = &'a UserId>,
{
    let mut seen: HashSet<&'a UserId> = HashSet::new();
    let mut unique = Vec::new();

    for list in lists {
        for id in list {
            if seen.insert(id) {
                unique.push(id.clone());
            }
        }
    }

    unique
}
