use crate::membership::{Resource, ResourceKind, UserId};

/// Every resource in `resources` that `user_id` can reach, as owner or through either list.
/// Input order is preserved.
pub fn accessible_resources<'a>(
    resources: &'a [Resource],
    user_id: &UserId,
) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|resource| resource.is_accessible_to(user_id))
        .collect()
}

/// Resources both users can access, in input order. Passing the same user twice is allowed and
/// returns everything that user can access.
pub fn common_resources<'a>(
    resources: &'a [Resource],
    user_a: &UserId,
    user_b: &UserId,
) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|resource| resource.is_accessible_to(user_a) && resource.is_accessible_to(user_b))
        .collect()
}

/// [`common_resources`] limited to a single kind, used for the "common stars" and "common
/// albums" views on a profile.
pub fn common_resources_of_kind<'a>(
    resources: &'a [Resource],
    kind: ResourceKind,
    user_a: &UserId,
    user_b: &UserId,
) -> Vec<&'a Resource> {
    common_resources(resources, user_a, user_b)
        .into_iter()
        .filter(|resource| resource.kind() == kind)
        .collect()
}
