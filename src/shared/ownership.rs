use crate::identity::application::domain::entities::UserId;

/// Marker for a failed ownership check.
///
/// Callers map this to their `…NotFound` variant so that resources owned by
/// someone else are indistinguishable from resources that do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotOwner;

/// Check that `user` owns the topic before any data is returned or
/// modified. Entries inherit their topic's owner, so entry handlers run
/// this against the parent topic.
pub fn check_topic_owner(topic_owner: UserId, user: UserId) -> Result<(), NotOwner> {
    if topic_owner != user {
        return Err(NotOwner);
    }
    Ok(())
}
