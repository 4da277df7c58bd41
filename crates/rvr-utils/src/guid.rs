//! Random identifiers.

use uuid::Uuid;

/// Returns a random version 4 GUID, lowercase and hyphenated.
pub fn guid() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the first `len` hex digits of a fresh GUID (at most 32).
///
/// Shorter ids collide sooner; keep `len` large enough for the scene size.
pub fn short_guid(len: usize) -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(len.min(id.len()));
    id
}
