//! Registry users.

use serde::{Deserialize, Serialize};

/// A registry user. Referenced, not owned, by maintainer rows; the
/// persistence layer treats `user_id` as the stable external identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Internal rowid, assigned by the store.
    pub id: Option<i64>,
    /// Stable external id (login name scoped id, e.g. `npm:alice`).
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl User {
    /// Create a new unsaved user.
    pub fn new(user_id: &str, name: &str, email: &str) -> Self {
        Self {
            id: None,
            user_id: user_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}
