//! User records loaded from the data file.
//!
//! Users are not authenticated; they only carry ownership and sharing
//! bookkeeping for lists.

use super::identifiers::{ListId, UserId};
use serde::{Deserialize, Serialize};

/// A person lists can be owned by or shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Id from the data file.
    pub id: UserId,
    /// Name matched against list participants.
    pub username: String,
    /// Contact address; informational only.
    #[serde(default)]
    pub email: String,
    /// Lists this user created.
    #[serde(default)]
    pub owned_lists: Vec<ListId>,
    /// Lists shared with this user.
    #[serde(default)]
    pub shared_lists: Vec<ListId>,
}

impl User {
    /// User without any lists.
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            owned_lists: Vec::new(),
            shared_lists: Vec::new(),
        }
    }

    /// Record ownership once.
    pub fn add_owned_list(&mut self, list_id: ListId) {
        if !self.owned_lists.contains(&list_id) {
            self.owned_lists.push(list_id);
        }
    }

    /// Record a share once.
    pub fn add_shared_list(&mut self, list_id: ListId) {
        if !self.shared_lists.contains(&list_id) {
            self.shared_lists.push(list_id);
        }
    }

    /// Drop every reference to a deleted list.
    pub fn forget_list(&mut self, list_id: ListId) {
        self.owned_lists.retain(|id| *id != list_id);
        self.shared_lists.retain(|id| *id != list_id);
    }
}
