//! The view's copy of the model, kept current by observer notifications.

use crate::model::{ListObserver, ShoppingList};
use std::cell::{Cell, RefCell};

/// Latest list collection pushed by the model.
///
/// The revision increases on every notification, so readers can tell
/// whether anything changed since they last looked.
#[derive(Debug, Default)]
pub struct ListSnapshot {
    lists: RefCell<Vec<ShoppingList>>,
    revision: Cell<u64>,
}

impl ListSnapshot {
    /// Empty snapshot at revision 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications received.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Copy of the lists if the snapshot moved past `seen`.
    pub fn changed_since(&self, seen: u64) -> Option<(u64, Vec<ShoppingList>)> {
        let revision = self.revision.get();
        (revision != seen).then(|| (revision, self.lists.borrow().clone()))
    }
}

impl ListObserver for ListSnapshot {
    fn update(&self, lists: &[ShoppingList]) {
        *self.lists.borrow_mut() = lists.to_vec();
        self.revision.set(self.revision.get() + 1);
    }
}
