//! The model: single source of truth for lists, items, categories and users.
//!
//! Every successful mutation pushes the full list collection to all
//! subscribed observers. Lookup failures are logged with `warn!`, leave the
//! state untouched, notify nobody, and come back as [`ModelError`].

use super::category::CategoryCatalog;
use super::error::ModelError;
use super::identifiers::{IdCounter, ItemId, ListId};
use super::observer::{ListObserver, ObserverRegistry, Subscription};
use super::shopping_item::{ItemDraft, ItemPatch, ShoppingItem};
use super::shopping_list::ShoppingList;
use super::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, info, warn};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Contents of the initial data file: `{"shoppingLists": [...], "users": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialData {
    /// Lists with their items.
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingList>,
    /// Known users.
    #[serde(default)]
    pub users: Vec<User>,
}

/// In-memory store of all shopping lists.
#[derive(Debug)]
pub struct ShoppingModel {
    lists: Vec<ShoppingList>,
    users: Vec<User>,
    categories: CategoryCatalog,
    list_ids: IdCounter,
    item_ids: IdCounter,
    observers: ObserverRegistry,
}

impl ShoppingModel {
    /// Empty model with the default category catalog.
    pub fn new() -> Self {
        Self::with_categories(CategoryCatalog::default())
    }

    /// Empty model with a custom category catalog.
    pub fn with_categories(categories: CategoryCatalog) -> Self {
        Self {
            lists: Vec::new(),
            users: Vec::new(),
            categories,
            list_ids: IdCounter::new(),
            item_ids: IdCounter::new(),
            observers: ObserverRegistry::new(),
        }
    }

    // ===== Observers =====

    /// Register an observer; it is told about every later change.
    pub fn subscribe(&mut self, observer: Rc<dyn ListObserver>) -> Subscription {
        self.observers.subscribe(observer)
    }

    /// Push the full list collection to every observer.
    pub fn notify_observers(&self) {
        debug!(
            lists = self.lists.len(),
            observers = self.observers.len(),
            "Notifying observers"
        );
        self.observers.notify(&self.lists);
    }

    // ===== Queries =====

    /// All lists in creation order.
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// List by id.
    pub fn list(&self, id: ListId) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// The category catalog.
    pub fn categories(&self) -> &CategoryCatalog {
        &self.categories
    }

    /// Users from the data file.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    // ===== Loading =====

    /// Replace all lists and users with the initial data set.
    ///
    /// Items without an id, or with an id already used in their list, get a
    /// fresh one; the same goes for duplicate list ids. Both counters resume
    /// after the highest id in use.
    pub fn load_data(&mut self, data: InitialData) {
        let InitialData {
            shopping_lists: mut lists,
            users,
        } = data;

        let max_list = lists.iter().map(|list| list.id.get()).max();
        let max_item = lists.iter().filter_map(ShoppingList::max_item_id).max();
        let mut list_ids = IdCounter::after(max_list);
        let mut item_ids = IdCounter::after(max_item);

        let mut seen_lists = HashSet::new();
        for list in &mut lists {
            if list.id.get() == 0 || !seen_lists.insert(list.id) {
                let fresh = ListId::new(list_ids.next_raw());
                debug!(old = %list.id, new = %fresh, "Reassigned list id");
                list.id = fresh;
                seen_lists.insert(fresh);
            }

            let mut seen_items = HashSet::new();
            for item in &mut list.items {
                if item.id.is_unassigned() || !seen_items.insert(item.id) {
                    let fresh = ItemId::new(item_ids.next_raw());
                    debug!(list = %list.id, old = %item.id, new = %fresh, "Reassigned item id");
                    item.id = fresh;
                    seen_items.insert(fresh);
                }
            }
        }

        info!(lists = lists.len(), users = users.len(), "Loaded initial data");
        self.lists = lists;
        self.users = users;
        self.list_ids = list_ids;
        self.item_ids = item_ids;
        self.notify_observers();
    }

    // ===== List operations =====

    /// Append a new, empty, active list and return its id.
    pub fn add_list(&mut self, name: impl Into<String>) -> ListId {
        let id = ListId::new(self.list_ids.next_raw());
        let list = ShoppingList::new(id, name, None);
        debug!(list = %id, name = %list.name, "Added list");
        self.lists.push(list);
        self.notify_observers();
        id
    }

    /// Remove a list and every reference users hold to it.
    pub fn delete_list(&mut self, id: ListId) -> Result<ShoppingList, ModelError> {
        let Some(index) = self.lists.iter().position(|list| list.id == id) else {
            return Err(self.list_lookup_failed("delete_list", id));
        };
        let removed = self.lists.remove(index);
        for user in &mut self.users {
            user.forget_list(id);
        }
        debug!(list = %id, "Deleted list");
        self.notify_observers();
        Ok(removed)
    }

    /// Replace a list's name.
    pub fn rename_list(&mut self, id: ListId, name: impl Into<String>) -> Result<(), ModelError> {
        let list = self.find_list_mut("rename_list", id)?;
        list.name = name.into();
        self.notify_observers();
        Ok(())
    }

    /// Mark the list completed and check every item.
    pub fn mark_list_complete(&mut self, id: ListId) -> Result<(), ModelError> {
        let list = self.find_list_mut("mark_list_complete", id)?;
        list.mark_complete();
        for item in &mut list.items {
            item.completed = true;
        }
        self.notify_observers();
        Ok(())
    }

    /// Mark the list active again and uncheck every item.
    pub fn reopen_list(&mut self, id: ListId) -> Result<(), ModelError> {
        let list = self.find_list_mut("reopen_list", id)?;
        list.reopen();
        for item in &mut list.items {
            item.completed = false;
        }
        self.notify_observers();
        Ok(())
    }

    /// Recompute the list status from its items. Returns the new status.
    pub fn mark_list_if_complete(&mut self, id: ListId) -> Result<bool, ModelError> {
        let list = self.find_list_mut("mark_list_if_complete", id)?;
        let completed = recompute_completion(list);
        self.notify_observers();
        Ok(completed)
    }

    /// Share a list with a named participant.
    ///
    /// Returns `false` when the participant was already on the list. A
    /// loaded user with that username also gets the list in `shared_lists`.
    pub fn share_list(&mut self, id: ListId, participant: &str) -> Result<bool, ModelError> {
        let list = self.find_list_mut("share_list", id)?;
        let added = list.add_participant(participant);
        if let Some(user) = self.users.iter_mut().find(|u| u.username == participant) {
            user.add_shared_list(id);
        }
        debug!(list = %id, participant, added, "Shared list");
        self.notify_observers();
        Ok(added)
    }

    // ===== Item operations =====

    /// Append a new unchecked item to a list and return its id.
    pub fn add_item(&mut self, list_id: ListId, draft: ItemDraft) -> Result<ItemId, ModelError> {
        let next = self.item_ids.peek();
        let list = self.find_list_mut("add_item", list_id)?;
        let item_id = ItemId::new(next);
        list.add_item(draft.into_item(item_id));
        self.item_ids.next_raw();
        debug!(list = %list_id, item = %item_id, "Added item");
        self.notify_observers();
        Ok(item_id)
    }

    /// Remove the item at `index` in the list's item sequence.
    pub fn delete_item(&mut self, list_id: ListId, index: usize) -> Result<ShoppingItem, ModelError> {
        let list = self.find_list_mut("delete_item", list_id)?;
        let len = list.items.len();
        if index >= len {
            warn!(op = "delete_item", list = %list_id, index, len, "Item index out of range; operation skipped");
            return Err(ModelError::ItemIndexOutOfRange {
                list: list_id,
                index,
                len,
            });
        }
        let removed = list.items.remove(index);
        debug!(list = %list_id, item = %removed.id, "Deleted item");
        self.notify_observers();
        Ok(removed)
    }

    /// Apply a partial update. A patch touching the checked state also
    /// recomputes the list status.
    pub fn update_item(
        &mut self,
        list_id: ListId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<(), ModelError> {
        let list = self.find_list_mut("update_item", list_id)?;
        let recompute = patch.changes_status();
        let Some(item) = list.item_mut(item_id) else {
            return Err(item_lookup_failed("update_item", list_id, item_id));
        };
        patch.apply(item);
        if recompute {
            recompute_completion(list);
        }
        self.notify_observers();
        Ok(())
    }

    /// Flip one item's checked state, then recompute the list status.
    /// Returns the item's new state.
    pub fn toggle_item(&mut self, list_id: ListId, item_id: ItemId) -> Result<bool, ModelError> {
        let list = self.find_list_mut("toggle_item", list_id)?;
        let Some(item) = list.item_mut(item_id) else {
            return Err(item_lookup_failed("toggle_item", list_id, item_id));
        };
        item.toggle_complete();
        let now = item.completed;
        recompute_completion(list);
        self.notify_observers();
        Ok(now)
    }

    // ===== Categories =====

    /// Add a category (trimmed, lowercased) unless present.
    ///
    /// Returns the normalized name, or `None` for blank input. Observers are
    /// notified only when the catalog grew.
    pub fn add_category(&mut self, name: &str) -> Option<String> {
        let (normalized, added) = self.categories.insert(name)?;
        if added {
            debug!(category = %normalized, "Added category");
            self.notify_observers();
        }
        Some(normalized)
    }

    // ===== Internals =====

    fn find_list_mut(&mut self, op: &'static str, id: ListId) -> Result<&mut ShoppingList, ModelError> {
        let index = self.lists.iter().position(|list| list.id == id);
        match index {
            Some(index) => Ok(&mut self.lists[index]),
            None => Err(self.list_lookup_failed(op, id)),
        }
    }

    fn list_lookup_failed(&self, op: &'static str, id: ListId) -> ModelError {
        warn!(op, list = %id, "List not found; operation skipped");
        ModelError::ListNotFound(id)
    }
}

impl Default for ShoppingModel {
    fn default() -> Self {
        Self::new()
    }
}

fn item_lookup_failed(op: &'static str, list: ListId, item: ItemId) -> ModelError {
    warn!(op, list = %list, item = %item, "Item not found; operation skipped");
    ModelError::ItemNotFound { list, item }
}

/// Completed iff non-empty and every item is checked.
fn recompute_completion(list: &mut ShoppingList) -> bool {
    list.completed = list.all_items_completed();
    list.completed
}
