//! A complete shopping list with its items and participants.

use super::identifiers::{ItemId, ListId, UserId};
use super::shopping_item::ShoppingItem;
use serde::{Deserialize, Serialize};

/// A named list of items. Owns its items exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Unique within the model.
    pub id: ListId,
    /// Display name, never blank once it went through the mediator.
    pub name: String,
    /// Creator, when the data file names one.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    /// Items in insertion order.
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    /// Whether the list sits in the completed pane.
    #[serde(default)]
    pub completed: bool,
    /// Names the list is shared with, in the order they were added.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ShoppingList {
    /// Empty, active list.
    pub fn new(id: ListId, name: impl Into<String>, owner_id: Option<UserId>) -> Self {
        Self {
            id,
            name: name.into(),
            owner_id,
            items: Vec::new(),
            completed: false,
            participants: Vec::new(),
        }
    }

    /// Append an item as is.
    pub fn add_item(&mut self, item: ShoppingItem) {
        self.items.push(item);
    }

    /// Remove the item with the given id. Returns it if it was present.
    pub fn remove_item(&mut self, item_id: ItemId) -> Option<ShoppingItem> {
        let index = self.position_of(item_id)?;
        Some(self.items.remove(index))
    }

    /// Set the list flag only; items are untouched.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    /// Clear the list flag only; items are untouched.
    pub fn reopen(&mut self) {
        self.completed = false;
    }

    /// Add a participant unless already present. Returns whether it was added.
    pub fn add_participant(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.participants.contains(&name) {
            return false;
        }
        self.participants.push(name);
        true
    }

    /// Item by id.
    pub fn item(&self, item_id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Mutable item by id.
    pub fn item_mut(&mut self, item_id: ItemId) -> Option<&mut ShoppingItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Index of the item with this id.
    pub fn position_of(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    /// Completion as a pure function of the items: non-empty and all checked.
    pub fn all_items_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.completed)
    }

    /// Number of checked items.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Highest item id in use, if any item has one.
    pub fn max_item_id(&self) -> Option<u64> {
        self.items
            .iter()
            .map(|item| item.id.get())
            .filter(|id| *id > 0)
            .max()
    }
}
