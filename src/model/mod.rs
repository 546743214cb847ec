//! Domain model.
//!
//! Entities are plain data with trivial mutators; [`ShoppingModel`] is the
//! only place that mutates them and tells observers about it.

pub mod category;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod observer;
pub mod shopping_item;
pub mod shopping_list;
pub mod store;
pub mod user;

// Re-export for convenience
pub use category::{
    display_category, frequent_item, CategoryCatalog, FrequentItem, DEFAULT_CATEGORIES,
    FALLBACK_CATEGORY,
};
pub use error::{AppError, LoadError, ModelError, ValidationError};
pub use identifiers::{IdCounter, ItemId, ListId, UserId};
pub use key_action::KeyAction;
pub use observer::{ListObserver, ObserverRegistry, SubscriberId, Subscription};
pub use shopping_item::{
    format_quantity, parse_quantity, ItemDraft, ItemPatch, ShoppingItem, KNOWN_UNITS,
};
pub use shopping_list::ShoppingList;
pub use store::{InitialData, ShoppingModel};
pub use user::User;
