//! Publish/subscribe registry for list-collection changes.
//!
//! Observers receive the full current list collection after every successful
//! mutation. Notification order equals registration order.
//!
//! [`ObserverRegistry::subscribe`] hands out a [`Subscription`]. Dropping the
//! subscription (or calling [`Subscription::unsubscribe`]) removes the
//! observer before the next notification; [`Subscription::detach`] keeps it
//! registered for the lifetime of the registry.

use super::shopping_list::ShoppingList;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Anything that wants to be told about the current set of lists.
pub trait ListObserver {
    /// Called after every successful mutation with the full collection.
    fn update(&self, lists: &[ShoppingList]);
}

impl<F> ListObserver for F
where
    F: Fn(&[ShoppingList]),
{
    fn update(&self, lists: &[ShoppingList]) {
        self(lists)
    }
}

/// Identifies one registration within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Raw registration number.
    pub fn get(self) -> u64 {
        self.0
    }
}

struct Slot {
    id: SubscriberId,
    observer: Rc<dyn ListObserver>,
}

type Slots = Rc<RefCell<Vec<Slot>>>;

/// Registry of observers, owned by the model.
pub struct ObserverRegistry {
    slots: Slots,
    next_id: u64,
}

impl ObserverRegistry {
    /// Registry without observers.
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
            next_id: 1,
        }
    }

    /// Register an observer at the end of the notification order.
    pub fn subscribe(&mut self, observer: Rc<dyn ListObserver>) -> Subscription {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.slots.borrow_mut().push(Slot { id, observer });
        Subscription {
            id,
            slots: Rc::downgrade(&self.slots),
            active: true,
        }
    }

    /// Push the full list collection to every observer, in registration order.
    ///
    /// The observer set is snapshotted first, so an observer may drop
    /// subscriptions from inside `update` without invalidating the iteration.
    pub fn notify(&self, lists: &[ShoppingList]) {
        let observers: Vec<Rc<dyn ListObserver>> = self
            .slots
            .borrow()
            .iter()
            .map(|slot| Rc::clone(&slot.observer))
            .collect();
        for observer in observers {
            observer.update(lists);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// True when nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Handle to a registration. Unsubscribes on drop unless detached.
#[must_use = "dropping a Subscription unsubscribes the observer; call detach() to keep it"]
pub struct Subscription {
    id: SubscriberId,
    slots: Weak<RefCell<Vec<Slot>>>,
    active: bool,
}

impl Subscription {
    /// Which registration this handle controls.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the observer now.
    pub fn unsubscribe(self) {
        drop(self)
    }

    /// Keep the observer registered for as long as the registry lives.
    pub fn detach(mut self) {
        self.active = false;
    }

    fn remove(&self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().retain(|slot| slot.id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.active {
            self.remove();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
