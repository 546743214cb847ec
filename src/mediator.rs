//! Mediator between user input and the model.
//!
//! Trims and validates entered text, asks for confirmation before
//! destructive actions, and forwards everything else to [`ShoppingModel`].
//! Holds no state of its own beyond a handle to the model.
//!
//! Observers run while the model is mutably borrowed, so an observer must
//! never borrow the shared model itself.

use crate::model::{
    ItemDraft, ItemId, ItemPatch, ListId, ModelError, ShoppingModel, ValidationError,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

#[cfg(test)]
#[path = "mediator_tests.rs"]
mod tests;

/// The model as shared between bootstrap and the event loop.
pub type SharedModel = Rc<RefCell<ShoppingModel>>;

/// A user request, as raw as it came from the UI.
///
/// Text fields are untrimmed; [`Mediator::dispatch`] cleans them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create an empty, active list.
    CreateList {
        /// Name as typed.
        name: String,
    },
    /// Give a list a new name.
    RenameList {
        /// List to rename.
        list: ListId,
        /// New name as typed.
        name: String,
    },
    /// Remove a list and every item in it. Needs confirmation.
    DeleteList {
        /// List to delete.
        list: ListId,
    },
    /// Check every item and move the list to the completed pane.
    MarkListComplete {
        /// List to complete.
        list: ListId,
    },
    /// Uncheck every item and move the list back to the active pane.
    ReopenList {
        /// List to reopen.
        list: ListId,
    },
    /// Add a participant to a list. Needs confirmation.
    ShareList {
        /// List to share.
        list: ListId,
        /// User name as typed.
        participant: String,
    },
    /// Append an item to a list.
    AddItem {
        /// Target list.
        list: ListId,
        /// Field values from the item form.
        draft: ItemDraft,
    },
    /// Overwrite every editable field of an item.
    UpdateItem {
        /// List holding the item.
        list: ListId,
        /// Item to overwrite.
        item: ItemId,
        /// New field values.
        draft: ItemDraft,
    },
    /// Flip one item between open and checked.
    ToggleItem {
        /// List holding the item.
        list: ListId,
        /// Item to flip.
        item: ItemId,
    },
    /// Remove the item at a position. Needs confirmation.
    DeleteItem {
        /// List holding the item.
        list: ListId,
        /// Position in the list's item vector.
        index: usize,
    },
    /// Add a category to the catalog.
    AddCategory {
        /// Name as typed; stored lowercased.
        name: String,
    },
}

/// A destructive action waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmRequest {
    /// Delete a whole list.
    DeleteList {
        /// List to delete.
        list: ListId,
        /// Its name, for the question.
        name: String,
    },
    /// Delete one item.
    DeleteItem {
        /// List holding the item.
        list: ListId,
        /// Position of the item.
        index: usize,
        /// Item name, for the question.
        name: String,
    },
    /// Share a list with someone.
    ShareList {
        /// List to share.
        list: ListId,
        /// Trimmed user name.
        participant: String,
    },
}

impl ConfirmRequest {
    /// Question shown in the confirmation dialog.
    pub fn prompt(&self) -> String {
        match self {
            ConfirmRequest::DeleteList { name, .. } => {
                format!("Delete the list \"{name}\"?")
            }
            ConfirmRequest::DeleteItem { name, .. } => {
                format!("Delete \"{name}\" from the list?")
            }
            ConfirmRequest::ShareList { participant, .. } => {
                format!("Share this list with {participant}?")
            }
        }
    }
}

/// What an applied command did.
///
/// The `Display` text is what the status bar shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A list was created.
    ListCreated {
        /// Id of the new list.
        list: ListId,
        /// Its trimmed name.
        name: String,
    },
    /// A list was renamed.
    ListRenamed {
        /// Renamed list.
        list: ListId,
        /// The new name.
        name: String,
    },
    /// A list was deleted.
    ListDeleted {
        /// Id the list had.
        list: ListId,
        /// Name the list had.
        name: String,
    },
    /// A list and all its items were checked.
    ListCompleted {
        /// Completed list.
        list: ListId,
    },
    /// A list and all its items were unchecked.
    ListReopened {
        /// Reopened list.
        list: ListId,
    },
    /// A share request went through.
    ListShared {
        /// Shared list.
        list: ListId,
        /// User the list is shared with.
        participant: String,
        /// False when the participant was already on the list.
        added: bool,
    },
    /// An item was appended.
    ItemAdded {
        /// List holding the item.
        list: ListId,
        /// Id of the new item.
        item: ItemId,
        /// Its trimmed name.
        name: String,
    },
    /// An item's fields were overwritten.
    ItemUpdated {
        /// List holding the item.
        list: ListId,
        /// Updated item.
        item: ItemId,
    },
    /// An item was checked or unchecked.
    ItemToggled {
        /// List holding the item.
        list: ListId,
        /// Toggled item.
        item: ItemId,
        /// State after the toggle.
        completed: bool,
    },
    /// An item was removed.
    ItemDeleted {
        /// List the item was in.
        list: ListId,
        /// Name the item had.
        name: String,
    },
    /// A category exists in the catalog (new or already present).
    CategoryAdded {
        /// Normalised category name.
        name: String,
    },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::ListCreated { name, .. } => write!(f, "Created list \"{name}\""),
            Effect::ListRenamed { name, .. } => write!(f, "Renamed list to \"{name}\""),
            Effect::ListDeleted { name, .. } => write!(f, "Deleted list \"{name}\""),
            Effect::ListCompleted { .. } => f.write_str("List marked as completed"),
            Effect::ListReopened { .. } => f.write_str("List reopened"),
            Effect::ListShared {
                participant,
                added: true,
                ..
            } => write!(f, "Shared with {participant}"),
            Effect::ListShared { participant, .. } => {
                write!(f, "Already shared with {participant}")
            }
            Effect::ItemAdded { name, .. } => write!(f, "Added \"{name}\""),
            Effect::ItemUpdated { .. } => f.write_str("Item updated"),
            Effect::ItemToggled {
                completed: true, ..
            } => f.write_str("Item checked"),
            Effect::ItemToggled { .. } => f.write_str("Item unchecked"),
            Effect::ItemDeleted { name, .. } => write!(f, "Deleted \"{name}\""),
            Effect::CategoryAdded { name } => write!(f, "Category \"{name}\" available"),
        }
    }
}

/// Result of dispatching a command.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome {
    /// The model changed.
    Applied(Effect),
    /// Input failed validation; the model was not touched.
    Rejected(ValidationError),
    /// Ask the user, then pass the request to [`Mediator::confirm`].
    NeedsConfirmation(ConfirmRequest),
    /// The model refused (unknown list or item).
    Failed(ModelError),
}

impl Outcome {
    /// True for [`Outcome::Applied`].
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

impl From<ModelError> for Outcome {
    fn from(err: ModelError) -> Self {
        Outcome::Failed(err)
    }
}

/// Routes validated commands to the model.
#[derive(Debug, Clone)]
pub struct Mediator {
    model: SharedModel,
    confirm_destructive: bool,
}

impl Mediator {
    /// Mediator that asks before destructive actions.
    pub fn new(model: SharedModel) -> Self {
        Self {
            model,
            confirm_destructive: true,
        }
    }

    /// Turn confirmation prompts on or off.
    pub fn with_confirmation(mut self, confirm_destructive: bool) -> Self {
        self.confirm_destructive = confirm_destructive;
        self
    }

    /// The shared model this mediator writes to.
    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    /// Whether destructive commands wait for [`Mediator::confirm`].
    pub fn confirms_destructive(&self) -> bool {
        self.confirm_destructive
    }

    /// Validate a command and apply it.
    ///
    /// Blank names come back as [`Outcome::Rejected`]. Deleting a list or an
    /// item and sharing a list return [`Outcome::NeedsConfirmation`] unless
    /// confirmation is off; the request names an existing target.
    pub fn dispatch(&self, command: Command) -> Outcome {
        debug!(?command, "Dispatching command");
        let outcome = match command {
            Command::CreateList { name } => self.create_list(&name),
            Command::RenameList { list, name } => self.rename_list(list, &name),
            Command::DeleteList { list } => self.delete_list(list),
            Command::MarkListComplete { list } => {
                into_outcome(self.model.borrow_mut().mark_list_complete(list), || {
                    Effect::ListCompleted { list }
                })
            }
            Command::ReopenList { list } => {
                into_outcome(self.model.borrow_mut().reopen_list(list), || {
                    Effect::ListReopened { list }
                })
            }
            Command::ShareList { list, participant } => self.share_list(list, &participant),
            Command::AddItem { list, draft } => self.add_item(list, draft),
            Command::UpdateItem { list, item, draft } => self.update_item(list, item, draft),
            Command::ToggleItem { list, item } => {
                match self.model.borrow_mut().toggle_item(list, item) {
                    Ok(completed) => Outcome::Applied(Effect::ItemToggled {
                        list,
                        item,
                        completed,
                    }),
                    Err(err) => err.into(),
                }
            }
            Command::DeleteItem { list, index } => self.delete_item(list, index),
            Command::AddCategory { name } => self.add_category(&name),
        };
        log_outcome(&outcome);
        outcome
    }

    /// Run a destructive action the user agreed to.
    pub fn confirm(&self, request: ConfirmRequest) -> Outcome {
        debug!(?request, "Confirmed");
        let outcome = self.apply_confirmed(request);
        log_outcome(&outcome);
        outcome
    }

    fn apply_confirmed(&self, request: ConfirmRequest) -> Outcome {
        let mut model = self.model.borrow_mut();
        match request {
            ConfirmRequest::DeleteList { list, .. } => match model.delete_list(list) {
                Ok(removed) => Outcome::Applied(Effect::ListDeleted {
                    list,
                    name: removed.name,
                }),
                Err(err) => err.into(),
            },
            ConfirmRequest::DeleteItem { list, index, .. } => match model.delete_item(list, index) {
                Ok(removed) => Outcome::Applied(Effect::ItemDeleted {
                    list,
                    name: removed.name,
                }),
                Err(err) => err.into(),
            },
            ConfirmRequest::ShareList { list, participant } => {
                match model.share_list(list, &participant) {
                    Ok(added) => Outcome::Applied(Effect::ListShared {
                        list,
                        participant,
                        added,
                    }),
                    Err(err) => err.into(),
                }
            }
        }
    }

    fn create_list(&self, name: &str) -> Outcome {
        let Some(name) = non_blank(name) else {
            return Outcome::Rejected(ValidationError::EmptyListName);
        };
        let list = self.model.borrow_mut().add_list(name);
        Outcome::Applied(Effect::ListCreated {
            list,
            name: name.to_string(),
        })
    }

    fn rename_list(&self, list: ListId, name: &str) -> Outcome {
        let Some(name) = non_blank(name) else {
            return Outcome::Rejected(ValidationError::EmptyListName);
        };
        into_outcome(self.model.borrow_mut().rename_list(list, name), || {
            Effect::ListRenamed {
                list,
                name: name.to_string(),
            }
        })
    }

    fn delete_list(&self, list: ListId) -> Outcome {
        let name = match self.model.borrow().list(list) {
            Some(found) => found.name.clone(),
            None => return self.missing_list("delete_list", list),
        };
        let request = ConfirmRequest::DeleteList { list, name };
        self.ask_or_apply(request)
    }

    fn share_list(&self, list: ListId, participant: &str) -> Outcome {
        let Some(participant) = non_blank(participant) else {
            return Outcome::Rejected(ValidationError::EmptyParticipant);
        };
        if self.model.borrow().list(list).is_none() {
            return self.missing_list("share_list", list);
        }
        let request = ConfirmRequest::ShareList {
            list,
            participant: participant.to_string(),
        };
        self.ask_or_apply(request)
    }

    fn add_item(&self, list: ListId, draft: ItemDraft) -> Outcome {
        let draft = match clean_draft(draft) {
            Ok(draft) => draft,
            Err(err) => return Outcome::Rejected(err),
        };
        let name = draft.name.clone();
        match self.model.borrow_mut().add_item(list, draft) {
            Ok(item) => Outcome::Applied(Effect::ItemAdded { list, item, name }),
            Err(err) => err.into(),
        }
    }

    fn update_item(&self, list: ListId, item: ItemId, draft: ItemDraft) -> Outcome {
        let draft = match clean_draft(draft) {
            Ok(draft) => draft,
            Err(err) => return Outcome::Rejected(err),
        };
        let patch = ItemPatch::from_draft(draft);
        into_outcome(self.model.borrow_mut().update_item(list, item, patch), || {
            Effect::ItemUpdated { list, item }
        })
    }

    fn delete_item(&self, list: ListId, index: usize) -> Outcome {
        let name = {
            let model = self.model.borrow();
            let Some(found) = model.list(list) else {
                return self.missing_list("delete_item", list);
            };
            match found.items.get(index) {
                Some(item) => item.name.clone(),
                None => {
                    let len = found.items.len();
                    warn!(op = "delete_item", list = %list, index, len, "Item index out of range; operation skipped");
                    return Outcome::Failed(ModelError::ItemIndexOutOfRange { list, index, len });
                }
            }
        };
        self.ask_or_apply(ConfirmRequest::DeleteItem { list, index, name })
    }

    fn add_category(&self, name: &str) -> Outcome {
        match self.model.borrow_mut().add_category(name) {
            Some(name) => Outcome::Applied(Effect::CategoryAdded { name }),
            None => Outcome::Rejected(ValidationError::EmptyCategory),
        }
    }

    fn ask_or_apply(&self, request: ConfirmRequest) -> Outcome {
        if self.confirm_destructive {
            Outcome::NeedsConfirmation(request)
        } else {
            self.apply_confirmed(request)
        }
    }

    fn missing_list(&self, op: &'static str, list: ListId) -> Outcome {
        warn!(op, list = %list, "List not found; operation skipped");
        Outcome::Failed(ModelError::ListNotFound(list))
    }
}

/// Applied effects are logged at info, rejections at warn. Model failures
/// were already logged by the model.
fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Applied(effect) => info!(%effect, "Applied"),
        Outcome::Rejected(reason) => warn!(%reason, "Input rejected"),
        Outcome::NeedsConfirmation(_) | Outcome::Failed(_) => {}
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Trim every text field; the name must survive trimming.
fn clean_draft(draft: ItemDraft) -> Result<ItemDraft, ValidationError> {
    let name = non_blank(&draft.name)
        .ok_or(ValidationError::EmptyItemName)?
        .to_string();
    Ok(ItemDraft {
        name,
        quantity: draft.quantity,
        unit: draft.unit.trim().to_string(),
        category: draft.category.trim().to_lowercase(),
        description: draft.description.trim().to_string(),
    })
}

fn into_outcome(result: Result<(), ModelError>, effect: impl FnOnce() -> Effect) -> Outcome {
    match result {
        Ok(()) => Outcome::Applied(effect()),
        Err(err) => Outcome::Failed(err),
    }
}
