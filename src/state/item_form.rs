//! Item form: add or edit one item (pure state transitions).
//!
//! Five fields. Name, quantity and description are free text; unit and
//! category cycle through known values with ←/→. The category cycle ends in
//! a "new category…" slot that asks for a new name instead of submitting.
//! Leaving the name field looks the name up among frequently bought items
//! and prefills unit and category, or clears both for any other name.

use super::text_input::TextInput;
use crate::model::{
    format_quantity, frequent_item, parse_quantity, ItemDraft, ItemId, ListId, ShoppingItem,
    KNOWN_UNITS,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Label of the trailing category slot.
pub const NEW_CATEGORY_LABEL: &str = "+ new category…";

/// Whether the form creates an item or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// New item on submit.
    Add {
        /// Target list.
        list: ListId,
    },
    /// Overwrite an existing item on submit.
    Edit {
        /// List holding the item.
        list: ListId,
        /// Item being edited.
        item: ItemId,
    },
}

impl FormMode {
    /// List the form writes to.
    pub fn list(self) -> ListId {
        match self {
            FormMode::Add { list } | FormMode::Edit { list, .. } => list,
        }
    }
}

/// The form's input fields, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Item name.
    #[default]
    Name,
    /// Amount; decimal comma or point.
    Quantity,
    /// Cycles through known units.
    Unit,
    /// Cycles through the catalog.
    Category,
    /// Free-form note.
    Description,
}

impl FormField {
    /// Fields in focus order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Quantity,
        FormField::Unit,
        FormField::Category,
        FormField::Description,
    ];

    /// Label shown in front of the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Quantity => "Quantity",
            FormField::Unit => "Unit",
            FormField::Category => "Category",
            FormField::Description => "Description",
        }
    }

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Selected category slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryChoice {
    /// No category.
    #[default]
    None,
    /// A catalog entry.
    Named(String),
    /// The "new category…" slot.
    New,
}

/// What the caller should do after a key went to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Keep the form open.
    Continue,
    /// Close without saving.
    Cancel,
    /// Valid field values.
    Submit(ItemDraft),
    /// Ask for a new category name, then come back via
    /// [`ItemFormState::set_category`].
    RequestNewCategory,
}

/// An open item form.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFormState {
    /// Add or edit.
    pub mode: FormMode,
    /// Field with focus.
    pub field: FormField,
    /// Name input.
    pub name: TextInput,
    /// Quantity input, parsed on submit.
    pub quantity: TextInput,
    /// Selected unit; empty for none.
    pub unit: String,
    /// Selected category slot.
    pub category: CategoryChoice,
    /// Note input.
    pub description: TextInput,
    /// Last validation message, cleared by the next edit.
    pub error: Option<String>,
    /// Name the unit/category suggestion was last computed for.
    suggested_for: Option<String>,
}

impl ItemFormState {
    /// Empty form for a new item.
    pub fn add(list: ListId) -> Self {
        Self {
            mode: FormMode::Add { list },
            field: FormField::Name,
            name: TextInput::new(),
            quantity: TextInput::new(),
            unit: String::new(),
            category: CategoryChoice::None,
            description: TextInput::new(),
            error: None,
            suggested_for: None,
        }
    }

    /// Form prefilled from an existing item.
    pub fn edit(list: ListId, item: &ShoppingItem) -> Self {
        let category = match item.category.trim() {
            "" => CategoryChoice::None,
            name => CategoryChoice::Named(name.to_lowercase()),
        };
        Self {
            mode: FormMode::Edit {
                list,
                item: item.id,
            },
            field: FormField::Name,
            name: TextInput::with_value(&item.name),
            quantity: TextInput::with_value(item.quantity.map(format_quantity).unwrap_or_default()),
            unit: item.unit.clone(),
            category,
            description: TextInput::with_value(&item.description),
            error: None,
            suggested_for: Some(item.name.trim().to_string()),
        }
    }

    /// Dialog title for the mode.
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add { .. } => " Add item ",
            FormMode::Edit { .. } => " Edit item ",
        }
    }

    /// Text shown in the category field.
    pub fn category_label(&self) -> &str {
        match &self.category {
            CategoryChoice::None => "",
            CategoryChoice::Named(name) => name,
            CategoryChoice::New => NEW_CATEGORY_LABEL,
        }
    }

    /// Select a category by name, e.g. after one was created.
    pub fn set_category(&mut self, name: impl Into<String>) {
        self.category = CategoryChoice::Named(name.into());
    }

    /// Route one key press. `categories` is the current catalog.
    pub fn handle_key(&mut self, key: KeyEvent, categories: &[String]) -> FormOutcome {
        match key.code {
            KeyCode::Esc => FormOutcome::Cancel,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.move_to(self.field.next());
                FormOutcome::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_to(self.field.prev());
                FormOutcome::Continue
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match self.field {
                    FormField::Unit => self.cycle_unit(forward),
                    FormField::Category => self.cycle_category(categories, forward),
                    _ => {
                        if let Some(input) = self.text_field_mut() {
                            if forward {
                                input.cursor_right();
                            } else {
                                input.cursor_left();
                            }
                        }
                    }
                }
                FormOutcome::Continue
            }
            KeyCode::Backspace => {
                if let Some(input) = self.text_field_mut() {
                    input.backspace();
                }
                self.error = None;
                FormOutcome::Continue
            }
            KeyCode::Delete => {
                if let Some(input) = self.text_field_mut() {
                    input.delete();
                }
                FormOutcome::Continue
            }
            KeyCode::Home => {
                if let Some(input) = self.text_field_mut() {
                    input.cursor_home();
                }
                FormOutcome::Continue
            }
            KeyCode::End => {
                if let Some(input) = self.text_field_mut() {
                    input.cursor_end();
                }
                FormOutcome::Continue
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.text_field_mut() {
                    input.insert_char(ch);
                }
                self.error = None;
                FormOutcome::Continue
            }
            _ => FormOutcome::Continue,
        }
    }

    /// Validate and build a draft. On failure the form stays open with
    /// `error` set.
    pub fn submit(&mut self) -> FormOutcome {
        if self.category == CategoryChoice::New {
            return FormOutcome::RequestNewCategory;
        }
        self.apply_suggestion();
        match self.to_draft() {
            Ok(draft) => FormOutcome::Submit(draft),
            Err(message) => {
                self.error = Some(message);
                FormOutcome::Continue
            }
        }
    }

    /// Build a draft from the current field values.
    pub fn to_draft(&self) -> Result<ItemDraft, String> {
        if self.name.is_blank() {
            return Err("An item needs a name".to_string());
        }
        let quantity = parse_quantity(self.quantity.value())?;
        let category = match &self.category {
            CategoryChoice::Named(name) => name.clone(),
            CategoryChoice::None | CategoryChoice::New => String::new(),
        };
        Ok(ItemDraft {
            name: self.name.trimmed().to_string(),
            quantity,
            unit: self.unit.clone(),
            category,
            description: self.description.trimmed().to_string(),
        })
    }

    fn move_to(&mut self, field: FormField) {
        if self.field == FormField::Name && field != FormField::Name {
            self.apply_suggestion();
        }
        self.field = field;
    }

    /// Prefill unit and category for a frequently bought item; any other
    /// name clears both. Runs once per distinct name so manual changes
    /// afterwards stick.
    fn apply_suggestion(&mut self) {
        let name = self.name.trimmed().to_string();
        if self.suggested_for.as_deref() == Some(name.as_str()) {
            return;
        }
        match frequent_item(&name) {
            Some(frequent) => {
                self.unit = frequent.unit.to_string();
                self.category = CategoryChoice::Named(frequent.category.to_string());
            }
            None => {
                self.unit.clear();
                self.category = CategoryChoice::None;
            }
        }
        self.suggested_for = Some(name);
    }

    fn text_field_mut(&mut self) -> Option<&mut TextInput> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::Quantity => Some(&mut self.quantity),
            FormField::Description => Some(&mut self.description),
            FormField::Unit | FormField::Category => None,
        }
    }

    /// Cycle: (none) → known units → (none). An unknown unit from loaded
    /// data moves to the first known unit.
    fn cycle_unit(&mut self, forward: bool) {
        let slots: Vec<&str> = std::iter::once("").chain(KNOWN_UNITS.iter().copied()).collect();
        let current = slots.iter().position(|u| *u == self.unit);
        let next = step(current, slots.len(), forward);
        self.unit = slots[next].to_string();
    }

    /// Cycle: (none) → catalog names → new category → (none).
    fn cycle_category(&mut self, categories: &[String], forward: bool) {
        let len = categories.len() + 2;
        let current = match &self.category {
            CategoryChoice::None => Some(0),
            CategoryChoice::Named(name) => categories.iter().position(|c| c == name).map(|i| i + 1),
            CategoryChoice::New => Some(len - 1),
        };
        let next = step(current, len, forward);
        self.category = if next == 0 {
            CategoryChoice::None
        } else if next == len - 1 {
            CategoryChoice::New
        } else {
            CategoryChoice::Named(categories[next - 1].clone())
        };
    }
}

/// Next slot in a ring of `len`. Unknown positions start at slot 1 going
/// forward and at the last slot going back.
fn step(current: Option<usize>, len: usize, forward: bool) -> usize {
    match (current, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
        (None, true) => 1 % len,
        (None, false) => len - 1,
    }
}
