//! A single entry on a shopping list.

use super::identifiers::ItemId;
use serde::{Deserialize, Deserializer, Serialize};

/// Units offered by the item form, in display order.
pub const KNOWN_UNITS: &[&str] = &["ml", "liter", "becher", "g", "kg", "dag", "stück"];

/// One product on a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique within the owning list. `0` until the model assigns one.
    #[serde(default)]
    pub id: ItemId,
    /// Product name.
    pub name: String,
    /// Amount, if any. The data file may hold a number, a numeric string or `""`.
    #[serde(
        default,
        deserialize_with = "deserialize_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<f64>,
    /// Unit of `quantity`, e.g. `kg`. May be empty.
    #[serde(default)]
    pub unit: String,
    /// Category name as stored; grouping uses [`ShoppingItem::group_key`].
    #[serde(default)]
    pub category: String,
    /// Free-form note.
    #[serde(default)]
    pub description: String,
    /// Checked off.
    #[serde(default)]
    pub completed: bool,
}

impl ShoppingItem {
    /// Flip the checked state.
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Category used for grouping: lowercased, `sonstiges` when blank.
    pub fn group_key(&self) -> String {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            super::category::FALLBACK_CATEGORY.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }

    /// Quantity and unit as shown next to the name, e.g. `2 kg` or `0.5 liter`.
    pub fn amount_label(&self) -> String {
        match (self.quantity, self.unit.trim()) {
            (Some(q), "") => format_quantity(q),
            (Some(q), unit) => format!("{} {}", format_quantity(q), unit),
            (None, unit) => unit.to_string(),
        }
    }
}

/// Render a quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

/// Parse user-entered quantity text. Blank input means "no quantity".
///
/// Accepts a decimal comma as well as a decimal point.
pub fn parse_quantity(text: &str) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        Ok(_) => Err(format!("quantity must be a non-negative number, got {trimmed:?}")),
        Err(_) => Err(format!("not a number: {trimmed:?}")),
    }
}

/// The data file stores quantities as numbers, numeric strings or `""`.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawQuantity {
        Number(f64),
        Text(String),
    }

    match Option::<RawQuantity>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawQuantity::Number(n)) => Ok(Some(n)),
        Some(RawQuantity::Text(text)) => parse_quantity(&text).map_err(serde::de::Error::custom),
    }
}

/// Fields of a new item before the model assigns its id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    /// Product name.
    pub name: String,
    /// Amount, if one was entered.
    pub quantity: Option<f64>,
    /// Unit of `quantity`.
    pub unit: String,
    /// Category name.
    pub category: String,
    /// Free-form note.
    pub description: String,
}

impl ItemDraft {
    /// Draft with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set quantity and unit.
    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = unit.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the note.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Materialize the draft with the given id. New items start unchecked.
    pub fn into_item(self, id: ItemId) -> ShoppingItem {
        ShoppingItem {
            id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            category: self.category,
            description: self.description,
            completed: false,
        }
    }
}

/// Partial update of an item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// New name.
    pub name: Option<String>,
    /// New quantity; `Some(None)` clears it.
    pub quantity: Option<Option<f64>>,
    /// New unit.
    pub unit: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New note.
    pub description: Option<String>,
    /// New checked state. The model recomputes list completion when set.
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// Patch that overwrites every editable field from a draft, as the edit form does.
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            name: Some(draft.name),
            quantity: Some(draft.quantity),
            unit: Some(draft.unit),
            category: Some(draft.category),
            description: Some(draft.description),
            completed: None,
        }
    }

    /// Patch that only sets the checked state.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Whether the patch touches the checked state.
    pub fn changes_status(&self) -> bool {
        self.completed.is_some()
    }

    /// Write the set fields into `item`.
    pub fn apply(self, item: &mut ShoppingItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}
