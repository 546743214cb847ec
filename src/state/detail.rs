//! Detail projection: the items of one open list.
//!
//! Items split into open and completed partitions. With [`ItemFilter::ByCategory`]
//! the open partition gets a header per category group. Every row remembers
//! the item's id and its index in the owning list, so actions on a sorted or
//! grouped row reach the right item.

use crate::model::{display_category, ItemId, ListId, ShoppingItem, ShoppingList};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Placeholder for an empty open partition.
pub const NO_OPEN_ITEMS: &str = "No open items";
/// Placeholder for an empty completed partition.
pub const NO_COMPLETED_ITEMS: &str = "No completed items";

/// Whether items are grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFilter {
    /// Flat list.
    #[default]
    All,
    /// Grouped under category headers.
    ByCategory,
}

impl ItemFilter {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            ItemFilter::All => ItemFilter::ByCategory,
            ItemFilter::ByCategory => ItemFilter::All,
        }
    }
}

/// Name ordering applied to items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Model order.
    #[default]
    Default,
    /// Name A to Z, ignoring case.
    #[serde(alias = "ascending")]
    Asc,
    /// Name Z to A, ignoring case.
    #[serde(alias = "descending")]
    Desc,
}

impl SortOrder {
    /// default → asc → desc → default
    pub fn cycle(self) -> Self {
        match self {
            SortOrder::Default => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Default,
        }
    }

    fn compare(self, a: &ShoppingItem, b: &ShoppingItem) -> Ordering {
        let by_name = || a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::Asc => by_name(),
            SortOrder::Desc => by_name().reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Default => "default",
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "none" => Ok(SortOrder::Default),
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!(
                "invalid sort order '{other}' (expected default, asc or desc)"
            )),
        }
    }
}

/// A projected item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    /// Id of the item.
    pub item_id: ItemId,
    /// Position in `ShoppingList::items`.
    pub index: usize,
    /// Item name.
    pub name: String,
    /// Quantity and unit, e.g. `2 kg`. Empty when neither is set.
    pub amount: String,
    /// Stored category.
    pub category: String,
    /// Free-form note.
    pub description: String,
    /// Checked off.
    pub completed: bool,
}

impl ItemRow {
    fn from_item(index: usize, item: &ShoppingItem) -> Self {
        Self {
            item_id: item.id,
            index,
            name: item.name.clone(),
            amount: item.amount_label(),
            category: item.category.clone(),
            description: item.description.clone(),
            completed: item.completed,
        }
    }
}

/// One line of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailRow {
    /// Category group header, display-cased.
    Header(String),
    /// An item.
    Item(ItemRow),
}

impl DetailRow {
    /// The item, unless this is a header.
    pub fn as_item(&self) -> Option<&ItemRow> {
        match self {
            DetailRow::Item(row) => Some(row),
            DetailRow::Header(_) => None,
        }
    }
}

/// Both partitions of an open list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailProjection {
    /// Open items, with headers when grouped.
    pub open: Vec<DetailRow>,
    /// Checked items.
    pub completed: Vec<DetailRow>,
}

impl DetailProjection {
    /// Project one list with the given grouping and sort.
    pub fn project(list: &ShoppingList, filter: ItemFilter, sort: SortOrder) -> Self {
        let mut projection = DetailProjection::default();
        match filter {
            ItemFilter::All => {
                let mut items: Vec<(usize, &ShoppingItem)> = list.items.iter().enumerate().collect();
                items.sort_by(|(_, a), (_, b)| sort.compare(a, b));
                projection.extend(items);
            }
            ItemFilter::ByCategory => {
                let mut groups: BTreeMap<String, Vec<(usize, &ShoppingItem)>> = BTreeMap::new();
                for (index, item) in list.items.iter().enumerate() {
                    groups.entry(item.group_key()).or_default().push((index, item));
                }
                for (key, mut items) in groups {
                    items.sort_by(|(_, a), (_, b)| sort.compare(a, b));
                    if items.iter().any(|(_, item)| !item.completed) {
                        projection.open.push(DetailRow::Header(display_category(&key)));
                    }
                    projection.extend(items);
                }
            }
        }
        projection
    }

    fn extend(&mut self, items: Vec<(usize, &ShoppingItem)>) {
        for (index, item) in items {
            let row = DetailRow::Item(ItemRow::from_item(index, item));
            if item.completed {
                self.completed.push(row);
            } else {
                self.open.push(row);
            }
        }
    }

    /// Item rows in display order: open partition first, then completed.
    /// This is the order the detail selection walks.
    pub fn selectable(&self) -> Vec<&ItemRow> {
        self.open
            .iter()
            .chain(self.completed.iter())
            .filter_map(DetailRow::as_item)
            .collect()
    }

    /// Number of open items, headers excluded.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|row| row.as_item().is_some()).count()
    }
}

/// View settings for the open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailViewState {
    /// The open list.
    pub list_id: ListId,
    /// Grouping mode.
    pub filter: ItemFilter,
    /// Sort order.
    pub sort: SortOrder,
    /// Index into [`DetailProjection::selectable`].
    pub selected: usize,
}

impl DetailViewState {
    /// Flat view of a list with the first item selected.
    pub fn new(list_id: ListId, sort: SortOrder) -> Self {
        Self {
            list_id,
            filter: ItemFilter::All,
            sort,
            selected: 0,
        }
    }

    /// Project with the current settings.
    pub fn project(&self, list: &ShoppingList) -> DetailProjection {
        DetailProjection::project(list, self.filter, self.sort)
    }

    /// Indicator shown in the modal title, e.g. `[by category, A-Z]`.
    pub fn indicator(&self) -> String {
        let filter = match self.filter {
            ItemFilter::All => "all",
            ItemFilter::ByCategory => "by category",
        };
        let sort = match self.sort {
            SortOrder::Default => "list order",
            SortOrder::Asc => "A-Z",
            SortOrder::Desc => "Z-A",
        };
        format!("[{filter}, {sort}]")
    }
}
