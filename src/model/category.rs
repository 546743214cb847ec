//! Item categories and frequently bought items.

/// Category used when an item has none.
pub const FALLBACK_CATEGORY: &str = "sonstiges";

/// Catalog shipped with the application.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "backwaren",
    "fleischwaren",
    "milchprodukte",
    "obst",
    "gemuese",
    "gewuerze",
    "getraenke",
    "sonstiges",
];

/// Ordered, lowercase, duplicate-free sequence of category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    names: Vec<String>,
}

impl CategoryCatalog {
    /// Build a catalog from arbitrary names, normalizing and deduplicating.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self { names: Vec::new() };
        for name in names {
            catalog.insert(name.as_ref());
        }
        catalog
    }

    /// Normalize a category name: trimmed and lowercased. `None` if blank.
    pub fn normalize(name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Insert a name. Returns the normalized name and whether it was new.
    pub fn insert(&mut self, name: &str) -> Option<(String, bool)> {
        let normalized = Self::normalize(name)?;
        if self.contains(&normalized) {
            return Some((normalized, false));
        }
        self.names.push(normalized.clone());
        Some((normalized, true))
    }

    /// Exact match against normalized names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the catalog has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::from_names(DEFAULT_CATEGORIES)
    }
}

/// Display form of a category: first letter uppercased.
pub fn display_category(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Suggested unit and category for a frequently bought item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequentItem {
    /// Exact item name that triggers the suggestion.
    pub name: &'static str,
    /// Suggested unit.
    pub unit: &'static str,
    /// Suggested category.
    pub category: &'static str,
}

/// Items the form recognises by name.
pub const FREQUENT_ITEMS: &[FrequentItem] = &[
    FrequentItem { name: "Nudeln", unit: "kg", category: "sonstiges" },
    FrequentItem { name: "Reis", unit: "kg", category: "sonstiges" },
    FrequentItem { name: "Hafermilch", unit: "liter", category: "milchalternativen" },
    FrequentItem { name: "Tofu", unit: "dag", category: "fleischalternativen" },
    FrequentItem { name: "Tomaten", unit: "stück", category: "gemuese" },
    FrequentItem { name: "Paprika", unit: "stück", category: "gemuese" },
    FrequentItem { name: "Banane", unit: "stück", category: "obst" },
];

/// Look up suggestions for an entered item name (exact match after trimming).
pub fn frequent_item(name: &str) -> Option<&'static FrequentItem> {
    let trimmed = name.trim();
    FREQUENT_ITEMS.iter().find(|item| item.name == trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_shipped_categories() {
        let catalog = CategoryCatalog::default();
        assert_eq!(catalog.len(), DEFAULT_CATEGORIES.len());
        assert!(catalog.contains("obst"));
    }

    #[test]
    fn insert_lowercases_and_deduplicates() {
        let mut catalog = CategoryCatalog::from_names(Vec::<String>::new());
        assert_eq!(catalog.insert("Snacks"), Some(("snacks".to_string(), true)));
        assert_eq!(catalog.insert("  SNACKS "), Some(("snacks".to_string(), false)));
        assert_eq!(catalog.names(), ["snacks"]);
    }

    #[test]
    fn insert_rejects_blank_names() {
        let mut catalog = CategoryCatalog::default();
        assert_eq!(catalog.insert("   "), None);
        assert_eq!(catalog.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn from_names_collapses_case_variants() {
        let catalog = CategoryCatalog::from_names(["Obst", "obst", "Gemuese"]);
        assert_eq!(catalog.names(), ["obst", "gemuese"]);
    }

    #[test]
    fn display_category_capitalizes_first_letter() {
        assert_eq!(display_category("gemuese"), "Gemuese");
        assert_eq!(display_category("ölsaaten"), "Ölsaaten");
        assert_eq!(display_category(""), "");
    }

    #[test]
    fn frequent_item_matches_exact_name() {
        let tofu = frequent_item(" Tofu ").expect("Tofu is a frequent item");
        assert_eq!(tofu.unit, "dag");
        assert_eq!(tofu.category, "fleischalternativen");
        assert!(frequent_item("tofu").is_none());
        assert!(frequent_item("Kaviar").is_none());
    }
}
