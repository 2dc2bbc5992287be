//! Filter selection types and the checklist query predicates.
//!
//! The selections are explicit values updated by discrete setter calls on
//! `State`; the predicates never read the UI and never mutate anything.

use crate::grail::{Category, Item, Subcategory};

/// Specifying the category selector value.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Only(Category),
}

impl CategorySelection {
    /// Every selector position in tab order.
    ///
    pub const ORDER: [CategorySelection; 6] = [
        CategorySelection::All,
        CategorySelection::Only(Category::TieredUniques),
        CategorySelection::Only(Category::SacredUniques),
        CategorySelection::Only(Category::Sets),
        CategorySelection::Only(Category::Runes),
        CategorySelection::Only(Category::CharmsTrophies),
    ];

    /// Activate the next selector position, wrapping around.
    ///
    pub fn next(self) -> Self {
        let current = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(current + 1) % Self::ORDER.len()]
    }

    /// Activate the previous selector position, wrapping around.
    ///
    pub fn previous(self) -> Self {
        let current = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(current + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label for the selector tabs.
    ///
    pub fn label(self) -> &'static str {
        match self {
            CategorySelection::All => "All",
            CategorySelection::Only(category) => category.label(),
        }
    }

    fn matches(self, item: &Item) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => item.category == category,
        }
    }
}

/// Specifying the subcategory selector value.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubcategorySelection {
    All,
    Only(Subcategory),
}

impl SubcategorySelection {
    /// Every selector position in tab order.
    ///
    pub const ORDER: [SubcategorySelection; 4] = [
        SubcategorySelection::All,
        SubcategorySelection::Only(Subcategory::Weapons),
        SubcategorySelection::Only(Subcategory::Armor),
        SubcategorySelection::Only(Subcategory::Misc),
    ];

    /// Activate the next selector position, wrapping around.
    ///
    pub fn next(self) -> Self {
        let current = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(current + 1) % Self::ORDER.len()]
    }

    /// Activate the previous selector position, wrapping around.
    ///
    pub fn previous(self) -> Self {
        let current = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(current + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label for the selector tabs.
    ///
    pub fn label(self) -> &'static str {
        match self {
            SubcategorySelection::All => "All",
            SubcategorySelection::Only(subcategory) => subcategory.label(),
        }
    }

    fn matches(self, item: &Item) -> bool {
        // Categories without a weapons/armor split only carry misc items, so
        // they stay visible under the All and Misc selections.
        if !item.category.has_subcategories() {
            return matches!(
                self,
                SubcategorySelection::All | SubcategorySelection::Only(Subcategory::Misc)
            );
        }
        match self {
            SubcategorySelection::All => true,
            SubcategorySelection::Only(subcategory) => item.subcategory == subcategory,
        }
    }
}

/// Houses the active filter selections applied to the checklist.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategorySelection,
    pub subcategory: SubcategorySelection,
    pub search: String,
    pub hide_completed: bool,
}

impl Default for FilterState {
    fn default() -> FilterState {
        FilterState {
            category: CategorySelection::All,
            subcategory: SubcategorySelection::All,
            search: String::new(),
            hide_completed: false,
        }
    }
}

impl FilterState {
    /// Whether the item falls inside the selected category/subcategory
    /// scope. Progress counting uses this predicate alone.
    ///
    pub fn scope_matches(&self, item: &Item) -> bool {
        self.category.matches(item) && self.subcategory.matches(item)
    }

    /// Whether the item is visible in the list: inside scope, not hidden as
    /// completed, and matching the search text case-insensitively. An empty
    /// search matches everything.
    ///
    pub fn display_matches(&self, item: &Item) -> bool {
        if !self.scope_matches(item) {
            return false;
        }
        if self.hide_completed && item.completed {
            return false;
        }
        self.search.is_empty()
            || item
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}
