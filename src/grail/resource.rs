use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines the top-level item groupings in declared load order.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TieredUniques,
    SacredUniques,
    Sets,
    Runes,
    CharmsTrophies,
}

impl Category {
    /// Returns whether the category publishes separate weapons, armor and
    /// misc lists. The remaining categories each publish a single list whose
    /// items all land in the misc subcategory.
    ///
    pub fn has_subcategories(self) -> bool {
        matches!(self, Category::TieredUniques | Category::SacredUniques)
    }

    /// Resource name stem used by the published data set.
    ///
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TieredUniques => "tiered-uniques",
            Category::SacredUniques => "sacred-uniques",
            Category::Sets => "sets",
            Category::Runes => "runes",
            Category::CharmsTrophies => "charms-trophies",
        }
    }

    /// Short label for the selector tabs.
    ///
    pub fn label(self) -> &'static str {
        match self {
            Category::TieredUniques => "Tiered",
            Category::SacredUniques => "Sacred",
            Category::Sets => "Sets",
            Category::Runes => "Runes",
            Category::CharmsTrophies => "Charms",
        }
    }
}

/// Defines the secondary item groupings.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcategory {
    Weapons,
    Armor,
    Misc,
}

impl Subcategory {
    /// Every subcategory in the order the tiered lists are assembled.
    ///
    pub const ALL: [Subcategory; 3] = [Subcategory::Weapons, Subcategory::Armor, Subcategory::Misc];

    /// Resource name suffix used by the published data set.
    ///
    pub fn as_str(self) -> &'static str {
        match self {
            Subcategory::Weapons => "weapons",
            Subcategory::Armor => "armor",
            Subcategory::Misc => "misc",
        }
    }

    /// Short label for the selector tabs.
    ///
    pub fn label(self) -> &'static str {
        match self {
            Subcategory::Weapons => "Weapons",
            Subcategory::Armor => "Armor",
            Subcategory::Misc => "Misc",
        }
    }
}

/// Defines checklist item data structure. Item names are not unique across
/// the checklist; identity is positional.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub subcategory: Subcategory,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::TieredUniques).unwrap();
        assert_eq!(json, "\"tiered-uniques\"");
        let json = serde_json::to_string(&Category::CharmsTrophies).unwrap();
        assert_eq!(json, "\"charms-trophies\"");
    }

    #[test]
    fn subcategory_serializes_lowercase() {
        let json = serde_json::to_string(&Subcategory::Weapons).unwrap();
        assert_eq!(json, "\"weapons\"");
    }

    #[test]
    fn item_round_trips_through_json() {
        let item = Item {
            name: "Shako".to_string(),
            category: Category::TieredUniques,
            subcategory: Subcategory::Armor,
            completed: false,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn item_deserializes_stored_layout() {
        let item: Item = serde_json::from_value(json!({
            "name": "Stone of Jordan",
            "category": "sets",
            "subcategory": "misc",
            "completed": true,
        }))
        .unwrap();
        assert_eq!(item.category, Category::Sets);
        assert_eq!(item.subcategory, Subcategory::Misc);
        assert!(item.completed);
    }

    #[test]
    fn only_tiered_categories_have_subcategories() {
        assert!(Category::TieredUniques.has_subcategories());
        assert!(Category::SacredUniques.has_subcategories());
        assert!(!Category::Sets.has_subcategories());
        assert!(!Category::Runes.has_subcategories());
        assert!(!Category::CharmsTrophies.has_subcategories());
    }
}
