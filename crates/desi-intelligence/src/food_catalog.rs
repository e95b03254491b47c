// ABOUTME: Closed South-Asian food catalog with typed protein, carb, and fat source tags
// ABOUTME: Classifies labels by catalog tag first and by keyword fallback for unknown labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Food Catalog
//!
//! Every label a user can pick carries a typed tag describing what kind of food
//! it is. The meal planner switches on these tags rather than on display text.
//! Labels outside the catalog are classified with a case-insensitive keyword
//! table so library callers passing free-form labels still get sensible picks.

use desi_core::models::{FoodCategory, FoodPreferenceSet};
use serde::{Deserialize, Serialize};

/// Kind of protein source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProteinSource {
    /// Whole eggs or egg whites
    Egg,
    /// Chicken
    Chicken,
    /// Beef
    Beef,
    /// Goat (mutton)
    Goat,
    /// Lamb
    Lamb,
    /// Fish, salmon, tuna
    Fish,
    /// Dal, chana and other pulses
    Legume,
    /// Paneer
    Paneer,
    /// Yogurt / dahi
    Yogurt,
    /// Anything else
    Other,
}

/// Selection group a protein source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProteinGroup {
    /// Eggs
    Egg,
    /// Chicken, beef, goat, lamb
    Meat,
    /// Fish
    Fish,
    /// Paneer and yogurt
    Dairy,
    /// Pulses
    Legume,
}

impl ProteinSource {
    /// Selection group, `None` for `Other`
    #[must_use]
    pub const fn group(self) -> Option<ProteinGroup> {
        match self {
            Self::Egg => Some(ProteinGroup::Egg),
            Self::Chicken | Self::Beef | Self::Goat | Self::Lamb => Some(ProteinGroup::Meat),
            Self::Fish => Some(ProteinGroup::Fish),
            Self::Paneer | Self::Yogurt => Some(ProteinGroup::Dairy),
            Self::Legume => Some(ProteinGroup::Legume),
            Self::Other => None,
        }
    }

    /// Classify a label by keyword, case-insensitively
    #[must_use]
    pub fn from_keywords(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needle: &str| label.contains(needle);
        if has("egg") {
            Self::Egg
        } else if has("chicken") {
            Self::Chicken
        } else if has("beef") {
            Self::Beef
        } else if has("goat") {
            Self::Goat
        } else if has("lamb") {
            Self::Lamb
        } else if has("fish") || has("salmon") || has("tuna") {
            Self::Fish
        } else if has("dal") || has("chana") {
            Self::Legume
        } else if has("paneer") {
            Self::Paneer
        } else if has("yogurt") {
            Self::Yogurt
        } else {
            Self::Other
        }
    }
}

/// Kind of carbohydrate source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarbSource {
    /// Rice
    Rice,
    /// Roti
    Roti,
    /// Chapati
    Chapati,
    /// Naan
    Naan,
    /// Oats
    Oats,
    /// Potato
    Potato,
    /// Anything else
    Other,
}

/// Selection group a carb source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarbGroup {
    /// Roti, chapati, naan
    Bread,
    /// Rice
    Rice,
    /// Oats and potato
    Light,
}

impl CarbSource {
    /// Selection group, `None` for `Other`
    #[must_use]
    pub const fn group(self) -> Option<CarbGroup> {
        match self {
            Self::Roti | Self::Chapati | Self::Naan => Some(CarbGroup::Bread),
            Self::Rice => Some(CarbGroup::Rice),
            Self::Oats | Self::Potato => Some(CarbGroup::Light),
            Self::Other => None,
        }
    }

    /// Classify a label by keyword, case-insensitively
    #[must_use]
    pub fn from_keywords(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needle: &str| label.contains(needle);
        if has("rice") {
            Self::Rice
        } else if has("roti") {
            Self::Roti
        } else if has("chapati") {
            Self::Chapati
        } else if has("naan") {
            Self::Naan
        } else if has("oats") {
            Self::Oats
        } else if has("potato") {
            Self::Potato
        } else {
            Self::Other
        }
    }
}

/// Kind of fat source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FatSource {
    /// Ghee, oils, butter (measured in tablespoons)
    CookingFat,
    /// Seeds and nuts
    SeedsNuts,
    /// Avocado
    Avocado,
    /// Anything else
    Other,
}

impl FatSource {
    /// Classify a label by keyword, case-insensitively
    #[must_use]
    pub fn from_keywords(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needle: &str| label.contains(needle);
        if has("ghee") || has("oil") || has("butter") {
            Self::CookingFat
        } else if has("seeds") || has("nuts") {
            Self::SeedsNuts
        } else if has("avocado") {
            Self::Avocado
        } else {
            Self::Other
        }
    }
}

/// Typed tag attached to a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "category", content = "source", rename_all = "snake_case")]
pub enum FoodKind {
    /// Protein with its source
    Protein(ProteinSource),
    /// Carb with its source
    Carb(CarbSource),
    /// Fat with its source
    Fat(FatSource),
    /// Vegetable
    Vegetable,
    /// Fruit
    Fruit,
}

impl FoodKind {
    /// Preference category this kind is filed under
    #[must_use]
    pub const fn category(self) -> FoodCategory {
        match self {
            Self::Protein(_) => FoodCategory::Protein,
            Self::Carb(_) => FoodCategory::Carb,
            Self::Fat(_) => FoodCategory::Fat,
            Self::Vegetable => FoodCategory::Vegetable,
            Self::Fruit => FoodCategory::Fruit,
        }
    }
}

/// A selectable food
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display label
    pub label: &'static str,
    /// Typed tag
    pub kind: FoodKind,
}

impl CatalogEntry {
    const fn new(label: &'static str, kind: FoodKind) -> Self {
        Self { label, kind }
    }

    /// Preference category
    #[must_use]
    pub const fn category(&self) -> FoodCategory {
        self.kind.category()
    }
}

use FoodKind::{Carb, Fat, Fruit, Protein, Vegetable};

const BUILTIN_ENTRIES: &[CatalogEntry] = &[
    // Proteins
    CatalogEntry::new("Egg (Whole)", Protein(ProteinSource::Egg)),
    CatalogEntry::new("Egg Whites", Protein(ProteinSource::Egg)),
    CatalogEntry::new("Chicken Breast (Uncooked)", Protein(ProteinSource::Chicken)),
    CatalogEntry::new("Chicken Thigh (Uncooked)", Protein(ProteinSource::Chicken)),
    CatalogEntry::new("Beef (Lean, Uncooked)", Protein(ProteinSource::Beef)),
    CatalogEntry::new("Goat Meat (Uncooked)", Protein(ProteinSource::Goat)),
    CatalogEntry::new("Lamb (Uncooked)", Protein(ProteinSource::Lamb)),
    CatalogEntry::new("Fish (Rohu)", Protein(ProteinSource::Fish)),
    CatalogEntry::new("Salmon", Protein(ProteinSource::Fish)),
    CatalogEntry::new("Tuna (Canned)", Protein(ProteinSource::Fish)),
    CatalogEntry::new("Moong Dal", Protein(ProteinSource::Legume)),
    CatalogEntry::new("Masoor Dal", Protein(ProteinSource::Legume)),
    CatalogEntry::new("Chana (Chickpeas)", Protein(ProteinSource::Legume)),
    CatalogEntry::new("Rajma (Kidney Beans)", Protein(ProteinSource::Legume)),
    CatalogEntry::new("Paneer", Protein(ProteinSource::Paneer)),
    CatalogEntry::new("Greek Yogurt", Protein(ProteinSource::Yogurt)),
    CatalogEntry::new("Dahi (Plain Yogurt)", Protein(ProteinSource::Yogurt)),
    CatalogEntry::new("Tofu", Protein(ProteinSource::Other)),
    // Carbs
    CatalogEntry::new("White Rice", Carb(CarbSource::Rice)),
    CatalogEntry::new("Brown Rice", Carb(CarbSource::Rice)),
    CatalogEntry::new("Basmati Rice", Carb(CarbSource::Rice)),
    CatalogEntry::new("Roti (Whole Wheat)", Carb(CarbSource::Roti)),
    CatalogEntry::new("Chapati", Carb(CarbSource::Chapati)),
    CatalogEntry::new("Naan", Carb(CarbSource::Naan)),
    CatalogEntry::new("Oats", Carb(CarbSource::Oats)),
    CatalogEntry::new("Potato", Carb(CarbSource::Potato)),
    CatalogEntry::new("Sweet Potato", Carb(CarbSource::Potato)),
    CatalogEntry::new("Quinoa", Carb(CarbSource::Other)),
    // Fats
    CatalogEntry::new("Ghee", Fat(FatSource::CookingFat)),
    CatalogEntry::new("Mustard Oil", Fat(FatSource::CookingFat)),
    CatalogEntry::new("Olive Oil", Fat(FatSource::CookingFat)),
    CatalogEntry::new("Coconut Oil", Fat(FatSource::CookingFat)),
    CatalogEntry::new("Butter", Fat(FatSource::CookingFat)),
    CatalogEntry::new("Almonds", Fat(FatSource::SeedsNuts)),
    CatalogEntry::new("Mixed Nuts", Fat(FatSource::SeedsNuts)),
    CatalogEntry::new("Chia Seeds", Fat(FatSource::SeedsNuts)),
    CatalogEntry::new("Flax Seeds", Fat(FatSource::SeedsNuts)),
    CatalogEntry::new("Avocado", Fat(FatSource::Avocado)),
    // Vegetables
    CatalogEntry::new("Spinach", Vegetable),
    CatalogEntry::new("Okra (Bhindi)", Vegetable),
    CatalogEntry::new("Cauliflower", Vegetable),
    CatalogEntry::new("Broccoli", Vegetable),
    CatalogEntry::new("Cabbage", Vegetable),
    CatalogEntry::new("Eggplant (Baingan)", Vegetable),
    CatalogEntry::new("Bell Pepper", Vegetable),
    CatalogEntry::new("Tomato", Vegetable),
    CatalogEntry::new("Cucumber", Vegetable),
    CatalogEntry::new("Carrot", Vegetable),
    CatalogEntry::new("Green Beans", Vegetable),
    CatalogEntry::new("Bitter Gourd (Karela)", Vegetable),
    // Fruits
    CatalogEntry::new("Banana", Fruit),
    CatalogEntry::new("Apple", Fruit),
    CatalogEntry::new("Mango", Fruit),
    CatalogEntry::new("Papaya", Fruit),
    CatalogEntry::new("Guava", Fruit),
    CatalogEntry::new("Orange", Fruit),
    CatalogEntry::new("Pomegranate", Fruit),
    CatalogEntry::new("Mixed Berries", Fruit),
];

/// Why a preference label failed catalog validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum CatalogIssueKind {
    /// Label is not in the catalog
    UnknownLabel,
    /// Label exists but belongs to another category
    WrongCategory {
        /// Category the catalog files the label under
        expected: FoodCategory,
    },
}

/// A preference label rejected by catalog validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    /// Offending label
    pub label: String,
    /// Category it was submitted under
    pub category: FoodCategory,
    /// What is wrong with it
    #[serde(flatten)]
    pub kind: CatalogIssueKind,
}

/// Food catalog
#[derive(Debug, Clone, Copy)]
pub struct FoodCatalog {
    entries: &'static [CatalogEntry],
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FoodCatalog {
    /// The built-in South-Asian catalog
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES,
        }
    }

    /// All entries in display order
    #[must_use]
    pub const fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Entries of one category in display order
    pub fn entries_in(&self, category: FoodCategory) -> impl Iterator<Item = &'static CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category() == category)
    }

    /// Exact, case-insensitive lookup ignoring surrounding whitespace
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<&'static CatalogEntry> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(label))
    }

    /// Replace catalog labels with their catalog spelling
    ///
    /// Labels outside the catalog, or filed under another category, are kept
    /// as given so validation can still report them.
    #[must_use]
    pub fn canonicalize(&self, preferences: FoodPreferenceSet) -> FoodPreferenceSet {
        preferences.map_labels(|category, label| match self.lookup(&label) {
            Some(entry) if entry.category() == category => entry.label.to_owned(),
            _ => label,
        })
    }

    /// Protein source for a label
    #[must_use]
    pub fn classify_protein(&self, label: &str) -> ProteinSource {
        match self.lookup(label).map(|entry| entry.kind) {
            Some(Protein(source)) => source,
            _ => ProteinSource::from_keywords(label),
        }
    }

    /// Carb source for a label
    #[must_use]
    pub fn classify_carb(&self, label: &str) -> CarbSource {
        match self.lookup(label).map(|entry| entry.kind) {
            Some(Carb(source)) => source,
            _ => CarbSource::from_keywords(label),
        }
    }

    /// Fat source for a label
    #[must_use]
    pub fn classify_fat(&self, label: &str) -> FatSource {
        match self.lookup(label).map(|entry| entry.kind) {
            Some(Fat(source)) => source,
            _ => FatSource::from_keywords(label),
        }
    }

    /// Report labels that are unknown or filed under the wrong category
    #[must_use]
    pub fn validate_preferences(&self, preferences: &FoodPreferenceSet) -> Vec<CatalogIssue> {
        FoodCategory::ALL
            .into_iter()
            .flat_map(move |category| {
                preferences
                    .labels(category)
                    .iter()
                    .filter_map(move |label| {
                        let kind = match self.lookup(label) {
                            None => CatalogIssueKind::UnknownLabel,
                            Some(entry) if entry.category() != category => {
                                CatalogIssueKind::WrongCategory {
                                    expected: entry.category(),
                                }
                            }
                            Some(_) => return None,
                        };
                        Some(CatalogIssue {
                            label: label.clone(),
                            category,
                            kind,
                        })
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = FoodCatalog::builtin();
        let entry = catalog.lookup("  egg (whole) ").map(|e| e.label);
        assert_eq!(entry, Some("Egg (Whole)"));
    }

    #[test]
    fn test_catalog_tag_wins_over_keywords() {
        let catalog = FoodCatalog::builtin();
        // "Rajma" carries no legume keyword
        assert_eq!(ProteinSource::from_keywords("Rajma (Kidney Beans)"), ProteinSource::Other);
        assert_eq!(
            catalog.classify_protein("Rajma (Kidney Beans)"),
            ProteinSource::Legume
        );
    }

    #[test]
    fn test_keyword_fallback_for_unknown_labels() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.classify_protein("Tandoori CHICKEN"), ProteinSource::Chicken);
        assert_eq!(catalog.classify_carb("jeera rice"), CarbSource::Rice);
        assert_eq!(catalog.classify_fat("Sesame Oil"), FatSource::CookingFat);
        assert_eq!(catalog.classify_fat("Pumpkin Seeds"), FatSource::SeedsNuts);
    }

    #[test]
    fn test_catalog_labels_are_unique() {
        let catalog = FoodCatalog::builtin();
        for entry in catalog.entries() {
            let matches = catalog
                .entries()
                .iter()
                .filter(|other| other.label.eq_ignore_ascii_case(entry.label))
                .count();
            assert_eq!(matches, 1, "duplicate label {}", entry.label);
        }
    }

    #[test]
    fn test_canonicalize_uses_catalog_spelling() {
        let prefs = FoodPreferenceSet {
            proteins: vec!["egg (WHOLE)".to_owned(), "Dragonfruit".to_owned()],
            carbs: vec!["naan".to_owned(), "ghee".to_owned()],
            ..FoodPreferenceSet::default()
        };
        let canonical = FoodCatalog::builtin().canonicalize(prefs);
        assert_eq!(canonical.proteins, vec!["Egg (Whole)", "Dragonfruit"]);
        assert_eq!(canonical.carbs, vec!["Naan", "ghee"]);
    }

    #[test]
    fn test_validate_preferences_reports_wrong_category() {
        let prefs = FoodPreferenceSet {
            proteins: vec!["Paneer".to_owned(), "Dragonfruit".to_owned()],
            carbs: vec!["Ghee".to_owned()],
            ..FoodPreferenceSet::default()
        };
        let issues = FoodCatalog::builtin().validate_preferences(&prefs);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, CatalogIssueKind::UnknownLabel);
        assert_eq!(
            issues[1].kind,
            CatalogIssueKind::WrongCategory {
                expected: FoodCategory::Fat
            }
        );
    }
}
