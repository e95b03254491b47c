// ABOUTME: Per-user food preference set drawn from the closed food catalog
// ABOUTME: FoodCategory enum, normalisation, and mandatory-category checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use super::profile::canonical_token;
use crate::errors::PlanningError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Food catalog category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FoodCategory {
    /// Protein sources
    Protein,
    /// Carbohydrate sources
    Carb,
    /// Fats and oils
    Fat,
    /// Vegetables
    Vegetable,
    /// Fruits
    Fruit,
}

impl FoodCategory {
    /// All categories in preference-form order
    pub const ALL: [Self; 5] = [
        Self::Protein,
        Self::Carb,
        Self::Fat,
        Self::Vegetable,
        Self::Fruit,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Fat => "fat",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
        }
    }

    /// Whether plan generation refuses to run without this category
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Self::Protein | Self::Carb)
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(s);
        let singular = token.strip_suffix('s').unwrap_or(&token);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == singular)
            .ok_or_else(|| PlanningError::unknown_enum("food_category", s))
    }
}

impl TryFrom<String> for FoodCategory {
    type Error = PlanningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Food labels a user prefers, per category, in the order they were picked
///
/// Insertion order matters: tie-breaks in the meal planner always take the
/// earliest matching label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodPreferenceSet {
    /// Protein labels
    pub proteins: Vec<String>,
    /// Carbohydrate labels
    pub carbs: Vec<String>,
    /// Fat labels
    pub fats: Vec<String>,
    /// Vegetable labels
    pub vegetables: Vec<String>,
    /// Fruit labels
    pub fruits: Vec<String>,
}

impl FoodPreferenceSet {
    /// Labels for one category
    #[must_use]
    pub fn labels(&self, category: FoodCategory) -> &[String] {
        match category {
            FoodCategory::Protein => &self.proteins,
            FoodCategory::Carb => &self.carbs,
            FoodCategory::Fat => &self.fats,
            FoodCategory::Vegetable => &self.vegetables,
            FoodCategory::Fruit => &self.fruits,
        }
    }

    fn labels_mut(&mut self, category: FoodCategory) -> &mut Vec<String> {
        match category {
            FoodCategory::Protein => &mut self.proteins,
            FoodCategory::Carb => &mut self.carbs,
            FoodCategory::Fat => &mut self.fats,
            FoodCategory::Vegetable => &mut self.vegetables,
            FoodCategory::Fruit => &mut self.fruits,
        }
    }

    /// Trim labels, drop blanks, and remove duplicates keeping first occurrence
    ///
    /// Duplicates are detected ignoring ASCII case, matching catalog lookup.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for category in FoodCategory::ALL {
            let labels = self.labels_mut(category);
            let mut seen = HashSet::new();
            let cleaned: Vec<String> = labels
                .drain(..)
                .map(|label| label.trim().to_owned())
                .filter(|label| !label.is_empty() && seen.insert(label.to_ascii_lowercase()))
                .collect();
            *labels = cleaned;
        }
        self
    }

    /// Rewrite every label of every category with `rewrite`, keeping order
    #[must_use]
    pub fn map_labels(mut self, rewrite: impl Fn(FoodCategory, String) -> String) -> Self {
        for category in FoodCategory::ALL {
            let labels = self.labels_mut(category);
            let rewritten: Vec<String> = labels
                .drain(..)
                .map(|label| rewrite(category, label))
                .collect();
            *labels = rewritten;
        }
        self
    }

    /// Total number of selected labels
    #[must_use]
    pub fn len(&self) -> usize {
        FoodCategory::ALL
            .iter()
            .map(|category| self.labels(*category).len())
            .sum()
    }

    /// Whether nothing has been selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ensure proteins and carbs are both non-empty
    ///
    /// # Errors
    ///
    /// Returns `MissingMandatoryPreference` naming the first empty mandatory category
    pub fn ensure_mandatory(&self) -> Result<(), PlanningError> {
        FoodCategory::ALL
            .into_iter()
            .filter(FoodCategory::is_mandatory)
            .find(|category| self.labels(*category).is_empty())
            .map_or(Ok(()), |category| {
                Err(PlanningError::MissingMandatoryPreference { category })
            })
    }
}
