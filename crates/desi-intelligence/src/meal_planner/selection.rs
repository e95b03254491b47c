// ABOUTME: Deterministic protein and carb selection rules for breakfast, lunch, and dinner
// ABOUTME: Group priorities per slot with protein exclusion so main meals avoid repeats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::food_catalog::{CarbGroup, FoodCatalog, ProteinGroup};
use desi_core::models::MealKind;

/// Labels chosen for the three main meals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPicks<'a> {
    /// Breakfast label
    pub breakfast: &'a str,
    /// Lunch label
    pub lunch: &'a str,
    /// Dinner label
    pub dinner: &'a str,
}

impl<'a> DailyPicks<'a> {
    /// Label for a main meal; the snack slot has no pick
    #[must_use]
    pub const fn for_meal(&self, kind: MealKind) -> Option<&'a str> {
        match kind {
            MealKind::Breakfast => Some(self.breakfast),
            MealKind::Lunch => Some(self.lunch),
            MealKind::Dinner => Some(self.dinner),
            MealKind::Snack => None,
        }
    }
}

/// First label, in insertion order, that satisfies `keep`
fn first_where<'a>(labels: &'a [String], keep: impl Fn(&str) -> bool) -> Option<&'a str> {
    labels.iter().map(String::as_str).find(|&label| keep(label))
}

/// Assign proteins to breakfast, lunch, and dinner
///
/// - Breakfast: egg, then dairy, then legume, then the first preference.
/// - Lunch: meat, then fish, then anything, each excluding breakfast's pick;
///   falls back to the second preference (or the first if it is alone).
/// - Dinner: fish, then meat, then anything, each excluding both earlier picks;
///   falls back to the last preference.
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn select_proteins<'a>(catalog: &FoodCatalog, proteins: &'a [String]) -> Option<DailyPicks<'a>> {
    let in_group = |label: &str, group: ProteinGroup| catalog.classify_protein(label).group() == Some(group);

    let breakfast = first_where(proteins, |l| in_group(l, ProteinGroup::Egg))
        .or_else(|| first_where(proteins, |l| in_group(l, ProteinGroup::Dairy)))
        .or_else(|| first_where(proteins, |l| in_group(l, ProteinGroup::Legume)))
        .or_else(|| proteins.first().map(String::as_str))?;

    let lunch = first_where(proteins, |l| l != breakfast && in_group(l, ProteinGroup::Meat))
        .or_else(|| first_where(proteins, |l| l != breakfast && in_group(l, ProteinGroup::Fish)))
        .or_else(|| first_where(proteins, |l| l != breakfast))
        .or_else(|| proteins.get(1).or_else(|| proteins.first()).map(String::as_str))?;

    let unused = |l: &str| l != breakfast && l != lunch;
    let dinner = first_where(proteins, |l| unused(l) && in_group(l, ProteinGroup::Fish))
        .or_else(|| first_where(proteins, |l| unused(l) && in_group(l, ProteinGroup::Meat)))
        .or_else(|| first_where(proteins, unused))
        .or_else(|| proteins.last().map(String::as_str))?;

    Some(DailyPicks {
        breakfast,
        lunch,
        dinner,
    })
}

/// Assign carbs to breakfast, lunch, and dinner
///
/// - Breakfast: light (oats, potato), then bread, then the first preference.
/// - Lunch: rice, then bread, then the first preference.
/// - Dinner: bread, then rice, then the first preference.
///
/// Carbs may repeat across meals. Returns `None` only for an empty list.
#[must_use]
pub fn select_carbs<'a>(catalog: &FoodCatalog, carbs: &'a [String]) -> Option<DailyPicks<'a>> {
    let pick = |order: [CarbGroup; 2]| {
        order
            .into_iter()
            .find_map(|group| {
                first_where(carbs, |l| catalog.classify_carb(l).group() == Some(group))
            })
            .or_else(|| carbs.first().map(String::as_str))
    };

    Some(DailyPicks {
        breakfast: pick([CarbGroup::Light, CarbGroup::Bread])?,
        lunch: pick([CarbGroup::Rice, CarbGroup::Bread])?,
        dinner: pick([CarbGroup::Bread, CarbGroup::Rice])?,
    })
}
