// ABOUTME: Portion sizing from a per-meal macro gram target to a serving description
// ABOUTME: Dispatches on the typed food source and the configured multiplier tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::config::PortionConfig;
use crate::food_catalog::{CarbSource, FatSource, FoodCatalog, ProteinSource};
use crate::nutrition_calculator::round_non_negative;
use desi_core::constants::meal_plan::VEGETABLE_PORTION;
use desi_core::models::FoodRole;

/// Serving description using the default tables and built-in catalog
///
/// ```
/// use desi_core::models::FoodRole;
/// use desi_intelligence::meal_planner::portion_size;
///
/// assert_eq!(portion_size(FoodRole::Protein, 40, "Egg (Whole)"), "7 egg(s)");
/// ```
#[must_use]
pub fn portion_size(role: FoodRole, target_grams: u32, label: &str) -> String {
    portion_size_with(
        &PortionConfig::default(),
        &FoodCatalog::builtin(),
        role,
        target_grams,
        label,
    )
}

/// Serving description for `target_grams` of the role's macro
///
/// Vegetables ignore the target and always get a fixed cup measure.
#[must_use]
pub fn portion_size_with(
    config: &PortionConfig,
    catalog: &FoodCatalog,
    role: FoodRole,
    target_grams: u32,
    label: &str,
) -> String {
    let grams = f64::from(target_grams);
    match role {
        FoodRole::Protein => protein_portion(config, catalog.classify_protein(label), grams),
        FoodRole::Carb => carb_portion(config, catalog.classify_carb(label), grams),
        FoodRole::Fat => fat_portion(config, catalog.classify_fat(label), grams),
        FoodRole::Vegetable => VEGETABLE_PORTION.to_owned(),
    }
}

fn protein_portion(config: &PortionConfig, source: ProteinSource, grams: f64) -> String {
    let table = &config.protein;
    let amount = |multiplier: f64| round_non_negative(grams * multiplier);
    match source {
        ProteinSource::Egg => {
            let eggs = round_non_negative(grams / table.protein_grams_per_egg).max(1);
            format!("{eggs} egg(s)")
        }
        ProteinSource::Chicken | ProteinSource::Beef | ProteinSource::Goat => {
            format!("{}g (raw weight)", amount(table.multiplier(source)))
        }
        ProteinSource::Legume => format!("{}g (uncooked)", amount(table.multiplier(source))),
        ProteinSource::Lamb
        | ProteinSource::Fish
        | ProteinSource::Paneer
        | ProteinSource::Yogurt
        | ProteinSource::Other => format!("{}g", amount(table.multiplier(source))),
    }
}

fn carb_portion(config: &PortionConfig, source: CarbSource, grams: f64) -> String {
    let amount = round_non_negative(grams * config.carbs.multiplier(source));
    match source {
        CarbSource::Rice => format!("{amount}g (cooked)"),
        CarbSource::Oats => format!("{amount}g (uncooked)"),
        CarbSource::Roti
        | CarbSource::Chapati
        | CarbSource::Naan
        | CarbSource::Potato
        | CarbSource::Other => format!("{amount}g"),
    }
}

fn fat_portion(config: &PortionConfig, source: FatSource, grams: f64) -> String {
    let table = &config.fats;
    match source {
        FatSource::CookingFat => {
            let tbsp = round_non_negative(grams / table.fat_grams_per_tablespoon).max(1);
            format!("{tbsp} tbsp")
        }
        FatSource::Avocado => {
            let units = round_non_negative(grams / table.fat_grams_per_avocado);
            format!("{units} medium avocado(s)")
        }
        FatSource::SeedsNuts => format!("{}g", round_non_negative(grams * table.seeds_nuts)),
        FatSource::Other => format!("{}g", round_non_negative(grams * table.other)),
    }
}
