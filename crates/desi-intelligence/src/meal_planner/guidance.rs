// ABOUTME: Presentation text for meal suggestions: display names, cooking tips, snack ideas
// ABOUTME: Content tables keyed by typed food source and meal slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Meal guidance text
//!
//! Tips are collected in a fixed priority order (protein, carb, vegetables,
//! meal time) and truncated to [`MAX_COOKING_TIPS`].

use crate::food_catalog::{CarbSource, ProteinSource};
use desi_core::constants::meal_plan::{MAX_COOKING_TIPS, MAX_SNACK_OPTIONS};
use desi_core::models::MealKind;

const NUTS_PLACEHOLDER: &str = "Mixed nuts";
const FRUIT_PLACEHOLDER: &str = "seasonal fruit";
const VEGETABLE_PLACEHOLDER: &str = "Vegetable sticks";

/// Short word naming a label on a menu: the catalog word for known sources,
/// otherwise the label's first word
fn short_name<'a>(known: Option<&'static str>, label: &'a str) -> &'a str {
    match known {
        Some(word) => word,
        None => label.split_whitespace().next().unwrap_or(label),
    }
}

const fn protein_word(source: ProteinSource) -> Option<&'static str> {
    match source {
        ProteinSource::Egg => Some("Egg"),
        ProteinSource::Chicken => Some("Chicken"),
        ProteinSource::Beef => Some("Beef"),
        ProteinSource::Goat => Some("Mutton"),
        ProteinSource::Lamb => Some("Lamb"),
        ProteinSource::Fish => Some("Fish"),
        ProteinSource::Legume => Some("Dal"),
        ProteinSource::Paneer => Some("Paneer"),
        ProteinSource::Yogurt => Some("Yogurt"),
        ProteinSource::Other => None,
    }
}

const fn carb_word(source: CarbSource) -> Option<&'static str> {
    match source {
        CarbSource::Rice => Some("Rice"),
        CarbSource::Roti => Some("Roti"),
        CarbSource::Chapati => Some("Chapati"),
        CarbSource::Naan => Some("Naan"),
        CarbSource::Oats => Some("Oats"),
        CarbSource::Potato => Some("Potato"),
        CarbSource::Other => None,
    }
}

/// Display name for a main meal
///
/// Breakfast is named after its protein (`"Egg Breakfast"`); lunch and dinner
/// name protein and carb (`"Chicken & Rice Lunch"`).
#[must_use]
pub fn meal_name(
    kind: MealKind,
    protein: ProteinSource,
    protein_label: &str,
    carb: CarbSource,
    carb_label: &str,
) -> String {
    let protein = short_name(protein_word(protein), protein_label);
    match kind {
        MealKind::Breakfast | MealKind::Snack => format!("{protein} {}", kind.title()),
        MealKind::Lunch | MealKind::Dinner => {
            let carb = short_name(carb_word(carb), carb_label);
            format!("{protein} & {carb} {}", kind.title())
        }
    }
}

const fn protein_tip(source: ProteinSource) -> Option<&'static str> {
    match source {
        ProteinSource::Egg => Some("Boil or scramble the eggs with minimal oil"),
        ProteinSource::Chicken => {
            Some("Marinate the chicken in yogurt and spices, then grill or bake it")
        }
        ProteinSource::Beef | ProteinSource::Goat | ProteinSource::Lamb => {
            Some("Trim visible fat and slow-cook the meat with tomatoes and spices")
        }
        ProteinSource::Fish => Some("Bake or pan-sear the fish with turmeric and lemon instead of frying"),
        ProteinSource::Legume => Some("Soak the dal or chana beforehand to cut cooking time"),
        ProteinSource::Paneer => Some("Grill or lightly saute the paneer rather than deep frying"),
        ProteinSource::Yogurt => Some("Choose plain unsweetened yogurt and add your own spices or fruit"),
        ProteinSource::Other => None,
    }
}

const fn carb_tip(source: CarbSource) -> Option<&'static str> {
    match source {
        CarbSource::Rice => Some("Rinse the rice before cooking and weigh it once cooked"),
        CarbSource::Roti | CarbSource::Chapati => {
            Some("Use whole wheat atta and skip the ghee brushed on top")
        }
        CarbSource::Naan => Some("Pick whole wheat naan and skip the butter glaze"),
        CarbSource::Oats => Some("Cook the oats in water or milk and sweeten with fruit"),
        CarbSource::Potato => Some("Boil or roast the potatoes with skin on instead of frying"),
        CarbSource::Other => None,
    }
}

const fn meal_time_tip(kind: MealKind) -> &'static str {
    match kind {
        MealKind::Breakfast => "Eat within two hours of waking",
        MealKind::Lunch => "Eat slowly and stop when you are about 80% full",
        MealKind::Dinner => "Finish dinner at least two hours before bed",
        MealKind::Snack => "Keep snacks to a single small portion",
    }
}

fn vegetable_tip(vegetables: &[&str]) -> Option<String> {
    match vegetables {
        [] => None,
        [only] => Some(format!("Add {only} for fibre and micronutrients")),
        [first, second, ..] => Some(format!(
            "Add {first} and {second} for fibre and micronutrients"
        )),
    }
}

/// Up to three cooking tips in priority order
#[must_use]
pub fn cooking_tips(
    kind: MealKind,
    protein: ProteinSource,
    carb: CarbSource,
    vegetables: &[&str],
) -> Vec<String> {
    [
        protein_tip(protein).map(str::to_owned),
        carb_tip(carb).map(str::to_owned),
        vegetable_tip(vegetables),
        Some(meal_time_tip(kind).to_owned()),
    ]
    .into_iter()
    .flatten()
    .take(MAX_COOKING_TIPS)
    .collect()
}

/// The four snack templates filled from the first fat, fruit, and vegetable
/// preferences, with placeholders for empty categories
#[must_use]
pub fn snack_templates(fats: &[String], fruits: &[String], vegetables: &[String]) -> [String; 4] {
    let first_fruit = fruits.first().map_or(FRUIT_PLACEHOLDER, String::as_str);
    let second_fruit = fruits.get(1).map_or(first_fruit, String::as_str);
    let first_vegetable = vegetables.first().map_or(VEGETABLE_PLACEHOLDER, String::as_str);

    [
        fats.first().map_or_else(
            || NUTS_PLACEHOLDER.to_owned(),
            |fat| format!("{NUTS_PLACEHOLDER} ({fat})"),
        ),
        format!("Greek yogurt with {first_fruit}"),
        format!("{first_vegetable} with hummus"),
        format!("Protein smoothie with {second_fruit}"),
    ]
}

/// Primary snack recommendation and the first options
#[must_use]
pub fn snack_ideas(fats: &[String], fruits: &[String], vegetables: &[String]) -> (String, Vec<String>) {
    let templates = snack_templates(fats, fruits, vegetables);
    let options: Vec<String> = templates.iter().take(MAX_SNACK_OPTIONS).cloned().collect();
    let [primary, ..] = templates;
    (primary, options)
}
