// ABOUTME: Integration tests for the rule-based meal plan generator
// ABOUTME: Selection rules, portion text, guidance, slot arithmetic and error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
#![allow(clippy::unwrap_used)]

mod common;

use desi_core::errors::PlanningError;
use desi_core::models::{FoodCategory, FoodPreferenceSet, FoodRole, MealPlan, MealSlot};
use desi_intelligence::generate_plan;

fn portion(meal: &MealSlot, role: FoodRole) -> (&str, &str) {
    let food = meal.food(role).unwrap();
    (food.label.as_str(), food.portion.as_str())
}

fn reference_plan() -> MealPlan {
    common::init_test_logging();
    generate_plan(&common::reference_target(), &common::full_preferences()).unwrap()
}

#[test]
fn test_breakfast_prefers_egg_and_light_carb() {
    let plan = reference_plan();
    let breakfast = &plan.breakfast;

    assert_eq!(breakfast.name, "Egg Breakfast");
    assert_eq!(breakfast.target_calories, 495);
    // 31g protein / 6g per egg
    assert_eq!(portion(breakfast, FoodRole::Protein), ("Egg (Whole)", "5 egg(s)"));
    // 56g carbs * 1.5
    assert_eq!(portion(breakfast, FoodRole::Carb), ("Oats", "84g (uncooked)"));
    // 17g fat / 11g per tbsp
    assert_eq!(portion(breakfast, FoodRole::Fat), ("Ghee", "2 tbsp"));
}

#[test]
fn test_lunch_and_dinner_rotate_proteins_and_carbs() {
    let plan = reference_plan();

    assert_eq!(plan.lunch.name, "Chicken & Rice Lunch");
    assert_eq!(
        portion(&plan.lunch, FoodRole::Protein),
        ("Chicken Breast (Uncooked)", "194g (raw weight)")
    );
    assert_eq!(portion(&plan.lunch, FoodRole::Carb), ("Basmati Rice", "273g (cooked)"));

    assert_eq!(plan.dinner.name, "Fish & Roti Dinner");
    assert_eq!(portion(&plan.dinner, FoodRole::Protein), ("Fish (Rohu)", "215g"));
    assert_eq!(portion(&plan.dinner, FoodRole::Carb), ("Roti (Whole Wheat)", "156g"));
}

#[test]
fn test_vegetables_and_tips() {
    let plan = reference_plan();
    for meal in plan.main_meals() {
        let vegetables: Vec<_> = meal
            .foods
            .iter()
            .filter(|f| f.role == FoodRole::Vegetable)
            .map(|f| (f.label.as_str(), f.portion.as_str()))
            .collect();
        assert_eq!(
            vegetables,
            vec![("Spinach", "1 cup chopped"), ("Okra (Bhindi)", "1 cup chopped")]
        );
        assert!(!meal.cooking_tips.is_empty());
        assert!(meal.cooking_tips.len() <= 3);
    }
    assert_eq!(
        plan.breakfast.cooking_tips[2],
        "Add Spinach and Okra (Bhindi) for fibre and micronutrients"
    );
}

#[test]
fn test_snack_uses_first_fat_and_fruit() {
    let plan = reference_plan();
    assert_eq!(plan.snack.target_calories, 99);
    assert_eq!(plan.snack.recommendation, "Mixed nuts (Ghee)");
    assert_eq!(
        plan.snack.options,
        vec!["Mixed nuts (Ghee)".to_owned(), "Greek yogurt with Banana".to_owned()]
    );
}

#[test]
fn test_slot_calories_sum_close_to_daily_total() {
    let plan = reference_plan();
    let allocated = i64::from(plan.allocated_calories());
    let total = i64::from(plan.total_calories);
    assert_eq!(plan.total_calories, 1979);
    assert!((allocated - total).abs() <= 2, "allocated {allocated} vs {total}");
}

#[test]
fn test_single_protein_repeats_across_meals() {
    let plan = generate_plan(&common::reference_target(), &common::minimal_preferences()).unwrap();
    for meal in plan.main_meals() {
        assert_eq!(meal.food(FoodRole::Protein).unwrap().label, "Paneer");
        assert!(meal.food(FoodRole::Fat).is_none());
    }
    assert_eq!(plan.breakfast.name, "Paneer Breakfast");
    assert_eq!(plan.snack.recommendation, "Mixed nuts");
    assert_eq!(
        plan.snack.options[1],
        "Greek yogurt with seasonal fruit"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let target = common::reference_target();
    let prefs = common::full_preferences();
    assert_eq!(generate_plan(&target, &prefs).unwrap(), generate_plan(&target, &prefs).unwrap());
}

#[test]
fn test_empty_proteins_fail_before_any_computation() {
    let prefs = FoodPreferenceSet {
        proteins: Vec::new(),
        ..common::full_preferences()
    };
    let error = generate_plan(&common::reference_target(), &prefs).unwrap_err();
    assert_eq!(
        error,
        PlanningError::MissingMandatoryPreference {
            category: FoodCategory::Protein
        }
    );
    assert!(error.to_string().contains("select at least one protein and one carb"));
}

#[test]
fn test_empty_carbs_fail() {
    let prefs = FoodPreferenceSet {
        carbs: Vec::new(),
        ..common::full_preferences()
    };
    assert_eq!(
        generate_plan(&common::reference_target(), &prefs),
        Err(PlanningError::MissingMandatoryPreference {
            category: FoodCategory::Carb
        })
    );
}

#[test]
fn test_not_computed_target_still_produces_plan_shape() {
    let target = desi_core::models::EnergyTarget::not_computed();
    let plan = generate_plan(&target, &common::full_preferences()).unwrap();
    assert_eq!(plan.total_calories, 0);
    assert_eq!(plan.breakfast.target_calories, 0);
    assert_eq!(portion(&plan.breakfast, FoodRole::Protein).1, "1 egg(s)");
    assert_eq!(portion(&plan.breakfast, FoodRole::Fat).1, "1 tbsp");
}

fn picks(plan: &MealPlan, role: FoodRole) -> [String; 3] {
    plan.main_meals()
        .map(|meal| meal.food(role).unwrap().label.clone())
}

#[test]
fn test_lunch_falls_back_to_fish_without_meat() {
    let prefs = FoodPreferenceSet {
        proteins: vec!["Paneer".to_owned(), "Salmon".to_owned(), "Masoor Dal".to_owned()],
        carbs: vec!["Roti (Whole Wheat)".to_owned(), "White Rice".to_owned()],
        ..FoodPreferenceSet::default()
    };
    let plan = generate_plan(&common::reference_target(), &prefs).unwrap();
    assert_eq!(picks(&plan, FoodRole::Protein), ["Paneer", "Salmon", "Masoor Dal"]);
    // No light carb: breakfast takes bread, lunch rice, dinner bread again
    assert_eq!(
        picks(&plan, FoodRole::Carb),
        ["Roti (Whole Wheat)", "White Rice", "Roti (Whole Wheat)"]
    );
}

#[test]
fn test_unclassified_carb_fills_every_slot() {
    let prefs = FoodPreferenceSet {
        proteins: vec!["Paneer".to_owned()],
        carbs: vec!["Quinoa".to_owned()],
        ..FoodPreferenceSet::default()
    };
    let plan = generate_plan(&common::reference_target(), &prefs).unwrap();
    assert_eq!(picks(&plan, FoodRole::Carb), ["Quinoa", "Quinoa", "Quinoa"]);
    // 56g and 78g of carbs at 2g per g
    assert_eq!(portion(&plan.breakfast, FoodRole::Carb).1, "112g");
    assert_eq!(portion(&plan.lunch, FoodRole::Carb).1, "156g");
    assert_eq!(portion(&plan.dinner, FoodRole::Carb).1, "156g");
}
