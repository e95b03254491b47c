// ABOUTME: Output formatting helpers for desi-cli
// ABOUTME: Plain-text rendering of targets, plans, preferences and catalog listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use desi_core::errors::AppResult;
use desi_core::models::{
    EnergyTarget, FoodCategory, FoodPreferenceSet, MacroGrams, MealPlan, MealSlot,
};
use desi_intelligence::CatalogEntry;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn macros_line(macros: &MacroGrams) -> String {
    format!(
        "protein {}g, carbs {}g, fat {}g",
        macros.protein, macros.carbs, macros.fat
    )
}

/// Display a computed energy target
pub fn display_target(target: &EnergyTarget) {
    println!("\nDaily Energy Target");
    println!("{}", "=".repeat(40));
    println!("   BMR:            {} kcal", target.bmr);
    println!("   TDEE:           {} kcal", target.tdee);
    println!("   Daily calories: {} kcal", target.daily_calories);
    println!("   Macros:         {}", macros_line(&target.macros));
}

fn display_meal(meal: &MealSlot) {
    println!("\n{}: {}", meal.kind.title(), meal.name);
    println!(
        "   Target: {} kcal ({})",
        meal.target_calories,
        macros_line(&meal.target_macros)
    );
    for food in &meal.foods {
        println!("   - {}: {}", food.label, food.portion);
    }
    for tip in &meal.cooking_tips {
        println!("   Tip: {tip}");
    }
}

/// Display a full day plan
pub fn display_plan(plan: &MealPlan) {
    println!(
        "\nMeal Plan ({} kcal, {})",
        plan.total_calories,
        macros_line(&plan.total_macros)
    );
    println!("{}", "=".repeat(60));
    for meal in plan.main_meals() {
        display_meal(meal);
    }
    println!("\nSnack: {}", plan.snack.recommendation);
    println!("   Target: {} kcal", plan.snack.target_calories);
    if !plan.snack.options.is_empty() {
        println!("   Options: {}", plan.snack.options.join(" | "));
    }
}

/// Display a stored preference set
pub fn display_preferences(preferences: &FoodPreferenceSet) {
    println!("\nFood Preferences");
    println!("{}", "=".repeat(40));
    for category in FoodCategory::ALL {
        let labels = preferences.labels(category);
        let shown = if labels.is_empty() {
            "(none)".to_owned()
        } else {
            labels.join(", ")
        };
        println!("   {:<10} {shown}", category.as_str());
    }
}

/// Display catalog entries grouped by category
pub fn display_catalog(entries: &[&CatalogEntry]) {
    for category in FoodCategory::ALL {
        let mut in_category = entries.iter().filter(|e| e.category() == category).peekable();
        if in_category.peek().is_none() {
            continue;
        }
        println!("\n{category}");
        for entry in in_category {
            println!("   - {}", entry.label);
        }
    }
}
