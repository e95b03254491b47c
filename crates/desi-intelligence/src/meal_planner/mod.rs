// ABOUTME: Rule-based daily meal plan generator built on the energy target and food preferences
// ABOUTME: Orchestrates slot distribution, food selection, portion sizing, and guidance text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Meal Plan Generator
//!
//! Produces one suggestion per main meal plus a snack from an [`EnergyTarget`]
//! and a [`FoodPreferenceSet`]. Generation is deterministic: identical inputs
//! always produce an identical plan.
//!
//! Proteins and carbs are mandatory and checked before anything else is
//! computed. Fats, vegetables and fruits are optional: a missing fat or
//! vegetable line is omitted from the meals, and the snack templates fall back
//! to generic placeholders.

/// Cooking tips, meal names and snack text
pub mod guidance;
/// Serving size descriptions
pub mod portions;
/// Protein and carb assignment rules
pub mod selection;

pub use portions::{portion_size, portion_size_with};
pub use selection::{select_carbs, select_proteins, DailyPicks};

use crate::config::PlannerConfig;
use crate::food_catalog::FoodCatalog;
use crate::nutrition_calculator::meal_share;
use desi_core::constants::meal_plan::VEGETABLES_PER_MEAL;
use desi_core::errors::PlanningError;
use desi_core::models::{
    EnergyTarget, FoodCategory, FoodPreferenceSet, FoodRole, MealKind, MealPlan, MealSlot,
    PlannedFood, SnackSlot,
};
use tracing::debug;

/// Meal plan generator bound to a set of tables and a catalog
#[derive(Debug, Clone, Default)]
pub struct MealPlanGenerator {
    config: PlannerConfig,
    catalog: FoodCatalog,
}

impl MealPlanGenerator {
    /// Create a generator with the given tables and the built-in catalog
    #[must_use]
    pub const fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            catalog: FoodCatalog::builtin(),
        }
    }

    /// Replace the food catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: FoodCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Tables in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate a daily plan
    ///
    /// Preferences are normalised (trimmed, blanks dropped, duplicates removed)
    /// before use.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::MissingMandatoryPreference` when no protein or no
    /// carb remains after normalisation. No partial plan is ever returned.
    pub fn generate(
        &self,
        target: &EnergyTarget,
        preferences: &FoodPreferenceSet,
    ) -> Result<MealPlan, PlanningError> {
        let preferences = preferences.clone().normalized();
        preferences.ensure_mandatory()?;

        let proteins = select_proteins(&self.catalog, &preferences.proteins).ok_or(
            PlanningError::MissingMandatoryPreference {
                category: FoodCategory::Protein,
            },
        )?;
        let carbs = select_carbs(&self.catalog, &preferences.carbs).ok_or(
            PlanningError::MissingMandatoryPreference {
                category: FoodCategory::Carb,
            },
        )?;

        for category in [FoodCategory::Fat, FoodCategory::Vegetable, FoodCategory::Fruit] {
            if preferences.labels(category).is_empty() {
                debug!(%category, "No preference selected, degrading suggestions");
            }
        }

        let fat = preferences.fats.first().map(String::as_str);
        let vegetables: Vec<&str> = preferences
            .vegetables
            .iter()
            .take(VEGETABLES_PER_MEAL)
            .map(String::as_str)
            .collect();

        let meal = |kind: MealKind, protein: &str, carb: &str| {
            self.build_meal(target, kind, protein, carb, fat, &vegetables)
        };

        Ok(MealPlan {
            breakfast: meal(MealKind::Breakfast, proteins.breakfast, carbs.breakfast),
            lunch: meal(MealKind::Lunch, proteins.lunch, carbs.lunch),
            dinner: meal(MealKind::Dinner, proteins.dinner, carbs.dinner),
            snack: self.build_snack(target, &preferences),
            total_calories: target.daily_calories,
            total_macros: target.macros,
        })
    }

    fn build_meal(
        &self,
        target: &EnergyTarget,
        kind: MealKind,
        protein: &str,
        carb: &str,
        fat: Option<&str>,
        vegetables: &[&str],
    ) -> MealSlot {
        let (target_calories, target_macros) =
            meal_share(target, kind, &self.config.nutrition.meal_distribution);
        let protein_source = self.catalog.classify_protein(protein);
        let carb_source = self.catalog.classify_carb(carb);

        let planned = |label: &str, role: FoodRole, grams: u32| PlannedFood {
            label: label.to_owned(),
            role,
            portion: portion_size_with(&self.config.portions, &self.catalog, role, grams, label),
        };

        let mut foods = vec![
            planned(protein, FoodRole::Protein, target_macros.protein),
            planned(carb, FoodRole::Carb, target_macros.carbs),
        ];
        foods.extend(fat.map(|label| planned(label, FoodRole::Fat, target_macros.fat)));
        foods.extend(
            vegetables
                .iter()
                .copied()
                .map(|label| planned(label, FoodRole::Vegetable, 0)),
        );

        MealSlot {
            kind,
            name: guidance::meal_name(kind, protein_source, protein, carb_source, carb),
            target_calories,
            target_macros,
            foods,
            cooking_tips: guidance::cooking_tips(kind, protein_source, carb_source, vegetables),
        }
    }

    fn build_snack(&self, target: &EnergyTarget, preferences: &FoodPreferenceSet) -> SnackSlot {
        let (target_calories, target_macros) =
            meal_share(target, MealKind::Snack, &self.config.nutrition.meal_distribution);
        let (recommendation, options) = guidance::snack_ideas(
            &preferences.fats,
            &preferences.fruits,
            &preferences.vegetables,
        );

        SnackSlot {
            target_calories,
            target_macros,
            recommendation,
            options,
        }
    }
}

/// Generate a plan with the default tables and built-in catalog
///
/// # Errors
///
/// Returns `PlanningError::MissingMandatoryPreference` when proteins or carbs are empty
pub fn generate_plan(
    target: &EnergyTarget,
    preferences: &FoodPreferenceSet,
) -> Result<MealPlan, PlanningError> {
    MealPlanGenerator::default().generate(target, preferences)
}
