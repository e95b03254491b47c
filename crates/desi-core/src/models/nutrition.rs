// ABOUTME: Energy target and macro models shared by the calculator and meal planner
// ABOUTME: EnergyTarget, MacroGrams, and intake/cardio log entries with daily progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whole-gram macronutrient amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein: u32,
    /// Carbohydrates (grams)
    pub carbs: u32,
    /// Fat (grams)
    pub fat: u32,
}

impl MacroGrams {
    /// Create a macro triple
    #[must_use]
    pub const fn new(protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Energy implied by these grams using 4/4/9 kcal per gram
    #[must_use]
    pub fn kcal(&self) -> f64 {
        f64::from(self.fat).mul_add(
            KCAL_PER_GRAM_FAT,
            f64::from(self.protein).mul_add(
                KCAL_PER_GRAM_PROTEIN,
                f64::from(self.carbs) * KCAL_PER_GRAM_CARBS,
            ),
        )
    }

    /// Component-wise sum
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            protein: self.protein.saturating_add(other.protein),
            carbs: self.carbs.saturating_add(other.carbs),
            fat: self.fat.saturating_add(other.fat),
        }
    }

    /// Component-wise difference floored at zero
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            protein: self.protein.saturating_sub(other.protein),
            carbs: self.carbs.saturating_sub(other.carbs),
            fat: self.fat.saturating_sub(other.fat),
        }
    }
}

/// Goal-adjusted daily energy target
///
/// All values are whole kcal / grams. The all-zero value (`Default`) is the
/// "not computed" sentinel produced for an incomplete profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyTarget {
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted calorie target (kcal/day)
    pub daily_calories: u32,
    /// Daily macro split of `daily_calories`
    pub macros: MacroGrams,
}

impl EnergyTarget {
    /// The "not yet calculated" target
    #[must_use]
    pub const fn not_computed() -> Self {
        Self {
            bmr: 0,
            tdee: 0,
            daily_calories: 0,
            macros: MacroGrams::new(0, 0, 0),
        }
    }

    /// Whether this target came from a complete profile
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.tdee > 0
    }
}

/// A logged food serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Entry id
    pub id: Uuid,
    /// Food label
    pub label: String,
    /// Servings eaten
    pub servings: f64,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fat per serving (grams)
    pub fat_g: f64,
    /// When the entry was logged
    pub logged_at: DateTime<Utc>,
}

/// A logged cardio session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioLogEntry {
    /// Entry id
    pub id: Uuid,
    /// Activity name (e.g. "Brisk walk")
    pub activity: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Energy burned (kcal)
    pub calories_burned: f64,
    /// When the session was logged
    pub logged_at: DateTime<Utc>,
}

/// Intake and expenditure for one day measured against an `EnergyTarget`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Calories eaten
    pub consumed_calories: u32,
    /// Macros eaten
    pub consumed_macros: MacroGrams,
    /// Calories burned through logged cardio
    pub burned_calories: u32,
    /// Consumed minus burned (negative when cardio outweighs intake)
    pub net_calories: i64,
    /// Target minus net (negative when over target)
    pub remaining_calories: i64,
    /// Macro grams still available, floored at zero
    pub remaining_macros: MacroGrams,
    /// Consumed calories as a percentage of the target, one decimal (0 when not computed)
    pub percent_of_target: f64,
}
