// ABOUTME: Energy target tables: Mifflin-St Jeor coefficients, activity factors, goal offsets
// ABOUTME: Also holds the daily macro split and the per-meal calorie distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Energy Target Configuration
//!
//! Every constant the energy target calculator and the meal distribution step
//! depend on, as named fields with their reference defaults.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use desi_core::models::{ActivityLevel, BiologicalSex, Goal, MealKind};
use serde::{Deserialize, Serialize};

/// Energy target configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Fixed kcal offsets per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Daily macro split
    pub macro_split: MacroSplitConfig,
    /// Share of the day each meal slot receives
    pub meal_distribution: MealDistributionConfig,
}

impl NutritionConfig {
    /// Validate every table
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.macro_split.validate()?;
        self.meal_distribution.validate()
    }
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl BmrConfig {
    /// Sex-specific constant term
    #[must_use]
    pub const fn sex_constant(&self, sex: BiologicalSex) -> f64 {
        match sex {
            BiologicalSex::Male => self.msj_male_constant,
            BiologicalSex::Female => self.msj_female_constant,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }
        Ok(())
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 || self.extremely_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| self.factor(pair[0]) < self.factor(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

/// Fixed calorie offsets applied to TDEE per goal
///
/// Operator-level constants. End users pick a goal, never an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit for weight loss (kcal): -650
    pub lose_kcal: f64,
    /// Offset for maintenance (kcal): 0
    pub maintain_kcal: f64,
    /// Surplus for weight gain (kcal): +500
    pub gain_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_kcal: -650.0,
            maintain_kcal: 0.0,
            gain_kcal: 500.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Offset for a goal
    #[must_use]
    pub const fn offset(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => self.lose_kcal,
            Goal::Maintain => self.maintain_kcal,
            Goal::Gain => self.gain_kcal,
        }
    }
}

/// Daily macro split as whole percentages of the calorie target
///
/// The same split applies to every goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share (25)
    pub protein_pct: u8,
    /// Carbohydrate share (45)
    pub carbs_pct: u8,
    /// Fat share (30)
    pub fat_pct: u8,
    /// Energy density of protein (4 kcal/g)
    pub protein_kcal_per_gram: f64,
    /// Energy density of carbohydrate (4 kcal/g)
    pub carbs_kcal_per_gram: f64,
    /// Energy density of fat (9 kcal/g)
    pub fat_kcal_per_gram: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_pct: 25,
            carbs_pct: 45,
            fat_pct: 30,
            protein_kcal_per_gram: 4.0,
            carbs_kcal_per_gram: 4.0,
            fat_kcal_per_gram: 9.0,
        }
    }
}

impl MacroSplitConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let sum = u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct);
        if sum != 100 {
            return Err(ConfigError::InvalidWeights(format!(
                "macro split percentages must sum to 100, got {sum}"
            )));
        }
        if self.protein_kcal_per_gram <= 0.0
            || self.carbs_kcal_per_gram <= 0.0
            || self.fat_kcal_per_gram <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "kcal per gram values must be positive",
            ));
        }
        Ok(())
    }
}

/// Per-slot share of daily calories and of each macro
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Breakfast share (25)
    pub breakfast_pct: u8,
    /// Lunch share (35)
    pub lunch_pct: u8,
    /// Dinner share (35)
    pub dinner_pct: u8,
    /// Snack share (5)
    pub snack_pct: u8,
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            breakfast_pct: 25,
            lunch_pct: 35,
            dinner_pct: 35,
            snack_pct: 5,
        }
    }
}

impl MealDistributionConfig {
    /// Whole-percent share for a slot
    #[must_use]
    pub const fn percent(&self, kind: MealKind) -> u8 {
        match kind {
            MealKind::Breakfast => self.breakfast_pct,
            MealKind::Lunch => self.lunch_pct,
            MealKind::Dinner => self.dinner_pct,
            MealKind::Snack => self.snack_pct,
        }
    }

    /// Share for a slot as a fraction of one
    #[must_use]
    pub fn fraction(&self, kind: MealKind) -> f64 {
        f64::from(self.percent(kind)) / 100.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sum: u16 = [
            self.breakfast_pct,
            self.lunch_pct,
            self.dinner_pct,
            self.snack_pct,
        ]
        .into_iter()
        .map(u16::from)
        .sum();
        if sum != 100 {
            return Err(ConfigError::InvalidWeights(format!(
                "meal distribution percentages must sum to 100, got {sum}"
            )));
        }
        Ok(())
    }
}
