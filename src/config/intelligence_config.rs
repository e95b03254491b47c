// ABOUTME: Process-wide planner configuration with operator-level environment overrides
// ABOUTME: Loads default tables once, applies DESI_* overrides, validates, and caches globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Intelligence Configuration
//!
//! Wraps [`PlannerConfig`] in a lazily loaded global. Operators tune tables with
//! environment variables; end users never see them.
//!
//! ```bash
//! export DESI_MEAL_BREAKFAST_PERCENT=30
//! export DESI_MEAL_SNACK_PERCENT=0
//! ```

use desi_core::constants::env_config::INTELLIGENCE_PREFIX;
use desi_intelligence::config::{ConfigError, PlannerConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Validated planner tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Calculator and meal planner tables
    pub planner: PlannerConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to the default tables, with a warning, when overrides are
    /// unparsable or fail validation.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.planner.validate()?;
        info!("Intelligence configuration loaded");
        Ok(config)
    }

    /// Parse and apply a single `DESI_`-prefixed override
    fn apply_env_var<T: FromStr>(suffix: &str, target: &mut T) -> Result<(), ConfigError> {
        let name = format!("{INTELLIGENCE_PREFIX}{suffix}");
        if let Ok(val) = env::var(&name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutrition = &mut self.planner.nutrition;

        // Mifflin-St Jeor coefficients
        Self::apply_env_var("BMR_WEIGHT_COEF", &mut nutrition.bmr.msj_weight_coef)?;
        Self::apply_env_var("BMR_HEIGHT_COEF", &mut nutrition.bmr.msj_height_coef)?;
        Self::apply_env_var("BMR_AGE_COEF", &mut nutrition.bmr.msj_age_coef)?;
        Self::apply_env_var("BMR_MALE_CONSTANT", &mut nutrition.bmr.msj_male_constant)?;
        Self::apply_env_var("BMR_FEMALE_CONSTANT", &mut nutrition.bmr.msj_female_constant)?;

        // Activity factors
        let factors = &mut nutrition.activity_factors;
        Self::apply_env_var("ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("ACTIVITY_LIGHTLY_ACTIVE", &mut factors.lightly_active)?;
        Self::apply_env_var("ACTIVITY_MODERATELY_ACTIVE", &mut factors.moderately_active)?;
        Self::apply_env_var("ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var("ACTIVITY_EXTREMELY_ACTIVE", &mut factors.extremely_active)?;

        // Goal offsets
        Self::apply_env_var("GOAL_LOSE_KCAL", &mut nutrition.goal_adjustments.lose_kcal)?;
        Self::apply_env_var("GOAL_MAINTAIN_KCAL", &mut nutrition.goal_adjustments.maintain_kcal)?;
        Self::apply_env_var("GOAL_GAIN_KCAL", &mut nutrition.goal_adjustments.gain_kcal)?;

        // Macro split
        Self::apply_env_var("MACRO_PROTEIN_PERCENT", &mut nutrition.macro_split.protein_pct)?;
        Self::apply_env_var("MACRO_CARBS_PERCENT", &mut nutrition.macro_split.carbs_pct)?;
        Self::apply_env_var("MACRO_FAT_PERCENT", &mut nutrition.macro_split.fat_pct)?;

        // Meal distribution
        let meals = &mut nutrition.meal_distribution;
        Self::apply_env_var("MEAL_BREAKFAST_PERCENT", &mut meals.breakfast_pct)?;
        Self::apply_env_var("MEAL_LUNCH_PERCENT", &mut meals.lunch_pct)?;
        Self::apply_env_var("MEAL_DINNER_PERCENT", &mut meals.dinner_pct)?;
        Self::apply_env_var("MEAL_SNACK_PERCENT", &mut meals.snack_pct)?;

        // Portion multipliers
        let portions = &mut self.planner.portions;
        Self::apply_env_var("PORTION_EGG_PROTEIN_GRAMS", &mut portions.protein.protein_grams_per_egg)?;
        Self::apply_env_var("PORTION_MEAT", &mut portions.protein.meat)?;
        Self::apply_env_var("PORTION_FISH", &mut portions.protein.fish)?;
        Self::apply_env_var("PORTION_LEGUME", &mut portions.protein.legume)?;
        Self::apply_env_var("PORTION_PANEER", &mut portions.protein.paneer)?;
        Self::apply_env_var("PORTION_RICE", &mut portions.carbs.rice)?;
        Self::apply_env_var("PORTION_ROTI", &mut portions.carbs.roti)?;
        Self::apply_env_var("PORTION_OATS", &mut portions.carbs.oats)?;
        Self::apply_env_var("PORTION_FAT_GRAMS_PER_TBSP", &mut portions.fats.fat_grams_per_tablespoon)?;

        Ok(self)
    }
}
