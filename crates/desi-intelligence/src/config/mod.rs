// ABOUTME: Configuration module for desi-intelligence crate
// ABOUTME: Groups the energy target and portion tables into a single validated PlannerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

/// Configuration error types
pub mod error;
/// Energy target and meal distribution tables
pub mod nutrition;
/// Portion multiplier tables
pub mod portions;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroSplitConfig,
    MealDistributionConfig, NutritionConfig,
};
pub use portions::{CarbPortionConfig, FatPortionConfig, PortionConfig, ProteinPortionConfig};

use serde::{Deserialize, Serialize};

/// Every tunable table used by the calculator and the meal planner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Energy target and distribution tables
    pub nutrition: NutritionConfig,
    /// Portion tables
    pub portions: PortionConfig,
}

impl PlannerConfig {
    /// Validate all tables
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.portions.validate()
    }
}
