// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for profiles, energy conversion, meal plans, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Tunable nutrition tables (activity factors, portion multipliers)
//! live in the intelligence configuration, not here.

/// Service identity used in structured logs
pub mod service_names {
    /// Main service name
    pub const DESI_TRACKER: &str = "desi-tracker";
    /// CLI binary name
    pub const DESI_CLI: &str = "desi-cli";
}

/// Energy density of macronutrients
pub mod energy {
    /// Protein: 4 kcal per gram
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Accepted ranges for profile fields (inclusive)
pub mod profile_limits {
    /// Minimum age in years
    pub const AGE_MIN: u32 = 13;
    /// Maximum age in years
    pub const AGE_MAX: u32 = 120;
    /// Minimum body weight in kilograms
    pub const WEIGHT_KG_MIN: f64 = 20.0;
    /// Maximum body weight in kilograms
    pub const WEIGHT_KG_MAX: f64 = 500.0;
    /// Minimum height in centimeters
    pub const HEIGHT_CM_MIN: f64 = 50.0;
    /// Maximum height in centimeters
    pub const HEIGHT_CM_MAX: f64 = 250.0;
}

/// Meal plan shape
pub mod meal_plan {
    /// Cooking tips kept per meal
    pub const MAX_COOKING_TIPS: usize = 3;
    /// Snack alternatives exposed alongside the primary recommendation
    pub const MAX_SNACK_OPTIONS: usize = 2;
    /// Vegetables placed on every main meal
    pub const VEGETABLES_PER_MEAL: usize = 2;
    /// Fixed vegetable serving (vegetables are not macro-tracked)
    pub const VEGETABLE_PORTION: &str = "1 cup chopped";
}

/// Environment variable names
pub mod env_config {
    /// Preference store backend (`memory` or `file`)
    pub const PREFERENCE_STORE: &str = "DESI_PREFERENCE_STORE";
    /// Path of the JSON preference document
    pub const PREFERENCES_PATH: &str = "DESI_PREFERENCES_PATH";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment label
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Prefix for nutrition table overrides
    pub const INTELLIGENCE_PREFIX: &str = "DESI_";
}

/// Default values for application configuration
pub mod defaults {
    /// Default location of the JSON preference document
    pub const PREFERENCES_PATH: &str = "./data/preferences.json";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}
