// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Planner table overrides, validation failures and application settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
#![allow(clippy::unwrap_used)]

mod common;

use desi_core::errors::ErrorCode;
use desi_intelligence::{ConfigError, MealPlanGenerator};
use desi_tracker::config::{AppConfig, IntelligenceConfig, PreferenceStoreKind};
use desi_tracker::logging::LogFormat;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const MEAL_VARS: [&str; 4] = [
    "DESI_MEAL_BREAKFAST_PERCENT",
    "DESI_MEAL_LUNCH_PERCENT",
    "DESI_MEAL_DINNER_PERCENT",
    "DESI_MEAL_SNACK_PERCENT",
];

fn clear_vars(names: &[&str]) {
    for name in names {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_vars(&MEAL_VARS);
    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config, IntelligenceConfig::default());
    assert_eq!(config.planner.nutrition.meal_distribution.breakfast_pct, 25);
}

#[test]
#[serial]
fn test_meal_distribution_override_moves_calories() {
    common::init_test_logging();
    env::set_var("DESI_MEAL_BREAKFAST_PERCENT", "30");
    env::set_var("DESI_MEAL_SNACK_PERCENT", "0");
    let loaded = IntelligenceConfig::load();
    clear_vars(&MEAL_VARS);

    let config = loaded.unwrap();
    let plan = MealPlanGenerator::new(config.planner)
        .generate(&common::reference_target(), &common::full_preferences())
        .unwrap();
    // round(1979 * 0.30)
    assert_eq!(plan.breakfast.target_calories, 594);
    assert_eq!(plan.snack.target_calories, 0);
}

#[test]
#[serial]
fn test_distribution_must_sum_to_hundred() {
    env::set_var("DESI_MEAL_LUNCH_PERCENT", "50");
    let loaded = IntelligenceConfig::load();
    clear_vars(&MEAL_VARS);

    assert!(matches!(loaded, Err(ConfigError::InvalidWeights(_))));
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    env::set_var("DESI_ACTIVITY_SEDENTARY", "lots");
    let loaded = IntelligenceConfig::load();
    env::remove_var("DESI_ACTIVITY_SEDENTARY");

    assert!(matches!(loaded, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_app_config_from_env() {
    env::set_var("DESI_PREFERENCE_STORE", "memory");
    env::set_var("DESI_PREFERENCES_PATH", "/tmp/desi-prefs.json");
    env::set_var("LOG_FORMAT", "json");
    let config = AppConfig::from_env();
    clear_vars(&["DESI_PREFERENCE_STORE", "DESI_PREFERENCES_PATH", "LOG_FORMAT"]);

    let config = config.unwrap();
    assert_eq!(config.preference_store, PreferenceStoreKind::Memory);
    assert_eq!(config.preferences_path, PathBuf::from("/tmp/desi-prefs.json"));
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
#[serial]
fn test_unknown_store_is_a_config_error() {
    env::set_var("DESI_PREFERENCE_STORE", "postgres");
    let config = AppConfig::from_env();
    env::remove_var("DESI_PREFERENCE_STORE");

    assert_eq!(config.unwrap_err().code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_vars(&["DESI_PREFERENCE_STORE", "DESI_PREFERENCES_PATH"]);
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.preference_store, PreferenceStoreKind::File);
    assert_eq!(config.preferences_path, PathBuf::from("./data/preferences.json"));
}
