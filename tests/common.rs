// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup, reference profiles, preference sets and service builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `desi_tracker`

use desi_core::models::{
    ActivityLevel, BiologicalSex, EnergyTarget, FoodPreferenceSet, Goal, MacroGrams, UserProfile,
};
use desi_intelligence::PlannerConfig;
use desi_tracker::preferences::InMemoryPreferenceRepository;
use desi_tracker::services::PlanningService;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30-year-old, 70 kg, 175 cm, sedentary male maintaining weight
pub fn reference_profile() -> UserProfile {
    UserProfile::new(
        30,
        70.0,
        175.0,
        BiologicalSex::Male,
        ActivityLevel::Sedentary,
        Goal::Maintain,
    )
}

/// Target computed for [`reference_profile`]
pub fn reference_target() -> EnergyTarget {
    EnergyTarget {
        bmr: 1649,
        tdee: 1979,
        daily_calories: 1979,
        macros: MacroGrams::new(124, 223, 66),
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Preferences covering every category with catalog labels
pub fn full_preferences() -> FoodPreferenceSet {
    FoodPreferenceSet {
        proteins: labels(&["Egg (Whole)", "Chicken Breast (Uncooked)", "Fish (Rohu)"]),
        carbs: labels(&["Oats", "Basmati Rice", "Roti (Whole Wheat)"]),
        fats: labels(&["Ghee"]),
        vegetables: labels(&["Spinach", "Okra (Bhindi)"]),
        fruits: labels(&["Banana", "Mango"]),
    }
}

/// Proteins and carbs only
pub fn minimal_preferences() -> FoodPreferenceSet {
    FoodPreferenceSet {
        proteins: labels(&["Paneer"]),
        carbs: labels(&["Roti (Whole Wheat)"]),
        ..FoodPreferenceSet::default()
    }
}

/// Service over a fresh in-memory store with default tables
pub fn memory_service() -> PlanningService<InMemoryPreferenceRepository> {
    init_test_logging();
    PlanningService::with_config(InMemoryPreferenceRepository::new(), PlannerConfig::default())
}
