// ABOUTME: Nutrition intelligence for DesiTracker: energy targets, meal plans, daily progress
// ABOUTME: Pure, synchronous computation over desi-core models with tunable lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

#![deny(unsafe_code)]

//! # Desi Intelligence
//!
//! Stateless computation for the DesiTracker planning engine. Nothing in this
//! crate performs I/O or holds shared mutable state, so every function is safe
//! to call concurrently from any number of request handlers.
//!
//! ## Modules
//!
//! - **config**: Tunable tables (Mifflin-St Jeor, activity factors, splits, portions)
//! - **`nutrition_calculator`**: BMR, TDEE, goal-adjusted calories, macro split
//! - **`food_catalog`**: Typed South-Asian food catalog and label classification
//! - **`meal_planner`**: Rule-based daily meal plan generation
//! - **`daily_progress`**: Intake and cardio totals against a target

/// Tunable lookup tables and their validation
pub mod config;

/// Intake and cardio totals against an energy target
pub mod daily_progress;

/// Typed food catalog
pub mod food_catalog;

/// Rule-based meal plan generator
pub mod meal_planner;

/// Energy target calculator
pub mod nutrition_calculator;

pub use config::{ConfigError, PlannerConfig};
pub use daily_progress::compute_daily_progress;
pub use food_catalog::{CatalogEntry, CatalogIssue, FoodCatalog, FoodKind};
pub use meal_planner::{generate_plan, portion_size, MealPlanGenerator};
pub use nutrition_calculator::{compute_bmr, compute_energy_target, compute_tdee};
