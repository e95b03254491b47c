// ABOUTME: Main library entry point for the DesiTracker application layer
// ABOUTME: Wires configuration, logging and preference storage to the planning core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

#![deny(unsafe_code)]

//! # DesiTracker
//!
//! Daily calorie targets and rule-based South-Asian meal plans.
//!
//! ## Architecture
//!
//! - **`desi-core`**: error types, constants and data models
//! - **`desi-intelligence`**: the energy target calculator, meal plan
//!   generator, food catalog and daily progress calculator (pure computation)
//! - **this crate**: environment configuration, logging setup, the
//!   preference repository and the planning service used by `desi-cli`
//!
//! ## Example
//!
//! ```rust,no_run
//! use desi_tracker::preferences::InMemoryPreferenceRepository;
//! use desi_tracker::services::PlanningService;
//! use desi_tracker::models::{ActivityLevel, BiologicalSex, Goal, UserProfile};
//!
//! # fn main() -> desi_tracker::errors::AppResult<()> {
//! let service = PlanningService::new(InMemoryPreferenceRepository::new());
//! let profile = UserProfile::new(
//!     30, 70.0, 175.0, BiologicalSex::Male, ActivityLevel::Sedentary, Goal::Maintain,
//! );
//! let target = service.energy_target(&profile)?;
//! assert_eq!(target.daily_calories, 1979);
//! # Ok(())
//! # }
//! ```

/// Application configuration from environment variables
pub mod config;

/// Structured logging setup for binaries
pub mod logging;

/// Food preference persistence
pub mod preferences;

/// Planning service layer
pub mod services;

pub use desi_core::{constants, errors, models};
pub use desi_intelligence as intelligence;
