// ABOUTME: Core data models for the DesiTracker planning engine
// ABOUTME: Re-exports profile, energy target, preference, meal plan, and intake log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! # Data Models
//!
//! Plain data flowing one way through the engine:
//! `UserProfile` → `EnergyTarget` → (+ `FoodPreferenceSet`) → `MealPlan`.
//! Every model is serializable so callers can persist or render it.

mod meal_plan;
mod nutrition;
mod preferences;
mod profile;

pub use meal_plan::{FoodRole, MealKind, MealPlan, MealSlot, PlannedFood, SnackSlot};
pub use nutrition::{CardioLogEntry, DailyProgress, EnergyTarget, FoodLogEntry, MacroGrams};
pub use preferences::{FoodCategory, FoodPreferenceSet};
pub use profile::{ActivityLevel, BiologicalSex, Goal, Measurements, UserProfile};
