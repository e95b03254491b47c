// ABOUTME: Energy target calculator using the Mifflin-St Jeor equation and activity factors
// ABOUTME: BMR, TDEE, goal-adjusted calories, the daily macro split, and per-meal shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Energy Target Calculator
//!
//! Turns a biometric profile into whole-kcal targets. Every step rounds to the
//! nearest integer before the next one consumes it: BMR is rounded, multiplied
//! by the activity factor and rounded again, then offset by the goal.
//!
//! Missing numeric inputs are not errors here. An incomplete profile produces
//! [`EnergyTarget::not_computed`] so callers can render an "incomplete" state.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{BmrConfig, MacroSplitConfig, MealDistributionConfig, NutritionConfig};
use desi_core::models::{BiologicalSex, EnergyTarget, MacroGrams, MealKind, UserProfile};
use tracing::debug;

/// Round to the nearest whole unit, clamping negatives to zero
#[must_use]
pub fn round_non_negative(value: f64) -> u32 {
    if value.is_finite() {
        value.round().max(0.0) as u32
    } else {
        0
    }
}

/// Raw Mifflin-St Jeor result before rounding
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: BiologicalSex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    weight_component + height_component + age_component + config.sex_constant(sex)
}

/// Basal metabolic rate in whole kcal/day
///
/// Returns 0 for an incomplete profile. Callers treat 0 as "not computable",
/// never as a real BMR.
#[must_use]
pub fn compute_bmr(profile: &UserProfile, config: &BmrConfig) -> u32 {
    profile.measurements().map_or(0, |m| {
        round_non_negative(calculate_mifflin_st_jeor(
            m.weight_kg,
            m.height_cm,
            m.age,
            profile.sex,
            config,
        ))
    })
}

/// Total daily energy expenditure: `round(round(BMR) x activity factor)`
#[must_use]
pub fn compute_tdee(profile: &UserProfile, config: &NutritionConfig) -> u32 {
    let bmr = compute_bmr(profile, &config.bmr);
    tdee_from_bmr(bmr, profile, config)
}

fn tdee_from_bmr(bmr: u32, profile: &UserProfile, config: &NutritionConfig) -> u32 {
    let factor = config.activity_factors.factor(profile.activity_level);
    round_non_negative(f64::from(bmr) * factor)
}

/// Split a calorie target into protein/carb/fat grams
///
/// `grams = round(calories x share / kcal_per_gram)` for each macro.
#[must_use]
pub fn split_macros(daily_calories: u32, split: &MacroSplitConfig) -> MacroGrams {
    let calories = f64::from(daily_calories);
    let grams = |pct: u8, kcal_per_gram: f64| {
        round_non_negative(calories * (f64::from(pct) / 100.0) / kcal_per_gram)
    };

    MacroGrams {
        protein: grams(split.protein_pct, split.protein_kcal_per_gram),
        carbs: grams(split.carbs_pct, split.carbs_kcal_per_gram),
        fat: grams(split.fat_pct, split.fat_kcal_per_gram),
    }
}

/// Goal-adjusted calorie target and macro split
///
/// The all-zero target is returned when the profile is incomplete or when the
/// measurements produce no positive BMR.
#[must_use]
pub fn compute_energy_target(profile: &UserProfile, config: &NutritionConfig) -> EnergyTarget {
    if !profile.is_complete() {
        debug!(missing = ?profile.missing_fields(), "Profile incomplete, energy target not computed");
        return EnergyTarget::not_computed();
    }

    let bmr = compute_bmr(profile, &config.bmr);
    if bmr == 0 {
        debug!("Measurements produced no positive BMR, energy target not computed");
        return EnergyTarget::not_computed();
    }

    let tdee = tdee_from_bmr(bmr, profile, config);
    let daily_calories =
        round_non_negative(f64::from(tdee) + config.goal_adjustments.offset(profile.goal));
    let macros = split_macros(daily_calories, &config.macro_split);

    EnergyTarget {
        bmr,
        tdee,
        daily_calories,
        macros,
    }
}

/// Calorie and macro share of one meal slot
///
/// Each value is rounded independently, so the four slots may miss the daily
/// total by a few units.
#[must_use]
pub fn meal_share(
    target: &EnergyTarget,
    kind: MealKind,
    distribution: &MealDistributionConfig,
) -> (u32, MacroGrams) {
    let fraction = distribution.fraction(kind);
    let share = |value: u32| round_non_negative(f64::from(value) * fraction);

    (
        share(target.daily_calories),
        MacroGrams {
            protein: share(target.macros.protein),
            carbs: share(target.macros.carbs),
            fat: share(target.macros.fat),
        },
    )
}
