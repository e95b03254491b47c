// ABOUTME: Daily progress against an energy target from logged food and cardio entries
// ABOUTME: Consumed, burned, net, and remaining calories with remaining macro grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::nutrition_calculator::round_non_negative;
use desi_core::models::{CardioLogEntry, DailyProgress, EnergyTarget, FoodLogEntry, MacroGrams};

/// Summarise one day of logs against a target
///
/// Negative servings or energy values in an entry count as zero. The
/// percentage is 0 when the target has not been computed.
#[must_use]
pub fn compute_daily_progress(
    target: &EnergyTarget,
    foods: &[FoodLogEntry],
    cardio: &[CardioLogEntry],
) -> DailyProgress {
    let sum = |per_serving: fn(&FoodLogEntry) -> f64| -> u32 {
        round_non_negative(
            foods
                .iter()
                .map(|entry| entry.servings.max(0.0) * per_serving(entry).max(0.0))
                .sum(),
        )
    };

    let consumed_calories = sum(|e| e.calories);
    let consumed_macros = MacroGrams {
        protein: sum(|e| e.protein_g),
        carbs: sum(|e| e.carbs_g),
        fat: sum(|e| e.fat_g),
    };
    let burned_calories = round_non_negative(
        cardio
            .iter()
            .map(|session| session.calories_burned.max(0.0))
            .sum(),
    );

    let net_calories = i64::from(consumed_calories) - i64::from(burned_calories);
    let remaining_calories = i64::from(target.daily_calories) - net_calories;
    let percent_of_target = if target.is_computed() && target.daily_calories > 0 {
        (f64::from(consumed_calories) / f64::from(target.daily_calories) * 1000.0).round() / 10.0
    } else {
        0.0
    };

    DailyProgress {
        consumed_calories,
        consumed_macros,
        burned_calories,
        net_calories,
        remaining_calories,
        remaining_macros: target.macros.saturating_sub(consumed_macros),
        percent_of_target,
    }
}
