// ABOUTME: Integration tests for daily progress against an energy target
// ABOUTME: Consumed, burned, net and remaining values including over-target days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
#![allow(clippy::unwrap_used)]

mod common;

use chrono::Utc;
use desi_core::models::{CardioLogEntry, FoodLogEntry, MacroGrams};
use desi_intelligence::compute_daily_progress;
use uuid::Uuid;

fn food(label: &str, servings: f64, calories: f64, macros: (f64, f64, f64)) -> FoodLogEntry {
    FoodLogEntry {
        id: Uuid::new_v4(),
        label: label.to_owned(),
        servings,
        calories,
        protein_g: macros.0,
        carbs_g: macros.1,
        fat_g: macros.2,
        logged_at: Utc::now(),
    }
}

fn cardio(minutes: u32, calories_burned: f64) -> CardioLogEntry {
    CardioLogEntry {
        id: Uuid::new_v4(),
        activity: "Cycling".to_owned(),
        duration_minutes: minutes,
        calories_burned,
        logged_at: Utc::now(),
    }
}

#[test]
fn test_typical_day() {
    let target = common::reference_target();
    let foods = [
        food("Poha", 1.0, 250.0, (5.0, 45.0, 6.0)),
        food("Dal Chawal", 2.0, 350.0, (14.0, 55.0, 7.0)),
    ];
    let progress = compute_daily_progress(&target, &foods, &[cardio(45, 320.4)]);

    assert_eq!(progress.consumed_calories, 950);
    assert_eq!(progress.consumed_macros, MacroGrams::new(33, 155, 20));
    assert_eq!(progress.burned_calories, 320);
    assert_eq!(progress.net_calories, 630);
    assert_eq!(progress.remaining_calories, 1979 - 630);
    assert_eq!(progress.remaining_macros, MacroGrams::new(91, 68, 46));
    // 950 / 1979 = 48.0%
    assert!((progress.percent_of_target - 48.0).abs() < 1e-9);
}

#[test]
fn test_over_target_goes_negative_and_macros_saturate() {
    let target = common::reference_target();
    let feast = [food("Butter Chicken with Naan", 3.0, 900.0, (45.0, 80.0, 40.0))];
    let progress = compute_daily_progress(&target, &feast, &[]);

    assert_eq!(progress.consumed_calories, 2700);
    assert_eq!(progress.remaining_calories, -721);
    assert_eq!(progress.remaining_macros, MacroGrams::new(0, 0, 0));
    assert!(progress.percent_of_target > 100.0);
}

#[test]
fn test_cardio_only_day_has_negative_net() {
    let progress = compute_daily_progress(&common::reference_target(), &[], &[cardio(60, 500.0)]);
    assert_eq!(progress.consumed_calories, 0);
    assert_eq!(progress.net_calories, -500);
    assert_eq!(progress.remaining_calories, 2479);
    assert!(progress.percent_of_target.abs() < f64::EPSILON);
}

#[test]
fn test_negative_burn_counts_as_zero() {
    let progress = compute_daily_progress(&common::reference_target(), &[], &[cardio(10, -80.0)]);
    assert_eq!(progress.burned_calories, 0);
}
