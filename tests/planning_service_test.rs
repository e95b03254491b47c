// ABOUTME: Integration tests for PlanningService over the in-memory preference store
// ABOUTME: Profile validation, preference normalisation and catalog checks, plan lookup errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
#![allow(clippy::unwrap_used)]

mod common;

use anyhow::Result;
use chrono::Utc;
use desi_core::errors::ErrorCode;
use desi_core::models::{
    ActivityLevel, BiologicalSex, CardioLogEntry, FoodLogEntry, FoodPreferenceSet, FoodRole,
    Goal, UserProfile,
};
use desi_tracker::preferences::PreferenceRepository;
use uuid::Uuid;

#[test]
fn test_energy_target_validates_ranges() {
    let service = common::memory_service();

    let mut too_young = common::reference_profile();
    too_young.age = Some(5);
    let error = service.energy_target(&too_young).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "age");

    let mut missing = common::reference_profile();
    missing.height_cm = None;
    let error = service.energy_target(&missing).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.details["missing"][0], "height_cm");
}

#[test]
fn test_energy_target_reference_values() {
    let service = common::memory_service();
    let target = service.energy_target(&common::reference_profile()).unwrap();
    assert_eq!(target, common::reference_target());
}

#[tokio::test]
async fn test_plan_requires_saved_preferences() {
    let service = common::memory_service();
    let error = service
        .plan_for_user(Uuid::new_v4(), &common::reference_profile())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_save_then_plan() -> Result<()> {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();

    service
        .save_preferences(user_id, common::full_preferences())
        .await?;
    let plan = service
        .plan_for_user(user_id, &common::reference_profile())
        .await?;

    assert_eq!(plan.total_calories, 1979);
    assert_eq!(plan.breakfast.name, "Egg Breakfast");
    Ok(())
}

#[tokio::test]
async fn test_save_normalises_labels() -> Result<()> {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();
    let messy = FoodPreferenceSet {
        proteins: vec![
            "  Paneer ".to_owned(),
            String::new(),
            "Paneer".to_owned(),
            "Moong Dal".to_owned(),
        ],
        carbs: vec!["Naan".to_owned(), "   ".to_owned()],
        ..FoodPreferenceSet::default()
    };

    let stored = service.save_preferences(user_id, messy).await?;
    assert_eq!(stored.proteins, vec!["Paneer".to_owned(), "Moong Dal".to_owned()]);
    assert_eq!(stored.carbs, vec!["Naan".to_owned()]);
    assert_eq!(service.repository().get(user_id).await?, Some(stored));
    Ok(())
}

#[tokio::test]
async fn test_save_collapses_case_variants_into_catalog_labels() -> Result<()> {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();
    let variants = FoodPreferenceSet {
        proteins: vec![
            "Egg (Whole)".to_owned(),
            "egg (whole)".to_owned(),
            "chicken breast (uncooked)".to_owned(),
        ],
        carbs: vec!["naan".to_owned()],
        ..FoodPreferenceSet::default()
    };

    let stored = service.save_preferences(user_id, variants).await?;
    assert_eq!(
        stored.proteins,
        vec!["Egg (Whole)".to_owned(), "Chicken Breast (Uncooked)".to_owned()]
    );
    assert_eq!(stored.carbs, vec!["Naan".to_owned()]);

    let plan = service
        .plan_for_user(user_id, &common::reference_profile())
        .await?;
    assert_eq!(plan.breakfast.food(FoodRole::Protein).unwrap().label, "Egg (Whole)");
    assert_eq!(
        plan.dinner.food(FoodRole::Protein).unwrap().label,
        "Chicken Breast (Uncooked)"
    );
    Ok(())
}

#[tokio::test]
async fn test_plan_rejects_goal_that_leaves_no_calories() -> Result<()> {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();
    service
        .save_preferences(user_id, common::full_preferences())
        .await?;
    let small = UserProfile::new(
        90,
        30.0,
        120.0,
        BiologicalSex::Female,
        ActivityLevel::Sedentary,
        Goal::Lose,
    );

    // The target itself is still reported, clamped to zero
    assert_eq!(service.energy_target(&small)?.daily_calories, 0);

    let error = service.plan_for_user(user_id, &small).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "goal");
    assert_eq!(error.details["tdee"], 527);
    Ok(())
}

#[tokio::test]
async fn test_save_rejects_unknown_and_miscategorised_labels() {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();
    let invalid = FoodPreferenceSet {
        proteins: vec!["Dragon Steak".to_owned()],
        carbs: vec!["Ghee".to_owned()],
        ..FoodPreferenceSet::default()
    };

    let error = service.save_preferences(user_id, invalid).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    let issues = error.details["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["label"], "Dragon Steak");
    assert_eq!(issues[0]["problem"], "unknown_label");
    assert_eq!(issues[1]["label"], "Ghee");
    assert_eq!(issues[1]["expected"], "fat");
    assert!(service.repository().is_empty());
}

#[tokio::test]
async fn test_plan_with_optional_only_preferences_reports_missing_protein() -> Result<()> {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();
    let fruit_only = FoodPreferenceSet {
        fruits: vec!["Banana".to_owned()],
        ..FoodPreferenceSet::default()
    };
    service.save_preferences(user_id, fruit_only).await?;

    let error = service
        .plan_for_user(user_id, &common::reference_profile())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.details["category"], "protein");
    Ok(())
}

#[tokio::test]
async fn test_preferences_lookup() -> Result<()> {
    let service = common::memory_service();
    let user_id = Uuid::new_v4();
    assert_eq!(
        service.preferences(user_id).await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    service
        .save_preferences(user_id, common::minimal_preferences())
        .await?;
    assert_eq!(service.preferences(user_id).await?, common::minimal_preferences());
    Ok(())
}

#[test]
fn test_daily_progress_against_profile_target() {
    let service = common::memory_service();
    let lunch = FoodLogEntry {
        id: Uuid::new_v4(),
        label: "Chicken Biryani".to_owned(),
        servings: 1.5,
        calories: 400.0,
        protein_g: 20.0,
        carbs_g: 50.0,
        fat_g: 12.0,
        logged_at: Utc::now(),
    };
    let walk = CardioLogEntry {
        id: Uuid::new_v4(),
        activity: "Brisk walk".to_owned(),
        duration_minutes: 30,
        calories_burned: 150.0,
        logged_at: Utc::now(),
    };

    let progress = service
        .daily_progress(&common::reference_profile(), &[lunch], &[walk])
        .unwrap();
    assert_eq!(progress.consumed_calories, 600);
    assert_eq!(progress.net_calories, 450);
    assert_eq!(progress.remaining_calories, 1979 - 450);
}
