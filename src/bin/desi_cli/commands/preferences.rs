// ABOUTME: Food preference commands for desi-cli
// ABOUTME: Set (normalise, validate, store) and show a user's preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::helpers::display::{display_preferences, print_json};
use desi_core::errors::AppResult;
use desi_core::models::FoodPreferenceSet;
use desi_tracker::preferences::PreferenceRepository;
use desi_tracker::services::PlanningService;
use tracing::info;
use uuid::Uuid;

/// Replace a user's preferences
pub async fn set<R: PreferenceRepository>(
    service: &PlanningService<R>,
    user_id: Uuid,
    preferences: FoodPreferenceSet,
    json: bool,
) -> AppResult<()> {
    let stored = service.save_preferences(user_id, preferences).await?;
    info!(%user_id, "Preferences stored from CLI");
    if json {
        print_json(&stored)
    } else {
        println!("Preferences saved for {user_id}");
        display_preferences(&stored);
        if stored.ensure_mandatory().is_err() {
            println!("\nNote: select at least one protein and one carb before requesting a plan");
        }
        Ok(())
    }
}

/// Print a user's stored preferences
pub async fn show<R: PreferenceRepository>(
    service: &PlanningService<R>,
    user_id: Uuid,
    json: bool,
) -> AppResult<()> {
    let preferences = service.preferences(user_id).await?;
    if json {
        print_json(&preferences)
    } else {
        display_preferences(&preferences);
        Ok(())
    }
}
