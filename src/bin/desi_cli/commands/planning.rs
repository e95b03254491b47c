// ABOUTME: Energy target and meal plan commands for desi-cli
// ABOUTME: Delegates to PlanningService and renders the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::helpers::display::{display_plan, display_target, print_json};
use desi_core::errors::AppResult;
use desi_core::models::UserProfile;
use desi_tracker::preferences::PreferenceRepository;
use desi_tracker::services::PlanningService;
use uuid::Uuid;

/// Compute and print daily targets
pub fn targets<R: PreferenceRepository>(
    service: &PlanningService<R>,
    profile: &UserProfile,
    json: bool,
) -> AppResult<()> {
    let target = service.energy_target(profile)?;
    if json {
        print_json(&target)
    } else {
        display_target(&target);
        Ok(())
    }
}

/// Generate and print today's plan for a user
pub async fn plan<R: PreferenceRepository>(
    service: &PlanningService<R>,
    user_id: Uuid,
    profile: &UserProfile,
    json: bool,
) -> AppResult<()> {
    let plan = service.plan_for_user(user_id, profile).await?;
    if json {
        print_json(&plan)
    } else {
        display_plan(&plan);
        Ok(())
    }
}
