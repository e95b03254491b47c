// ABOUTME: Planning service combining the preference repository, calculator and meal generator
// ABOUTME: Validates profiles and preferences at the boundary and emits per-user tracing events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::config::IntelligenceConfig;
use crate::preferences::PreferenceRepository;
use desi_core::errors::{AppError, AppResult};
use desi_core::models::{
    CardioLogEntry, DailyProgress, EnergyTarget, FoodLogEntry, FoodPreferenceSet, MealPlan,
    UserProfile,
};
use desi_intelligence::{
    compute_daily_progress, compute_energy_target, FoodCatalog, MealPlanGenerator, PlannerConfig,
};
use serde_json::json;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Per-user planning operations over an injected preference store
pub struct PlanningService<R> {
    repository: R,
    generator: MealPlanGenerator,
}

impl<R: PreferenceRepository> PlanningService<R> {
    /// Create a service using the process-wide planner tables
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, IntelligenceConfig::global().planner.clone())
    }

    /// Create a service with explicit planner tables
    pub fn with_config(repository: R, config: PlannerConfig) -> Self {
        Self {
            repository,
            generator: MealPlanGenerator::new(config),
        }
    }

    /// Underlying preference store
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Food catalog used for validation and classification
    pub fn catalog(&self) -> FoodCatalog {
        FoodCatalog::builtin()
    }

    /// Validate a profile and compute its daily target
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for an incomplete profile and
    /// `VALUE_OUT_OF_RANGE` for an implausible age, weight or height
    #[instrument(skip_all, fields(activity = %profile.activity_level, goal = %profile.goal))]
    pub fn energy_target(&self, profile: &UserProfile) -> AppResult<EnergyTarget> {
        profile.validate()?;
        let target = compute_energy_target(profile, &self.generator.config().nutrition);
        debug!(
            bmr = target.bmr,
            tdee = target.tdee,
            daily_calories = target.daily_calories,
            "Energy target computed"
        );
        Ok(target)
    }

    /// Build today's plan from the user's stored preferences
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when no preferences are saved, a profile
    /// validation error, `VALUE_OUT_OF_RANGE` when the goal leaves a daily
    /// target of 0 kcal, or `MISSING_REQUIRED_FIELD` when the stored set has no
    /// protein or no carb
    #[instrument(skip(self, profile), fields(%user_id))]
    pub async fn plan_for_user(&self, user_id: Uuid, profile: &UserProfile) -> AppResult<MealPlan> {
        let Some(preferences) = self.repository.get(user_id).await? else {
            warn!(%user_id, "Meal plan requested without saved preferences");
            return Err(AppError::not_found(format!(
                "Food preferences for user {user_id}"
            )));
        };

        let target = self.energy_target(profile)?;
        if target.daily_calories == 0 {
            warn!(
                %user_id,
                tdee = target.tdee,
                goal = %profile.goal,
                "Goal leaves no daily calories to plan"
            );
            return Err(AppError::value_out_of_range(format!(
                "Goal '{}' leaves a daily target of 0 kcal (TDEE {} kcal)",
                profile.goal, target.tdee
            ))
            .with_details(json!({ "field": "goal", "tdee": target.tdee })));
        }
        let plan = self.generator.generate(&target, &preferences)?;
        info!(
            %user_id,
            daily_calories = plan.total_calories,
            breakfast = %plan.breakfast.name,
            lunch = %plan.lunch.name,
            dinner = %plan.dinner.name,
            "Meal plan generated"
        );
        Ok(plan)
    }

    /// Normalise, catalog-check and store a preference set
    ///
    /// Catalog labels are stored in catalog spelling, so case variants of one
    /// food collapse into a single entry. Returns the normalised set that was
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` listing every label that is unknown or filed
    /// under the wrong category, or a storage error
    #[instrument(skip(self, preferences), fields(%user_id))]
    pub async fn save_preferences(
        &self,
        user_id: Uuid,
        preferences: FoodPreferenceSet,
    ) -> AppResult<FoodPreferenceSet> {
        let catalog = self.catalog();
        let preferences = catalog.canonicalize(preferences.normalized()).normalized();
        let issues = catalog.validate_preferences(&preferences);
        if !issues.is_empty() {
            warn!(%user_id, rejected = issues.len(), "Preference labels rejected by catalog");
            return Err(AppError::invalid_input(format!(
                "{} preference label(s) are not valid catalog entries",
                issues.len()
            ))
            .with_details(json!({ "issues": issues })));
        }

        self.repository.save(user_id, &preferences).await?;
        info!(%user_id, labels = preferences.len(), "Preferences updated");
        Ok(preferences)
    }

    /// Stored preferences for a user
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when nothing is stored, or a storage error
    #[instrument(skip(self), fields(%user_id))]
    pub async fn preferences(&self, user_id: Uuid) -> AppResult<FoodPreferenceSet> {
        self.repository
            .get(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food preferences for user {user_id}")))
    }

    /// Progress for one day of logged food and cardio against the profile's target
    ///
    /// # Errors
    ///
    /// Returns a profile validation error
    pub fn daily_progress(
        &self,
        profile: &UserProfile,
        foods: &[FoodLogEntry],
        cardio: &[CardioLogEntry],
    ) -> AppResult<DailyProgress> {
        let target = self.energy_target(profile)?;
        Ok(compute_daily_progress(&target, foods, cardio))
    }
}
