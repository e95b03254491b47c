// ABOUTME: Pluggable food preference storage behind an async repository trait
// ABOUTME: In-memory and JSON-file backends plus a factory driven by AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Food preference persistence
//!
//! The planning core never reads storage itself. Callers hand it a
//! [`FoodPreferenceSet`] loaded through a [`PreferenceRepository`], which keeps
//! the generator pure and lets tests swap in the in-memory backend.

/// JSON document backend
pub mod file;
/// Process-local backend
pub mod memory;

pub use file::FilePreferenceRepository;
pub use memory::InMemoryPreferenceRepository;

use crate::config::{AppConfig, PreferenceStoreKind};
use desi_core::errors::AppResult;
use desi_core::models::FoodPreferenceSet;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Storage for per-user food preferences
///
/// # Example
///
/// ```rust,no_run
/// use desi_tracker::preferences::{InMemoryPreferenceRepository, PreferenceRepository};
/// use desi_core::models::FoodPreferenceSet;
/// use uuid::Uuid;
///
/// # async fn example() -> desi_core::errors::AppResult<()> {
/// let repo = InMemoryPreferenceRepository::new();
/// let user_id = Uuid::new_v4();
/// repo.save(user_id, &FoodPreferenceSet::default()).await?;
/// assert!(repo.get(user_id).await?.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Load the stored preferences for a user
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the backend cannot be read
    async fn get(&self, user_id: Uuid) -> AppResult<Option<FoodPreferenceSet>>;

    /// Store preferences for a user, replacing any previous set
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the backend cannot be written
    async fn save(&self, user_id: Uuid, preferences: &FoodPreferenceSet) -> AppResult<()>;

    /// Remove a user's preferences, returning whether anything was stored
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn delete(&self, user_id: Uuid) -> AppResult<bool>;
}

#[async_trait::async_trait]
impl<R: PreferenceRepository + ?Sized> PreferenceRepository for Arc<R> {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<FoodPreferenceSet>> {
        (**self).get(user_id).await
    }

    async fn save(&self, user_id: Uuid, preferences: &FoodPreferenceSet) -> AppResult<()> {
        (**self).save(user_id, preferences).await
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        (**self).delete(user_id).await
    }
}

/// Build the repository selected by configuration
#[must_use]
pub fn repository_from_config(config: &AppConfig) -> Arc<dyn PreferenceRepository> {
    match config.preference_store {
        PreferenceStoreKind::Memory => {
            info!("Using in-memory preference store");
            Arc::new(InMemoryPreferenceRepository::new())
        }
        PreferenceStoreKind::File => {
            info!(path = %config.preferences_path.display(), "Using file preference store");
            Arc::new(FilePreferenceRepository::new(&config.preferences_path))
        }
    }
}
