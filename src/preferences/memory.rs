// ABOUTME: In-memory preference repository backed by a concurrent hash map
// ABOUTME: Used by tests and by the CLI when DESI_PREFERENCE_STORE=memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use super::PreferenceRepository;
use dashmap::DashMap;
use desi_core::errors::AppResult;
use desi_core::models::FoodPreferenceSet;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Process-local preference store
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceRepository {
    store: Arc<DashMap<Uuid, FoodPreferenceSet>>,
}

impl InMemoryPreferenceRepository {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with stored preferences
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no preferences are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait::async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<FoodPreferenceSet>> {
        Ok(self.store.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, user_id: Uuid, preferences: &FoodPreferenceSet) -> AppResult<()> {
        self.store.insert(user_id, preferences.clone());
        debug!(%user_id, labels = preferences.len(), "Stored preferences in memory");
        Ok(())
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self.store.remove(&user_id).is_some())
    }
}
