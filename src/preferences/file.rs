// ABOUTME: JSON file preference repository keyed by user id
// ABOUTME: Atomic temp-file-and-rename writes with access serialised through an async mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use super::PreferenceRepository;
use desi_core::errors::{AppError, AppResult};
use desi_core::models::FoodPreferenceSet;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

type PreferenceDocument = BTreeMap<Uuid, FoodPreferenceSet>;

/// Preferences persisted as a single JSON object
///
/// ```json
/// { "<user uuid>": { "proteins": ["Paneer"], "carbs": ["Roti"], ... } }
/// ```
#[derive(Debug)]
pub struct FilePreferenceRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePreferenceRepository {
    /// Create a repository backed by `path`; the file is created on first save
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> AppResult<PreferenceDocument> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(PreferenceDocument::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::serialization(format!(
                    "Corrupt preference file {}: {e}",
                    self.path.display()
                ))
                .with_source(e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PreferenceDocument::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, document: &PreferenceDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), users = document.len(), "Preference file written");
        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceRepository for FilePreferenceRepository {
    async fn get(&self, user_id: Uuid) -> AppResult<Option<FoodPreferenceSet>> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        Ok(document.remove(&user_id))
    }

    async fn save(&self, user_id: Uuid, preferences: &FoodPreferenceSet) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(user_id, preferences.clone());
        self.write_document(&document).await?;
        info!(%user_id, "Preferences saved");
        Ok(())
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(&user_id).is_none() {
            return Ok(false);
        }
        self.write_document(&document).await?;
        info!(%user_id, "Preferences deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FilePreferenceRepository::new(dir.path().join("absent.json"));
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, b"{not json").unwrap();

        let error = FilePreferenceRepository::new(&path)
            .get(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(error.code, desi_core::errors::ErrorCode::SerializationError);
    }
}
