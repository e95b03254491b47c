// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Preference store backend selection and the global planner table configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Configuration management
//!
//! - [`AppConfig`]: application-level settings (logging, preference storage)
//! - [`IntelligenceConfig`]: process-wide calculator and planner tables

/// Planner tables with environment overrides
pub mod intelligence_config;

pub use intelligence_config::IntelligenceConfig;

use crate::logging::LoggingConfig;
use desi_core::constants::{defaults, env_config};
use desi_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Where food preferences are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferenceStoreKind {
    /// Process memory only
    Memory,
    /// JSON document on disk
    #[default]
    File,
}

impl FromStr for PreferenceStoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "{} must be 'memory' or 'file', got '{other}'",
                env_config::PREFERENCE_STORE
            ))),
        }
    }
}

impl fmt::Display for PreferenceStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Preference storage backend
    pub preference_store: PreferenceStoreKind,
    /// Preference document path for the file backend
    pub preferences_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            preference_store: PreferenceStoreKind::default(),
            preferences_path: PathBuf::from(defaults::PREFERENCES_PATH),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when `DESI_PREFERENCE_STORE` names an unknown backend
    pub fn from_env() -> AppResult<Self> {
        let preference_store = env::var(env_config::PREFERENCE_STORE)
            .ok()
            .map(|raw| raw.parse::<PreferenceStoreKind>())
            .transpose()?
            .unwrap_or_default();
        let preferences_path = PathBuf::from(
            env::var(env_config::PREFERENCES_PATH)
                .unwrap_or_else(|_| defaults::PREFERENCES_PATH.to_owned()),
        );

        let config = Self {
            logging: LoggingConfig::from_env(),
            preference_store,
            preferences_path,
        };
        info!(
            preference_store = %config.preference_store,
            preferences_path = %config.preferences_path.display(),
            "Application configuration loaded"
        );
        Ok(config)
    }
}
