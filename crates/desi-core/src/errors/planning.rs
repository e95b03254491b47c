// ABOUTME: Planning-domain errors for energy target and meal plan generation
// ABOUTME: Typed profile and preference validation failures that convert into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! # Planning Error Types
//!
//! Failures the planning core can surface to its immediate caller. Missing
//! optional preferences (fats, vegetables, fruits) are deliberately absent:
//! the generator degrades gracefully instead of failing.

use super::{AppError, ErrorCode};
use crate::models::FoodCategory;
use serde_json::json;
use thiserror::Error;

/// Validation failures raised before any plan computation happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    /// One or more required numeric profile fields are absent or non-numeric
    #[error("profile is incomplete: missing {}", .missing.join(", "))]
    IncompleteProfile {
        /// Names of the missing fields
        missing: Vec<&'static str>,
    },

    /// Enumerated field received a value outside its closed set
    #[error("unknown {field} value '{value}'")]
    UnknownEnumValue {
        /// Field being parsed (e.g. `activity_level`)
        field: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// A mandatory preference category is empty
    #[error("no {category} preference selected: select at least one protein and one carb")]
    MissingMandatoryPreference {
        /// The empty category
        category: FoodCategory,
    },

    /// Numeric profile field outside its accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl PlanningError {
    /// Convenience constructor for unknown enum spellings
    #[must_use]
    pub fn unknown_enum(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::IncompleteProfile { .. } | Self::MissingMandatoryPreference { .. } => {
                ErrorCode::MissingRequiredField
            }
            Self::UnknownEnumValue { .. } => ErrorCode::InvalidFormat,
            Self::ValueOutOfRange { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        let details = match &error {
            PlanningError::IncompleteProfile { missing } => json!({ "missing": missing }),
            PlanningError::UnknownEnumValue { field, value } => {
                json!({ "field": field, "value": value })
            }
            PlanningError::MissingMandatoryPreference { category } => {
                json!({ "category": category })
            }
            PlanningError::ValueOutOfRange {
                field,
                value,
                min,
                max,
            } => json!({ "field": field, "value": value, "min": min, "max": max }),
        };

        Self::new(error.code(), error.to_string())
            .with_details(details)
            .with_source(error)
    }
}
