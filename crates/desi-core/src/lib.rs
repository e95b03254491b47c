// ABOUTME: Core types and constants for the DesiTracker nutrition platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

#![deny(unsafe_code)]

//! # Desi Core
//!
//! Foundation crate providing shared types and constants for the DesiTracker
//! planning engine. It changes infrequently, which keeps incremental builds of
//! the intelligence crate and the application fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanningError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Profile, energy target, preference, meal plan, and log models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
