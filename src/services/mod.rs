// ABOUTME: Domain service layer orchestrating storage and the planning core
// ABOUTME: Surface-agnostic so the CLI and any future HTTP layer share the same rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Domain service layer
//!
//! Services wire a [`PreferenceRepository`](crate::preferences::PreferenceRepository)
//! to the pure calculators in `desi-intelligence`, keeping validation and
//! logging consistent regardless of the entry point.

/// Energy targets, meal plans and preference management
pub mod planning;

pub use planning::PlanningService;
