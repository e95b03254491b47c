// ABOUTME: Catalog listing command for desi-cli
// ABOUTME: Prints every selectable food, optionally filtered to one category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::helpers::display::{display_catalog, print_json};
use desi_core::errors::AppResult;
use desi_core::models::FoodCategory;
use desi_intelligence::CatalogEntry;
use desi_tracker::preferences::PreferenceRepository;
use desi_tracker::services::PlanningService;

/// List catalog entries
pub fn list<R: PreferenceRepository>(
    service: &PlanningService<R>,
    category: Option<FoodCategory>,
    json: bool,
) -> AppResult<()> {
    let catalog = service.catalog();
    let entries: Vec<&CatalogEntry> = match category {
        Some(category) => catalog.entries_in(category).collect(),
        None => catalog.entries().iter().collect(),
    };

    if json {
        print_json(&entries)
    } else {
        display_catalog(&entries);
        Ok(())
    }
}
