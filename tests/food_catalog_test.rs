// ABOUTME: Integration tests for the food catalog and portion descriptions
// ABOUTME: Lookup, keyword fallback classification, validation reports and serving text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
#![allow(clippy::unwrap_used)]

mod common;

use desi_core::models::{FoodCategory, FoodPreferenceSet, FoodRole};
use desi_intelligence::food_catalog::{CarbSource, FatSource, ProteinSource};
use desi_intelligence::{portion_size, FoodCatalog};

#[test]
fn test_every_category_is_populated() {
    let catalog = FoodCatalog::builtin();
    for category in FoodCategory::ALL {
        assert!(
            catalog.entries_in(category).count() >= 5,
            "{category} has too few entries"
        );
    }
}

#[test]
fn test_lookup_is_case_insensitive_and_trimmed() {
    let catalog = FoodCatalog::builtin();
    let entry = catalog.lookup("  basmati RICE ").unwrap();
    assert_eq!(entry.label, "Basmati Rice");
    assert_eq!(entry.category(), FoodCategory::Carb);
    assert!(catalog.lookup("Dragon Steak").is_none());
}

#[test]
fn test_tags_win_over_keywords() {
    let catalog = FoodCatalog::builtin();
    // "Rajma (Kidney Beans)" matches no legume keyword but is tagged as one
    assert_eq!(catalog.classify_protein("Rajma (Kidney Beans)"), ProteinSource::Legume);
    assert_eq!(catalog.classify_carb("Sweet Potato"), CarbSource::Potato);
}

#[test]
fn test_unknown_labels_fall_back_to_keywords() {
    let catalog = FoodCatalog::builtin();
    assert_eq!(catalog.classify_protein("Tandoori Chicken"), ProteinSource::Chicken);
    assert_eq!(catalog.classify_protein("Masala Omelette with egg"), ProteinSource::Egg);
    assert_eq!(catalog.classify_carb("Jeera Rice"), CarbSource::Rice);
    assert_eq!(catalog.classify_fat("Sesame Oil"), FatSource::CookingFat);
    assert_eq!(catalog.classify_protein("Seitan"), ProteinSource::Other);
}

#[test]
fn test_validate_preferences_reports_each_bad_label() {
    let prefs = FoodPreferenceSet {
        proteins: vec!["Paneer".to_owned(), "Banana".to_owned()],
        carbs: vec!["Cloud Bread".to_owned()],
        ..FoodPreferenceSet::default()
    };
    let issues = FoodCatalog::builtin().validate_preferences(&prefs);
    let labels: Vec<_> = issues.iter().map(|issue| issue.label.as_str()).collect();
    assert_eq!(labels, vec!["Banana", "Cloud Bread"]);
    assert!(FoodCatalog::builtin()
        .validate_preferences(&common::full_preferences())
        .is_empty());
}

#[test]
fn test_portion_examples() {
    assert_eq!(portion_size(FoodRole::Protein, 40, "Egg (Whole)"), "7 egg(s)");
    // 30 * 4.0
    assert_eq!(portion_size(FoodRole::Protein, 30, "Moong Dal"), "120g (uncooked)");
    assert_eq!(portion_size(FoodRole::Protein, 30, "Lamb (Uncooked)"), "120g");
    assert_eq!(portion_size(FoodRole::Protein, 30, "Paneer"), "165g");
    assert_eq!(portion_size(FoodRole::Carb, 60, "Oats"), "90g (uncooked)");
    assert_eq!(portion_size(FoodRole::Carb, 60, "Naan"), "120g");
    assert_eq!(portion_size(FoodRole::Carb, 60, "Potato"), "300g");
    assert_eq!(portion_size(FoodRole::Fat, 30, "Avocado"), "2 medium avocado(s)");
    assert_eq!(portion_size(FoodRole::Fat, 15, "Almonds"), "30g");
}
