// ABOUTME: Criterion benchmarks for energy target computation and meal plan generation
// ABOUTME: Measures the pure calculator paths and the in-memory planning service round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Criterion benchmarks for the planning core.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use desi_core::models::{ActivityLevel, BiologicalSex, FoodCategory, FoodPreferenceSet, Goal, UserProfile};
use desi_intelligence::config::NutritionConfig;
use desi_intelligence::{compute_energy_target, FoodCatalog, MealPlanGenerator, PlannerConfig};
use desi_tracker::preferences::InMemoryPreferenceRepository;
use desi_tracker::services::PlanningService;
use tokio::runtime::Runtime;
use uuid::Uuid;

fn profile(activity: ActivityLevel, goal: Goal) -> UserProfile {
    UserProfile::new(34, 82.5, 178.0, BiologicalSex::Male, activity, goal)
}

/// Preference set taking the first `per_category` catalog labels of every category
fn catalog_preferences(per_category: usize) -> FoodPreferenceSet {
    let catalog = FoodCatalog::builtin();
    let take = |category: FoodCategory| -> Vec<String> {
        catalog
            .entries_in(category)
            .take(per_category)
            .map(|entry| entry.label.to_owned())
            .collect()
    };
    FoodPreferenceSet {
        proteins: take(FoodCategory::Protein),
        carbs: take(FoodCategory::Carb),
        fats: take(FoodCategory::Fat),
        vegetables: take(FoodCategory::Vegetable),
        fruits: take(FoodCategory::Fruit),
    }
}

fn bench_energy_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_target");
    let config = NutritionConfig::default();

    for goal in Goal::ALL {
        let profile = profile(ActivityLevel::ModeratelyActive, goal);
        group.bench_with_input(BenchmarkId::from_parameter(goal), &profile, |b, profile| {
            b.iter(|| compute_energy_target(black_box(profile), black_box(&config)));
        });
    }

    group.finish();
}

fn bench_generate_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_plan");
    let generator = MealPlanGenerator::new(PlannerConfig::default());
    let target = compute_energy_target(
        &profile(ActivityLevel::LightlyActive, Goal::Lose),
        &NutritionConfig::default(),
    );

    for per_category in [1_usize, 3, 10] {
        let preferences = catalog_preferences(per_category);
        group.bench_with_input(
            BenchmarkId::new("labels_per_category", per_category),
            &preferences,
            |b, preferences| {
                b.iter(|| generator.generate(black_box(&target), black_box(preferences)));
            },
        );
    }

    group.finish();
}

fn bench_service_round_trip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let service = PlanningService::with_config(
        InMemoryPreferenceRepository::new(),
        PlannerConfig::default(),
    );
    let user_id = Uuid::new_v4();
    rt.block_on(service.save_preferences(user_id, catalog_preferences(3)))
        .unwrap();
    let profile = profile(ActivityLevel::VeryActive, Goal::Gain);

    c.bench_function("plan_for_user_in_memory", |b| {
        b.iter(|| rt.block_on(service.plan_for_user(black_box(user_id), black_box(&profile))));
    });
}

criterion_group!(
    benches,
    bench_energy_target,
    bench_generate_plan,
    bench_service_round_trip
);
criterion_main!(benches);
