// ABOUTME: Daily meal plan output structures produced by the meal plan generator
// ABOUTME: MealKind, FoodRole, PlannedFood, MealSlot, SnackSlot, and the MealPlan aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use super::nutrition::MacroGrams;
use super::profile::canonical_token;
use crate::errors::PlanningError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slot of the day a suggestion belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealKind {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealKind {
    /// The three main meals in serving order
    pub const MAIN_MEALS: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Title-case label for display names
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealKind {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            _ => Err(PlanningError::unknown_enum("meal_kind", s)),
        }
    }
}

/// Macro role a food plays on a plate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodRole {
    /// Main protein
    Protein,
    /// Main carbohydrate
    Carb,
    /// Cooking fat or topping
    Fat,
    /// Side vegetable
    Vegetable,
}

/// One food line of a meal suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedFood {
    /// Catalog label
    pub label: String,
    /// Role on the plate
    pub role: FoodRole,
    /// Serving description, e.g. `"7 egg(s)"`
    pub portion: String,
}

/// A main-meal suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Which meal this is
    pub kind: MealKind,
    /// Generated display name, e.g. `"Egg Breakfast"`
    pub name: String,
    /// Calorie share of the daily target
    pub target_calories: u32,
    /// Macro share of the daily target
    pub target_macros: MacroGrams,
    /// Foods in role order: protein, carb, fat, vegetables
    pub foods: Vec<PlannedFood>,
    /// At most three short cooking tips
    pub cooking_tips: Vec<String>,
}

impl MealSlot {
    /// First food filling the given role
    #[must_use]
    pub fn food(&self, role: FoodRole) -> Option<&PlannedFood> {
        self.foods.iter().find(|food| food.role == role)
    }
}

/// Snack suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackSlot {
    /// Calorie share of the daily target
    pub target_calories: u32,
    /// Macro share of the daily target
    pub target_macros: MacroGrams,
    /// Primary recommendation
    pub recommendation: String,
    /// Up to two options (the primary recommendation comes first)
    pub options: Vec<String>,
}

/// A full day of suggestions, regenerated on demand and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Breakfast suggestion
    pub breakfast: MealSlot,
    /// Lunch suggestion
    pub lunch: MealSlot,
    /// Dinner suggestion
    pub dinner: MealSlot,
    /// Snack suggestion
    pub snack: SnackSlot,
    /// Daily calorie target the plan was built for
    pub total_calories: u32,
    /// Daily macro target the plan was built for
    pub total_macros: MacroGrams,
}

impl MealPlan {
    /// Breakfast, lunch and dinner in serving order
    #[must_use]
    pub const fn main_meals(&self) -> [&MealSlot; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    /// Sum of every slot's calorie target (may differ from the total by rounding)
    #[must_use]
    pub fn allocated_calories(&self) -> u32 {
        self.main_meals()
            .iter()
            .map(|slot| slot.target_calories)
            .sum::<u32>()
            + self.snack.target_calories
    }
}
