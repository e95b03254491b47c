// ABOUTME: Biometric user profile consumed by the energy target calculator
// ABOUTME: BiologicalSex, ActivityLevel, Goal enums with strict parsing and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

use crate::constants::profile_limits::{
    AGE_MAX, AGE_MIN, HEIGHT_CM_MAX, HEIGHT_CM_MIN, WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};
use crate::errors::PlanningError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase and fold `-` and spaces into `_` so `Lightly Active`,
/// `lightly-active` and `lightly_active` parse identically.
pub(crate) fn canonical_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Biological sex used by the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum BiologicalSex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// Activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job or training twice a day
    ExtremelyActive,
}

/// Weight goal selecting the fixed calorie offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Goal {
    /// Calorie deficit
    Lose,
    /// Energy balance
    Maintain,
    /// Calorie surplus
    Gain,
}

impl BiologicalSex {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl ActivityLevel {
    /// All levels in ascending order of activity
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl Goal {
    /// All goals
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(PlanningError::unknown_enum("biological_sex", s)),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(s);
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == token)
            .ok_or_else(|| PlanningError::unknown_enum("activity_level", s))
    }
}

impl FromStr for Goal {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = canonical_token(s);
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == token)
            .ok_or_else(|| PlanningError::unknown_enum("goal", s))
    }
}

macro_rules! string_enum_glue {
    ($($ty:ty),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = PlanningError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

string_enum_glue!(BiologicalSex, ActivityLevel, Goal);

/// Biometric profile for a single calculation
///
/// Numeric fields are optional because the surrounding profile store may hold
/// a partially filled account. An incomplete profile is not an error for the
/// calculator: it yields a zero "not computed" target. Enumerated fields are
/// always present because unknown spellings are rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in whole years (13-120)
    #[serde(default)]
    pub age: Option<u32>,
    /// Body weight in kilograms (20-500)
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters (50-250)
    #[serde(default, alias = "height")]
    pub height_cm: Option<f64>,
    /// Biological sex
    #[serde(alias = "biological_sex")]
    pub sex: BiologicalSex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
}

/// Numeric measurements of a complete profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

impl UserProfile {
    /// Build a profile with every numeric field present
    #[must_use]
    pub fn new(
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        sex: BiologicalSex,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            age: Some(age),
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            sex,
            activity_level,
            goal,
        }
    }

    /// Names of required numeric fields that are absent or non-finite
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.age.is_none() {
            missing.push("age");
        }
        if !self.weight_kg.is_some_and(f64::is_finite) {
            missing.push("weight_kg");
        }
        if !self.height_cm.is_some_and(f64::is_finite) {
            missing.push("height_cm");
        }
        missing
    }

    /// Whether every numeric field needed by the calculator is usable
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.measurements().is_some()
    }

    /// Numeric measurements, or `None` for an incomplete profile
    #[must_use]
    pub fn measurements(&self) -> Option<Measurements> {
        let age = self.age?;
        let weight_kg = self.weight_kg.filter(|w| w.is_finite())?;
        let height_cm = self.height_cm.filter(|h| h.is_finite())?;
        Some(Measurements {
            age,
            weight_kg,
            height_cm,
        })
    }

    /// Check completeness and accepted ranges
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` when a numeric field is missing, or
    /// `ValueOutOfRange` for the first field outside its accepted range
    pub fn validate(&self) -> Result<(), PlanningError> {
        let Some(m) = self.measurements() else {
            return Err(PlanningError::IncompleteProfile {
                missing: self.missing_fields(),
            });
        };

        check_range("age", f64::from(m.age), f64::from(AGE_MIN), f64::from(AGE_MAX))?;
        check_range("weight_kg", m.weight_kg, WEIGHT_KG_MIN, WEIGHT_KG_MAX)?;
        check_range("height_cm", m.height_cm, HEIGHT_CM_MIN, HEIGHT_CM_MAX)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), PlanningError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PlanningError::ValueOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
