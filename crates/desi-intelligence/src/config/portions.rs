// ABOUTME: Portion multiplier tables converting per-meal macro grams into serving sizes
// ABOUTME: One named multiplier per protein, carb, and fat source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors

//! Portion Configuration
//!
//! Empirical kitchen multipliers. A protein multiplier of 4.5 means one gram of
//! protein target becomes 4.5 g of raw food on the plate.

use super::error::ConfigError;
use crate::food_catalog::{CarbSource, FatSource, ProteinSource};
use serde::{Deserialize, Serialize};

/// All portion tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Protein source multipliers
    pub protein: ProteinPortionConfig,
    /// Carb source multipliers
    pub carbs: CarbPortionConfig,
    /// Fat source multipliers
    pub fats: FatPortionConfig,
}

impl PortionConfig {
    /// Validate that every multiplier and divisor is positive and finite
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the offending table
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables: [(&'static str, Vec<f64>); 3] = [
            (
                "Protein portion multipliers must be positive",
                vec![
                    self.protein.protein_grams_per_egg,
                    self.protein.meat,
                    self.protein.lamb,
                    self.protein.fish,
                    self.protein.legume,
                    self.protein.paneer,
                    self.protein.yogurt,
                    self.protein.other,
                ],
            ),
            (
                "Carb portion multipliers must be positive",
                vec![
                    self.carbs.rice,
                    self.carbs.roti,
                    self.carbs.naan,
                    self.carbs.oats,
                    self.carbs.potato,
                    self.carbs.other,
                ],
            ),
            (
                "Fat portion multipliers must be positive",
                vec![
                    self.fats.fat_grams_per_tablespoon,
                    self.fats.seeds_nuts,
                    self.fats.fat_grams_per_avocado,
                    self.fats.other,
                ],
            ),
        ];

        for (message, values) in tables {
            if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(ConfigError::ValueOutOfRange(message));
            }
        }
        Ok(())
    }
}

/// Protein portions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinPortionConfig {
    /// Protein grams in one whole egg (6)
    pub protein_grams_per_egg: f64,
    /// Chicken, beef, goat: grams raw weight per protein gram (4.5)
    pub meat: f64,
    /// Lamb: grams per protein gram (4, the generic rate)
    pub lamb: f64,
    /// Fish, salmon, tuna (5)
    pub fish: f64,
    /// Dal, chana: uncooked grams per protein gram (4)
    pub legume: f64,
    /// Paneer (5.5)
    pub paneer: f64,
    /// Yogurt (10)
    pub yogurt: f64,
    /// Anything else (4)
    pub other: f64,
}

impl Default for ProteinPortionConfig {
    fn default() -> Self {
        Self {
            protein_grams_per_egg: 6.0,
            meat: 4.5,
            lamb: 4.0,
            fish: 5.0,
            legume: 4.0,
            paneer: 5.5,
            yogurt: 10.0,
            other: 4.0,
        }
    }
}

impl ProteinPortionConfig {
    /// Gram multiplier for non-egg sources
    #[must_use]
    pub const fn multiplier(&self, source: ProteinSource) -> f64 {
        match source {
            ProteinSource::Chicken | ProteinSource::Beef | ProteinSource::Goat => self.meat,
            ProteinSource::Lamb => self.lamb,
            ProteinSource::Fish => self.fish,
            ProteinSource::Legume => self.legume,
            ProteinSource::Paneer => self.paneer,
            ProteinSource::Yogurt => self.yogurt,
            ProteinSource::Egg | ProteinSource::Other => self.other,
        }
    }
}

/// Carb portions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbPortionConfig {
    /// Cooked rice grams per carb gram (3.5)
    pub rice: f64,
    /// Roti and chapati (2)
    pub roti: f64,
    /// Naan (2)
    pub naan: f64,
    /// Uncooked oats (1.5)
    pub oats: f64,
    /// Potato (5)
    pub potato: f64,
    /// Anything else (2)
    pub other: f64,
}

impl Default for CarbPortionConfig {
    fn default() -> Self {
        Self {
            rice: 3.5,
            roti: 2.0,
            naan: 2.0,
            oats: 1.5,
            potato: 5.0,
            other: 2.0,
        }
    }
}

impl CarbPortionConfig {
    /// Gram multiplier for a carb source
    #[must_use]
    pub const fn multiplier(&self, source: CarbSource) -> f64 {
        match source {
            CarbSource::Rice => self.rice,
            CarbSource::Roti | CarbSource::Chapati => self.roti,
            CarbSource::Naan => self.naan,
            CarbSource::Oats => self.oats,
            CarbSource::Potato => self.potato,
            CarbSource::Other => self.other,
        }
    }
}

/// Fat portions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatPortionConfig {
    /// Fat grams in one tablespoon of ghee, oil or butter (11)
    pub fat_grams_per_tablespoon: f64,
    /// Seeds and nuts grams per fat gram (2)
    pub seeds_nuts: f64,
    /// Fat grams in one medium avocado (15)
    pub fat_grams_per_avocado: f64,
    /// Anything else (2)
    pub other: f64,
}

impl Default for FatPortionConfig {
    fn default() -> Self {
        Self {
            fat_grams_per_tablespoon: 11.0,
            seeds_nuts: 2.0,
            fat_grams_per_avocado: 15.0,
            other: 2.0,
        }
    }
}
