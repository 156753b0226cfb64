// ABOUTME: Nutrition totals for one batch of a recipe: weight plus macro-nutrients
// ABOUTME: Supports checked accumulation, batch scaling and boundary rounding in exact decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::numeric::round_to;

/// Aggregate weight and macro-nutrients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Total convertible weight in grams
    pub total_weight_grams: Decimal,
    /// Energy in kilocalories
    pub calories: Decimal,
    /// Protein in grams
    pub protein: Decimal,
    /// Fat in grams
    pub fat: Decimal,
    /// Carbohydrates in grams
    pub carbs: Decimal,
}

impl NutritionTotals {
    /// All fields zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_weight_grams: Decimal::ZERO,
            calories: Decimal::ZERO,
            protein: Decimal::ZERO,
            fat: Decimal::ZERO,
            carbs: Decimal::ZERO,
        }
    }

    /// Every field multiplied by `factor` (e.g. a sub-recipe batch count)
    ///
    /// Returns `None` if any field leaves the decimal range.
    #[must_use]
    pub fn checked_scaled(&self, factor: Decimal) -> Option<Self> {
        Some(Self {
            total_weight_grams: self.total_weight_grams.checked_mul(factor)?,
            calories: self.calories.checked_mul(factor)?,
            protein: self.protein.checked_mul(factor)?,
            fat: self.fat.checked_mul(factor)?,
            carbs: self.carbs.checked_mul(factor)?,
        })
    }

    /// Field-wise sum, or `None` if any field leaves the decimal range
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(Self {
            total_weight_grams: self
                .total_weight_grams
                .checked_add(other.total_weight_grams)?,
            calories: self.calories.checked_add(other.calories)?,
            protein: self.protein.checked_add(other.protein)?,
            fat: self.fat.checked_add(other.fat)?,
            carbs: self.carbs.checked_add(other.carbs)?,
        })
    }

    /// Every field rounded half away from zero to `scale` decimal places
    #[must_use]
    pub fn rounded(&self, scale: u32) -> Self {
        Self {
            total_weight_grams: round_to(self.total_weight_grams, scale),
            calories: round_to(self.calories, scale),
            protein: round_to(self.protein, scale),
            fat: round_to(self.fat, scale),
            carbs: round_to(self.carbs, scale),
        }
    }
}
