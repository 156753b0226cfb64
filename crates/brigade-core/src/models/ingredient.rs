// ABOUTME: Ingredient leaf node with unit price, purchase unit and per-100g nutrition table
// ABOUTME: Builder helpers for constructing ingredients in repositories and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::IngredientId;
use crate::constants::nutrients;

/// Raw ingredient (leaf of the recipe graph)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient identifier
    pub id: IngredientId,
    /// Human-readable name
    pub name: String,
    /// Price of one `unit` of this ingredient
    pub price_per_unit: Decimal,
    /// Purchase/measurement unit ("kg", "g", "ml", "pcs", ...)
    pub unit: String,
    /// Nutrient name to amount per 100 grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_per_100g: Option<BTreeMap<String, Decimal>>,
}

impl Ingredient {
    /// Create an ingredient without nutrition data
    #[must_use]
    pub fn new(
        id: impl Into<IngredientId>,
        name: impl Into<String>,
        price_per_unit: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_per_unit,
            unit: unit.into(),
            nutrition_per_100g: None,
        }
    }

    /// Add one nutrient amount (per 100g) to the nutrition table
    #[must_use]
    pub fn with_nutrient(mut self, name: impl Into<String>, per_100g: Decimal) -> Self {
        self.nutrition_per_100g
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), per_100g);
        self
    }

    /// Amount of a canonical nutrient per 100g, honoring alias spellings
    ///
    /// When a table spells the same nutrient several ways (`calories` and
    /// `kcal`), the canonical spelling wins, then aliases in the order of
    /// [`nutrients::canonical_with_rank`]. Returns `None` when the ingredient
    /// has no table or the nutrient is absent.
    #[must_use]
    pub fn nutrient_per_100g(&self, canonical_key: &str) -> Option<Decimal> {
        let table = self.nutrition_per_100g.as_ref()?;
        table
            .iter()
            .filter_map(|(name, amount)| match nutrients::canonical_with_rank(name) {
                Some((key, rank)) if key == canonical_key => Some((rank, *amount)),
                _ => None,
            })
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, amount)| amount)
    }
}
