// ABOUTME: Procurement request and shopping-list entry types for the aggregation resolver
// ABOUTME: Requests name recipe batches or sold menu units; entries carry gross quantity and cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IngredientId, MenuId, RecipeId};

/// One thing the kitchen needs to produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcurementRequest {
    /// A number of batches of a recipe
    Recipe {
        /// Recipe to produce
        recipe_id: RecipeId,
        /// Batch multiplier
        batches: Decimal,
    },
    /// A number of sold units of a sales menu
    SalesMenu {
        /// Menu to expand
        menu_id: MenuId,
        /// Menu units sold
        quantity: Decimal,
    },
}

impl ProcurementRequest {
    /// Request `batches` of a recipe
    #[must_use]
    pub fn recipe(recipe_id: impl Into<RecipeId>, batches: Decimal) -> Self {
        Self::Recipe {
            recipe_id: recipe_id.into(),
            batches,
        }
    }

    /// Request `quantity` units of a sales menu
    #[must_use]
    pub fn sales_menu(menu_id: impl Into<MenuId>, quantity: Decimal) -> Self {
        Self::SalesMenu {
            menu_id: menu_id.into(),
            quantity,
        }
    }
}

/// One line of a generated shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    /// Ingredient to buy
    pub ingredient_id: IngredientId,
    /// Ingredient name
    pub name: String,
    /// Gross quantity to purchase, full precision, in `unit`
    pub quantity: Decimal,
    /// Ingredient purchase unit
    pub unit: String,
    /// Estimated cost of `quantity`
    pub estimated_cost: Decimal,
}
