// ABOUTME: Recipe graph data model shared by repositories, resolvers and transports
// ABOUTME: Identifiers, ingredients, recipes, sales menus and resolver result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

//! Recipe graph data model.
//!
//! Recipes form an arena keyed by [`RecipeId`]; a sub-recipe reference is an
//! identifier, never an owning pointer, so cyclic graphs can be represented
//! (and detected) without reference cycles.

mod ids;
mod ingredient;
mod menu;
mod nutrition;
mod procurement;
mod recipe;

pub use ids::{IngredientId, MenuId, RecipeId};
pub use ingredient::Ingredient;
pub use menu::{SalesMenu, SalesMenuLine};
pub use nutrition::NutritionTotals;
pub use procurement::{ProcurementRequest, ShoppingListEntry};
pub use recipe::{ItemSource, Recipe, RecipeItem};
