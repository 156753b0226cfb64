// ABOUTME: Core types and constants for the Brigade recipe composition resolver
// ABOUTME: Foundation crate with the recipe graph data model, error types, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

#![deny(unsafe_code)]

//! # Brigade Core
//!
//! Foundation crate providing the shared data model for the Brigade recipe
//! resolver. It is deliberately free of I/O and async so that storage layers,
//! HTTP handlers and the resolver itself can all depend on it cheaply.
//!
//! ## Modules
//!
//! - **models**: Ingredients, recipes, recipe items, sales menus and resolver outputs
//! - **errors**: `ResolveError`, `RepositoryError` and the transport-facing `ErrorCode`
//! - **constants**: Nutrient keys, rounding defaults and configuration variable names

/// Nutrient keys, rounding defaults and configuration variable names
pub mod constants;

/// Resolver and repository error types with HTTP-style error codes
pub mod errors;

/// Recipe graph data model and resolver result types
pub mod models;

/// Shared decimal rounding
pub mod numeric;

pub use errors::{EntityKind, ErrorCode, RepositoryError, ResolveError, ResolveResult};
pub use models::{
    Ingredient, IngredientId, ItemSource, MenuId, NutritionTotals, ProcurementRequest, Recipe,
    RecipeId, RecipeItem, SalesMenu, SalesMenuLine, ShoppingListEntry,
};
pub use rust_decimal::Decimal;
