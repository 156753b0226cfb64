// ABOUTME: Main library entry point for the Brigade recipe composition resolver
// ABOUTME: Cost, nutrition and procurement resolution over a recipe-of-recipes graph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

#![deny(unsafe_code)]

//! # Brigade
//!
//! Walks a directed graph of recipes that may contain other recipes and computes,
//! in exact decimal arithmetic:
//!
//! - the cost of one batch (and per portion, including labor),
//! - the weight and macro-nutrients of one batch,
//! - the aggregated raw-ingredient shopping list for any mix of recipe batches
//!   and sold menu units.
//!
//! Data comes from a [`repository::RecipeRepository`] implementation; the
//! in-memory [`repository::RecipeBook`] ships with the crate and can be loaded
//! from JSON or YAML.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use brigade::models::{Ingredient, Recipe, RecipeId, RecipeItem};
//! use brigade::repository::RecipeBook;
//! use brigade::resolver::RecipeResolver;
//! use rust_decimal_macros::dec;
//!
//! # async fn example() -> Result<(), brigade::errors::ResolveError> {
//! let book = RecipeBook::new()
//!     .with_ingredient(Ingredient::new("flour", "Flour", dec!(0.002), "g"))
//!     .with_recipe(
//!         Recipe::new("dough", "Dough")
//!             .with_item(RecipeItem::ingredient("flour", dec!(500)).with_yield_rate(dec!(0.95))),
//!     );
//!
//! let resolver = RecipeResolver::new(Arc::new(book));
//! let cost = resolver.resolve_cost(&RecipeId::new("dough")).await?;
//! assert_eq!(cost, dec!(1.05));
//! # Ok(())
//! # }
//! ```

/// Resolver configuration loaded from the environment
pub mod config;

/// Structured logging setup built on `tracing-subscriber`
pub mod logging;

/// Repository collaborator trait plus the in-memory recipe book
pub mod repository;

/// Cost, nutrition and procurement resolvers
pub mod resolver;

/// Re-exported data model from `brigade-core`
pub mod models {
    pub use brigade_core::models::*;
}

/// Re-exported error types from `brigade-core`
pub mod errors {
    pub use brigade_core::errors::*;
}

/// Re-exported constants from `brigade-core`
pub use brigade_core::constants;
