// ABOUTME: Recipe resolver walking the recipe-of-recipes graph through a repository
// ABOUTME: Hosts cost, nutrition and procurement resolution plus shared lookup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

//! # Recipe resolution
//!
//! Every resolution starts a fresh [`path::TraversalPath`], visits sub-recipes
//! depth-first and strictly one after another, and rounds only the value it
//! finally returns. Shared sub-recipes are recomputed per reference.

/// Unit conversion from recipe quantities to grams
pub mod conversion;
/// Batch cost and cost per portion
pub mod cost;
/// Batch weight and macro-nutrients
pub mod nutrition;
/// Path-based cycle detection
pub mod path;
/// Aggregated shopping lists for recipe batches and sold menu units
pub mod procurement;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use brigade_core::errors::{ResolveError, ResolveResult};
use brigade_core::models::{Ingredient, IngredientId, MenuId, Recipe, RecipeId, SalesMenu};

use crate::config::ResolverConfig;
use crate::repository::RecipeRepository;

/// Boxed future for the recursive walks, which cannot be plain `async fn`s
type WalkFuture<'a, T> = Pin<Box<dyn Future<Output = ResolveResult<T>> + Send + 'a>>;

/// Resolver over a shared repository
///
/// Holds no traversal state, so one instance can serve concurrent calls.
pub struct RecipeResolver<R: RecipeRepository + ?Sized> {
    repository: Arc<R>,
    config: ResolverConfig,
}

impl<R: RecipeRepository + ?Sized> Clone for RecipeResolver<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: self.config.clone(),
        }
    }
}

impl<R: RecipeRepository + ?Sized> RecipeResolver<R> {
    /// Create a resolver using the process-wide configuration
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, ResolverConfig::global().clone())
    }

    /// Create a resolver with explicit configuration
    #[must_use]
    pub fn with_config(repository: Arc<R>, config: ResolverConfig) -> Self {
        Self { repository, config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Underlying repository
    #[must_use]
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    async fn load_recipe(&self, id: &RecipeId) -> ResolveResult<Recipe> {
        self.repository
            .get_recipe(id)
            .await?
            .ok_or_else(|| ResolveError::recipe_not_found(id))
    }

    async fn load_ingredient(&self, id: &IngredientId) -> ResolveResult<Ingredient> {
        self.repository
            .get_ingredient(id)
            .await?
            .ok_or_else(|| ResolveError::ingredient_not_found(id))
    }

    async fn load_menu(&self, id: &MenuId) -> ResolveResult<SalesMenu> {
        self.repository
            .get_sales_menu(id)
            .await?
            .ok_or_else(|| ResolveError::menu_not_found(id))
    }
}
