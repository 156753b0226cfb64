// ABOUTME: In-memory recipe book: an arena of ingredients, recipes and menus keyed by id
// ABOUTME: Implements RecipeRepository for tests, CLI use and pre-loaded request snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::BTreeMap;

use brigade_core::errors::RepositoryError;
use brigade_core::models::{Ingredient, IngredientId, MenuId, Recipe, RecipeId, SalesMenu};

use super::audit::{self, BookAudit};
use super::RecipeRepository;

/// Arena of recipe graph records
///
/// Sub-recipe references stay identifiers, so a book can hold cyclic graphs;
/// resolvers detect those at traversal time and [`RecipeBook::audit`] reports
/// them up front. Inserting a record with an existing id replaces it.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    ingredients: BTreeMap<IngredientId, Ingredient>,
    recipes: BTreeMap<RecipeId, Recipe>,
    sales_menus: BTreeMap<MenuId, SalesMenu>,
}

impl RecipeBook {
    /// Create an empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an ingredient, returning the previous record
    pub fn insert_ingredient(&mut self, ingredient: Ingredient) -> Option<Ingredient> {
        self.ingredients.insert(ingredient.id.clone(), ingredient)
    }

    /// Insert or replace a recipe, returning the previous record
    pub fn insert_recipe(&mut self, recipe: Recipe) -> Option<Recipe> {
        self.recipes.insert(recipe.id.clone(), recipe)
    }

    /// Insert or replace a sales menu, returning the previous record
    pub fn insert_sales_menu(&mut self, menu: SalesMenu) -> Option<SalesMenu> {
        self.sales_menus.insert(menu.id.clone(), menu)
    }

    /// Builder-style ingredient insert
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.insert_ingredient(ingredient);
        self
    }

    /// Builder-style recipe insert
    #[must_use]
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.insert_recipe(recipe);
        self
    }

    /// Builder-style sales menu insert
    #[must_use]
    pub fn with_sales_menu(mut self, menu: SalesMenu) -> Self {
        self.insert_sales_menu(menu);
        self
    }

    /// Look up an ingredient
    #[must_use]
    pub fn ingredient(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    /// Look up a recipe
    #[must_use]
    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Look up a sales menu
    #[must_use]
    pub fn sales_menu(&self, id: &MenuId) -> Option<&SalesMenu> {
        self.sales_menus.get(id)
    }

    /// All ingredients, ordered by id
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// All recipes, ordered by id
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// All sales menus, ordered by id
    pub fn sales_menus(&self) -> impl Iterator<Item = &SalesMenu> {
        self.sales_menus.values()
    }

    /// Total number of records across all entity kinds
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.recipes.len() + self.sales_menus.len()
    }

    /// Whether the book holds no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Report cycles and dangling references without resolving anything
    #[must_use]
    pub fn audit(&self) -> BookAudit {
        audit::audit_book(self)
    }
}

#[async_trait::async_trait]
impl RecipeRepository for RecipeBook {
    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>, RepositoryError> {
        Ok(self.recipes.get(id).cloned())
    }

    async fn get_ingredient(
        &self,
        id: &IngredientId,
    ) -> Result<Option<Ingredient>, RepositoryError> {
        Ok(self.ingredients.get(id).cloned())
    }

    async fn get_sales_menu(&self, id: &MenuId) -> Result<Option<SalesMenu>, RepositoryError> {
        Ok(self.sales_menus.get(id).cloned())
    }
}
