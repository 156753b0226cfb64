// ABOUTME: Repository collaborator abstraction supplying recipes, ingredients and sales menus
// ABOUTME: Pluggable backends behind an async trait; ships with an in-memory recipe book
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

/// Structural checks over a recipe book (cycles, dangling references)
pub mod audit;
/// Loading recipe books from JSON and YAML documents
pub mod loader;
/// In-memory recipe book
pub mod memory;

pub use audit::{BookAudit, MissingReference};
pub use loader::{BookError, RecipeBookDocument};
pub use memory::RecipeBook;

use brigade_core::errors::RepositoryError;
use brigade_core::models::{Ingredient, IngredientId, MenuId, Recipe, RecipeId, SalesMenu};

/// Read-only source of recipe graph records
///
/// Every call is a potential suspension point (one fetch per recipe visited);
/// resolvers never issue concurrent calls for siblings. Absence is reported as
/// `Ok(None)`, reserving `Err` for backend failures.
///
/// # Examples
///
/// ```rust
/// use brigade::models::{Recipe, RecipeId};
/// use brigade::repository::{RecipeBook, RecipeRepository};
///
/// # async fn example() -> Result<(), brigade::errors::RepositoryError> {
/// let book = RecipeBook::new().with_recipe(Recipe::new("stock", "Chicken stock"));
///
/// let stock = book.get_recipe(&RecipeId::new("stock")).await?;
/// assert!(stock.is_some());
/// assert!(book.get_recipe(&RecipeId::new("missing")).await?.is_none());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetch a recipe with its items
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn get_recipe(&self, id: &RecipeId) -> Result<Option<Recipe>, RepositoryError>;

    /// Fetch an ingredient
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn get_ingredient(&self, id: &IngredientId)
        -> Result<Option<Ingredient>, RepositoryError>;

    /// Fetch a sales menu; backends without menus keep the default
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn get_sales_menu(&self, _id: &MenuId) -> Result<Option<SalesMenu>, RepositoryError> {
        Ok(None)
    }
}
