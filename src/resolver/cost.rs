// ABOUTME: Cost resolution: price of one batch including sub-recipes and ingredient loss
// ABOUTME: Adds labor per batch and divides by the recipe yield for cost per portion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use brigade_core::errors::{ResolveError, ResolveResult};
use brigade_core::models::{ItemSource, Recipe, RecipeId, RecipeItem};
use brigade_core::numeric::round_to;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::path::TraversalPath;
use super::{RecipeResolver, WalkFuture};
use crate::repository::RecipeRepository;

/// Yield rate used to turn a net item cost into a gross one
///
/// Absent means no loss. Zero would divide by zero and is rejected.
fn cost_yield_rate(recipe_id: &RecipeId, item: &RecipeItem) -> ResolveResult<Decimal> {
    match item.yield_rate {
        None => Ok(Decimal::ONE),
        Some(rate) if rate.is_zero() => Err(ResolveError::InvalidYieldRate {
            recipe_id: recipe_id.clone(),
        }),
        Some(rate) => Ok(rate),
    }
}

impl<R: RecipeRepository + ?Sized> RecipeResolver<R> {
    /// Cost of one batch of `recipe_id`, excluding labor
    ///
    /// Sub-recipes are priced recursively at full precision; only the returned
    /// value is rounded, to `money_scale` decimal places.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recipe, a sub-recipe or an ingredient is missing
    /// - `CircularDependency` if a recipe contains itself at any depth
    /// - `InvalidYieldRate` if any visited item has a yield rate of zero
    /// - `Overflow` if a scaled cost leaves the decimal range
    /// - `Repository` if the backend fails
    #[instrument(skip_all, fields(recipe_id = %recipe_id))]
    pub async fn resolve_cost(&self, recipe_id: &RecipeId) -> ResolveResult<Decimal> {
        let mut path = TraversalPath::new();
        let cost = self.batch_cost(recipe_id, &mut path).await?;
        Ok(round_to(cost, self.config.money_scale))
    }

    /// Cost of one portion: batch cost plus labor, divided by the yield quantity
    ///
    /// # Errors
    ///
    /// Everything [`Self::resolve_cost`] can return, plus
    /// `InvalidYieldQuantity` if the recipe yields zero portions.
    #[instrument(skip_all, fields(recipe_id = %recipe_id))]
    pub async fn resolve_cost_per_portion(
        &self,
        recipe_id: &RecipeId,
    ) -> ResolveResult<Decimal> {
        let recipe = self.load_recipe(recipe_id).await?;
        if recipe.yield_quantity.is_zero() {
            return Err(ResolveError::InvalidYieldQuantity {
                recipe_id: recipe_id.clone(),
            });
        }

        let mut path = TraversalPath::new();
        path.enter(recipe_id)?;
        let cost = self.items_cost(&recipe, &mut path).await?;
        path.leave(recipe_id);

        let per_portion = cost
            .checked_add(recipe.labor_cost)
            .and_then(|loaded| loaded.checked_div(recipe.yield_quantity))
            .ok_or_else(|| ResolveError::overflow(recipe_id))?;
        Ok(round_to(per_portion, self.config.money_scale))
    }

    fn batch_cost<'a>(
        &'a self,
        recipe_id: &'a RecipeId,
        path: &'a mut TraversalPath,
    ) -> WalkFuture<'a, Decimal> {
        Box::pin(async move {
            path.enter(recipe_id)?;
            let recipe = self.load_recipe(recipe_id).await?;
            let cost = self.items_cost(&recipe, path).await?;
            path.leave(recipe_id);
            Ok(cost)
        })
    }

    async fn items_cost(
        &self,
        recipe: &Recipe,
        path: &mut TraversalPath,
    ) -> ResolveResult<Decimal> {
        debug!(
            recipe_id = %recipe.id,
            items = recipe.items.len(),
            depth = path.depth(),
            "costing recipe"
        );

        let mut total = Decimal::ZERO;
        for item in &recipe.items {
            let unit_cost = match &item.source {
                ItemSource::Ingredient(ingredient_id) => {
                    self.load_ingredient(ingredient_id).await?.price_per_unit
                }
                ItemSource::ChildRecipe(child_id) => self.batch_cost(child_id, path).await?,
            };
            let yield_rate = cost_yield_rate(&recipe.id, item)?;
            total = unit_cost
                .checked_mul(item.quantity)
                .and_then(|item_cost| item_cost.checked_div(yield_rate))
                .and_then(|gross_cost| total.checked_add(gross_cost))
                .ok_or_else(|| ResolveError::overflow(&recipe.id))?;
        }
        Ok(total)
    }
}
