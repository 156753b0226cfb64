// ABOUTME: Nutrition resolution: weight and macro-nutrients of one recipe batch
// ABOUTME: Converts ingredient quantities to grams and scales per-100g tables recursively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use brigade_core::constants::nutrients;
use brigade_core::errors::{ResolveError, ResolveResult};
use brigade_core::models::{Ingredient, ItemSource, NutritionTotals, RecipeId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, instrument};

use super::conversion::grams_per_unit;
use super::path::TraversalPath;
use super::{RecipeResolver, WalkFuture};
use crate::repository::RecipeRepository;

/// Contribution of `quantity` (in the ingredient's own unit) of one ingredient
///
/// `None` if the scaled weight or a nutrient leaves the decimal range.
fn ingredient_totals(ingredient: &Ingredient, quantity: Decimal) -> Option<NutritionTotals> {
    let Some(unit_grams) = grams_per_unit(&ingredient.unit) else {
        debug!(
            ingredient_id = %ingredient.id,
            unit = %ingredient.unit,
            "unit has no gram equivalent, ingredient adds no weight or nutrients"
        );
        return Some(NutritionTotals::zero());
    };

    let grams = quantity.checked_mul(unit_grams)?;
    let factor = grams.checked_div(dec!(100))?;
    let per_grams = |key: &str| {
        ingredient
            .nutrient_per_100g(key)
            .map_or(Some(Decimal::ZERO), |per_100g| per_100g.checked_mul(factor))
    };

    Some(NutritionTotals {
        total_weight_grams: grams,
        calories: per_grams(nutrients::CALORIES)?,
        protein: per_grams(nutrients::PROTEIN)?,
        fat: per_grams(nutrients::FAT)?,
        carbs: per_grams(nutrients::CARBS)?,
    })
}

impl<R: RecipeRepository + ?Sized> RecipeResolver<R> {
    /// Weight and macro-nutrients of one batch of `recipe_id`
    ///
    /// Item yield rates are not applied: the quantities listed are what ends
    /// up in the dish. Every field is rounded to `nutrient_scale` decimal places
    /// on return only.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recipe, a sub-recipe or an ingredient is missing
    /// - `CircularDependency` if a recipe contains itself at any depth
    /// - `Overflow` if a scaled weight or nutrient leaves the decimal range
    /// - `Repository` if the backend fails
    #[instrument(skip_all, fields(recipe_id = %recipe_id))]
    pub async fn resolve_nutrition(
        &self,
        recipe_id: &RecipeId,
    ) -> ResolveResult<NutritionTotals> {
        let mut path = TraversalPath::new();
        let totals = self.batch_nutrition(recipe_id, &mut path).await?;
        Ok(totals.rounded(self.config.nutrient_scale))
    }

    fn batch_nutrition<'a>(
        &'a self,
        recipe_id: &'a RecipeId,
        path: &'a mut TraversalPath,
    ) -> WalkFuture<'a, NutritionTotals> {
        Box::pin(async move {
            path.enter(recipe_id)?;
            let recipe = self.load_recipe(recipe_id).await?;
            debug!(
                recipe_id = %recipe.id,
                items = recipe.items.len(),
                depth = path.depth(),
                "aggregating nutrition"
            );

            let mut totals = NutritionTotals::zero();
            for item in &recipe.items {
                let contribution = match &item.source {
                    ItemSource::Ingredient(ingredient_id) => {
                        let ingredient = self.load_ingredient(ingredient_id).await?;
                        ingredient_totals(&ingredient, item.quantity)
                    }
                    ItemSource::ChildRecipe(child_id) => self
                        .batch_nutrition(child_id, path)
                        .await?
                        .checked_scaled(item.quantity),
                };
                totals = contribution
                    .and_then(|contribution| totals.checked_add(&contribution))
                    .ok_or_else(|| ResolveError::overflow(&recipe.id))?;
            }

            path.leave(recipe_id);
            Ok(totals)
        })
    }
}
