// ABOUTME: Procurement aggregation: raw-ingredient shopping lists for batches and menu sales
// ABOUTME: Accumulates gross quantities and estimated cost per ingredient across all requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::BTreeMap;

use brigade_core::errors::{ResolveError, ResolveResult};
use brigade_core::models::{
    Ingredient, IngredientId, ItemSource, ProcurementRequest, RecipeId, ShoppingListEntry,
};
use brigade_core::numeric::round_to;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use super::path::TraversalPath;
use super::{RecipeResolver, WalkFuture};
use crate::config::CyclePolicy;
use crate::repository::RecipeRepository;

/// Yield rate for purchasing: absent or zero both mean no loss
fn procurement_yield_rate(yield_rate: Option<Decimal>) -> Decimal {
    match yield_rate {
        Some(rate) if !rate.is_zero() => rate,
        _ => Decimal::ONE,
    }
}

#[derive(Debug)]
struct LedgerLine {
    name: String,
    unit: String,
    quantity: Decimal,
    cost: Decimal,
}

/// Running totals per ingredient, shared by every request in one call
#[derive(Debug, Default)]
struct ShoppingLedger {
    lines: BTreeMap<IngredientId, LedgerLine>,
}

impl ShoppingLedger {
    /// Adds a gross quantity and its cost; `None` if a running total overflows
    fn add(&mut self, ingredient: &Ingredient, gross_quantity: Decimal) -> Option<()> {
        let cost = gross_quantity.checked_mul(ingredient.price_per_unit)?;
        let line = self
            .lines
            .entry(ingredient.id.clone())
            .or_insert_with(|| LedgerLine {
                name: ingredient.name.clone(),
                unit: ingredient.unit.clone(),
                quantity: Decimal::ZERO,
                cost: Decimal::ZERO,
            });
        let quantity = line.quantity.checked_add(gross_quantity)?;
        let total_cost = line.cost.checked_add(cost)?;
        line.quantity = quantity;
        line.cost = total_cost;
        Some(())
    }

    fn into_entries(self, money_scale: u32) -> Vec<ShoppingListEntry> {
        self.lines
            .into_iter()
            .map(|(ingredient_id, line)| ShoppingListEntry {
                ingredient_id,
                name: line.name,
                quantity: line.quantity,
                unit: line.unit,
                estimated_cost: round_to(line.cost, money_scale),
            })
            .collect()
    }
}

impl<R: RecipeRepository + ?Sized> RecipeResolver<R> {
    /// Aggregate raw ingredients needed for every request, sorted by ingredient id
    ///
    /// Quantities are gross (net divided by the item yield rate) and kept at
    /// full precision; estimated costs are rounded per entry. A sales menu
    /// expands into one recipe request per line that names a recipe.
    ///
    /// With the default `skip` cycle policy a sub-recipe that is already being
    /// expanded is logged and its branch dropped, keeping everything gathered
    /// so far. The `fail` policy turns it into `CircularDependency`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if a recipe, ingredient or sales menu is missing
    /// - `CircularDependency` under the `fail` cycle policy
    /// - `Overflow` if a scaled quantity or running total leaves the decimal range
    /// - `Repository` if the backend fails
    #[instrument(skip_all, fields(requests = requests.len()))]
    pub async fn generate_shopping_list(
        &self,
        requests: &[ProcurementRequest],
    ) -> ResolveResult<Vec<ShoppingListEntry>> {
        let mut ledger = ShoppingLedger::default();

        for request in requests {
            match request {
                ProcurementRequest::Recipe { recipe_id, batches } => {
                    self.accumulate_request(recipe_id, *batches, &mut ledger)
                        .await?;
                }
                ProcurementRequest::SalesMenu { menu_id, quantity } => {
                    let menu = self.load_menu(menu_id).await?;
                    for (recipe_id, multiplier) in menu.recipe_demands(*quantity) {
                        let multiplier =
                            multiplier.ok_or_else(|| ResolveError::overflow(recipe_id))?;
                        self.accumulate_request(recipe_id, multiplier, &mut ledger)
                            .await?;
                    }
                }
            }
        }

        let entries = ledger.into_entries(self.config.money_scale);
        info!(
            requests = requests.len(),
            ingredients = entries.len(),
            "shopping list generated"
        );
        Ok(entries)
    }

    async fn accumulate_request(
        &self,
        recipe_id: &RecipeId,
        multiplier: Decimal,
        ledger: &mut ShoppingLedger,
    ) -> ResolveResult<()> {
        let mut path = TraversalPath::new();
        self.accumulate(recipe_id, multiplier, &mut path, ledger)
            .await
    }

    fn accumulate<'a>(
        &'a self,
        recipe_id: &'a RecipeId,
        multiplier: Decimal,
        path: &'a mut TraversalPath,
        ledger: &'a mut ShoppingLedger,
    ) -> WalkFuture<'a, ()> {
        Box::pin(async move {
            if let Err(err) = path.enter(recipe_id) {
                match self.config.procurement_cycle_policy {
                    CyclePolicy::Fail => return Err(err),
                    CyclePolicy::Skip => {
                        warn!(
                            recipe_id = %recipe_id,
                            cycle = ?path.cycle_from(recipe_id),
                            "circular sub-recipe skipped in shopping list"
                        );
                        return Ok(());
                    }
                }
            }

            let recipe = self.load_recipe(recipe_id).await?;
            debug!(
                recipe_id = %recipe.id,
                multiplier = %multiplier,
                depth = path.depth(),
                "expanding recipe for procurement"
            );

            for item in &recipe.items {
                let net = item
                    .quantity
                    .checked_mul(multiplier)
                    .ok_or_else(|| ResolveError::overflow(&recipe.id))?;
                match &item.source {
                    ItemSource::Ingredient(ingredient_id) => {
                        let ingredient = self.load_ingredient(ingredient_id).await?;
                        net.checked_div(procurement_yield_rate(item.yield_rate))
                            .and_then(|gross| ledger.add(&ingredient, gross))
                            .ok_or_else(|| ResolveError::overflow(&recipe.id))?;
                    }
                    ItemSource::ChildRecipe(child_id) => {
                        self.accumulate(child_id, net, path, ledger).await?;
                    }
                }
            }

            path.leave(recipe_id);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_and_missing_yield_mean_no_loss() {
        assert_eq!(procurement_yield_rate(None), Decimal::ONE);
        assert_eq!(procurement_yield_rate(Some(Decimal::ZERO)), Decimal::ONE);
        assert_eq!(procurement_yield_rate(Some(dec!(0.8))), dec!(0.8));
    }

    #[test]
    fn test_ledger_merges_and_rounds_cost_only() {
        let oil = Ingredient::new("oil", "Olive oil", dec!(0.0123), "ml");
        let mut ledger = ShoppingLedger::default();
        assert!(ledger.add(&oil, dec!(100)).is_some());
        assert!(ledger.add(&oil, dec!(33.333)).is_some());

        let entries = ledger.into_entries(2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, dec!(133.333));
        assert_eq!(entries[0].estimated_cost, dec!(1.64));
    }

    #[test]
    fn test_ledger_rejects_overflowing_totals() {
        let gold = Ingredient::new("gold", "Gold leaf", dec!(1000), "g");
        let mut ledger = ShoppingLedger::default();
        assert!(ledger.add(&gold, Decimal::MAX).is_none());
        assert!(ledger.add(&gold, dec!(1)).is_some());

        let entries = ledger.into_entries(2);
        assert_eq!(entries[0].quantity, dec!(1));
        assert_eq!(entries[0].estimated_cost, dec!(1000.00));
    }
}
