// ABOUTME: Resolution commands for brigade-cli
// ABOUTME: Runs cost, nutrition and shopping-list resolution and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use anyhow::{bail, Result};
use brigade::models::{ProcurementRequest, RecipeId};
use brigade::repository::RecipeBook;
use brigade::resolver::RecipeResolver;
use rust_decimal::Decimal;
use tracing::info;

use crate::helpers::display::{display_cost, display_nutrition, display_shopping_list, OutputFormat};

/// Print the batch or per-portion cost of a recipe
pub async fn cost(
    resolver: &RecipeResolver<RecipeBook>,
    recipe: String,
    per_portion: bool,
    format: OutputFormat,
) -> Result<()> {
    let recipe_id = RecipeId::new(recipe);
    let cost = if per_portion {
        resolver.resolve_cost_per_portion(&recipe_id).await?
    } else {
        resolver.resolve_cost(&recipe_id).await?
    };

    display_cost(&recipe_id, cost, per_portion, format)
}

/// Print the nutrition totals of one batch
pub async fn nutrition(
    resolver: &RecipeResolver<RecipeBook>,
    recipe: String,
    format: OutputFormat,
) -> Result<()> {
    let recipe_id = RecipeId::new(recipe);
    let totals = resolver.resolve_nutrition(&recipe_id).await?;

    display_nutrition(&recipe_id, &totals, format)
}

/// Print the aggregated shopping list for recipe batches and menu sales
pub async fn shopping_list(
    resolver: &RecipeResolver<RecipeBook>,
    recipes: Vec<(String, Decimal)>,
    menus: Vec<(String, Decimal)>,
    format: OutputFormat,
) -> Result<()> {
    let requests: Vec<ProcurementRequest> = recipes
        .into_iter()
        .map(|(id, batches)| ProcurementRequest::recipe(id, batches))
        .chain(
            menus
                .into_iter()
                .map(|(id, quantity)| ProcurementRequest::sales_menu(id, quantity)),
        )
        .collect();

    if requests.is_empty() {
        bail!("nothing to buy for: pass at least one --recipe id=batches or --menu id=quantity");
    }

    info!(requests = requests.len(), "generating shopping list");
    let entries = resolver.generate_shopping_list(&requests).await?;

    display_shopping_list(&entries, format)
}
