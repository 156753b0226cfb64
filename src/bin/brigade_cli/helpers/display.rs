// ABOUTME: Output formatting helpers for brigade-cli
// ABOUTME: Renders costs, nutrition, shopping lists and audits as text tables or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use anyhow::{Context, Result};
use brigade::models::{NutritionTotals, RecipeId, ShoppingListEntry};
use brigade::repository::BookAudit;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde_json::json;

/// How command results are printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a batch or per-portion cost
pub fn display_cost(
    recipe_id: &RecipeId,
    cost: Decimal,
    per_portion: bool,
    format: OutputFormat,
) -> Result<()> {
    let basis = if per_portion { "portion" } else { "batch" };
    match format {
        OutputFormat::Json => print_json(&json!({
            "recipe_id": recipe_id,
            "basis": basis,
            "cost": cost,
        })),
        OutputFormat::Text => {
            println!("Cost of one {basis} of {recipe_id}: {cost}");
            Ok(())
        }
    }
}

/// Display nutrition totals for one batch
pub fn display_nutrition(
    recipe_id: &RecipeId,
    totals: &NutritionTotals,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "recipe_id": recipe_id,
            "nutrition": totals,
        })),
        OutputFormat::Text => {
            println!("Nutrition for one batch of {recipe_id}");
            println!("{}", "=".repeat(40));
            println!("   Weight:   {} g", totals.total_weight_grams);
            println!("   Calories: {} kcal", totals.calories);
            println!("   Protein:  {} g", totals.protein);
            println!("   Fat:      {} g", totals.fat);
            println!("   Carbs:    {} g", totals.carbs);
            Ok(())
        }
    }
}

/// Display a shopping list with a grand total
pub fn display_shopping_list(entries: &[ShoppingListEntry], format: OutputFormat) -> Result<()> {
    let total = entries
        .iter()
        .try_fold(Decimal::ZERO, |total, entry| {
            total.checked_add(entry.estimated_cost)
        })
        .context("shopping list total exceeds the decimal range")?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "entries": entries,
            "estimated_total": total,
        })),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("Shopping list is empty.");
                return Ok(());
            }

            println!(
                "{:<24} {:<28} {:>14} {:<6} {:>12}",
                "INGREDIENT", "NAME", "QUANTITY", "UNIT", "EST. COST"
            );
            println!("{}", "-".repeat(88));
            for entry in entries {
                println!(
                    "{:<24} {:<28} {:>14} {:<6} {:>12}",
                    entry.ingredient_id,
                    entry.name,
                    entry.quantity.normalize(),
                    entry.unit,
                    entry.estimated_cost
                );
            }
            println!("{}", "-".repeat(88));
            println!("{:>74} {:>12}", "TOTAL", total);
            Ok(())
        }
    }
}

/// Display the findings of a recipe book audit
pub fn display_audit(audit: &BookAudit, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&json!({
            "clean": audit.is_clean(),
            "cycles": audit.cycles,
            "missing_references": audit.missing_references,
        }));
    }

    if audit.is_clean() {
        println!("Recipe book is clean: no cycles, no missing references.");
        return Ok(());
    }

    if !audit.cycles.is_empty() {
        println!("Circular sub-recipes ({}):", audit.cycles.len());
        for cycle in &audit.cycles {
            let chain: Vec<&str> = cycle.iter().map(RecipeId::as_str).collect();
            let start = chain.first().copied().unwrap_or_default();
            println!("   {} -> {start}", chain.join(" -> "));
        }
    }

    if !audit.missing_references.is_empty() {
        println!("Missing references ({}):", audit.missing_references.len());
        for missing in &audit.missing_references {
            println!(
                "   {} {} refers to unknown {} {}",
                missing.referrer_kind, missing.referrer, missing.kind, missing.id
            );
        }
    }
    Ok(())
}
