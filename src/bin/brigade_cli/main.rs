// ABOUTME: Brigade CLI - cost, nutrition and procurement queries over a recipe book file
// ABOUTME: Also audits a book for circular sub-recipes and dangling references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems
//!
//! Usage:
//! ```bash
//! # Cost of one batch, and per portion including labor
//! brigade-cli --book kitchen.yaml cost bechamel
//! brigade-cli --book kitchen.yaml cost lasagna --per-portion
//!
//! # Weight and macro-nutrients of one batch
//! brigade-cli --book kitchen.yaml nutrition lasagna
//!
//! # Shopping list for 3 batches of stock plus 40 sold lunch menus, as JSON
//! brigade-cli --book kitchen.yaml --format json shopping-list --recipe stock=3 --menu lunch=40
//!
//! # Check the book for cycles and missing references
//! brigade-cli --book kitchen.yaml audit
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use brigade::constants::service_names;
use brigade::logging::LoggingConfig;
use brigade::repository::RecipeBook;
use brigade::resolver::RecipeResolver;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use helpers::display::OutputFormat;
use helpers::requests::parse_quantity_pair;

#[derive(Parser)]
#[command(
    name = "brigade-cli",
    about = "Brigade recipe composition resolver",
    long_about = "Resolve batch cost, nutrition and shopping lists from a JSON or YAML recipe book."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe book file (.json, .yaml or .yml)
    #[arg(long, short = 'b', global = true, env = "BRIGADE_BOOK", default_value = "recipes.yaml")]
    book: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Cost of one batch of a recipe (labor excluded)
    Cost {
        /// Recipe id
        recipe: String,

        /// Cost of one portion instead, labor included
        #[arg(long)]
        per_portion: bool,
    },

    /// Weight and macro-nutrients of one batch of a recipe
    Nutrition {
        /// Recipe id
        recipe: String,
    },

    /// Aggregated raw-ingredient shopping list
    ShoppingList {
        /// Recipe batches as `id=batches` (repeatable)
        #[arg(long = "recipe", value_parser = parse_quantity_pair)]
        recipes: Vec<(String, Decimal)>,

        /// Sold menu units as `id=quantity` (repeatable)
        #[arg(long = "menu", value_parser = parse_quantity_pair)]
        menus: Vec<(String, Decimal)>,
    },

    /// Report circular sub-recipes and dangling references
    Audit,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env().with_service_name(service_names::BRIGADE_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let book = RecipeBook::from_path(&cli.book)
        .await
        .with_context(|| format!("loading recipe book {}", cli.book.display()))?;
    info!(book = %cli.book.display(), records = book.len(), "recipe book loaded");

    let resolver = RecipeResolver::new(Arc::new(book));
    match cli.command {
        Command::Cost {
            recipe,
            per_portion,
        } => commands::resolve::cost(&resolver, recipe, per_portion, cli.format).await?,
        Command::Nutrition { recipe } => {
            commands::resolve::nutrition(&resolver, recipe, cli.format).await?;
        }
        Command::ShoppingList { recipes, menus } => {
            commands::resolve::shopping_list(&resolver, recipes, menus, cli.format).await?;
        }
        Command::Audit => return commands::audit::run(resolver.repository(), cli.format),
    }

    Ok(ExitCode::SUCCESS)
}
