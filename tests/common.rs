// ABOUTME: Shared test utilities and recipe book fixtures for integration tests
// ABOUTME: Provides quiet logging setup and resolvers over small kitchen graphs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `brigade`
//!
//! Fixture books are built in code so each test states the numbers it relies on.

use std::env;
use std::sync::{Arc, Once};

use brigade::config::ResolverConfig;
use brigade::models::{Ingredient, Recipe, RecipeItem, SalesMenu, SalesMenuLine};
use brigade::repository::RecipeBook;
use brigade::resolver::RecipeResolver;
use rust_decimal_macros::dec;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Resolver over `book` with default rounding and cycle policy, ignoring the environment
pub fn resolver(book: RecipeBook) -> RecipeResolver<RecipeBook> {
    resolver_with_config(book, ResolverConfig::default())
}

/// Resolver over `book` with explicit configuration
pub fn resolver_with_config(
    book: RecipeBook,
    config: ResolverConfig,
) -> RecipeResolver<RecipeBook> {
    init_test_logging();
    RecipeResolver::with_config(Arc::new(book), config)
}

/// Two-level book with known answers
///
/// - `sauce` = 200 units of `tomato` @ 1.00 at yield 0.8, so one batch costs 250
/// - `pasta` = 100 units of `flour` @ 2.00 plus 0.5 batches of `sauce`, so 325
pub fn end_to_end_book() -> RecipeBook {
    RecipeBook::new()
        .with_ingredient(Ingredient::new("flour", "Flour", dec!(2.00), "g"))
        .with_ingredient(Ingredient::new("tomato", "Tomato", dec!(1.00), "g"))
        .with_recipe(
            Recipe::new("sauce", "Tomato sauce")
                .with_item(RecipeItem::ingredient("tomato", dec!(200)).with_yield_rate(dec!(0.8))),
        )
        .with_recipe(
            Recipe::new("pasta", "Pasta al pomodoro")
                .with_item(RecipeItem::ingredient("flour", dec!(100)))
                .with_item(RecipeItem::child_recipe("sauce", dec!(0.5))),
        )
}

/// Bakery book with nutrition tables
///
/// `brioche` = 0.5 kg flour, 50 g butter, 2 eggs (pieces, no gram equivalent)
pub fn bakery_book() -> RecipeBook {
    RecipeBook::new()
        .with_ingredient(
            Ingredient::new("flour", "Wheat flour", dec!(0.80), "kg")
                .with_nutrient("kcal", dec!(364))
                .with_nutrient("protein", dec!(10))
                .with_nutrient("fat", dec!(1))
                .with_nutrient("carbohydrates", dec!(76)),
        )
        .with_ingredient(
            Ingredient::new("butter", "Butter", dec!(0.01), "g")
                .with_nutrient("calories", dec!(717))
                .with_nutrient("protein", dec!(0.9))
                .with_nutrient("fat", dec!(81))
                .with_nutrient("carbs", dec!(0.1)),
        )
        .with_ingredient(
            Ingredient::new("egg", "Egg", dec!(0.25), "pcs").with_nutrient("calories", dec!(155)),
        )
        .with_ingredient(Ingredient::new("salt", "Salt", dec!(0.0005), "g"))
        .with_recipe(
            Recipe::new("brioche", "Brioche dough")
                .with_yield(dec!(10), "rolls")
                .with_labor_cost(dec!(4.50))
                .with_item(RecipeItem::ingredient("flour", dec!(0.5)).with_yield_rate(dec!(0.98)))
                .with_item(RecipeItem::ingredient("butter", dec!(50)))
                .with_item(RecipeItem::ingredient("egg", dec!(2))),
        )
        .with_recipe(
            Recipe::new("brioche-tray", "Brioche tray")
                .with_item(RecipeItem::child_recipe("brioche", dec!(2)))
                .with_item(RecipeItem::ingredient("salt", dec!(5))),
        )
}

/// Book where `a` contains `b` and `b` contains `a`
///
/// Each recipe also uses one ingredient so partial procurement is observable.
pub fn cyclic_book() -> RecipeBook {
    RecipeBook::new()
        .with_ingredient(Ingredient::new("x", "Ingredient X", dec!(1), "g"))
        .with_ingredient(Ingredient::new("y", "Ingredient Y", dec!(2), "g"))
        .with_recipe(
            Recipe::new("a", "Recipe A")
                .with_item(RecipeItem::ingredient("x", dec!(1)))
                .with_item(RecipeItem::child_recipe("b", dec!(1))),
        )
        .with_recipe(
            Recipe::new("b", "Recipe B")
                .with_item(RecipeItem::ingredient("y", dec!(2)))
                .with_item(RecipeItem::child_recipe("a", dec!(1))),
        )
}

/// Diamond: `top` holds `left` and `right`, which both hold one batch of `fond`
///
/// `fond` = 2 l of `stock` @ 1.00 with 10 kcal per 100 g, so `top` needs 4 l
/// (4000 g, 400 kcal, cost 4.00) because the shared child is counted per reference.
pub fn diamond_book() -> RecipeBook {
    RecipeBook::new()
        .with_ingredient(
            Ingredient::new("stock", "Stock base", dec!(1), "l").with_nutrient("kcal", dec!(10)),
        )
        .with_recipe(
            Recipe::new("fond", "Fond").with_item(RecipeItem::ingredient("stock", dec!(2))),
        )
        .with_recipe(
            Recipe::new("left", "Left").with_item(RecipeItem::child_recipe("fond", dec!(1))),
        )
        .with_recipe(
            Recipe::new("right", "Right").with_item(RecipeItem::child_recipe("fond", dec!(1))),
        )
        .with_recipe(
            Recipe::new("top", "Top")
                .with_item(RecipeItem::child_recipe("left", dec!(1)))
                .with_item(RecipeItem::child_recipe("right", dec!(1))),
        )
}

/// Chain `r0` -> `r1` -> ... -> `r10`, each holding 1000 batches of the next
///
/// The leaf `r10` uses 1 g of `salt` @ 1, so `r0` needs 1e30 g, beyond the
/// decimal range.
pub fn overflowing_chain_book() -> RecipeBook {
    let mut book =
        RecipeBook::new().with_ingredient(Ingredient::new("salt", "Salt", dec!(1), "g"));
    for level in 0..10 {
        book = book.with_recipe(
            Recipe::new(format!("r{level}"), format!("Level {level}"))
                .with_item(RecipeItem::child_recipe(format!("r{}", level + 1), dec!(1000))),
        );
    }
    book.with_recipe(
        Recipe::new("r10", "Level 10").with_item(RecipeItem::ingredient("salt", dec!(1))),
    )
}

/// `end_to_end_book` plus a lunch menu selling one pasta and a bought-in drink
pub fn menu_book() -> RecipeBook {
    end_to_end_book().with_sales_menu(
        SalesMenu::new("lunch", "Lunch set")
            .with_line(SalesMenuLine::recipe("pasta", dec!(1)))
            .with_line(SalesMenuLine::recipe("sauce", dec!(0.25)))
            .with_line(SalesMenuLine::bought_in("Sparkling water")),
    )
}
