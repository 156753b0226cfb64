// ABOUTME: Integration tests for shopping-list generation
// ABOUTME: Covers batch scaling, menu expansion, yield handling, cycle policy and ordering
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

mod common;

use brigade::config::{CyclePolicy, ResolverConfig};
use brigade::errors::{EntityKind, ErrorCode, ResolveError};
use brigade::models::{
    Ingredient, ProcurementRequest, Recipe, RecipeItem, SalesMenu, SalesMenuLine,
    ShoppingListEntry,
};
use brigade::repository::RecipeBook;
use common::{
    cyclic_book, diamond_book, end_to_end_book, menu_book, overflowing_chain_book, resolver,
    resolver_with_config,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn entry<'a>(entries: &'a [ShoppingListEntry], ingredient_id: &str) -> &'a ShoppingListEntry {
    entries
        .iter()
        .find(|e| e.ingredient_id.as_str() == ingredient_id)
        .unwrap_or_else(|| panic!("no shopping list entry for {ingredient_id}"))
}

#[tokio::test]
async fn test_end_to_end_two_batches() {
    let entries = resolver(end_to_end_book())
        .generate_shopping_list(&[ProcurementRequest::recipe("pasta", dec!(2))])
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    let flour = entry(&entries, "flour");
    assert_eq!(flour.quantity, dec!(200));
    assert_eq!(flour.estimated_cost, dec!(400.00));
    assert_eq!(flour.name, "Flour");
    assert_eq!(flour.unit, "g");

    // one sauce batch: 200 net at yield 0.8
    let tomato = entry(&entries, "tomato");
    assert_eq!(tomato.quantity, dec!(250));
    assert_eq!(tomato.estimated_cost, dec!(250.00));
}

#[tokio::test]
async fn test_output_sorted_by_ingredient_id() {
    let entries = resolver(end_to_end_book())
        .generate_shopping_list(&[ProcurementRequest::recipe("pasta", dec!(1))])
        .await
        .unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.ingredient_id.as_str()).collect();
    assert_eq!(ids, vec!["flour", "tomato"]);
}

#[tokio::test]
async fn test_requests_share_one_ledger() {
    let entries = resolver(end_to_end_book())
        .generate_shopping_list(&[
            ProcurementRequest::recipe("pasta", dec!(1)),
            ProcurementRequest::recipe("sauce", dec!(1)),
        ])
        .await
        .unwrap();

    // 125 via half a batch inside pasta, 250 from the direct request
    assert_eq!(entry(&entries, "tomato").quantity, dec!(375));
    assert_eq!(entry(&entries, "tomato").estimated_cost, dec!(375.00));
}

#[tokio::test]
async fn test_menu_expands_recipe_lines_and_ignores_bought_in() {
    let entries = resolver(menu_book())
        .generate_shopping_list(&[ProcurementRequest::sales_menu("lunch", dec!(4))])
        .await
        .unwrap();

    // 4 pasta: 400 flour and 2 sauce batches; 0.25 x 4 = 1 extra sauce batch
    assert_eq!(entry(&entries, "flour").quantity, dec!(400));
    assert_eq!(entry(&entries, "tomato").quantity, dec!(750));
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_zero_yield_rate_means_no_loss() {
    let book = RecipeBook::new()
        .with_ingredient(Ingredient::new("leek", "Leek", dec!(0.5), "pcs"))
        .with_recipe(
            Recipe::new("vichyssoise", "Vichyssoise")
                .with_item(RecipeItem::ingredient("leek", dec!(6)).with_yield_rate(Decimal::ZERO)),
        );

    let entries = resolver(book)
        .generate_shopping_list(&[ProcurementRequest::recipe("vichyssoise", dec!(2))])
        .await
        .unwrap();

    assert_eq!(entries[0].quantity, dec!(12));
    assert_eq!(entries[0].estimated_cost, dec!(6.00));
}

#[tokio::test]
async fn test_quantity_keeps_precision_while_cost_is_rounded() {
    let book = RecipeBook::new()
        .with_ingredient(Ingredient::new("truffle", "Truffle", dec!(0.333), "g"))
        .with_recipe(
            Recipe::new("shavings", "Truffle shavings")
                .with_item(RecipeItem::ingredient("truffle", dec!(1)).with_yield_rate(dec!(0.3))),
        );

    let entries = resolver(book)
        .generate_shopping_list(&[ProcurementRequest::recipe("shavings", dec!(1))])
        .await
        .unwrap();

    assert_eq!(entries[0].quantity, dec!(1) / dec!(0.3));
    assert_eq!(entries[0].estimated_cost, dec!(1.11));
}

#[tokio::test]
async fn test_cycle_is_skipped_keeping_partial_totals() {
    let entries = resolver(cyclic_book())
        .generate_shopping_list(&[ProcurementRequest::recipe("a", dec!(1))])
        .await
        .unwrap();

    // a -> x, a -> b -> y, b -> a is dropped
    assert_eq!(entry(&entries, "x").quantity, dec!(1));
    assert_eq!(entry(&entries, "y").quantity, dec!(2));
    assert_eq!(entry(&entries, "y").estimated_cost, dec!(4.00));
}

#[tokio::test]
async fn test_cycle_policy_fail_rejects_list() {
    let config = ResolverConfig::default().with_procurement_cycle_policy(CyclePolicy::Fail);

    let err = resolver_with_config(cyclic_book(), config)
        .generate_shopping_list(&[ProcurementRequest::recipe("a", dec!(1))])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::CircularDependency { ref recipe_id } if recipe_id.as_str() == "a"
    ));
}

#[tokio::test]
async fn test_each_request_starts_a_fresh_path() {
    let entries = resolver(end_to_end_book())
        .generate_shopping_list(&[
            ProcurementRequest::recipe("sauce", dec!(1)),
            ProcurementRequest::recipe("sauce", dec!(1)),
        ])
        .await
        .unwrap();

    assert_eq!(entry(&entries, "tomato").quantity, dec!(500));
}

#[tokio::test]
async fn test_procurement_diamond_counts_shared_child_twice() {
    let entries = resolver(diamond_book())
        .generate_shopping_list(&[ProcurementRequest::recipe("top", dec!(1))])
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    let stock = entry(&entries, "stock");
    // fond reached once through left and once through right
    assert_eq!(stock.quantity, dec!(4));
    assert_eq!(stock.estimated_cost, dec!(4.00));
}

#[tokio::test]
async fn test_deep_batch_chain_overflow_is_an_error() {
    let resolver = resolver(overflowing_chain_book());

    let err = resolver
        .generate_shopping_list(&[ProcurementRequest::recipe("r0", dec!(1))])
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Overflow { .. }));
    assert_eq!(err.code(), ErrorCode::ArithmeticOverflow);
    assert_eq!(err.http_status(), 400);

    let entries = resolver
        .generate_shopping_list(&[ProcurementRequest::recipe("r4", dec!(1))])
        .await
        .unwrap();
    assert_eq!(entry(&entries, "salt").quantity, dec!(1000000000000000000));
}

#[tokio::test]
async fn test_overflow_is_fatal_under_skip_policy() {
    let config = ResolverConfig {
        procurement_cycle_policy: CyclePolicy::Skip,
        ..ResolverConfig::default()
    };

    let err = resolver_with_config(overflowing_chain_book(), config)
        .generate_shopping_list(&[ProcurementRequest::recipe("r0", dec!(1))])
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Overflow { .. }));
}

#[tokio::test]
async fn test_menu_quantity_overflow_names_the_recipe() {
    let book = end_to_end_book().with_sales_menu(
        SalesMenu::new("banquet", "Endless banquet")
            .with_line(SalesMenuLine::recipe("sauce", Decimal::MAX)),
    );

    let err = resolver(book)
        .generate_shopping_list(&[ProcurementRequest::sales_menu("banquet", dec!(2))])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::Overflow { ref recipe_id } if recipe_id.as_str() == "sauce"
    ));
}

#[tokio::test]
async fn test_missing_menu_is_not_found() {
    let err = resolver(menu_book())
        .generate_shopping_list(&[ProcurementRequest::sales_menu("brunch", dec!(1))])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::NotFound { kind: EntityKind::SalesMenu, ref id } if id == "brunch"
    ));
}

#[tokio::test]
async fn test_missing_ingredient_is_fatal() {
    let book = end_to_end_book().with_recipe(
        Recipe::new("sauce", "Sauce").with_item(RecipeItem::ingredient("basil", dec!(5))),
    );

    let err = resolver(book)
        .generate_shopping_list(&[ProcurementRequest::recipe("pasta", dec!(1))])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::NotFound { kind: EntityKind::Ingredient, .. }
    ));
}

#[tokio::test]
async fn test_no_requests_gives_empty_list() {
    let entries = resolver(end_to_end_book())
        .generate_shopping_list(&[])
        .await
        .unwrap();

    assert!(entries.is_empty());
}
