// ABOUTME: Criterion benchmarks for recipe graph resolution
// ABOUTME: Measures cost, nutrition and procurement over deep chains and wide recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

//! Criterion benchmarks for the recipe resolvers.
//!
//! Deep graphs stress the recursive walk and path bookkeeping; wide graphs
//! stress per-item repository lookups and ledger accumulation.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use std::sync::Arc;

use brigade::config::ResolverConfig;
use brigade::models::{Ingredient, ProcurementRequest, Recipe, RecipeId, RecipeItem};
use brigade::repository::RecipeBook;
use brigade::resolver::RecipeResolver;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::runtime::Runtime;

const UNITS: [&str; 4] = ["g", "kg", "ml", "pcs"];

fn ingredient(index: usize) -> Ingredient {
    Ingredient::new(
        format!("ing-{index}"),
        format!("Ingredient {index}"),
        Decimal::from(index % 17 + 1) / dec!(100),
        UNITS[index % UNITS.len()],
    )
    .with_nutrient("calories", Decimal::from(index % 400))
    .with_nutrient("protein", Decimal::from(index % 30))
}

/// `level-0` contains `level-1` contains ... `level-{depth-1}`, each with two ingredients
fn deep_book(depth: usize) -> RecipeBook {
    let mut book = RecipeBook::new();
    for level in 0..depth {
        book.insert_ingredient(ingredient(level));
        let mut recipe = Recipe::new(format!("level-{level}"), format!("Level {level}"))
            .with_item(
                RecipeItem::ingredient(format!("ing-{level}"), dec!(120))
                    .with_yield_rate(dec!(0.9)),
            )
            .with_item(RecipeItem::ingredient("ing-0", dec!(5)));
        if level + 1 < depth {
            recipe = recipe.with_item(RecipeItem::child_recipe(
                format!("level-{}", level + 1),
                dec!(0.5),
            ));
        }
        book.insert_recipe(recipe);
    }
    book
}

/// One recipe with `width` distinct ingredient items
fn wide_book(width: usize) -> RecipeBook {
    let mut root = Recipe::new("root", "Wide recipe");
    let mut book = RecipeBook::new();
    for index in 0..width {
        book.insert_ingredient(ingredient(index));
        root = root.with_item(
            RecipeItem::ingredient(format!("ing-{index}"), dec!(250))
                .with_yield_rate(dec!(0.85)),
        );
    }
    book.with_recipe(root)
}

fn resolver(book: RecipeBook) -> RecipeResolver<RecipeBook> {
    RecipeResolver::with_config(Arc::new(book), ResolverConfig::default())
}

#[allow(clippy::cast_possible_truncation)]
fn bench_deep_graphs(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("resolve_deep");
    let root = RecipeId::new("level-0");

    for depth in [8_usize, 32, 128] {
        let resolver = resolver(deep_book(depth));
        group.throughput(Throughput::Elements(depth as u64));

        group.bench_with_input(BenchmarkId::new("cost", depth), &root, |b, root| {
            b.iter(|| rt.block_on(async { resolver.resolve_cost(black_box(root)).await }));
        });
        group.bench_with_input(BenchmarkId::new("nutrition", depth), &root, |b, root| {
            b.iter(|| rt.block_on(async { resolver.resolve_nutrition(black_box(root)).await }));
        });

        let requests = vec![ProcurementRequest::recipe("level-0", dec!(3))];
        group.bench_with_input(
            BenchmarkId::new("shopping_list", depth),
            &requests,
            |b, requests| {
                b.iter(|| {
                    rt.block_on(async {
                        resolver
                            .generate_shopping_list(black_box(requests))
                            .await
                    })
                });
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_wide_graphs(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("resolve_wide");
    let root = RecipeId::new("root");

    for width in [10_usize, 100, 1000] {
        let resolver = resolver(wide_book(width));
        group.throughput(Throughput::Elements(width as u64));

        group.bench_with_input(BenchmarkId::new("cost", width), &root, |b, root| {
            b.iter(|| rt.block_on(async { resolver.resolve_cost(black_box(root)).await }));
        });

        let requests = vec![ProcurementRequest::recipe("root", dec!(12))];
        group.bench_with_input(
            BenchmarkId::new("shopping_list", width),
            &requests,
            |b, requests| {
                b.iter(|| {
                    rt.block_on(async {
                        resolver
                            .generate_shopping_list(black_box(requests))
                            .await
                    })
                });
            },
        );
    }

    group.finish();
}

fn bench_book_audit(c: &mut Criterion) {
    let book = deep_book(128);
    c.bench_function("audit_deep_128", |b| b.iter(|| black_box(&book).audit()));
}

criterion_group!(benches, bench_deep_graphs, bench_wide_graphs, bench_book_audit);
criterion_main!(benches);
