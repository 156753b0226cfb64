// ABOUTME: Structural audit of a recipe book: recipe cycles and dangling references
// ABOUTME: Depth-first search with a path stack, reporting each cycle as the ids along it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::BTreeSet;

use brigade_core::errors::EntityKind;
use brigade_core::models::{ItemSource, RecipeId};
use serde::{Deserialize, Serialize};

use super::memory::RecipeBook;
use crate::resolver::path::TraversalPath;

/// A reference from one record to an id that does not exist in the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingReference {
    /// Kind of the record holding the reference
    pub referrer_kind: EntityKind,
    /// Id of the record holding the reference
    pub referrer: String,
    /// Kind of the missing record
    pub kind: EntityKind,
    /// Id that failed to resolve
    pub id: String,
}

/// Findings of [`RecipeBook::audit`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAudit {
    /// Each cycle as the recipe ids along it, starting at the first one reached
    pub cycles: Vec<Vec<RecipeId>>,
    /// References to recipes, ingredients or menus that are not in the book
    pub missing_references: Vec<MissingReference>,
}

impl BookAudit {
    /// True when the book has neither cycles nor dangling references
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty() && self.missing_references.is_empty()
    }
}

pub(super) fn audit_book(book: &RecipeBook) -> BookAudit {
    BookAudit {
        cycles: find_cycles(book),
        missing_references: find_missing_references(book),
    }
}

fn find_cycles(book: &RecipeBook) -> Vec<Vec<RecipeId>> {
    let mut cycles = Vec::new();
    let mut visited = BTreeSet::new();
    let mut path = TraversalPath::new();

    for recipe in book.recipes() {
        if !visited.contains(&recipe.id) {
            find_cycles_dfs(book, &recipe.id, &mut visited, &mut path, &mut cycles);
        }
    }
    cycles
}

fn find_cycles_dfs(
    book: &RecipeBook,
    node: &RecipeId,
    visited: &mut BTreeSet<RecipeId>,
    path: &mut TraversalPath,
    cycles: &mut Vec<Vec<RecipeId>>,
) {
    visited.insert(node.clone());
    if path.enter(node).is_err() {
        return;
    }

    if let Some(recipe) = book.recipe(node) {
        // a child listed on several items closes the same cycle once
        let children: BTreeSet<&RecipeId> = recipe.child_recipe_ids().collect();
        for child in children {
            if path.contains(child) {
                let cycle = path.cycle_from(child);
                if !cycles.contains(&cycle) {
                    cycles.push(cycle);
                }
            } else if !visited.contains(child) {
                find_cycles_dfs(book, child, visited, path, cycles);
            }
        }
    }

    path.leave(node);
}

fn find_missing_references(book: &RecipeBook) -> Vec<MissingReference> {
    let mut missing = Vec::new();

    for recipe in book.recipes() {
        for item in &recipe.items {
            let absent = match &item.source {
                ItemSource::Ingredient(id) => book
                    .ingredient(id)
                    .is_none()
                    .then(|| (EntityKind::Ingredient, id.to_string())),
                ItemSource::ChildRecipe(id) => book
                    .recipe(id)
                    .is_none()
                    .then(|| (EntityKind::Recipe, id.to_string())),
            };
            if let Some((kind, id)) = absent {
                missing.push(MissingReference {
                    referrer_kind: EntityKind::Recipe,
                    referrer: recipe.id.to_string(),
                    kind,
                    id,
                });
            }
        }
    }

    for menu in book.sales_menus() {
        for recipe_id in menu.items.iter().filter_map(|line| line.recipe_id.as_ref()) {
            if book.recipe(recipe_id).is_none() {
                missing.push(MissingReference {
                    referrer_kind: EntityKind::SalesMenu,
                    referrer: menu.id.to_string(),
                    kind: EntityKind::Recipe,
                    id: recipe_id.to_string(),
                });
            }
        }
    }

    missing
}
