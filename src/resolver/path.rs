// ABOUTME: Traversal path for cycle detection during recursive recipe walks
// ABOUTME: Tracks the chain of recipes currently being expanded, not every recipe ever seen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::HashSet;

use brigade_core::errors::{ResolveError, ResolveResult};
use brigade_core::models::RecipeId;

/// Recipes on the active descent, root first
///
/// A recipe reached twice through sibling branches (a diamond) is not a cycle;
/// only a recipe that is already being expanded further up the chain is.
#[derive(Debug, Default)]
pub struct TraversalPath {
    stack: Vec<RecipeId>,
    members: HashSet<RecipeId>,
}

impl TraversalPath {
    /// Empty path for a new top-level resolution
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `recipe_id`, failing if it is already on the path
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::CircularDependency` when the recipe closes a cycle
    pub fn enter(&mut self, recipe_id: &RecipeId) -> ResolveResult<()> {
        if !self.members.insert(recipe_id.clone()) {
            return Err(ResolveError::CircularDependency {
                recipe_id: recipe_id.clone(),
            });
        }
        self.stack.push(recipe_id.clone());
        Ok(())
    }

    /// Pop `recipe_id` after its subtree is done
    pub fn leave(&mut self, recipe_id: &RecipeId) {
        if self.stack.last() == Some(recipe_id) {
            self.stack.pop();
        } else if let Some(pos) = self.stack.iter().rposition(|id| id == recipe_id) {
            self.stack.remove(pos);
        }
        self.members.remove(recipe_id);
    }

    /// Whether `recipe_id` is currently being expanded
    #[must_use]
    pub fn contains(&self, recipe_id: &RecipeId) -> bool {
        self.members.contains(recipe_id)
    }

    /// Number of recipes on the path
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether no recipe is being expanded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The segment of the path from `recipe_id` to the current recipe
    ///
    /// Empty when `recipe_id` is not on the path.
    #[must_use]
    pub fn cycle_from(&self, recipe_id: &RecipeId) -> Vec<RecipeId> {
        self.stack
            .iter()
            .position(|id| id == recipe_id)
            .map(|start| self.stack[start..].to_vec())
            .unwrap_or_default()
    }
}
