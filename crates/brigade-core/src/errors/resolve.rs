// ABOUTME: Resolver and repository error enums propagated through recursive graph walks
// ABOUTME: Maps each variant onto an ErrorCode for consistent transport responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ErrorCode;
use crate::models::{IngredientId, MenuId, RecipeId};

/// Kind of entity a lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A recipe (root or sub-recipe)
    Recipe,
    /// A raw ingredient
    Ingredient,
    /// A sales menu used for procurement expansion
    SalesMenu,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recipe => "recipe",
            Self::Ingredient => "ingredient",
            Self::SalesMenu => "sales menu",
        };
        f.write_str(name)
    }
}

/// Failure reported by a repository backend
///
/// Absence of a record is not an error at this level: repositories return
/// `Ok(None)` and the resolver decides that it means `NotFound`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Backend could not be reached or refused the query
    #[error("repository backend unavailable: {0}")]
    Unavailable(String),
    /// A stored record could not be decoded into the data model
    #[error("corrupt {kind} record {id}: {reason}")]
    Corrupt {
        /// Kind of the record
        kind: EntityKind,
        /// Identifier of the record
        id: String,
        /// Decoder message
        reason: String,
    },
}

/// Errors surfaced by cost, nutrition and procurement resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A referenced recipe, ingredient or menu identifier does not resolve
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        kind: EntityKind,
        /// Identifier that failed to resolve
        id: String,
    },
    /// The recipe is already on the active traversal path
    #[error("circular dependency detected at recipe {recipe_id}")]
    CircularDependency {
        /// Recipe that closed the cycle
        recipe_id: RecipeId,
    },
    /// An item in the recipe has a yield rate of exactly zero
    #[error("recipe {recipe_id} contains an item with a zero yield rate")]
    InvalidYieldRate {
        /// Recipe owning the offending item
        recipe_id: RecipeId,
    },
    /// The recipe yields zero units per batch
    #[error("recipe {recipe_id} has a zero yield quantity")]
    InvalidYieldQuantity {
        /// Recipe with the zero yield
        recipe_id: RecipeId,
    },
    /// Scaling a quantity or cost exceeded the decimal range
    #[error("arithmetic overflow while resolving recipe {recipe_id}")]
    Overflow {
        /// Recipe whose item produced the out-of-range value
        recipe_id: RecipeId,
    },
    /// The repository collaborator failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ResolveError {
    /// Create a "recipe not found" error
    #[must_use]
    pub fn recipe_not_found(id: &RecipeId) -> Self {
        Self::NotFound {
            kind: EntityKind::Recipe,
            id: id.to_string(),
        }
    }

    /// Create an "ingredient not found" error
    #[must_use]
    pub fn ingredient_not_found(id: &IngredientId) -> Self {
        Self::NotFound {
            kind: EntityKind::Ingredient,
            id: id.to_string(),
        }
    }

    /// Create a "sales menu not found" error
    #[must_use]
    pub fn menu_not_found(id: &MenuId) -> Self {
        Self::NotFound {
            kind: EntityKind::SalesMenu,
            id: id.to_string(),
        }
    }

    /// Create an overflow error attributed to `recipe_id`
    #[must_use]
    pub fn overflow(recipe_id: &RecipeId) -> Self {
        Self::Overflow {
            recipe_id: recipe_id.clone(),
        }
    }

    /// Transport-facing classification of this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::CircularDependency { .. } => ErrorCode::CircularDependency,
            Self::InvalidYieldRate { .. } => ErrorCode::InvalidYieldRate,
            Self::InvalidYieldQuantity { .. } => ErrorCode::InvalidYieldQuantity,
            Self::Overflow { .. } => ErrorCode::ArithmeticOverflow,
            Self::Repository(_) => ErrorCode::StorageError,
        }
    }

    /// HTTP status the transport layer should answer with
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code().http_status()
    }
}

/// Result alias for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;
