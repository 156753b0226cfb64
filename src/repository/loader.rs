// ABOUTME: Loads recipe books from JSON or YAML documents on disk or in memory
// ABOUTME: Rejects duplicate identifiers so a document maps one-to-one onto the arena
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use brigade_core::errors::EntityKind;
use brigade_core::models::{Ingredient, Recipe, SalesMenu};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::memory::RecipeBook;

/// Errors raised while loading a recipe book
#[derive(Debug, Error)]
pub enum BookError {
    /// The file could not be read
    #[error("failed to read recipe book {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// JSON syntax or schema error
    #[error("invalid JSON recipe book: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML syntax or schema error
    #[error("invalid YAML recipe book: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is neither JSON nor YAML
    #[error("unsupported recipe book format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    /// Two records of the same kind share an id
    #[error("duplicate {kind} id in recipe book: {id}")]
    DuplicateId {
        /// Kind of the duplicated record
        kind: EntityKind,
        /// The repeated id
        id: String,
    },
}

/// Serialized form of a recipe book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBookDocument {
    /// Ingredient records
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Recipe records
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Sales menu records
    #[serde(default)]
    pub sales_menus: Vec<SalesMenu>,
}

fn ensure_unique<'a>(
    kind: EntityKind,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), BookError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BookError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

impl RecipeBook {
    /// Build a book from its serialized form
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateId` if two records of one kind share an id
    pub fn from_document(document: RecipeBookDocument) -> Result<Self, BookError> {
        ensure_unique(
            EntityKind::Ingredient,
            document.ingredients.iter().map(|i| i.id.as_str()),
        )?;
        ensure_unique(
            EntityKind::Recipe,
            document.recipes.iter().map(|r| r.id.as_str()),
        )?;
        ensure_unique(
            EntityKind::SalesMenu,
            document.sales_menus.iter().map(|m| m.id.as_str()),
        )?;

        let mut book = Self::new();
        for ingredient in document.ingredients {
            book.insert_ingredient(ingredient);
        }
        for recipe in document.recipes {
            book.insert_recipe(recipe);
        }
        for menu in document.sales_menus {
            book.insert_sales_menu(menu);
        }
        Ok(book)
    }

    /// Serialized form of this book, records ordered by id
    #[must_use]
    pub fn to_document(&self) -> RecipeBookDocument {
        RecipeBookDocument {
            ingredients: self.ingredients().cloned().collect(),
            recipes: self.recipes().cloned().collect(),
            sales_menus: self.sales_menus().cloned().collect(),
        }
    }

    /// Parse a JSON recipe book
    ///
    /// # Errors
    ///
    /// Returns an error on invalid JSON or duplicate ids
    pub fn from_json_str(source: &str) -> Result<Self, BookError> {
        Self::from_document(serde_json::from_str(source)?)
    }

    /// Parse a YAML recipe book
    ///
    /// # Errors
    ///
    /// Returns an error on invalid YAML or duplicate ids
    pub fn from_yaml_str(source: &str) -> Result<Self, BookError> {
        Self::from_document(serde_yaml::from_str(source)?)
    }

    /// Read a recipe book file, choosing the parser from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// fails to parse, or contains duplicate ids
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, BookError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => return Err(BookError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| BookError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let book = parse(&source)?;
        debug!(
            path = %path.display(),
            records = book.len(),
            "loaded recipe book"
        );
        Ok(book)
    }
}
