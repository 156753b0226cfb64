// ABOUTME: Sales menu model used to expand sold menu units into recipe batch requests
// ABOUTME: Lines without a recipe reference (bought-in goods) are carried but never expanded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MenuId, RecipeId};

const fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// One line of a sales menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesMenuLine {
    /// Display label for the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Recipe produced for this line, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<RecipeId>,
    /// Recipe batches needed per sold menu unit
    #[serde(default = "default_multiplier")]
    pub multiplier: Decimal,
}

impl SalesMenuLine {
    /// Line that consumes `multiplier` batches of a recipe per menu sold
    #[must_use]
    pub fn recipe(recipe_id: impl Into<RecipeId>, multiplier: Decimal) -> Self {
        Self {
            label: None,
            recipe_id: Some(recipe_id.into()),
            multiplier,
        }
    }

    /// Line with no recipe behind it
    #[must_use]
    pub fn bought_in(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            recipe_id: None,
            multiplier: Decimal::ONE,
        }
    }
}

/// A menu sold as a unit (set menu, combo, banquet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesMenu {
    /// Unique menu identifier
    pub id: MenuId,
    /// Menu name
    pub name: String,
    /// Menu lines
    #[serde(default)]
    pub items: Vec<SalesMenuLine>,
}

impl SalesMenu {
    /// Create an empty menu
    #[must_use]
    pub fn new(id: impl Into<MenuId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append a line
    #[must_use]
    pub fn with_line(mut self, line: SalesMenuLine) -> Self {
        self.items.push(line);
        self
    }

    /// `(recipe, batches)` pairs needed to sell `quantity` of this menu
    ///
    /// The batch count is `None` when `multiplier × quantity` leaves the decimal range.
    pub fn recipe_demands(
        &self,
        quantity: Decimal,
    ) -> impl Iterator<Item = (&RecipeId, Option<Decimal>)> {
        self.items.iter().filter_map(move |line| {
            line.recipe_id
                .as_ref()
                .map(|recipe_id| (recipe_id, line.multiplier.checked_mul(quantity)))
        })
    }
}
