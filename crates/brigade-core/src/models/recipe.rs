// ABOUTME: Recipe node and its items, each consuming an ingredient or batches of a sub-recipe
// ABOUTME: ItemSource is a tagged enum so an item always has exactly one source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{IngredientId, RecipeId};

/// What a recipe item consumes
///
/// Serialized externally tagged: `{"ingredient": "flour"}` or
/// `{"child_recipe": "pastry-cream"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    /// Net quantity of a raw ingredient, in the ingredient's own unit
    Ingredient(IngredientId),
    /// Number of batches of another recipe
    ChildRecipe(RecipeId),
}

/// One line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Ingredient or sub-recipe consumed by this line
    pub source: ItemSource,
    /// Net ingredient quantity, or batch count for a sub-recipe
    pub quantity: Decimal,
    /// Fraction surviving preparation loss; `None` means no loss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_rate: Option<Decimal>,
}

impl RecipeItem {
    /// Item consuming a net quantity of an ingredient
    #[must_use]
    pub fn ingredient(id: impl Into<IngredientId>, quantity: Decimal) -> Self {
        Self {
            source: ItemSource::Ingredient(id.into()),
            quantity,
            yield_rate: None,
        }
    }

    /// Item consuming a number of batches of a sub-recipe
    #[must_use]
    pub fn child_recipe(id: impl Into<RecipeId>, batches: Decimal) -> Self {
        Self {
            source: ItemSource::ChildRecipe(id.into()),
            quantity: batches,
            yield_rate: None,
        }
    }

    /// Set the preparation yield rate
    #[must_use]
    pub const fn with_yield_rate(mut self, yield_rate: Decimal) -> Self {
        self.yield_rate = Some(yield_rate);
        self
    }

    /// Sub-recipe referenced by this item, if any
    #[must_use]
    pub const fn child_recipe_id(&self) -> Option<&RecipeId> {
        match &self.source {
            ItemSource::ChildRecipe(id) => Some(id),
            ItemSource::Ingredient(_) => None,
        }
    }
}

const fn default_yield_quantity() -> Decimal {
    Decimal::ONE
}

fn default_yield_unit() -> String {
    "batch".to_owned()
}

/// A recipe: internal or root node of the composition graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: RecipeId,
    /// Recipe name
    pub name: String,
    /// Amount produced by one batch
    #[serde(default = "default_yield_quantity")]
    pub yield_quantity: Decimal,
    /// Unit of `yield_quantity` (portions, kg, ...)
    #[serde(default = "default_yield_unit")]
    pub yield_unit: String,
    /// Labor cost per batch
    #[serde(default)]
    pub labor_cost: Decimal,
    /// Ordered recipe lines
    #[serde(default)]
    pub items: Vec<RecipeItem>,
}

impl Recipe {
    /// Create an empty recipe yielding one batch
    #[must_use]
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            yield_quantity: default_yield_quantity(),
            yield_unit: default_yield_unit(),
            labor_cost: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    /// Set what one batch yields
    #[must_use]
    pub fn with_yield(mut self, quantity: Decimal, unit: impl Into<String>) -> Self {
        self.yield_quantity = quantity;
        self.yield_unit = unit.into();
        self
    }

    /// Set labor cost per batch
    #[must_use]
    pub const fn with_labor_cost(mut self, labor_cost: Decimal) -> Self {
        self.labor_cost = labor_cost;
        self
    }

    /// Append an item
    #[must_use]
    pub fn with_item(mut self, item: RecipeItem) -> Self {
        self.items.push(item);
        self
    }

    /// Identifiers of the sub-recipes this recipe references, in item order
    pub fn child_recipe_ids(&self) -> impl Iterator<Item = &RecipeId> {
        self.items.iter().filter_map(RecipeItem::child_recipe_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_source_wire_format() {
        let item = RecipeItem::child_recipe("pastry-cream", dec!(0.5));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["source"]["child_recipe"], "pastry-cream");
        assert!(json.get("yield_rate").is_none());
    }

    #[test]
    fn test_recipe_defaults_when_deserializing() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "dough", "name": "Dough", "items": [
                {"source": {"ingredient": "flour"}, "quantity": "500", "yield_rate": "0.95"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(recipe.yield_quantity, Decimal::ONE);
        assert_eq!(recipe.labor_cost, Decimal::ZERO);
        assert_eq!(recipe.items[0].yield_rate, Some(dec!(0.95)));
        assert_eq!(recipe.child_recipe_ids().count(), 0);
    }
}
