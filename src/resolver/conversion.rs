// ABOUTME: Unit conversion table from recipe quantities to grams
// ABOUTME: Fixed mass and water-equivalent volume factors; unknown units convert to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Grams per ounce (avoirdupois)
pub const GRAMS_PER_OZ: Decimal = dec!(28.35);

/// Grams per pound
pub const GRAMS_PER_LB: Decimal = dec!(453.6);

/// Milliliters per US cup, taken as grams of water
pub const ML_PER_CUP: Decimal = dec!(240);

/// Milliliters per tablespoon
pub const ML_PER_TBSP: Decimal = dec!(15);

/// Milliliters per teaspoon
pub const ML_PER_TSP: Decimal = dec!(5);

/// One row of the conversion table
struct UnitFactor {
    grams: Decimal,
    aliases: &'static [&'static str],
}

impl UnitFactor {
    const fn new(grams: Decimal) -> Self {
        Self {
            grams,
            aliases: &[],
        }
    }

    const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Canonical unit symbol to factor
static UNIT_FACTORS: LazyLock<HashMap<&'static str, UnitFactor>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // === Mass ===
    m.insert(
        "mg",
        UnitFactor::new(dec!(0.001)).with_aliases(&["milligram", "milligrams"]),
    );
    m.insert(
        "g",
        UnitFactor::new(Decimal::ONE).with_aliases(&["gr", "gram", "grams"]),
    );
    m.insert(
        "kg",
        UnitFactor::new(dec!(1000)).with_aliases(&["kilo", "kilogram", "kilograms"]),
    );
    m.insert(
        "oz",
        UnitFactor::new(GRAMS_PER_OZ).with_aliases(&["ounce", "ounces"]),
    );
    m.insert(
        "lb",
        UnitFactor::new(GRAMS_PER_LB).with_aliases(&["lbs", "pound", "pounds"]),
    );

    // === Volume, as water ===
    m.insert(
        "ml",
        UnitFactor::new(Decimal::ONE).with_aliases(&["milliliter", "milliliters", "millilitre"]),
    );
    m.insert(
        "cl",
        UnitFactor::new(dec!(10)).with_aliases(&["centiliter", "centilitre"]),
    );
    m.insert(
        "dl",
        UnitFactor::new(dec!(100)).with_aliases(&["deciliter", "decilitre"]),
    );
    m.insert(
        "l",
        UnitFactor::new(dec!(1000)).with_aliases(&["liter", "liters", "litre", "litres"]),
    );
    m.insert(
        "tsp",
        UnitFactor::new(ML_PER_TSP).with_aliases(&["teaspoon", "teaspoons"]),
    );
    m.insert(
        "tbsp",
        UnitFactor::new(ML_PER_TBSP).with_aliases(&["tablespoon", "tablespoons"]),
    );
    m.insert(
        "cup",
        UnitFactor::new(ML_PER_CUP).with_aliases(&["cups"]),
    );

    m
});

/// Grams represented by one `unit`, or `None` for count and unknown units
///
/// Matching ignores case and surrounding whitespace and accepts common
/// spelled-out aliases.
#[must_use]
pub fn grams_per_unit(unit: &str) -> Option<Decimal> {
    let normalized = unit.trim().to_lowercase();

    if let Some(factor) = UNIT_FACTORS.get(normalized.as_str()) {
        return Some(factor.grams);
    }

    UNIT_FACTORS
        .values()
        .find(|factor| factor.aliases.contains(&normalized.as_str()))
        .map(|factor| factor.grams)
}

/// Whether `unit` has a gram equivalent
#[must_use]
pub fn is_convertible(unit: &str) -> bool {
    grams_per_unit(unit).is_some()
}

/// Convert `quantity` of `unit` to grams
///
/// Units without a fixed gram equivalent (`pcs`, `piece`, `bunch`, ...) convert
/// to zero rather than failing, so they simply do not contribute weight.
/// Results beyond the decimal range saturate at `Decimal::MAX` or `Decimal::MIN`.
///
/// # Examples
///
/// ```rust
/// use brigade::resolver::conversion::to_grams;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_grams(dec!(1), "kg"), dec!(1000));
/// assert_eq!(to_grams(dec!(2), " Tbsp "), dec!(30));
/// assert_eq!(to_grams(dec!(3), "pcs"), dec!(0));
/// ```
#[must_use]
pub fn to_grams(quantity: Decimal, unit: &str) -> Decimal {
    grams_per_unit(unit).map_or(Decimal::ZERO, |grams| quantity.saturating_mul(grams))
}
