// ABOUTME: Application-wide constants for the Brigade resolver, organized by domain
// ABOUTME: Nutrient keys and aliases, rounding defaults, and configuration variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

/// Canonical nutrient keys used in `nutrition_per_100g` tables
pub mod nutrients {
    /// Energy in kilocalories
    pub const CALORIES: &str = "calories";
    /// Protein in grams
    pub const PROTEIN: &str = "protein";
    /// Total fat in grams
    pub const FAT: &str = "fat";
    /// Total carbohydrates in grams
    pub const CARBS: &str = "carbs";

    /// Alternate spellings seen in imported nutrition databases
    const ALIASES: &[(&str, &str)] = &[
        ("kcal", CALORIES),
        ("energy", CALORIES),
        ("energy_kcal", CALORIES),
        ("proteins", PROTEIN),
        ("total_fat", FAT),
        ("fats", FAT),
        ("carbohydrates", CARBS),
        ("carbohydrate", CARBS),
        ("total_carbs", CARBS),
    ];

    /// Map a nutrient name (any casing, canonical or alias) to its canonical key
    #[must_use]
    pub fn canonical(name: &str) -> Option<&'static str> {
        canonical_with_rank(name).map(|(key, _)| key)
    }

    /// Canonical key plus the spelling's precedence, lower wins
    ///
    /// The canonical spelling ranks 0; aliases rank by their position in the
    /// alias table, so `kcal` beats `energy` when a table carries both.
    #[must_use]
    pub fn canonical_with_rank(name: &str) -> Option<(&'static str, usize)> {
        let normalized = name.trim().to_lowercase();
        [CALORIES, PROTEIN, FAT, CARBS]
            .into_iter()
            .find(|key| *key == normalized)
            .map(|key| (key, 0))
            .or_else(|| {
                ALIASES
                    .iter()
                    .enumerate()
                    .find(|(_, (alias, _))| *alias == normalized)
                    .map(|(index, (_, key))| (*key, index + 1))
            })
    }
}

/// Rounding applied at the outermost resolver boundary
pub mod rounding {
    /// Decimal places for monetary results
    pub const DEFAULT_MONEY_SCALE: u32 = 2;
    /// Decimal places for nutrition results
    pub const DEFAULT_NUTRIENT_SCALE: u32 = 2;
    /// Upper bound accepted for either scale
    pub const MAX_SCALE: u32 = 10;
}

/// Environment variable names read by the resolver configuration
pub mod env_config {
    /// Decimal places for cost outputs
    pub const MONEY_SCALE: &str = "BRIGADE_MONEY_SCALE";
    /// Decimal places for nutrition outputs
    pub const NUTRIENT_SCALE: &str = "BRIGADE_NUTRIENT_SCALE";
    /// `skip` or `fail` when the procurement walk meets a cycle
    pub const PROCUREMENT_CYCLE_POLICY: &str = "BRIGADE_PROCUREMENT_CYCLE_POLICY";
}

/// Service names used in structured logs
pub mod service_names {
    /// Command-line tool
    pub const BRIGADE_CLI: &str = "brigade-cli";
    /// Library default
    pub const BRIGADE: &str = "brigade";
}
