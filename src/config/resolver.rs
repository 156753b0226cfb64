// ABOUTME: Resolver configuration: output rounding scales and procurement cycle policy
// ABOUTME: Loaded from BRIGADE_* environment variables with validation and sane defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

//! Resolver Configuration
//!
//! All values can be overridden via environment variables with the `BRIGADE_` prefix.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use brigade_core::constants::{env_config, rounding};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Global configuration singleton
static RESOLVER_CONFIG: OnceLock<ResolverConfig> = OnceLock::new();

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// What the procurement walk does when it meets a recipe already on its path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Log the cycle and drop that branch, keeping everything accumulated so far
    #[default]
    Skip,
    /// Fail the whole shopping list, like cost and nutrition resolution
    Fail,
}

impl FromStr for CyclePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fail" => Ok(Self::Fail),
            other => Err(ConfigError::Parse(format!(
                "unknown cycle policy '{other}' (expected 'skip' or 'fail')"
            ))),
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Skip => "skip",
            Self::Fail => "fail",
        })
    }
}

/// Resolver behavior shared by all resolution calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Decimal places for cost, cost-per-portion and shopping-list costs
    pub money_scale: u32,
    /// Decimal places for nutrition totals
    pub nutrient_scale: u32,
    /// Cycle handling for shopping-list generation
    pub procurement_cycle_policy: CyclePolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            money_scale: rounding::DEFAULT_MONEY_SCALE,
            nutrient_scale: rounding::DEFAULT_NUTRIENT_SCALE,
            procurement_cycle_policy: CyclePolicy::default(),
        }
    }
}

impl ResolverConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RESOLVER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load resolver config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a rounding scale exceeds `rounding::MAX_SCALE`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.money_scale > rounding::MAX_SCALE {
            return Err(ConfigError::ValueOutOfRange("money_scale must be <= 10"));
        }
        if self.nutrient_scale > rounding::MAX_SCALE {
            return Err(ConfigError::ValueOutOfRange("nutrient_scale must be <= 10"));
        }
        Ok(())
    }

    /// Builder-style override of the procurement cycle policy
    #[must_use]
    pub const fn with_procurement_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.procurement_cycle_policy = policy;
        self
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::MONEY_SCALE, &mut self.money_scale)?;
        Self::apply_env_var(env_config::NUTRIENT_SCALE, &mut self.nutrient_scale)?;
        Self::apply_env_var(
            env_config::PROCUREMENT_CYCLE_POLICY,
            &mut self.procurement_cycle_policy,
        )?;
        Ok(self)
    }
}
