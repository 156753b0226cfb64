// ABOUTME: Unified error handling for the recipe resolver and its repository collaborators
// ABOUTME: Defines ErrorCode with HTTP status mapping plus the resolver/repository error enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

//! # Error Types
//!
//! - `ResolveError` - every failure a resolver call can surface
//! - `RepositoryError` - storage backend failures (distinct from "not found")
//! - `ErrorCode` - stable, transport-facing classification with HTTP status mapping

mod resolve;

pub use resolve::{EntityKind, RepositoryError, ResolveError, ResolveResult};

use serde::{Deserialize, Serialize};

/// Standard error codes exposed to the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Referenced recipe, ingredient or sales menu does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// A recipe references itself along the traversal path
    #[serde(rename = "CIRCULAR_DEPENDENCY")]
    CircularDependency,
    /// A yield rate of exactly zero was used as a divisor
    #[serde(rename = "INVALID_YIELD_RATE")]
    InvalidYieldRate,
    /// A recipe yield quantity of zero was used as a divisor
    #[serde(rename = "INVALID_YIELD_QUANTITY")]
    InvalidYieldQuantity,
    /// Scaled quantities or costs exceeded the decimal range
    #[serde(rename = "ARITHMETIC_OVERFLOW")]
    ArithmeticOverflow,
    /// The repository backend failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::ResourceNotFound => 404,
            Self::CircularDependency
            | Self::InvalidYieldRate
            | Self::InvalidYieldQuantity
            | Self::ArithmeticOverflow => 400,
            Self::StorageError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ResourceNotFound => "The requested resource was not found",
            Self::CircularDependency => "The recipe graph contains a circular reference",
            Self::InvalidYieldRate => "A recipe item has a yield rate of zero",
            Self::InvalidYieldQuantity => "The recipe has a yield quantity of zero",
            Self::ArithmeticOverflow => "Scaled quantities exceed the supported decimal range",
            Self::StorageError => "Storage operation failed",
        }
    }

    /// Whether the error is caused by client-supplied data rather than a system fault
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }
}
