// ABOUTME: Configuration module for resolver behavior and rounding
// ABOUTME: Environment-driven settings with validation and a process-wide default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

/// Resolver rounding and cycle-policy configuration
pub mod resolver;

pub use resolver::{ConfigError, CyclePolicy, ResolverConfig};
