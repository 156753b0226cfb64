// ABOUTME: Decimal helpers shared by resolvers and result types
// ABOUTME: One rounding rule for every value returned across the resolver boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use rust_decimal::{Decimal, RoundingStrategy};

/// Round half away from zero to `scale` decimal places
///
/// # Examples
///
/// ```rust
/// use brigade_core::numeric::round_to;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_to(dec!(-2.345), 2), dec!(-2.35));
/// ```
#[must_use]
pub fn round_to(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}
