// ABOUTME: Argument parsing helpers for brigade-cli
// ABOUTME: Parses `id=quantity` pairs for shopping-list requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse `id=quantity` into its parts; used as a clap value parser
pub fn parse_quantity_pair(raw: &str) -> Result<(String, Decimal), String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=quantity, got '{raw}'"))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing id in '{raw}'"));
    }

    let quantity = Decimal::from_str(quantity.trim())
        .map_err(|e| format!("invalid quantity in '{raw}': {e}"))?;
    if quantity.is_sign_negative() {
        return Err(format!("quantity must not be negative in '{raw}'"));
    }

    Ok((id.to_owned(), quantity))
}
