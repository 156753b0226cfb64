// ABOUTME: Recipe book audit command for brigade-cli
// ABOUTME: Prints cycles and dangling references and fails the process when any exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

use std::process::ExitCode;

use anyhow::Result;
use brigade::repository::RecipeBook;
use tracing::warn;

use crate::helpers::display::{display_audit, OutputFormat};

/// Audit `book`, exiting non-zero when problems are found
pub fn run(book: &RecipeBook, format: OutputFormat) -> Result<ExitCode> {
    let audit = book.audit();
    display_audit(&audit, format)?;

    if audit.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(
            cycles = audit.cycles.len(),
            missing_references = audit.missing_references.len(),
            "recipe book audit found problems"
        );
        Ok(ExitCode::FAILURE)
    }
}
