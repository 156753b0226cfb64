// ABOUTME: Re-exports command modules for brigade-cli
// ABOUTME: Provides access to resolution and book audit commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

pub mod audit;
pub mod resolve;
