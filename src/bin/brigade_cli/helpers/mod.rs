// ABOUTME: Re-exports helper modules for brigade-cli
// ABOUTME: Provides access to argument parsing and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brigade Kitchen Systems

pub mod display;
pub mod requests;
