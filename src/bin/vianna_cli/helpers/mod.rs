// ABOUTME: Helper modules for vianna-cli
// ABOUTME: Provides table and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

pub mod display;
