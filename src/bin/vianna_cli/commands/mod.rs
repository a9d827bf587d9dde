// ABOUTME: Re-exports command modules for vianna-cli
// ABOUTME: Provides estimate, table, master plan, and catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

pub mod catalog;
pub mod estimate;
pub mod master_plan;
pub mod tables;
