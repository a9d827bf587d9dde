// ABOUTME: Catalog command for vianna-cli
// ABOUTME: Lists mesocycles, macrocycle templates, and tier profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use serde_json::json;
use vianna_coach::errors::AppResult;
use vianna_coach::intelligence::macrocycle::{MacroTemplate, MesocycleCatalog};
use vianna_coach::models::TrainingTier;

use crate::helpers::display::{display_catalog, print_json};
use crate::OutputFormat;

/// Print the built-in catalogs
pub fn run(format: OutputFormat) -> AppResult<()> {
    let catalog = MesocycleCatalog::standard();
    let templates = MacroTemplate::catalog();

    match format {
        OutputFormat::Json => {
            let tiers: Vec<_> = TrainingTier::ALL
                .iter()
                .map(|tier| {
                    json!({
                        "id": tier.id(),
                        "name": tier.display_name(),
                        "profile": tier.profile(),
                    })
                })
                .collect();
            print_json(&json!({
                "mesocycles": catalog.templates(),
                "macro_templates": templates,
                "tiers": tiers,
            }))?;
        }
        OutputFormat::Table => display_catalog(&catalog, &templates),
    }
    Ok(())
}
