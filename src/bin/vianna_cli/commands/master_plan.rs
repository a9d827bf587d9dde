// ABOUTME: Master plan command for vianna-cli
// ABOUTME: Parses month assignments and expands a macrocycle template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use tracing::info;
use vianna_coach::errors::{AppError, AppResult, ErrorCode};
use vianna_coach::intelligence::macrocycle::{
    default_assignments, MesocycleCatalog, MonthAssignment,
};
use vianna_coach::models::TrainingTier;
use vianna_coach::persistence::MasterPlanSettings;
use vianna_coach::PlannerConfig;

use crate::helpers::display::{display_master_plan, print_json};
use crate::OutputFormat;

/// Raw master plan arguments as typed on the command line
pub struct MasterPlanArgs {
    pub target_hours: f64,
    pub tier: Option<String>,
    pub duration_months: Option<u32>,
    pub template: String,
    pub months: Vec<String>,
}

/// Expand and print a master plan
pub fn run(args: MasterPlanArgs, config: &PlannerConfig, format: OutputFormat) -> AppResult<()> {
    let tier = args
        .tier
        .as_deref()
        .map(str::parse::<TrainingTier>)
        .transpose()?
        .unwrap_or_default();

    let mut settings = MasterPlanSettings {
        tier,
        target_hours: args.target_hours,
        duration_months: 0,
        template_id: args.template,
    };
    let template = settings.template()?;
    settings.duration_months = args
        .duration_months
        .unwrap_or_else(|| u32::try_from(template.months()).unwrap_or(u32::MAX));

    let assignments = if args.months.is_empty() {
        default_assignments(template.months(), config.default_sessions_per_week)
    } else {
        args.months
            .iter()
            .map(|month| parse_assignment(month, config.default_sessions_per_week))
            .collect::<AppResult<Vec<_>>>()?
    };

    let plan = settings.expand(&assignments, &MesocycleCatalog::standard())?;
    info!(
        weeks = plan.weeks.len(),
        skipped = plan.skipped.len(),
        "Expanded master plan"
    );

    match format {
        OutputFormat::Json => print_json(&plan)?,
        OutputFormat::Table => {
            display_master_plan(&plan);
            if !settings.within_tier_band() {
                println!(
                    "Note: {} h is outside the {} band of {} h",
                    settings.target_hours,
                    tier.display_name(),
                    tier.profile().macrocycle_hours
                );
            }
        }
    }
    Ok(())
}

/// Parse `mesocycle_id[:sessions]`
fn parse_assignment(text: &str, default_sessions: u32) -> AppResult<MonthAssignment> {
    let (id, sessions) = match text.split_once(':') {
        Some((id, sessions)) => {
            let sessions = sessions.trim().parse::<u32>().map_err(|error| {
                AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("sessions in month '{text}' must be a whole number"),
                )
                .with_field("month")
                .with_source(error)
            })?;
            (id, sessions)
        }
        None => (text, default_sessions),
    };

    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::missing_field("month"));
    }
    Ok(MonthAssignment::new(id, sessions))
}
