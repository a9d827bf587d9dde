// ABOUTME: Intensity table and progression commands for vianna-cli
// ABOUTME: Routes command-line values through the validated calculation input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use serde_json::json;
use vianna_coach::errors::{AppError, AppResult};
use vianna_coach::intelligence::intensity::build_intensity_table;
use vianna_coach::planner::{CalculationInput, RawForm};
use vianna_coach::PlannerConfig;

use crate::helpers::display::{display_intensity_table, display_progression, print_json};
use crate::OutputFormat;

/// Print the intensity table for a `VO2max`
pub fn intensity(
    vo2max: f64,
    distance: Option<f64>,
    config: &PlannerConfig,
    format: OutputFormat,
) -> AppResult<()> {
    if !vo2max.is_finite() || vo2max < 0.0 {
        return Err(
            AppError::out_of_range(format!("VO2max must not be negative, got {vo2max}"))
                .with_field("vo2max"),
        );
    }
    let table = build_intensity_table(
        vo2max,
        distance.unwrap_or(config.reference_distance_meters),
    );

    match format {
        OutputFormat::Json => print_json(&table)?,
        OutputFormat::Table => display_intensity_table(&table),
    }
    Ok(())
}

/// Raw progression arguments as typed on the command line
pub struct ProgressionArgs {
    pub tier: Option<String>,
    pub style: Option<String>,
    pub weekly_minutes: Option<String>,
    pub sessions_per_week: Option<String>,
    pub total_sessions: String,
    pub session_minutes: Option<String>,
}

/// Build and print a semester progression
pub fn progression(
    args: ProgressionArgs,
    config: &PlannerConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let form = RawForm {
        tier: args.tier,
        style: args.style,
        weekly_duration_minutes: args.weekly_minutes,
        sessions_per_week: args.sessions_per_week,
        total_sessions: Some(args.total_sessions),
        average_session_minutes: args.session_minutes,
        ..RawForm::default()
    };

    let input = CalculationInput::from_form(&form, &[], config)?;
    let weeks = input.progression_weeks(config);
    let semester_hours = input.semester_hours();

    match format {
        OutputFormat::Json => print_json(&json!({
            "input": input.progression,
            "weeks": weeks,
            "semester_hours": semester_hours,
        }))?,
        OutputFormat::Table => display_progression(&weeks, semester_hours),
    }
    Ok(())
}
