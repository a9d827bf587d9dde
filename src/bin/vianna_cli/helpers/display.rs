// ABOUTME: Output formatting helpers for vianna-cli
// ABOUTME: Renders intensity tables, progressions, master plans, and catalogs as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use serde::Serialize;
use vianna_coach::constants::units::MINUTES_PER_HOUR;
use vianna_coach::errors::AppResult;
use vianna_coach::intelligence::intensity::IntensityTable;
use vianna_coach::intelligence::macrocycle::{
    MacroTemplate, MasterPlan, MesocycleCatalog, Microcycle, MicrocycleCode, SkipReason,
};
use vianna_coach::intelligence::progression::ProgressionWeek;
use vianna_coach::models::TrainingTier;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the pace table for one `VO2max`
pub fn display_intensity_table(table: &IntensityTable) {
    println!(
        "\nIntensity table for VO2max {:.2} ml/kg/min",
        table.vo2max
    );
    println!("{}", "=".repeat(72));
    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>12} {:>16}",
        "%",
        "Target VO2",
        "m/min",
        "km/h",
        "Pace /km",
        format!("Time {:.0} m", table.reference_distance_meters)
    );
    println!("{}", "-".repeat(72));
    for row in &table.rows {
        println!(
            "{:<6} {:>10} {:>10} {:>10} {:>12} {:>16}",
            row.label,
            row.target_vo2_display(),
            row.meters_per_minute_display(),
            row.km_per_hour_display(),
            row.pace_display(),
            row.time_over_distance_display()
        );
    }

    let invalid = table.rows.len() - table.valid_row_count();
    if invalid > 0 {
        println!("\n{invalid} row(s) could not be computed for this VO2max");
    }
}

/// Display a semester progression with its planned hours
pub fn display_progression(weeks: &[ProgressionWeek], semester_hours: f64) {
    println!("\nProgression ({} weeks)", weeks.len());
    println!("{}", "=".repeat(64));
    println!(
        "{:<6} {:>14} {:>12}   {}",
        "Week", "Volume (min)", "Intensity", "Focus"
    );
    println!("{}", "-".repeat(64));
    for week in weeks {
        println!(
            "{:<6} {:>14} {:>11.1}%   {}",
            week.week_number,
            week.planned_volume_minutes,
            week.target_intensity_percent,
            week.intensity_focus_description()
        );
    }
    println!("\nPlanned semester hours: {semester_hours:.2}");
}

/// Display an expanded master plan and any skipped months
pub fn display_master_plan(plan: &MasterPlan) {
    println!("\nMaster plan ({} weeks)", plan.weeks.len());
    println!("{}", "=".repeat(84));
    println!(
        "{:<5} {:<6} {:<5} {:<18} {:<12} {:>9} {:>9} {:>12}",
        "Week", "Month", "MW", "Mesocycle", "Microcycle", "Min/week", "Sessions", "Min/session"
    );
    println!("{}", "-".repeat(84));
    for week in &plan.weeks {
        println!(
            "{:<5} {:<6} {:<5} {:<18} {:<12} {:>9} {:>9} {:>12}",
            week.global_week_number,
            week.month,
            week.week_within_month,
            week.mesocycle_name,
            week.microcycle_label,
            week.weekly_volume_minutes,
            week.sessions_per_week,
            week.per_session_volume_minutes
        );
    }

    let total_minutes = plan.total_minutes();
    println!(
        "\nTotal volume: {total_minutes} min ({:.1} h)",
        total_minutes as f64 / MINUTES_PER_HOUR
    );

    for skipped in &plan.skipped {
        match &skipped.reason {
            SkipReason::UnknownMesocycle { mesocycle_id } => println!(
                "Month {} skipped: unknown mesocycle '{mesocycle_id}'",
                skipped.month
            ),
            SkipReason::NoSessions => {
                println!("Month {} skipped: no sessions per week", skipped.month);
            }
        }
    }
}

/// Display the mesocycle catalog, macro templates, and tier profiles
pub fn display_catalog(catalog: &MesocycleCatalog, templates: &[MacroTemplate]) {
    println!("\nMesocycles");
    println!("{}", "=".repeat(72));
    for mesocycle in catalog.templates() {
        let weeks: Vec<String> = mesocycle.microcycles.iter().map(Microcycle::label).collect();
        println!("{:<16} {:<18} {}", mesocycle.id, mesocycle.name, weeks.join(" | "));
    }
    let legend: Vec<String> = MicrocycleCode::ALL
        .iter()
        .map(|code| format!("{code} = {}", code.description()))
        .collect();
    println!("\n{}", legend.join(", "));

    println!("\nMacro templates");
    println!("{}", "=".repeat(72));
    for template in templates {
        let months: Vec<String> = template
            .percentages
            .iter()
            .map(|percent| format!("{percent:.0}"))
            .collect();
        let months = if months.is_empty() {
            "(coach defined)".to_owned()
        } else {
            months.join(", ")
        };
        println!("{:<10} {:<30} {months}", template.id, template.name);
    }

    println!("\nTiers");
    println!("{}", "=".repeat(72));
    for tier in TrainingTier::ALL {
        let profile = tier.profile();
        let (min_sessions, max_sessions) = profile.recommended_sessions_per_week;
        println!(
            "{:<13} {:<22} {:>4} min/week  {} x {} min  {}-{} sessions  semester {} h  macrocycle {} h",
            tier.id(),
            tier.display_name(),
            profile.default_weekly_minutes,
            profile.default_sessions_per_week,
            profile.default_session_minutes,
            min_sessions,
            max_sessions,
            profile.recommended_semester_hours,
            profile.macrocycle_hours
        );
    }
}
