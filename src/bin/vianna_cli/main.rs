// ABOUTME: Vianna CLI - command-line front end for the periodization engine
// ABOUTME: Estimates VO2max and prints intensity tables, progressions, master plans, and catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors
//!
//! Usage:
//! ```bash
//! # Estimate VO2max from a Cooper test
//! vianna-cli estimate --protocol cooper --value 2800
//!
//! # Pace table for a VO2max of 50 over 1000 m
//! vianna-cli intensity --vo2max 50 --distance 1000
//!
//! # Semester progression
//! vianna-cli progression --tier intermediate --style linear \
//!     --weekly-minutes 360 --sessions-per-week 5 --total-sessions 60
//!
//! # Six-month master plan, every month a Stabilizer at 3 sessions per week
//! vianna-cli master-plan --target-hours 75 --month stabilizer:3 --month stabilizer:3 ...
//!
//! # First three months of a beginner plan, checked against the tier's hour band
//! vianna-cli master-plan --target-hours 120 --tier beginner --duration-months 3
//!
//! # JSON output for any command
//! vianna-cli --format json catalog
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use vianna_coach::logging::LoggingConfig;
use vianna_coach::PlannerConfig;

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables
    Table,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(
    name = "vianna-cli",
    about = "Vianna running periodization CLI",
    long_about = "Computes VO2max estimates, pace tables, semester progressions, and macrocycle master plans for coaches."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate VO2max and classification from a field test
    Estimate {
        /// Protocol (cooper, 2400m, 3600m, `lima_vianna`)
        #[arg(long)]
        protocol: String,

        /// Raw measurement (meters, seconds, or km/h depending on protocol)
        #[arg(long)]
        value: f64,

        /// Test date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Print the intensity table for a VO2max
    Intensity {
        /// VO2max (ml/kg/min)
        #[arg(long)]
        vo2max: f64,

        /// Reference distance for the time column (meters)
        #[arg(long)]
        distance: Option<f64>,
    },

    /// Build a week-by-week semester progression
    Progression {
        /// Tier (sedentary, beginner, intermediate, athlete)
        #[arg(long)]
        tier: Option<String>,

        /// Style (linear, undulating)
        #[arg(long)]
        style: Option<String>,

        /// Weekly training duration (minutes), tier default when omitted
        #[arg(long)]
        weekly_minutes: Option<String>,

        /// Sessions per week, tier default when omitted
        #[arg(long)]
        sessions_per_week: Option<String>,

        /// Sessions across the plan
        #[arg(long)]
        total_sessions: String,

        /// Average session duration (minutes), tier default when omitted
        #[arg(long)]
        session_minutes: Option<String>,
    },

    /// Expand a macrocycle into its master plan
    MasterPlan {
        /// Target hours across the macrocycle
        #[arg(long)]
        target_hours: f64,

        /// Tier the plan is sized for, checked against its hour band
        #[arg(long)]
        tier: Option<String>,

        /// Macrocycle length (months), template length when omitted
        #[arg(long)]
        duration_months: Option<u32>,

        /// Macro template id
        #[arg(long, default_value = "vianna_6")]
        template: String,

        /// Month assignment as `mesocycle_id[:sessions]`, repeat once per month
        #[arg(long = "month")]
        months: Vec<String>,
    },

    /// List mesocycles, macro templates, and tier profiles
    Catalog,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().with_verbose(cli.verbose).init()?;

    let config = PlannerConfig::global();
    debug!(?config, "Planner configuration loaded");

    match cli.command {
        Command::Estimate {
            protocol,
            value,
            date,
        } => commands::estimate::run(&protocol, value, date.as_deref(), cli.format)?,
        Command::Intensity { vo2max, distance } => {
            commands::tables::intensity(vo2max, distance, config, cli.format)?;
        }
        Command::Progression {
            tier,
            style,
            weekly_minutes,
            sessions_per_week,
            total_sessions,
            session_minutes,
        } => commands::tables::progression(
            commands::tables::ProgressionArgs {
                tier,
                style,
                weekly_minutes,
                sessions_per_week,
                total_sessions,
                session_minutes,
            },
            config,
            cli.format,
        )?,
        Command::MasterPlan {
            target_hours,
            tier,
            duration_months,
            template,
            months,
        } => commands::master_plan::run(
            commands::master_plan::MasterPlanArgs {
                target_hours,
                tier,
                duration_months,
                template,
                months,
            },
            config,
            cli.format,
        )?,
        Command::Catalog => commands::catalog::run(cli.format)?,
    }

    Ok(())
}
