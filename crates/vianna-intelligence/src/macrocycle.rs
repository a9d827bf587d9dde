// ABOUTME: Macrocycle expansion into a week-by-week master plan with hour budgets
// ABOUTME: Fixed mesocycle catalog, macro percentage templates, and month assignments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Macrocycle Expander
//!
//! A macrocycle is a sequence of months. Each month receives a share of the
//! target hours proportional to its template percentage, and each month is
//! assigned a mesocycle whose four microcycles take independent fractions of
//! that month's hours:
//!
//! ```text
//! month_hours  = target_hours / sum(template) x template[i]
//! week_minutes = round(month_hours x microcycle_percent / 100 x 60)
//! per_session  = round(week_minutes / sessions_per_week)
//! ```
//!
//! Microcycle percentages are not normalized within a mesocycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use vianna_core::constants::units::{MINUTES_PER_HOUR, WEEKS_PER_MESOCYCLE};
use vianna_core::errors::{AppError, AppResult};

/// Training emphasis of one microcycle (week)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MicrocycleCode {
    /// Adaptation
    Adp,
    /// Intensive loading
    Int,
    /// Stabilizing
    Est,
    /// Recovery
    Rec,
    /// Transition
    Trs,
}

impl MicrocycleCode {
    /// All codes
    pub const ALL: [Self; 5] = [Self::Adp, Self::Int, Self::Est, Self::Rec, Self::Trs];

    /// Short code shown in microcycle labels
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Adp => "Adp",
            Self::Int => "Int",
            Self::Est => "Est",
            Self::Rec => "Rec",
            Self::Trs => "Trs",
        }
    }

    /// Long-form description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Adp => "Adaptation",
            Self::Int => "Intensive",
            Self::Est => "Stabilizing",
            Self::Rec => "Recovery",
            Self::Trs => "Transition",
        }
    }
}

impl fmt::Display for MicrocycleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One week of a mesocycle template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Microcycle {
    /// Share of the month's hours (percent)
    pub percent: u32,
    /// Training emphasis
    pub code: MicrocycleCode,
}

impl Microcycle {
    const fn new(percent: u32, code: MicrocycleCode) -> Self {
        Self { percent, code }
    }

    /// Label of the form `"25% (Int)"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}% ({})", self.percent, self.code)
    }
}

/// A named mesocycle with exactly four microcycles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MesocycleTemplate {
    /// Stable identifier used in month assignments
    pub id: String,
    /// Display name
    pub name: String,
    /// Week templates in order
    pub microcycles: [Microcycle; WEEKS_PER_MESOCYCLE],
}

impl MesocycleTemplate {
    fn new(id: &str, name: &str, microcycles: [Microcycle; WEEKS_PER_MESOCYCLE]) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            microcycles,
        }
    }
}

/// Lookup table of mesocycle templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MesocycleCatalog {
    mesocycles: Vec<MesocycleTemplate>,
}

/// Identifier of the mesocycle used for generated month assignments
pub const DEFAULT_MESOCYCLE_ID: &str = "acquisition_1";

impl MesocycleCatalog {
    /// The fixed catalog of seven mesocycles
    #[must_use]
    pub fn standard() -> Self {
        use MicrocycleCode::{Adp, Est, Int, Rec, Trs};
        let m = Microcycle::new;

        Self {
            mesocycles: vec![
                MesocycleTemplate::new(
                    DEFAULT_MESOCYCLE_ID,
                    "Acquisition-I",
                    [m(20, Adp), m(25, Int), m(30, Int), m(25, Rec)],
                ),
                MesocycleTemplate::new(
                    "acquisition_2",
                    "Acquisition-II",
                    [m(22, Adp), m(26, Int), m(30, Int), m(22, Rec)],
                ),
                MesocycleTemplate::new(
                    "transformation_1",
                    "Transformation-I",
                    [m(25, Est), m(25, Int), m(28, Int), m(22, Rec)],
                ),
                MesocycleTemplate::new(
                    "transformation_2",
                    "Transformation-II",
                    [m(26, Int), m(24, Est), m(28, Int), m(22, Rec)],
                ),
                MesocycleTemplate::new(
                    "realization",
                    "Realization",
                    [m(26, Int), m(24, Est), m(26, Int), m(24, Rec)],
                ),
                MesocycleTemplate::new("stabilizer", "Stabilizer", [m(25, Est); 4]),
                MesocycleTemplate::new("transitional", "Transitional", [m(0, Trs); 4]),
            ],
        }
    }

    /// Build a catalog from custom templates
    #[must_use]
    pub const fn from_templates(mesocycles: Vec<MesocycleTemplate>) -> Self {
        Self { mesocycles }
    }

    /// Find a mesocycle by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MesocycleTemplate> {
        self.mesocycles.iter().find(|meso| meso.id == id)
    }

    /// All templates in catalog order
    #[must_use]
    pub fn templates(&self) -> &[MesocycleTemplate] {
        &self.mesocycles
    }
}

impl Default for MesocycleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Month-by-month percentage distribution of a macrocycle's hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTemplate {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Relative load of each month
    pub percentages: Vec<f64>,
}

impl MacroTemplate {
    /// Six-month template `[70, 80, 90, 100, 90, 80]`
    #[must_use]
    pub fn vianna_six_month() -> Self {
        Self {
            id: "vianna_6".to_owned(),
            name: "Vianna Suggestion (6 Months)".to_owned(),
            percentages: vec![70.0, 80.0, 90.0, 100.0, 90.0, 80.0],
        }
    }

    /// Placeholder for a coach-defined template, empty until filled in
    #[must_use]
    pub fn custom() -> Self {
        Self {
            id: "custom".to_owned(),
            name: "Custom".to_owned(),
            percentages: Vec::new(),
        }
    }

    /// All built-in templates
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![Self::vianna_six_month(), Self::custom()]
    }

    /// Find a built-in template by id
    #[must_use]
    pub fn find(id: &str) -> Option<Self> {
        Self::catalog().into_iter().find(|template| template.id == id)
    }

    /// Number of months the template spans
    #[must_use]
    pub fn months(&self) -> usize {
        self.percentages.len()
    }

    /// Sum of month percentages
    #[must_use]
    pub fn percentage_sum(&self) -> f64 {
        self.percentages.iter().sum()
    }
}

/// Mesocycle and weekly frequency chosen for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAssignment {
    /// Catalog id of the mesocycle
    pub mesocycle_id: String,
    /// Sessions per week for the whole month
    pub sessions_per_week: u32,
}

impl MonthAssignment {
    /// Assignment for a mesocycle id
    #[must_use]
    pub fn new(mesocycle_id: impl Into<String>, sessions_per_week: u32) -> Self {
        Self {
            mesocycle_id: mesocycle_id.into(),
            sessions_per_week,
        }
    }
}

/// One Acquisition-I assignment per month at the given frequency
#[must_use]
pub fn default_assignments(months: usize, sessions_per_week: u32) -> Vec<MonthAssignment> {
    (0..months)
        .map(|_| MonthAssignment::new(DEFAULT_MESOCYCLE_ID, sessions_per_week))
        .collect()
}

/// One calendar week of the master plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterPlanWeek {
    /// Contiguous 1-based number across emitted weeks
    pub global_week_number: u32,
    /// 1-based month
    pub month: u32,
    /// 1-based week inside the month (1..=4)
    pub week_within_month: u32,
    /// Display name of the month's mesocycle
    pub mesocycle_name: String,
    /// Label of the form `"25% (Est)"`
    pub microcycle_label: String,
    /// Weekly volume (minutes)
    pub weekly_volume_minutes: u32,
    /// Sessions per week
    pub sessions_per_week: u32,
    /// Volume of each session (minutes)
    pub per_session_volume_minutes: u32,
}

/// Why a month produced no weeks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The assigned mesocycle id is not in the catalog
    UnknownMesocycle {
        /// Offending id
        mesocycle_id: String,
    },
    /// The month was assigned zero sessions per week
    NoSessions,
}

/// A month left out of the master plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedMonth {
    /// 1-based month
    pub month: u32,
    /// Cause
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Expanded macrocycle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MasterPlan {
    /// Emitted weeks in month-major order
    pub weeks: Vec<MasterPlanWeek>,
    /// Months that produced no weeks
    pub skipped: Vec<SkippedMonth>,
}

impl MasterPlan {
    /// Whether some months were left out
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Sum of weekly volumes (minutes)
    #[must_use]
    pub fn total_minutes(&self) -> u64 {
        self.weeks
            .iter()
            .map(|week| u64::from(week.weekly_volume_minutes))
            .sum()
    }
}

/// Expand a macrocycle into its master plan
///
/// The plan spans as many months as both `template` and `assignments` cover.
/// Months with an unknown mesocycle or zero sessions per week are skipped and
/// reported in [`MasterPlan::skipped`]; they never fail the computation.
///
/// # Errors
///
/// Returns a validation error if `target_hours` is negative or not finite, or
/// if the template percentages do not sum to a positive finite number.
pub fn expand_master_plan(
    target_hours: f64,
    template: &MacroTemplate,
    assignments: &[MonthAssignment],
    catalog: &MesocycleCatalog,
) -> AppResult<MasterPlan> {
    if !target_hours.is_finite() || target_hours < 0.0 {
        return Err(AppError::out_of_range(format!(
            "target hours must be a non-negative number, got {target_hours}"
        ))
        .with_field("target_hours"));
    }

    let percentage_sum = template.percentage_sum();
    if !percentage_sum.is_finite() || percentage_sum <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "macrocycle template '{}' percentages must sum to a positive number",
            template.id
        ))
        .with_field("macro_template"));
    }

    if template.months() != assignments.len() {
        warn!(
            template_months = template.months(),
            assigned_months = assignments.len(),
            "Month assignments do not cover the template, expanding the shorter span"
        );
    }

    let hours_per_point = target_hours / percentage_sum;
    let mut plan = MasterPlan::default();
    let mut global_week: u32 = 1;

    for (month, (month_percent, assignment)) in
        (1_u32..).zip(template.percentages.iter().zip(assignments))
    {
        let Some(mesocycle) = catalog.find(&assignment.mesocycle_id) else {
            warn!(month, mesocycle_id = %assignment.mesocycle_id, "Unknown mesocycle, skipping month");
            plan.skipped.push(SkippedMonth {
                month,
                reason: SkipReason::UnknownMesocycle {
                    mesocycle_id: assignment.mesocycle_id.clone(),
                },
            });
            continue;
        };

        let sessions = assignment.sessions_per_week;
        if sessions == 0 {
            warn!(month, "Month has no sessions per week, skipping its weeks");
            plan.skipped.push(SkippedMonth {
                month,
                reason: SkipReason::NoSessions,
            });
            continue;
        }

        let month_hours = hours_per_point * month_percent;
        for (week_within_month, microcycle) in (1_u32..).zip(&mesocycle.microcycles) {
            let week_hours = month_hours * f64::from(microcycle.percent) / 100.0;
            let weekly_volume_minutes = whole_minutes(week_hours * MINUTES_PER_HOUR);
            let per_session_volume_minutes =
                whole_minutes(f64::from(weekly_volume_minutes) / f64::from(sessions));

            plan.weeks.push(MasterPlanWeek {
                global_week_number: global_week,
                month,
                week_within_month,
                mesocycle_name: mesocycle.name.clone(),
                microcycle_label: microcycle.label(),
                weekly_volume_minutes,
                sessions_per_week: sessions,
                per_session_volume_minutes,
            });
            global_week += 1;
        }
    }

    debug!(
        target_hours,
        template = %template.id,
        weeks = plan.weeks.len(),
        skipped = plan.skipped.len(),
        "Expanded master plan"
    );
    Ok(plan)
}

fn whole_minutes(minutes: f64) -> u32 {
    minutes.round().max(0.0) as u32
}
