// ABOUTME: Validated calculation-input boundary between presentation forms and the engine
// ABOUTME: Coerces raw form strings into an immutable CalculationInput that drives every component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Calculation Input Boundary
//!
//! Presentation collaborators hand over loosely-typed form values. They are
//! coerced and validated exactly once, here, into a [`CalculationInput`].
//! The components downstream only ever see clean, immutable data.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;
use vianna_core::errors::{AppError, AppResult, ErrorCode};
use vianna_core::models::{latest_test, FitnessTest, PeriodizationStyle, TrainingTier};
use vianna_intelligence::algorithms::FitnessEstimate;
use vianna_intelligence::config::PlannerConfig;
use vianna_intelligence::intensity::{build_intensity_table, IntensityTable};
use vianna_intelligence::progression::{
    planned_semester_hours, ProgressionBuilder, ProgressionInput, ProgressionWeek,
};

/// Raw prescription form values as typed by the coach
///
/// Every field is optional text; empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawForm {
    /// Student the calculation runs for
    pub student_id: Option<Uuid>,
    /// Explicit `VO2max` override; the latest test is used when absent
    pub vo2max: Option<String>,
    /// Tier id (`sedentary`, `beginner`, `intermediate`, `athlete`)
    pub tier: Option<String>,
    /// Style id (`linear`, `undulating`)
    pub style: Option<String>,
    /// Weekly duration (minutes)
    pub weekly_duration_minutes: Option<String>,
    /// Sessions per week
    pub sessions_per_week: Option<String>,
    /// Sessions across the plan
    pub total_sessions: Option<String>,
    /// Average session duration (minutes), tier default when absent
    pub average_session_minutes: Option<String>,
    /// Distance for the time-over-distance column (meters)
    pub reference_distance_meters: Option<String>,
}

/// Validated, immutable input for one prescription calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Student the calculation runs for
    pub student_id: Option<Uuid>,
    /// `VO2max` feeding the intensity table, `0.0` when unknown
    pub vo2max: f64,
    /// Distance for the time-over-distance column (meters)
    pub reference_distance_meters: f64,
    /// Average session duration (minutes)
    pub average_session_minutes: f64,
    /// Progression parameters
    pub progression: ProgressionInput,
}

/// Everything computed from one [`CalculationInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Intensity rows for the student's `VO2max`
    pub intensity_table: IntensityTable,
    /// Week-by-week progression
    pub progression: Vec<ProgressionWeek>,
    /// Planned hours across the semester
    pub semester_hours: f64,
}

impl CalculationInput {
    /// Coerce and validate a raw form
    ///
    /// `tests` supply the `VO2max` when the form carries no override. The most
    /// recent test wins; without tests the `VO2max` is `0.0`, which yields an
    /// all-sentinel intensity table. Weekly duration, sessions per week and
    /// session duration fall back to the tier profile when left empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field when a value is
    /// missing, unparsable or out of range.
    #[instrument(skip_all, fields(student_id = ?form.student_id))]
    pub fn from_form(
        form: &RawForm,
        tests: &[FitnessTest],
        config: &PlannerConfig,
    ) -> AppResult<Self> {
        Self::coerce(form, tests, config).map_err(|error| match form.student_id {
            Some(id) => error.with_student_id(id),
            None => error,
        })
    }

    fn coerce(form: &RawForm, tests: &[FitnessTest], config: &PlannerConfig) -> AppResult<Self> {
        let tier = parse_choice::<TrainingTier>(form.tier.as_deref())?.unwrap_or_default();
        let style = parse_choice::<PeriodizationStyle>(form.style.as_deref())?.unwrap_or_default();

        let profile = tier.profile();

        let weekly_duration_minutes =
            coerce_number("weekly_duration_minutes", form.weekly_duration_minutes.as_deref())?
                .unwrap_or_else(|| f64::from(profile.default_weekly_minutes));
        let sessions_per_week = coerce_count("sessions_per_week", form.sessions_per_week.as_deref())?
            .unwrap_or(profile.default_sessions_per_week);
        let total_sessions = coerce_count("total_sessions", form.total_sessions.as_deref())?
            .ok_or_else(|| AppError::missing_field("total_sessions"))?;

        let progression = ProgressionInput::new(
            tier,
            style,
            weekly_duration_minutes,
            sessions_per_week,
            total_sessions,
        )?;

        let average_session_minutes =
            coerce_number("average_session_minutes", form.average_session_minutes.as_deref())?
                .unwrap_or_else(|| f64::from(profile.default_session_minutes));
        ensure_non_negative("average_session_minutes", average_session_minutes)?;

        let reference_distance_meters = coerce_number(
            "reference_distance_meters",
            form.reference_distance_meters.as_deref(),
        )?
        .unwrap_or(config.reference_distance_meters);

        // Estimates pass through unchecked; a negative one yields sentinel rows
        let vo2max = match coerce_number("vo2max", form.vo2max.as_deref())? {
            Some(value) => {
                ensure_non_negative("vo2max", value)?;
                value
            }
            None => latest_test(tests).map_or(0.0, FitnessEstimate::estimated_vo2max),
        };

        debug!(%tier, %style, vo2max, "Validated calculation input");
        Ok(Self {
            student_id: form.student_id,
            vo2max,
            reference_distance_meters,
            average_session_minutes,
            progression,
        })
    }

    /// Intensity table for this input
    #[must_use]
    pub fn intensity_table(&self) -> IntensityTable {
        build_intensity_table(self.vo2max, self.reference_distance_meters)
    }

    /// Progression for this input
    #[must_use]
    pub fn progression_weeks(&self, config: &PlannerConfig) -> Vec<ProgressionWeek> {
        ProgressionBuilder::from_config(config).build(&self.progression)
    }

    /// Planned semester hours
    #[must_use]
    pub fn semester_hours(&self) -> f64 {
        planned_semester_hours(self.average_session_minutes, self.progression.total_sessions)
    }

    /// Run every prescription component
    #[must_use]
    pub fn calculate(&self, config: &PlannerConfig) -> CalculationOutput {
        CalculationOutput {
            intensity_table: self.intensity_table(),
            progression: self.progression_weeks(config),
            semester_hours: self.semester_hours(),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn parse_choice<T>(value: Option<&str>) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = AppError>,
{
    present(value).map(str::parse).transpose()
}

/// Parse an optional decimal field; empty text is `None`
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not a finite number.
pub fn coerce_number(field: &str, value: Option<&str>) -> AppResult<Option<f64>> {
    let Some(text) = present(value) else {
        return Ok(None);
    };

    // Accept decimal commas typed on localized keyboards
    let parsed = text.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite());
    parsed.map(Some).ok_or_else(|| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{field} must be a number, got '{text}'"),
        )
        .with_field(field)
    })
}

/// Parse an optional whole, non-negative count; empty text is `None`
///
/// # Errors
///
/// Returns `InvalidFormat` for non-numeric text and `ValueOutOfRange` for
/// negative or fractional values.
pub fn coerce_count(field: &str, value: Option<&str>) -> AppResult<Option<u32>> {
    let Some(number) = coerce_number(field, value)? else {
        return Ok(None);
    };

    if number < 0.0 || number.fract() > 0.0 || number > f64::from(u32::MAX) {
        return Err(AppError::out_of_range(format!(
            "{field} must be a whole number of at least zero, got {number}"
        ))
        .with_field(field));
    }
    Ok(Some(number as u32))
}

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value < 0.0 {
        return Err(
            AppError::out_of_range(format!("{field} must not be negative, got {value}"))
                .with_field(field),
        );
    }
    Ok(())
}
