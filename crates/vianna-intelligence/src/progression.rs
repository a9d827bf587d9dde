// ABOUTME: Week-by-week volume and intensity progression for a semester plan
// ABOUTME: Linear and undulating styles interpolated from a per-tier parameter table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Progression Builder
//!
//! Produces `ceil(total_sessions / sessions_per_week)` weeks. For week `w` of
//! `n`, the progress factor is `(w - 1) / (n - 1)`, or `1` when there is a
//! single week. Volume and intensity interpolate linearly between the tier's
//! start and end parameters.

use crate::config::PlannerConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use vianna_core::constants::units::MINUTES_PER_HOUR;
use vianna_core::errors::{AppError, AppResult};
use vianna_core::models::{PeriodizationStyle, TrainingTier};

/// Start/end interpolation parameters for one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionParameters {
    /// Weekly duration multiplier in the first week
    pub start_volume_factor: f64,
    /// Weekly duration multiplier in the last week
    pub end_volume_factor: f64,
    /// Target intensity (% `VO2max`) in the first week
    pub start_intensity: f64,
    /// Target intensity (% `VO2max`) in the last week
    pub end_intensity: f64,
}

impl ProgressionParameters {
    /// Parameter row for a tier; sedentary and beginner share the default row
    #[must_use]
    pub const fn for_tier(tier: TrainingTier) -> Self {
        match tier {
            TrainingTier::Sedentary | TrainingTier::Beginner => Self {
                start_volume_factor: 0.8,
                end_volume_factor: 1.2,
                start_intensity: 60.0,
                end_intensity: 70.0,
            },
            TrainingTier::Intermediate => Self {
                start_volume_factor: 0.9,
                end_volume_factor: 1.1,
                start_intensity: 70.0,
                end_intensity: 85.0,
            },
            TrainingTier::Athlete => Self {
                start_volume_factor: 1.0,
                end_volume_factor: 1.0,
                start_intensity: 75.0,
                end_intensity: 95.0,
            },
        }
    }

    fn volume_factor(&self, progress: f64) -> f64 {
        lerp(self.start_volume_factor, self.end_volume_factor, progress)
    }

    fn intensity(&self, progress: f64) -> f64 {
        lerp(self.start_intensity, self.end_intensity, progress)
    }
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    (end - start).mul_add(t, start)
}

/// Validated inputs for a progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionInput {
    /// Coach-assigned tier
    pub tier: TrainingTier,
    /// Linear or undulating
    pub style: PeriodizationStyle,
    /// Weekly training duration (minutes)
    pub weekly_duration_minutes: f64,
    /// Sessions per week
    pub sessions_per_week: u32,
    /// Sessions across the whole plan
    pub total_sessions: u32,
}

impl ProgressionInput {
    /// Validate progression inputs
    ///
    /// # Errors
    ///
    /// Returns a validation error if `sessions_per_week` is zero or
    /// `weekly_duration_minutes` is not a finite, strictly positive number.
    pub fn new(
        tier: TrainingTier,
        style: PeriodizationStyle,
        weekly_duration_minutes: f64,
        sessions_per_week: u32,
        total_sessions: u32,
    ) -> AppResult<Self> {
        if sessions_per_week == 0 {
            return Err(
                AppError::out_of_range("sessions per week must be greater than zero")
                    .with_field("sessions_per_week"),
            );
        }

        if !weekly_duration_minutes.is_finite() || weekly_duration_minutes <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "weekly duration must be a positive number of minutes, got {weekly_duration_minutes}"
            ))
            .with_field("weekly_duration_minutes"));
        }

        Ok(Self {
            tier,
            style,
            weekly_duration_minutes,
            sessions_per_week,
            total_sessions,
        })
    }

    /// Number of weeks the progression spans
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        self.total_sessions.div_ceil(self.sessions_per_week)
    }
}

/// Intensity emphasis of one progression week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntensityFocus {
    /// Single target percentage
    Linear {
        /// Target intensity (% `VO2max`)
        focus_percent: f64,
    },
    /// Target shifted up on even weeks and down on odd weeks
    Undulating {
        /// Shifted target intensity (% `VO2max`)
        varied_percent: f64,
    },
    /// Mostly easy sessions with one hard session
    SplitUndulating {
        /// Intensity of the two easy sessions
        easy_percent: f64,
        /// Intensity of the hard session
        hard_percent: f64,
    },
}

impl IntensityFocus {
    /// Percentage a display should highlight in the intensity table
    #[must_use]
    pub fn highlight_percent(&self) -> u32 {
        match self {
            Self::Linear { focus_percent } => whole_percent(*focus_percent),
            Self::Undulating { varied_percent } => whole_percent(*varied_percent),
            Self::SplitUndulating { easy_percent, .. } => whole_percent(*easy_percent),
        }
    }
}

fn whole_percent(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

impl fmt::Display for IntensityFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { focus_percent } => {
                write!(f, "Linear (focus ~{}%)", focus_percent.round())
            }
            Self::Undulating { varied_percent } => {
                write!(f, "Undulating (varied ~{}%)", varied_percent.round())
            }
            Self::SplitUndulating {
                easy_percent,
                hard_percent,
            } => write!(
                f,
                "Undulating (e.g. 2x {}%, 1x {}%)",
                easy_percent.round(),
                hard_percent.round()
            ),
        }
    }
}

/// One week of a progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionWeek {
    /// 1-based week number
    pub week_number: u32,
    /// Planned weekly volume rounded to whole minutes
    pub planned_volume_minutes: u32,
    /// Interpolated target intensity (% `VO2max`)
    pub target_intensity_percent: f64,
    /// Intensity emphasis for the week
    pub focus: IntensityFocus,
}

impl ProgressionWeek {
    /// Human-readable focus description
    #[must_use]
    pub fn intensity_focus_description(&self) -> String {
        self.focus.to_string()
    }
}

/// Builds progressions with the configured undulation tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionBuilder {
    undulation_amplitude: f64,
    split_easy_fraction: f64,
}

impl Default for ProgressionBuilder {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl ProgressionBuilder {
    /// Create a builder from planner tunables
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self {
            undulation_amplitude: config.undulation_amplitude_percent,
            split_easy_fraction: config.split_easy_fraction,
        }
    }

    /// Expand validated inputs into weeks
    ///
    /// Zero total sessions yields an empty progression.
    #[must_use]
    pub fn build(&self, input: &ProgressionInput) -> Vec<ProgressionWeek> {
        let params = ProgressionParameters::for_tier(input.tier);
        let total_weeks = input.total_weeks();

        let weeks: Vec<ProgressionWeek> = (1..=total_weeks)
            .map(|week| {
                let progress = if total_weeks > 1 {
                    f64::from(week - 1) / f64::from(total_weeks - 1)
                } else {
                    1.0
                };
                let volume = input.weekly_duration_minutes * params.volume_factor(progress);
                let intensity = params.intensity(progress);

                ProgressionWeek {
                    week_number: week,
                    planned_volume_minutes: volume.round().max(0.0) as u32,
                    target_intensity_percent: intensity,
                    focus: self.focus_for(input, &params, week, intensity),
                }
            })
            .collect();

        debug!(
            tier = %input.tier,
            style = %input.style,
            total_weeks,
            "Built progression"
        );
        weeks
    }

    fn focus_for(
        &self,
        input: &ProgressionInput,
        params: &ProgressionParameters,
        week: u32,
        intensity: f64,
    ) -> IntensityFocus {
        match (input.style, input.tier) {
            (PeriodizationStyle::Linear, _) => IntensityFocus::Linear {
                focus_percent: intensity,
            },
            (PeriodizationStyle::Undulating, TrainingTier::Athlete) => {
                IntensityFocus::SplitUndulating {
                    easy_percent: lerp(params.start_intensity, intensity, self.split_easy_fraction),
                    hard_percent: intensity,
                }
            }
            (PeriodizationStyle::Undulating, _) => {
                let shift = if week % 2 == 0 {
                    self.undulation_amplitude
                } else {
                    -self.undulation_amplitude
                };
                IntensityFocus::Undulating {
                    varied_percent: intensity + shift,
                }
            }
        }
    }
}

/// Build a progression with default tunables
///
/// # Errors
///
/// Returns a validation error if `sessions_per_week` is zero or
/// `weekly_duration_minutes` is not strictly positive. No partial sequence is
/// produced.
///
/// # Example
///
/// ```rust
/// use vianna_core::models::{PeriodizationStyle, TrainingTier};
/// use vianna_intelligence::progression::build_progression;
///
/// let weeks = build_progression(
///     TrainingTier::Intermediate,
///     PeriodizationStyle::Linear,
///     360.0,
///     5,
///     60,
/// )?;
/// assert_eq!(weeks.len(), 12);
/// assert_eq!(weeks[0].planned_volume_minutes, 324);
/// # Ok::<(), vianna_core::errors::AppError>(())
/// ```
pub fn build_progression(
    tier: TrainingTier,
    style: PeriodizationStyle,
    weekly_duration_minutes: f64,
    sessions_per_week: u32,
    total_sessions: u32,
) -> AppResult<Vec<ProgressionWeek>> {
    let input = ProgressionInput::new(
        tier,
        style,
        weekly_duration_minutes,
        sessions_per_week,
        total_sessions,
    )?;
    Ok(ProgressionBuilder::default().build(&input))
}

/// `(week, minutes)` points for a volume chart
#[must_use]
pub fn volume_series(weeks: &[ProgressionWeek]) -> Vec<(u32, u32)> {
    weeks
        .iter()
        .map(|week| (week.week_number, week.planned_volume_minutes))
        .collect()
}

/// Total planned hours across a semester, rounded to two decimals
#[must_use]
pub fn planned_semester_hours(avg_session_minutes: f64, total_sessions: u32) -> f64 {
    let hours = avg_session_minutes * f64::from(total_sessions) / MINUTES_PER_HOUR;
    (hours * 100.0).round() / 100.0
}
