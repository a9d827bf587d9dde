// ABOUTME: Coach-assigned training tiers and periodization style selection
// ABOUTME: TrainingTier, PeriodizationStyle, and per-tier form defaults and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Training-experience band assigned by the coach
///
/// Drives the progression parameter table. Sedentary and beginner students
/// share the default parameter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingTier {
    /// No regular training history
    #[default]
    Sedentary,
    /// Recently started training
    Beginner,
    /// Consistent training for several months
    Intermediate,
    /// Recreational athlete
    Athlete,
}

impl TrainingTier {
    /// All tiers in presentation order
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::Beginner,
        Self::Intermediate,
        Self::Athlete,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Athlete => "athlete",
        }
    }

    /// Human-readable tier name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary Student",
            Self::Beginner => "Beginner Student",
            Self::Intermediate => "Intermediate Student",
            Self::Athlete => "Recreational Athlete",
        }
    }

    /// Form defaults and recommendations for this tier
    #[must_use]
    pub const fn profile(&self) -> TierProfile {
        match self {
            Self::Sedentary => TierProfile {
                default_weekly_minutes: 150,
                default_session_minutes: 50,
                default_sessions_per_week: 3,
                recommended_sessions_per_week: (2, 5),
                recommended_semester_hours: HoursRange::between(50, 75),
                macrocycle_hours: HoursRange::between(50, 99),
            },
            Self::Beginner => TierProfile {
                default_weekly_minutes: 240,
                default_session_minutes: 60,
                default_sessions_per_week: 4,
                recommended_sessions_per_week: (3, 5),
                recommended_semester_hours: HoursRange::between(100, 150),
                macrocycle_hours: HoursRange::between(100, 149),
            },
            Self::Intermediate => TierProfile {
                default_weekly_minutes: 360,
                default_session_minutes: 60,
                default_sessions_per_week: 5,
                recommended_sessions_per_week: (4, 6),
                recommended_semester_hours: HoursRange::between(150, 180),
                macrocycle_hours: HoursRange::between(150, 199),
            },
            Self::Athlete => TierProfile {
                default_weekly_minutes: 480,
                default_session_minutes: 60,
                default_sessions_per_week: 5,
                recommended_sessions_per_week: (5, 8),
                recommended_semester_hours: HoursRange::at_least(200),
                macrocycle_hours: HoursRange::at_least(200),
            },
        }
    }
}

impl fmt::Display for TrainingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TrainingTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "athlete" => Ok(Self::Athlete),
            other => Err(AppError::invalid_input(format!(
                "Unknown training tier: '{other}'. Valid options: sedentary, beginner, intermediate, athlete"
            ))),
        }
    }
}

/// Volume/intensity progression style across the weeks of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationStyle {
    /// Single target intensity that ramps week over week
    #[default]
    Linear,
    /// Alternating emphasis around the ramped intensity
    Undulating,
}

impl fmt::Display for PeriodizationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Undulating => f.write_str("undulating"),
        }
    }
}

impl FromStr for PeriodizationStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "undulating" => Ok(Self::Undulating),
            other => Err(AppError::invalid_input(format!(
                "Unknown periodization style: '{other}'. Valid options: linear, undulating"
            ))),
        }
    }
}

/// Inclusive range of training hours; `max` is open-ended when `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursRange {
    /// Lower bound (hours)
    pub min: u32,
    /// Upper bound (hours), `None` for "or more"
    pub max: Option<u32>,
}

impl HoursRange {
    /// Closed range
    #[must_use]
    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Open-ended range
    #[must_use]
    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Whether `hours` falls inside the range
    #[must_use]
    pub fn contains(&self, hours: f64) -> bool {
        hours >= f64::from(self.min) && self.max.is_none_or(|max| hours <= f64::from(max))
    }
}

impl fmt::Display for HoursRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{} - {max}", self.min),
            None => write!(f, ">= {}", self.min),
        }
    }
}

/// Form defaults and coaching recommendations attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProfile {
    /// Suggested weekly training duration (minutes)
    pub default_weekly_minutes: u32,
    /// Suggested average session duration (minutes)
    pub default_session_minutes: u32,
    /// Suggested sessions per week
    pub default_sessions_per_week: u32,
    /// Recommended sessions per week (min, max)
    pub recommended_sessions_per_week: (u32, u32),
    /// Recommended total hours across a semester progression
    pub recommended_semester_hours: HoursRange,
    /// Target-hours band for a full macrocycle plan
    pub macrocycle_hours: HoursRange,
}
