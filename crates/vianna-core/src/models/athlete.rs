// ABOUTME: Student profile records owned by the coach
// ABOUTME: AthleteProfile with birthday-aware age and body-mass-index classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use crate::constants::{bmi, units::CM_PER_METER};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Biological sex as recorded on the student profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

/// Represents a student managed by a coach
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use vianna_core::models::{AthleteProfile, Sex};
///
/// let student = AthleteProfile {
///     id: Uuid::new_v4(),
///     full_name: "Ana Souza".into(),
///     email: Some("ana@example.com".into()),
///     sex: Sex::Female,
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 20),
///     weight_kg: Some(60.0),
///     height_cm: Some(165.0),
/// };
/// assert_eq!(student.bmi(), Some(22.04));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Unique identifier assigned by the persistence layer
    pub id: Uuid,
    /// Full display name
    pub full_name: String,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Recorded sex
    pub sex: Sex,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Body weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Standing height (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl AthleteProfile {
    /// Age in whole years on `today`, one less until the birthday has passed
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let birth = self.date_of_birth?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Body-mass index rounded to two decimals
    ///
    /// `None` when weight or height is missing or not positive.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg.filter(|w| *w > 0.0)?;
        let height_m = self.height_cm.filter(|h| *h > 0.0)? / CM_PER_METER;
        let value = weight / (height_m * height_m);
        Some((value * 100.0).round() / 100.0)
    }

    /// Body-mass-index band, if the index can be computed
    #[must_use]
    pub fn bmi_classification(&self) -> Option<BmiClassification> {
        self.bmi().map(BmiClassification::from_bmi)
    }
}

/// Body-mass-index band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClassification {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 24.9
    Normal,
    /// 24.9 up to 29.9
    Overweight,
    /// 29.9 up to 34.9
    ObesityClassI,
    /// 34.9 up to 39.9
    ObesityClassII,
    /// 39.9 and above
    ObesityClassIII,
}

impl BmiClassification {
    /// Classify a body-mass index
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else if value < bmi::OBESITY_I_BELOW {
            Self::ObesityClassI
        } else if value < bmi::OBESITY_II_BELOW {
            Self::ObesityClassII
        } else {
            Self::ObesityClassIII
        }
    }
}

impl fmt::Display for BmiClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObesityClassI => "Obesity Class I",
            Self::ObesityClassII => "Obesity Class II",
            Self::ObesityClassIII => "Obesity Class III",
        };
        f.write_str(label)
    }
}
