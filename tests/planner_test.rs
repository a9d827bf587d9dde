// ABOUTME: Integration tests for the calculation-input boundary
// ABOUTME: Covers form coercion, tier defaults, VO2max selection, and field-tagged validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use uuid::Uuid;
use vianna_coach::errors::ErrorCode;
use vianna_coach::models::{FitnessTest, PeriodizationStyle, TestProtocol, TrainingTier};
use vianna_coach::planner::{coerce_count, coerce_number, CalculationInput, RawForm};
use vianna_coach::PlannerConfig;

fn form() -> RawForm {
    RawForm {
        tier: Some("intermediate".into()),
        style: Some("linear".into()),
        weekly_duration_minutes: Some("360".into()),
        sessions_per_week: Some("5".into()),
        total_sessions: Some("60".into()),
        ..RawForm::default()
    }
}

fn cooper_test(meters: f64, year: i32, month: u32, day: u32) -> FitnessTest {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    FitnessTest::new(TestProtocol::Cooper, meters, Some(date), date).unwrap()
}

#[test]
fn test_valid_form_produces_input() {
    let config = PlannerConfig::default();
    let input = CalculationInput::from_form(&form(), &[], &config).unwrap();

    assert_eq!(input.progression.tier, TrainingTier::Intermediate);
    assert_eq!(input.progression.style, PeriodizationStyle::Linear);
    assert_eq!(input.progression.sessions_per_week, 5);
    assert_eq!(input.progression.total_weeks(), 12);
    assert!((input.reference_distance_meters - 1000.0).abs() < f64::EPSILON);
    assert!((input.average_session_minutes - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_tier_and_style_use_defaults() {
    let raw = RawForm {
        tier: None,
        style: Some(String::new()),
        ..form()
    };
    let input = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap();
    assert_eq!(input.progression.tier, TrainingTier::Sedentary);
    assert_eq!(input.progression.style, PeriodizationStyle::Linear);
    assert!((input.average_session_minutes - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_latest_test_supplies_vo2max() {
    let tests = vec![
        cooper_test(2200.0, 2025, 1, 5),
        cooper_test(2800.0, 2025, 4, 5),
    ];
    let input = CalculationInput::from_form(&form(), &tests, &PlannerConfig::default()).unwrap();
    assert!((input.vo2max - 51.31).abs() < 0.01);
}

#[test]
fn test_explicit_vo2max_overrides_tests() {
    let raw = RawForm {
        vo2max: Some("44,5".into()),
        ..form()
    };
    let tests = vec![cooper_test(2800.0, 2025, 4, 5)];
    let input = CalculationInput::from_form(&raw, &tests, &PlannerConfig::default()).unwrap();
    assert!((input.vo2max - 44.5).abs() < f64::EPSILON);
}

#[test]
fn test_no_tests_yields_sentinel_table() {
    let config = PlannerConfig::default();
    let output = CalculationInput::from_form(&form(), &[], &config)
        .unwrap()
        .calculate(&config);

    assert_eq!(output.intensity_table.valid_row_count(), 0);
    assert_eq!(output.progression.len(), 12);
    assert!((output.semester_hours - 60.0).abs() < 1e-9);
}

#[test]
fn test_missing_required_field() {
    let raw = RawForm {
        total_sessions: None,
        ..form()
    };
    let error = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.field.as_deref(), Some("total_sessions"));
}

#[test]
fn test_errors_carry_student_id() {
    let student_id = Uuid::new_v4();
    let raw = RawForm {
        student_id: Some(student_id),
        sessions_per_week: Some("0".into()),
        ..form()
    };
    let error = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.student_id, Some(student_id));
    assert_eq!(error.context.field.as_deref(), Some("sessions_per_week"));
}

#[test]
fn test_unknown_tier_is_rejected() {
    let raw = RawForm {
        tier: Some("elite".into()),
        ..form()
    };
    let error = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_vo2max_is_rejected() {
    let raw = RawForm {
        vo2max: Some("-3".into()),
        ..form()
    };
    let error = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap_err();
    assert_eq!(error.context.field.as_deref(), Some("vo2max"));
}

#[test]
fn test_negative_estimate_from_short_test_yields_sentinel_rows() {
    let config = PlannerConfig::default();
    let raw = RawForm {
        tier: Some("sedentary".into()),
        ..form()
    };
    // A Cooper distance under 504.9 m estimates a negative VO2max
    let tests = vec![cooper_test(450.0, 2025, 3, 1)];
    let input = CalculationInput::from_form(&raw, &tests, &config).unwrap();
    assert!(input.vo2max < 0.0);

    let output = input.calculate(&config);
    assert_eq!(output.intensity_table.valid_row_count(), 0);
    assert_eq!(
        output.intensity_table.row("100%").unwrap().pace_display(),
        "---"
    );
    assert_eq!(output.progression.len(), 12);
}

#[test]
fn test_empty_fields_take_tier_defaults() {
    let raw = RawForm {
        tier: Some("athlete".into()),
        weekly_duration_minutes: None,
        sessions_per_week: Some(" ".into()),
        ..form()
    };
    let input = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap();

    assert!((input.progression.weekly_duration_minutes - 480.0).abs() < f64::EPSILON);
    assert_eq!(input.progression.sessions_per_week, 5);
    assert!((input.average_session_minutes - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_sedentary_defaults_without_tier() {
    let raw = RawForm {
        total_sessions: Some("30".into()),
        ..RawForm::default()
    };
    let input = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap();

    assert_eq!(input.progression.tier, TrainingTier::Sedentary);
    assert!((input.progression.weekly_duration_minutes - 150.0).abs() < f64::EPSILON);
    assert_eq!(input.progression.sessions_per_week, 3);
    assert_eq!(input.progression.total_weeks(), 10);
}

#[test]
fn test_reference_distance_override() {
    let raw = RawForm {
        vo2max: Some("50".into()),
        reference_distance_meters: Some("400".into()),
        ..form()
    };
    let input = CalculationInput::from_form(&raw, &[], &PlannerConfig::default()).unwrap();
    let table = input.intensity_table();
    // 400 / 232.5 = 1.72 minutes
    assert_eq!(table.row("100%").unwrap().time_over_distance_display(), "01:43");
}

#[test]
fn test_coerce_number() {
    assert_eq!(coerce_number("x", None).unwrap(), None);
    assert_eq!(coerce_number("x", Some("  ")).unwrap(), None);
    assert_eq!(coerce_number("x", Some("12.5")).unwrap(), Some(12.5));
    assert_eq!(coerce_number("x", Some("12,5")).unwrap(), Some(12.5));

    let error = coerce_number("x", Some("abc")).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(coerce_number("x", Some("inf")).is_err());
}

#[test]
fn test_coerce_count() {
    assert_eq!(coerce_count("n", Some("7")).unwrap(), Some(7));
    assert_eq!(coerce_count("n", Some("0")).unwrap(), Some(0));
    assert_eq!(
        coerce_count("n", Some("2.5")).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        coerce_count("n", Some("-1")).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}
