// ABOUTME: Integration tests for week-by-week progression generation
// ABOUTME: Covers linear ramps, undulating shifts, athlete splits, validation, and semester hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vianna_coach::errors::ErrorCode;
use vianna_coach::intelligence::progression::{
    build_progression, planned_semester_hours, volume_series, IntensityFocus,
    ProgressionBuilder, ProgressionInput,
};
use vianna_coach::models::{PeriodizationStyle, TrainingTier};
use vianna_coach::PlannerConfig;

#[test]
fn test_intermediate_linear_progression() {
    let weeks = build_progression(
        TrainingTier::Intermediate,
        PeriodizationStyle::Linear,
        360.0,
        5,
        60,
    )
    .unwrap();

    assert_eq!(weeks.len(), 12);
    assert_eq!(weeks[0].week_number, 1);
    assert_eq!(weeks[0].planned_volume_minutes, 324);
    assert_eq!(weeks[11].planned_volume_minutes, 396);
    assert!((weeks[0].target_intensity_percent - 70.0).abs() < 1e-9);
    assert!((weeks[11].target_intensity_percent - 85.0).abs() < 1e-9);
    assert_eq!(weeks[0].intensity_focus_description(), "Linear (focus ~70%)");
    assert_eq!(weeks[11].intensity_focus_description(), "Linear (focus ~85%)");
}

#[test]
fn test_week_count_rounds_up() {
    let weeks = build_progression(
        TrainingTier::Beginner,
        PeriodizationStyle::Linear,
        240.0,
        4,
        37,
    )
    .unwrap();
    assert_eq!(weeks.len(), 10);
}

#[test]
fn test_intensity_increases_monotonically() {
    let weeks = build_progression(
        TrainingTier::Sedentary,
        PeriodizationStyle::Linear,
        150.0,
        3,
        48,
    )
    .unwrap();

    assert!(weeks
        .windows(2)
        .all(|pair| pair[0].target_intensity_percent < pair[1].target_intensity_percent));
    assert!(weeks
        .windows(2)
        .all(|pair| pair[0].planned_volume_minutes <= pair[1].planned_volume_minutes));
}

#[test]
fn test_single_week_uses_end_parameters() {
    let weeks = build_progression(
        TrainingTier::Intermediate,
        PeriodizationStyle::Linear,
        360.0,
        5,
        5,
    )
    .unwrap();

    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].planned_volume_minutes, 396);
    assert!((weeks[0].target_intensity_percent - 85.0).abs() < 1e-9);
}

#[test]
fn test_athlete_volume_is_flat() {
    let weeks = build_progression(
        TrainingTier::Athlete,
        PeriodizationStyle::Linear,
        480.0,
        5,
        50,
    )
    .unwrap();
    assert!(weeks.iter().all(|week| week.planned_volume_minutes == 480));
}

#[test]
fn test_undulating_alternates_around_target() {
    let weeks = build_progression(
        TrainingTier::Intermediate,
        PeriodizationStyle::Undulating,
        360.0,
        5,
        60,
    )
    .unwrap();

    for week in &weeks {
        let IntensityFocus::Undulating { varied_percent } = week.focus else {
            panic!("expected undulating focus for week {}", week.week_number);
        };
        let shift = if week.week_number % 2 == 0 { 5.0 } else { -5.0 };
        assert!((varied_percent - (week.target_intensity_percent + shift)).abs() < 1e-9);
    }
    assert_eq!(weeks[0].intensity_focus_description(), "Undulating (varied ~65%)");
}

#[test]
fn test_athlete_undulating_splits_easy_and_hard() {
    let weeks = build_progression(
        TrainingTier::Athlete,
        PeriodizationStyle::Undulating,
        480.0,
        5,
        50,
    )
    .unwrap();

    let last = weeks.last().unwrap();
    let IntensityFocus::SplitUndulating {
        easy_percent,
        hard_percent,
    } = last.focus
    else {
        panic!("expected a split focus");
    };
    assert!((hard_percent - 95.0).abs() < 1e-9);
    assert!((easy_percent - 85.0).abs() < 1e-9);
    assert_eq!(
        last.intensity_focus_description(),
        "Undulating (e.g. 2x 85%, 1x 95%)"
    );
    assert_eq!(last.focus.highlight_percent(), 85);
}

#[test]
fn test_configured_amplitude_is_used() {
    let config = PlannerConfig {
        undulation_amplitude_percent: 10.0,
        ..PlannerConfig::default()
    };
    let input = ProgressionInput::new(
        TrainingTier::Beginner,
        PeriodizationStyle::Undulating,
        240.0,
        4,
        8,
    )
    .unwrap();
    let weeks = ProgressionBuilder::from_config(&config).build(&input);

    let IntensityFocus::Undulating { varied_percent } = weeks[1].focus else {
        panic!("expected undulating focus");
    };
    assert!((varied_percent - 80.0).abs() < 1e-9);
}

#[test]
fn test_zero_sessions_per_week_is_rejected() {
    let error = build_progression(
        TrainingTier::Beginner,
        PeriodizationStyle::Linear,
        240.0,
        0,
        40,
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.field.as_deref(), Some("sessions_per_week"));
}

#[test]
fn test_non_positive_duration_is_rejected() {
    for minutes in [0.0, -30.0, f64::NAN] {
        let error = build_progression(
            TrainingTier::Beginner,
            PeriodizationStyle::Linear,
            minutes,
            4,
            40,
        )
        .unwrap_err();
        assert_eq!(error.context.field.as_deref(), Some("weekly_duration_minutes"));
    }
}

#[test]
fn test_zero_total_sessions_yields_empty_progression() {
    let weeks = build_progression(
        TrainingTier::Beginner,
        PeriodizationStyle::Linear,
        240.0,
        4,
        0,
    )
    .unwrap();
    assert!(weeks.is_empty());
}

#[test]
fn test_volume_series_matches_weeks() {
    let weeks = build_progression(
        TrainingTier::Intermediate,
        PeriodizationStyle::Linear,
        360.0,
        5,
        60,
    )
    .unwrap();
    let series = volume_series(&weeks);

    assert_eq!(series.len(), 12);
    assert_eq!(series[0], (1, 324));
    assert_eq!(series[11], (12, 396));
}

#[test]
fn test_planned_semester_hours() {
    assert!((planned_semester_hours(60.0, 60) - 60.0).abs() < 1e-9);
    assert!((planned_semester_hours(50.0, 37) - 30.83).abs() < 1e-9);
    assert!(planned_semester_hours(60.0, 0).abs() < f64::EPSILON);
}
