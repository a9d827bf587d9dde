// ABOUTME: Integration tests for macrocycle expansion into a master plan
// ABOUTME: Verifies week numbering, minute apportioning, skipped months, and template validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vianna_coach::errors::ErrorCode;
use vianna_coach::intelligence::macrocycle::{
    default_assignments, expand_master_plan, MacroTemplate, MesocycleCatalog, MicrocycleCode,
    MonthAssignment, SkipReason, DEFAULT_MESOCYCLE_ID,
};

fn stabilizer_months(sessions: u32) -> Vec<MonthAssignment> {
    (0..6)
        .map(|_| MonthAssignment::new("stabilizer", sessions))
        .collect()
}

#[test]
fn test_full_plan_numbers_weeks_contiguously() {
    let plan = expand_master_plan(
        75.0,
        &MacroTemplate::vianna_six_month(),
        &stabilizer_months(3),
        &MesocycleCatalog::standard(),
    )
    .unwrap();

    assert_eq!(plan.weeks.len(), 24);
    assert!(!plan.is_partial());
    let numbers: Vec<u32> = plan.weeks.iter().map(|w| w.global_week_number).collect();
    assert_eq!(numbers, (1..=24).collect::<Vec<_>>());
}

#[test]
fn test_weekly_minutes_follow_template_share() {
    let template = MacroTemplate::vianna_six_month();
    let plan = expand_master_plan(
        75.0,
        &template,
        &stabilizer_months(3),
        &MesocycleCatalog::standard(),
    )
    .unwrap();

    for week in &plan.weeks {
        let month_percent = template.percentages[(week.month - 1) as usize];
        let expected = (75.0 / 510.0 * month_percent * 0.25 * 60.0).round() as u32;
        assert_eq!(week.weekly_volume_minutes, expected, "week {}", week.global_week_number);
        assert_eq!(week.sessions_per_week, 3);
        assert_eq!(week.microcycle_label, "25% (Est)");
        assert_eq!(week.mesocycle_name, "Stabilizer");
    }

    // Month 1 at 70 points and month 4 at 100 points
    assert_eq!(plan.weeks[0].weekly_volume_minutes, 154);
    assert_eq!(plan.weeks[0].per_session_volume_minutes, 51);
    assert_eq!(plan.weeks[12].weekly_volume_minutes, 221);
    assert_eq!(plan.weeks[12].per_session_volume_minutes, 74);
}

#[test]
fn test_week_within_month_cycles() {
    let plan = expand_master_plan(
        100.0,
        &MacroTemplate::vianna_six_month(),
        &default_assignments(6, 4),
        &MesocycleCatalog::standard(),
    )
    .unwrap();

    for (index, week) in plan.weeks.iter().enumerate() {
        assert_eq!(week.month, (index / 4) as u32 + 1);
        assert_eq!(week.week_within_month, (index % 4) as u32 + 1);
        assert_eq!(week.mesocycle_name, "Acquisition-I");
    }
    assert_eq!(plan.weeks[0].microcycle_label, "20% (Adp)");
    assert_eq!(plan.weeks[3].microcycle_label, "25% (Rec)");
}

#[test]
fn test_unknown_mesocycle_month_is_skipped() {
    let mut months = stabilizer_months(3);
    months[2] = MonthAssignment::new("does_not_exist", 3);

    let plan = expand_master_plan(
        75.0,
        &MacroTemplate::vianna_six_month(),
        &months,
        &MesocycleCatalog::standard(),
    )
    .unwrap();

    assert_eq!(plan.weeks.len(), 20);
    assert!(plan.is_partial());
    assert_eq!(plan.skipped.len(), 1);
    assert_eq!(plan.skipped[0].month, 3);
    assert_eq!(
        plan.skipped[0].reason,
        SkipReason::UnknownMesocycle {
            mesocycle_id: "does_not_exist".to_owned()
        }
    );

    // Numbering stays contiguous across the gap
    assert_eq!(plan.weeks[8].month, 4);
    assert_eq!(plan.weeks[8].global_week_number, 9);
}

#[test]
fn test_zero_sessions_month_is_skipped() {
    let mut months = stabilizer_months(3);
    months[0] = MonthAssignment::new("stabilizer", 0);

    let plan = expand_master_plan(
        75.0,
        &MacroTemplate::vianna_six_month(),
        &months,
        &MesocycleCatalog::standard(),
    )
    .unwrap();

    assert_eq!(plan.weeks.len(), 20);
    assert_eq!(plan.skipped[0].month, 1);
    assert_eq!(plan.skipped[0].reason, SkipReason::NoSessions);
    assert_eq!(plan.weeks[0].month, 2);
}

#[test]
fn test_transitional_month_has_zero_volume() {
    let mut months = stabilizer_months(3);
    months[5] = MonthAssignment::new("transitional", 3);

    let plan = expand_master_plan(
        75.0,
        &MacroTemplate::vianna_six_month(),
        &months,
        &MesocycleCatalog::standard(),
    )
    .unwrap();

    let last_month: Vec<_> = plan.weeks.iter().filter(|week| week.month == 6).collect();
    assert_eq!(last_month.len(), 4);
    assert!(last_month
        .iter()
        .all(|week| week.weekly_volume_minutes == 0 && week.per_session_volume_minutes == 0));
}

#[test]
fn test_shorter_assignment_list_limits_plan() {
    let plan = expand_master_plan(
        75.0,
        &MacroTemplate::vianna_six_month(),
        &default_assignments(2, 3),
        &MesocycleCatalog::standard(),
    )
    .unwrap();
    assert_eq!(plan.weeks.len(), 8);
}

#[test]
fn test_zero_percentage_template_is_rejected() {
    let template = MacroTemplate {
        id: "flat".to_owned(),
        name: "Flat".to_owned(),
        percentages: vec![0.0; 6],
    };
    let error = expand_master_plan(
        75.0,
        &template,
        &stabilizer_months(3),
        &MesocycleCatalog::standard(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.field.as_deref(), Some("macro_template"));
}

#[test]
fn test_empty_custom_template_is_rejected() {
    let error = expand_master_plan(
        75.0,
        &MacroTemplate::custom(),
        &[],
        &MesocycleCatalog::standard(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_target_hours_is_rejected() {
    let error = expand_master_plan(
        -1.0,
        &MacroTemplate::vianna_six_month(),
        &stabilizer_months(3),
        &MesocycleCatalog::standard(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_standard_catalog_contents() {
    let catalog = MesocycleCatalog::standard();
    let ids: Vec<&str> = catalog.templates().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "acquisition_1",
            "acquisition_2",
            "transformation_1",
            "transformation_2",
            "realization",
            "stabilizer",
            "transitional"
        ]
    );
    assert_eq!(catalog.find(DEFAULT_MESOCYCLE_ID).unwrap().name, "Acquisition-I");

    let realization = catalog.find("realization").unwrap();
    let labels: Vec<String> = realization.microcycles.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["26% (Int)", "24% (Est)", "26% (Int)", "24% (Rec)"]);
}

#[test]
fn test_standard_catalog_weeks() {
    use MicrocycleCode::{Adp, Est, Int, Rec, Trs};

    let expected: [(&str, &str, [(u32, MicrocycleCode); 4]); 7] = [
        ("acquisition_1", "Acquisition-I", [(20, Adp), (25, Int), (30, Int), (25, Rec)]),
        ("acquisition_2", "Acquisition-II", [(22, Adp), (26, Int), (30, Int), (22, Rec)]),
        ("transformation_1", "Transformation-I", [(25, Est), (25, Int), (28, Int), (22, Rec)]),
        ("transformation_2", "Transformation-II", [(26, Int), (24, Est), (28, Int), (22, Rec)]),
        ("realization", "Realization", [(26, Int), (24, Est), (26, Int), (24, Rec)]),
        ("stabilizer", "Stabilizer", [(25, Est); 4]),
        ("transitional", "Transitional", [(0, Trs); 4]),
    ];

    let catalog = MesocycleCatalog::standard();
    assert_eq!(catalog.templates().len(), expected.len());
    for (id, name, weeks) in expected {
        let mesocycle = catalog.find(id).unwrap();
        assert_eq!(mesocycle.name, name);
        let actual: Vec<(u32, MicrocycleCode)> = mesocycle
            .microcycles
            .iter()
            .map(|m| (m.percent, m.code))
            .collect();
        assert_eq!(actual, weeks.to_vec(), "weeks of {id}");
    }
}

#[test]
fn test_microcycle_code_descriptions() {
    let described: Vec<(&str, &str)> = MicrocycleCode::ALL
        .iter()
        .map(|code| (code.code(), code.description()))
        .collect();
    assert_eq!(
        described,
        vec![
            ("Adp", "Adaptation"),
            ("Int", "Intensive"),
            ("Est", "Stabilizing"),
            ("Rec", "Recovery"),
            ("Trs", "Transition"),
        ]
    );
}

#[test]
fn test_macro_template_catalog() {
    let template = MacroTemplate::find("vianna_6").unwrap();
    assert_eq!(template.months(), 6);
    assert!((template.percentage_sum() - 510.0).abs() < f64::EPSILON);
    assert!(MacroTemplate::find("custom").unwrap().percentages.is_empty());
    assert!(MacroTemplate::find("unknown").is_none());
}
