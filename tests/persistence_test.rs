// ABOUTME: Integration tests for stored record shapes
// ABOUTME: Covers progression, session, and master plan records and malformed blobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use uuid::Uuid;
use vianna_coach::errors::ErrorCode;
use vianna_coach::intelligence::intensity::build_intensity_table;
use vianna_coach::intelligence::macrocycle::{MesocycleCatalog, MonthAssignment};
use vianna_coach::intelligence::progression::{ProgressionBuilder, ProgressionInput};
use vianna_coach::intelligence::sessions::{
    add_block, BlockId, BlockSpec, MainTarget, SessionBlock, SessionKey,
};
use vianna_coach::models::{PeriodizationStyle, TrainingTier};
use vianna_coach::persistence::{
    planned_sessions, ActiveProgressionRecord, MasterPlanRecord, MasterPlanSettings,
    SessionRecord,
};

fn blocks() -> Vec<SessionBlock> {
    let table = build_intensity_table(50.0, 1000.0);
    let warmup = add_block(
        &[],
        BlockSpec::Warmup {
            duration_minutes: 10.0,
            description: Some("Jog".into()),
        },
        &table,
    )
    .unwrap();
    add_block(
        &warmup,
        BlockSpec::Main {
            intensity_label: "90%".into(),
            target: MainTarget::Duration { minutes: 15.0 },
        },
        &table,
    )
    .unwrap()
}

#[test]
fn test_progression_record_restores_weeks() {
    let student_id = Uuid::new_v4();
    let input = ProgressionInput::new(
        TrainingTier::Intermediate,
        PeriodizationStyle::Undulating,
        360.0,
        5,
        60,
    )
    .unwrap();
    let weeks = ProgressionBuilder::default().build(&input);

    let record = ActiveProgressionRecord::from_progression(student_id, &input, 60.0, &weeks)
        .unwrap();
    assert_eq!(record.tier, TrainingTier::Intermediate);
    assert_eq!(record.total_sessions, 60);

    let restored = record.weeks().unwrap();
    let volumes: Vec<u32> = restored.iter().map(|w| w.planned_volume_minutes).collect();
    let expected: Vec<u32> = weeks.iter().map(|w| w.planned_volume_minutes).collect();
    assert_eq!(volumes, expected);

    let labels: Vec<String> = restored
        .iter()
        .map(|w| w.intensity_focus_description())
        .collect();
    let expected: Vec<String> = weeks.iter().map(|w| w.intensity_focus_description()).collect();
    assert_eq!(labels, expected);

    assert_eq!(record.input().unwrap().total_weeks(), 12);
}

#[test]
fn test_progression_record_with_stale_inputs() {
    let input = ProgressionInput::new(
        TrainingTier::Beginner,
        PeriodizationStyle::Linear,
        240.0,
        4,
        40,
    )
    .unwrap();
    let student_id = Uuid::new_v4();
    let mut record =
        ActiveProgressionRecord::from_progression(student_id, &input, 40.0, &[]).unwrap();
    record.sessions_per_week = 0;

    let error = record.input().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.student_id, Some(student_id));
}

#[test]
fn test_session_record_restores_blocks() {
    let student_id = Uuid::new_v4();
    let record = SessionRecord::from_blocks(student_id, SessionKey::new(2, 3), &blocks()).unwrap();
    assert_eq!(record.key(), SessionKey::new(2, 3));

    let restored = record.blocks().unwrap();
    let ids: Vec<BlockId> = restored.iter().map(SessionBlock::id).collect();
    assert_eq!(ids, vec![BlockId(1), BlockId(2)]);
    assert_eq!(restored[0].description(), Some("Jog"));
    assert_eq!(restored[1].label(), "90%");
}

#[test]
fn test_planned_sessions_from_records() {
    let student_id = Uuid::new_v4();
    let records = vec![
        SessionRecord::from_blocks(student_id, SessionKey::new(1, 2), &blocks()).unwrap(),
        SessionRecord::from_blocks(student_id, SessionKey::new(1, 1), &blocks()).unwrap(),
        SessionRecord::from_blocks(student_id, SessionKey::new(1, 1), &blocks()[..1]).unwrap(),
    ];

    let planned = planned_sessions(&records).unwrap();
    assert_eq!(planned.len(), 2);
    assert_eq!(planned.get(&SessionKey::new(1, 1)).unwrap().len(), 1);
}

#[test]
fn test_malformed_blob_reports_field_and_student() {
    let student_id = Uuid::new_v4();
    let record = SessionRecord {
        student_id,
        week: 1,
        session: 1,
        blocks_json: "{not json".into(),
    };

    let error = record.blocks().unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert_eq!(error.context.field.as_deref(), Some("blocks_json"));
    assert_eq!(error.context.student_id, Some(student_id));
    assert!(planned_sessions(&[record]).is_err());
}

#[test]
fn test_master_plan_record_sections() {
    let student_id = Uuid::new_v4();
    let settings = MasterPlanSettings {
        tier: TrainingTier::Sedentary,
        target_hours: 75.0,
        duration_months: 6,
        template_id: "vianna_6".into(),
    };
    let assignments: Vec<MonthAssignment> = (0..6)
        .map(|_| MonthAssignment::new("stabilizer", 3))
        .collect();
    let plan = settings
        .expand(&assignments, &MesocycleCatalog::standard())
        .unwrap();

    let record = MasterPlanRecord::from_plan(student_id, &settings, &assignments, &plan.weeks)
        .unwrap();

    assert_eq!(record.assignments().unwrap(), assignments);
    assert_eq!(record.weeks().unwrap(), plan.weeks);
    let restored = record.settings().unwrap();
    assert_eq!(restored.template_id, "vianna_6");
    assert_eq!(restored.duration_months, 6);
}

#[test]
fn test_unknown_template_in_settings() {
    let settings = MasterPlanSettings {
        tier: TrainingTier::Athlete,
        target_hours: 200.0,
        duration_months: 6,
        template_id: "nine_month".into(),
    };
    let error = settings.template().unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_settings_limit_expansion_to_duration() {
    let settings = MasterPlanSettings {
        tier: TrainingTier::Sedentary,
        target_hours: 75.0,
        duration_months: 3,
        template_id: "vianna_6".into(),
    };
    let assignments: Vec<MonthAssignment> = (0..6)
        .map(|_| MonthAssignment::new("stabilizer", 3))
        .collect();
    let plan = settings
        .expand(&assignments, &MesocycleCatalog::standard())
        .unwrap();

    assert_eq!(plan.weeks.len(), 12);
    assert_eq!(plan.weeks.last().unwrap().month, 3);
    assert!(!plan.is_partial());
}

#[test]
fn test_settings_tier_band() {
    let mut settings = MasterPlanSettings {
        tier: TrainingTier::Beginner,
        target_hours: 120.0,
        duration_months: 6,
        template_id: "vianna_6".into(),
    };
    assert!(settings.within_tier_band());

    settings.target_hours = 150.0;
    assert!(!settings.within_tier_band());

    settings.tier = TrainingTier::Athlete;
    settings.target_hours = 500.0;
    assert!(settings.within_tier_band());
}
