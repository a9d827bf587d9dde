// ABOUTME: Record shapes exchanged with the storage collaborator
// ABOUTME: Active progression, session block, and master plan records with JSON blob encode/decode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Persistence Records
//!
//! The storage collaborator keeps one active progression and one master plan
//! per student, plus one block list per (student, week, session). Computed
//! sequences travel as independently serialized JSON blobs so that each
//! section can be loaded without the others. Writes are last-write-wins.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;
use vianna_core::errors::{AppError, AppResult};
use vianna_core::models::{PeriodizationStyle, TrainingTier};
use vianna_intelligence::macrocycle::{
    expand_master_plan, MacroTemplate, MasterPlan, MasterPlanWeek, MesocycleCatalog,
    MonthAssignment,
};
use vianna_intelligence::progression::{ProgressionInput, ProgressionWeek};
use vianna_intelligence::sessions::{PlannedSessions, SessionBlock, SessionKey};

/// The single active progression of a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveProgressionRecord {
    /// Owning student
    pub student_id: Uuid,
    /// Progression style
    pub style: PeriodizationStyle,
    /// Tier the progression was built for
    pub tier: TrainingTier,
    /// Planned hours across the semester
    pub semester_hours: f64,
    /// Weekly duration (minutes)
    pub weekly_duration_minutes: f64,
    /// Sessions per week
    pub sessions_per_week: u32,
    /// Sessions across the plan
    pub total_sessions: u32,
    /// Serialized `Vec<ProgressionWeek>`
    pub progression_json: String,
}

impl ActiveProgressionRecord {
    /// Build the record for a computed progression
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the weeks cannot be encoded
    pub fn from_progression(
        student_id: Uuid,
        input: &ProgressionInput,
        semester_hours: f64,
        weeks: &[ProgressionWeek],
    ) -> AppResult<Self> {
        Ok(Self {
            student_id,
            style: input.style,
            tier: input.tier,
            semester_hours,
            weekly_duration_minutes: input.weekly_duration_minutes,
            sessions_per_week: input.sessions_per_week,
            total_sessions: input.total_sessions,
            progression_json: serde_json::to_string(weeks)?,
        })
    }

    /// Decode the stored weeks
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the blob is malformed
    pub fn weeks(&self) -> AppResult<Vec<ProgressionWeek>> {
        decode_blob(&self.progression_json, "progression_json", self.student_id)
    }

    /// Revalidate the scalar inputs that produced the progression
    ///
    /// # Errors
    ///
    /// Returns a validation error if the stored inputs are no longer valid
    pub fn input(&self) -> AppResult<ProgressionInput> {
        ProgressionInput::new(
            self.tier,
            self.style,
            self.weekly_duration_minutes,
            self.sessions_per_week,
            self.total_sessions,
        )
        .map_err(|error| error.with_student_id(self.student_id))
    }
}

/// Block list of one session slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Owning student
    pub student_id: Uuid,
    /// 1-based week
    pub week: u32,
    /// 1-based session within the week
    pub session: u32,
    /// Serialized `Vec<SessionBlock>`
    pub blocks_json: String,
}

impl SessionRecord {
    /// Build the record for a slot
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the blocks cannot be encoded
    pub fn from_blocks(
        student_id: Uuid,
        key: SessionKey,
        blocks: &[SessionBlock],
    ) -> AppResult<Self> {
        Ok(Self {
            student_id,
            week: key.week,
            session: key.session,
            blocks_json: serde_json::to_string(blocks)?,
        })
    }

    /// Slot key
    #[must_use]
    pub const fn key(&self) -> SessionKey {
        SessionKey::new(self.week, self.session)
    }

    /// Decode the stored blocks
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the blob is malformed
    pub fn blocks(&self) -> AppResult<Vec<SessionBlock>> {
        decode_blob(&self.blocks_json, "blocks_json", self.student_id)
    }
}

/// Rebuild planned sessions from stored records; later records win per slot
///
/// # Errors
///
/// Returns `SerializationError` for the first malformed record
pub fn planned_sessions(records: &[SessionRecord]) -> AppResult<PlannedSessions> {
    let mut planned = PlannedSessions::new();
    for record in records {
        planned.insert(record.key(), record.blocks()?);
    }
    Ok(planned)
}

/// Scalar inputs of a master plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterPlanSettings {
    /// Tier the plan was sized for
    pub tier: TrainingTier,
    /// Target hours across the macrocycle
    pub target_hours: f64,
    /// Macrocycle length (months)
    pub duration_months: u32,
    /// Id of the macro template
    pub template_id: String,
}

impl MasterPlanSettings {
    /// Resolve the macro template
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown template id
    pub fn template(&self) -> AppResult<MacroTemplate> {
        MacroTemplate::find(&self.template_id)
            .ok_or_else(|| AppError::not_found(format!("macro template '{}'", self.template_id)))
    }

    /// Whether the target hours sit inside the tier's macrocycle band
    #[must_use]
    pub fn within_tier_band(&self) -> bool {
        self.tier.profile().macrocycle_hours.contains(self.target_hours)
    }

    /// Expand the plan described by these settings
    ///
    /// Only the first `duration_months` assignments are expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or the expansion rejects
    /// its inputs
    pub fn expand(
        &self,
        assignments: &[MonthAssignment],
        catalog: &MesocycleCatalog,
    ) -> AppResult<MasterPlan> {
        let template = self.template()?;
        if !self.within_tier_band() {
            warn!(
                tier = %self.tier,
                target_hours = self.target_hours,
                band = %self.tier.profile().macrocycle_hours,
                "Target hours outside the tier's macrocycle band"
            );
        }

        let months = usize::try_from(self.duration_months)
            .unwrap_or(usize::MAX)
            .min(assignments.len());
        expand_master_plan(self.target_hours, &template, &assignments[..months], catalog)
    }
}

/// The single master plan of a student, stored as three independent blobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterPlanRecord {
    /// Owning student
    pub student_id: Uuid,
    /// Serialized [`MasterPlanSettings`]
    pub settings_json: String,
    /// Serialized `Vec<MonthAssignment>`
    pub assignments_json: String,
    /// Serialized `Vec<MasterPlanWeek>`
    pub weeks_json: String,
}

impl MasterPlanRecord {
    /// Build the record for a computed plan
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if a section cannot be encoded
    pub fn from_plan(
        student_id: Uuid,
        settings: &MasterPlanSettings,
        assignments: &[MonthAssignment],
        weeks: &[MasterPlanWeek],
    ) -> AppResult<Self> {
        Ok(Self {
            student_id,
            settings_json: serde_json::to_string(settings)?,
            assignments_json: serde_json::to_string(assignments)?,
            weeks_json: serde_json::to_string(weeks)?,
        })
    }

    /// Decode the settings section
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the blob is malformed
    pub fn settings(&self) -> AppResult<MasterPlanSettings> {
        decode_blob(&self.settings_json, "settings_json", self.student_id)
    }

    /// Decode the month assignments section
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the blob is malformed
    pub fn assignments(&self) -> AppResult<Vec<MonthAssignment>> {
        decode_blob(&self.assignments_json, "assignments_json", self.student_id)
    }

    /// Decode the computed weeks section
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the blob is malformed
    pub fn weeks(&self) -> AppResult<Vec<MasterPlanWeek>> {
        decode_blob(&self.weeks_json, "weeks_json", self.student_id)
    }
}

fn decode_blob<T>(blob: &str, field: &str, student_id: Uuid) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(blob)
        .map_err(|error| AppError::from(error).with_field(field).with_student_id(student_id))
}
