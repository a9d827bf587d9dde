// ABOUTME: Periodization summary joining progression weeks with planned sessions
// ABOUTME: Per-week focus label plus each planned session in order with its totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

use crate::progression::ProgressionWeek;
use crate::sessions::{PlannedSessions, SessionBlock, SessionBlocks, SessionKey, SessionTotals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One planned session inside a week summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Slot of the session
    pub key: SessionKey,
    /// Summed duration and distance
    pub totals: SessionTotals,
    /// Blocks in order
    pub blocks: Vec<SessionBlock>,
}

/// One progression week with the sessions planned for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// 1-based week number
    pub week_number: u32,
    /// Planned weekly volume (minutes)
    pub planned_volume_minutes: u32,
    /// Focus description of the week
    pub focus_label: String,
    /// Planned sessions in session order, empty when none were built
    pub sessions: Vec<SessionSummary>,
}

/// Summarize every progression week with its planned sessions
///
/// Sessions stored for weeks outside the progression are not reported.
#[must_use]
pub fn summarize(progression: &[ProgressionWeek], planned: &PlannedSessions) -> Vec<WeekSummary> {
    let summary: Vec<WeekSummary> = progression
        .iter()
        .map(|week| WeekSummary {
            week_number: week.week_number,
            planned_volume_minutes: week.planned_volume_minutes,
            focus_label: week.intensity_focus_description(),
            sessions: planned
                .for_week(week.week_number)
                .map(|(key, blocks)| SessionSummary {
                    key,
                    totals: blocks.totals(),
                    blocks: blocks.to_vec(),
                })
                .collect(),
        })
        .collect();

    debug!(
        weeks = summary.len(),
        planned_sessions = planned.len(),
        "Summarized periodization"
    );
    summary
}
