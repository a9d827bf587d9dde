// ABOUTME: Session block assembly referencing intensity table rows
// ABOUTME: Tagged warm-up/main/cool-down blocks, add/remove by id, totals, and session slot keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vianna Coach Contributors

//! # Session Block Assembler
//!
//! A session is an ordered list of blocks. Main blocks resolve an intensity
//! row and derive either their distance from a duration or their duration
//! from a distance. Warm-up and cool-down blocks carry a free-text
//! description instead. Lists are never mutated in place: every operation
//! returns a new list.

use crate::intensity::{IntensityTable, PaceClock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use vianna_core::constants::display::{NOT_APPLICABLE, NO_DESCRIPTION, UNAVAILABLE};
use vianna_core::errors::{AppError, AppResult, ErrorCode};

/// Identifier of a block, unique within its session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which quantity drove a main block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Duration entered, distance derived
    Duration,
    /// Distance entered, duration derived
    Distance,
}

/// Free-text block used for warm-ups and cool-downs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeBlock {
    /// Block id
    pub id: BlockId,
    /// Duration (minutes)
    pub duration_minutes: f64,
    /// Coach-supplied description
    pub description: String,
}

/// Main-set block tied to an intensity row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainBlock {
    /// Block id
    pub id: BlockId,
    /// Duration (minutes)
    pub duration_minutes: f64,
    /// Distance (meters)
    pub distance_meters: f64,
    /// Label of the intensity row, e.g. `"95%"`
    pub intensity_label: String,
    /// Quantity the coach entered
    pub target: TargetType,
    /// Speed of the intensity row (km/h)
    pub speed_kmh: Option<f64>,
    /// Pace of the intensity row
    pub pace_per_km: Option<PaceClock>,
}

/// One block of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionBlock {
    /// Warm-up
    Warmup(FreeBlock),
    /// Main set
    Main(MainBlock),
    /// Cool-down
    Cooldown(FreeBlock),
}

impl SessionBlock {
    /// Block id
    #[must_use]
    pub const fn id(&self) -> BlockId {
        match self {
            Self::Warmup(block) | Self::Cooldown(block) => block.id,
            Self::Main(block) => block.id,
        }
    }

    /// Block kind name
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Warmup(_) => "warmup",
            Self::Main(_) => "main",
            Self::Cooldown(_) => "cooldown",
        }
    }

    /// Duration (minutes)
    #[must_use]
    pub const fn duration_minutes(&self) -> f64 {
        match self {
            Self::Warmup(block) | Self::Cooldown(block) => block.duration_minutes,
            Self::Main(block) => block.duration_minutes,
        }
    }

    /// Distance (meters), zero for free-text blocks
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        match self {
            Self::Warmup(_) | Self::Cooldown(_) => 0.0,
            Self::Main(block) => block.distance_meters,
        }
    }

    /// Intensity label, or free-text marker
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Warmup(_) | Self::Cooldown(_) => "Free",
            Self::Main(block) => &block.intensity_label,
        }
    }

    /// Free-text description, main blocks have none
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Warmup(block) | Self::Cooldown(block) => Some(&block.description),
            Self::Main(_) => None,
        }
    }

    /// Speed for display: two decimals, `"-"` for free-text blocks
    #[must_use]
    pub fn speed_display(&self) -> String {
        match self {
            Self::Warmup(_) | Self::Cooldown(_) => NOT_APPLICABLE.to_owned(),
            Self::Main(block) => block
                .speed_kmh
                .map_or_else(|| UNAVAILABLE.to_owned(), |speed| format!("{speed:.2}")),
        }
    }

    /// Pace for display: `mm:ss`, `"-"` for free-text blocks
    #[must_use]
    pub fn pace_display(&self) -> String {
        match self {
            Self::Warmup(_) | Self::Cooldown(_) => NOT_APPLICABLE.to_owned(),
            Self::Main(block) => block
                .pace_per_km
                .map_or_else(|| UNAVAILABLE.to_owned(), |pace| pace.to_string()),
        }
    }
}

/// Driving input of a main block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum MainTarget {
    /// Fixed duration, distance derived
    Duration {
        /// Minutes
        minutes: f64,
    },
    /// Fixed distance, duration derived
    Distance {
        /// Meters
        meters: f64,
    },
}

/// Request to add a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockSpec {
    /// Warm-up
    Warmup {
        /// Minutes
        duration_minutes: f64,
        /// Free text, defaults when empty
        description: Option<String>,
    },
    /// Main set at an intensity row
    Main {
        /// Label of the intensity row
        intensity_label: String,
        /// Driving input
        target: MainTarget,
    },
    /// Cool-down
    Cooldown {
        /// Minutes
        duration_minutes: f64,
        /// Free text, defaults when empty
        description: Option<String>,
    },
}

fn next_block_id(existing: &[SessionBlock]) -> BlockId {
    BlockId(
        existing
            .iter()
            .map(|block| block.id().0)
            .max()
            .map_or(1, |max| max + 1),
    )
}

fn free_block(
    id: BlockId,
    duration_minutes: f64,
    description: Option<String>,
) -> AppResult<FreeBlock> {
    if !duration_minutes.is_finite() || duration_minutes < 0.0 {
        return Err(AppError::out_of_range(format!(
            "block duration must be a non-negative number of minutes, got {duration_minutes}"
        ))
        .with_field("duration_minutes"));
    }

    let description = description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_owned());

    Ok(FreeBlock {
        id,
        duration_minutes,
        description,
    })
}

fn main_block(
    id: BlockId,
    intensity_label: &str,
    target: MainTarget,
    table: &IntensityTable,
) -> AppResult<MainBlock> {
    let row = table
        .row(intensity_label)
        .ok_or_else(|| AppError::not_found(format!("intensity row '{intensity_label}'")))?;

    let meters_per_minute = row.meters_per_minute.ok_or_else(|| {
        AppError::invalid_input(format!(
            "intensity {intensity_label} has no representable speed for VO2max {:.2}",
            table.vo2max
        ))
        .with_field("intensity_label")
    })?;

    let (duration_minutes, distance_meters, target_type) = match target {
        MainTarget::Duration { minutes } => {
            ensure_positive(minutes, "duration_minutes")?;
            (minutes, (minutes * meters_per_minute).round(), TargetType::Duration)
        }
        MainTarget::Distance { meters } => {
            ensure_positive(meters, "distance_meters")?;
            let minutes = (meters / meters_per_minute * 10.0).round() / 10.0;
            (minutes, meters, TargetType::Distance)
        }
    };

    Ok(MainBlock {
        id,
        duration_minutes,
        distance_meters,
        intensity_label: row.label.clone(),
        target: target_type,
        speed_kmh: row.km_per_hour,
        pace_per_km: row.pace_per_km,
    })
}

fn ensure_positive(value: f64, field: &str) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!("{field} must be a positive number, got {value}"))
            .with_field(field))
    }
}

/// Append a block to a session, returning the new list
///
/// The new block is assigned the next free id (highest id + 1).
///
/// # Errors
///
/// Returns an error if a main block references an unknown or unrepresentable
/// intensity row, or if the driving quantity is not a positive number.
pub fn add_block(
    existing: &[SessionBlock],
    spec: BlockSpec,
    table: &IntensityTable,
) -> AppResult<Vec<SessionBlock>> {
    let id = next_block_id(existing);
    let block = match spec {
        BlockSpec::Warmup {
            duration_minutes,
            description,
        } => SessionBlock::Warmup(free_block(id, duration_minutes, description)?),
        BlockSpec::Cooldown {
            duration_minutes,
            description,
        } => SessionBlock::Cooldown(free_block(id, duration_minutes, description)?),
        BlockSpec::Main {
            intensity_label,
            target,
        } => SessionBlock::Main(main_block(id, &intensity_label, target, table)?),
    };

    debug!(block_id = %id, kind = block.kind(), "Added session block");
    let mut blocks = existing.to_vec();
    blocks.push(block);
    Ok(blocks)
}

/// Remove a block by id, returning the new list
///
/// Unknown ids leave the list unchanged.
#[must_use]
pub fn remove_block(existing: &[SessionBlock], id: BlockId) -> Vec<SessionBlock> {
    existing
        .iter()
        .filter(|block| block.id() != id)
        .cloned()
        .collect()
}

/// Summed duration and distance of a session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionTotals {
    /// Total minutes
    pub duration_minutes: f64,
    /// Total meters
    pub distance_meters: f64,
}

/// Aggregates over a session's blocks
pub trait SessionBlocks {
    /// Summed duration and distance
    fn totals(&self) -> SessionTotals;
}

impl SessionBlocks for [SessionBlock] {
    fn totals(&self) -> SessionTotals {
        self.iter().fold(SessionTotals::default(), |acc, block| SessionTotals {
            duration_minutes: acc.duration_minutes + block.duration_minutes(),
            distance_meters: acc.distance_meters + block.distance_meters(),
        })
    }
}

/// A (week, session) slot of a progression, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey {
    /// Week number
    pub week: u32,
    /// Session number within the week
    pub session: u32,
}

impl SessionKey {
    /// Create a slot key
    #[must_use]
    pub const fn new(week: u32, session: u32) -> Self {
        Self { week, session }
    }

    /// Slot after this one, or `None` once the periodization is complete
    #[must_use]
    pub const fn next(&self, sessions_per_week: u32, total_weeks: u32) -> Option<Self> {
        if self.session < sessions_per_week {
            Some(Self::new(self.week, self.session + 1))
        } else if self.week < total_weeks {
            Some(Self::new(self.week + 1, 1))
        } else {
            None
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.session)
    }
}

impl FromStr for SessionKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("session key '{s}' must look like 'week-session'"),
            )
        };
        let (week, session) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            week: week.trim().parse().map_err(|_| invalid())?,
            session: session.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Block lists keyed by session slot, iterated in (week, session) order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannedSessions {
    sessions: BTreeMap<SessionKey, Vec<SessionBlock>>,
}

impl PlannedSessions {
    /// Empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the blocks of a slot, replacing any previous list
    pub fn insert(&mut self, key: SessionKey, blocks: Vec<SessionBlock>) {
        self.sessions.insert(key, blocks);
    }

    /// Blocks of a slot
    #[must_use]
    pub fn get(&self, key: &SessionKey) -> Option<&[SessionBlock]> {
        self.sessions.get(key).map(Vec::as_slice)
    }

    /// Drop a slot
    pub fn remove(&mut self, key: &SessionKey) -> Option<Vec<SessionBlock>> {
        self.sessions.remove(key)
    }

    /// Slots of one week in session order
    pub fn for_week(&self, week: u32) -> impl Iterator<Item = (SessionKey, &[SessionBlock])> {
        self.sessions
            .range(SessionKey::new(week, 0)..=SessionKey::new(week, u32::MAX))
            .map(|(key, blocks)| (*key, blocks.as_slice()))
    }

    /// All slots in order
    pub fn iter(&self) -> impl Iterator<Item = (SessionKey, &[SessionBlock])> {
        self.sessions
            .iter()
            .map(|(key, blocks)| (*key, blocks.as_slice()))
    }

    /// Number of stored slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no slot is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl FromIterator<(SessionKey, Vec<SessionBlock>)> for PlannedSessions {
    fn from_iter<I: IntoIterator<Item = (SessionKey, Vec<SessionBlock>)>>(iter: I) -> Self {
        Self {
            sessions: iter.into_iter().collect(),
        }
    }
}
