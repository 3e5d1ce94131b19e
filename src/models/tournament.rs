//! Tournament entity and TournamentError.

use crate::models::game::{MatchId, TournamentId};
use crate::models::player::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer players than any scheduler can work with.
    InvalidPlayerCount { required: usize },
    /// Group count below 1 (no even-sized pools can be formed).
    InvalidGroupConfiguration,
    /// Prerequisite matches of the previous stage are not all finished.
    StageNotComplete,
    /// The stage or round already has matches recorded.
    AlreadyGenerated,
    /// Fewer than 2 qualifiers/winners available to form a bracket or round.
    InsufficientQualifiers,
    /// Submitted score pair is not a valid best-of-five result.
    InvalidScore { player1: u8, player2: u8 },
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Table number outside the tournament's table range.
    InvalidTableNumber { available: u32 },
    TournamentNotFound,
    MatchNotFound(MatchId),
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidPlayerCount { required } => {
                write!(f, "Need at least {} players", required)
            }
            TournamentError::InvalidGroupConfiguration => {
                write!(f, "Group count must be at least 1")
            }
            TournamentError::StageNotComplete => {
                write!(f, "Finish all matches of the current stage first")
            }
            TournamentError::AlreadyGenerated => {
                write!(f, "This stage has already been generated")
            }
            TournamentError::InsufficientQualifiers => {
                write!(f, "Not enough qualified players for the next round")
            }
            TournamentError::InvalidScore { player1, player2 } => {
                write!(
                    f,
                    "Invalid result {}:{}. Allowed: 3:0, 3:1, 3:2, 2:3, 1:3, 0:3",
                    player1, player2
                )
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::InvalidTableNumber { available } => {
                write!(f, "Only {} table(s) available", available)
            }
            TournamentError::TournamentNotFound => write!(f, "Tournament not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Competition format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Full round robin, optionally split into groups.
    RoundRobin,
    /// Single-elimination bracket.
    Elimination,
    /// Round-robin groups followed by a playoff bracket.
    Mixed,
}

/// Tournament lifecycle status.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Running,
    Finished,
}

/// Which round-robin pairing algorithm to use.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Rotation algorithm (fixed first position, rotate the rest).
    Standard,
    /// Canonical Berger lookup tables; falls back to rotation for sizes
    /// without a table.
    #[default]
    Berger,
}

/// A tournament: metadata and scheduling configuration. Matches and players
/// are stored separately and reference it by id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub status: TournamentStatus,
    /// Physical tables available for assignment (>= 1).
    pub table_count: u32,
    /// Explicit group count for grouped round robin / mixed; None uses the
    /// format's default.
    pub group_count: Option<u32>,
    pub schedule: ScheduleKind,
}

impl Tournament {
    pub fn new(
        name: impl Into<String>,
        format: TournamentFormat,
        date: NaiveDate,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            date,
            location: location.into(),
            description: String::new(),
            status: TournamentStatus::Upcoming,
            table_count: 1,
            group_count: None,
            schedule: ScheduleKind::default(),
        }
    }
}
