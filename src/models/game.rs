//! Match (game), MatchStatus, and the round encoding.

use crate::models::player::PlayerId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Stage a match belongs to.
///
/// Stored and transmitted as a single integer (the legacy encoding consumers
/// rely on to derive group letters and stages):
/// - `1..=99`: ungrouped round number (plain round-robin or elimination rounds)
/// - `100..=899`: grouped round-robin, `(group + 1) * 100 + round_in_group`
/// - `900..`: playoff rounds, 900 is the first
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Round {
    /// Ungrouped round number (plain round robin, or elimination bracket rounds).
    Open(u8),
    /// Grouped round robin: 0-based group index, 1-based round within the group.
    Group { group: u8, round: u8 },
    /// Playoff round, 1-based (1 = first playoff round).
    Playoff(u16),
}

impl Round {
    /// Legacy integer form (the wire/storage contract).
    pub fn encode(self) -> u32 {
        match self {
            Round::Open(round) => u32::from(round),
            Round::Group { group, round } => (u32::from(group) + 1) * 100 + u32::from(round),
            Round::Playoff(round) => 899 + u32::from(round),
        }
    }

    /// Parse the legacy integer form.
    pub fn decode(value: u32) -> Self {
        if value >= 900 {
            Round::Playoff((value - 899) as u16)
        } else if value >= 100 {
            Round::Group {
                group: (value / 100 - 1) as u8,
                round: (value % 100) as u8,
            }
        } else {
            Round::Open(value as u8)
        }
    }

    pub fn is_playoff(self) -> bool {
        matches!(self, Round::Playoff(_))
    }

    /// True for any round before the playoff stage.
    pub fn is_group_stage(self) -> bool {
        !self.is_playoff()
    }

    /// 1-based group number for standings grouping (ungrouped rounds count as group 1).
    pub fn group_number(self) -> u32 {
        match self {
            Round::Open(_) => 1,
            Round::Group { group, .. } => u32::from(group) + 1,
            Round::Playoff(round) => (899 + u32::from(round)) / 100,
        }
    }

    /// Display letter for group-stage rounds (`A` for the first group); None for playoffs.
    pub fn group_letter(self) -> Option<char> {
        match self {
            Round::Open(_) => Some('A'),
            Round::Group { group, .. } => Some((b'A' + group) as char),
            Round::Playoff(_) => None,
        }
    }
}

impl Serialize for Round {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.encode())
    }
}

impl<'de> Deserialize<'de> for Round {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Ok(Round::decode(value))
    }
}

/// Whether the match has been played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Unplayed,
    InProgress,
    Finished,
}

/// A single match between two players.
///
/// A missing player is a bye slot; both slots are empty only in elimination
/// placeholder rounds waiting to be filled.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub round: Round,
    /// 1-based; unique within the round (grouped schedules number globally).
    pub match_number: u32,
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
    pub player1_score: Option<u8>,
    pub player2_score: Option<u8>,
    /// Set iff status is Finished; always the side with the greater score.
    pub winner: Option<PlayerId>,
    pub status: MatchStatus,
    pub table_number: Option<u32>,
}

impl GameMatch {
    pub fn new(
        tournament_id: TournamentId,
        round: Round,
        match_number: u32,
        player1: Option<PlayerId>,
        player2: Option<PlayerId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            match_number,
            player1,
            player2,
            player1_score: None,
            player2_score: None,
            winner: None,
            status: MatchStatus::Unplayed,
            table_number: None,
        }
    }

    /// Placeholder for a future elimination round: both player slots empty.
    pub fn placeholder(tournament_id: TournamentId, round: Round, match_number: u32) -> Self {
        Self::new(tournament_id, round, match_number, None, None)
    }
}
