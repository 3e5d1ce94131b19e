//! Playoff bracket seeding and round-to-round progression.

use crate::models::{GameMatch, MatchStatus, PlayerId, TournamentError};
use serde::{Deserialize, Serialize};

/// How a qualifier advanced out of their group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedRole {
    Winner,
    RunnerUp,
}

/// A player advancing from the group stage into the playoff bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Qualifier {
    pub player: PlayerId,
    pub role: SeedRole,
    /// 1-based source group number.
    pub group: u32,
}

/// A seeded playoff pairing; a `None` side is a bye slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlayoffPairing {
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
}

/// Seed the initial playoff bracket.
///
/// Seed order: all group winners by ascending group number, then all
/// runners-up by ascending group number, padded with byes to the next power
/// of two. Seed i plays seed size-1-i. Pairings where both sides are byes
/// are dropped here; a pairing with exactly one real side is returned but is
/// not materialized as a match by the caller (the bye side is not advanced
/// as a walkover).
pub fn seed_bracket(qualifiers: &[Qualifier]) -> Result<Vec<PlayoffPairing>, TournamentError> {
    if qualifiers.len() < 2 {
        return Err(TournamentError::InsufficientQualifiers);
    }

    let mut winners: Vec<&Qualifier> = qualifiers
        .iter()
        .filter(|q| q.role == SeedRole::Winner)
        .collect();
    winners.sort_by_key(|q| q.group);
    let mut runners: Vec<&Qualifier> = qualifiers
        .iter()
        .filter(|q| q.role == SeedRole::RunnerUp)
        .collect();
    runners.sort_by_key(|q| q.group);

    let mut seeds: Vec<Option<PlayerId>> = winners
        .iter()
        .chain(runners.iter())
        .map(|q| Some(q.player))
        .collect();
    let bracket_size = seeds.len().next_power_of_two();
    seeds.resize(bracket_size, None);

    let mut pairings = Vec::with_capacity(bracket_size / 2);
    for i in 0..bracket_size / 2 {
        let pairing = PlayoffPairing {
            player1: seeds[i],
            player2: seeds[bracket_size - 1 - i],
        };
        if pairing.player1.is_some() || pairing.player2.is_some() {
            pairings.push(pairing);
        }
    }
    Ok(pairings)
}

/// Pair the winners of a completed round sequentially (no re-seeding). An
/// odd trailing winner is left unpaired.
pub fn advance_round(winners: &[PlayerId]) -> Result<Vec<(PlayerId, PlayerId)>, TournamentError> {
    if winners.len() < 2 {
        return Err(TournamentError::InsufficientQualifiers);
    }
    Ok(winners
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

/// True when every match of the round is finished.
pub fn round_complete(matches: &[GameMatch]) -> bool {
    matches.iter().all(|m| m.status == MatchStatus::Finished)
}

/// Winners of a round in match-number order.
pub fn winners_in_order(matches: &[GameMatch]) -> Vec<PlayerId> {
    let mut ordered: Vec<&GameMatch> = matches.iter().collect();
    ordered.sort_by_key(|m| m.match_number);
    ordered.iter().filter_map(|m| m.winner).collect()
}
