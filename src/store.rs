//! Match storage abstraction and the in-memory implementation.

use crate::models::{GameMatch, MatchId, MatchStatus, PlayerId, Round, TournamentId};

/// Round-range filter for listing, counting and deleting matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundFilter {
    All,
    /// Any round before the playoff stage (legacy round < 900).
    GroupStage,
    /// Playoff rounds only (legacy round >= 900).
    Playoffs,
    Exact(Round),
}

impl RoundFilter {
    pub fn matches(self, round: Round) -> bool {
        match self {
            RoundFilter::All => true,
            RoundFilter::GroupStage => round.is_group_stage(),
            RoundFilter::Playoffs => round.is_playoff(),
            RoundFilter::Exact(wanted) => round == wanted,
        }
    }
}

/// A single field update applied to a stored match.
#[derive(Clone, Copy, Debug)]
pub enum MatchUpdate {
    /// Record a finished result.
    Result {
        player1_score: u8,
        player2_score: u8,
        winner: PlayerId,
    },
    /// Clear scores, winner, table; back to unplayed.
    ClearResult,
    Status(MatchStatus),
    Table(Option<u32>),
}

/// Storage capabilities the engine needs. Backends only have to provide
/// these operations; the engine does not care about the storage format.
pub trait MatchStore {
    fn insert_matches(&mut self, matches: Vec<GameMatch>);

    /// Matches of a tournament within the filter, sorted by
    /// (encoded round, match number).
    fn list_matches(&self, tournament_id: TournamentId, filter: RoundFilter) -> Vec<GameMatch>;

    fn get_match(&self, id: MatchId) -> Option<GameMatch>;

    /// Apply one update; returns the updated match, or None if unknown.
    fn update_match(&mut self, id: MatchId, update: MatchUpdate) -> Option<GameMatch>;

    /// Delete a tournament's matches within the filter; returns how many.
    fn delete_matches(&mut self, tournament_id: TournamentId, filter: RoundFilter) -> usize;

    fn count_matches(
        &self,
        tournament_id: TournamentId,
        filter: RoundFilter,
        predicate: &dyn Fn(&GameMatch) -> bool,
    ) -> usize;
}

/// In-memory match store backing the web binary and the tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryMatchStore {
    matches: Vec<GameMatch>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_update(m: &mut GameMatch, update: MatchUpdate) {
    match update {
        MatchUpdate::Result {
            player1_score,
            player2_score,
            winner,
        } => {
            m.player1_score = Some(player1_score);
            m.player2_score = Some(player2_score);
            m.winner = Some(winner);
            m.status = MatchStatus::Finished;
        }
        MatchUpdate::ClearResult => {
            m.player1_score = None;
            m.player2_score = None;
            m.winner = None;
            m.status = MatchStatus::Unplayed;
            m.table_number = None;
        }
        MatchUpdate::Status(status) => m.status = status,
        MatchUpdate::Table(table_number) => m.table_number = table_number,
    }
}

impl MatchStore for MemoryMatchStore {
    fn insert_matches(&mut self, matches: Vec<GameMatch>) {
        self.matches.extend(matches);
    }

    fn list_matches(&self, tournament_id: TournamentId, filter: RoundFilter) -> Vec<GameMatch> {
        let mut found: Vec<GameMatch> = self
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id && filter.matches(m.round))
            .cloned()
            .collect();
        found.sort_by_key(|m| (m.round.encode(), m.match_number));
        found
    }

    fn get_match(&self, id: MatchId) -> Option<GameMatch> {
        self.matches.iter().find(|m| m.id == id).cloned()
    }

    fn update_match(&mut self, id: MatchId, update: MatchUpdate) -> Option<GameMatch> {
        let m = self.matches.iter_mut().find(|m| m.id == id)?;
        apply_update(m, update);
        Some(m.clone())
    }

    fn delete_matches(&mut self, tournament_id: TournamentId, filter: RoundFilter) -> usize {
        let before = self.matches.len();
        self.matches
            .retain(|m| m.tournament_id != tournament_id || !filter.matches(m.round));
        before - self.matches.len()
    }

    fn count_matches(
        &self,
        tournament_id: TournamentId,
        filter: RoundFilter,
        predicate: &dyn Fn(&GameMatch) -> bool,
    ) -> usize {
        self.matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id && filter.matches(m.round) && predicate(m))
            .count()
    }
}
