//! Data structures for the tournament engine: players, matches, tournaments.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, MatchStatus, Round, TournamentId};
pub use player::{next_seed, Player, PlayerId};
pub use tournament::{
    ScheduleKind, Tournament, TournamentError, TournamentFormat, TournamentStatus,
};
