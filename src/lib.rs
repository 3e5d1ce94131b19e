//! Table tennis tournament web app: library with models, scheduling logic,
//! and match storage.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    advance_playoffs, advance_round, bracket_matches, compute_standings, default_group_count,
    generate_matches, generate_playoffs, group_matches_by_group, grouped_round_robin_matches,
    partition, reset_groups, reset_match, reset_playoffs, round_complete, round_robin_matches, schedule,
    seed_bracket, start_tournament, submit_result, top_players, unique_player_ids,
    update_match_state, valid_bo5, winners_in_order, Pairing, PlayoffPairing, Qualifier, SeedRole,
    StandingRow, SubmitOutcome, MAX_GROUP_COUNT,
};
pub use models::{
    next_seed, GameMatch, MatchId, MatchStatus, Player, PlayerId, Round, ScheduleKind, Tournament,
    TournamentError, TournamentFormat, TournamentId, TournamentStatus,
};
pub use store::{MatchStore, MatchUpdate, MemoryMatchStore, RoundFilter};
