//! Tournament business logic: scheduling, progression, standings, lifecycle.

mod elimination;
mod groups;
mod lifecycle;
mod playoffs;
mod round_robin;
mod standings;

pub use elimination::bracket_matches;
pub use groups::{default_group_count, grouped_round_robin_matches, partition, MAX_GROUP_COUNT};
pub use lifecycle::{
    advance_playoffs, generate_matches, generate_playoffs, reset_groups, reset_match,
    reset_playoffs, start_tournament, submit_result, update_match_state, valid_bo5, SubmitOutcome,
};
pub use playoffs::{
    advance_round, round_complete, seed_bracket, winners_in_order, PlayoffPairing, Qualifier,
    SeedRole,
};
pub use round_robin::{round_robin_matches, schedule, Pairing};
pub use standings::{
    compute_standings, group_matches_by_group, top_players, unique_player_ids, StandingRow,
};
