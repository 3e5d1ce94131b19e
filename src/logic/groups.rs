//! Group stage: balanced partitioning and grouped round-robin generation.

use crate::logic::round_robin::rounds_for_slots;
use crate::models::{GameMatch, PlayerId, Round, ScheduleKind, TournamentError, TournamentId};

/// Highest group count the round encoding can carry: group index 8 would
/// encode as `9 * 100 + round`, colliding with the playoff range (>= 900).
pub const MAX_GROUP_COUNT: u32 = 8;

/// Default group count for the mixed format when none is configured.
pub fn default_group_count(player_count: usize) -> u32 {
    if player_count <= 8 {
        2
    } else if player_count <= 16 {
        4
    } else {
        std::cmp::min(MAX_GROUP_COUNT, player_count.div_ceil(4) as u32)
    }
}

/// Split players into `group_count` pools, as evenly as possible, preserving
/// seed order. Every pool is padded with `None` bye slots to an even size
/// (required by the round-robin schedulers); byes never produce matches.
/// The group count must be in `1..=MAX_GROUP_COUNT`.
pub fn partition(
    players: &[PlayerId],
    group_count: u32,
) -> Result<Vec<Vec<Option<PlayerId>>>, TournamentError> {
    if group_count < 1 || group_count > MAX_GROUP_COUNT {
        return Err(TournamentError::InvalidGroupConfiguration);
    }
    if players.len() < 2 {
        return Err(TournamentError::InvalidPlayerCount { required: 2 });
    }

    let total = players.len();
    // An odd total needs one bye somewhere; account for it when sizing pools.
    let effective = if total % 2 == 1 { total + 1 } else { total };
    let count = group_count as usize;
    let base = effective / count;
    let remainder = effective % count;

    let mut groups = Vec::with_capacity(count);
    let mut next = 0usize;
    for group_idx in 0..count {
        let raw_size = if group_idx < remainder { base + 1 } else { base };
        let size = if raw_size % 2 == 0 { raw_size } else { raw_size + 1 };
        let mut pool = Vec::with_capacity(size);
        for _ in 0..size {
            if next < total {
                pool.push(Some(players[next]));
                next += 1;
            } else {
                pool.push(None);
            }
        }
        groups.push(pool);
    }
    Ok(groups)
}

/// Generate round-robin matches for every group. Rounds are encoded as
/// `Round::Group` (legacy `(group + 1) * 100 + round`); match numbers run
/// globally across all groups in generation order.
pub fn grouped_round_robin_matches(
    tournament_id: TournamentId,
    players: &[PlayerId],
    group_count: u32,
    kind: ScheduleKind,
) -> Result<Vec<GameMatch>, TournamentError> {
    let groups = partition(players, group_count)?;

    let mut matches = Vec::new();
    let mut global_number = 1u32;
    for (group_idx, pool) in groups.into_iter().enumerate() {
        let rounds = rounds_for_slots(pool, kind);
        for (round_idx, pairings) in rounds.iter().enumerate() {
            for &(player1, player2) in pairings {
                matches.push(GameMatch::new(
                    tournament_id,
                    Round::Group {
                        group: group_idx as u8,
                        round: round_idx as u8 + 1,
                    },
                    global_number,
                    Some(player1),
                    Some(player2),
                ));
                global_number += 1;
            }
        }
    }
    Ok(matches)
}
