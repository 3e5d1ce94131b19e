//! Standings: ranked tables with the deterministic tie-break chain.

use crate::models::{GameMatch, MatchStatus, PlayerId};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One row of a standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub name: String,
    /// 1-based position after sorting.
    pub rank: u32,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub sets_diff: i32,
}

impl StandingRow {
    fn empty(player_id: PlayerId, name: String) -> Self {
        Self {
            player_id,
            name,
            rank: 0,
            played: 0,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            sets_diff: 0,
        }
    }
}

/// Compute the ranked standings for a pool of players.
///
/// Only finished matches with both player ids present (and both in the pool)
/// contribute. Sort order: wins desc, set difference desc, sets won desc,
/// then name ascending (case-insensitive). The sort is stable, so identical
/// inputs always yield identical output order.
pub fn compute_standings<F>(
    player_ids: &[PlayerId],
    matches: &[GameMatch],
    name_of: F,
) -> Vec<StandingRow>
where
    F: Fn(PlayerId) -> Option<String>,
{
    let mut rows: Vec<StandingRow> = player_ids
        .iter()
        .map(|&pid| StandingRow::empty(pid, name_of(pid).unwrap_or_default()))
        .collect();
    let index: HashMap<PlayerId, usize> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| (row.player_id, idx))
        .collect();

    for m in matches {
        if m.status != MatchStatus::Finished {
            continue;
        }
        let (Some(p1), Some(p2)) = (m.player1, m.player2) else {
            continue;
        };
        let (Some(&i1), Some(&i2)) = (index.get(&p1), index.get(&p2)) else {
            continue;
        };
        if i1 == i2 {
            continue;
        }

        let s1 = i32::from(m.player1_score.unwrap_or(0));
        let s2 = i32::from(m.player2_score.unwrap_or(0));

        rows[i1].played += 1;
        rows[i2].played += 1;
        rows[i1].sets_won += s1;
        rows[i1].sets_lost += s2;
        rows[i2].sets_won += s2;
        rows[i2].sets_lost += s1;

        if s1 > s2 {
            rows[i1].wins += 1;
            rows[i2].losses += 1;
        } else {
            rows[i2].wins += 1;
            rows[i1].losses += 1;
        }
    }

    for row in &mut rows {
        row.sets_diff = row.sets_won - row.sets_lost;
    }

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.sets_diff.cmp(&a.sets_diff))
            .then(b.sets_won.cmp(&a.sets_won))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    for (idx, row) in rows.iter_mut().enumerate() {
        row.rank = idx as u32 + 1;
    }
    rows
}

/// Player ids of the top `count` rows.
pub fn top_players(standings: &[StandingRow], count: usize) -> Vec<PlayerId> {
    standings
        .iter()
        .take(count)
        .map(|row| row.player_id)
        .collect()
}

/// Bucket matches by 1-based group number derived from the round encoding
/// (ungrouped rounds fall into group 1). Ascending group order.
pub fn group_matches_by_group(matches: &[GameMatch]) -> BTreeMap<u32, Vec<GameMatch>> {
    let mut groups: BTreeMap<u32, Vec<GameMatch>> = BTreeMap::new();
    for m in matches {
        groups
            .entry(m.round.group_number())
            .or_default()
            .push(m.clone());
    }
    groups
}

/// Distinct player ids appearing in the matches, in first-appearance order.
pub fn unique_player_ids(matches: &[GameMatch]) -> Vec<PlayerId> {
    let mut ids = Vec::new();
    for m in matches {
        for pid in [m.player1, m.player2].into_iter().flatten() {
            if !ids.contains(&pid) {
                ids.push(pid);
            }
        }
    }
    ids
}
