//! Round-robin scheduling: rotation algorithm and canonical Berger tables.

use crate::models::{GameMatch, PlayerId, Round, ScheduleKind, TournamentError, TournamentId};

/// One pairing inside a round: (player1, player2).
pub type Pairing = (PlayerId, PlayerId);

/// Canonical Berger rotation tables (1-based positions, `(home, away)` per
/// match). Official tables exist here for 4, 6, 8, 10 and 12 players.
type BergerTable = &'static [&'static [(usize, usize)]];

static BERGER_4: BergerTable = &[
    &[(1, 4), (2, 3)],
    &[(4, 3), (1, 2)],
    &[(2, 4), (3, 1)],
];

static BERGER_6: BergerTable = &[
    &[(1, 6), (2, 5), (3, 4)],
    &[(6, 4), (5, 3), (1, 2)],
    &[(2, 6), (3, 1), (4, 5)],
    &[(6, 5), (1, 4), (2, 3)],
    &[(3, 6), (4, 2), (5, 1)],
];

static BERGER_8: BergerTable = &[
    &[(1, 8), (2, 7), (3, 6), (4, 5)],
    &[(8, 5), (6, 4), (7, 3), (1, 2)],
    &[(2, 8), (3, 1), (4, 7), (5, 6)],
    &[(8, 6), (7, 5), (1, 4), (2, 3)],
    &[(3, 8), (4, 2), (5, 1), (6, 7)],
    &[(8, 7), (1, 6), (2, 5), (3, 4)],
    &[(4, 8), (5, 3), (6, 2), (7, 1)],
];

static BERGER_10: BergerTable = &[
    &[(1, 10), (2, 9), (3, 8), (4, 7), (5, 6)],
    &[(10, 6), (7, 5), (8, 4), (9, 3), (1, 2)],
    &[(2, 10), (3, 1), (4, 9), (5, 8), (6, 7)],
    &[(10, 7), (8, 6), (9, 5), (1, 4), (2, 3)],
    &[(3, 10), (4, 2), (5, 1), (6, 9), (7, 8)],
    &[(10, 8), (9, 7), (1, 6), (2, 5), (3, 4)],
    &[(4, 10), (5, 3), (6, 2), (7, 1), (8, 9)],
    &[(10, 9), (1, 8), (2, 7), (3, 6), (4, 5)],
    &[(5, 10), (6, 4), (7, 3), (8, 2), (9, 1)],
];

static BERGER_12: BergerTable = &[
    &[(1, 12), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)],
    &[(12, 7), (8, 6), (9, 5), (10, 4), (11, 3), (1, 2)],
    &[(2, 12), (3, 1), (4, 11), (5, 10), (6, 9), (7, 8)],
    &[(12, 8), (9, 7), (10, 6), (11, 5), (1, 4), (2, 3)],
    &[(3, 12), (4, 2), (5, 1), (6, 11), (7, 10), (8, 9)],
    &[(12, 9), (10, 8), (11, 7), (1, 6), (2, 5), (3, 4)],
    &[(4, 12), (5, 3), (6, 2), (7, 1), (8, 11), (9, 10)],
    &[(12, 10), (11, 9), (1, 8), (2, 7), (3, 6), (4, 5)],
    &[(5, 12), (6, 4), (7, 3), (8, 2), (9, 1), (10, 11)],
    &[(12, 11), (1, 10), (2, 9), (3, 8), (4, 7), (5, 6)],
    &[(6, 12), (7, 5), (8, 4), (9, 3), (10, 2), (11, 1)],
];

fn berger_table(size: usize) -> Option<BergerTable> {
    match size {
        4 => Some(BERGER_4),
        6 => Some(BERGER_6),
        8 => Some(BERGER_8),
        10 => Some(BERGER_10),
        12 => Some(BERGER_12),
        _ => None,
    }
}

/// Produce the complete round-robin schedule for a pool of players.
///
/// An odd-sized pool gets one bye slot appended; pairings against the bye are
/// dropped from the output but the slot still occupies a rotation position.
/// Guarantees for effective even size n: n-1 rounds, every unordered pair of
/// real players exactly once, no player twice in a round.
pub fn schedule(
    players: &[PlayerId],
    kind: ScheduleKind,
) -> Result<Vec<Vec<Pairing>>, TournamentError> {
    if players.len() < 2 {
        return Err(TournamentError::InvalidPlayerCount { required: 2 });
    }
    let mut slots: Vec<Option<PlayerId>> = players.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    Ok(rounds_for_slots(slots, kind))
}

/// Schedule an even-sized slot list (players plus bye slots) that is already
/// padded, as produced by the group partitioner.
pub(crate) fn rounds_for_slots(slots: Vec<Option<PlayerId>>, kind: ScheduleKind) -> Vec<Vec<Pairing>> {
    match kind {
        ScheduleKind::Standard => rotation_rounds(slots),
        ScheduleKind::Berger => match berger_rounds(&slots) {
            Some(rounds) => rounds,
            None => rotation_rounds(slots),
        },
    }
}

/// Rotation algorithm: the first slot stays fixed; each round pairs position
/// i against position n-1-i, then the last slot rotates in behind the fixed one.
pub(crate) fn rotation_rounds(mut slots: Vec<Option<PlayerId>>) -> Vec<Vec<Pairing>> {
    let n = slots.len();
    if n < 2 {
        return Vec::new();
    }
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let mut pairings = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (slots[i], slots[n - 1 - i]) {
                pairings.push((home, away));
            }
        }
        rounds.push(pairings);
        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }
    rounds
}

/// Canonical lookup: apply the Berger table for this size, then reorder the
/// rounds into the conventional display order. None if no table exists.
pub(crate) fn berger_rounds(slots: &[Option<PlayerId>]) -> Option<Vec<Vec<Pairing>>> {
    let table = berger_table(slots.len())?;
    let mut rounds: Vec<Vec<Pairing>> = table
        .iter()
        .map(|round| {
            round
                .iter()
                .filter_map(|&(home, away)| match (slots[home - 1], slots[away - 1]) {
                    (Some(h), Some(a)) => Some((h, a)),
                    _ => None,
                })
                .collect()
        })
        .collect();

    let order = display_order(rounds.len());
    Some(
        order
            .into_iter()
            .map(|idx| std::mem::take(&mut rounds[idx]))
            .collect(),
    )
}

/// Conventional presentation order for canonical tables: interleave the first
/// half of the rounds with the second half (1, h+1, 2, h+2, ...).
fn display_order(rounds: usize) -> Vec<usize> {
    let half = rounds.div_ceil(2);
    let mut order = Vec::with_capacity(rounds);
    for i in 0..half {
        order.push(i);
        if half + i < rounds {
            order.push(half + i);
        }
    }
    order
}

/// Materialize an ungrouped round-robin schedule as matches. Rounds are
/// numbered from 1; matches within each round are numbered from 1 in the
/// order produced.
pub fn round_robin_matches(
    tournament_id: TournamentId,
    players: &[PlayerId],
    kind: ScheduleKind,
) -> Result<Vec<GameMatch>, TournamentError> {
    let rounds = schedule(players, kind)?;
    let mut matches = Vec::new();
    for (round_idx, pairings) in rounds.iter().enumerate() {
        for (match_idx, &(player1, player2)) in pairings.iter().enumerate() {
            matches.push(GameMatch::new(
                tournament_id,
                Round::Open(round_idx as u8 + 1),
                match_idx as u32 + 1,
                Some(player1),
                Some(player2),
            ));
        }
    }
    Ok(matches)
}
