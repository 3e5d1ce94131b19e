//! Single-elimination bracket generation.

use crate::models::{GameMatch, PlayerId, Round, TournamentError, TournamentId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a single-elimination bracket.
///
/// The bracket is sized to the next power of two; missing slots are byes.
/// Seeding is randomized through the supplied generator so tests can pass a
/// seeded RNG. Slot i plays slot size-1-i, so byes land against the leading
/// slots rather than piling into one pairing. Round 1 emits a match only when
/// both sides are real players (a bye pairing records no walkover match);
/// rounds 2..=log2(size) are placeholder matches with both slots empty, to be
/// filled once winners are known.
pub fn bracket_matches<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    players: &[PlayerId],
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    if players.len() < 2 {
        return Err(TournamentError::InvalidPlayerCount { required: 2 });
    }

    let bracket_size = players.len().next_power_of_two();

    let mut seeded: Vec<PlayerId> = players.to_vec();
    seeded.shuffle(rng);
    let mut slots: Vec<Option<PlayerId>> = seeded.into_iter().map(Some).collect();
    slots.resize(bracket_size, None);

    let mut matches = Vec::new();
    let mut match_number = 1u32;
    for i in 0..bracket_size / 2 {
        if let (Some(player1), Some(player2)) = (slots[i], slots[bracket_size - 1 - i]) {
            matches.push(GameMatch::new(
                tournament_id,
                Round::Open(1),
                match_number,
                Some(player1),
                Some(player2),
            ));
            match_number += 1;
        }
    }

    let total_rounds = bracket_size.trailing_zeros();
    for round in 2..=total_rounds {
        let matches_in_round = bracket_size >> round;
        for number in 1..=matches_in_round {
            matches.push(GameMatch::placeholder(
                tournament_id,
                Round::Open(round as u8),
                number as u32,
            ));
        }
    }

    Ok(matches)
}
