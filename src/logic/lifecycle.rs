//! Tournament lifecycle: format dispatch on start, result submission, playoff
//! seeding and advancement, stage resets. All guards run before any mutation.

use crate::logic::elimination::bracket_matches;
use crate::logic::groups::{default_group_count, grouped_round_robin_matches};
use crate::logic::playoffs::{
    advance_round, seed_bracket, winners_in_order, Qualifier, SeedRole,
};
use crate::logic::round_robin::round_robin_matches;
use crate::logic::standings::{compute_standings, group_matches_by_group, unique_player_ids};
use crate::models::{
    GameMatch, MatchId, MatchStatus, Player, PlayerId, Round, Tournament, TournamentError,
    TournamentFormat, TournamentStatus,
};
use crate::store::{MatchStore, MatchUpdate, RoundFilter};
use rand::Rng;

/// Valid best-of-five results: 3:0, 3:1, 3:2, 2:3, 1:3, 0:3.
pub fn valid_bo5(player1_score: u8, player2_score: u8) -> bool {
    (player1_score == 3 && player2_score <= 2) || (player2_score == 3 && player1_score <= 2)
}

/// Generate the initial match set for a tournament, per its format. Players
/// are taken in seed order (ties broken by name). Pure: nothing is stored.
pub fn generate_matches<R: Rng + ?Sized>(
    tournament: &Tournament,
    players: &[Player],
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    if tournament.status != TournamentStatus::Upcoming {
        return Err(TournamentError::AlreadyGenerated);
    }

    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| a.seed.cmp(&b.seed).then_with(|| a.name.cmp(&b.name)));
    let ids: Vec<_> = ordered.iter().map(|p| p.id).collect();

    match tournament.format {
        TournamentFormat::RoundRobin => match tournament.group_count {
            Some(groups) if groups > 1 => {
                grouped_round_robin_matches(tournament.id, &ids, groups, tournament.schedule)
            }
            _ => round_robin_matches(tournament.id, &ids, tournament.schedule),
        },
        TournamentFormat::Elimination => bracket_matches(tournament.id, &ids, rng),
        TournamentFormat::Mixed => {
            let groups = tournament
                .group_count
                .filter(|&g| g > 0)
                .unwrap_or_else(|| default_group_count(ids.len()));
            grouped_round_robin_matches(tournament.id, &ids, groups, tournament.schedule)
        }
    }
}

/// Start a tournament: generate and store its matches, set status to running.
pub fn start_tournament<S, R>(
    store: &mut S,
    tournament: &mut Tournament,
    players: &[Player],
    rng: &mut R,
) -> Result<usize, TournamentError>
where
    S: MatchStore,
    R: Rng + ?Sized,
{
    let matches = generate_matches(tournament, players, rng)?;
    let created = matches.len();
    store.insert_matches(matches);
    tournament.status = TournamentStatus::Running;
    log::info!(
        "tournament {} started: {} matches generated",
        tournament.id,
        created
    );
    Ok(created)
}

/// Outcome of a result submission.
#[derive(Clone, Debug)]
pub struct SubmitOutcome {
    pub game: GameMatch,
    /// True when a mixed tournament auto-generated the next playoff round.
    pub auto_advanced: bool,
}

/// Record a finished best-of-five result. The winner is the side with the
/// greater score. For mixed tournaments, finishing the last open match of a
/// playoff round generates the next round on the spot.
pub fn submit_result<S: MatchStore>(
    store: &mut S,
    tournament: &Tournament,
    match_id: MatchId,
    player1_score: u8,
    player2_score: u8,
) -> Result<SubmitOutcome, TournamentError> {
    if !valid_bo5(player1_score, player2_score) {
        return Err(TournamentError::InvalidScore {
            player1: player1_score,
            player2: player2_score,
        });
    }

    let m = store
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let winner = if player1_score > player2_score {
        m.player1
    } else {
        m.player2
    }
    // Bye slots and placeholders never receive results.
    .ok_or(TournamentError::InvalidState)?;

    let game = store
        .update_match(
            match_id,
            MatchUpdate::Result {
                player1_score,
                player2_score,
                winner,
            },
        )
        .ok_or(TournamentError::MatchNotFound(match_id))?;

    let auto_advanced = tournament.format == TournamentFormat::Mixed
        && game.round.is_playoff()
        && auto_advance_playoffs(store, tournament, game.round);

    Ok(SubmitOutcome {
        game,
        auto_advanced,
    })
}

/// Try to advance a playoff round after a result. All guards fail silently:
/// this runs opportunistically on every playoff result submission.
fn auto_advance_playoffs<S: MatchStore>(
    store: &mut S,
    tournament: &Tournament,
    round: Round,
) -> bool {
    let Round::Playoff(current) = round else {
        return false;
    };
    let unfinished = store.count_matches(tournament.id, RoundFilter::Exact(round), &|m| {
        m.status != MatchStatus::Finished
    });
    if unfinished > 0 {
        return false;
    }
    let next = Round::Playoff(current + 1);
    if store.count_matches(tournament.id, RoundFilter::Exact(next), &|_| true) > 0 {
        return false;
    }
    let winners = winners_in_order(&store.list_matches(tournament.id, RoundFilter::Exact(round)));
    let Ok(pairs) = advance_round(&winners) else {
        return false;
    };
    insert_playoff_round(store, tournament, next, &pairs);
    true
}

fn insert_playoff_round<S: MatchStore>(
    store: &mut S,
    tournament: &Tournament,
    round: Round,
    pairs: &[(PlayerId, PlayerId)],
) -> usize {
    let matches: Vec<GameMatch> = pairs
        .iter()
        .enumerate()
        .map(|(idx, &(player1, player2))| {
            GameMatch::new(
                tournament.id,
                round,
                idx as u32 + 1,
                Some(player1),
                Some(player2),
            )
        })
        .collect();
    let created = matches.len();
    store.insert_matches(matches);
    log::info!(
        "tournament {}: playoff round {} generated with {} matches",
        tournament.id,
        round.encode(),
        created
    );
    created
}

/// Seed the playoff bracket of a mixed tournament from the top 2 of each
/// group. Fails before any mutation if playoffs already exist, if group
/// matches are still open, or if fewer than 2 qualifiers emerge. Pairings
/// with a bye side are dropped, not walkover-advanced.
pub fn generate_playoffs<S: MatchStore>(
    store: &mut S,
    tournament: &Tournament,
    players: &[Player],
) -> Result<usize, TournamentError> {
    if tournament.format != TournamentFormat::Mixed {
        return Err(TournamentError::InvalidState);
    }
    if tournament.status != TournamentStatus::Running {
        return Err(TournamentError::InvalidState);
    }
    if store.count_matches(tournament.id, RoundFilter::Playoffs, &|_| true) > 0 {
        return Err(TournamentError::AlreadyGenerated);
    }
    if store.count_matches(tournament.id, RoundFilter::GroupStage, &|m| {
        m.status != MatchStatus::Finished
    }) > 0
    {
        return Err(TournamentError::StageNotComplete);
    }

    let group_matches = store.list_matches(tournament.id, RoundFilter::GroupStage);
    if group_matches.is_empty() {
        return Err(TournamentError::StageNotComplete);
    }

    let name_of = |pid| {
        players
            .iter()
            .find(|p: &&Player| p.id == pid)
            .map(|p| p.name.clone())
    };
    let mut qualifiers: Vec<Qualifier> = Vec::new();
    for (group_number, matches) in group_matches_by_group(&group_matches) {
        let ids = unique_player_ids(&matches);
        let standings = compute_standings(&ids, &matches, &name_of);
        if let Some(first) = standings.first() {
            qualifiers.push(Qualifier {
                player: first.player_id,
                role: SeedRole::Winner,
                group: group_number,
            });
        }
        if let Some(second) = standings.get(1) {
            qualifiers.push(Qualifier {
                player: second.player_id,
                role: SeedRole::RunnerUp,
                group: group_number,
            });
        }
    }

    let pairings = seed_bracket(&qualifiers)?;
    let pairs: Vec<_> = pairings
        .iter()
        .filter_map(|p| match (p.player1, p.player2) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect();
    Ok(insert_playoff_round(
        store,
        tournament,
        Round::Playoff(1),
        &pairs,
    ))
}

/// Explicitly generate the next playoff round from the latest completed one.
///
/// Errors: `InvalidState` when no playoff exists yet, `StageNotComplete`
/// while the first playoff round is still open, `AlreadyGenerated` when the
/// round following the last completed one already exists (e.g. after an
/// auto-advance), `InsufficientQualifiers` when only one winner remains.
pub fn advance_playoffs<S: MatchStore>(
    store: &mut S,
    tournament: &Tournament,
) -> Result<(u32, usize), TournamentError> {
    if tournament.format != TournamentFormat::Mixed {
        return Err(TournamentError::InvalidState);
    }
    if tournament.status != TournamentStatus::Running {
        return Err(TournamentError::InvalidState);
    }

    let playoff_matches = store.list_matches(tournament.id, RoundFilter::Playoffs);
    let current = playoff_matches
        .iter()
        .map(|m| m.round)
        .max()
        .ok_or(TournamentError::InvalidState)?;
    let Round::Playoff(current_number) = current else {
        return Err(TournamentError::InvalidState);
    };

    let current_matches: Vec<GameMatch> = playoff_matches
        .iter()
        .filter(|m| m.round == current)
        .cloned()
        .collect();
    if current_matches
        .iter()
        .any(|m| m.status != MatchStatus::Finished)
    {
        // The latest round is open. If it was itself produced from a
        // completed round, advancing that round again is a duplicate request.
        return if current_number > 1 {
            Err(TournamentError::AlreadyGenerated)
        } else {
            Err(TournamentError::StageNotComplete)
        };
    }

    let next = Round::Playoff(current_number + 1);
    if store.count_matches(tournament.id, RoundFilter::Exact(next), &|_| true) > 0 {
        return Err(TournamentError::AlreadyGenerated);
    }

    let winners = winners_in_order(&current_matches);
    let pairs = advance_round(&winners)?;
    let created = insert_playoff_round(store, tournament, next, &pairs);
    Ok((next.encode(), created))
}

/// Delete all group-stage matches and put the tournament back to upcoming.
pub fn reset_groups<S: MatchStore>(store: &mut S, tournament: &mut Tournament) -> usize {
    let deleted = store.delete_matches(tournament.id, RoundFilter::GroupStage);
    tournament.status = TournamentStatus::Upcoming;
    log::info!(
        "tournament {}: group stage reset, {} matches deleted",
        tournament.id,
        deleted
    );
    deleted
}

/// Delete all playoff matches (the group stage stays untouched).
pub fn reset_playoffs<S: MatchStore>(store: &mut S, tournament: &Tournament) -> usize {
    let deleted = store.delete_matches(tournament.id, RoundFilter::Playoffs);
    log::info!(
        "tournament {}: playoffs reset, {} matches deleted",
        tournament.id,
        deleted
    );
    deleted
}

/// Clear a match's result and table assignment, back to unplayed.
pub fn reset_match<S: MatchStore>(
    store: &mut S,
    match_id: MatchId,
) -> Result<GameMatch, TournamentError> {
    store
        .update_match(match_id, MatchUpdate::ClearResult)
        .ok_or(TournamentError::MatchNotFound(match_id))
}

/// Update a match's status and/or table assignment. The table number must be
/// within the tournament's table range.
pub fn update_match_state<S: MatchStore>(
    store: &mut S,
    tournament: &Tournament,
    match_id: MatchId,
    status: Option<MatchStatus>,
    table_number: Option<u32>,
) -> Result<GameMatch, TournamentError> {
    if let Some(table) = table_number {
        if table < 1 || table > tournament.table_count {
            return Err(TournamentError::InvalidTableNumber {
                available: tournament.table_count,
            });
        }
    }
    let mut updated = store
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if let Some(status) = status {
        updated = store
            .update_match(match_id, MatchUpdate::Status(status))
            .ok_or(TournamentError::MatchNotFound(match_id))?;
    }
    if let Some(table) = table_number {
        updated = store
            .update_match(match_id, MatchUpdate::Table(Some(table)))
            .ok_or(TournamentError::MatchNotFound(match_id))?;
    }
    Ok(updated)
}
