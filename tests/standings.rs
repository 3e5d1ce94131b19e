//! Integration tests for standings computation and the tie-break chain.

use std::collections::HashMap;
use table_tennis_tournament_web::{
    compute_standings, group_matches_by_group, top_players, unique_player_ids, GameMatch,
    MatchStatus, PlayerId, Round, TournamentId,
};
use uuid::Uuid;

struct Fixture {
    tid: TournamentId,
    names: HashMap<PlayerId, String>,
}

impl Fixture {
    fn new(names: &[&str]) -> (Self, Vec<PlayerId>) {
        let ids: Vec<PlayerId> = names.iter().map(|_| Uuid::new_v4()).collect();
        let names = ids
            .iter()
            .zip(names)
            .map(|(&id, &n)| (id, n.to_string()))
            .collect();
        (
            Self {
                tid: Uuid::new_v4(),
                names,
            },
            ids,
        )
    }

    fn finished(&self, p1: PlayerId, p2: PlayerId, s1: u8, s2: u8) -> GameMatch {
        let mut m = GameMatch::new(self.tid, Round::Open(1), 1, Some(p1), Some(p2));
        m.player1_score = Some(s1);
        m.player2_score = Some(s2);
        m.winner = Some(if s1 > s2 { p1 } else { p2 });
        m.status = MatchStatus::Finished;
        m
    }

    fn name_of(&self) -> impl Fn(PlayerId) -> Option<String> + '_ {
        move |pid| self.names.get(&pid).cloned()
    }
}

#[test]
fn wins_rank_first() {
    let (f, ids) = Fixture::new(&["Anna", "Bo", "Carl"]);
    let matches = vec![
        f.finished(ids[0], ids[1], 3, 0),
        f.finished(ids[1], ids[2], 3, 2),
        f.finished(ids[0], ids[2], 3, 1),
    ];
    let rows = compute_standings(&ids, &matches, f.name_of());

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].player_id, ids[0]);
    assert_eq!(rows[0].wins, 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[1].player_id, ids[1]);
    assert_eq!(rows[1].wins, 1);
    assert_eq!(rows[2].player_id, ids[2]);
    assert_eq!(rows[2].losses, 2);
    assert_eq!(rows[2].rank, 3);
}

#[test]
fn set_difference_breaks_win_ties() {
    let (f, ids) = Fixture::new(&["Anna", "Bo", "Carl", "Dora"]);
    // Anna and Bo both finish 1-1, but Anna's win is 3:0 and her loss 2:3,
    // while Bo wins 3:2 and loses 0:3.
    let matches = vec![
        f.finished(ids[0], ids[2], 3, 0),
        f.finished(ids[3], ids[0], 3, 2),
        f.finished(ids[1], ids[3], 3, 2),
        f.finished(ids[2], ids[1], 3, 0),
    ];
    let rows = compute_standings(&ids, &matches, f.name_of());

    let pos = |pid| rows.iter().position(|r| r.player_id == pid).unwrap();
    assert_eq!(rows[pos(ids[0])].wins, rows[pos(ids[1])].wins);
    assert!(pos(ids[0]) < pos(ids[1]));
    assert_eq!(rows[pos(ids[0])].sets_diff, 2);
    assert_eq!(rows[pos(ids[1])].sets_diff, -2);

    // Carl and Dora are level on wins and set difference; Dora's higher
    // sets-won total decides the order.
    assert_eq!(rows[pos(ids[2])].sets_diff, rows[pos(ids[3])].sets_diff);
    assert_eq!(rows[pos(ids[3])].sets_won, 5);
    assert_eq!(rows[pos(ids[2])].sets_won, 3);
    assert!(pos(ids[3]) < pos(ids[2]));
}

#[test]
fn name_breaks_full_stat_ties_case_insensitively() {
    let (f, ids) = Fixture::new(&["zoe", "Ben", "ada"]);
    // No matches played: everyone is level, so lowercase name decides.
    let rows = compute_standings(&ids, &[], f.name_of());
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ada", "Ben", "zoe"]);
    assert_eq!(
        rows.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn only_finished_matches_count() {
    let (f, ids) = Fixture::new(&["Anna", "Bo"]);
    let mut open = f.finished(ids[0], ids[1], 3, 1);
    open.status = MatchStatus::InProgress;
    let rows = compute_standings(&ids, &[open], f.name_of());
    for row in &rows {
        assert_eq!(row.played, 0);
        assert_eq!(row.wins, 0);
        assert_eq!(row.sets_diff, 0);
    }
}

#[test]
fn matches_outside_the_pool_are_ignored() {
    let (f, ids) = Fixture::new(&["Anna", "Bo"]);
    let outsider = Uuid::new_v4();
    let matches = vec![
        f.finished(ids[0], ids[1], 3, 2),
        f.finished(ids[0], outsider, 3, 0),
    ];
    let rows = compute_standings(&ids, &matches, f.name_of());
    assert_eq!(rows[0].player_id, ids[0]);
    assert_eq!(rows[0].played, 1);
    assert_eq!(rows[0].sets_won, 3);
}

#[test]
fn standings_are_stable_across_recomputation() {
    let (f, ids) = Fixture::new(&["Anna", "Bo", "Carl"]);
    let matches = vec![
        f.finished(ids[0], ids[1], 3, 2),
        f.finished(ids[1], ids[2], 3, 2),
        f.finished(ids[2], ids[0], 3, 2),
    ];
    let first = compute_standings(&ids, &matches, f.name_of());
    let second = compute_standings(&ids, &matches, f.name_of());
    assert_eq!(first, second);
}

#[test]
fn top_players_takes_leading_rows() {
    let (f, ids) = Fixture::new(&["Anna", "Bo", "Carl"]);
    let matches = vec![
        f.finished(ids[2], ids[1], 3, 0),
        f.finished(ids[2], ids[0], 3, 0),
        f.finished(ids[1], ids[0], 3, 0),
    ];
    let rows = compute_standings(&ids, &matches, f.name_of());
    assert_eq!(top_players(&rows, 2), vec![ids[2], ids[1]]);
}

#[test]
fn grouping_follows_the_round_encoding() {
    let tid = Uuid::new_v4();
    let a = GameMatch::new(
        tid,
        Round::Group { group: 0, round: 1 },
        1,
        Some(Uuid::new_v4()),
        Some(Uuid::new_v4()),
    );
    let b = GameMatch::new(
        tid,
        Round::Group { group: 1, round: 1 },
        2,
        Some(Uuid::new_v4()),
        Some(Uuid::new_v4()),
    );
    let grouped = group_matches_by_group(&[b.clone(), a.clone()]);
    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(grouped[&1][0].id, a.id);
    assert_eq!(grouped[&2][0].id, b.id);

    let ids = unique_player_ids(&[a.clone(), b]);
    assert_eq!(ids.len(), 4);
    assert_eq!(ids[0], a.player1.unwrap());
}
