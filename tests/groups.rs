//! Integration tests for group partitioning and grouped match generation.

use std::collections::BTreeSet;
use table_tennis_tournament_web::{
    default_group_count, grouped_round_robin_matches, partition, PlayerId, Round, ScheduleKind,
    TournamentError, MAX_GROUP_COUNT,
};
use uuid::Uuid;

fn players(n: usize) -> Vec<PlayerId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

#[test]
fn partition_splits_evenly_in_seed_order() {
    let ids = players(16);
    let groups = partition(&ids, 4).unwrap();
    assert_eq!(groups.len(), 4);
    for (idx, pool) in groups.iter().enumerate() {
        assert_eq!(pool.len(), 4);
        // Sequential block fill: group 0 gets seeds 0..4, group 1 seeds 4..8, ...
        let expected: Vec<Option<PlayerId>> =
            ids[idx * 4..(idx + 1) * 4].iter().copied().map(Some).collect();
        assert_eq!(*pool, expected);
    }
}

#[test]
fn partition_pads_odd_pools_with_byes() {
    let ids = players(9);
    let groups = partition(&ids, 2).unwrap();
    assert_eq!(groups.len(), 2);
    for pool in &groups {
        assert_eq!(pool.len() % 2, 0);
    }
    let real: usize = groups
        .iter()
        .flatten()
        .filter(|slot| slot.is_some())
        .count();
    assert_eq!(real, 9);
    let byes: usize = groups
        .iter()
        .flatten()
        .filter(|slot| slot.is_none())
        .count();
    assert!(byes >= 1);
}

#[test]
fn partition_rejects_zero_groups_and_tiny_pools() {
    assert!(matches!(
        partition(&players(8), 0),
        Err(TournamentError::InvalidGroupConfiguration)
    ));
    assert!(matches!(
        partition(&players(1), 2),
        Err(TournamentError::InvalidPlayerCount { required: 2 })
    ));
}

#[test]
fn group_count_is_capped_by_the_round_encoding() {
    // A ninth group would encode its rounds as 9xx, inside the playoff range.
    assert!(matches!(
        partition(&players(36), 9),
        Err(TournamentError::InvalidGroupConfiguration)
    ));
    assert!(matches!(
        grouped_round_robin_matches(Uuid::new_v4(), &players(36), 9, ScheduleKind::Berger),
        Err(TournamentError::InvalidGroupConfiguration)
    ));

    // Eight groups is the ceiling: every round stays below 900 and the
    // integer form round-trips back to the same group round.
    let matches =
        grouped_round_robin_matches(Uuid::new_v4(), &players(32), MAX_GROUP_COUNT, ScheduleKind::Berger)
            .unwrap();
    assert!(!matches.is_empty());
    for m in &matches {
        let encoded = m.round.encode();
        assert!((100..900).contains(&encoded));
        assert_eq!(Round::decode(encoded), m.round);
        assert!(m.round.is_group_stage());
    }
}

#[test]
fn default_group_count_heuristic() {
    assert_eq!(default_group_count(4), 2);
    assert_eq!(default_group_count(8), 2);
    assert_eq!(default_group_count(9), 4);
    assert_eq!(default_group_count(16), 4);
    assert_eq!(default_group_count(20), 5);
    assert_eq!(default_group_count(100), 8);
}

#[test]
fn grouped_matches_use_the_group_round_encoding() {
    let ids = players(8);
    let tid = Uuid::new_v4();
    let matches = grouped_round_robin_matches(tid, &ids, 2, ScheduleKind::Berger).unwrap();
    // Two groups of 4: 6 matches each.
    assert_eq!(matches.len(), 12);

    let rounds: BTreeSet<u32> = matches.iter().map(|m| m.round.encode()).collect();
    assert_eq!(
        rounds,
        BTreeSet::from([101, 102, 103, 201, 202, 203])
    );
    for m in &matches {
        assert!(m.round.is_group_stage());
        assert!(!m.round.is_playoff());
    }

    // Match numbers run globally across groups.
    let numbers: BTreeSet<u32> = matches.iter().map(|m| m.match_number).collect();
    assert_eq!(numbers, (1..=12).collect::<BTreeSet<u32>>());
}

#[test]
fn grouped_matches_only_pair_within_a_group() {
    let ids = players(8);
    let groups = partition(&ids, 2).unwrap();
    let matches =
        grouped_round_robin_matches(Uuid::new_v4(), &ids, 2, ScheduleKind::Standard).unwrap();
    for m in &matches {
        let Round::Group { group, .. } = m.round else {
            panic!("expected a group round");
        };
        let pool = &groups[group as usize];
        assert!(pool.contains(&m.player1));
        assert!(pool.contains(&m.player2));
    }
}

#[test]
fn group_letters_follow_group_index() {
    let matches =
        grouped_round_robin_matches(Uuid::new_v4(), &players(8), 2, ScheduleKind::Berger).unwrap();
    let letters: BTreeSet<char> = matches
        .iter()
        .filter_map(|m| m.round.group_letter())
        .collect();
    assert_eq!(letters, BTreeSet::from(['A', 'B']));
}
