// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    BASE_TIME, create_cleared_ranking, create_test_encounters, create_test_rank,
    create_test_rankings, create_uncleared_ranking,
};
use crate::{Clear, DomainError, Encounter, Encounters, Rank, Ranking, Rankings};

#[test]
fn test_encounter_requires_name_and_ids() {
    assert_eq!(
        Encounter::new("  ", vec![1]),
        Err(DomainError::InvalidEncounterName)
    );
    assert_eq!(
        Encounter::new("UWU", Vec::new()),
        Err(DomainError::EmptyEncounterIds(String::from("UWU")))
    );
}

#[test]
fn test_encounters_reject_duplicate_names() {
    let result: Result<Encounters, DomainError> = Encounters::new(vec![
        Encounter::new("UWU", vec![1]).unwrap(),
        Encounter::new("UWU", vec![2]).unwrap(),
    ]);
    assert_eq!(result, Err(DomainError::DuplicateEncounter(String::from("UWU"))));
}

#[test]
fn test_clears_follow_declared_order() {
    let encounters: Encounters =
        create_test_encounters(&[("UCOB", 1060), ("UWU", 1061), ("TEA", 1062)]);
    let rankings: Rankings = create_test_rankings(vec![
        create_cleared_ranking(1062, 40.0),
        create_cleared_ranking(1060, 90.0),
        create_uncleared_ranking(1061),
    ]);

    let names: Vec<&str> = encounters
        .clears(&rankings)
        .iter()
        .map(|c| c.encounter.name())
        .collect();
    assert_eq!(names, vec!["UCOB", "TEA"]);
}

#[test]
fn test_clears_is_idempotent() {
    let encounters: Encounters = create_test_encounters(&[("UCOB", 1060), ("UWU", 1061)]);
    let rankings: Rankings = create_test_rankings(vec![
        create_cleared_ranking(1060, 90.0),
        create_cleared_ranking(1061, 10.0),
    ]);

    let first: Vec<Clear<'_>> = encounters.clears(&rankings);
    let second: Vec<Clear<'_>> = encounters.clears(&rankings);
    assert_eq!(first, second);
}

#[test]
fn test_clears_uses_last_cleared_id() {
    let encounters: Encounters =
        Encounters::new(vec![Encounter::new("TOP", vec![1068, 1077]).unwrap()]).unwrap();
    let late: Ranking =
        Ranking::new(1077, 1, vec![create_test_rank(30.0, "PCT", BASE_TIME + 100)]).unwrap();
    let rankings: Rankings =
        create_test_rankings(vec![create_cleared_ranking(1068, 80.0), late]);

    let clears: Vec<Clear<'_>> = encounters.clears(&rankings);
    assert_eq!(clears.len(), 1);
    assert_eq!(clears[0].ranking.encounter_id(), 1077);
}

#[test]
fn test_best_dps_rank_ignores_uncleared() {
    let encounters: Encounters = create_test_encounters(&[("UCOB", 1060), ("UWU", 1061)]);
    let uncleared: Ranking =
        Ranking::new(1061, 0, vec![create_test_rank(99.0, "BLM", BASE_TIME)]).unwrap();
    let rankings: Rankings =
        create_test_rankings(vec![create_cleared_ranking(1060, 42.0), uncleared]);

    let (encounter, rank): (&Encounter, &Rank) = encounters.best_dps_rank(&rankings).unwrap();
    assert_eq!(encounter.name(), "UCOB");
    assert!((rank.dps_percent() - 42.0).abs() < f64::EPSILON);
}

#[test]
fn test_best_dps_rank_tie_keeps_first_encounter() {
    let encounters: Encounters =
        create_test_encounters(&[("UCOB", 1060), ("UWU", 1061), ("TEA", 1062)]);
    let rankings: Rankings = create_test_rankings(vec![
        create_cleared_ranking(1060, 10.0),
        create_cleared_ranking(1061, 75.0),
        create_cleared_ranking(1062, 75.0),
    ]);

    for _ in 0..3 {
        let (encounter, _): (&Encounter, &Rank) = encounters.best_dps_rank(&rankings).unwrap();
        assert_eq!(encounter.name(), "UWU");
    }
}

#[test]
fn test_best_dps_rank_empty_rankings() {
    let encounters: Encounters = create_test_encounters(&[("UCOB", 1060)]);
    assert!(encounters.best_dps_rank(&Rankings::new()).is_none());
}
