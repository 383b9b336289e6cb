// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    BASE_TIME, create_cleared_ranking, create_test_encounters, create_test_rank,
    create_test_rankings, create_uncleared_ranking,
};
use crate::{
    Encounters, Evaluation, LEGEND_TIERS, Ranking, Rankings, Roles, legend_role_string,
    legend_roles,
};

fn create_ultimates() -> Encounters {
    create_test_encounters(&[
        ("UCOB", 1060),
        ("UWU", 1061),
        ("TEA", 1062),
        ("DSR", 1065),
        ("TOP", 1068),
    ])
}

fn applicable_tiers(rankings: &Rankings) -> Vec<String> {
    let encounters: Encounters = create_ultimates();
    let roles: Roles = legend_roles();
    roles
        .applicable(&encounters, rankings)
        .iter()
        .map(|e| e.role.name.clone())
        .collect()
}

#[test]
fn test_each_clear_count_grants_exactly_one_tier() {
    let ids: [u32; 4] = [1060, 1061, 1062, 1065];
    for count in 1..=4_usize {
        let rankings: Rankings = create_test_rankings(
            ids[..count]
                .iter()
                .map(|id| create_cleared_ranking(*id, 50.0))
                .collect(),
        );
        let tiers: Vec<String> = applicable_tiers(&rankings);
        assert_eq!(tiers, vec![LEGEND_TIERS[count - 1].to_string()]);
    }
}

#[test]
fn test_zero_and_five_clears_grant_no_tier() {
    assert!(applicable_tiers(&Rankings::new()).is_empty());

    let rankings: Rankings = create_test_rankings(
        [1060, 1061, 1062, 1065, 1068]
            .iter()
            .map(|id| create_cleared_ranking(*id, 50.0))
            .collect(),
    );
    assert!(applicable_tiers(&rankings).is_empty());
}

#[test]
fn test_two_clears_and_one_attempt_is_double_legend() {
    let encounters: Encounters = create_test_encounters(&[("A", 1), ("B", 2), ("C", 3)]);
    let rankings: Rankings = create_test_rankings(vec![
        create_cleared_ranking(1, 20.0),
        create_cleared_ranking(2, 70.0),
        create_uncleared_ranking(3),
    ]);
    let roles: Roles = legend_roles();

    let applicable: Vec<Evaluation<'_>> = roles.applicable(&encounters, &rankings);
    assert_eq!(applicable.len(), 1);
    assert_eq!(applicable[0].role.name, "The Double Legend");

    let reason: &str = &applicable[0].decision.reason;
    assert!(reason.starts_with("Cleared the following two Ultimate fights:"));
    assert!(reason.contains("`A`"));
    assert!(reason.contains("`B`"));
    assert!(!reason.contains("`C`"));
}

#[test]
fn test_tier_miss_reasons() {
    let encounters: Encounters = create_ultimates();
    let rankings: Rankings = create_test_rankings(vec![
        create_cleared_ranking(1060, 20.0),
        create_cleared_ranking(1061, 20.0),
    ]);
    let roles: Roles = legend_roles();
    let reasons: Vec<String> = roles
        .evaluate(&encounters, &rankings)
        .into_iter()
        .filter(|e| !e.decision.applies)
        .map(|e| e.decision.reason)
        .collect();

    assert_eq!(
        reasons,
        vec![
            String::from("Did not clear only one ultimate."),
            String::from("Did not clear only three ultimates."),
            String::from("Did not clear all four ultimates."),
        ]
    );
}

#[test]
fn test_empty_rankings_reason() {
    let encounters: Encounters = create_ultimates();
    let roles: Roles = legend_roles();
    for evaluation in roles.evaluate(&encounters, &Rankings::new()) {
        assert!(!evaluation.decision.applies);
        assert_eq!(evaluation.decision.reason, "No encounter or rank found.");
    }
}

#[test]
fn test_legend_string_uses_most_recent_kill() {
    let encounters: Encounters = create_test_encounters(&[("DSR", 1065)]);
    let ranking: Ranking = Ranking::new(
        1065,
        2,
        vec![
            create_test_rank(99.0, "DRG", BASE_TIME),
            create_test_rank(40.0, "SGE", BASE_TIME + 600),
        ],
    )
    .unwrap();
    let rankings: Rankings = create_test_rankings(vec![ranking]);

    let output: String = legend_role_string(&encounters.clears(&rankings));
    assert_eq!(
        output,
        format!(
            "Cleared the following one Ultimate fight:\n     `DSR` with `SGE` on <t:{}:F> (https://www.fflogs.com/reports/aBcD1234#fight=7).",
            BASE_TIME + 600
        )
    );
}

#[test]
fn test_legend_string_generic_lead_for_other_counts() {
    let encounters: Encounters = create_ultimates();
    let rankings: Rankings = create_test_rankings(
        [1060, 1061, 1062, 1065, 1068]
            .iter()
            .map(|id| create_cleared_ranking(*id, 50.0))
            .collect(),
    );

    let output: String = legend_role_string(&encounters.clears(&rankings));
    assert!(output.starts_with("Cleared the following Ultimate fights:\n"));
    assert_eq!(output.lines().count(), 6);
}
