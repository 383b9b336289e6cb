// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    BASE_TIME, GUILD_ID, MEMBER_ID, create_evaluate_request, create_rank_record,
    create_ranking_record, create_test_registry,
};
use crate::{
    ApiError, EvaluateResponse, EvaluationInfo, RankingRecord, evaluate_member,
    rankings_from_request,
};
use clearingway::GuildRegistry;

fn applied(response: &EvaluateResponse) -> Vec<&str> {
    response
        .evaluations
        .iter()
        .filter(|e| e.applies)
        .map(|e| e.role.as_str())
        .collect()
}

fn evaluation<'a>(response: &'a EvaluateResponse, role: &str) -> &'a EvaluationInfo {
    response.evaluations.iter().find(|e| e.role == role).unwrap()
}

#[test]
fn test_perfect_parse_earns_gold() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_evaluate_request(vec![create_ranking_record(1060, 100.0)], &[]);

    let response: EvaluateResponse = evaluate_member(&registry, GUILD_ID, &request).unwrap();

    assert_eq!(response.member_id, MEMBER_ID);
    assert_eq!(applied(&response), vec!["Gold", "The Legend", "UCoB Cleared"]);
    assert_eq!(
        evaluation(&response, "Gold").reason,
        format!(
            "Best parse was `100.00` with `DRG` in `UCoB` on <t:{BASE_TIME}:F> (https://www.fflogs.com/reports/QwErTy12#fight=11)."
        )
    );
    assert_eq!(
        evaluation(&response, "Pink").reason,
        "Best parse was not between 99 and 100."
    );
}

#[test]
fn test_two_clears_earn_double_legend() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_evaluate_request(
        vec![
            create_ranking_record(1061, 80.0),
            create_ranking_record(1065, 55.0),
        ],
        &["The Legend"],
    );

    let response: EvaluateResponse = evaluate_member(&registry, GUILD_ID, &request).unwrap();

    let double: &EvaluationInfo = evaluation(&response, "The Double Legend");
    assert!(double.applies);
    assert!(
        double
            .reason
            .starts_with("Cleared the following two Ultimate fights:")
    );
    assert!(double.reason.contains("\n     `UWU` with `DRG` on"));
    assert!(double.reason.contains("\n     `DSR` with `DRG` on"));
    assert_eq!(
        evaluation(&response, "The Legend").reason,
        "Did not clear only one ultimate."
    );

    let grants: Vec<&str> = response.grants.iter().map(|c| c.role.as_str()).collect();
    let revocations: Vec<&str> = response.revocations.iter().map(|c| c.role.as_str()).collect();
    assert_eq!(grants, vec!["Purple", "The Double Legend", "UWU Cleared", "DSR Cleared"]);
    assert_eq!(revocations, vec!["The Legend"]);
}

#[test]
fn test_empty_rankings_apply_nothing() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_evaluate_request(Vec::new(), &[]);

    let response: EvaluateResponse = evaluate_member(&registry, GUILD_ID, &request).unwrap();

    assert!(applied(&response).is_empty());
    assert_eq!(
        evaluation(&response, "Gold").reason,
        "No encounter or rank found."
    );
    assert_eq!(
        evaluation(&response, "The Legend").reason,
        "No encounter or rank found."
    );
    assert!(response.grants.is_empty());
    assert!(response.revocations.is_empty());
}

#[test]
fn test_unknown_guild_is_resource_not_found() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_evaluate_request(Vec::new(), &[]);

    let result: Result<EvaluateResponse, ApiError> =
        evaluate_member(&registry, "guild-404", &request);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Guild"
    ));
}

#[test]
fn test_out_of_range_percentile_is_invalid_input() {
    let records: Vec<RankingRecord> = vec![RankingRecord {
        encounter_id: 1060,
        total_kills: 1,
        ranks: vec![create_rank_record(100.5, BASE_TIME)],
    }];

    let result = rankings_from_request(&records);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "dps_percent"
    ));
}

#[test]
fn test_kills_without_ranks_is_rule_violation() {
    let records: Vec<RankingRecord> = vec![RankingRecord {
        encounter_id: 1060,
        total_kills: 2,
        ranks: Vec::new(),
    }];

    let result = rankings_from_request(&records);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "clear_requires_rank"
    ));
}

#[test]
fn test_duplicate_encounter_id_is_rule_violation() {
    let records: Vec<RankingRecord> = vec![
        create_ranking_record(1060, 50.0),
        create_ranking_record(1060, 60.0),
    ];

    let result = rankings_from_request(&records);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_ranking"
    ));
}

#[test]
fn test_evaluate_request_parses_from_json() {
    let json: &str = r#"{
        "member_id": "member-42",
        "rankings": [
            {
                "encounter_id": 1062,
                "total_kills": 3,
                "ranks": [
                    {"dps_percent": 97.1, "job": "PCT", "start_time": 1700000000, "report_code": "abc"}
                ]
            }
        ]
    }"#;

    let request: crate::EvaluateRequest = serde_json::from_str(json).unwrap();
    let registry: GuildRegistry = create_test_registry();
    let response: EvaluateResponse = evaluate_member(&registry, GUILD_ID, &request).unwrap();

    assert!(request.held_roles.is_empty());
    assert_eq!(request.rankings[0].ranks[0].fight_id, None);
    assert_eq!(applied(&response), vec!["Orange", "The Legend", "TEA Cleared"]);
}
