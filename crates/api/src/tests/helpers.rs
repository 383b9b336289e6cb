// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use clearingway::GuildRegistry;
use clearingway_domain::{Config, ConfigEncounter, ConfigGuild, ConfigMenu, ConfigRole};

use crate::{EvaluateRequest, InteractionRequest, RankRecord, RankingRecord};

pub const GUILD_ID: &str = "guild-1";
pub const MEMBER_ID: &str = "member-42";
pub const BASE_TIME: i64 = 1_700_000_000;

pub fn create_test_config() -> Config {
    Config {
        guilds: vec![ConfigGuild {
            id: String::from(GUILD_ID),
            name: String::from("Ultimate Hub"),
            encounters: [("UCoB", 1060), ("UWU", 1061), ("TEA", 1062), ("DSR", 1065)]
                .into_iter()
                .map(|(name, id)| ConfigEncounter {
                    name: String::from(name),
                    ids: vec![id],
                })
                .collect(),
            menus: vec![ConfigMenu {
                name: String::from("menuDsr"),
                menu_type: String::from("menuEncounter"),
                title: Some(String::from("DSR Roles")),
                require_clear: true,
                encounter: Some(String::from("DSR")),
                roles: vec![ConfigRole {
                    name: String::from("DSR Tank"),
                    ..ConfigRole::default()
                }],
                ..ConfigMenu::default()
            }],
        }],
    }
}

pub fn create_test_registry() -> GuildRegistry {
    let (registry, errors) = GuildRegistry::from_config(&create_test_config());
    assert!(errors.is_empty());
    registry
}

pub fn create_rank_record(dps_percent: f64, start_time: i64) -> RankRecord {
    RankRecord {
        dps_percent,
        job: String::from("drg"),
        start_time,
        report_code: String::from("QwErTy12"),
        fight_id: Some(11),
    }
}

pub fn create_ranking_record(encounter_id: u32, dps_percent: f64) -> RankingRecord {
    RankingRecord {
        encounter_id,
        total_kills: 1,
        ranks: vec![create_rank_record(dps_percent, BASE_TIME)],
    }
}

pub fn create_evaluate_request(rankings: Vec<RankingRecord>, held: &[&str]) -> EvaluateRequest {
    EvaluateRequest {
        member_id: String::from(MEMBER_ID),
        held_roles: held.iter().map(|r| (*r).to_string()).collect(),
        rankings,
    }
}

pub fn create_interaction_request(custom_id: &str, held: &[&str], values: &[&str]) -> InteractionRequest {
    InteractionRequest {
        member_id: String::from(MEMBER_ID),
        custom_id: String::from(custom_id),
        held_roles: held.iter().map(|r| (*r).to_string()).collect(),
        values: values.iter().map(|v| (*v).to_string()).collect(),
        fields: std::collections::BTreeMap::new(),
    }
}
