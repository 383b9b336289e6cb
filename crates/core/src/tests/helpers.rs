// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Guild, Interaction};
use clearingway_domain::{
    ConfigEncounter, ConfigGuild, ConfigMenu, ConfigRole, Job, Rank, Ranking, Rankings, Report,
};
use std::collections::BTreeMap;

pub const BASE_TIME: i64 = 1_700_000_000;
pub const MEMBER_ID: &str = "member-42";

pub const UCOB: u32 = 1060;
pub const UWU: u32 = 1061;
pub const TEA: u32 = 1062;
pub const DSR: u32 = 1065;

fn create_test_role(name: &str) -> ConfigRole {
    ConfigRole {
        name: String::from(name),
        ..ConfigRole::default()
    }
}

pub fn create_test_config() -> ConfigGuild {
    ConfigGuild {
        id: String::from("guild-1"),
        name: String::from("Ultimate Hub"),
        encounters: [("UCoB", UCOB), ("UWU", UWU), ("TEA", TEA), ("DSR", DSR)]
            .into_iter()
            .map(|(name, id)| ConfigEncounter {
                name: String::from(name),
                ids: vec![id],
            })
            .collect(),
        menus: vec![
            ConfigMenu {
                name: String::from("menuDsr"),
                menu_type: String::from("menuEncounter"),
                title: Some(String::from("DSR Roles")),
                require_clear: true,
                encounter: Some(String::from("DSR")),
                roles: vec![create_test_role("DSR Tank"), create_test_role("DSR Healer")],
                ..ConfigMenu::default()
            },
            ConfigMenu {
                name: String::from("menuComfy"),
                menu_type: String::from("menuEncounter"),
                title: Some(String::from("Comfy Roles")),
                multi_select: true,
                roles: vec![create_test_role("UWU Comfy"), create_test_role("TEA Comfy")],
                ..ConfigMenu::default()
            },
        ],
    }
}

pub fn create_test_guild() -> Guild {
    Guild::from_config(&create_test_config()).unwrap()
}

pub fn create_cleared_ranking(encounter_id: u32, dps_percent: f64) -> Ranking {
    let rank: Rank = Rank::new(
        dps_percent,
        Job::new("sch"),
        BASE_TIME,
        Report::new("xYz987", Some(3)).unwrap(),
    )
    .unwrap();
    Ranking::new(encounter_id, 1, vec![rank]).unwrap()
}

pub fn create_test_rankings(entries: &[(u32, f64)]) -> Rankings {
    Rankings::from_rankings(
        entries
            .iter()
            .map(|(id, percent)| create_cleared_ranking(*id, *percent))
            .collect(),
    )
    .unwrap()
}

pub fn create_test_interaction(custom_id: &str, held: &[&str], values: &[&str]) -> Interaction {
    Interaction {
        member_id: String::from(MEMBER_ID),
        custom_id: String::from(custom_id),
        held_roles: held.iter().map(|r| (*r).to_string()).collect(),
        values: values.iter().map(|v| (*v).to_string()).collect(),
        fields: BTreeMap::new(),
    }
}
