// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Encounter, Encounters, Job, Rank, Ranking, Rankings, Report};

pub const BASE_TIME: i64 = 1_700_000_000;

pub fn create_test_rank(dps_percent: f64, job: &str, unix_time: i64) -> Rank {
    Rank::new(
        dps_percent,
        Job::new(job),
        unix_time,
        Report::new("aBcD1234", Some(7)).unwrap(),
    )
    .unwrap()
}

pub fn create_cleared_ranking(encounter_id: u32, dps_percent: f64) -> Ranking {
    Ranking::new(
        encounter_id,
        1,
        vec![create_test_rank(dps_percent, "WHM", BASE_TIME)],
    )
    .unwrap()
}

pub fn create_uncleared_ranking(encounter_id: u32) -> Ranking {
    Ranking::new(encounter_id, 0, Vec::new()).unwrap()
}

pub fn create_test_encounters(names: &[(&str, u32)]) -> Encounters {
    Encounters::new(
        names
            .iter()
            .map(|(name, id)| Encounter::new(name, vec![*id]).unwrap())
            .collect(),
    )
    .unwrap()
}

pub fn create_test_rankings(rankings: Vec<Ranking>) -> Rankings {
    Rankings::from_rankings(rankings).unwrap()
}
