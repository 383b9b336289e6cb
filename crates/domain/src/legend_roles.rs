// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ultimate clear-count tiers.
//!
//! Each tier requires an exact number of cleared encounters, so at most one
//! tier applies to any clear set.

use crate::encounter::{Clear, Encounters};
use crate::ranking::Rankings;
use crate::role::{Role, RoleDecision, RoleType, Roles, RuleKind};

/// Color shared by every legend tier.
pub const LEGEND_COLOR: u32 = 0x0034_98db;

/// Tier names indexed by required clear count minus one.
pub const LEGEND_TIERS: [&str; 4] = [
    "The Legend",
    "The Double Legend",
    "The Triple Legend",
    "The Quad Legend",
];

/// Builds the four legend tier roles.
#[must_use]
pub fn legend_roles() -> Roles {
    Roles::from_unique(
        LEGEND_TIERS
            .iter()
            .enumerate()
            .map(|(index, name)| {
                Role::new(
                    name,
                    LEGEND_COLOR,
                    RoleType::Legend,
                    RuleKind::LegendTier { clears: index + 1 },
                )
            })
            .collect(),
    )
}

/// Decides whether exactly `required` encounters are cleared.
pub(crate) fn evaluate_tier(
    required: usize,
    encounters: &Encounters,
    rankings: &Rankings,
) -> RoleDecision {
    let clears: Vec<Clear<'_>> = encounters.clears(rankings);
    if clears.is_empty() {
        return RoleDecision::deny("No encounter or rank found.");
    }
    if clears.len() == required {
        return RoleDecision::grant(legend_role_string(&clears));
    }
    RoleDecision::deny(tier_miss_reason(required))
}

/// Lists every clear with the job, time and report of its most recent kill.
#[must_use]
pub fn legend_role_string(clears: &[Clear<'_>]) -> String {
    let mut output: String = String::from(lead_sentence(clears.len()));

    for clear in clears {
        let Some(rank) = clear.ranking.most_recent_rank() else {
            continue;
        };
        output.push_str(&format!(
            "\n     `{}` with `{}` on <t:{}:F> ({}).",
            clear.encounter.name(),
            rank.job().abbreviation(),
            rank.unix_time(),
            rank.report().url()
        ));
    }

    output
}

const fn lead_sentence(count: usize) -> &'static str {
    match count {
        1 => "Cleared the following one Ultimate fight:",
        2 => "Cleared the following two Ultimate fights:",
        3 => "Cleared the following three Ultimate fights:",
        4 => "Cleared the following four Ultimate fights:",
        _ => "Cleared the following Ultimate fights:",
    }
}

fn tier_miss_reason(required: usize) -> String {
    match required {
        1 => String::from("Did not clear only one ultimate."),
        2 => String::from("Did not clear only two ultimates."),
        3 => String::from("Did not clear only three ultimates."),
        4 => String::from("Did not clear all four ultimates."),
        n => format!("Did not clear exactly {n} ultimates."),
    }
}
