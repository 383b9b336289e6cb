// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One "cleared" role per encounter.
//!
//! These are the prerequisites that clear-gated menus check for.

use crate::encounter::Encounters;
use crate::ranking::Rankings;
use crate::role::{Role, RoleDecision, RoleType, Roles, RuleKind};

/// Color of encounter clear roles.
pub const CLEAR_COLOR: u32 = 0x0011_806a;

/// Name of the clear role for an encounter.
#[must_use]
pub fn clear_role_name(encounter: &str) -> String {
    format!("{encounter} Cleared")
}

/// Builds one clear role for each encounter, in declared order.
#[must_use]
pub fn clear_roles(encounters: &Encounters) -> Roles {
    Roles::from_unique(
        encounters
            .iter()
            .map(|encounter| {
                Role::new(
                    &clear_role_name(encounter.name()),
                    CLEAR_COLOR,
                    RoleType::Clear,
                    RuleKind::EncounterClear {
                        encounter: encounter.name().to_string(),
                    },
                )
            })
            .collect(),
    )
}

pub(crate) fn evaluate_clear(
    encounter_name: &str,
    encounters: &Encounters,
    rankings: &Rankings,
) -> RoleDecision {
    let Some(encounter) = encounters.get(encounter_name) else {
        return RoleDecision::deny(format!("Encounter `{encounter_name}` is not defined."));
    };

    match encounter
        .cleared_ranking(rankings)
        .and_then(|ranking| ranking.most_recent_rank())
    {
        Some(rank) => RoleDecision::grant(format!(
            "Cleared `{}` with `{}` on <t:{}:F> ({}).",
            encounter.name(),
            rank.job().abbreviation(),
            rank.unix_time(),
            rank.report().url()
        )),
        None => RoleDecision::deny(format!("Has not cleared `{}`.", encounter.name())),
    }
}
