// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Percentile band roles.
//!
//! A member holds exactly one band, chosen by their best cleared parse across
//! every configured encounter. Bands partition `(0, 100]`.

use crate::encounter::Encounters;
use crate::ranking::Rankings;
use crate::role::{PercentileBand, Role, RoleDecision, RoleType, Roles, RuleKind};

/// Band name, color and range, best band first.
pub const BANDS: [(&str, u32, PercentileBand); 7] = [
    ("Gold", 0x00e1_cc8a, PercentileBand::exactly(100.0)),
    ("Pink", 0x00d0_6fa4, PercentileBand::closed_open(99.0, 100.0)),
    ("Orange", 0x00ef_8633, PercentileBand::closed_open(95.0, 99.0)),
    ("Purple", 0x0096_44e5, PercentileBand::closed_open(75.0, 95.0)),
    ("Blue", 0x002a_72f6, PercentileBand::closed_open(50.0, 75.0)),
    ("Green", 0x0078_fa4c, PercentileBand::closed_open(25.0, 50.0)),
    ("Gray", 0x0063_6363, PercentileBand::open(0.0, 25.0)),
];

/// Builds the seven band roles.
#[must_use]
pub fn parsing_roles() -> Roles {
    Roles::from_unique(
        BANDS
            .iter()
            .map(|(name, color, band)| {
                Role::new(name, *color, RoleType::Parse, RuleKind::PercentileBand(*band))
            })
            .collect(),
    )
}

/// Decides whether the member's best cleared parse falls in `band`.
pub(crate) fn evaluate_band(
    band: &PercentileBand,
    encounters: &Encounters,
    rankings: &Rankings,
) -> RoleDecision {
    let Some((encounter, rank)) = encounters.best_dps_rank(rankings) else {
        return RoleDecision::deny("No encounter or rank found.");
    };

    if band.contains(rank.dps_percent()) {
        RoleDecision::grant(rank.best_dps_parse_string(encounter.name()))
    } else {
        RoleDecision::deny(band.miss_reason())
    }
}
