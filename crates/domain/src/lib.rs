// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clear_roles;
mod config;
mod encounter;
mod error;
mod legend_roles;
mod menu;
mod parsing_roles;
mod ranking;
mod role;

#[cfg(test)]
mod tests;

pub use clear_roles::{CLEAR_COLOR, clear_role_name, clear_roles};
pub use config::{Config, ConfigEncounter, ConfigGuild, ConfigMenu, ConfigRole};
pub use encounter::{Clear, Encounter, Encounters};
pub use error::DomainError;
pub use legend_roles::{LEGEND_COLOR, LEGEND_TIERS, legend_role_string, legend_roles};
pub use menu::{
    CommandType, CustomId, DEFAULT_EXTRA_ROLE_COLOR, Menu, MenuAdditionalData, MenuRoleHelper,
    MenuType, Menus, default_menus,
};
pub use parsing_roles::{BANDS, parsing_roles};
pub use ranking::{Job, Rank, Ranking, Rankings, Report};
pub use role::{Evaluation, PercentileBand, Role, RoleDecision, RoleType, Roles, RuleKind};
