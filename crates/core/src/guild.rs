// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::{RoleCommand, RoleMutation};
use clearingway_domain::{
    ConfigGuild, DomainError, Encounter, Encounters, Evaluation, Menus, Rankings, Roles,
    RuleKind, clear_roles, default_menus, legend_roles, parsing_roles,
};
use std::collections::HashSet;

/// A server's encounters, menus and the roles derived from them.
///
/// Immutable once built; a config reload builds a new `Guild`.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    /// Platform guild id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Encounters evaluated for members.
    pub encounters: Encounters,
    /// Configured menus, including the defaults.
    pub menus: Menus,
    /// Every role the guild manages.
    pub roles: Roles,
}

impl Guild {
    /// Builds a guild from its configuration.
    ///
    /// Roles are the percentile bands, the legend tiers, one clear role per
    /// encounter and every extra role declared by encounter menus.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if any encounter, menu or role is
    /// invalid, or if two roles share a name.
    pub fn from_config(config: &ConfigGuild) -> Result<Self, CoreError> {
        Self::build(config).map_err(|source| CoreError::Configuration {
            guild: config.id.clone(),
            source,
        })
    }

    fn build(config: &ConfigGuild) -> Result<Self, DomainError> {
        let encounters: Encounters = Encounters::new(
            config
                .encounters
                .iter()
                .map(|e| Encounter::new(&e.name, e.ids.clone()))
                .collect::<Result<Vec<Encounter>, DomainError>>()?,
        )?;

        let mut menus: Menus = default_menus(&config.name);
        for menu in &config.menus {
            menus.apply_config(menu)?;
        }
        menus.link_prerequisites(&encounters)?;

        let mut roles: Roles = parsing_roles();
        roles.extend(legend_roles())?;
        roles.extend(clear_roles(&encounters))?;
        for role in menus.roles() {
            roles.push(role.clone())?;
        }

        Ok(Self {
            id: config.id.clone(),
            name: config.name.clone(),
            encounters,
            menus,
            roles,
        })
    }

    /// Evaluates every role against a member's rankings.
    #[must_use]
    pub fn evaluate(&self, rankings: &Rankings) -> Vec<Evaluation<'_>> {
        self.roles.evaluate(&self.encounters, rankings)
    }

    /// Works out which rule-derived roles a member should gain or lose.
    ///
    /// Roles that apply and are not held are granted; roles that are held
    /// and no longer apply are revoked. Menu roles are left alone.
    #[must_use]
    pub fn reconcile(&self, member_id: &str, held: &[String], rankings: &Rankings) -> RoleMutation {
        let held: HashSet<&str> = held.iter().map(String::as_str).collect();
        let mut mutation: RoleMutation = RoleMutation::default();

        for evaluation in self.evaluate(rankings) {
            let role_derived: bool = evaluation.role.role_type.is_rule_derived()
                && !matches!(evaluation.role.rule, RuleKind::MenuExtra { .. });
            if !role_derived {
                continue;
            }
            let name: &str = &evaluation.role.name;
            let is_held: bool = held.contains(name);

            if evaluation.decision.applies && !is_held {
                mutation.grants.push(RoleCommand::justified(
                    member_id,
                    name,
                    &evaluation.decision.reason,
                ));
            } else if !evaluation.decision.applies && is_held {
                mutation.revocations.push(RoleCommand::justified(
                    member_id,
                    name,
                    &evaluation.decision.reason,
                ));
            }
        }

        mutation
    }
}
