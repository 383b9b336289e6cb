// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, Interaction};
use crate::error::CoreError;
use crate::guild::Guild;
use crate::render::{main_menu_payload, menu_payload, verify_modal};
use crate::state::{Outcome, RoleCommand, RoleMutation};
use clearingway_domain::{CustomId, Menu, MenuAdditionalData, MenuRoleHelper, MenuType, RoleType};
use std::collections::HashSet;
use tracing::debug;

/// Routes an interaction to its menu and works out the outcome.
///
/// Dispatch never changes the guild. Role changes are returned as a
/// [`RoleMutation`] for the transport to apply.
///
/// # Arguments
///
/// * `guild` - The guild the interaction happened in
/// * `interaction` - The interaction
///
/// # Errors
///
/// Returns an error if:
/// - The custom id is malformed or names an unknown command
/// - The menu does not exist in the guild
/// - The command does not fit the menu's type
/// - A selection is empty, too large, or names a role the menu does not offer
/// - A verification submission lacks a field
pub fn dispatch(guild: &Guild, interaction: &Interaction) -> Result<Outcome, CoreError> {
    let custom_id: CustomId =
        CustomId::parse(&interaction.custom_id).map_err(|_| CoreError::UnknownCommand {
            custom_id: interaction.custom_id.clone(),
        })?;

    let menu: &Menu = guild
        .menus
        .get(custom_id.menu())
        .ok_or_else(|| CoreError::MenuNotFound(custom_id.menu().to_string()))?;

    let command: Command = Command::resolve(menu, &custom_id, interaction)?;
    debug!(
        guild = %guild.id,
        member = %interaction.member_id,
        custom_id = %custom_id,
        "Dispatching interaction"
    );

    match command {
        Command::OpenMenu { .. } => open_menu(guild, menu),
        Command::ClearsModal { character, world } => Ok(Outcome::FetchRankings {
            member_id: interaction.member_id.clone(),
            character,
            world,
        }),
        Command::RemoveComfy => Ok(remove_roles(guild, interaction, &[RoleType::Comfy])),
        Command::RemoveColor => Ok(remove_roles(guild, interaction, &[RoleType::Parse])),
        Command::RemoveAll => Ok(remove_roles(guild, interaction, &RoleType::ALL)),
        Command::EncounterProcess { selected, .. } => {
            encounter_process(menu, interaction, &selected)
        }
    }
}

fn open_menu(guild: &Guild, menu: &Menu) -> Result<Outcome, CoreError> {
    match menu.menu_type {
        MenuType::Main => main_menu_payload(&guild.menus)
            .map(Outcome::Respond)
            .ok_or_else(|| CoreError::MenuNotFound(menu.name.clone())),
        MenuType::Verify => Ok(Outcome::Modal(verify_modal(menu))),
        MenuType::Remove | MenuType::Encounter => menu_payload(menu)
            .map(Outcome::Respond)
            .ok_or_else(|| CoreError::MenuNotFound(menu.name.clone())),
    }
}

/// Revokes every held guild role of the given types, in guild role order.
fn remove_roles(guild: &Guild, interaction: &Interaction, types: &[RoleType]) -> Outcome {
    let held: HashSet<&str> = interaction.held_roles.iter().map(String::as_str).collect();

    let revocations: Vec<RoleCommand> = guild
        .roles
        .of_types(types)
        .filter(|role| held.contains(role.name.as_str()))
        .map(|role| RoleCommand::new(&interaction.member_id, &role.name))
        .collect();

    let message: String = if revocations.is_empty() {
        String::from("You have no roles to remove.")
    } else {
        format!(
            "Removed {}.",
            revocations
                .iter()
                .map(|c| format!("`{}`", c.role))
                .collect::<Vec<String>>()
                .join(", ")
        )
    };

    Outcome::Mutate {
        mutation: RoleMutation {
            grants: Vec::new(),
            revocations,
        },
        message,
    }
}

/// Toggles the selected menu roles.
///
/// Held roles are removed and the rest are granted. Under `require_clear`
/// every grant needs its prerequisite, or nothing changes. On a
/// single-select menu a grant also revokes the member's other roles from
/// that menu.
///
/// # Errors
///
/// Returns `CoreError::MissingMenuData` if the menu was built without its
/// role data, or a selection error.
pub fn encounter_process(
    menu: &Menu,
    interaction: &Interaction,
    selected: &[String],
) -> Result<Outcome, CoreError> {
    let data: &MenuAdditionalData = menu
        .additional_data
        .as_ref()
        .ok_or_else(|| CoreError::MissingMenuData(menu.name.clone()))?;

    let mut seen: HashSet<&str> = HashSet::new();
    let selected: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect();

    if selected.is_empty() || (!data.multi_select && selected.len() > 1) {
        return Err(CoreError::InvalidSelection {
            menu: menu.name.clone(),
            count: selected.len(),
        });
    }

    let helpers: Vec<&MenuRoleHelper> = selected
        .iter()
        .map(|name| {
            data.roles
                .get(*name)
                .filter(|helper| data.exposes(helper.role.role_type))
                .ok_or_else(|| CoreError::RoleNotFound {
                    menu: menu.name.clone(),
                    role: (*name).to_string(),
                })
        })
        .collect::<Result<Vec<&MenuRoleHelper>, CoreError>>()?;

    let held: HashSet<&str> = interaction.held_roles.iter().map(String::as_str).collect();
    let (to_remove, to_grant): (Vec<&MenuRoleHelper>, Vec<&MenuRoleHelper>) = helpers
        .into_iter()
        .partition(|helper| held.contains(helper.role.name.as_str()));

    if data.require_clear {
        for helper in &to_grant {
            if let Some(prerequisite) = helper.prerequisite.as_deref()
                && !held.contains(prerequisite)
            {
                return Ok(Outcome::Denied {
                    reason: format!(
                        "You need the `{prerequisite}` role before taking `{}`.",
                        helper.role.name
                    ),
                });
            }
        }
    }

    let member_id: &str = &interaction.member_id;
    let mut mutation: RoleMutation = RoleMutation::default();
    let mut lines: Vec<String> = Vec::new();

    for helper in &to_grant {
        mutation
            .grants
            .push(RoleCommand::new(member_id, &helper.role.name));
        lines.push(format!("Added `{}`.", helper.role.name));
    }

    let mut revoked: Vec<&str> = to_remove.iter().map(|h| h.role.name.as_str()).collect();
    if !data.multi_select && !to_grant.is_empty() {
        for role in &data.extra_roles {
            let name: &str = role.name.as_str();
            if held.contains(name) && !selected.contains(&name) && !revoked.contains(&name) {
                revoked.push(name);
            }
        }
    }
    for name in revoked {
        mutation.revocations.push(RoleCommand::new(member_id, name));
        lines.push(format!("Removed `{name}`."));
    }

    Ok(Outcome::Mutate {
        mutation,
        message: lines.join("\n"),
    })
}
