// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::render::{CHARACTER_FIELD, WORLD_FIELD};
use clearingway_domain::{CommandType, CustomId, Menu, MenuType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A component interaction as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interaction {
    /// The invoking member.
    pub member_id: String,
    /// `<menu> <command>` of the component used.
    pub custom_id: String,
    /// Names of the guild roles the member currently holds.
    #[serde(default)]
    pub held_roles: Vec<String>,
    /// Values picked in a select component.
    #[serde(default)]
    pub values: Vec<String>,
    /// Submitted modal fields by id.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// A command represents user intent as data only.
///
/// Commands are resolved from an interaction's custom id and the type of
/// the menu it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a menu.
    OpenMenu {
        /// The menu name.
        menu: String,
    },
    /// Look up a character's rankings.
    ClearsModal {
        /// Character name.
        character: String,
        /// Home world.
        world: String,
    },
    /// Drop comfy roles.
    RemoveComfy,
    /// Drop percentile band roles.
    RemoveColor,
    /// Drop every managed role.
    RemoveAll,
    /// Toggle roles picked from an encounter menu.
    EncounterProcess {
        /// The menu name.
        menu: String,
        /// Picked role names.
        selected: Vec<String>,
    },
}

impl Command {
    /// Resolves the command an interaction asks for.
    ///
    /// # Arguments
    ///
    /// * `menu` - The menu named by the custom id
    /// * `custom_id` - The parsed custom id
    /// * `interaction` - The raw interaction
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command does not belong to the menu's type
    /// - A verification submission lacks the character or world
    pub fn resolve(
        menu: &Menu,
        custom_id: &CustomId,
        interaction: &Interaction,
    ) -> Result<Self, CoreError> {
        match (menu.menu_type, custom_id.command()) {
            (_, CommandType::Menu) => Ok(Self::OpenMenu {
                menu: menu.name.clone(),
            }),
            (MenuType::Verify, CommandType::ClearsModal) => Ok(Self::ClearsModal {
                character: required_field(interaction, CHARACTER_FIELD)?,
                world: required_field(interaction, WORLD_FIELD)?,
            }),
            (MenuType::Remove, CommandType::RemoveComfy) => Ok(Self::RemoveComfy),
            (MenuType::Remove, CommandType::RemoveColor) => Ok(Self::RemoveColor),
            (MenuType::Remove, CommandType::RemoveAll) => Ok(Self::RemoveAll),
            (MenuType::Encounter, CommandType::EncounterProcess) => Ok(Self::EncounterProcess {
                menu: menu.name.clone(),
                selected: interaction.values.clone(),
            }),
            _ => Err(CoreError::UnknownCommand {
                custom_id: interaction.custom_id.clone(),
            }),
        }
    }
}

fn required_field(interaction: &Interaction, field: &str) -> Result<String, CoreError> {
    interaction
        .fields
        .get(field)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CoreError::MissingField(field.to_string()))
}
