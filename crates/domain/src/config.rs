// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configuration shapes.
//!
//! Optional fields stay `None` when unset so that applying a config never
//! replaces an existing value with an empty one. String-typed enums are
//! parsed while building a guild, so one bad guild does not reject the file.

use crate::error::DomainError;
use crate::role::{Role, RoleType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Every configured guild.
    #[serde(default)]
    pub guilds: Vec<ConfigGuild>,
}

/// Configuration for one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigGuild {
    /// Platform guild id.
    pub id: String,
    /// Guild display name.
    pub name: String,
    /// Encounters evaluated for this guild.
    #[serde(default)]
    pub encounters: Vec<ConfigEncounter>,
    /// Menus for this guild. Names matching a default menu override it.
    #[serde(default)]
    pub menus: Vec<ConfigMenu>,
}

/// An encounter definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEncounter {
    /// Encounter name.
    pub name: String,
    /// Underlying encounter ids.
    #[serde(default)]
    pub ids: Vec<u32>,
}

/// A menu definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMenu {
    /// Unique menu name.
    pub name: String,
    /// Menu type (`menuMain`, `menuVerify`, `menuRemove`, `menuEncounter`).
    #[serde(rename = "type")]
    pub menu_type: String,
    /// Embed title.
    pub title: Option<String>,
    /// Embed description.
    pub description: Option<String>,
    /// Embed image.
    pub image_url: Option<String>,
    /// Role types this menu exposes. Empty exposes all.
    #[serde(default)]
    pub role_type: Vec<String>,
    /// Whether more than one of the menu's roles may be held at once.
    #[serde(default)]
    pub multi_select: bool,
    /// Whether the linked encounter's clear role is required first.
    #[serde(default)]
    pub require_clear: bool,
    /// The encounter this menu is about.
    pub encounter: Option<String>,
    /// Extra roles offered by this menu.
    #[serde(default)]
    pub roles: Vec<ConfigRole>,
}

/// A role offered by an encounter menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRole {
    /// Role name.
    pub name: String,
    /// Role description.
    pub description: Option<String>,
    /// RGB color.
    pub color: Option<u32>,
    /// Display separately in the member list.
    pub hoist: Option<bool>,
    /// Allow anyone to mention the role.
    pub mention: Option<bool>,
    /// Role type; defaults to `comfy`.
    #[serde(rename = "type")]
    pub role_type: Option<String>,
}

impl ConfigRole {
    /// Applies every configured field to `role`, leaving unset fields alone.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoleType` if the type string is unknown.
    pub fn overlay(&self, role: &mut Role) -> Result<(), DomainError> {
        let name: &str = self.name.trim();
        if !name.is_empty() {
            role.name = name.to_string();
        }
        if let Some(description) = self.description.as_ref().filter(|d| !d.is_empty()) {
            role.description = Some(description.clone());
        }
        if let Some(color) = self.color {
            role.color = color;
        }
        if let Some(hoist) = self.hoist {
            role.hoist = hoist;
        }
        if let Some(mention) = self.mention {
            role.mention = mention;
        }
        if let Some(role_type) = &self.role_type {
            role.role_type = RoleType::from_str(role_type)?;
        }
        Ok(())
    }
}
