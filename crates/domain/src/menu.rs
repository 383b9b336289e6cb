// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clear_roles::clear_role_name;
use crate::config::ConfigMenu;
use crate::encounter::Encounters;
use crate::error::DomainError;
use crate::role::{Role, RoleType, RuleKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// Color given to menu roles that do not configure one.
pub const DEFAULT_EXTRA_ROLE_COLOR: u32 = 0x0099_aab5;

/// The kind of UI a menu renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuType {
    /// Persistent entry message with buttons to every other menu.
    #[serde(rename = "menuMain")]
    Main,
    /// Character verification prompt.
    #[serde(rename = "menuVerify")]
    Verify,
    /// Ephemeral role removal buttons.
    #[serde(rename = "menuRemove")]
    Remove,
    /// Ephemeral opt-in roles for one fight.
    #[serde(rename = "menuEncounter")]
    Encounter,
}

impl MenuType {
    /// Converts this menu type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "menuMain",
            Self::Verify => "menuVerify",
            Self::Remove => "menuRemove",
            Self::Encounter => "menuEncounter",
        }
    }
}

impl FromStr for MenuType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menuMain" => Ok(Self::Main),
            "menuVerify" => Ok(Self::Verify),
            "menuRemove" => Ok(Self::Remove),
            "menuEncounter" => Ok(Self::Encounter),
            _ => Err(DomainError::InvalidMenuType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MenuType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The action a component triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    /// Open a menu.
    #[serde(rename = "menu")]
    Menu,
    /// Submit a character for ranking lookup.
    #[serde(rename = "clearsModal")]
    ClearsModal,
    /// Remove comfy roles.
    #[serde(rename = "removeComfy")]
    RemoveComfy,
    /// Remove parse color roles.
    #[serde(rename = "removeColor")]
    RemoveColor,
    /// Remove every managed role.
    #[serde(rename = "removeAll")]
    RemoveAll,
    /// Apply selected encounter menu roles.
    #[serde(rename = "encounterProcess")]
    EncounterProcess,
}

impl CommandType {
    /// Converts this command type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::ClearsModal => "clearsModal",
            Self::RemoveComfy => "removeComfy",
            Self::RemoveColor => "removeColor",
            Self::RemoveAll => "removeAll",
            Self::EncounterProcess => "encounterProcess",
        }
    }
}

impl FromStr for CommandType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menu" => Ok(Self::Menu),
            "clearsModal" => Ok(Self::ClearsModal),
            "removeComfy" => Ok(Self::RemoveComfy),
            "removeColor" => Ok(Self::RemoveColor),
            "removeAll" => Ok(Self::RemoveAll),
            "encounterProcess" => Ok(Self::EncounterProcess),
            _ => Err(DomainError::InvalidCommandType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A component identifier: `<menu name> <command type>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomId {
    menu: String,
    command: CommandType,
}

impl CustomId {
    /// Creates a custom id for a menu and command.
    #[must_use]
    pub fn new(menu: &str, command: CommandType) -> Self {
        Self {
            menu: menu.to_string(),
            command,
        }
    }

    /// Parses `<menu> <command>`, splitting at the last space.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCustomId` if the value has no space or
    /// an empty menu, or `DomainError::InvalidCommandType` if the command
    /// is unknown.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        // Menu names may contain spaces, command types never do.
        let Some((menu, command)) = value.rsplit_once(' ') else {
            return Err(DomainError::InvalidCustomId(value.to_string()));
        };
        if menu.trim().is_empty() {
            return Err(DomainError::InvalidCustomId(value.to_string()));
        }
        Ok(Self {
            menu: menu.to_string(),
            command: CommandType::from_str(command)?,
        })
    }

    /// Returns the menu name.
    #[must_use]
    pub fn menu(&self) -> &str {
        &self.menu
    }

    /// Returns the command type.
    #[must_use]
    pub const fn command(&self) -> CommandType {
        self.command
    }
}

impl std::fmt::Display for CustomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.menu, self.command)
    }
}

/// A menu role and the role required before it can be taken.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRoleHelper {
    /// The offered role.
    pub role: Role,
    /// The clear role gating it, once the menu's encounter is linked.
    pub prerequisite: Option<String>,
}

/// Data only encounter menus carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuAdditionalData {
    /// Offered roles by name.
    pub roles: BTreeMap<String, MenuRoleHelper>,
    /// Offered roles in configured order.
    pub extra_roles: Vec<Role>,
    /// Role types exposed. Empty exposes all.
    pub role_type: Vec<RoleType>,
    /// Whether several of the menu's roles may be held at once.
    pub multi_select: bool,
    /// Whether the encounter clear role must be held before granting.
    pub require_clear: bool,
    /// The encounter the menu is about.
    pub encounter: Option<String>,
}

impl MenuAdditionalData {
    /// Whether roles of `role_type` are offered.
    #[must_use]
    pub fn exposes(&self, role_type: RoleType) -> bool {
        self.role_type.is_empty() || self.role_type.contains(&role_type)
    }
}

/// A UI descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    /// Unique name within a guild.
    pub name: String,
    /// What the menu renders.
    pub menu_type: MenuType,
    /// Embed title.
    pub title: String,
    /// Embed description.
    pub description: Option<String>,
    /// Embed image.
    pub image_url: Option<String>,
    /// Present for encounter menus only.
    pub additional_data: Option<MenuAdditionalData>,
}

impl Menu {
    /// Creates a menu with no description or image.
    #[must_use]
    pub fn new(name: &str, menu_type: MenuType, title: &str) -> Self {
        Self {
            name: name.to_string(),
            menu_type,
            title: title.to_string(),
            description: None,
            image_url: None,
            additional_data: None,
        }
    }

    /// Builds a menu from configuration.
    ///
    /// # Errors
    ///
    /// See [`Menu::init`].
    pub fn from_config(config: &ConfigMenu) -> Result<Self, DomainError> {
        let menu_type: MenuType = MenuType::from_str(&config.menu_type)?;
        let mut menu: Self = Self::new(&config.name, menu_type, "");
        menu.init(config)?;
        Ok(menu)
    }

    /// Applies configuration to this menu.
    ///
    /// Title, description and image are replaced only when configured.
    /// Encounter menus rebuild their additional data from the config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or type is invalid
    /// - The menu ends up without a title
    /// - A role has no name or an unknown type
    /// - A role type filter entry is unknown
    /// - `require_clear` is set without an encounter
    pub fn init(&mut self, config: &ConfigMenu) -> Result<(), DomainError> {
        let name: &str = config.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidMenuName);
        }
        self.name = name.to_string();
        self.menu_type = MenuType::from_str(&config.menu_type)?;

        if let Some(title) = config.title.as_ref().filter(|t| !t.is_empty()) {
            self.title.clone_from(title);
        }
        if self.title.is_empty() {
            return Err(DomainError::MissingMenuTitle(self.name.clone()));
        }
        if let Some(description) = config.description.as_ref().filter(|d| !d.is_empty()) {
            self.description = Some(description.clone());
        }
        if let Some(image_url) = config.image_url.as_ref().filter(|i| !i.is_empty()) {
            self.image_url = Some(image_url.clone());
        }

        self.additional_data = if self.menu_type == MenuType::Encounter {
            Some(self.encounter_data(config)?)
        } else {
            None
        };

        Ok(())
    }

    fn encounter_data(&self, config: &ConfigMenu) -> Result<MenuAdditionalData, DomainError> {
        let mut data: MenuAdditionalData = MenuAdditionalData {
            multi_select: config.multi_select,
            require_clear: config.require_clear,
            encounter: config
                .encounter
                .as_ref()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            ..MenuAdditionalData::default()
        };

        for role_type in &config.role_type {
            data.role_type.push(RoleType::from_str(role_type)?);
        }

        if data.require_clear && data.encounter.is_none() {
            return Err(DomainError::RequireClearWithoutEncounter {
                menu: self.name.clone(),
            });
        }

        for config_role in &config.roles {
            if config_role.name.trim().is_empty() {
                return Err(DomainError::InvalidRoleName {
                    menu: self.name.clone(),
                });
            }
            let mut role: Role = Role::new(
                "",
                DEFAULT_EXTRA_ROLE_COLOR,
                RoleType::Comfy,
                RuleKind::MenuExtra {
                    menu: self.name.clone(),
                },
            );
            config_role.overlay(&mut role)?;

            if data.roles.contains_key(&role.name) {
                return Err(DomainError::DuplicateRole(role.name));
            }
            data.roles.insert(
                role.name.clone(),
                MenuRoleHelper {
                    role: role.clone(),
                    prerequisite: None,
                },
            );
            data.extra_roles.push(role);
        }

        Ok(data)
    }

    /// Roles this menu offers after the role type filter.
    #[must_use]
    pub fn exposed_roles(&self) -> Vec<&Role> {
        self.additional_data.as_ref().map_or_else(Vec::new, |data| {
            data.extra_roles
                .iter()
                .filter(|role| data.exposes(role.role_type))
                .collect()
        })
    }
}

/// Creates the menus every guild starts with.
#[must_use]
pub fn default_menus(guild_name: &str) -> Menus {
    let mut main: Menu = Menu::new(
        MenuType::Main.as_str(),
        MenuType::Main,
        &format!("Welcome to {guild_name}"),
    );
    main.description = Some(String::from("Use the buttons below to assign roles!"));

    let verify: Menu = Menu::new(
        MenuType::Verify.as_str(),
        MenuType::Verify,
        "Verify Character",
    );

    let mut remove: Menu = Menu::new(MenuType::Remove.as_str(), MenuType::Remove, "Remove Roles");
    remove.description = Some(String::from(
        "Use the buttons below to remove Clearingway related roles!",
    ));

    let mut menus: Menus = Menus::new();
    for menu in [main, verify, remove] {
        menus.menus.insert(menu.name.clone(), menu);
    }
    menus
}

/// The menus configured for one guild, keyed by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Menus {
    menus: BTreeMap<String, Menu>,
    configured: BTreeSet<String>,
}

impl Menus {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            menus: BTreeMap::new(),
            configured: BTreeSet::new(),
        }
    }

    /// Applies a menu config, overriding a default menu of the same name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateMenu` if a menu of this name was
    /// already configured, otherwise see [`Menu::init`].
    pub fn apply_config(&mut self, config: &ConfigMenu) -> Result<(), DomainError> {
        let name: &str = config.name.trim();
        if self.configured.contains(name) {
            return Err(DomainError::DuplicateMenu(name.to_string()));
        }
        self.configured.insert(name.to_string());

        if let Some(existing) = self.menus.get_mut(name) {
            return existing.init(config);
        }
        let menu: Menu = Menu::from_config(config)?;
        self.menus.insert(menu.name.clone(), menu);
        Ok(())
    }

    /// Resolves every encounter menu's encounter and records its clear role
    /// as the prerequisite of each offered role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EncounterNotFound` if a menu names an unknown
    /// encounter.
    pub fn link_prerequisites(&mut self, encounters: &Encounters) -> Result<(), DomainError> {
        for menu in self.menus.values_mut() {
            let Some(data) = menu.additional_data.as_mut() else {
                continue;
            };
            let Some(encounter) = data.encounter.as_deref() else {
                continue;
            };
            if encounters.get(encounter).is_none() {
                return Err(DomainError::EncounterNotFound {
                    menu: menu.name.clone(),
                    encounter: encounter.to_string(),
                });
            }
            let prerequisite: String = clear_role_name(encounter);
            for helper in data.roles.values_mut() {
                helper.prerequisite = Some(prerequisite.clone());
            }
        }
        Ok(())
    }

    /// Looks up a menu by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.get(name)
    }

    /// Iterates menus in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Menu> {
        self.menus.values()
    }

    /// Iterates menus of one type in name order.
    pub fn of_type(&self, menu_type: MenuType) -> impl Iterator<Item = &Menu> {
        self.menus.values().filter(move |m| m.menu_type == menu_type)
    }

    /// Number of menus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Whether there are no menus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Every extra role declared by encounter menus, in menu name order.
    #[must_use]
    pub fn roles(&self) -> Vec<&Role> {
        self.of_type(MenuType::Encounter)
            .filter_map(|menu| menu.additional_data.as_ref())
            .flat_map(|data| data.extra_roles.iter())
            .collect()
    }
}
