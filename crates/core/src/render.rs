// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transport-neutral message descriptors.
//!
//! These describe what a menu shows, not how a platform lays it out. Every
//! interactive component carries a `<menu> <command>` custom id.

use clearingway_domain::{CommandType, CustomId, Menu, MenuType, Menus};
use serde::{Deserialize, Serialize};

/// Modal field holding the character name.
pub const CHARACTER_FIELD: &str = "character";
/// Modal field holding the home world.
pub const WORLD_FIELD: &str = "world";

/// Button emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Main call to action.
    Primary,
    /// Neutral.
    Secondary,
    /// Destructive.
    Danger,
}

/// One option of a select component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Shown text.
    pub label: String,
    /// Submitted value.
    pub value: String,
    /// Optional hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An interactive component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// A button.
    Button {
        /// Shown text.
        label: String,
        /// `<menu> <command>`.
        custom_id: String,
        /// Emphasis.
        style: ButtonStyle,
    },
    /// A select menu.
    Select {
        /// `<menu> <command>`.
        custom_id: String,
        /// Placeholder text.
        placeholder: String,
        /// Options to pick from.
        options: Vec<SelectOption>,
        /// Minimum picks.
        min_values: usize,
        /// Maximum picks.
        max_values: usize,
    },
}

/// A message with an embed and components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Embed title.
    pub title: String,
    /// Embed description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Embed image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Components, in display order.
    pub components: Vec<Component>,
    /// Visible only to the invoking member.
    pub ephemeral: bool,
}

impl MessagePayload {
    fn from_menu(menu: &Menu, components: Vec<Component>, ephemeral: bool) -> Self {
        Self {
            title: menu.title.clone(),
            description: menu.description.clone(),
            image_url: menu.image_url.clone(),
            components,
            ephemeral,
        }
    }

    /// A plain ephemeral text reply.
    #[must_use]
    pub fn notice(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            image_url: None,
            components: Vec::new(),
            ephemeral: true,
        }
    }
}

/// A text input in a modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalField {
    /// Field key in the submission.
    pub id: String,
    /// Shown label.
    pub label: String,
    /// Placeholder text.
    pub placeholder: String,
}

/// A form the member fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalPayload {
    /// `<menu> <command>` submitted with the form.
    pub custom_id: String,
    /// Modal title.
    pub title: String,
    /// Inputs, in display order.
    pub fields: Vec<ModalField>,
}

fn button(menu: &str, command: CommandType, label: &str, style: ButtonStyle) -> Component {
    Component::Button {
        label: label.to_string(),
        custom_id: CustomId::new(menu, command).to_string(),
        style,
    }
}

/// The persistent entry message: one button per verify, encounter and
/// remove menu.
///
/// Returns `None` if the guild has no main menu.
#[must_use]
pub fn main_menu_payload(menus: &Menus) -> Option<MessagePayload> {
    let main: &Menu = menus.of_type(MenuType::Main).next()?;

    let mut components: Vec<Component> = Vec::new();
    for menu in menus.of_type(MenuType::Verify) {
        components.push(button(&menu.name, CommandType::Menu, &menu.title, ButtonStyle::Primary));
    }
    for menu in menus.of_type(MenuType::Encounter) {
        components.push(button(
            &menu.name,
            CommandType::Menu,
            &menu.title,
            ButtonStyle::Secondary,
        ));
    }
    for menu in menus.of_type(MenuType::Remove) {
        components.push(button(&menu.name, CommandType::Menu, &menu.title, ButtonStyle::Danger));
    }

    Some(MessagePayload::from_menu(main, components, false))
}

/// The ephemeral response for a remove or encounter menu.
///
/// Returns `None` for menu types that do not render an ephemeral response.
#[must_use]
pub fn menu_payload(menu: &Menu) -> Option<MessagePayload> {
    match menu.menu_type {
        MenuType::Remove => Some(remove_payload(menu)),
        MenuType::Encounter => Some(encounter_payload(menu)),
        MenuType::Main | MenuType::Verify => None,
    }
}

fn remove_payload(menu: &Menu) -> MessagePayload {
    let components: Vec<Component> = [
        ("Uncomfy", CommandType::RemoveComfy),
        ("Uncolor", CommandType::RemoveColor),
        ("Remove All", CommandType::RemoveAll),
    ]
    .into_iter()
    .map(|(label, command)| button(&menu.name, command, label, ButtonStyle::Danger))
    .collect();

    MessagePayload::from_menu(menu, components, true)
}

fn encounter_payload(menu: &Menu) -> MessagePayload {
    let options: Vec<SelectOption> = menu
        .exposed_roles()
        .into_iter()
        .map(|role| SelectOption {
            label: role.name.clone(),
            value: role.name.clone(),
            description: role.description.clone(),
        })
        .collect();

    let multi_select: bool = menu
        .additional_data
        .as_ref()
        .is_some_and(|data| data.multi_select);
    let max_values: usize = if multi_select { options.len().max(1) } else { 1 };

    let components: Vec<Component> = if options.is_empty() {
        Vec::new()
    } else {
        vec![Component::Select {
            custom_id: CustomId::new(&menu.name, CommandType::EncounterProcess).to_string(),
            placeholder: String::from("Select roles to add or remove"),
            options,
            min_values: 1,
            max_values,
        }]
    };

    MessagePayload::from_menu(menu, components, true)
}

/// The character verification form.
#[must_use]
pub fn verify_modal(menu: &Menu) -> ModalPayload {
    ModalPayload {
        custom_id: CustomId::new(&menu.name, CommandType::ClearsModal).to_string(),
        title: menu.title.clone(),
        fields: vec![
            ModalField {
                id: String::from(CHARACTER_FIELD),
                label: String::from("Character name"),
                placeholder: String::from("Firstname Lastname"),
            },
            ModalField {
                id: String::from(WORLD_FIELD),
                label: String::from("World"),
                placeholder: String::from("Gilgamesh"),
            },
        ],
    }
}
