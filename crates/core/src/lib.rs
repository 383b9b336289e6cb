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

mod command;
mod dispatch;
mod error;
mod guild;
mod registry;
mod render;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::{Command, Interaction};
pub use dispatch::dispatch;
pub use error::CoreError;
pub use guild::Guild;
pub use registry::{GuildMap, GuildRegistry};
pub use render::{
    ButtonStyle, CHARACTER_FIELD, Component, MessagePayload, ModalField, ModalPayload,
    SelectOption, WORLD_FIELD, main_menu_payload, menu_payload, verify_modal,
};
pub use state::{Outcome, RoleCommand, RoleMutation};
