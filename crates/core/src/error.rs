// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clearingway_domain::DomainError;
use thiserror::Error;

/// Errors raised while building guilds or dispatching interactions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// A guild's configuration could not be built.
    #[error("Invalid configuration for guild '{guild}': {source}")]
    Configuration {
        /// The guild id.
        guild: String,
        /// What was wrong.
        source: DomainError,
    },

    /// The same guild id was configured twice.
    #[error("Guild '{0}' is configured more than once")]
    DuplicateGuild(String),

    /// No guild is registered under this id.
    #[error("Guild '{0}' is not configured")]
    GuildNotFound(String),

    /// No menu with this name exists in the guild.
    #[error("Menu '{0}' not found")]
    MenuNotFound(String),

    /// The menu does not offer this role.
    #[error("Role '{role}' is not offered by menu '{menu}'")]
    RoleNotFound {
        /// The menu name.
        menu: String,
        /// The requested role.
        role: String,
    },

    /// The custom id is malformed or its command does not fit the menu.
    #[error("Unknown command '{custom_id}'")]
    UnknownCommand {
        /// The raw custom id.
        custom_id: String,
    },

    /// A selection had the wrong number of roles.
    #[error("Menu '{menu}' cannot process a selection of {count} roles")]
    InvalidSelection {
        /// The menu name.
        menu: String,
        /// The number of roles selected.
        count: usize,
    },

    /// A required modal field was missing or blank.
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// An encounter menu was built without its role data.
    #[error("Encounter menu '{0}' has no role data")]
    MissingMenuData(String),
}

impl CoreError {
    /// Whether this error is a missing guild, menu, role or command.
    #[must_use]
    pub const fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::GuildNotFound(_)
                | Self::MenuNotFound(_)
                | Self::RoleNotFound { .. }
                | Self::UnknownCommand { .. }
        )
    }
}
