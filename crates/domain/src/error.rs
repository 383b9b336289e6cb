// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or validating domain values.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A DPS percentile was outside `[0, 100]` or not a number.
    InvalidPercentile(f64),
    /// A rank start time could not be represented as a timestamp.
    InvalidTimestamp(i64),
    /// A report reference had an empty code.
    EmptyReportCode,
    /// A cleared ranking carried no ranks.
    ClearWithoutRank {
        /// The encounter id of the offending ranking.
        encounter_id: u32,
    },
    /// More than one ranking was supplied for the same encounter id.
    DuplicateRanking(u32),
    /// Encounter name is empty.
    InvalidEncounterName,
    /// Encounter was defined without any underlying ids.
    EmptyEncounterIds(String),
    /// Two encounters share a name.
    DuplicateEncounter(String),
    /// A role was configured without a name.
    InvalidRoleName {
        /// The menu the role was declared in.
        menu: String,
    },
    /// Two roles share a name.
    DuplicateRole(String),
    /// Unknown role type string.
    InvalidRoleType(String),
    /// Menu name is empty.
    InvalidMenuName,
    /// Two configured menus share a name.
    DuplicateMenu(String),
    /// Menu has no title after configuration.
    MissingMenuTitle(String),
    /// Unknown menu type string.
    InvalidMenuType(String),
    /// Unknown command type string.
    InvalidCommandType(String),
    /// A component custom id was not `<menu> <command>`.
    InvalidCustomId(String),
    /// A menu requires a clear but names no encounter.
    RequireClearWithoutEncounter {
        /// The menu name.
        menu: String,
    },
    /// A menu links an encounter that is not defined.
    EncounterNotFound {
        /// The menu name.
        menu: String,
        /// The missing encounter name.
        encounter: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPercentile(value) => {
                write!(f, "Invalid DPS percentile: {value}. Must be between 0 and 100")
            }
            Self::InvalidTimestamp(value) => write!(f, "Invalid unix timestamp: {value}"),
            Self::EmptyReportCode => write!(f, "Report code cannot be empty"),
            Self::ClearWithoutRank { encounter_id } => {
                write!(f, "Ranking for encounter {encounter_id} is cleared but has no ranks")
            }
            Self::DuplicateRanking(id) => {
                write!(f, "More than one ranking supplied for encounter {id}")
            }
            Self::InvalidEncounterName => write!(f, "Encounter name cannot be empty"),
            Self::EmptyEncounterIds(name) => {
                write!(f, "Encounter '{name}' must define at least one id")
            }
            Self::DuplicateEncounter(name) => write!(f, "Encounter '{name}' is defined twice"),
            Self::InvalidRoleName { menu } => {
                write!(f, "Role declared in menu '{menu}' has no name")
            }
            Self::DuplicateRole(name) => write!(f, "Role '{name}' is defined twice"),
            Self::InvalidRoleType(value) => write!(f, "Invalid role type: {value}"),
            Self::InvalidMenuName => write!(f, "Menu name cannot be empty"),
            Self::DuplicateMenu(name) => write!(f, "Menu '{name}' is configured twice"),
            Self::MissingMenuTitle(name) => write!(f, "Menu '{name}' has no title"),
            Self::InvalidMenuType(value) => write!(f, "Invalid menu type: {value}"),
            Self::InvalidCommandType(value) => write!(f, "Invalid command type: {value}"),
            Self::InvalidCustomId(value) => write!(f, "Invalid custom id: '{value}'"),
            Self::RequireClearWithoutEncounter { menu } => {
                write!(
                    f,
                    "Menu '{menu}' requires a clear but does not name an encounter"
                )
            }
            Self::EncounterNotFound { menu, encounter } => {
                write!(
                    f,
                    "Menu '{menu}' references unknown encounter '{encounter}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
