// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use clearingway::CoreError;
use clearingway_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: String::from(field),
        message,
    }
}

fn rule_violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message,
    }
}

fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from(resource_type),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidPercentile(_) => invalid_input("dps_percent", message),
        DomainError::InvalidTimestamp(_) => invalid_input("start_time", message),
        DomainError::EmptyReportCode => invalid_input("report_code", message),
        DomainError::ClearWithoutRank { .. } => rule_violation("clear_requires_rank", message),
        DomainError::DuplicateRanking(_) => rule_violation("unique_ranking", message),
        DomainError::InvalidEncounterName | DomainError::EmptyEncounterIds(_) => {
            invalid_input("encounter", message)
        }
        DomainError::DuplicateEncounter(_) => rule_violation("unique_encounter", message),
        DomainError::InvalidRoleName { .. } => invalid_input("role", message),
        DomainError::DuplicateRole(_) => rule_violation("unique_role", message),
        DomainError::InvalidRoleType(_) => invalid_input("role_type", message),
        DomainError::InvalidMenuName | DomainError::MissingMenuTitle(_) => {
            invalid_input("menu", message)
        }
        DomainError::DuplicateMenu(_) => rule_violation("unique_menu", message),
        DomainError::InvalidMenuType(_) => invalid_input("menu_type", message),
        DomainError::InvalidCommandType(_) | DomainError::InvalidCustomId(_) => {
            invalid_input("custom_id", message)
        }
        DomainError::RequireClearWithoutEncounter { .. } => {
            rule_violation("require_clear_needs_encounter", message)
        }
        DomainError::EncounterNotFound { .. } => not_found("Encounter", message),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Configuration { .. } => rule_violation("valid_configuration", message),
        CoreError::DuplicateGuild(_) => rule_violation("unique_guild", message),
        CoreError::GuildNotFound(_) => not_found("Guild", message),
        CoreError::MenuNotFound(_) => not_found("Menu", message),
        CoreError::RoleNotFound { .. } => not_found("Role", message),
        CoreError::UnknownCommand { .. } => not_found("Command", message),
        CoreError::InvalidSelection { .. } => invalid_input("values", message),
        CoreError::MissingField(field) => invalid_input(&field, message),
        CoreError::MissingMenuData(_) => ApiError::Internal { message },
    }
}
