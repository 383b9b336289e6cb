// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use clearingway::{Interaction, MessagePayload, ModalPayload, RoleCommand};
use clearingway_domain::{RoleType, RuleKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parse from a ranking snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    /// DPS percentile, `0..=100`.
    pub dps_percent: f64,
    /// Job abbreviation.
    pub job: String,
    /// Pull start time in seconds since the epoch.
    pub start_time: i64,
    /// Report code.
    pub report_code: String,
    /// Fight within the report.
    #[serde(default)]
    pub fight_id: Option<u32>,
}

/// A member's ranking for one encounter id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRecord {
    /// The encounter id.
    pub encounter_id: u32,
    /// Number of kills.
    pub total_kills: u32,
    /// Parses for the encounter.
    #[serde(default)]
    pub ranks: Vec<RankRecord>,
}

/// API request to evaluate a member's rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The member being evaluated.
    pub member_id: String,
    /// Guild roles the member currently holds.
    #[serde(default)]
    pub held_roles: Vec<String>,
    /// The member's ranking snapshot.
    #[serde(default)]
    pub rankings: Vec<RankingRecord>,
}

/// The decision for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationInfo {
    /// The role name.
    pub role: String,
    /// The role's category.
    pub role_type: RoleType,
    /// Whether the role applies.
    pub applies: bool,
    /// Why.
    pub reason: String,
}

/// API response for a member evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    /// The evaluated member.
    pub member_id: String,
    /// One decision per guild role, in guild order.
    pub evaluations: Vec<EvaluationInfo>,
    /// Rule-derived roles to add.
    pub grants: Vec<RoleCommand>,
    /// Rule-derived roles to remove.
    pub revocations: Vec<RoleCommand>,
}

/// API request carrying a component interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRequest {
    /// The invoking member.
    pub member_id: String,
    /// `<menu> <command>` of the component used.
    pub custom_id: String,
    /// Guild roles the member currently holds.
    #[serde(default)]
    pub held_roles: Vec<String>,
    /// Values picked in a select component.
    #[serde(default)]
    pub values: Vec<String>,
    /// Submitted modal fields.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl From<&InteractionRequest> for Interaction {
    fn from(request: &InteractionRequest) -> Self {
        Self {
            member_id: request.member_id.clone(),
            custom_id: request.custom_id.clone(),
            held_roles: request.held_roles.clone(),
            values: request.values.clone(),
            fields: request.fields.clone(),
        }
    }
}

/// API response telling the transport what to do with an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionResponse {
    /// Reply with a message.
    Message {
        /// The message.
        message: MessagePayload,
    },
    /// Open a modal.
    Modal {
        /// The modal.
        modal: ModalPayload,
    },
    /// Look up the character's rankings and submit them for evaluation.
    FetchRankings {
        /// The invoking member.
        member_id: String,
        /// Character name.
        character: String,
        /// Home world.
        world: String,
    },
    /// Apply the role changes, then show the message.
    Mutate {
        /// Roles to add.
        grants: Vec<RoleCommand>,
        /// Roles to remove.
        revocations: Vec<RoleCommand>,
        /// Message for the member.
        message: String,
    },
    /// Tell the member why nothing changed.
    Denied {
        /// The reason.
        reason: String,
    },
}

/// API response for a single menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuResponse {
    /// A message with components.
    Message {
        /// The message.
        message: MessagePayload,
    },
    /// A modal.
    Modal {
        /// The modal.
        modal: ModalPayload,
    },
}

/// A role definition as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    /// Role name.
    pub name: String,
    /// Role description.
    pub description: Option<String>,
    /// RGB color.
    pub color: u32,
    /// Display separately in the member list.
    pub hoist: bool,
    /// Allow anyone to mention the role.
    pub mention: bool,
    /// The role's category.
    pub role_type: RoleType,
    /// The rule deciding whether the role applies.
    pub rule: RuleKind,
}

/// API response listing a guild's roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRolesResponse {
    /// The guild id.
    pub guild_id: String,
    /// Every role in guild order.
    pub roles: Vec<RoleInfo>,
}

/// A guild left out of a reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedGuild {
    /// Why the guild was skipped.
    pub error: String,
}

/// API response for a configuration reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// Loaded guild ids.
    pub guilds: Vec<String>,
    /// Guilds that failed to build.
    pub skipped: Vec<SkippedGuild>,
}
