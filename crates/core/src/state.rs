// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::render::{MessagePayload, ModalPayload};
use serde::{Deserialize, Serialize};

/// A single role change for one member.
///
/// Engine-driven changes carry a justification; menu-driven ones do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCommand {
    /// The member whose roles change.
    pub member_id: String,
    /// The role name.
    pub role: String,
    /// Why the change was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl RoleCommand {
    /// A change without justification.
    #[must_use]
    pub fn new(member_id: &str, role: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            role: role.to_string(),
            justification: None,
        }
    }

    /// A change with justification.
    #[must_use]
    pub fn justified(member_id: &str, role: &str, justification: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            role: role.to_string(),
            justification: Some(justification.to_string()),
        }
    }
}

/// The role changes to apply for one member.
///
/// Either every command is applied or, if the transport fails first, none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleMutation {
    /// Roles to add.
    pub grants: Vec<RoleCommand>,
    /// Roles to remove.
    pub revocations: Vec<RoleCommand>,
}

impl RoleMutation {
    /// Whether nothing changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty() && self.revocations.is_empty()
    }
}

/// What the transport should do in response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Reply with a message.
    Respond(MessagePayload),
    /// Open a modal.
    Modal(ModalPayload),
    /// Fetch rankings for a character, then evaluate them.
    FetchRankings {
        /// The invoking member.
        member_id: String,
        /// Character name.
        character: String,
        /// Home world.
        world: String,
    },
    /// Apply role changes and tell the member what happened.
    Mutate {
        /// The changes.
        mutation: RoleMutation,
        /// Message for the member.
        message: String,
    },
    /// Refuse without changing anything.
    Denied {
        /// Why the request was refused.
        reason: String,
    },
}
