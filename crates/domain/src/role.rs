// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clear_roles::evaluate_clear;
use crate::encounter::Encounters;
use crate::error::DomainError;
use crate::legend_roles::evaluate_tier;
use crate::parsing_roles::evaluate_band;
use crate::ranking::Rankings;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// The category a role belongs to.
///
/// Removal commands strip whole categories at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    /// Percentile band ("color") roles.
    Parse,
    /// Ultimate clear-count tiers.
    Legend,
    /// Per-encounter clear roles.
    Clear,
    /// Opt-in roles handed out by encounter menus.
    Comfy,
}

impl RoleType {
    /// Every role type, in display order.
    pub const ALL: [Self; 4] = [Self::Parse, Self::Legend, Self::Clear, Self::Comfy];

    /// Converts this role type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Legend => "legend",
            Self::Clear => "clear",
            Self::Comfy => "comfy",
        }
    }

    /// Whether roles of this type are granted by the rule engine.
    #[must_use]
    pub const fn is_rule_derived(&self) -> bool {
        matches!(self, Self::Parse | Self::Legend | Self::Clear)
    }
}

impl FromStr for RoleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parse" | "color" => Ok(Self::Parse),
            "legend" => Ok(Self::Legend),
            "clear" => Ok(Self::Clear),
            "comfy" => Ok(Self::Comfy),
            _ => Err(DomainError::InvalidRoleType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A percentile range with independently open or closed ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    /// Lower bound.
    pub lower: f64,
    /// Whether `lower` itself is in the band.
    pub lower_inclusive: bool,
    /// Upper bound.
    pub upper: f64,
    /// Whether `upper` itself is in the band.
    pub upper_inclusive: bool,
}

impl PercentileBand {
    /// `[lower, upper)`.
    #[must_use]
    pub const fn closed_open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            lower_inclusive: true,
            upper,
            upper_inclusive: false,
        }
    }

    /// `(lower, upper)`.
    #[must_use]
    pub const fn open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            lower_inclusive: false,
            upper,
            upper_inclusive: false,
        }
    }

    /// `[value, value]`.
    #[must_use]
    pub const fn exactly(value: f64) -> Self {
        Self {
            lower: value,
            lower_inclusive: true,
            upper: value,
            upper_inclusive: true,
        }
    }

    /// Whether `percent` falls in this band.
    #[must_use]
    pub fn contains(&self, percent: f64) -> bool {
        let above_lower: bool = if self.lower_inclusive {
            percent >= self.lower
        } else {
            percent > self.lower
        };
        let below_upper: bool = if self.upper_inclusive {
            percent <= self.upper
        } else {
            percent < self.upper
        };
        above_lower && below_upper
    }

    /// Reason given when a parse falls outside this band.
    #[must_use]
    pub fn miss_reason(&self) -> String {
        if self.lower_inclusive && self.upper_inclusive && self.lower >= self.upper {
            format!("Best parse was not {}.", self.lower)
        } else {
            format!(
                "Best parse was not between {} and {}.",
                self.lower, self.upper
            )
        }
    }
}

/// The decision rule a role carries.
///
/// Rules are plain data; evaluation is a pure function of the rule, the
/// encounter definitions and the member's rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Best cleared parse falls in the band.
    PercentileBand(PercentileBand),
    /// Exactly `clears` encounters are cleared.
    LegendTier {
        /// Required number of cleared encounters.
        clears: usize,
    },
    /// The named encounter is cleared.
    EncounterClear {
        /// Encounter name.
        encounter: String,
    },
    /// Granted only through the named menu; never by the engine.
    MenuExtra {
        /// The menu offering this role.
        menu: String,
    },
}

/// The outcome of evaluating one role for one member.
///
/// A role that does not apply is a normal result, always with a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDecision {
    /// Whether the role should be held.
    pub applies: bool,
    /// Human-readable justification.
    pub reason: String,
}

impl RoleDecision {
    /// The role applies.
    #[must_use]
    pub fn grant(reason: impl Into<String>) -> Self {
        Self {
            applies: true,
            reason: reason.into(),
        }
    }

    /// The role does not apply.
    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            applies: false,
            reason: reason.into(),
        }
    }
}

/// A role definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Role name, unique within a guild.
    pub name: String,
    /// Optional description shown in menus.
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

impl Role {
    /// Creates a role with no description, not hoisted and not mentionable.
    #[must_use]
    pub fn new(name: &str, color: u32, role_type: RoleType, rule: RuleKind) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            color,
            hoist: false,
            mention: false,
            role_type,
            rule,
        }
    }

    /// Evaluates this role's rule.
    #[must_use]
    pub fn should_apply(&self, encounters: &Encounters, rankings: &Rankings) -> RoleDecision {
        match &self.rule {
            RuleKind::PercentileBand(band) => evaluate_band(band, encounters, rankings),
            RuleKind::LegendTier { clears } => evaluate_tier(*clears, encounters, rankings),
            RuleKind::EncounterClear { encounter } => {
                evaluate_clear(encounter, encounters, rankings)
            }
            RuleKind::MenuExtra { menu } => {
                RoleDecision::deny(format!("Granted through the `{menu}` menu."))
            }
        }
    }
}

/// One role paired with its decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    /// The evaluated role.
    pub role: &'a Role,
    /// The decision.
    pub decision: RoleDecision,
}

/// An ordered collection of roles with unique names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roles {
    roles: Vec<Role>,
}

impl Roles {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { roles: Vec::new() }
    }

    /// Builds a collection from roles known to have unique names.
    pub(crate) const fn from_unique(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// Builds a collection, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateRole` on the first repeated name.
    pub fn from_roles(roles: Vec<Role>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for role in &roles {
            if !seen.insert(role.name.as_str()) {
                return Err(DomainError::DuplicateRole(role.name.clone()));
            }
        }
        Ok(Self { roles })
    }

    /// Adds a role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateRole` if the name is taken.
    pub fn push(&mut self, role: Role) -> Result<(), DomainError> {
        if self.contains(&role.name) {
            return Err(DomainError::DuplicateRole(role.name));
        }
        self.roles.push(role);
        Ok(())
    }

    /// Appends every role from `other`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateRole` if any name collides.
    pub fn extend(&mut self, other: Self) -> Result<(), DomainError> {
        for role in other.roles {
            self.push(role)?;
        }
        Ok(())
    }

    /// Looks up a role by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Whether a role with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates roles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    /// Iterates roles of the given types.
    pub fn of_types<'a>(&'a self, types: &'a [RoleType]) -> impl Iterator<Item = &'a Role> {
        self.roles.iter().filter(|r| types.contains(&r.role_type))
    }

    /// Number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Evaluates every role independently, in order.
    #[must_use]
    pub fn evaluate(&self, encounters: &Encounters, rankings: &Rankings) -> Vec<Evaluation<'_>> {
        self.roles
            .iter()
            .map(|role| Evaluation {
                role,
                decision: role.should_apply(encounters, rankings),
            })
            .collect()
    }

    /// Returns only the evaluations that apply.
    #[must_use]
    pub fn applicable(&self, encounters: &Encounters, rankings: &Rankings) -> Vec<Evaluation<'_>> {
        self.evaluate(encounters, rankings)
            .into_iter()
            .filter(|e| e.decision.applies)
            .collect()
    }
}
