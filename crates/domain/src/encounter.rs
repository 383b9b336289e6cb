// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ranking::{Rank, Ranking, Rankings};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named fight.
///
/// One logical fight may be logged under several encounter ids (difficulty
/// variants, separate phases); all of them count as the same encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// Display name, unique within an `Encounters` collection.
    name: String,
    /// Underlying encounter ids, in declared order.
    ids: Vec<u32>,
}

impl Encounter {
    /// Creates a new encounter.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or no ids are given.
    pub fn new(name: &str, ids: Vec<u32>) -> Result<Self, DomainError> {
        let name: &str = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidEncounterName);
        }
        if ids.is_empty() {
            return Err(DomainError::EmptyEncounterIds(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            ids,
        })
    }

    /// Returns the encounter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying ids.
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Returns the ranking that represents this encounter's clear, if any.
    ///
    /// When several ids are cleared the last one in declared order is used.
    #[must_use]
    pub fn cleared_ranking<'a>(&self, rankings: &'a Rankings) -> Option<&'a Ranking> {
        self.ids
            .iter()
            .rev()
            .filter_map(|id| rankings.get(*id))
            .find(|ranking| ranking.cleared())
    }
}

/// An encounter paired with the ranking that proves it was cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clear<'a> {
    /// The cleared encounter.
    pub encounter: &'a Encounter,
    /// The ranking selected for display.
    pub ranking: &'a Ranking,
}

/// An ordered collection of encounters.
///
/// Every query walks encounters in declared order, so tie-breaks are stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encounters {
    encounters: Vec<Encounter>,
}

impl Encounters {
    /// Creates a collection from encounter definitions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateEncounter` if two encounters share a name.
    pub fn new(encounters: Vec<Encounter>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for encounter in &encounters {
            if !seen.insert(encounter.name()) {
                return Err(DomainError::DuplicateEncounter(encounter.name.clone()));
            }
        }
        Ok(Self { encounters })
    }

    /// Iterates encounters in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Encounter> {
        self.encounters.iter()
    }

    /// Looks up an encounter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Encounter> {
        self.encounters.iter().find(|e| e.name == name)
    }

    /// Number of encounters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.encounters.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }

    /// Returns the encounters the member has cleared, in declared order.
    #[must_use]
    pub fn clears<'a>(&'a self, rankings: &'a Rankings) -> Vec<Clear<'a>> {
        self.encounters
            .iter()
            .filter_map(|encounter| {
                encounter
                    .cleared_ranking(rankings)
                    .map(|ranking| Clear { encounter, ranking })
            })
            .collect()
    }

    /// Returns the encounter and rank with the highest DPS percentile among
    /// cleared rankings.
    ///
    /// Ties keep the first candidate seen walking encounters, then ids, in
    /// declared order.
    #[must_use]
    pub fn best_dps_rank<'a>(&'a self, rankings: &'a Rankings) -> Option<(&'a Encounter, &'a Rank)> {
        let mut best: Option<(&Encounter, &Rank)> = None;

        for encounter in &self.encounters {
            for id in &encounter.ids {
                let Some(ranking) = rankings.get(*id) else {
                    continue;
                };
                if !ranking.cleared() {
                    continue;
                }
                let Some(rank) = ranking.best_rank() else {
                    continue;
                };

                match best {
                    Some((_, current)) if rank.dps_percent() <= current.dps_percent() => {}
                    _ => best = Some((encounter, rank)),
                }
            }
        }

        best
    }
}
