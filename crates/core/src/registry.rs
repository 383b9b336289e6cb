// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::guild::Guild;
use clearingway_domain::Config;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info};

/// Guilds keyed by id.
pub type GuildMap = BTreeMap<String, Arc<Guild>>;

/// Every configured guild, keyed by id.
///
/// Readers take a snapshot of the whole map. A reload swaps the map in one
/// step, so an in-flight request keeps the guild it started with.
#[derive(Debug, Default)]
pub struct GuildRegistry {
    guilds: RwLock<Arc<GuildMap>>,
}

impl GuildRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from configuration.
    ///
    /// A guild that fails to build, or repeats an earlier id, is skipped
    /// and its error returned alongside the registry.
    #[must_use]
    pub fn from_config(config: &Config) -> (Self, Vec<CoreError>) {
        let (guilds, errors): (GuildMap, Vec<CoreError>) = build_guilds(config);
        (
            Self {
                guilds: RwLock::new(Arc::new(guilds)),
            },
            errors,
        )
    }

    /// Looks up a guild.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::GuildNotFound` if no guild has this id.
    pub fn get(&self, guild_id: &str) -> Result<Arc<Guild>, CoreError> {
        self.snapshot()
            .get(guild_id)
            .cloned()
            .ok_or_else(|| CoreError::GuildNotFound(guild_id.to_string()))
    }

    /// The current guild map.
    #[must_use]
    pub fn snapshot(&self) -> Arc<GuildMap> {
        Arc::clone(&self.guilds.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces every guild at once.
    pub fn replace(&self, guilds: GuildMap) {
        *self.guilds.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(guilds);
    }

    /// Rebuilds every guild from configuration and swaps them in.
    ///
    /// Returns the errors of guilds that were skipped.
    #[must_use]
    pub fn reload(&self, config: &Config) -> Vec<CoreError> {
        let (guilds, errors): (GuildMap, Vec<CoreError>) = build_guilds(config);
        info!(guilds = guilds.len(), skipped = errors.len(), "Reloaded guilds");
        self.replace(guilds);
        errors
    }

    /// Number of guilds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether no guild is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Guild ids in order.
    #[must_use]
    pub fn guild_ids(&self) -> Vec<String> {
        self.snapshot().keys().cloned().collect()
    }
}

fn build_guilds(config: &Config) -> (GuildMap, Vec<CoreError>) {
    let mut guilds: GuildMap = BTreeMap::new();
    let mut errors: Vec<CoreError> = Vec::new();

    for guild_config in &config.guilds {
        if guilds.contains_key(&guild_config.id) {
            error!(guild = %guild_config.id, "Skipping duplicate guild");
            errors.push(CoreError::DuplicateGuild(guild_config.id.clone()));
            continue;
        }
        match Guild::from_config(guild_config) {
            Ok(guild) => {
                info!(
                    guild = %guild.id,
                    name = %guild.name,
                    roles = guild.roles.len(),
                    menus = guild.menus.len(),
                    "Loaded guild"
                );
                guilds.insert(guild.id.clone(), Arc::new(guild));
            }
            Err(err) => {
                error!(guild = %guild_config.id, error = %err, "Skipping guild");
                errors.push(err);
            }
        }
    }

    (guilds, errors)
}
