// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    EvaluateRequest, EvaluateResponse, EvaluationInfo, InteractionRequest, InteractionResponse,
    ListRolesResponse, MenuResponse, RankRecord, RankingRecord, ReloadResponse, RoleInfo,
    SkippedGuild,
};
use clearingway::{
    CoreError, Guild, GuildRegistry, Interaction, MessagePayload, Outcome, RoleMutation,
    dispatch, main_menu_payload, menu_payload, verify_modal,
};
use clearingway_domain::{
    Config, DomainError, Job, Menu, MenuType, Rank, Ranking, Rankings, Report,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Looks up a guild, logging a miss.
fn find_guild(registry: &GuildRegistry, guild_id: &str) -> Result<Arc<Guild>, ApiError> {
    registry.get(guild_id).map_err(|err| {
        warn!(guild = guild_id, "Guild not found");
        translate_core_error(err)
    })
}

fn rank_from_record(record: &RankRecord) -> Result<Rank, DomainError> {
    Rank::new(
        record.dps_percent,
        Job::new(&record.job),
        record.start_time,
        Report::new(&record.report_code, record.fight_id)?,
    )
}

fn ranking_from_record(record: &RankingRecord) -> Result<Ranking, DomainError> {
    let ranks: Vec<Rank> = record
        .ranks
        .iter()
        .map(rank_from_record)
        .collect::<Result<Vec<Rank>, DomainError>>()?;
    Ranking::new(record.encounter_id, record.total_kills, ranks)
}

/// Builds a ranking snapshot from request records.
///
/// # Errors
///
/// Returns an error if:
/// - A percentile or timestamp is out of range
/// - A report code is empty
/// - A ranking has kills but no ranks
/// - Two records share an encounter id
pub fn rankings_from_request(records: &[RankingRecord]) -> Result<Rankings, ApiError> {
    let rankings: Vec<Ranking> = records
        .iter()
        .map(ranking_from_record)
        .collect::<Result<Vec<Ranking>, DomainError>>()
        .map_err(translate_domain_error)?;
    Rankings::from_rankings(rankings).map_err(translate_domain_error)
}

/// Evaluates a member's rankings against every guild role.
///
/// # Arguments
///
/// * `registry` - The guild registry
/// * `guild_id` - The guild to evaluate in
/// * `request` - The member and their ranking snapshot
///
/// # Returns
///
/// Every role decision, plus the grants and revocations that bring the
/// member's held rule-derived roles in line with them.
///
/// # Errors
///
/// Returns an error if the guild does not exist or the snapshot is invalid.
pub fn evaluate_member(
    registry: &GuildRegistry,
    guild_id: &str,
    request: &EvaluateRequest,
) -> Result<EvaluateResponse, ApiError> {
    let guild: Arc<Guild> = find_guild(registry, guild_id)?;
    let rankings: Rankings = rankings_from_request(&request.rankings)?;

    let evaluations: Vec<EvaluationInfo> = guild
        .evaluate(&rankings)
        .into_iter()
        .map(|evaluation| EvaluationInfo {
            role: evaluation.role.name.clone(),
            role_type: evaluation.role.role_type,
            applies: evaluation.decision.applies,
            reason: evaluation.decision.reason,
        })
        .collect();

    let mutation: RoleMutation = guild.reconcile(&request.member_id, &request.held_roles, &rankings);
    info!(
        guild = guild_id,
        member = %request.member_id,
        grants = mutation.grants.len(),
        revocations = mutation.revocations.len(),
        "Evaluated member"
    );

    Ok(EvaluateResponse {
        member_id: request.member_id.clone(),
        evaluations,
        grants: mutation.grants,
        revocations: mutation.revocations,
    })
}

/// Dispatches a component interaction.
///
/// # Errors
///
/// Returns an error if the guild, menu, command or selected role does not
/// exist, or the interaction is malformed.
pub fn handle_interaction(
    registry: &GuildRegistry,
    guild_id: &str,
    request: &InteractionRequest,
) -> Result<InteractionResponse, ApiError> {
    let guild: Arc<Guild> = find_guild(registry, guild_id)?;
    let interaction: Interaction = Interaction::from(request);

    let outcome: Outcome = dispatch(&guild, &interaction).map_err(|err: CoreError| {
        if err.is_lookup_miss() {
            warn!(
                guild = guild_id,
                custom_id = %request.custom_id,
                error = %err,
                "Interaction lookup miss"
            );
        }
        translate_core_error(err)
    })?;

    Ok(match outcome {
        Outcome::Respond(message) => InteractionResponse::Message { message },
        Outcome::Modal(modal) => InteractionResponse::Modal { modal },
        Outcome::FetchRankings {
            member_id,
            character,
            world,
        } => InteractionResponse::FetchRankings {
            member_id,
            character,
            world,
        },
        Outcome::Mutate { mutation, message } => InteractionResponse::Mutate {
            grants: mutation.grants,
            revocations: mutation.revocations,
            message,
        },
        Outcome::Denied { reason } => InteractionResponse::Denied { reason },
    })
}

/// Returns a guild's main menu message.
///
/// # Errors
///
/// Returns an error if the guild does not exist or has no main menu.
pub fn main_menu(registry: &GuildRegistry, guild_id: &str) -> Result<MessagePayload, ApiError> {
    let guild: Arc<Guild> = find_guild(registry, guild_id)?;
    main_menu_payload(&guild.menus).ok_or_else(|| {
        translate_core_error(CoreError::MenuNotFound(String::from(MenuType::Main.as_str())))
    })
}

/// Returns what opening a menu shows.
///
/// # Errors
///
/// Returns an error if the guild or menu does not exist.
pub fn get_menu(
    registry: &GuildRegistry,
    guild_id: &str,
    menu_name: &str,
) -> Result<MenuResponse, ApiError> {
    let guild: Arc<Guild> = find_guild(registry, guild_id)?;
    let menu: &Menu = guild.menus.get(menu_name).ok_or_else(|| {
        warn!(guild = guild_id, menu = menu_name, "Menu not found");
        translate_core_error(CoreError::MenuNotFound(menu_name.to_string()))
    })?;

    let message: Option<MessagePayload> = match menu.menu_type {
        MenuType::Main => main_menu_payload(&guild.menus),
        MenuType::Verify => {
            return Ok(MenuResponse::Modal {
                modal: verify_modal(menu),
            });
        }
        MenuType::Remove | MenuType::Encounter => menu_payload(menu),
    };

    message
        .map(|message| MenuResponse::Message { message })
        .ok_or_else(|| translate_core_error(CoreError::MenuNotFound(menu_name.to_string())))
}

/// Lists every role a guild manages.
///
/// # Errors
///
/// Returns an error if the guild does not exist.
pub fn list_roles(registry: &GuildRegistry, guild_id: &str) -> Result<ListRolesResponse, ApiError> {
    let guild: Arc<Guild> = find_guild(registry, guild_id)?;

    let roles: Vec<RoleInfo> = guild
        .roles
        .iter()
        .map(|role| RoleInfo {
            name: role.name.clone(),
            description: role.description.clone(),
            color: role.color,
            hoist: role.hoist,
            mention: role.mention,
            role_type: role.role_type,
            rule: role.rule.clone(),
        })
        .collect();

    Ok(ListRolesResponse {
        guild_id: guild.id.clone(),
        roles,
    })
}

/// Rebuilds every guild from configuration.
///
/// Guilds that fail to build are skipped and reported; the rest replace the
/// current set.
#[must_use]
pub fn reload(registry: &GuildRegistry, config: &Config) -> ReloadResponse {
    let skipped: Vec<SkippedGuild> = registry
        .reload(config)
        .into_iter()
        .map(|err| SkippedGuild {
            error: err.to_string(),
        })
        .collect();

    ReloadResponse {
        guilds: registry.guild_ids(),
        skipped,
    }
}
