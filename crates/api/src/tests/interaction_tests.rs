// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    GUILD_ID, create_interaction_request, create_test_config, create_test_registry,
};
use crate::{
    ApiError, InteractionResponse, ListRolesResponse, MenuResponse, ReloadResponse, get_menu,
    handle_interaction, list_roles, main_menu, reload,
};
use clearingway::{GuildRegistry, MessagePayload};
use clearingway_domain::{Config, RoleType};

#[test]
fn test_remove_all_interaction_returns_revocations() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_interaction_request(
        "menuRemove removeAll",
        &["Blue", "The Double Legend", "DSR Tank"],
        &[],
    );

    let response: InteractionResponse = handle_interaction(&registry, GUILD_ID, &request).unwrap();

    let InteractionResponse::Mutate {
        grants,
        revocations,
        ..
    } = response
    else {
        panic!("expected a mutation");
    };
    assert!(grants.is_empty());
    let roles: Vec<&str> = revocations.iter().map(|c| c.role.as_str()).collect();
    assert_eq!(roles, vec!["Blue", "The Double Legend", "DSR Tank"]);
}

#[test]
fn test_require_clear_interaction_is_denied() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_interaction_request("menuDsr encounterProcess", &[], &["DSR Tank"]);

    let response: InteractionResponse = handle_interaction(&registry, GUILD_ID, &request).unwrap();

    assert!(matches!(response, InteractionResponse::Denied { .. }));
}

#[test]
fn test_unknown_role_is_resource_not_found() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_interaction_request("menuDsr encounterProcess", &[], &["DSR Melee"]);

    let result: Result<InteractionResponse, ApiError> =
        handle_interaction(&registry, GUILD_ID, &request);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Role"
    ));
}

#[test]
fn test_missing_modal_field_is_invalid_input() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_interaction_request("menuVerify clearsModal", &[], &[]);

    let result: Result<InteractionResponse, ApiError> =
        handle_interaction(&registry, GUILD_ID, &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "character"
    ));
}

#[test]
fn test_interaction_response_serializes_with_type_tag() {
    let registry: GuildRegistry = create_test_registry();
    let request = create_interaction_request("menuVerify menu", &[], &[]);

    let response: InteractionResponse = handle_interaction(&registry, GUILD_ID, &request).unwrap();
    let json: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["type"], "modal");
    assert_eq!(json["modal"]["custom_id"], "menuVerify clearsModal");
}

#[test]
fn test_main_menu_has_one_button_per_menu() {
    let registry: GuildRegistry = create_test_registry();

    let payload: MessagePayload = main_menu(&registry, GUILD_ID).unwrap();

    assert_eq!(payload.title, "Welcome to Ultimate Hub");
    assert_eq!(payload.components.len(), 3);
}

#[test]
fn test_get_menu_returns_modal_for_verify_menu() {
    let registry: GuildRegistry = create_test_registry();

    let response: MenuResponse = get_menu(&registry, GUILD_ID, "menuVerify").unwrap();

    assert!(matches!(response, MenuResponse::Modal { .. }));
}

#[test]
fn test_get_menu_unknown_menu_is_not_found() {
    let registry: GuildRegistry = create_test_registry();

    let result: Result<MenuResponse, ApiError> = get_menu(&registry, GUILD_ID, "menuFru");

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Menu"
    ));
}

#[test]
fn test_list_roles_returns_guild_vocabulary() {
    let registry: GuildRegistry = create_test_registry();

    let response: ListRolesResponse = list_roles(&registry, GUILD_ID).unwrap();

    assert_eq!(response.guild_id, GUILD_ID);
    assert_eq!(response.roles.len(), 16);
    assert_eq!(response.roles[0].name, "Gold");
    assert_eq!(response.roles[0].color, 0x00e1_cc8a);
    assert_eq!(response.roles[15].role_type, RoleType::Comfy);
}

#[test]
fn test_reload_reports_skipped_guilds() {
    let registry: GuildRegistry = create_test_registry();
    let mut config: Config = create_test_config();
    let mut broken = config.guilds[0].clone();
    broken.id = String::from("guild-2");
    broken.menus[0].menu_type = String::from("menuSideways");
    config.guilds.push(broken);

    let response: ReloadResponse = reload(&registry, &config);

    assert_eq!(response.guilds, vec![String::from(GUILD_ID)]);
    assert_eq!(response.skipped.len(), 1);
    assert!(response.skipped[0].error.contains("guild-2"));
}
