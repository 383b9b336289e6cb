// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use clearingway::{GuildRegistry, MessagePayload};
use clearingway_api::{
    ApiError, EvaluateRequest, EvaluateResponse, InteractionRequest, InteractionResponse,
    ListRolesResponse, MenuResponse, ReloadResponse, evaluate_member, get_menu,
    handle_interaction, list_roles, main_menu, reload,
};
use clearingway_domain::Config;
use config::{ConfigError, load_config, load_config_async};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Clearingway Server - role assignment from encounter rankings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "clearingway.toml")]
    config: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The registry swaps its guilds on reload, so handlers always read a
/// consistent snapshot.
#[derive(Clone)]
struct AppState {
    /// Every configured guild.
    registry: Arc<GuildRegistry>,
    /// The file re-read on reload.
    config_path: Arc<PathBuf>,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok`.
    status: String,
    /// Number of loaded guilds.
    guilds: usize,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for HttpError {
    fn from(err: ConfigError) -> Self {
        error!(error = %err, "Configuration error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        guilds: app_state.registry.len(),
    })
}

/// Handler for GET `/guilds/{guild_id}/roles` endpoint.
///
/// Lists every role the guild manages.
async fn handle_list_roles(
    AxumState(app_state): AxumState<AppState>,
    Path(guild_id): Path<String>,
) -> Result<Json<ListRolesResponse>, HttpError> {
    info!(guild = %guild_id, "Handling list_roles request");

    let response: ListRolesResponse = list_roles(&app_state.registry, &guild_id)?;
    Ok(Json(response))
}

/// Handler for GET `/guilds/{guild_id}/menus/main` endpoint.
async fn handle_main_menu(
    AxumState(app_state): AxumState<AppState>,
    Path(guild_id): Path<String>,
) -> Result<Json<MessagePayload>, HttpError> {
    info!(guild = %guild_id, "Handling main_menu request");

    let payload: MessagePayload = main_menu(&app_state.registry, &guild_id)?;
    Ok(Json(payload))
}

/// Handler for GET `/guilds/{guild_id}/menus/{menu}` endpoint.
async fn handle_get_menu(
    AxumState(app_state): AxumState<AppState>,
    Path((guild_id, menu)): Path<(String, String)>,
) -> Result<Json<MenuResponse>, HttpError> {
    info!(guild = %guild_id, menu = %menu, "Handling get_menu request");

    let response: MenuResponse = get_menu(&app_state.registry, &guild_id, &menu)?;
    Ok(Json(response))
}

/// Handler for POST `/guilds/{guild_id}/evaluate` endpoint.
///
/// Evaluates a member's rankings and returns the role changes to make.
async fn handle_evaluate(
    AxumState(app_state): AxumState<AppState>,
    Path(guild_id): Path<String>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, HttpError> {
    info!(
        guild = %guild_id,
        member = %request.member_id,
        rankings = request.rankings.len(),
        "Handling evaluate request"
    );

    let response: EvaluateResponse = evaluate_member(&app_state.registry, &guild_id, &request)?;
    Ok(Json(response))
}

/// Handler for POST `/guilds/{guild_id}/interactions` endpoint.
async fn handle_interaction_request(
    AxumState(app_state): AxumState<AppState>,
    Path(guild_id): Path<String>,
    Json(request): Json<InteractionRequest>,
) -> Result<Json<InteractionResponse>, HttpError> {
    info!(
        guild = %guild_id,
        member = %request.member_id,
        custom_id = %request.custom_id,
        "Handling interaction request"
    );

    let response: InteractionResponse =
        handle_interaction(&app_state.registry, &guild_id, &request)?;
    Ok(Json(response))
}

/// Handler for POST `/reload` endpoint.
///
/// Re-reads the configuration file and swaps in the rebuilt guilds. A file
/// that cannot be read or parsed leaves the current guilds in place.
async fn handle_reload(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReloadResponse>, HttpError> {
    info!(path = %app_state.config_path.display(), "Handling reload request");

    let config: Config = load_config_async(&app_state.config_path).await?;
    let response: ReloadResponse = reload(&app_state.registry, &config);
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/guilds/{guild_id}/roles", get(handle_list_roles))
        .route("/guilds/{guild_id}/menus/main", get(handle_main_menu))
        .route("/guilds/{guild_id}/menus/{menu}", get(handle_get_menu))
        .route("/guilds/{guild_id}/evaluate", post(handle_evaluate))
        .route(
            "/guilds/{guild_id}/interactions",
            post(handle_interaction_request),
        )
        .route("/reload", post(handle_reload))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Clearingway Server");

    let config: Config = load_config(&args.config)?;
    let (registry, skipped) = GuildRegistry::from_config(&config);
    info!(
        path = %args.config.display(),
        guilds = registry.len(),
        skipped = skipped.len(),
        "Loaded configuration"
    );

    let app_state: AppState = AppState {
        registry: Arc::new(registry),
        config_path: Arc::new(args.config),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
