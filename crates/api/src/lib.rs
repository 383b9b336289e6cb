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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    evaluate_member, get_menu, handle_interaction, list_roles, main_menu, rankings_from_request,
    reload,
};
pub use request_response::{
    EvaluateRequest, EvaluateResponse, EvaluationInfo, InteractionRequest, InteractionResponse,
    ListRolesResponse, MenuResponse, RankRecord, RankingRecord, ReloadResponse, RoleInfo,
    SkippedGuild,
};
