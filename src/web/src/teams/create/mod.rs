pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use league_core::{NewTeam, Team};
use log::info;

pub async fn team_create_action(
    State(state): State<LeagueAppData>,
    body: Result<Json<NewTeam>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let Json(team) = body?;

    if team.name.trim().is_empty() {
        return Err(ApiError::BadRequest(String::from("Team name is required.")));
    }

    let mut guard = state.store.write().await;
    let team = guard.insert_team(team)?;

    info!("team {} created: {}", team.id, team.name);

    Ok((StatusCode::CREATED, Json(team)))
}
