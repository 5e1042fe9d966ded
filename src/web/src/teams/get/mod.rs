pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use league_core::{Team, TeamId};

pub async fn team_get_action(
    State(state): State<LeagueAppData>,
    Path(team_id): Path<TeamId>,
) -> ApiResult<Json<Team>> {
    let guard = state.store.read().await;

    let team = guard
        .team(team_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Team with id {} not found", team_id)))?;

    Ok(Json(team))
}
