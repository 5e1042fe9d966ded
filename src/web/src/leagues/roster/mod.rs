pub mod routes;

use crate::leagues::standings::StandingDto;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use league_core::{LeagueId, LeagueTable, StoreError, Team, TeamId};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RosterAddRequest {
    pub team_id: TeamId,
}

pub async fn roster_list_action(
    State(state): State<LeagueAppData>,
    Path(league_id): Path<LeagueId>,
) -> ApiResult<Json<Vec<Team>>> {
    let guard = state.store.read().await;

    let league = guard
        .league(league_id)?
        .ok_or_else(|| ApiError::NotFound(format!("League with id {} not found", league_id)))?;

    let teams = league
        .teams
        .iter()
        .map(|team_id| guard.team(*team_id)?.ok_or(StoreError::UnknownTeam(*team_id)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(teams))
}

/// Rosters the team; adding an already rostered team keeps its standing.
pub async fn roster_add_action(
    State(state): State<LeagueAppData>,
    Path(league_id): Path<LeagueId>,
    body: Result<Json<RosterAddRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StandingDto>)> {
    let Json(request) = body?;

    let mut guard = state.store.write().await;
    let standing = LeagueTable::add_team(&mut **guard, league_id, request.team_id)?;

    Ok((StatusCode::CREATED, Json(StandingDto::build(&**guard, &standing)?)))
}

pub async fn roster_remove_action(
    State(state): State<LeagueAppData>,
    Path((league_id, team_id)): Path<(LeagueId, TeamId)>,
) -> ApiResult<StatusCode> {
    let mut guard = state.store.write().await;

    LeagueTable::remove_team(&mut **guard, league_id, team_id)?;

    Ok(StatusCode::NO_CONTENT)
}
