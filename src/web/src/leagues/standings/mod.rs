pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use league_core::{
    EntityStore, LeagueId, LeagueTable, Standing, StandingUpdate, StoreError, StoreResult, TeamId,
};
use log::info;
use serde::Serialize;

#[derive(Serialize)]
pub struct StandingDto {
    pub team_id: TeamId,
    pub team_name: String,
    pub games_played: i64,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub points: i64,
    pub points_for: i32,
    pub points_against: i32,
    pub point_differential: i64,
}

impl StandingDto {
    pub fn build(store: &dyn EntityStore, standing: &Standing) -> StoreResult<Self> {
        let team = store
            .team(standing.team_id)?
            .ok_or(StoreError::UnknownTeam(standing.team_id))?;

        Ok(StandingDto {
            team_id: standing.team_id,
            team_name: team.name,
            games_played: standing.games_played(),
            wins: standing.wins,
            losses: standing.losses,
            draws: standing.draws,
            points: standing.points(),
            points_for: standing.points_for,
            points_against: standing.points_against,
            point_differential: standing.point_differential(),
        })
    }
}

pub async fn standings_list_action(
    State(state): State<LeagueAppData>,
    Path(league_id): Path<LeagueId>,
) -> ApiResult<Json<Vec<StandingDto>>> {
    let guard = state.store.read().await;

    let table = LeagueTable::standings(&**guard, league_id)?
        .iter()
        .map(|standing| StandingDto::build(&**guard, standing))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(table))
}

pub async fn standing_override_action(
    State(state): State<LeagueAppData>,
    Path(league_id): Path<LeagueId>,
    body: Result<Json<StandingUpdate>, JsonRejection>,
) -> ApiResult<Json<StandingDto>> {
    let Json(update) = body?;

    let mut guard = state.store.write().await;
    let standing = LeagueTable::override_standing(&mut **guard, league_id, &update)?;

    info!(
        "standing of team {} in league {} overridden",
        standing.team_id, standing.league_id
    );

    Ok(Json(StandingDto::build(&**guard, &standing)?))
}
