pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use league_core::{EntityStore, League, LeagueId, StoreResult};
use serde::Serialize;

#[derive(Serialize)]
pub struct LeagueDto {
    #[serde(flatten)]
    pub league: League,
    pub teams_count: usize,
    pub games_count: usize,
    pub completed_games_count: usize,
}

impl LeagueDto {
    pub fn build(store: &dyn EntityStore, league: League) -> StoreResult<Self> {
        let games = store.games(Some(league.id))?;

        Ok(LeagueDto {
            teams_count: league.teams_count(),
            games_count: games.len(),
            completed_games_count: games.iter().filter(|game| game.is_completed()).count(),
            league,
        })
    }
}

pub async fn league_get_action(
    State(state): State<LeagueAppData>,
    Path(league_id): Path<LeagueId>,
) -> ApiResult<Json<LeagueDto>> {
    let guard = state.store.read().await;

    let league = guard
        .league(league_id)?
        .ok_or_else(|| ApiError::NotFound(format!("League with id {} not found", league_id)))?;

    Ok(Json(LeagueDto::build(&**guard, league)?))
}
