pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::extract::State;
use axum::Json;
use league_core::Team;

pub async fn team_list_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<Team>>> {
    let guard = state.store.read().await;

    Ok(Json(guard.teams()?))
}
