pub mod routes;

use crate::games::get::GameDto;
use crate::{ApiResult, LeagueAppData};
use axum::extract::{Query, State};
use axum::Json;
use league_core::LeagueId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GameListQuery {
    pub league_id: Option<LeagueId>,
}

/// Games in kick-off order, optionally limited to one league.
pub async fn game_list_action(
    State(state): State<LeagueAppData>,
    Query(query): Query<GameListQuery>,
) -> ApiResult<Json<Vec<GameDto>>> {
    let guard = state.store.read().await;

    let mut games = guard.games(query.league_id)?;
    games.sort_by_key(|game| (game.date, game.time, game.id));

    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}
