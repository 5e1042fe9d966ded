pub mod routes;

use crate::games::get::GameDto;
use crate::{ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use league_core::{GameId, GameProcessor, GameStatus};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: GameStatus,
}

pub async fn game_status_action(
    State(state): State<LeagueAppData>,
    Path(game_id): Path<GameId>,
    body: Result<Json<StatusRequest>, JsonRejection>,
) -> ApiResult<Json<GameDto>> {
    let Json(request) = body?;

    let mut guard = state.store.write().await;
    let (game, _) = GameProcessor::change_status(&mut **guard, game_id, request.status)?;

    Ok(Json(GameDto::from(game)))
}
