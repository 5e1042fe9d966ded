pub mod routes;

use crate::games::get::GameDto;
use crate::{ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use league_core::{GameProcessor, NewGame};
use log::info;

pub async fn game_create_action(
    State(state): State<LeagueAppData>,
    body: Result<Json<NewGame>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GameDto>)> {
    let Json(game) = body?;

    let mut guard = state.store.write().await;
    let game = GameProcessor::create(&mut **guard, game)?;

    info!(
        "game {} created: {} vs {} on {}",
        game.id, game.home_team_id, game.away_team_id, game.date
    );

    Ok((StatusCode::CREATED, Json(GameDto::from(game))))
}
