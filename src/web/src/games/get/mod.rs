pub mod routes;

use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::{Path, State};
use axum::Json;
use league_core::{Game, GameId, TeamId};
use serde::Serialize;

#[derive(Serialize)]
pub struct GameDto {
    #[serde(flatten)]
    pub game: Game,
    pub winner: Option<TeamId>,
}

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        GameDto {
            winner: game.winner(),
            game,
        }
    }
}

pub async fn game_get_action(
    State(state): State<LeagueAppData>,
    Path(game_id): Path<GameId>,
) -> ApiResult<Json<GameDto>> {
    let guard = state.store.read().await;

    let game = guard
        .game(game_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Game with id {} not found", game_id)))?;

    Ok(Json(GameDto::from(game)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{fixture, send};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_unknown_game_is_404() {
        let fixture = fixture(2);

        let (status, body) = send(&fixture.data, Method::GET, "/api/games/5", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Game with id 5 not found");
    }
}
