pub mod routes;

use crate::games::get::GameDto;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use league_core::{GameId, GameProcessor, Reconciliation, Score};
use log::debug;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

impl ScoreRequest {
    fn score(&self) -> ApiResult<Score> {
        let (Some(home), Some(away)) = (self.home_score, self.away_score) else {
            return Err(ApiError::BadRequest(String::from(
                "Home score and away score are required.",
            )));
        };

        Ok(Score::new(points(home)?, points(away)?))
    }
}

fn points(value: i64) -> ApiResult<u32> {
    u32::try_from(value)
        .map_err(|_| ApiError::BadRequest(format!("Score {} is out of range", value)))
}

/// Records or corrects the final score; the game becomes completed.
pub async fn game_score_action(
    State(state): State<LeagueAppData>,
    Path(game_id): Path<GameId>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<GameDto>> {
    let Json(request) = body?;
    let score = request.score()?;

    let mut guard = state.store.write().await;
    let (game, reconciliation) = GameProcessor::submit_score(&mut **guard, game_id, score)?;

    if reconciliation == Reconciliation::Unchanged {
        debug!("game {} resubmitted with the counted score {}", game_id, score);
    }

    Ok(Json(GameDto::from(game)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{fixture, send, Fixture};
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    async fn scheduled_game(fixture: &Fixture) -> Value {
        let (_, game) = send(
            &fixture.data,
            Method::POST,
            "/api/games",
            Some(json!({
                "league_id": fixture.league_id,
                "home_team_id": 1,
                "away_team_id": 2,
                "date": "2030-05-01",
                "time": "18:00:00"
            })),
        )
        .await;

        game
    }

    async fn standing(fixture: &Fixture, team_id: u64) -> Value {
        let uri = format!("/api/leagues/{}/standings", fixture.league_id);
        let (_, table) = send(&fixture.data, Method::GET, &uri, None).await;

        table
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["team_id"] == team_id)
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_score_updates_standings_once() {
        let fixture = fixture(2);
        let game = scheduled_game(&fixture).await;
        let uri = format!("/api/games/{}/score", game["id"]);

        for _ in 0..2 {
            let (status, body) = send(
                &fixture.data,
                Method::POST,
                &uri,
                Some(json!({ "home_score": 3, "away_score": 1 })),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "completed");
            assert_eq!(body["winner"], 1);
        }

        let home = standing(&fixture, 1).await;
        assert_eq!(home["wins"], 1);
        assert_eq!(home["points_for"], 3);
        assert_eq!(home["points_against"], 1);

        let away = standing(&fixture, 2).await;
        assert_eq!(away["losses"], 1);
    }

    #[tokio::test]
    async fn test_correction_replaces_previous_result() {
        let fixture = fixture(2);
        let game = scheduled_game(&fixture).await;
        let uri = format!("/api/games/{}/score", game["id"]);

        send(&fixture.data, Method::POST, &uri, Some(json!({ "home_score": 2, "away_score": 1 }))).await;
        send(&fixture.data, Method::POST, &uri, Some(json!({ "home_score": 1, "away_score": 1 }))).await;

        let home = standing(&fixture, 1).await;
        assert_eq!(home["wins"], 0);
        assert_eq!(home["draws"], 1);
        assert_eq!(home["points_for"], 1);

        let away = standing(&fixture, 2).await;
        assert_eq!(away["losses"], 0);
        assert_eq!(away["draws"], 1);
    }

    #[tokio::test]
    async fn test_missing_score_is_rejected() {
        let fixture = fixture(2);
        let game = scheduled_game(&fixture).await;
        let uri = format!("/api/games/{}/score", game["id"]);

        let (status, body) =
            send(&fixture.data, Method::POST, &uri, Some(json!({ "home_score": 2 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Home score and away score are required.");

        let home = standing(&fixture, 1).await;
        assert_eq!(home["games_played"], 0);
    }

    #[tokio::test]
    async fn test_invalid_scores_are_rejected() {
        let fixture = fixture(2);
        let game = scheduled_game(&fixture).await;
        let uri = format!("/api/games/{}/score", game["id"]);

        for body in [
            json!({ "home_score": -1, "away_score": 2 }),
            json!({ "home_score": "three", "away_score": 2 }),
            json!({ "home_score": 3_000_000_000_i64, "away_score": 0 }),
            json!({ "home_score": 1, "away_score": 5_000_000_000_i64 }),
        ] {
            let (status, _) = send(&fixture.data, Method::POST, &uri, Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let game_uri = format!("/api/games/{}", game["id"]);
        let (_, game) = send(&fixture.data, Method::GET, &game_uri, None).await;
        assert_eq!(game["status"], "scheduled");

        let home = standing(&fixture, 1).await;
        assert_eq!(home["points_for"], 0);
        assert_eq!(home["games_played"], 0);
    }

    #[tokio::test]
    async fn test_score_for_unknown_game() {
        let fixture = fixture(2);

        let (status, _) = send(
            &fixture.data,
            Method::POST,
            "/api/games/31/score",
            Some(json!({ "home_score": 1, "away_score": 0 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_largest_score_is_counted() {
        let fixture = fixture(2);
        let game = scheduled_game(&fixture).await;
        let uri = format!("/api/games/{}/score", game["id"]);

        let (status, _) = send(
            &fixture.data,
            Method::POST,
            &uri,
            Some(json!({ "home_score": i32::MAX, "away_score": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let home = standing(&fixture, 1).await;
        assert_eq!(home["points_for"], i32::MAX);
        assert_eq!(home["point_differential"], i64::from(i32::MAX));
    }
}
