use crate::LeagueAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/games/schedule", post(super::game_schedule_action))
}
