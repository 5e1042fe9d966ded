use crate::LeagueAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/games/{game_id}/status", post(super::game_status_action))
}
