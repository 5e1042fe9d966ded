use crate::LeagueAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/games", post(super::game_create_action))
}
