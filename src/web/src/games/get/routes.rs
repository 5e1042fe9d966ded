use crate::LeagueAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/games/{game_id}", get(super::game_get_action))
}
