use crate::LeagueAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/leagues/{league_id}", get(super::league_get_action))
}
