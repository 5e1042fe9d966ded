use crate::LeagueAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route(
        "/api/leagues/{league_id}/standings",
        get(super::standings_list_action).post(super::standing_override_action),
    )
}
