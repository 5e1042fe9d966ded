use crate::LeagueAppData;
use axum::routing::{delete, get};
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route(
            "/api/leagues/{league_id}/teams",
            get(super::roster_list_action).post(super::roster_add_action),
        )
        .route(
            "/api/leagues/{league_id}/teams/{team_id}",
            delete(super::roster_remove_action),
        )
}
