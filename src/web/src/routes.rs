use crate::analytics::analytics_routes;
use crate::common::default_handler::default_handler;
use crate::games::game_routes;
use crate::leagues::league_routes;
use crate::teams::team_routes;
use crate::LeagueAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LeagueAppData> {
        Router::<LeagueAppData>::new()
            .merge(team_routes())
            .merge(league_routes())
            .merge(game_routes())
            .merge(analytics_routes())
            .fallback(default_handler)
    }
}
