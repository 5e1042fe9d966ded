use crate::LeagueAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route("/api/analytics/generate", post(super::analytics_generate_action))
}
