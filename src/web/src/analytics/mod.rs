pub mod generate;
pub mod list;

use crate::LeagueAppData;
use axum::Router;
use league_core::TeamAnalytics;
use serde::Serialize;

pub fn analytics_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(generate::routes::routes())
}

#[derive(Serialize)]
pub struct AnalyticsDto {
    #[serde(flatten)]
    pub analytics: TeamAnalytics,
    pub win_percentage: f64,
    pub point_differential: i64,
}

impl From<TeamAnalytics> for AnalyticsDto {
    fn from(analytics: TeamAnalytics) -> Self {
        AnalyticsDto {
            win_percentage: analytics.summary.win_percentage(),
            point_differential: analytics.summary.point_differential(),
            analytics,
        }
    }
}
