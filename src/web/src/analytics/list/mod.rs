pub mod routes;

use crate::analytics::AnalyticsDto;
use crate::{ApiResult, LeagueAppData};
use axum::extract::{Query, State};
use axum::Json;
use league_core::{LeagueId, TeamId};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AnalyticsListQuery {
    pub team_id: Option<TeamId>,
    pub league_id: Option<LeagueId>,
}

pub async fn analytics_list_action(
    State(state): State<LeagueAppData>,
    Query(query): Query<AnalyticsListQuery>,
) -> ApiResult<Json<Vec<AnalyticsDto>>> {
    let guard = state.store.read().await;

    let analytics = guard.analytics(query.team_id, query.league_id)?;

    Ok(Json(analytics.into_iter().map(AnalyticsDto::from).collect()))
}
