pub mod routes;

use crate::analytics::AnalyticsDto;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use league_core::{AnalyticsAggregator, LeagueId, TeamId};
use log::info;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AnalyticsGenerateRequest {
    pub team_id: Option<TeamId>,
    pub league_id: Option<LeagueId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Recomputes the team's analytics for the window, replacing any stored record for it.
pub async fn analytics_generate_action(
    State(state): State<LeagueAppData>,
    body: Result<Json<AnalyticsGenerateRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyticsDto>> {
    let Json(request) = body?;

    let (Some(team_id), Some(league_id)) = (request.team_id, request.league_id) else {
        return Err(ApiError::BadRequest(String::from(
            "Team ID and League ID are required.",
        )));
    };

    let mut guard = state.store.write().await;
    let analytics = AnalyticsAggregator::compute(
        &mut **guard,
        team_id,
        league_id,
        request.start_date,
        request.end_date,
    )?;

    info!(
        "analytics for team {} in league {} refreshed: {} games",
        team_id, league_id, analytics.summary.games_played
    );

    Ok(Json(AnalyticsDto::from(analytics)))
}
