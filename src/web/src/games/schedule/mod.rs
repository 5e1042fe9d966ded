pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use league_core::{LeagueId, ScheduleGenerator};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub league_id: LeagueId,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub detail: String,
    pub league_id: LeagueId,
    pub games_created: usize,
}

pub async fn game_schedule_action(
    State(state): State<LeagueAppData>,
    body: Result<Json<ScheduleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ScheduleResponse>)> {
    let Json(request) = body?;
    let today = Local::now().date_naive();

    let mut guard = state.store.write().await;
    let games_created = ScheduleGenerator::generate(&mut **guard, request.league_id, today)?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse {
            detail: format!("{} games have been scheduled.", games_created),
            league_id: request.league_id,
            games_created,
        }),
    ))
}
