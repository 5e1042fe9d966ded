pub mod routes;

use crate::leagues::get::LeagueDto;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use league_core::NewLeague;
use log::info;

pub async fn league_create_action(
    State(state): State<LeagueAppData>,
    body: Result<Json<NewLeague>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LeagueDto>)> {
    let Json(league) = body?;

    if league.name.trim().is_empty() {
        return Err(ApiError::BadRequest(String::from("League name is required.")));
    }

    if league.start_date > league.end_date {
        return Err(ApiError::BadRequest(format!(
            "League start date {} is after end date {}",
            league.start_date, league.end_date
        )));
    }

    let mut guard = state.store.write().await;
    let league = guard.insert_league(league)?;

    info!("league {} created: {} ({})", league.id, league.name, league.season);

    Ok((StatusCode::CREATED, Json(LeagueDto::build(&**guard, league)?)))
}
