pub mod routes;

use crate::leagues::get::LeagueDto;
use crate::{ApiResult, LeagueAppData};
use axum::extract::State;
use axum::Json;

pub async fn league_list_action(State(state): State<LeagueAppData>) -> ApiResult<Json<Vec<LeagueDto>>> {
    let guard = state.store.read().await;

    let leagues = guard
        .leagues()?
        .into_iter()
        .map(|league| LeagueDto::build(&**guard, league))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(leagues))
}
