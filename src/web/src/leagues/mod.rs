pub mod create;
pub mod get;
pub mod list;
pub mod roster;
pub mod standings;

use crate::LeagueAppData;
use axum::Router;

pub fn league_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(create::routes::routes())
        .merge(get::routes::routes())
        .merge(roster::routes::routes())
        .merge(standings::routes::routes())
}
