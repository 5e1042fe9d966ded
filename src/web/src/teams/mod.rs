pub mod create;
pub mod get;
pub mod list;

use crate::LeagueAppData;
use axum::Router;

pub fn team_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(create::routes::routes())
        .merge(get::routes::routes())
}
