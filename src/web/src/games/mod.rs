pub mod create;
pub mod get;
pub mod list;
pub mod schedule;
pub mod score;
pub mod status;

use crate::LeagueAppData;
use axum::Router;

pub fn game_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(create::routes::routes())
        .merge(schedule::routes::routes())
        .merge(get::routes::routes())
        .merge(score::routes::routes())
        .merge(status::routes::routes())
}
