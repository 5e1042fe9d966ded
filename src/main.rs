use database::{DatabaseEntity, DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use log::info;
use std::env;
use web::{LeagueAppData, LeagueServer, ServerSettings};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let is_empty_start = env::var("MODE") == Ok(String::from("EMPTY"));

    let database = if is_empty_start {
        info!("starting with an empty store");
        DatabaseEntity::empty()
    } else {
        let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
        info!("database loaded: {} ms", estimated);
        database?
    };

    let store = DatabaseGenerator::generate(&database)?;

    let data = LeagueAppData::new(store);

    LeagueServer::new(data, ServerSettings::from_env()).run().await?;

    Ok(())
}
