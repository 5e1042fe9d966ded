mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use league_core::{LeagueError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("seed data is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("league {league} rosters unknown seed team {team}")]
    UnknownSeedTeam { league: String, team: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    League(#[from] LeagueError),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
    pub leagues: Vec<LeagueEntity>,
}

impl DatabaseEntity {
    pub fn empty() -> Self {
        DatabaseEntity {
            teams: Vec::new(),
            leagues: Vec::new(),
        }
    }
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseResult<DatabaseEntity> {
        Ok(DatabaseEntity {
            teams: TeamLoader::load()?,
            leagues: LeagueLoader::load()?,
        })
    }
}
