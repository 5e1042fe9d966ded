use crate::store::StoreError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Team,
    League,
    Game,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Team => "Team",
            Entity::League => "League",
            Entity::Game => "Game",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: u32 },

    #[error("league must have at least 2 teams to generate a schedule, found {found}")]
    InsufficientTeams { found: usize },

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LeagueError {
    pub fn not_found(entity: Entity, id: u32) -> Self {
        LeagueError::NotFound { entity, id }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
