//! Errors raised by entity store implementations.

use crate::game::GameId;
use crate::league::LeagueId;
use crate::team::TeamId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("league {0} does not exist")]
    UnknownLeague(LeagueId),

    #[error("team {0} does not exist")]
    UnknownTeam(TeamId),

    #[error("game {0} does not exist")]
    UnknownGame(GameId),

    #[error("no standing for team {team_id} in league {league_id}")]
    UnknownStanding { league_id: LeagueId, team_id: TeamId },

    #[error("standing for team {team_id} in league {league_id} appears twice in one commit")]
    DuplicateStanding { league_id: LeagueId, team_id: TeamId },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
