use crate::error::{Entity, LeagueError, Result};
use crate::league::{League, LeagueId, Standing, StandingUpdate};
use crate::store::EntityStore;
use crate::team::TeamId;
use log::info;

/// League roster and standings table maintenance.
pub struct LeagueTable;

impl LeagueTable {
    /// Puts the team on the roster and makes sure it has a standing.
    pub fn add_team(store: &mut dyn EntityStore, league_id: LeagueId, team_id: TeamId) -> Result<Standing> {
        let mut league = Self::league(store, league_id)?;
        Self::ensure_team(store, team_id)?;

        if league.add_team(team_id) {
            store.save_league(&league)?;
            info!("team {} joined league {}", team_id, league.name);
        }

        Ok(store.standing_or_create(league_id, team_id)?)
    }

    /// Takes the team off the roster and drops its standing.
    pub fn remove_team(store: &mut dyn EntityStore, league_id: LeagueId, team_id: TeamId) -> Result<()> {
        let mut league = Self::league(store, league_id)?;
        Self::ensure_team(store, team_id)?;

        if league.remove_team(team_id) {
            store.save_league(&league)?;
            info!("team {} left league {}", team_id, league.name);
        }

        store.delete_standing(league_id, team_id)?;

        Ok(())
    }

    /// Standings sorted by points, then point differential.
    pub fn standings(store: &dyn EntityStore, league_id: LeagueId) -> Result<Vec<Standing>> {
        Self::league(store, league_id)?;

        let mut standings = store.standings(league_id)?;
        standings.sort_by(Standing::table_order);

        Ok(standings)
    }

    /// Manual correction of one team's standing.
    pub fn override_standing(
        store: &mut dyn EntityStore,
        league_id: LeagueId,
        update: &StandingUpdate,
    ) -> Result<Standing> {
        Self::league(store, league_id)?;
        Self::ensure_team(store, update.team_id)?;

        let mut standing = store.standing_or_create(league_id, update.team_id)?;
        standing.override_with(update);
        store.save_standing(&standing)?;

        Ok(standing)
    }

    fn league(store: &dyn EntityStore, league_id: LeagueId) -> Result<League> {
        store
            .league(league_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::League, league_id))
    }

    fn ensure_team(store: &dyn EntityStore, team_id: TeamId) -> Result<()> {
        store
            .team(team_id)?
            .map(|_| ())
            .ok_or_else(|| LeagueError::not_found(Entity::Team, team_id))
    }
}
