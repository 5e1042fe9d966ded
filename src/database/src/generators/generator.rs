use crate::{DatabaseEntity, DatabaseError, DatabaseResult};
use league_core::{EntityStore, InMemoryStore, LeagueTable, NewLeague, NewTeam, TeamId};
use log::{debug, info};
use std::collections::HashMap;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a store from seed entities, rostering every team with a zeroed standing.
    pub fn generate(data: &DatabaseEntity) -> DatabaseResult<InMemoryStore> {
        let mut store = InMemoryStore::new();

        let mut team_ids: HashMap<u32, TeamId> = HashMap::with_capacity(data.teams.len());

        for team in &data.teams {
            let created = store.insert_team(NewTeam {
                name: team.name.clone(),
                sport: team.sport.clone(),
            })?;

            team_ids.insert(team.id, created.id);
        }

        for league in &data.leagues {
            let created = store.insert_league(NewLeague {
                name: league.name.clone(),
                sport: league.sport.clone(),
                season: league.season.clone(),
                start_date: league.start_date,
                end_date: league.end_date,
                status: league.status,
            })?;

            for seed_team_id in &league.teams {
                let team_id = team_ids
                    .get(seed_team_id)
                    .copied()
                    .ok_or_else(|| DatabaseError::UnknownSeedTeam {
                        league: league.name.clone(),
                        team: *seed_team_id,
                    })?;

                LeagueTable::add_team(&mut store, created.id, team_id)?;
            }

            debug!("seeded league {} with {} teams", created.name, league.teams.len());
        }

        info!(
            "generated store: {} teams, {} leagues",
            data.teams.len(),
            data.leagues.len()
        );

        Ok(store)
    }
}
