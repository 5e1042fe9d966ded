use crate::error::{Entity, LeagueError, Result};
use crate::game::NewGame;
use crate::league::{League, LeagueId};
use crate::store::EntityStore;
use crate::team::TeamId;
use chrono::{Duration, NaiveDate, NaiveTime};
use itertools::Itertools;
use log::info;

const DAYS_BETWEEN_GAMES: i64 = 3;
const KICK_OFF_HOUR: u32 = 18;

/// Double round-robin fixture list: every pair meets home and away.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Schedules the league's current roster and returns how many games were created.
    ///
    /// Running it again appends another full set of games.
    pub fn generate(store: &mut dyn EntityStore, league_id: LeagueId, today: NaiveDate) -> Result<usize> {
        let league = store
            .league(league_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::League, league_id))?;

        for team_id in &league.teams {
            store
                .team(*team_id)?
                .ok_or_else(|| LeagueError::not_found(Entity::Team, *team_id))?;
        }

        let fixtures = Self::fixtures(&league, &league.teams, today)?;
        let created = store.insert_games(fixtures)?.len();

        info!(
            "{} games have been scheduled for league {} ({} teams)",
            created,
            league.name,
            league.teams.len()
        );

        Ok(created)
    }

    /// Pairs teams in roster order, starting no earlier than `today`.
    ///
    /// The end date is checked only after both legs of a pair are placed, so
    /// the last pair can run past it.
    pub fn fixtures(league: &League, teams: &[TeamId], today: NaiveDate) -> Result<Vec<NewGame>> {
        if teams.len() < 2 {
            return Err(LeagueError::InsufficientTeams { found: teams.len() });
        }

        let kick_off = NaiveTime::from_hms_opt(KICK_OFF_HOUR, 0, 0)
            .ok_or_else(|| LeagueError::InvalidInput(String::from("invalid kick-off time")))?;
        let interval = Duration::days(DAYS_BETWEEN_GAMES);

        let mut date = league.start_date.max(today);
        let mut fixtures = Vec::with_capacity(teams.len() * (teams.len() - 1));

        for (first, second) in teams.iter().copied().tuple_combinations::<(_, _)>() {
            fixtures.push(NewGame::scheduled(league.id, first, second, date, kick_off));
            date += interval;

            fixtures.push(NewGame::scheduled(league.id, second, first, date, kick_off));
            date += interval;

            if date > league.end_date {
                break;
            }
        }

        Ok(fixtures)
    }
}
