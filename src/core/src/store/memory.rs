//! In-memory EntityStore used by the server and by tests.

use crate::analytics::{AnalyticsWindow, PerformanceSummary, TeamAnalytics};
use crate::game::{Game, GameId, NewGame};
use crate::league::{League, LeagueId, NewLeague, Standing};
use crate::store::{EntityStore, LedgerEntry, StoreError, StoreResult};
use crate::team::{NewTeam, Team, TeamId};
use chrono::Utc;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    teams: BTreeMap<TeamId, Team>,
    leagues: BTreeMap<LeagueId, League>,
    games: BTreeMap<GameId, Game>,
    standings: BTreeMap<(LeagueId, TeamId), Standing>,
    ledger: HashMap<GameId, LedgerEntry>,
    analytics: BTreeMap<u32, TeamAnalytics>,
    analytics_index: HashMap<AnalyticsWindow, u32>,
    sequences: Sequences,
}

#[derive(Debug, Default)]
struct Sequences {
    team: u32,
    league: u32,
    game: u32,
    analytics: u32,
}

fn next(sequence: &mut u32) -> u32 {
    *sequence += 1;
    *sequence
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_league(&self, id: LeagueId) -> StoreResult<()> {
        if self.leagues.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::UnknownLeague(id))
        }
    }

    fn ensure_team(&self, id: TeamId) -> StoreResult<()> {
        if self.teams.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::UnknownTeam(id))
        }
    }

    fn ensure_stored_game(&self, game: &Game) -> StoreResult<()> {
        if !self.games.contains_key(&game.id) {
            return Err(StoreError::UnknownGame(game.id));
        }

        self.ensure_league(game.league_id)?;
        self.ensure_team(game.home_team_id)?;
        self.ensure_team(game.away_team_id)
    }

    fn ensure_game_references(&self, game: &NewGame) -> StoreResult<()> {
        self.ensure_league(game.league_id)?;
        self.ensure_team(game.home_team_id)?;
        self.ensure_team(game.away_team_id)
    }
}

impl EntityStore for InMemoryStore {
    fn insert_team(&mut self, team: NewTeam) -> StoreResult<Team> {
        let team = team.into_team(next(&mut self.sequences.team));
        self.teams.insert(team.id, team.clone());
        Ok(team)
    }

    fn team(&self, id: TeamId) -> StoreResult<Option<Team>> {
        Ok(self.teams.get(&id).cloned())
    }

    fn teams(&self) -> StoreResult<Vec<Team>> {
        Ok(self.teams.values().cloned().collect())
    }

    fn insert_league(&mut self, league: NewLeague) -> StoreResult<League> {
        let league = league.into_league(next(&mut self.sequences.league));
        self.leagues.insert(league.id, league.clone());
        Ok(league)
    }

    fn league(&self, id: LeagueId) -> StoreResult<Option<League>> {
        Ok(self.leagues.get(&id).cloned())
    }

    fn leagues(&self) -> StoreResult<Vec<League>> {
        Ok(self.leagues.values().cloned().collect())
    }

    fn save_league(&mut self, league: &League) -> StoreResult<()> {
        self.ensure_league(league.id)?;
        for team_id in &league.teams {
            self.ensure_team(*team_id)?;
        }

        self.leagues.insert(league.id, league.clone());
        Ok(())
    }

    fn insert_game(&mut self, game: NewGame) -> StoreResult<Game> {
        self.ensure_game_references(&game)?;

        let game = game.into_game(next(&mut self.sequences.game));
        self.games.insert(game.id, game.clone());
        Ok(game)
    }

    fn insert_games(&mut self, games: Vec<NewGame>) -> StoreResult<Vec<Game>> {
        for game in &games {
            self.ensure_game_references(game)?;
        }

        let created: Vec<Game> = games
            .into_iter()
            .map(|game| game.into_game(next(&mut self.sequences.game)))
            .collect();

        for game in &created {
            self.games.insert(game.id, game.clone());
        }

        Ok(created)
    }

    fn game(&self, id: GameId) -> StoreResult<Option<Game>> {
        Ok(self.games.get(&id).cloned())
    }

    fn games(&self, league_id: Option<LeagueId>) -> StoreResult<Vec<Game>> {
        Ok(self
            .games
            .values()
            .filter(|game| league_id.is_none_or(|id| game.league_id == id))
            .cloned()
            .collect())
    }

    fn save_game(&mut self, game: &Game) -> StoreResult<()> {
        self.ensure_stored_game(game)?;

        self.games.insert(game.id, game.clone());
        Ok(())
    }

    fn standing(&self, league_id: LeagueId, team_id: TeamId) -> StoreResult<Option<Standing>> {
        Ok(self.standings.get(&(league_id, team_id)).cloned())
    }

    fn standing_or_create(&mut self, league_id: LeagueId, team_id: TeamId) -> StoreResult<Standing> {
        self.ensure_league(league_id)?;
        self.ensure_team(team_id)?;

        let standing = self
            .standings
            .entry((league_id, team_id))
            .or_insert_with(|| Standing::new(league_id, team_id));

        Ok(standing.clone())
    }

    fn standings(&self, league_id: LeagueId) -> StoreResult<Vec<Standing>> {
        Ok(self
            .standings
            .values()
            .filter(|standing| standing.league_id == league_id)
            .cloned()
            .collect())
    }

    fn save_standing(&mut self, standing: &Standing) -> StoreResult<()> {
        let key = (standing.league_id, standing.team_id);
        if !self.standings.contains_key(&key) {
            return Err(StoreError::UnknownStanding {
                league_id: standing.league_id,
                team_id: standing.team_id,
            });
        }

        self.standings.insert(key, standing.clone());
        Ok(())
    }

    fn delete_standing(&mut self, league_id: LeagueId, team_id: TeamId) -> StoreResult<bool> {
        if self.standings.remove(&(league_id, team_id)).is_none() {
            return Ok(false);
        }

        let games = self
            .games
            .values()
            .filter(|game| game.league_id == league_id && game.involves(team_id));
        for game in games {
            if let Some(entry) = self.ledger.get_mut(&game.id) {
                entry.release(game, team_id);
            }
        }

        Ok(true)
    }

    fn ledger_entry(&self, game_id: GameId) -> StoreResult<Option<LedgerEntry>> {
        Ok(self.ledger.get(&game_id).copied())
    }

    fn commit_result(&mut self, game: &Game, standings: &[Standing]) -> StoreResult<()> {
        self.ensure_stored_game(game)?;

        let mut seen = HashSet::with_capacity(standings.len());
        for standing in standings {
            self.ensure_league(standing.league_id)?;
            self.ensure_team(standing.team_id)?;

            if !seen.insert((standing.league_id, standing.team_id)) {
                return Err(StoreError::DuplicateStanding {
                    league_id: standing.league_id,
                    team_id: standing.team_id,
                });
            }
        }

        for standing in standings {
            self.standings
                .insert((standing.league_id, standing.team_id), standing.clone());
        }
        self.games.insert(game.id, game.clone());
        self.ledger
            .insert(game.id, LedgerEntry::settled(game.id, game.result()));

        Ok(())
    }

    fn upsert_analytics(
        &mut self,
        window: AnalyticsWindow,
        summary: PerformanceSummary,
    ) -> StoreResult<TeamAnalytics> {
        self.ensure_league(window.league_id)?;
        self.ensure_team(window.team_id)?;

        let id = match self.analytics_index.get(&window) {
            Some(id) => *id,
            None => {
                let id = next(&mut self.sequences.analytics);
                self.analytics_index.insert(window, id);
                id
            }
        };

        let record = TeamAnalytics {
            id,
            window,
            summary,
            updated_at: Utc::now().naive_utc(),
        };

        self.analytics.insert(id, record.clone());
        Ok(record)
    }

    fn analytics(
        &self,
        team_id: Option<TeamId>,
        league_id: Option<LeagueId>,
    ) -> StoreResult<Vec<TeamAnalytics>> {
        Ok(self
            .analytics
            .values()
            .filter(|record| team_id.is_none_or(|id| record.window.team_id == id))
            .filter(|record| league_id.is_none_or(|id| record.window.league_id == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Score;
    use chrono::{NaiveDate, NaiveTime};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    fn seeded() -> (InMemoryStore, League, Team, Team) {
        let mut store = InMemoryStore::new();

        let home = store
            .insert_team(NewTeam {
                name: String::from("Rovers"),
                sport: String::from("football"),
            })
            .unwrap();
        let away = store
            .insert_team(NewTeam {
                name: String::from("United"),
                sport: String::from("football"),
            })
            .unwrap();
        let league = store
            .insert_league(NewLeague {
                name: String::from("Spring Cup"),
                sport: String::from("football"),
                season: String::from("2024"),
                start_date: date(1),
                end_date: date(30),
                status: Default::default(),
            })
            .unwrap();

        (store, league, home, away)
    }

    fn new_game(league: &League, home: &Team, away: &Team) -> NewGame {
        NewGame::scheduled(
            league.id,
            home.id,
            away.id,
            date(2),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_ids_are_assigned_sequentially() {
        let (store, league, home, away) = seeded();

        assert_eq!((home.id, away.id), (1, 2));
        assert_eq!(league.id, 1);
        assert_eq!(store.teams().unwrap().len(), 2);
    }

    #[test]
    fn test_standing_or_create_is_get_or_create() {
        let (mut store, league, home, _) = seeded();

        let mut standing = store.standing_or_create(league.id, home.id).unwrap();
        standing.wins = 2;
        store.save_standing(&standing).unwrap();

        let again = store.standing_or_create(league.id, home.id).unwrap();
        assert_eq!(again.wins, 2);
        assert_eq!(store.standings(league.id).unwrap().len(), 1);
    }

    #[test]
    fn test_standing_requires_existing_league_and_team() {
        let (mut store, league, _, _) = seeded();

        assert!(matches!(
            store.standing_or_create(99, 1),
            Err(StoreError::UnknownLeague(99))
        ));
        assert!(matches!(
            store.standing_or_create(league.id, 99),
            Err(StoreError::UnknownTeam(99))
        ));
    }

    #[test]
    fn test_insert_game_checks_references() {
        let (mut store, league, home, _) = seeded();

        let mut game = new_game(&league, &home, &home);
        game.away_team_id = 42;

        assert!(matches!(store.insert_game(game), Err(StoreError::UnknownTeam(42))));
        assert!(store.games(None).unwrap().is_empty());
    }

    #[test]
    fn test_insert_games_is_all_or_nothing() {
        let (mut store, league, home, away) = seeded();

        let mut broken = new_game(&league, &away, &home);
        broken.league_id = 7;

        let result = store.insert_games(vec![new_game(&league, &home, &away), broken]);

        assert!(matches!(result, Err(StoreError::UnknownLeague(7))));
        assert!(store.games(Some(league.id)).unwrap().is_empty());
    }

    #[test]
    fn test_commit_result_writes_nothing_on_failure() {
        let (mut store, league, home, away) = seeded();
        let mut game = store.insert_game(new_game(&league, &home, &away)).unwrap();
        game.complete_with(Score::new(1, 0));

        let mut good = Standing::new(league.id, home.id);
        good.wins = 1;
        let bad = Standing::new(league.id, 77);

        assert!(store.commit_result(&game, &[good.clone(), bad]).is_err());
        assert_eq!(store.standing(league.id, home.id).unwrap(), None);
        assert_eq!(store.ledger_entry(game.id).unwrap(), None);
        assert_eq!(store.game(game.id).unwrap().unwrap().result(), None);

        store.commit_result(&game, &[good]).unwrap();
        assert_eq!(store.standing(league.id, home.id).unwrap().unwrap().wins, 1);
        assert_eq!(
            store.ledger_entry(game.id).unwrap(),
            Some(LedgerEntry::settled(game.id, Some(Score::new(1, 0))))
        );
        assert_eq!(store.game(game.id).unwrap().unwrap(), game);
    }

    #[test]
    fn test_commit_result_rejects_duplicate_rows() {
        let (mut store, league, home, away) = seeded();
        let game = store.insert_game(new_game(&league, &home, &away)).unwrap();

        let standing = Standing::new(league.id, home.id);

        assert!(matches!(
            store.commit_result(&game, &[standing.clone(), standing]),
            Err(StoreError::DuplicateStanding { .. })
        ));
    }

    #[test]
    fn test_deleting_a_standing_releases_its_ledger_side() {
        let (mut store, league, home, away) = seeded();
        let mut game = store.insert_game(new_game(&league, &home, &away)).unwrap();
        game.complete_with(Score::new(2, 1));

        let home_row = store.standing_or_create(league.id, home.id).unwrap();
        let away_row = store.standing_or_create(league.id, away.id).unwrap();
        store.commit_result(&game, &[home_row, away_row]).unwrap();

        assert!(store.delete_standing(league.id, home.id).unwrap());
        assert!(!store.delete_standing(league.id, home.id).unwrap());

        let entry = store.ledger_entry(game.id).unwrap().unwrap();
        assert_eq!(entry.home, None);
        assert_eq!(entry.away, Some(Score::new(2, 1)));
    }

    #[test]
    fn test_games_filter_by_league() {
        let (mut store, league, home, away) = seeded();
        store.insert_game(new_game(&league, &home, &away)).unwrap();

        assert_eq!(store.games(Some(league.id)).unwrap().len(), 1);
        assert!(store.games(Some(league.id + 1)).unwrap().is_empty());
    }

    #[test]
    fn test_upsert_analytics_keeps_id_per_window() {
        let (mut store, league, home, _) = seeded();

        let window = AnalyticsWindow {
            team_id: home.id,
            league_id: league.id,
            start_date: date(1),
            end_date: date(30),
        };

        let first = store
            .upsert_analytics(window, PerformanceSummary::default())
            .unwrap();
        let second = store
            .upsert_analytics(window, PerformanceSummary::default())
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.analytics(Some(home.id), None).unwrap().len(), 1);
        assert!(store.analytics(None, Some(league.id + 1)).unwrap().is_empty());
    }
}
