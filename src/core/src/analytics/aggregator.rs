use crate::analytics::{AnalyticsWindow, PerformanceData, PerformanceSummary, Record, TeamAnalytics};
use crate::error::{Entity, LeagueError, Result};
use crate::game::Game;
use crate::league::LeagueId;
use crate::store::EntityStore;
use crate::team::TeamId;
use chrono::NaiveDate;
use log::debug;

pub struct AnalyticsAggregator;

impl AnalyticsAggregator {
    /// Rebuilds and stores the team's summary over `[start_date, end_date]`.
    ///
    /// Missing dates default to the league's own start and end.
    pub fn compute(
        store: &mut dyn EntityStore,
        team_id: TeamId,
        league_id: LeagueId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<TeamAnalytics> {
        store
            .team(team_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::Team, team_id))?;

        let league = store
            .league(league_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::League, league_id))?;

        let window = AnalyticsWindow {
            team_id,
            league_id,
            start_date: start_date.unwrap_or(league.start_date),
            end_date: end_date.unwrap_or(league.end_date),
        };

        if window.start_date > window.end_date {
            return Err(LeagueError::InvalidInput(format!(
                "start date {} is after end date {}",
                window.start_date, window.end_date
            )));
        }

        let games = store.games(Some(league_id))?;
        let summary = Self::summarize(&window, &games);

        debug!(
            "analytics for team {} in league {} ({} to {}): {} games",
            team_id, league_id, window.start_date, window.end_date, summary.games_played
        );

        Ok(store.upsert_analytics(window, summary)?)
    }

    /// Full recomputation over the completed games inside the window.
    pub fn summarize(window: &AnalyticsWindow, games: &[Game]) -> PerformanceSummary {
        let mut home = Record::default();
        let mut away = Record::default();
        let mut points_scored = 0;
        let mut points_allowed = 0;

        let counted = games
            .iter()
            .filter(|game| game.league_id == window.league_id && window.contains(game.date))
            .filter_map(|game| game.result().map(|score| (game, score)));

        for (game, score) in counted {
            let contribution = if game.home_team_id == window.team_id {
                let contribution = score.home_contribution();
                home.add(contribution.outcome);
                contribution
            } else if game.away_team_id == window.team_id {
                let contribution = score.away_contribution();
                away.add(contribution.outcome);
                contribution
            } else {
                continue;
            };

            points_scored += contribution.scored;
            points_allowed += contribution.conceded;
        }

        let games_played = home.games() + away.games();

        PerformanceSummary {
            games_played,
            wins: home.wins + away.wins,
            losses: home.losses + away.losses,
            draws: home.draws + away.draws,
            points_scored,
            points_allowed,
            performance_data: PerformanceData {
                avg_points_per_game: average(points_scored, games_played),
                avg_points_allowed_per_game: average(points_allowed, games_played),
                home_record: home.to_string(),
                away_record: away.to_string(),
            },
        }
    }
}

fn average(total: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }

    total as f64 / games as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, NewGame, Score};
    use crate::league::NewLeague;
    use crate::store::InMemoryStore;
    use crate::team::NewTeam;
    use chrono::NaiveTime;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate) -> AnalyticsWindow {
        AnalyticsWindow {
            team_id: 1,
            league_id: 1,
            start_date: start,
            end_date: end,
        }
    }

    fn played(id: u32, home: u32, away: u32, on: NaiveDate, score: Option<Score>) -> Game {
        let mut game = NewGame::scheduled(1, home, away, on, NaiveTime::from_hms_opt(18, 0, 0).unwrap())
            .into_game(id);
        if let Some(score) = score {
            game.complete_with(score);
        }
        game
    }

    #[test]
    fn test_empty_window_has_zero_averages() {
        let summary = AnalyticsAggregator::summarize(&window(date(1, 1), date(12, 31)), &[]);

        assert_eq!(summary.games_played, 0);
        assert_eq!(summary.performance_data.avg_points_per_game, 0.0);
        assert_eq!(summary.performance_data.avg_points_allowed_per_game, 0.0);
    }

    #[test]
    fn test_summary_splits_home_and_away() {
        let games = vec![
            played(1, 1, 2, date(3, 1), Some(Score::new(3, 1))),
            played(2, 2, 1, date(3, 4), Some(Score::new(2, 2))),
            played(3, 3, 1, date(3, 7), Some(Score::new(4, 0))),
            played(4, 1, 3, date(3, 10), Some(Score::new(1, 2))),
        ];

        let summary = AnalyticsAggregator::summarize(&window(date(3, 1), date(3, 31)), &games);

        assert_eq!(summary.games_played, 4);
        assert_eq!((summary.wins, summary.losses, summary.draws), (1, 2, 1));
        assert_eq!(summary.points_scored, 3 + 2 + 1);
        assert_eq!(summary.points_allowed, 1 + 2 + 4 + 2);
        assert_eq!(summary.performance_data.home_record, "1-1-0");
        assert_eq!(summary.performance_data.away_record, "0-1-1");
        assert_eq!(summary.performance_data.avg_points_per_game, 1.5);
        assert_eq!(summary.performance_data.avg_points_allowed_per_game, 2.25);
    }

    #[test]
    fn test_summary_ignores_uncounted_and_out_of_window_games() {
        let mut in_progress = played(2, 1, 2, date(3, 5), None);
        in_progress.status = GameStatus::InProgress;
        in_progress.home_score = Some(5);
        in_progress.away_score = Some(0);

        let games = vec![
            played(1, 1, 2, date(2, 28), Some(Score::new(1, 0))),
            in_progress,
            played(3, 1, 2, date(3, 31), Some(Score::new(0, 1))),
            played(4, 2, 3, date(3, 10), Some(Score::new(2, 0))),
        ];

        let summary = AnalyticsAggregator::summarize(&window(date(3, 1), date(3, 31)), &games);

        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.performance_data.away_record, "0-0-0");
    }

    #[test]
    fn test_compute_defaults_to_league_dates_and_upserts() {
        let mut store = InMemoryStore::new();
        let team = store
            .insert_team(NewTeam {
                name: String::from("Harriers"),
                sport: String::from("football"),
            })
            .unwrap();
        let rival = store
            .insert_team(NewTeam {
                name: String::from("Athletic"),
                sport: String::from("football"),
            })
            .unwrap();
        let league = store
            .insert_league(NewLeague {
                name: String::from("County"),
                sport: String::from("football"),
                season: String::from("2024"),
                start_date: date(3, 1),
                end_date: date(6, 30),
                status: Default::default(),
            })
            .unwrap();

        let mut game = store
            .insert_game(NewGame::scheduled(
                league.id,
                team.id,
                rival.id,
                date(4, 2),
                NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            ))
            .unwrap();

        let first = AnalyticsAggregator::compute(&mut store, team.id, league.id, None, None).unwrap();
        assert_eq!(first.window.start_date, date(3, 1));
        assert_eq!(first.window.end_date, date(6, 30));
        assert_eq!(first.summary.games_played, 0);

        game.complete_with(Score::new(2, 0));
        store.save_game(&game).unwrap();

        let second = AnalyticsAggregator::compute(&mut store, team.id, league.id, None, None).unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.summary.wins, 1);
        assert_eq!(store.analytics(Some(team.id), Some(league.id)).unwrap().len(), 1);
    }

    #[test]
    fn test_compute_reports_missing_entities_and_bad_window() {
        let mut store = InMemoryStore::new();

        let missing = AnalyticsAggregator::compute(&mut store, 5, 1, None, None);
        assert!(matches!(
            missing,
            Err(LeagueError::NotFound { entity: Entity::Team, id: 5 })
        ));

        let team = store
            .insert_team(NewTeam {
                name: String::from("Harriers"),
                sport: String::from("football"),
            })
            .unwrap();
        let league = store
            .insert_league(NewLeague {
                name: String::from("County"),
                sport: String::from("football"),
                season: String::from("2024"),
                start_date: date(3, 1),
                end_date: date(6, 30),
                status: Default::default(),
            })
            .unwrap();

        let inverted = AnalyticsAggregator::compute(
            &mut store,
            team.id,
            league.id,
            Some(date(5, 1)),
            Some(date(4, 1)),
        );
        assert!(matches!(inverted, Err(LeagueError::InvalidInput(_))));
    }
}
