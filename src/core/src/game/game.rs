use crate::league::LeagueId;
use crate::team::TeamId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type GameId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Postponed,
    Cancelled,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
            GameStatus::Postponed => "postponed",
            GameStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Final score of a counted game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    /// Largest score a standing can absorb.
    pub const MAX_POINTS: u32 = i32::MAX as u32;

    pub fn new(home: u32, away: u32) -> Self {
        Score { home, away }
    }

    pub fn home_outcome(&self) -> Outcome {
        Outcome::classify(self.home, self.away)
    }

    pub fn away_outcome(&self) -> Outcome {
        Outcome::classify(self.away, self.home)
    }

    /// What this score adds to the home team's standing.
    pub fn home_contribution(&self) -> Contribution {
        Contribution {
            outcome: self.home_outcome(),
            scored: self.home,
            conceded: self.away,
        }
    }

    /// What this score adds to the away team's standing.
    pub fn away_contribution(&self) -> Contribution {
        Contribution {
            outcome: self.away_outcome(),
            scored: self.away,
            conceded: self.home,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn classify(scored: u32, conceded: u32) -> Self {
        if scored > conceded {
            Outcome::Win
        } else if scored < conceded {
            Outcome::Loss
        } else {
            Outcome::Draw
        }
    }
}

/// One team's share of a counted game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub outcome: Outcome,
    pub scored: u32,
    pub conceded: u32,
}

/// The state of a game before an update was applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousResult {
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: GameStatus,
}

impl PreviousResult {
    pub fn counted(&self) -> Option<Score> {
        counted_score(self.status, self.home_score, self.away_score)
    }
}

fn counted_score(status: GameStatus, home: Option<u32>, away: Option<u32>) -> Option<Score> {
    match (status, home, away) {
        (GameStatus::Completed, Some(home), Some(away)) => Some(Score::new(home, away)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub league_id: LeagueId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: GameStatus,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl Game {
    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    /// The score that counts towards standings, if any.
    pub fn result(&self) -> Option<Score> {
        counted_score(self.status, self.home_score, self.away_score)
    }

    pub fn winner(&self) -> Option<TeamId> {
        let score = self.result()?;

        match score.home_outcome() {
            Outcome::Win => Some(self.home_team_id),
            Outcome::Loss => Some(self.away_team_id),
            Outcome::Draw => None,
        }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn snapshot(&self) -> PreviousResult {
        PreviousResult {
            home_score: self.home_score,
            away_score: self.away_score,
            status: self.status,
        }
    }

    pub fn complete_with(&mut self, score: Score) {
        self.home_score = Some(score.home);
        self.away_score = Some(score.away);
        self.status = GameStatus::Completed;
    }
}

/// A game that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewGame {
    pub league_id: LeagueId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

impl NewGame {
    pub fn scheduled(
        league_id: LeagueId,
        home_team_id: TeamId,
        away_team_id: TeamId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        NewGame {
            league_id,
            home_team_id,
            away_team_id,
            date,
            time,
            status: GameStatus::Scheduled,
            home_score: None,
            away_score: None,
        }
    }

    pub fn into_game(self, id: GameId) -> Game {
        Game {
            id,
            league_id: self.league_id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            date: self.date,
            time: self.time,
            status: self.status,
            home_score: self.home_score,
            away_score: self.away_score,
        }
    }
}
