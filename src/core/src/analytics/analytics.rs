use crate::game::Outcome;
use crate::league::LeagueId;
use crate::team::TeamId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a stored analytics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalyticsWindow {
    pub team_id: TeamId,
    pub league_id: LeagueId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AnalyticsWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Win-loss-draw tally, displayed as `W-L-D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Record {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub avg_points_per_game: f64,
    pub avg_points_allowed_per_game: f64,
    pub home_record: String,
    pub away_record: String,
}

impl Default for PerformanceData {
    fn default() -> Self {
        PerformanceData {
            avg_points_per_game: 0.0,
            avg_points_allowed_per_game: 0.0,
            home_record: Record::default().to_string(),
            away_record: Record::default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_scored: u32,
    pub points_allowed: u32,
    pub performance_data: PerformanceData,
}

impl PerformanceSummary {
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }

        self.wins as f64 / self.games_played as f64
    }

    pub fn point_differential(&self) -> i64 {
        self.points_scored as i64 - self.points_allowed as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalytics {
    pub id: u32,
    #[serde(flatten)]
    pub window: AnalyticsWindow,
    #[serde(flatten)]
    pub summary: PerformanceSummary,
    pub updated_at: NaiveDateTime,
}
