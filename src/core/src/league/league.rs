use crate::team::TeamId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type LeagueId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeagueStatus {
    #[default]
    Registration,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub sport: String,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeagueStatus,
    /// Roster in the order teams joined.
    pub teams: Vec<TeamId>,
}

impl League {
    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.teams.contains(&team_id)
    }

    /// Returns `false` when the team was already on the roster.
    pub fn add_team(&mut self, team_id: TeamId) -> bool {
        if self.has_team(team_id) {
            return false;
        }

        self.teams.push(team_id);
        true
    }

    /// Returns `false` when the team was not on the roster.
    pub fn remove_team(&mut self, team_id: TeamId) -> bool {
        let before = self.teams.len();
        self.teams.retain(|id| *id != team_id);
        self.teams.len() != before
    }

    pub fn teams_count(&self) -> usize {
        self.teams.len()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLeague {
    pub name: String,
    pub sport: String,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: LeagueStatus,
}

impl NewLeague {
    pub fn into_league(self, id: LeagueId) -> League {
        League {
            id,
            name: self.name,
            sport: self.sport,
            season: self.season,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            teams: Vec::new(),
        }
    }
}
