use crate::DatabaseResult;
use chrono::NaiveDate;
use league_core::LeagueStatus;
use serde::Deserialize;

const STATIC_LEAGUES_JSON: &str = include_str!("../../data/leagues.json");

#[derive(Debug, Deserialize)]
pub struct LeagueEntity {
    pub id: u32,
    pub name: String,
    pub sport: String,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: LeagueStatus,
    /// Seed ids of the rostered teams, in roster order.
    #[serde(default)]
    pub teams: Vec<u32>,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load() -> DatabaseResult<Vec<LeagueEntity>> {
        Self::parse(STATIC_LEAGUES_JSON)
    }

    pub fn parse(json: &str) -> DatabaseResult<Vec<LeagueEntity>> {
        Ok(serde_json::from_str(json)?)
    }
}
