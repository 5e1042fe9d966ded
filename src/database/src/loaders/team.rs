use crate::DatabaseResult;
use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../../data/teams.json");

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub sport: String,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> DatabaseResult<Vec<TeamEntity>> {
        Self::parse(STATIC_TEAMS_JSON)
    }

    pub fn parse(json: &str) -> DatabaseResult<Vec<TeamEntity>> {
        Ok(serde_json::from_str(json)?)
    }
}
