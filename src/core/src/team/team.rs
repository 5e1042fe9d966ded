use serde::{Deserialize, Serialize};

pub type TeamId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub sport: String,
}

impl Team {
    pub fn new(id: TeamId, name: String, sport: String) -> Self {
        Team { id, name, sport }
    }
}

/// Fields supplied when registering a team; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub sport: String,
}

impl NewTeam {
    pub fn into_team(self, id: TeamId) -> Team {
        Team::new(id, self.name, self.sport)
    }
}
