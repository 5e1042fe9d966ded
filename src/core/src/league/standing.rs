use crate::error::{LeagueError, Result};
use crate::game::{Contribution, Outcome};
use crate::league::LeagueId;
use crate::team::TeamId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const POINTS_FOR_WIN: i64 = 3;
const POINTS_FOR_DRAW: i64 = 1;

/// Direction in which a game contribution is applied to a standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Apply,
    Reverse,
}

impl Sign {
    fn factor(self) -> i32 {
        match self {
            Sign::Apply => 1,
            Sign::Reverse => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub league_id: LeagueId,
    pub team_id: TeamId,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub points_for: i32,
    pub points_against: i32,
}

impl Standing {
    pub fn new(league_id: LeagueId, team_id: TeamId) -> Self {
        Standing {
            league_id,
            team_id,
            wins: 0,
            losses: 0,
            draws: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    pub fn games_played(&self) -> i64 {
        i64::from(self.wins) + i64::from(self.losses) + i64::from(self.draws)
    }

    pub fn points(&self) -> i64 {
        i64::from(self.wins) * POINTS_FOR_WIN + i64::from(self.draws) * POINTS_FOR_DRAW
    }

    pub fn point_differential(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }

    /// Adds or removes one game's contribution. Leaves the standing untouched on overflow.
    pub fn apply(&mut self, contribution: &Contribution, sign: Sign) -> Result<()> {
        let factor = sign.factor();

        let (mut wins, mut losses, mut draws) = (self.wins, self.losses, self.draws);
        match contribution.outcome {
            Outcome::Win => wins = shift(wins, factor)?,
            Outcome::Loss => losses = shift(losses, factor)?,
            Outcome::Draw => draws = shift(draws, factor)?,
        }

        let points_for = shift(self.points_for, factor * points(contribution.scored)?)?;
        let points_against = shift(self.points_against, factor * points(contribution.conceded)?)?;

        self.wins = wins;
        self.losses = losses;
        self.draws = draws;
        self.points_for = points_for;
        self.points_against = points_against;

        Ok(())
    }

    pub fn override_with(&mut self, update: &StandingUpdate) {
        if let Some(wins) = update.wins {
            self.wins = wins;
        }
        if let Some(losses) = update.losses {
            self.losses = losses;
        }
        if let Some(draws) = update.draws {
            self.draws = draws;
        }
        if let Some(points_for) = update.points_for {
            self.points_for = points_for;
        }
        if let Some(points_against) = update.points_against {
            self.points_against = points_against;
        }
    }

    /// Table order: points, then point differential, both descending.
    pub fn table_order(a: &Standing, b: &Standing) -> Ordering {
        b.points()
            .cmp(&a.points())
            .then_with(|| b.point_differential().cmp(&a.point_differential()))
    }
}

fn points(value: u32) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| LeagueError::InvalidInput(format!("score {} is out of range", value)))
}

fn shift(value: i32, delta: i32) -> Result<i32> {
    value.checked_add(delta).ok_or_else(|| {
        LeagueError::InvalidInput(format!("standing total {} cannot change by {}", value, delta))
    })
}

/// Manual correction of a standing; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingUpdate {
    pub team_id: TeamId,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub draws: Option<i32>,
    pub points_for: Option<i32>,
    pub points_against: Option<i32>,
}
