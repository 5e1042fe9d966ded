use crate::error::{Entity, LeagueError, Result};
use crate::game::{Contribution, Game, PreviousResult, Score};
use crate::league::{Sign, Standing};
use crate::store::EntityStore;
use log::debug;

/// What a reconciliation did to the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Standings already reflected the game.
    Unchanged,
    Updated {
        /// Score taken back out of at least one of the two standings.
        reversed: Option<Score>,
        applied: Option<Score>,
    },
}

/// Keeps both teams' standings equal to the net effect of a game's result.
pub struct StandingsReconciler;

impl StandingsReconciler {
    /// Moves the standings from the game's prior counted state to its current one.
    ///
    /// The prior state comes from the store's ledger when the game has been
    /// reconciled before, otherwise from `previous`. When the standings move,
    /// the game is saved in the same commit.
    pub fn reconcile(
        store: &mut dyn EntityStore,
        game: &Game,
        previous: Option<PreviousResult>,
    ) -> Result<Reconciliation> {
        store
            .league(game.league_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::League, game.league_id))?;

        for team_id in [game.home_team_id, game.away_team_id] {
            store
                .team(team_id)?
                .ok_or_else(|| LeagueError::not_found(Entity::Team, team_id))?;
        }

        let (prior_home, prior_away) = match store.ledger_entry(game.id)? {
            Some(entry) => (entry.home, entry.away),
            None => {
                let counted = previous.and_then(|previous| previous.counted());
                (counted, counted)
            }
        };
        let current = game.result();

        if prior_home == current && prior_away == current {
            debug!("game {}: standings already reflect {:?}", game.id, current);
            return Ok(Reconciliation::Unchanged);
        }

        let mut home = store.standing_or_create(game.league_id, game.home_team_id)?;
        let mut away = store.standing_or_create(game.league_id, game.away_team_id)?;

        Self::shift(&mut home, prior_home, current, Score::home_contribution)?;
        Self::shift(&mut away, prior_away, current, Score::away_contribution)?;

        store.commit_result(game, &[home, away])?;

        let reversed = prior_home.or(prior_away);

        debug!(
            "game {}: standings moved from {} to {}",
            game.id,
            describe(reversed),
            describe(current)
        );

        Ok(Reconciliation::Updated {
            reversed,
            applied: current,
        })
    }

    fn shift(
        standing: &mut Standing,
        prior: Option<Score>,
        current: Option<Score>,
        contribution: fn(&Score) -> Contribution,
    ) -> Result<()> {
        if prior == current {
            return Ok(());
        }

        if let Some(score) = prior {
            standing.apply(&contribution(&score), Sign::Reverse)?;
        }

        if let Some(score) = current {
            standing.apply(&contribution(&score), Sign::Apply)?;
        }

        Ok(())
    }
}

fn describe(score: Option<Score>) -> String {
    score.map_or_else(|| String::from("nothing"), |score| score.to_string())
}
