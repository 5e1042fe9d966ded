use crate::error::{Entity, LeagueError, Result};
use crate::game::{Game, GameId, GameStatus, NewGame, PreviousResult, Score};
use crate::league::{Reconciliation, StandingsReconciler};
use crate::store::EntityStore;
use log::info;

/// Entry points that change a game and hand the change to the reconciler.
pub struct GameProcessor;

impl GameProcessor {
    pub fn create(store: &mut dyn EntityStore, game: NewGame) -> Result<Game> {
        if game.home_team_id == game.away_team_id {
            return Err(LeagueError::InvalidInput(String::from(
                "home and away teams must be different",
            )));
        }

        for points in [game.home_score, game.away_score].into_iter().flatten() {
            Self::check_points(points)?;
        }

        store
            .league(game.league_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::League, game.league_id))?;

        for team_id in [game.home_team_id, game.away_team_id] {
            store
                .team(team_id)?
                .ok_or_else(|| LeagueError::not_found(Entity::Team, team_id))?;
        }

        let game = store.insert_game(game)?;

        if game.result().is_some() {
            StandingsReconciler::reconcile(store, &game, None)?;
        }

        Ok(game)
    }

    /// Marks the game completed with `score`, correcting any earlier result.
    pub fn submit_score(
        store: &mut dyn EntityStore,
        game_id: GameId,
        score: Score,
    ) -> Result<(Game, Reconciliation)> {
        Self::check_points(score.home)?;
        Self::check_points(score.away)?;

        let mut game = Self::game(store, game_id)?;
        let previous = game.snapshot();

        game.complete_with(score);
        let reconciliation = Self::persist(store, &game, previous)?;

        info!("game {} result recorded as {}", game.id, score);

        Ok((game, reconciliation))
    }

    /// Moves the game to `status`; leaving `completed` takes its result out of the standings.
    pub fn change_status(
        store: &mut dyn EntityStore,
        game_id: GameId,
        status: GameStatus,
    ) -> Result<(Game, Reconciliation)> {
        let mut game = Self::game(store, game_id)?;
        let previous = game.snapshot();

        game.status = status;
        let reconciliation = Self::persist(store, &game, previous)?;

        info!("game {} status changed from {} to {}", game.id, previous.status, status);

        Ok((game, reconciliation))
    }

    /// Reconciles first so a rejected result leaves the stored game as it was.
    /// Moved standings are committed together with the game.
    fn persist(
        store: &mut dyn EntityStore,
        game: &Game,
        previous: PreviousResult,
    ) -> Result<Reconciliation> {
        let reconciliation = StandingsReconciler::reconcile(store, game, Some(previous))?;

        if reconciliation == Reconciliation::Unchanged {
            store.save_game(game)?;
        }

        Ok(reconciliation)
    }

    fn check_points(points: u32) -> Result<()> {
        if points > Score::MAX_POINTS {
            return Err(LeagueError::InvalidInput(format!(
                "score {} is above the maximum of {}",
                points,
                Score::MAX_POINTS
            )));
        }

        Ok(())
    }

    fn game(store: &dyn EntityStore, game_id: GameId) -> Result<Game> {
        store
            .game(game_id)?
            .ok_or_else(|| LeagueError::not_found(Entity::Game, game_id))
    }
}
