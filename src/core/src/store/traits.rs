//! Repository contract between the league components and persistence.

use crate::analytics::{AnalyticsWindow, PerformanceSummary, TeamAnalytics};
use crate::game::{Game, GameId, NewGame, Score};
use crate::league::{League, LeagueId, NewLeague, Standing};
use crate::store::StoreResult;
use crate::team::{NewTeam, Team, TeamId};

/// What each team's standing currently reflects for one game.
///
/// `None` on a side means the game contributes nothing to that team's row,
/// which is different from having no entry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub game_id: GameId,
    pub home: Option<Score>,
    pub away: Option<Score>,
}

impl LedgerEntry {
    /// Both standings reflect `counted`.
    pub fn settled(game_id: GameId, counted: Option<Score>) -> Self {
        LedgerEntry {
            game_id,
            home: counted,
            away: counted,
        }
    }

    /// Forgets the contribution to `team_id`'s row once that row is gone.
    pub fn release(&mut self, game: &Game, team_id: TeamId) {
        if game.home_team_id == team_id {
            self.home = None;
        }
        if game.away_team_id == team_id {
            self.away = None;
        }
    }
}

/// Typed access to teams, leagues, games, standings and analytics.
///
/// Mutations take `&mut self`; callers sharing a store wrap it in a lock and
/// hold the write guard for the whole read-modify-write.
pub trait EntityStore: Send + Sync {
    // Teams

    fn insert_team(&mut self, team: NewTeam) -> StoreResult<Team>;

    fn team(&self, id: TeamId) -> StoreResult<Option<Team>>;

    fn teams(&self) -> StoreResult<Vec<Team>>;

    // Leagues

    fn insert_league(&mut self, league: NewLeague) -> StoreResult<League>;

    fn league(&self, id: LeagueId) -> StoreResult<Option<League>>;

    fn leagues(&self) -> StoreResult<Vec<League>>;

    /// Every team on the roster must exist.
    fn save_league(&mut self, league: &League) -> StoreResult<()>;

    // Games

    /// The league and both teams must exist.
    fn insert_game(&mut self, game: NewGame) -> StoreResult<Game>;

    /// Inserts all games or none of them.
    fn insert_games(&mut self, games: Vec<NewGame>) -> StoreResult<Vec<Game>>;

    fn game(&self, id: GameId) -> StoreResult<Option<Game>>;

    /// Games ordered by id, optionally limited to one league.
    fn games(&self, league_id: Option<LeagueId>) -> StoreResult<Vec<Game>>;

    fn save_game(&mut self, game: &Game) -> StoreResult<()>;

    // Standings

    fn standing(&self, league_id: LeagueId, team_id: TeamId) -> StoreResult<Option<Standing>>;

    /// Returns the stored standing, creating a zeroed one first if needed.
    fn standing_or_create(&mut self, league_id: LeagueId, team_id: TeamId) -> StoreResult<Standing>;

    fn standings(&self, league_id: LeagueId) -> StoreResult<Vec<Standing>>;

    fn save_standing(&mut self, standing: &Standing) -> StoreResult<()>;

    /// Returns `false` when there was nothing to delete.
    ///
    /// Ledger entries of the team's games in the league no longer count towards it.
    fn delete_standing(&mut self, league_id: LeagueId, team_id: TeamId) -> StoreResult<bool>;

    fn ledger_entry(&self, game_id: GameId) -> StoreResult<Option<LedgerEntry>>;

    /// Saves the game, every standing and the game's settled ledger entry
    /// together, or nothing.
    fn commit_result(&mut self, game: &Game, standings: &[Standing]) -> StoreResult<()>;

    // Analytics

    /// Creates or replaces the record keyed by `window`.
    fn upsert_analytics(
        &mut self,
        window: AnalyticsWindow,
        summary: PerformanceSummary,
    ) -> StoreResult<TeamAnalytics>;

    fn analytics(
        &self,
        team_id: Option<TeamId>,
        league_id: Option<LeagueId>,
    ) -> StoreResult<Vec<TeamAnalytics>>;
}
