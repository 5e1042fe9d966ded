pub mod analytics;
pub mod error;
pub mod game;
pub mod league;
pub mod store;
pub mod team;

pub mod utils;

pub use analytics::{AnalyticsAggregator, AnalyticsWindow, PerformanceData, PerformanceSummary, TeamAnalytics};
pub use error::{Entity, LeagueError, Result};
pub use game::{Game, GameId, GameProcessor, GameStatus, NewGame, PreviousResult, Score};
pub use league::{
    League, LeagueId, LeagueStatus, LeagueTable, NewLeague, Reconciliation, ScheduleGenerator, Standing,
    StandingUpdate, StandingsReconciler,
};
pub use store::{EntityStore, InMemoryStore, LedgerEntry, StoreError, StoreResult};
pub use team::{NewTeam, Team, TeamId};
