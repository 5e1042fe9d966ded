mod analytics;
mod common;
mod config;
mod error;
mod games;
mod leagues;
mod routes;
mod teams;

#[cfg(test)]
mod test_support;

pub use config::ServerSettings;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use league_core::EntityStore;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueServer {
    data: LeagueAppData,
    settings: ServerSettings,
}

impl LeagueServer {
    pub fn new(data: LeagueAppData, settings: ServerSettings) -> Self {
        LeagueServer { data, settings }
    }

    pub async fn run(self) -> std::io::Result<()> {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    })),
            )
            .with_state(self.data);

        let addr = self.settings.address();

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://{}", addr);

        axum::serve(listener, app).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

/// Store shared by every handler; the write guard is the unit of atomicity.
pub type SharedStore = Arc<RwLock<Box<dyn EntityStore>>>;

pub struct LeagueAppData {
    pub store: SharedStore,
}

impl LeagueAppData {
    pub fn new<S: EntityStore + 'static>(store: S) -> Self {
        let store: Box<dyn EntityStore> = Box::new(store);

        LeagueAppData {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Clone for LeagueAppData {
    fn clone(&self) -> Self {
        LeagueAppData {
            store: Arc::clone(&self.store),
        }
    }
}
