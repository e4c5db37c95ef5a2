//! Application state shared across handlers.

use db::DBService;
use sqlx::SqlitePool;

/// Process-wide state. The database service is constructed once at startup
/// and injected here; its lifecycle is owned by the binary, not ambient
/// global state.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
