use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::fetch::ProfileFetcher;
use crate::llm_client::TextGenerator;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub llm: Arc<dyn TextGenerator>,
    pub fetcher: Arc<ProfileFetcher>,
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        llm: Arc<dyn TextGenerator>,
        fetcher: Arc<ProfileFetcher>,
        config: Config,
    ) -> Self {
        Self {
            db,
            llm,
            fetcher,
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}
