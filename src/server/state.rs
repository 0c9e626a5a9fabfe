//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - the database connection pool
//! - the loaded configuration
//! - the YouTube Data API client
//! - the recovery code sender

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::email::LogCodeSender, youtube::client::YoutubeClient};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` is a reference-counted pointer
/// - `YoutubeClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `LogCodeSender` is a unit struct
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// YouTube Data API client used for channel registration and verification.
    ///
    /// The scheduler holds its own clone for the crawl job.
    pub youtube: YoutubeClient,

    /// Delivers email recovery codes.
    pub code_sender: LogCodeSender,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Loaded configuration
    /// - `youtube` - YouTube Data API client
    /// - `code_sender` - Email code delivery
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        youtube: YoutubeClient,
        code_sender: LogCodeSender,
    ) -> Self {
        Self {
            db,
            config,
            youtube,
            code_sender,
        }
    }
}
