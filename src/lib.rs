//! Recipe Catalog
//!
//! REST backend for browsing and managing recipes grouped by category, plus
//! the typed data client and headless view state used by the frontend.

pub mod client;
pub mod codec;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod views;

pub use client::{ClientError, RecipeClient, RecipeSource};
pub use config::Config;
pub use db::{create_pool, run_migrations, Db};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database pool and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}
