pub mod pool;
pub mod query;
pub mod recipes;

pub use pool::create_pool;
pub use query::RecipeQuery;

use sqlx::SqlitePool;

/// Database handle shared across handlers
pub type Db = SqlitePool;

/// Apply the schema and seed categories
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(db).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
