use anyhow::Result;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use tracing::log::LevelFilter;

/// Configure SQLite PRAGMAs for WAL mode
///
/// - WAL mode lets the feed read while fixtures are imported
/// - busy_timeout reduces SQLITE_BUSY errors
/// - synchronous=NORMAL is safe with WAL
/// - foreign_keys must be explicitly enabled
async fn configure_pragmas(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA cache_size = -20000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA foreign_keys = true")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA temp_store = memory")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create a connection pool with the PRAGMAs applied, creating the database
/// file when it is missing.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Apply every pending schema migration.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    forkcast_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

/// Create the database if needed and bring its schema up to date.
pub async fn migrate(database_url: &str) -> Result<()> {
    if !sqlx::Sqlite::database_exists(database_url).await? {
        tracing::info!("Database does not exist, creating: {}", database_url);
        sqlx::Sqlite::create_database(database_url).await?;
    }

    let pool = create_pool(database_url, 1).await?;
    run_migrations(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations.
pub async fn reset(database_url: &str) -> Result<()> {
    if sqlx::Sqlite::database_exists(database_url).await? {
        tracing::warn!("Dropping existing database: {}", database_url);
        sqlx::Sqlite::drop_database(database_url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(database_url).await
}
