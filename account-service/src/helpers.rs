use account_adapters::config::AccountServiceSettings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool.
///
/// Loads the database URL from configuration, creates the pool and runs all
/// pending migrations.
///
/// # Panics
/// Panics if the pool cannot be created or migrations fail.
pub async fn configure_postgresql() -> PgPool {
    let settings = AccountServiceSettings::load();

    let pg_pool = get_postgres_pool(settings.postgres.url.expose_secret())
        .await
        .expect("Failed to create Postgres connection pool");

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
