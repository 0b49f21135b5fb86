use std::sync::LazyLock;

use secrecy::Secret;
use serde::Deserialize;

use super::constants::{env, prod};

static SETTINGS: LazyLock<AccountServiceSettings> = LazyLock::new(|| {
    dotenvy::dotenv().ok();

    config::Config::builder()
        .set_default("application.address", prod::APP_ADDRESS)
        .expect("Failed to set default application address")
        .set_default("postgres.url", prod::DATABASE_URL)
        .expect("Failed to set default database url")
        .add_source(
            config::Environment::with_prefix(env::SETTINGS_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .set_override_option(
            "postgres.url",
            std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
        )
        .expect("Failed to apply DATABASE_URL override")
        .build()
        .expect("Failed to build configuration")
        .try_deserialize()
        .expect("Failed to deserialize configuration")
});

#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceSettings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

impl AccountServiceSettings {
    /// Returns the process-wide settings, loading `.env` and the
    /// environment on first use.
    pub fn load() -> &'static AccountServiceSettings {
        &SETTINGS
    }
}
