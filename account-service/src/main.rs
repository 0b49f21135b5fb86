use std::sync::Arc;

use account_adapters::{config::AccountServiceSettings, persistence::PostgresPatientStore};
use account_service::{AccountService, configure_postgresql, init_tracing};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let settings = AccountServiceSettings::load();

    let pg_pool = configure_postgresql().await;
    let patient_store = Arc::new(RwLock::new(PostgresPatientStore::new(pg_pool)));

    let listener = tokio::net::TcpListener::bind(settings.application.address.as_str()).await?;

    AccountService::new(patient_store).run(listener).await?;

    Ok(())
}
