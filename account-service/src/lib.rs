pub mod helpers;
pub mod service;
pub mod telemetry;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use service::AccountService;
pub use telemetry::init_tracing;
