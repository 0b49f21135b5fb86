use std::sync::Arc;

use account_adapters::http::routes::{
    change_password, delete_account, get_account, login, update_profile,
};
use account_core::PatientStore;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Account management service exposing the `/user` routes.
///
/// The store handle is constructed by the process bootstrap and passed in
/// here; nothing in the service reaches for ambient globals.
pub struct AccountService {
    router: Router,
}

impl AccountService {
    pub fn new<S>(patient_store: Arc<RwLock<S>>) -> Self
    where
        S: PatientStore + 'static,
    {
        let router = Router::new()
            .route("/user/login", post(login::<S>))
            .route("/user/account", get(get_account::<S>))
            .route("/user/update", put(update_profile::<S>))
            .route("/user/change-password", put(change_password::<S>))
            .route("/user/delete", delete(delete_account::<S>))
            .with_state(patient_store);

        Self { router }
    }

    /// Finish the router with CORS and request tracing.
    ///
    /// All origins, methods and headers are allowed; CORS is not a security
    /// boundary for this service.
    pub fn into_router(self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        self.router.layer(cors).layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        )
    }

    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
