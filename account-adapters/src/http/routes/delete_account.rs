use account_application::DeleteAccountUseCase;
use account_core::{Email, PatientStore};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{MessageResponse, error::AccountApiError};

#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Delete account", skip_all)]
pub async fn delete_account<S>(
    State(patient_store): State<Arc<RwLock<S>>>,
    Json(request): Json<DeleteAccountRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: PatientStore + 'static,
{
    let email = Email::try_from(request.email)?;

    let use_case = DeleteAccountUseCase::new(patient_store);
    use_case.execute(email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("User deleted successfully")),
    ))
}
