use account_application::ChangePasswordUseCase;
use account_core::{Email, Password, PatientStore};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{MessageResponse, error::AccountApiError};

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub email: Secret<String>,
    pub current_password: Secret<String>,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password<S>(
    State(patient_store): State<Arc<RwLock<S>>>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: PatientStore + 'static,
{
    let email = Email::try_from(request.email)?;
    let current_password = Password::try_from(request.current_password)?;
    let new_password = Password::try_from(request.new_password)?;

    let use_case = ChangePasswordUseCase::new(patient_store);
    use_case
        .execute(email, current_password, new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Password changed successfully")),
    ))
}
