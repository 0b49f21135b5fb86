use account_application::UpdateProfileUseCase;
use account_core::{Email, PatientStore};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{MessageResponse, error::AccountApiError};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Secret<String>,
    pub name: String,
}

#[tracing::instrument(name = "Update profile", skip_all)]
pub async fn update_profile<S>(
    State(patient_store): State<Arc<RwLock<S>>>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: PatientStore + 'static,
{
    let email = Email::try_from(request.email)?;

    let use_case = UpdateProfileUseCase::new(patient_store);
    use_case.execute(email, request.name).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("User updated successfully")),
    ))
}
