use account_application::LoginUseCase;
use account_core::{Email, Password, PatientStore};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{MessageResponse, error::AccountApiError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S>(
    State(patient_store): State<Arc<RwLock<S>>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: PatientStore + 'static,
{
    // Every failed login shares one reply, including unparseable input;
    // nothing in the response reveals whether an account exists.
    let email =
        Email::try_from(request.email).map_err(|_| AccountApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| AccountApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(patient_store);
    use_case.execute(email, password).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Login successful")),
    ))
}
