use account_application::GetAccountUseCase;
use account_core::{Email, Patient, PatientStore};
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::AccountApiError;

#[derive(Debug, Deserialize)]
pub struct AccountQuery {
    pub email: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub email: String,
    pub name: String,
}

/// The password hash stays out of this response by construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountListResponse {
    pub users: Vec<AccountResponse>,
}

impl From<&Patient> for AccountResponse {
    fn from(patient: &Patient) -> Self {
        Self {
            email: patient.email().as_ref().expose_secret().clone(),
            name: patient.name().to_string(),
        }
    }
}

#[tracing::instrument(name = "Get account", skip_all)]
pub async fn get_account<S>(
    State(patient_store): State<Arc<RwLock<S>>>,
    Query(query): Query<AccountQuery>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: PatientStore + 'static,
{
    let email = query.email.map(Email::try_from).transpose()?;

    let use_case = GetAccountUseCase::new(patient_store);
    let patients = use_case.execute(email).await?;

    Ok(Json(AccountListResponse {
        users: patients.iter().map(AccountResponse::from).collect(),
    }))
}
