use account_core::{Email, Patient, PatientStore, PatientStoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error types for the get account use case
#[derive(Debug, thiserror::Error)]
pub enum GetAccountError {
    #[error("Patient store error: {0}")]
    PatientStoreError(#[from] PatientStoreError),
}

/// Get account use case - looks up one account by email, or lists all of
/// them when no email is given. The listing has no pagination or guard;
/// that matches the existing surface and is deliberately left as-is.
pub struct GetAccountUseCase<S>
where
    S: PatientStore,
{
    patient_store: Arc<RwLock<S>>,
}

impl<S> GetAccountUseCase<S>
where
    S: PatientStore,
{
    pub fn new(patient_store: Arc<RwLock<S>>) -> Self {
        Self { patient_store }
    }

    #[tracing::instrument(name = "GetAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Option<Email>) -> Result<Vec<Patient>, GetAccountError> {
        let store = self.patient_store.read().await;

        match email {
            Some(email) => Ok(vec![store.find_by_email(&email).await?]),
            None => Ok(store.find_all().await?),
        }
    }
}
