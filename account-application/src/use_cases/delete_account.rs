use account_core::{Email, PatientStore, PatientStoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error types for the delete account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Patient store error: {0}")]
    PatientStoreError(#[from] PatientStoreError),
}

/// Delete account use case - removes a patient account. Login records
/// belonging to the account cascade away with the row.
pub struct DeleteAccountUseCase<S>
where
    S: PatientStore,
{
    patient_store: Arc<RwLock<S>>,
}

impl<S> DeleteAccountUseCase<S>
where
    S: PatientStore,
{
    pub fn new(patient_store: Arc<RwLock<S>>) -> Self {
        Self { patient_store }
    }

    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), DeleteAccountError> {
        self.patient_store
            .write()
            .await
            .delete_patient(&email)
            .await?;

        Ok(())
    }
}
