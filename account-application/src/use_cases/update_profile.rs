use account_core::{Email, PatientStore, PatientStoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error types for the update profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Patient store error: {0}")]
    PatientStoreError(#[from] PatientStoreError),
}

/// Update profile use case - overwrites the display name of an account
pub struct UpdateProfileUseCase<S>
where
    S: PatientStore,
{
    patient_store: Arc<RwLock<S>>,
}

impl<S> UpdateProfileUseCase<S>
where
    S: PatientStore,
{
    pub fn new(patient_store: Arc<RwLock<S>>) -> Self {
        Self { patient_store }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, name))]
    pub async fn execute(&self, email: Email, name: String) -> Result<(), UpdateProfileError> {
        self.patient_store
            .write()
            .await
            .update_name(&email, &name)
            .await?;

        Ok(())
    }
}
