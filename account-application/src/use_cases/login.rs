use account_core::{Email, Password, PatientStore, PatientStoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::credentials;

/// Error types for the login use case.
///
/// An unknown email and a wrong password both collapse into
/// `InvalidCredentials` here, so callers cannot accidentally leak which one
/// it was.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Patient store error: {0}")]
    PatientStoreError(PatientStoreError),
}

/// Login use case - verifies a patient's credentials
pub struct LoginUseCase<S>
where
    S: PatientStore,
{
    patient_store: Arc<RwLock<S>>,
}

impl<S> LoginUseCase<S>
where
    S: PatientStore,
{
    pub fn new(patient_store: Arc<RwLock<S>>) -> Self {
        Self { patient_store }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<(), LoginError> {
        let patient = match self.patient_store.read().await.find_by_email(&email).await {
            Ok(patient) => patient,
            Err(PatientStoreError::PatientNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(LoginError::PatientStoreError(e)),
        };

        credentials::verify_password_hash(patient.password_hash().clone(), password)
            .await
            .map_err(|_| LoginError::InvalidCredentials)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::compute_password_hash;
    use crate::use_cases::test_support::{MockPatientStore, email, password};

    async fn store_with_patient() -> Arc<RwLock<MockPatientStore>> {
        let hash = compute_password_hash(password("Correct1!")).await.unwrap();
        let mut store = MockPatientStore::default();
        store.seed(email("patient@example.com"), "Kim Minji", hash);
        Arc::new(RwLock::new(store))
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_credentials() {
        let use_case = LoginUseCase::new(store_with_patient().await);

        let result = use_case
            .execute(email("patient@example.com"), password("Correct1!"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_yields_invalid_credentials() {
        let use_case = LoginUseCase::new(store_with_patient().await);

        let result = use_case
            .execute(email("patient@example.com"), password("Wrong1!!"))
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_yields_the_same_error_as_wrong_password() {
        let use_case = LoginUseCase::new(store_with_patient().await);

        let result = use_case
            .execute(email("stranger@example.com"), password("Correct1!"))
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }
}
