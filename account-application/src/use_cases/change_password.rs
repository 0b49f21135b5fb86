use account_core::{Email, Password, PatientStore, PatientStoreError};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::credentials;

/// Error types for the change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Patient store error: {0}")]
    PatientStoreError(#[from] PatientStoreError),
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error("New password does not meet the strength policy")]
    WeakPassword,
    #[error("Failed to hash password: {0}")]
    HashingError(String),
}

/// Change password use case.
///
/// Checks run in order: account exists, current password verifies, new
/// password meets the strength policy. Each failure short-circuits before
/// the single persisting statement, so no partial mutation can occur.
pub struct ChangePasswordUseCase<S>
where
    S: PatientStore,
{
    patient_store: Arc<RwLock<S>>,
}

impl<S> ChangePasswordUseCase<S>
where
    S: PatientStore,
{
    pub fn new(patient_store: Arc<RwLock<S>>) -> Self {
        Self { patient_store }
    }

    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        current_password: Password,
        new_password: Password,
    ) -> Result<(), ChangePasswordError> {
        let patient = self.patient_store.read().await.find_by_email(&email).await?;

        credentials::verify_password_hash(patient.password_hash().clone(), current_password)
            .await
            .map_err(|_| ChangePasswordError::IncorrectPassword)?;

        if !credentials::meets_strength_policy(&new_password) {
            return Err(ChangePasswordError::WeakPassword);
        }

        let password_hash = credentials::compute_password_hash(new_password)
            .await
            .map_err(ChangePasswordError::HashingError)?;

        self.patient_store
            .write()
            .await
            .set_password_hash(&email, password_hash)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{compute_password_hash, verify_password_hash};
    use crate::use_cases::test_support::{MockPatientStore, email, password};
    use secrecy::{ExposeSecret, Secret};

    async fn store_with_patient() -> Arc<RwLock<MockPatientStore>> {
        let hash = compute_password_hash(password("Current1!")).await.unwrap();
        let mut store = MockPatientStore::default();
        store.seed(email("patient@example.com"), "Kim Minji", hash);
        Arc::new(RwLock::new(store))
    }

    async fn stored_hash(store: &Arc<RwLock<MockPatientStore>>) -> Secret<String> {
        store
            .read()
            .await
            .patient(&email("patient@example.com"))
            .unwrap()
            .password_hash()
            .clone()
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let use_case = ChangePasswordUseCase::new(store_with_patient().await);

        let result = use_case
            .execute(
                email("stranger@example.com"),
                password("Current1!"),
                password("NewSecret1!"),
            )
            .await;

        assert!(matches!(
            result,
            Err(ChangePasswordError::PatientStoreError(
                PatientStoreError::PatientNotFound
            ))
        ));
    }

    #[tokio::test]
    async fn wrong_current_password_leaves_hash_unchanged() {
        let store = store_with_patient().await;
        let before = stored_hash(&store).await;

        let use_case = ChangePasswordUseCase::new(store.clone());
        let result = use_case
            .execute(
                email("patient@example.com"),
                password("NotCurrent1!"),
                password("NewSecret1!"),
            )
            .await;

        assert!(matches!(result, Err(ChangePasswordError::IncorrectPassword)));
        let after = stored_hash(&store).await;
        assert_eq!(before.expose_secret(), after.expose_secret());
    }

    #[tokio::test]
    async fn weak_new_password_leaves_hash_unchanged() {
        let store = store_with_patient().await;
        let before = stored_hash(&store).await;

        let use_case = ChangePasswordUseCase::new(store.clone());
        let result = use_case
            .execute(
                email("patient@example.com"),
                password("Current1!"),
                password("weakpassword"),
            )
            .await;

        assert!(matches!(result, Err(ChangePasswordError::WeakPassword)));
        let after = stored_hash(&store).await;
        assert_eq!(before.expose_secret(), after.expose_secret());
    }

    #[tokio::test]
    async fn strong_new_password_replaces_the_hash() {
        let store = store_with_patient().await;

        let use_case = ChangePasswordUseCase::new(store.clone());
        use_case
            .execute(
                email("patient@example.com"),
                password("Current1!"),
                password("NewSecret1!"),
            )
            .await
            .unwrap();

        let hash = stored_hash(&store).await;
        assert!(verify_password_hash(hash.clone(), password("Current1!"))
            .await
            .is_err());
        assert!(verify_password_hash(hash, password("NewSecret1!"))
            .await
            .is_ok());
    }
}
