use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    email::Email,
    patient::{NewPatient, Patient},
};

// PatientStore port trait and errors
#[derive(Debug, Error)]
pub enum PatientStoreError {
    #[error("Account already exists")]
    EmailAlreadyExists,
    #[error("Account not found")]
    PatientNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for PatientStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailAlreadyExists, Self::EmailAlreadyExists) => true,
            (Self::PatientNotFound, Self::PatientNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Durable table of patient accounts, keyed by unique email.
///
/// Point lookups and full-table scans only. Concurrent mutations against the
/// same email resolve at the store's native row-level consistency; no extra
/// locking is layered on top.
#[async_trait]
pub trait PatientStore: Send + Sync {
    async fn insert_patient(&mut self, patient: NewPatient) -> Result<(), PatientStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Patient, PatientStoreError>;
    async fn find_all(&self) -> Result<Vec<Patient>, PatientStoreError>;
    async fn update_name(&mut self, email: &Email, name: &str) -> Result<(), PatientStoreError>;
    async fn set_password_hash(
        &mut self,
        email: &Email,
        password_hash: Secret<String>,
    ) -> Result<(), PatientStoreError>;
    async fn delete_patient(&mut self, email: &Email) -> Result<(), PatientStoreError>;
}
