use std::collections::HashMap;

use account_core::{Email, NewPatient, Password, Patient, PatientStore, PatientStoreError};
use secrecy::Secret;

pub(crate) fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

pub(crate) fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

/// In-memory store used by the use-case tests.
#[derive(Default)]
pub(crate) struct MockPatientStore {
    patients: HashMap<Email, Patient>,
    next_id: i32,
}

impl MockPatientStore {
    pub(crate) fn seed(&mut self, email: Email, name: &str, password_hash: Secret<String>) {
        self.next_id += 1;
        self.patients.insert(
            email.clone(),
            Patient::new(self.next_id, email, name.to_string(), password_hash),
        );
    }

    pub(crate) fn patient(&self, email: &Email) -> Option<&Patient> {
        self.patients.get(email)
    }
}

#[async_trait::async_trait]
impl PatientStore for MockPatientStore {
    async fn insert_patient(&mut self, patient: NewPatient) -> Result<(), PatientStoreError> {
        if self.patients.contains_key(patient.email()) {
            return Err(PatientStoreError::EmailAlreadyExists);
        }
        self.seed(
            patient.email().clone(),
            patient.name(),
            patient.password_hash().clone(),
        );
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Patient, PatientStoreError> {
        self.patients
            .get(email)
            .cloned()
            .ok_or(PatientStoreError::PatientNotFound)
    }

    async fn find_all(&self) -> Result<Vec<Patient>, PatientStoreError> {
        let mut patients: Vec<Patient> = self.patients.values().cloned().collect();
        patients.sort_by_key(Patient::id);
        Ok(patients)
    }

    async fn update_name(&mut self, email: &Email, name: &str) -> Result<(), PatientStoreError> {
        let patient = self
            .patients
            .get_mut(email)
            .ok_or(PatientStoreError::PatientNotFound)?;

        *patient = Patient::new(
            patient.id(),
            email.clone(),
            name.to_string(),
            patient.password_hash().clone(),
        );
        Ok(())
    }

    async fn set_password_hash(
        &mut self,
        email: &Email,
        password_hash: Secret<String>,
    ) -> Result<(), PatientStoreError> {
        let patient = self
            .patients
            .get_mut(email)
            .ok_or(PatientStoreError::PatientNotFound)?;

        *patient = Patient::new(
            patient.id(),
            email.clone(),
            patient.name().to_string(),
            password_hash,
        );
        Ok(())
    }

    async fn delete_patient(&mut self, email: &Email) -> Result<(), PatientStoreError> {
        self.patients
            .remove(email)
            .ok_or(PatientStoreError::PatientNotFound)?;
        Ok(())
    }
}
