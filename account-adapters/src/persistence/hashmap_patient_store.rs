use std::collections::HashMap;

use account_core::{Email, NewPatient, Patient, PatientStore, PatientStoreError};
use secrecy::Secret;

/// In-memory patient store for tests and local development.
#[derive(Default)]
pub struct HashMapPatientStore {
    patients: HashMap<Email, Patient>,
    next_id: i32,
}

impl HashMapPatientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PatientStore for HashMapPatientStore {
    async fn insert_patient(&mut self, patient: NewPatient) -> Result<(), PatientStoreError> {
        if self.patients.contains_key(patient.email()) {
            return Err(PatientStoreError::EmailAlreadyExists);
        }

        self.next_id += 1;
        self.patients.insert(
            patient.email().clone(),
            Patient::new(
                self.next_id,
                patient.email().clone(),
                patient.name().to_string(),
                patient.password_hash().clone(),
            ),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn email(raw: &str) -> Email {
        Email::try_from(Secret::from(raw.to_string())).unwrap()
    }

    fn new_patient(raw_email: &str, name: &str) -> NewPatient {
        NewPatient::new(
            email(raw_email),
            name.to_string(),
            Secret::from("phc-hash".to_string()),
        )
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_and_rejects_duplicates() {
        let mut store = HashMapPatientStore::new();

        store
            .insert_patient(new_patient("a@example.com", "A"))
            .await
            .unwrap();
        store
            .insert_patient(new_patient("b@example.com", "B"))
            .await
            .unwrap();

        let result = store.insert_patient(new_patient("a@example.com", "A2")).await;
        assert_eq!(result, Err(PatientStoreError::EmailAlreadyExists));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id() < all[1].id());
    }

    #[tokio::test]
    async fn mutations_on_missing_email_are_not_found() {
        let mut store = HashMapPatientStore::new();
        let missing = email("missing@example.com");

        assert_eq!(
            store.update_name(&missing, "X").await,
            Err(PatientStoreError::PatientNotFound)
        );
        assert_eq!(
            store
                .set_password_hash(&missing, Secret::from("h".to_string()))
                .await,
            Err(PatientStoreError::PatientNotFound)
        );
        assert_eq!(
            store.delete_patient(&missing).await,
            Err(PatientStoreError::PatientNotFound)
        );
    }

    #[tokio::test]
    async fn delete_removes_the_account() {
        let mut store = HashMapPatientStore::new();
        store
            .insert_patient(new_patient("a@example.com", "A"))
            .await
            .unwrap();

        store.delete_patient(&email("a@example.com")).await.unwrap();

        assert_eq!(
            store.find_by_email(&email("a@example.com")).await.unwrap_err(),
            PatientStoreError::PatientNotFound
        );
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
