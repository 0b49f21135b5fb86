use account_core::{Email, NewPatient, Patient, PatientStore, PatientStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};

pub struct PostgresPatientStore {
    pool: PgPool,
}

impl PostgresPatientStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresPatientStore { pool }
    }
}

#[async_trait::async_trait]
impl PatientStore for PostgresPatientStore {
    #[tracing::instrument(name = "Inserting patient into PostgreSQL", skip_all)]
    async fn insert_patient(&mut self, patient: NewPatient) -> Result<(), PatientStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO patients (email, name, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(patient.email().as_ref().expose_secret())
        .bind(patient.name())
        .bind(patient.password_hash().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return PatientStoreError::EmailAlreadyExists;
                }
            }
            PatientStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving patient from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Patient, PatientStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, email, name, password_hash
                FROM patients
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(PatientStoreError::PatientNotFound);
        };

        patient_from_row(&row)
    }

    #[tracing::instrument(name = "Listing patients from PostgreSQL", skip_all)]
    async fn find_all(&self) -> Result<Vec<Patient>, PatientStoreError> {
        let rows = sqlx::query(
            r#"
                SELECT id, email, name, password_hash
                FROM patients
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

        rows.iter().map(patient_from_row).collect()
    }

    #[tracing::instrument(name = "Updating patient name in PostgreSQL", skip_all)]
    async fn update_name(&mut self, email: &Email, name: &str) -> Result<(), PatientStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE patients
                SET name = $1
                WHERE email = $2
            "#,
        )
        .bind(name)
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PatientStoreError::PatientNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Setting patient password hash in PostgreSQL", skip_all)]
    async fn set_password_hash(
        &mut self,
        email: &Email,
        password_hash: Secret<String>,
    ) -> Result<(), PatientStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE patients
                SET password_hash = $1
                WHERE email = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PatientStoreError::PatientNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Deleting patient from PostgreSQL", skip_all)]
    async fn delete_patient(&mut self, email: &Email) -> Result<(), PatientStoreError> {
        // login_records rows cascade away with the patient.
        let result = sqlx::query(
            r#"
                DELETE FROM patients
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PatientStoreError::PatientNotFound);
        }

        Ok(())
    }
}

fn patient_from_row(row: &PgRow) -> Result<Patient, PatientStoreError> {
    let id: i32 = row
        .try_get("id")
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

    let email = Email::try_from(Secret::from(email))
        .map_err(|e| PatientStoreError::UnexpectedError(e.to_string()))?;

    Ok(Patient::new(id, email, name, Secret::from(password_hash)))
}
