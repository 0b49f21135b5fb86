use chrono::{DateTime, Utc};

/// One login event for a patient account.
///
/// The `login_records` table is created by the migrations and rows cascade
/// away with their patient, but no endpoint writes to it yet.
#[derive(Debug, Clone)]
pub struct LoginRecord {
    id: i32,
    patient_id: i32,
    login_time: DateTime<Utc>,
    ip_address: Option<String>,
}

impl LoginRecord {
    pub fn new(
        id: i32,
        patient_id: i32,
        login_time: DateTime<Utc>,
        ip_address: Option<String>,
    ) -> Self {
        Self {
            id,
            patient_id,
            login_time,
            ip_address,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn patient_id(&self) -> i32 {
        self.patient_id
    }

    pub fn login_time(&self) -> DateTime<Utc> {
        self.login_time
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
}
