use secrecy::Secret;

use super::email::Email;

/// A persisted patient account row.
///
/// `password_hash` is the PHC string produced by the credential utility;
/// plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct Patient {
    id: i32,
    email: Email,
    name: String,
    password_hash: Secret<String>,
}

impl Patient {
    pub fn new(id: i32, email: Email, name: String, password_hash: Secret<String>) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }
}

/// Insert shape for a patient account; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPatient {
    email: Email,
    name: String,
    password_hash: Secret<String>,
}

impl NewPatient {
    pub fn new(email: Email, name: String, password_hash: Secret<String>) -> Self {
        Self {
            email,
            name,
            password_hash,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }
}
