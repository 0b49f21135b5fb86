pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    login_record::LoginRecord,
    password::{Password, PasswordError},
    patient::{NewPatient, Patient},
};

pub use ports::repositories::{PatientStore, PatientStoreError};
