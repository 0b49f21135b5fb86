pub mod hashmap_patient_store;
pub mod postgres_patient_store;

pub use hashmap_patient_store::HashMapPatientStore;
pub use postgres_patient_store::PostgresPatientStore;
