pub mod email;
pub mod login_record;
pub mod password;
pub mod patient;
