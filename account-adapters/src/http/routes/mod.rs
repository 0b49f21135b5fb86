pub mod change_password;
pub mod delete_account;
pub mod error;
pub mod get_account;
pub mod login;
pub mod update_profile;

pub use change_password::{ChangePasswordRequest, change_password};
pub use delete_account::{DeleteAccountRequest, delete_account};
pub use error::{AccountApiError, ErrorResponse};
pub use get_account::{AccountListResponse, AccountResponse, get_account};
pub use login::{LoginRequest, login};
pub use update_profile::{UpdateProfileRequest, update_profile};

use serde::{Deserialize, Serialize};

/// Plain success body shared by the mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
