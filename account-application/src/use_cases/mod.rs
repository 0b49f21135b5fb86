pub mod change_password;
pub mod delete_account;
pub mod get_account;
pub mod login;
pub mod update_profile;

pub use change_password::{ChangePasswordError, ChangePasswordUseCase};
pub use delete_account::{DeleteAccountError, DeleteAccountUseCase};
pub use get_account::{GetAccountError, GetAccountUseCase};
pub use login::{LoginError, LoginUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};

#[cfg(test)]
pub(crate) mod test_support;
