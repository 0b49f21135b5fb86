pub mod credentials;
pub mod use_cases;

pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    delete_account::{DeleteAccountError, DeleteAccountUseCase},
    get_account::{GetAccountError, GetAccountUseCase},
    login::{LoginError, LoginUseCase},
    update_profile::{UpdateProfileError, UpdateProfileUseCase},
};
