use account_application::{
    ChangePasswordError, DeleteAccountError, GetAccountError, LoginError, UpdateProfileError,
};
use account_core::{EmailError, PasswordError, PatientStoreError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    /// Login failures share one message whether the email was unknown or
    /// the password wrong, so the response cannot be used to enumerate
    /// registered accounts.
    #[error("Please check your email or password.")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error(
        "New password does not meet the criteria: minimum 8 characters, at least one uppercase letter, and at least one special character."
    )]
    WeakPassword,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            AccountApiError::InvalidCredentials
            | AccountApiError::IncorrectPassword
            | AccountApiError::WeakPassword
            | AccountApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AccountApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AccountApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse { detail });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for AccountApiError {
    fn from(error: EmailError) -> Self {
        AccountApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for AccountApiError {
    fn from(error: PasswordError) -> Self {
        AccountApiError::InvalidInput(error.to_string())
    }
}

impl From<PatientStoreError> for AccountApiError {
    fn from(error: PatientStoreError) -> Self {
        match error {
            PatientStoreError::PatientNotFound => AccountApiError::UserNotFound,
            PatientStoreError::EmailAlreadyExists => {
                AccountApiError::InvalidInput(error.to_string())
            }
            PatientStoreError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<LoginError> for AccountApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AccountApiError::InvalidCredentials,
            LoginError::PatientStoreError(e) => e.into(),
        }
    }
}

impl From<GetAccountError> for AccountApiError {
    fn from(error: GetAccountError) -> Self {
        match error {
            GetAccountError::PatientStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateProfileError> for AccountApiError {
    fn from(error: UpdateProfileError) -> Self {
        match error {
            UpdateProfileError::PatientStoreError(e) => e.into(),
        }
    }
}

impl From<ChangePasswordError> for AccountApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::PatientStoreError(e) => e.into(),
            ChangePasswordError::IncorrectPassword => AccountApiError::IncorrectPassword,
            ChangePasswordError::WeakPassword => AccountApiError::WeakPassword,
            ChangePasswordError::HashingError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<DeleteAccountError> for AccountApiError {
    fn from(error: DeleteAccountError) -> Self {
        match error {
            DeleteAccountError::PatientStoreError(e) => e.into(),
        }
    }
}
