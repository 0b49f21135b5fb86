use std::fmt;

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password cannot be empty")]
    Empty,
}

/// A plaintext password in transit between a request and the credential
/// utility. It is never persisted; only its hash is.
///
/// Strength requirements are a policy applied to new passwords, not a parse
/// invariant, so parsing only rejects the empty string. Stored credentials
/// predating the policy must still be usable for login.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
