use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex")
});

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Invalid email address")]
    InvalidFormat,
}

/// A validated email address, used as the external key for every account
/// operation.
#[derive(Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidFormat)
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Email([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Email, EmailError> {
        Email::try_from(Secret::from(raw.to_string()))
    }

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(parse("patient@example.com").is_ok());
        assert!(parse("first.last@clinic.co.kr").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(parse(""), Err(EmailError::InvalidFormat));
        assert_eq!(parse("no-at-sign"), Err(EmailError::InvalidFormat));
        assert_eq!(parse("missing@domain"), Err(EmailError::InvalidFormat));
        assert_eq!(parse("spaces in@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn equality_and_debug_do_not_depend_on_secret_wrapper() {
        let a = parse("patient@example.com").unwrap();
        let b = parse("patient@example.com").unwrap();
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "Email([REDACTED])");
    }
}
