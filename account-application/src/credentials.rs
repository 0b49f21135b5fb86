//! Credential utility: password hashing, verification and the strength
//! policy for new passwords.

use account_core::Password;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

/// The fixed special-character set a new password must draw from.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Returns true iff the password is at least 8 characters long, contains an
/// ASCII uppercase letter and contains one of [`SPECIAL_CHARACTERS`].
///
/// Exactly these three predicates; lowercase letters and digits are not
/// required.
pub fn meets_strength_policy(password: &Password) -> bool {
    let raw = password.as_ref().expose_secret();

    raw.chars().count() >= 8
        && raw.chars().any(|c| c.is_ascii_uppercase())
        && raw.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// Two calls with the same input produce different PHC strings; both verify.
#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

/// Verify a plaintext candidate against a stored PHC string. The salt and
/// parameters embedded in the hash drive the recomputation.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            hasher()?
                .verify_password(
                    password_candidate.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}
