//! # Authentication Module
//!
//! The static admin credential check and the session tokens it issues.
//! Passwords are hashed with Argon2 at startup; a successful login mints a
//! random session token, and admin-only handlers exchange that token for an
//! explicit [`AdminToken`] capability. Operations fail closed: no valid
//! session, no capability, no purge.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::http::HeaderMap;
use deskbook_core::auth::AdminToken;
use deskbook_core::errors::{BookingError, BookingResult};
use eyre::Result;
use rand::Rng;
use rand::distributions::Alphanumeric;

/// Header carrying the admin session token on admin-only requests.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Hashes a password using the Argon2 algorithm with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(is_valid)
}

/// A fresh random session token.
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Extracts the session token a request presented, if any.
pub fn presented_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
}

/// Exchanges a presented session token for the admin capability, failing
/// closed when the token is missing or not an active session.
pub fn require_admin(
    headers: &HeaderMap,
    is_active_session: impl Fn(&str) -> bool,
) -> BookingResult<AdminToken> {
    match presented_token(headers) {
        Some(token) if is_active_session(token) => Ok(AdminToken::new(token)),
        Some(_) => Err(BookingError::Authorization(
            "Admin session is not valid or has ended".to_string(),
        )),
        None => Err(BookingError::Authorization(
            "Admin session required".to_string(),
        )),
    }
}
