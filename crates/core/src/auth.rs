//! Admin capability token.
//!
//! Destructive operations take an [`AdminToken`] parameter instead of
//! consulting ambient session state, so an unauthenticated call path simply
//! has nothing to pass and fails closed at compile time.

/// Proof of a successful admin credential check. Issued by the API's login
/// flow; holders may invoke admin-only operations such as the full purge.
#[derive(Debug, Clone)]
pub struct AdminToken {
    session: String,
}

impl AdminToken {
    /// Wrap a verified session identifier. Callers are expected to have
    /// checked the credentials first; this type carries the proof, it does
    /// not perform the check.
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }
}
