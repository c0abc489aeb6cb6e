//! Authentication presence as seen by the landing page.
//!
//! The page does not manage sessions. A host hands it something that
//! implements [`SessionSource`] and the flag is read exactly once per render.

use serde::Serialize;

/// Whether the visitor has an active session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Authenticated,
    /// Also used when the session collaborator cannot answer
    #[default]
    Anonymous,
}

impl SessionState {
    /// Map a raw presence answer to a state. Unknown means anonymous.
    pub fn from_presence(presence: Option<bool>) -> Self {
        match presence {
            Some(true) => SessionState::Authenticated,
            Some(false) | None => SessionState::Anonymous,
        }
    }

    /// Ask a session collaborator for presence.
    pub fn resolve(source: &dyn SessionSource) -> Self {
        let state = Self::from_presence(source.presence());
        tracing::trace!(?state, "session resolved");
        state
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::Authenticated)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SessionState::Authenticated => "authenticated",
            SessionState::Anonymous => "anonymous",
        }
    }
}

/// External collaborator that knows whether a visitor is signed in.
///
/// `None` means the collaborator is unavailable or cannot decide.
pub trait SessionSource {
    fn presence(&self) -> Option<bool>;
}

impl SessionSource for bool {
    fn presence(&self) -> Option<bool> {
        Some(*self)
    }
}

impl SessionSource for Option<bool> {
    fn presence(&self) -> Option<bool> {
        *self
    }
}
