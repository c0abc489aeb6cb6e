//! Navigation targets emitted by the landing page.
//!
//! The page never resolves these paths itself; they are handed to the
//! rendering host as plain `href` values.

use serde::Serialize;

use crate::session::SessionState;

/// A path the landing page can link to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Route {
    /// Site root, target of the brand logo
    Root,
    /// Quiz editor, for visitors with a session
    Create,
    /// Account creation, for anonymous visitors
    Signup,
    /// Join an existing quiz by code
    Join,
}

impl Route {
    /// The literal path for this route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Create => "/create",
            Route::Signup => "/signup",
            Route::Join => "/join",
        }
    }
}

impl From<Route> for &'static str {
    fn from(route: Route) -> Self {
        route.path()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Destination of both primary call-to-action links.
pub fn resolve_primary_cta(authenticated: bool) -> Route {
    if authenticated {
        Route::Create
    } else {
        Route::Signup
    }
}

/// Link targets for one render pass.
///
/// Built once and shared by the hero and the bottom call-to-action, so the
/// two primary links always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CtaTargets {
    /// "Get Started" / "Start Creating" destination
    pub primary: Route,
    /// "Join a Quiz" destination, independent of the session
    pub join: Route,
}

impl CtaTargets {
    pub fn for_session(session: SessionState) -> Self {
        Self {
            primary: resolve_primary_cta(session.is_authenticated()),
            join: Route::Join,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_cta_follows_flag() {
        assert_eq!(resolve_primary_cta(true), Route::Create);
        assert_eq!(resolve_primary_cta(false), Route::Signup);
    }

    #[test]
    fn join_is_constant() {
        for session in [SessionState::Authenticated, SessionState::Anonymous] {
            assert_eq!(CtaTargets::for_session(session).join.path(), "/join");
        }
    }

    #[test]
    fn paths_are_literal() {
        assert_eq!(Route::Root.path(), "/");
        assert_eq!(Route::Create.to_string(), "/create");
        assert_eq!(Route::Signup.to_string(), "/signup");
    }

    #[test]
    fn serializes_as_path() {
        let json = serde_json::to_string(&CtaTargets::for_session(SessionState::Authenticated))
            .unwrap();
        assert_eq!(json, r#"{"primary":"/create","join":"/join"}"#);
    }
}
