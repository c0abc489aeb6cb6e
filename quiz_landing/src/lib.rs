//! # quiz_landing
//!
//! Leptos SSR renderer for the newquiz.online landing page.
//!
//! The crate splits the page in two layers:
//!
//! - [`model`] - a host-neutral [`LandingModel`]: resolved link targets,
//!   ordered content lists and section roles. Serializable, no markup.
//! - [`components`] - Leptos components drawing that model as static HTML
//!   from a small set of display primitives.
//!
//! The only input is the visitor's session state. It is read once per render
//! and decides where both primary call-to-action links point.
//!
//! ## Quick Start
//!
//! ```rust
//! use quiz_landing::{render_landing_page, LogoConfig, SessionState};
//!
//! let html = render_landing_page(SessionState::Anonymous, &LogoConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"href="/signup""#));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through the `RenderHtml` trait; no reactive runtime or
//! hydration is involved:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <LandingPage model=model logo=logo /> }.to_html();
//! ```

pub mod components;
pub mod content;
pub mod model;
pub mod routes;
pub mod session;
pub mod styles;

pub use components::LogoConfig;
pub use model::{LandingModel, Section, StepSlot};
pub use routes::{CtaTargets, Route, resolve_primary_cta};
pub use session::{SessionSource, SessionState};

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page for a session.
///
/// Returns a full HTML document including `<!DOCTYPE html>`. The user-menu
/// slot in the header is left empty; see [`render_landing_page_with`].
///
/// # Example
///
/// ```rust
/// use quiz_landing::{render_landing_page, LogoConfig, SessionState};
///
/// let html = render_landing_page(SessionState::Authenticated, &LogoConfig::default());
/// assert!(html.contains(r#"href="/create""#));
/// assert!(!html.contains(r#"href="/signup""#));
/// ```
pub fn render_landing_page(session: SessionState, logo: &LogoConfig) -> String {
    render_landing_page_with(session, logo, ViewFn::default())
}

/// Render the landing page with host-supplied account controls in the header.
///
/// ```rust
/// use leptos::prelude::*;
/// use quiz_landing::{render_landing_page_with, LogoConfig, SessionState};
///
/// let html = render_landing_page_with(
///     SessionState::Authenticated,
///     &LogoConfig::default(),
///     || view! { <span class="avatar">"JD"</span> },
/// );
/// assert!(html.contains("avatar"));
/// ```
pub fn render_landing_page_with(
    session: SessionState,
    logo: &LogoConfig,
    user_menu: impl Into<ViewFn>,
) -> String {
    let model = LandingModel::build(session);
    let user_menu: ViewFn = user_menu.into();
    let doc = view! {
        <LandingDocument model=model logo=logo.clone() user_menu=user_menu />
    };

    let html = doc.to_html();
    tracing::debug!(session = session.as_str(), bytes = html.len(), "landing page rendered");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
