//! # quiz_landing_server
//!
//! HTTP host for the newquiz.online landing page.
//!
//! Each request's session cookie is turned into a presence flag, the page is
//! rendered server-side with [`quiz_landing`], and the HTML is returned as is.
//! The same renderer backs a static export for cookie-less hosting.
//!
//! ## Routes
//!
//! - `GET /` - landing page HTML
//! - `GET /api/landing` - the page model as JSON
//! - `GET /health` - liveness probe

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod session;

pub use app::{AppState, create_router};
pub use config::{ServerConfig, SessionConfig};
pub use error::{ConfigError, ExportError};
pub use export::export_static;
