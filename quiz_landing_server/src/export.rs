//! Static snapshots of the landing page for CDN / file hosting.
//!
//! A static host cannot see cookies, so both variants are written and the
//! edge decides which one to serve.

use std::path::{Path, PathBuf};

use quiz_landing::{LogoConfig, SessionState, render_landing_page};
use tracing::info;

use crate::error::ExportError;

/// Page for visitors without a session.
pub const ANONYMOUS_PAGE: &str = "index.html";
/// Page for visitors with a session.
pub const AUTHENTICATED_PAGE: &str = "index.authenticated.html";

/// Render both session variants into `out_dir`, creating it if needed.
/// Returns the written paths, anonymous first.
pub fn export_static(out_dir: &Path, logo: &LogoConfig) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(2);
    for (session, file_name) in [
        (SessionState::Anonymous, ANONYMOUS_PAGE),
        (SessionState::Authenticated, AUTHENTICATED_PAGE),
    ] {
        let path = out_dir.join(file_name);
        let html = render_landing_page(session, logo);
        std::fs::write(&path, &html).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = html.len(), session = session.as_str(), "page exported");
        written.push(path);
    }

    Ok(written)
}
