//! Configuration file support for the landing server.
//!
//! Loads an optional `quiz-landing.toml`. Every field has a default, so an
//! empty or missing file yields a working server.
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//!
//! [session]
//! enabled = true
//! cookie = "session"
//!
//! [logo]
//! alt = "Quiz Online Logo"
//! no_margin = false
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use quiz_landing::LogoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "quiz-landing.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    pub session: SessionConfig,
    pub logo: LogoConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            session: SessionConfig::default(),
            logo: LogoConfig::default(),
        }
    }
}

/// How the server decides whether a visitor is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// When false every request renders as anonymous
    pub enabled: bool,
    /// Cookie whose non-empty presence marks a session
    pub cookie: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cookie: "session".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load a config file that must exist and parse.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `quiz-landing.toml` from `dir` if it is there.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                let cause = std::error::Error::source(&e)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                warn!(error = %e, %cause, "using default config");
                Self::default()
            }
        }
    }

    /// An explicit path is strict; otherwise fall back to [`ServerConfig::load`]
    /// in the current directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::load(Path::new("."))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig::load(dir.path());
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.session.cookie, "session");
        assert!(config.session.enabled);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
bind = "0.0.0.0:3000"

[logo]
alt = "ACOEM Logo"
"#,
        );

        let config = ServerConfig::load(dir.path());
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.logo.alt, "ACOEM Logo");
        assert!(!config.logo.no_margin);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn invalid_file_falls_back_when_implicit() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "bind = 42");
        assert_eq!(ServerConfig::load(dir.path()), ServerConfig::default());
    }

    #[test]
    fn invalid_file_is_an_error_when_explicit() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[session]\nenabled = \"sometimes\"");
        let err = ServerConfig::load_from_path(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = ServerConfig::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
