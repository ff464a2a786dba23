//! Startup configuration.
//!
//! Everything the rest of the program needs from the environment is resolved
//! here once and passed down explicitly, so tests can substitute temporary
//! paths and endpoints instead of relying on process-wide globals.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the session file location.
const SESSION_PATH_ENV: &str = "PORTHOLE_CONFIG";

/// Environment variable overriding the default service endpoint.
const SERVER_ENV: &str = "PORTHOLE_SERVER";

/// Session file name, stored in the user's home directory.
const SESSION_FILE: &str = ".porthole.json";

/// Service endpoint used when neither the environment nor a saved session
/// supplies one.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the session record is persisted.
    pub session_path: PathBuf,
    /// Endpoint used for sessions that have never been configured.
    pub default_server: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var_os(SESSION_PATH_ENV),
            std::env::var(SERVER_ENV).ok(),
        )
    }

    fn resolve(session_path: Option<OsString>, server: Option<String>) -> Self {
        let session_path = session_path.map(PathBuf::from).unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(SESSION_FILE)
        });
        let default_server = server
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());
        Self {
            session_path,
            default_server,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults_when_env_is_absent() {
        let config = Config::resolve(None, None);
        assert_eq!(config.default_server, DEFAULT_SERVER);
        assert!(config.session_path.ends_with(SESSION_FILE));
    }

    #[test]
    fn resolve_honors_overrides() {
        let config = Config::resolve(
            Some("/tmp/porthole-test.json".into()),
            Some("http://10.0.0.5:9000".into()),
        );
        assert_eq!(config.session_path, PathBuf::from("/tmp/porthole-test.json"));
        assert_eq!(config.default_server, "http://10.0.0.5:9000");
    }

    #[test]
    fn resolve_ignores_empty_server_override() {
        let config = Config::resolve(None, Some(String::new()));
        assert_eq!(config.default_server, DEFAULT_SERVER);
    }
}
