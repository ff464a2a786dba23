//! The persisted session record and its on-disk store.
//!
//! One JSON file holds everything the client remembers between runs:
//! which endpoint to talk to, the bearer token, and the identity the
//! service reported at the last register/login.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::{AuthResponse, ClientError};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Service endpoint. Never empty; backfilled with the configured
    /// default when a stored record omits it.
    #[serde(default)]
    pub base_url: String,
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub share_url: Option<String>,
    pub plan: Option<String>,
}

impl Session {
    /// A fresh, unauthenticated session pointing at `server`.
    pub fn new(server: &str) -> Self {
        Self {
            base_url: server.to_string(),
            token: None,
            user_id: None,
            username: None,
            share_url: None,
            plan: None,
        }
    }

    /// Adopt the identity from a register/login response.
    ///
    /// All five fields come from one response, which is what keeps the
    /// token and the identity fields set (or unset) together.
    pub fn apply_identity(&mut self, auth: &AuthResponse) {
        self.token = Some(auth.token.clone());
        self.user_id = Some(auth.user_id.clone());
        self.username = Some(auth.username.clone());
        self.share_url = Some(auth.share_url.clone());
        self.plan = Some(auth.plan.clone());
    }

    /// The bearer token, or the error every authenticated command reports
    /// when invoked before login.
    pub fn require_token(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }
}

pub struct SessionStore {
    path: PathBuf,
    default_server: String,
}

impl SessionStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.session_path.clone(),
            default_server: config.default_server.clone(),
        }
    }

    /// Load the session from disk.
    ///
    /// An absent or unparseable file yields a fresh session rather than an
    /// error: a broken session file must never block unauthenticated
    /// commands like `register` or `config`.
    pub fn load(&self) -> Session {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session file, starting fresh");
                return Session::new(&self.default_server);
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "session file unreadable, starting fresh");
                return Session::new(&self.default_server);
            }
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(mut session) => {
                if session.base_url.is_empty() {
                    session.base_url = self.default_server.clone();
                }
                session
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "session file corrupt, starting fresh");
                Session::new(&self.default_server)
            }
        }
    }

    /// Persist the full session record, overwriting the previous file.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &std::path::Path) -> SessionStore {
        SessionStore::new(&Config {
            session_path: dir.join("session.json"),
            default_server: "http://127.0.0.1:8000".to_string(),
        })
    }

    fn sample_auth() -> AuthResponse {
        serde_json::from_str(
            r#"{
                "token": "t1",
                "user_id": "u1",
                "username": "alice",
                "share_url": "http://x/alice",
                "plan": "premium"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let mut session = Session::new("http://tunnel.example.com");
        session.apply_identity(&sample_auth());
        store.save(&session).unwrap();

        assert_eq!(store.load(), session);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert_eq!(store.load(), Session::new("http://127.0.0.1:8000"));
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        for garbage in ["{not json", "[]", "\"just a string\"", ""] {
            std::fs::write(dir.path().join("session.json"), garbage).unwrap();
            assert_eq!(store.load(), Session::new("http://127.0.0.1:8000"));
        }
    }

    #[test]
    fn stored_record_without_base_url_is_backfilled() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        std::fs::write(dir.path().join("session.json"), r#"{"token": "t1"}"#).unwrap();
        let session = store.load();
        assert_eq!(session.base_url, "http://127.0.0.1:8000");
        assert_eq!(session.token.as_deref(), Some("t1"));
    }

    #[test]
    fn unset_fields_persist_as_null() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&Session::new("http://127.0.0.1:8000")).unwrap();
        let raw = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.get("token").unwrap().is_null());
        assert!(value.get("share_url").unwrap().is_null());
    }

    #[test]
    fn apply_identity_sets_token_and_identity_together() {
        let mut session = Session::new("http://127.0.0.1:8000");
        assert!(session.require_token().is_err());

        session.apply_identity(&sample_auth());
        assert_eq!(session.require_token().unwrap(), "t1");
        assert_eq!(session.user_id.as_deref(), Some("u1"));
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.share_url.as_deref(), Some("http://x/alice"));
        assert_eq!(session.plan.as_deref(), Some("premium"));
    }

    #[test]
    fn require_token_reports_not_authenticated() {
        let session = Session::new("http://127.0.0.1:8000");
        assert!(matches!(
            session.require_token(),
            Err(ClientError::NotAuthenticated)
        ));
    }
}
