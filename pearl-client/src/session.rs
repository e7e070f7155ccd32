//! Session - persisted login state
//!
//! The authenticated user is an explicit value with an explicit on-disk
//! lifecycle: `load()` on startup, `save()` after login, `clear()` on
//! logout. Components that need the user receive the session as a
//! parameter; there is no ambient global.

use std::path::{Path, PathBuf};

use thiserror::Error;

use shared::client::{LoginResponse, UserInfo};
use shared::util::now_secs;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An authenticated user session
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub user: UserInfo,
    /// Bearer token, when the backend issued one
    pub token: Option<String>,
    /// Token expiry (Unix seconds), extracted from the JWT payload
    pub expires_at: Option<u64>,
    pub logged_in_at: u64,
}

impl Session {
    /// Build a session from a successful login response
    ///
    /// Returns `None` when the backend reported success without a user
    /// object; callers treat that as a failed login.
    pub fn from_login(response: &LoginResponse) -> Option<Self> {
        let user = response.user.clone()?;
        let expires_at = response.token.as_deref().and_then(Self::parse_jwt_exp);
        Some(Self {
            user,
            token: response.token.clone(),
            expires_at,
            logged_in_at: now_secs(),
        })
    }

    /// Extract the expiry (Unix seconds) from a JWT without verifying it
    ///
    /// Verification is the backend's job; the client only needs to know
    /// when to stop trusting a cached session.
    pub fn parse_jwt_exp(token: &str) -> Option<u64> {
        // JWT format: header.payload.signature
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
        let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
        let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
        payload.get("exp")?.as_u64()
    }

    pub fn is_expired(&self, now: u64) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }
}

/// File-backed session storage
///
/// One current session per data directory: `{data_dir}/auth/session.json`.
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("auth/session.json"),
        }
    }

    /// Load the persisted session, clearing it if it has expired
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        let session: Session = serde_json::from_str(&content)?;

        if session.is_expired(now_secs()) {
            let _ = std::fs::remove_file(&self.file_path);
            tracing::info!(user = %session.user.email, "Cached session expired, cleared");
            return Ok(None);
        }

        tracing::info!(user = %session.user.email, "Loaded cached session");
        Ok(Some(session))
    }

    /// Persist the session (login survives a restart)
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(user = %session.user.email, "Session saved");
        Ok(())
    }

    /// Remove the persisted session
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Admin".to_string(),
            email: "admin@store.test".to_string(),
            role: "admin".to_string(),
        }
    }

    fn jwt_with_exp(exp: u64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{exp}}}"#));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_parse_jwt_exp() {
        assert_eq!(Session::parse_jwt_exp(&jwt_with_exp(1_900_000_000)), Some(1_900_000_000));
        assert_eq!(Session::parse_jwt_exp("not-a-jwt"), None);
        assert_eq!(Session::parse_jwt_exp("a.%%%.c"), None);
    }

    #[test]
    fn test_from_login_requires_user() {
        let without_user = LoginResponse {
            user: None,
            token: None,
            message: Some("Invalid credentials".to_string()),
        };
        assert!(Session::from_login(&without_user).is_none());

        let with_user = LoginResponse {
            user: Some(user()),
            token: Some(jwt_with_exp(1_900_000_000)),
            message: None,
        };
        let session = Session::from_login(&with_user).unwrap();
        assert_eq!(session.expires_at, Some(1_900_000_000));
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.load().unwrap().is_none());

        let session = Session {
            user: user(),
            token: None,
            expires_at: None,
            logged_in_at: now_secs(),
        };
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.user.email, "admin@store.test");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_load_purges_expired_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let session = Session {
            user: user(),
            token: Some(jwt_with_exp(1000)),
            expires_at: Some(1000),
            logged_in_at: 900,
        };
        store.save(&session).unwrap();

        assert!(store.load().unwrap().is_none());
        assert!(!dir.path().join("auth/session.json").exists());
    }
}
