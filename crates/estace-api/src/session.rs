//! Authentication context shared by every persistence call.
//!
//! [`Session`] is a cheap-to-clone handle; clones observe the same token, so
//! clearing it from the expiry interceptor logs out every holder at once.
//! [`SessionStore`] persists it between runs as a small JSON document with
//! a fixed `"token"` key.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use estace_core::AuthResponse;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionState {
    #[serde(default)]
    token: Option<String>,
    /// Cached login record, used to greet the user without a round trip.
    #[serde(default)]
    usuario: Option<AuthResponse>,
}

#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::from_state(SessionState {
            token: Some(token.into()),
            usuario: None,
        })
    }

    fn from_state(state: SessionState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(|s| s.token.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(|s| s.token.is_some())
    }

    #[must_use]
    pub fn user(&self) -> Option<AuthResponse> {
        self.read(|s| s.usuario.clone())
    }

    /// Stores the token and login record returned by a successful login.
    pub fn sign_in(&self, auth: &AuthResponse) {
        self.write(|s| {
            s.token = Some(auth.token.clone());
            s.usuario = Some(auth.clone());
        });
    }

    /// Forgets the token and cached user.
    pub fn clear(&self) {
        self.write(|s| *s = SessionState::default());
    }

    fn snapshot(&self) -> SessionState {
        self.read(Clone::clone)
    }

    fn read<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

/// File-backed persistence for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored session. A missing file is an anonymous session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionIo`] if the file exists but cannot be read,
    /// or [`ApiError::SessionFormat`] if it is not valid session JSON.
    pub fn load(&self) -> Result<Session, ApiError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Session::anonymous());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let state: SessionState =
            serde_json::from_str(&content).map_err(|e| ApiError::SessionFormat {
                path: self.path.display().to_string(),
                source: e,
            })?;
        Ok(Session::from_state(state))
    }

    /// Writes `session` to disk, or removes the file if it holds no token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionIo`] on filesystem failure.
    pub fn save(&self, session: &Session) -> Result<(), ApiError> {
        let state = session.snapshot();
        if state.token.is_none() {
            return self.remove();
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(&state).map_err(|e| ApiError::SessionFormat {
            path: self.path.display().to_string(),
            source: e,
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn remove(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> ApiError {
        ApiError::SessionIo {
            path: self.path.display().to_string(),
            source,
        }
    }
}
