//! State that outlives a single invocation: the login token and the
//! session hand-off between `estimate` and `setup`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use setup_core::services::{AuthToken, ServiceError};
use setup_core::session::{SessionStore, TokenStore};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionFileError {
    #[error("cannot access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid session file '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a session store written by [`save_session`]. A missing file is
/// an empty session.
pub fn load_session(path: &Path) -> Result<SessionStore, SessionFileError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SessionStore::default()),
        Err(source) => {
            return Err(SessionFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text).map_err(|source| SessionFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_session(
    path: &Path,
    session: &SessionStore,
) -> Result<(), SessionFileError> {
    let json = serde_json::to_string_pretty(session).map_err(|source| SessionFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| SessionFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "session saved");
    Ok(())
}

/// Token kept in a plain file between invocations.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    token: Option<AuthToken>,
}

impl FileTokenStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let path = path.into();
        let token = match fs::read_to_string(&path) {
            Ok(text) => Some(text.trim().to_string())
                .filter(|t| !t.is_empty())
                .map(AuthToken::new),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(ServiceError::Storage(format!(
                    "cannot read token file '{}': {e}",
                    path.display()
                )));
            }
        };
        Ok(Self { path, token })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<AuthToken> {
        self.token.clone()
    }

    fn set_token(
        &mut self,
        token: AuthToken,
    ) -> Result<(), ServiceError> {
        fs::write(&self.path, token.as_str()).map_err(|e| {
            ServiceError::Storage(format!("cannot write token file '{}': {e}", self.path.display()))
        })?;
        self.token = Some(token);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ServiceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ServiceError::Storage(format!(
                    "cannot remove token file '{}': {e}",
                    self.path.display()
                )));
            }
        }
        self.token = None;
        Ok(())
    }
}
