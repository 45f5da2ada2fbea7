use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;

/// File inside the data directory that remembers the current session.
pub const SESSION_FILE: &str = "session";

/// Opaque correlation key for stored calculations and meal plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuses the token stored in `dir`, or generates and stores a fresh one.
    pub fn load_or_create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(SESSION_FILE);
        if path.exists() {
            let token = fs::read_to_string(&path)?;
            let token = token.trim();
            if !token.is_empty() {
                return Ok(Self::new(token));
            }
        }

        fs::create_dir_all(dir.as_ref())?;
        let session = Self::generate();
        fs::write(&path, session.as_str())?;
        info!(session = %session, "started new session");
        Ok(session)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generated_sessions_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_load_or_create_is_sticky() {
        let dir = tempdir().unwrap();
        let first = SessionId::load_or_create(dir.path()).unwrap();
        let second = SessionId::load_or_create(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_or_create_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data");
        let session = SessionId::load_or_create(&nested).unwrap();
        let stored = fs::read_to_string(nested.join(SESSION_FILE)).unwrap();
        assert_eq!(stored, session.as_str());
    }
}
