//! File-backed session archive.
//!
//! Holds finished-match records most-recent-first, mirrored to a single JSON
//! file. Constructed with an explicit path and injected into whatever owns
//! the match; the store never touches global state.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::SessionRecord;

use super::error::StoreError;

pub struct SessionStore {
    path: PathBuf,
    sessions: Vec<SessionRecord>,
}

impl SessionStore {
    /// Open the archive at `path`, loading any existing list. A missing file
    /// is a fresh, empty archive, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let sessions = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let sessions: Vec<SessionRecord> =
                serde_json::from_str(&data).map_err(StoreError::Deserialization)?;
            log::info!("loaded {} session(s) from {}", sessions.len(), path.display());
            sessions
        } else {
            Vec::new()
        };
        Ok(Self { path, sessions })
    }

    /// Archived sessions, most recent first.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Archive a finished match at the front of the list and persist.
    pub fn add(&mut self, record: SessionRecord) -> Result<(), StoreError> {
        log::info!("archiving session {} (winner: {})", record.id, record.winner);
        self.sessions.insert(0, record);
        self.persist()
    }

    /// Remove a session by id and persist.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id != id);
        if self.sessions.len() == before {
            return Err(StoreError::NotFound { id });
        }
        log::info!("deleted session {}", id);
        self.persist()
    }

    /// Write the whole list to disk via a temp file and rename, so a crash
    /// mid-write cannot leave a truncated archive behind.
    fn persist(&self) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(&self.sessions)
            .map_err(StoreError::Serialization)?;
        let tmp = temp_path(&self.path);
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("persisted {} session(s) to {}", self.sessions.len(), self.path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
