use chrono::{DateTime, Utc};
use lodgia_domain::SessionUser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::SessionError;

/// The durable record for one session. At most one logical record exists,
/// so no transactional discipline is needed beyond whole-record overwrite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedSession {
    pub user: SessionUser,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Durable client-side storage for the session, so it survives process
/// restarts within its validity window.
pub trait SessionRepository: Send + Sync {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError>;
    fn save(&self, record: &PersistedSession) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// JSON-file-backed storage.
#[derive(Debug)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionRepository for FileSessionRepository {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // A corrupt record is treated as absent rather than fatal.
                tracing::warn!("discarding unreadable session record: {}", e);
                Ok(None)
            }
        }
    }

    fn save(&self, record: &PersistedSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(record)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Volatile storage for tests and environments without a writable disk.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    record: Mutex<Option<PersistedSession>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        Ok(self
            .record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, record: &PersistedSession) -> Result<(), SessionError> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> PersistedSession {
        PersistedSession {
            user: SessionUser {
                email: "ada@example.com".to_string(),
                first_name: Some("Ada".to_string()),
                role: lodgia_domain::identity::ROLE_ADMIN.to_string(),
            },
            token: "tok-123".to_string(),
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn file_repository_round_trips_and_clears() {
        let path = std::env::temp_dir().join(format!(
            "lodgia-session-test-{}-{}.json",
            std::process::id(),
            line!()
        ));
        let repo = FileSessionRepository::new(&path);

        assert!(repo.load().expect("load empty").is_none());

        let saved = record();
        repo.save(&saved).expect("save");
        let loaded = repo.load().expect("load").expect("record present");
        assert_eq!(loaded, saved);

        repo.clear().expect("clear");
        assert!(repo.load().expect("load after clear").is_none());
        // Clearing twice is fine
        repo.clear().expect("clear again");
    }

    #[test]
    fn corrupt_file_reads_as_absent() {
        let path = std::env::temp_dir().join(format!(
            "lodgia-session-test-{}-{}.json",
            std::process::id(),
            line!()
        ));
        fs::write(&path, "{not json").expect("write corrupt file");
        let repo = FileSessionRepository::new(&path);
        assert!(repo.load().expect("load").is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn in_memory_repository_round_trips() {
        let repo = InMemorySessionRepository::default();
        assert!(repo.load().expect("load").is_none());
        repo.save(&record()).expect("save");
        assert!(repo.load().expect("load").is_some());
        repo.clear().expect("clear");
        assert!(repo.load().expect("load").is_none());
    }
}
