use chrono::{DateTime, Duration, Utc};
use lodgia_domain::SessionUser;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::clock::Clock;
use crate::repository::{PersistedSession, SessionRepository};

/// Absolute token lifetime: one hour from login, unrenewable.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// The watchdog fires slightly past expiry so a session that was not
/// cleared by then is force-logged-out.
const WATCHDOG_GRACE_SECS: u64 = 5;

/// Token and expiry travel together; the enum makes a half-present pair
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    LoggedOut,
    LoggedIn {
        user: SessionUser,
        token: String,
        expires_at: DateTime<Utc>,
    },
}

/// What subscribers observe on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<SessionUser>,
    pub authenticated: bool,
}

/// Holder of the current user identity and bearer token with absolute
/// expiry. Single writer; any caller may overwrite outright.
pub struct SessionStore {
    state: Mutex<SessionState>,
    clock: Arc<dyn Clock>,
    repository: Arc<dyn SessionRepository>,
    watchdog: Mutex<Option<JoinHandle<()>>>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Builds the store and restores any persisted session still inside its
    /// validity window; a stale record on disk is discarded.
    pub fn new(clock: Arc<dyn Clock>, repository: Arc<dyn SessionRepository>) -> Arc<Self> {
        let (snapshot_tx, _) = watch::channel(SessionSnapshot::default());
        let store = Arc::new(Self {
            state: Mutex::new(SessionState::LoggedOut),
            clock,
            repository,
            watchdog: Mutex::new(None),
            snapshot_tx,
        });
        store.restore();
        store
    }

    fn restore(self: &Arc<Self>) {
        match self.repository.load() {
            Ok(Some(record)) if record.expires_at > self.clock.now() => {
                let expires_at = record.expires_at;
                *self.state_guard() = SessionState::LoggedIn {
                    user: record.user,
                    token: record.token,
                    expires_at,
                };
                self.publish();
                self.arm_watchdog(expires_at);
                tracing::info!("restored persisted session, expires at {}", expires_at);
            }
            Ok(Some(_)) => {
                if let Err(e) = self.repository.clear() {
                    tracing::warn!("failed to clear stale session record: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to restore persisted session: {}", e),
        }
    }

    /// Stores the user and token and stamps the absolute expiry at
    /// now + one hour. Replaces any previous session and watchdog.
    pub fn login(self: &Arc<Self>, user: SessionUser, token: String) {
        let expires_at = self.clock.now() + Duration::seconds(TOKEN_TTL_SECS);
        let record = PersistedSession {
            user: user.clone(),
            token: token.clone(),
            expires_at,
        };
        *self.state_guard() = SessionState::LoggedIn {
            user,
            token,
            expires_at,
        };
        if let Err(e) = self.repository.save(&record) {
            tracing::warn!("failed to persist session: {}", e);
        }
        self.publish();
        self.arm_watchdog(expires_at);
        tracing::info!("session established, expires at {}", expires_at);
    }

    /// Clears user, token, and expiry unconditionally. Idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.state_guard();
            if *state == SessionState::LoggedOut {
                return;
            }
            *state = SessionState::LoggedOut;
        }
        if let Some(task) = self
            .watchdog
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.abort();
        }
        if let Err(e) = self.repository.clear() {
            tracing::warn!("failed to clear persisted session: {}", e);
        }
        self.publish();
        tracing::info!("session cleared");
    }

    /// Explicit eviction step, invoked before each authenticated request
    /// and by the watchdog. Returns true when an expired session was
    /// evicted.
    pub fn check_expiry(&self) -> bool {
        let expired = matches!(
            &*self.state_guard(),
            SessionState::LoggedIn { expires_at, .. } if self.clock.now() > *expires_at
        );
        if expired {
            tracing::info!("session expired, evicting");
            self.logout();
        }
        expired
    }

    /// Authentication predicate with lazy expiry eviction: observing an
    /// expired session clears it as a side effect and returns false.
    pub fn is_authenticated(&self) -> bool {
        self.check_expiry();
        matches!(&*self.state_guard(), SessionState::LoggedIn { .. })
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        match &*self.state_guard() {
            SessionState::LoggedIn { user, .. } => Some(user.clone()),
            SessionState::LoggedOut => None,
        }
    }

    /// The raw bearer token, if a session is present. Does not check
    /// expiry; callers go through `check_expiry` first.
    pub fn bearer_token(&self) -> Option<String> {
        match &*self.state_guard() {
            SessionState::LoggedIn { token, .. } => Some(token.clone()),
            SessionState::LoggedOut => None,
        }
    }

    /// Change subscription; the receiver holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    fn publish(&self) {
        let snapshot = match &*self.state_guard() {
            SessionState::LoggedIn { user, .. } => SessionSnapshot {
                user: Some(user.clone()),
                authenticated: true,
            },
            SessionState::LoggedOut => SessionSnapshot::default(),
        };
        // Send only fails with no receivers, which is fine.
        let _ = self.snapshot_tx.send(snapshot);
    }

    fn arm_watchdog(self: &Arc<Self>, expires_at: DateTime<Utc>) {
        // Without a runtime the lazy check_expiry path still evicts.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let delay_secs =
            (expires_at - self.clock.now()).num_seconds().max(0) as u64 + WATCHDOG_GRACE_SECS;
        let weak = Arc::downgrade(self);
        let task = handle.spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(delay_secs)).await;
            if let Some(store) = weak.upgrade() {
                if store.check_expiry() {
                    tracing::info!("watchdog force-logged-out expired session");
                }
            }
        });
        let previous = self
            .watchdog
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    fn state_guard(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
