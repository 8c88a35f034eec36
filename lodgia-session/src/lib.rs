//! Client-side shared state: the session store (user identity + bearer token
//! with absolute expiry) and the search criteria store. These are the only
//! two pieces of cross-page mutable state in the client; both are explicit
//! service objects handed to their consumers rather than module globals.

pub mod clock;
pub mod criteria;
pub mod error;
pub mod repository;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use criteria::SearchCriteriaStore;
pub use error::SessionError;
pub use repository::{FileSessionRepository, InMemorySessionRepository, PersistedSession, SessionRepository};
pub use store::{SessionSnapshot, SessionStore, TOKEN_TTL_SECS};
