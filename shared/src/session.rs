//! Client session persistence
//!
//! The active session is mirrored into two independent channels:
//!
//! - the cookie channel, which the server can see and which the route gate
//!   treats as authoritative, and
//! - the client-held channel, which only drives UI state.
//!
//! The two channels are written and cleared independently with no rollback;
//! the dual write is best-effort by design because the cookie alone decides
//! gating. Channel implementations carry their own storage attributes (a
//! browser-backed cookie channel appends path and SameSite; the in-memory
//! channel used by native clients and tests stores raw values).

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::warn;

use crate::errors::StorageError;
use crate::types::UserSummary;

/// Storage key for the bearer token, shared with the server-side cookie
pub const TOKEN_KEY: &str = "authToken";

/// Storage key for the serialized user summary (client-held channel only)
pub const USER_KEY: &str = "authUser";

/// A single session storage channel
pub trait SessionChannel: Send + Sync {
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get(&self, key: &str) -> Option<String>;
    fn delete(&self, key: &str);
}

/// In-memory channel used by native clients and tests
#[derive(Default)]
pub struct MemoryChannel {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionChannel for MemoryChannel {
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Dual-channel session store
///
/// `is_authenticated` consults only the client-held channel; the route gate
/// consults only the cookie channel. The channels are not guaranteed to be
/// consistent with each other.
pub struct SessionStore {
    cookie: Box<dyn SessionChannel>,
    local: Box<dyn SessionChannel>,
}

impl SessionStore {
    pub fn new(cookie: Box<dyn SessionChannel>, local: Box<dyn SessionChannel>) -> Self {
        Self { cookie, local }
    }

    /// Persist a fresh session into both channels
    ///
    /// Both writes are attempted independently; a failed write is logged and
    /// does not undo the other channel.
    pub fn login(&self, token: &str, user: &UserSummary) {
        if let Err(error) = self.cookie.put(TOKEN_KEY, token) {
            warn!(%error, "cookie channel write failed");
        }
        if let Err(error) = self.local.put(TOKEN_KEY, token) {
            warn!(%error, "client channel token write failed");
        }
        match serde_json::to_string(user) {
            Ok(serialized) => {
                if let Err(error) = self.local.put(USER_KEY, &serialized) {
                    warn!(%error, "client channel user write failed");
                }
            }
            Err(error) => warn!(%error, "user summary serialization failed"),
        }
    }

    /// Clear both channels
    pub fn logout(&self) {
        self.cookie.delete(TOKEN_KEY);
        self.local.delete(TOKEN_KEY);
        self.local.delete(USER_KEY);
    }

    /// Token as held by the client-held channel
    pub fn token(&self) -> Option<String> {
        self.local.get(TOKEN_KEY)
    }

    /// Token as held by the cookie channel (what the server will see)
    pub fn cookie_token(&self) -> Option<String> {
        self.cookie.get(TOKEN_KEY)
    }

    /// Stored user summary
    ///
    /// A summary that fails to deserialize is treated as absent and the
    /// client-held channel is reset; this never returns an error.
    pub fn current_user(&self) -> Option<UserSummary> {
        let raw = self.local.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                warn!(%error, "stored user summary is malformed, resetting session");
                self.local.delete(TOKEN_KEY);
                self.local.delete(USER_KEY);
                None
            }
        }
    }

    /// Logged-in means token AND summary are present client-side;
    /// a partially populated store reads as logged out.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.current_user().is_some()
    }
}
