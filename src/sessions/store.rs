//! Process-wide session store.

use std::collections::HashMap;

use crate::i18n::Language;

use super::Session;

/// Transport-level user identifier.
pub type UserId = u64;

/// All known sessions, keyed by user id.
///
/// Owned by the composition root and shared with handlers behind an
/// `Arc<RwLock<..>>`; the store itself is plain single-threaded state.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<UserId, Session>,
    default_language: Language,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(default_language: Language) -> Self {
        Self {
            sessions: HashMap::new(),
            default_language,
        }
    }

    /// Returns the session for a user, creating a zeroed one on first contact.
    pub fn get_or_create(&mut self, user: UserId) -> &mut Session {
        self.sessions
            .entry(user)
            .or_insert_with(|| Session::new(self.default_language))
    }

    /// The session for a user, if they have interacted since the last start.
    #[must_use]
    pub fn get(&self, user: UserId) -> Option<&Session> {
        self.sessions.get(&user)
    }

    /// Sets a user's reply language, creating their session if needed.
    pub fn set_language(&mut self, user: UserId, language: Language) {
        self.get_or_create(user).language = language;
    }

    /// Zeroes every session's tallies and open activity.
    ///
    /// Language preferences are kept and no session is removed. Returns the
    /// number of sessions cleared.
    pub fn reset_all(&mut self) -> usize {
        for session in self.sessions.values_mut() {
            session.reset();
        }
        self.sessions.len()
    }

    /// Number of known sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no user has interacted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
