//! Cookie-keyed browser sessions held in memory.
//!
//! Each browser gets a random 128-bit hex id in the `specgenie_session`
//! cookie. The store is capped; when full, the oldest session is evicted.
//! Ids presented by the client that the store does not know are never adopted,
//! a fresh one is minted instead.

use std::collections::{HashMap, VecDeque};

use genie_core::StoredAnalysis;

use crate::error::WebError;

pub const COOKIE_NAME: &str = "specgenie_session";

/// Per-browser state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Latest analysis, replaced wholesale on every submission.
    pub analysis: Option<StoredAnalysis>,
    /// Description to pre-fill on the form after `/demo`.
    pub demo_description: Option<String>,
}

/// A session resolved for one request.
#[derive(Debug)]
pub struct Checkout<'a> {
    pub id: String,
    /// The id was minted for this request and must be sent back as a cookie.
    pub is_new: bool,
    pub session: &'a mut Session,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    order: VecDeque<String>,
    capacity: usize,
}

impl SessionStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Resolve the session for `requested`, creating one when the id is
    /// absent or unknown. A known id becomes the most recently used.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::SessionId`] if a new id cannot be generated.
    pub fn checkout(&mut self, requested: Option<&str>) -> Result<Checkout<'_>, WebError> {
        let (id, is_new) = match requested {
            Some(id) if self.sessions.contains_key(id) => {
                self.touch(id);
                (id.to_string(), false)
            }
            _ => (self.insert_new()?, true),
        };
        let session = self.sessions.entry(id.clone()).or_default();
        Ok(Checkout {
            id,
            is_new,
            session,
        })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn touch(&mut self, id: &str) {
        if let Some(position) = self.order.iter().position(|known| known == id)
            && let Some(known) = self.order.remove(position)
        {
            self.order.push_back(known);
        }
    }

    fn insert_new(&mut self) -> Result<String, WebError> {
        let id = new_session_id()?;
        while self.order.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.sessions.remove(&oldest);
            tracing::debug!(evicted = %oldest, "session store full, evicting least recently used");
        }
        self.order.push_back(id.clone());
        self.sessions.insert(id.clone(), Session::default());
        Ok(id)
    }
}

/// 16 random bytes as 32 lowercase hex characters.
///
/// # Errors
///
/// Returns [`WebError::SessionId`] if the OS random source fails.
pub fn new_session_id() -> Result<String, WebError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes).map_err(|e| WebError::SessionId(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Extract the session id from a `Cookie` header value.
#[must_use]
pub fn cookie_value(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == COOKIE_NAME && !value.is_empty()).then_some(value)
    })
}

/// `Set-Cookie` value for a freshly minted session.
#[must_use]
pub fn set_cookie(id: &str) -> String {
    format!("{COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax")
}
