//! Session-scoped key/value storage for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow only writes here; other screens read the token back. The
//! store is injected so the submission pipeline can run against an in-memory
//! map in tests and against `window.sessionStorage` in the browser.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::LoginError;

/// Key/value capability the login flow persists the session into.
pub trait SessionStore {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the backing store refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), LoginError>;

    fn get(&self, key: &str) -> Option<String>;
}

/// `window.sessionStorage`, cleared when the tab closes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Result<web_sys::Storage, LoginError> {
    web_sys::window()
        .ok_or(LoginError::Unavailable)?
        .session_storage()
        .map_err(|e| LoginError::Storage(format!("{e:?}")))?
        .ok_or_else(|| LoginError::Storage("sessionStorage disabled".to_owned()))
}

impl SessionStore for BrowserSessionStorage {
    fn set(&self, key: &str, value: &str) -> Result<(), LoginError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| LoginError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(LoginError::Unavailable)
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-memory store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, key: &str, value: &str) -> Result<(), LoginError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}
