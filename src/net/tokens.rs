//! Persisted session credentials: the access/refresh token pair.
//!
//! Tokens live in browser `localStorage` under fixed keys and survive
//! reloads within one browser profile. No expiry is tracked client-side;
//! an expired access token is discovered reactively via a 401. The store
//! is a trait so the gateway can be exercised against an in-memory
//! implementation in tests.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::cell::RefCell;

/// Storage key for the short-lived bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the longer-lived refresh credential.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Which of the two session tokens is being addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            TokenKind::Access => ACCESS_TOKEN_KEY,
            TokenKind::Refresh => REFRESH_TOKEN_KEY,
        }
    }
}

/// Narrow read/write interface over the persisted token pair.
pub trait TokenStore {
    fn get(&self, kind: TokenKind) -> Option<String>;
    fn set(&self, kind: TokenKind, value: &str);
    /// Remove both tokens.
    fn clear(&self);
}

/// `localStorage`-backed store used in the browser build. Storage errors
/// degrade to "absent"; they never surface to callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "csr")]
impl TokenStore for BrowserTokens {
    fn get(&self, kind: TokenKind) -> Option<String> {
        local_storage()?.get_item(kind.storage_key()).ok()?
    }

    fn set(&self, kind: TokenKind, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(kind.storage_key(), value);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(not(feature = "csr"))]
impl TokenStore for BrowserTokens {
    fn get(&self, kind: TokenKind) -> Option<String> {
        let _ = kind;
        None
    }

    fn set(&self, kind: TokenKind, value: &str) {
        let _ = (kind, value);
    }

    fn clear(&self) {}
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with both tokens already present.
    pub fn with_pair(access: &str, refresh: &str) -> Self {
        let store = Self::new();
        store.set(TokenKind::Access, access);
        store.set(TokenKind::Refresh, refresh);
        store
    }
}

impl TokenStore for MemoryTokens {
    fn get(&self, kind: TokenKind) -> Option<String> {
        match kind {
            TokenKind::Access => self.access.borrow().clone(),
            TokenKind::Refresh => self.refresh.borrow().clone(),
        }
    }

    fn set(&self, kind: TokenKind, value: &str) {
        match kind {
            TokenKind::Access => *self.access.borrow_mut() = Some(value.to_owned()),
            TokenKind::Refresh => *self.refresh.borrow_mut() = Some(value.to_owned()),
        }
    }

    fn clear(&self) {
        *self.access.borrow_mut() = None;
        *self.refresh.borrow_mut() = None;
    }
}
