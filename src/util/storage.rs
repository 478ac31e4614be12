//! Credential and session-flag storage.
//!
//! Two durable values live in `localStorage`: the access and refresh
//! bearer tokens. Ephemeral one-shot markers live in `sessionStorage` so
//! they are scoped to the tab. All operations are synchronous and
//! immediately consistent within a tab; no cross-tab synchronization is
//! attempted.
//!
//! Non-browser builds (native tests, SSR) fall back to thread-local
//! in-memory maps with the same semantics, so the auth controller and
//! renewal logic are testable without a DOM.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// The two durable credential slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn key(self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
        }
    }
}

/// Tab-scoped markers.
///
/// `JustLoggedIn` and `JustRegistered` are one-shot: the producer writes
/// them and the next consumer takes them with [`take_flag`], which deletes
/// on read. `SeenSession` marks that this tab completed a login at some
/// point and is read non-destructively to pick the "session expired" vs
/// "authentication required" wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    JustLoggedIn,
    JustRegistered,
    SeenSession,
}

impl Flag {
    fn key(self) -> &'static str {
        match self {
            Self::JustLoggedIn => "justLoggedIn",
            Self::JustRegistered => "justRegistered",
            Self::SeenSession => "isAuthenticated",
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod fallback {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        pub static LOCAL: RefCell<HashMap<&'static str, String>> = RefCell::new(HashMap::new());
        pub static SESSION: RefCell<HashMap<&'static str, String>> = RefCell::new(HashMap::new());
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read a stored bearer token.
pub fn token(kind: TokenKind) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(kind.key()).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::LOCAL.with(|m| m.borrow().get(kind.key()).cloned())
    }
}

/// Store a bearer token, replacing any previous value.
pub fn set_token(kind: TokenKind, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(kind.key(), value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::LOCAL.with(|m| {
            m.borrow_mut().insert(kind.key(), value.to_owned());
        });
    }
}

/// Delete one stored token.
pub fn clear_token(kind: TokenKind) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(kind.key());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::LOCAL.with(|m| {
            m.borrow_mut().remove(kind.key());
        });
    }
}

/// Delete both stored tokens.
pub fn clear_tokens() {
    clear_token(TokenKind::Access);
    clear_token(TokenKind::Refresh);
}

/// Raise a tab-scoped flag.
pub fn set_flag(flag: Flag) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(flag.key(), "true");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::SESSION.with(|m| {
            m.borrow_mut().insert(flag.key(), "true".to_owned());
        });
    }
}

/// Consume a one-shot flag: returns whether it was set, deleting it.
pub fn take_flag(flag: Flag) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return false;
        };
        let present = matches!(storage.get_item(flag.key()), Ok(Some(_)));
        if present {
            let _ = storage.remove_item(flag.key());
        }
        present
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::SESSION.with(|m| m.borrow_mut().remove(flag.key()).is_some())
    }
}

/// Check a flag without consuming it.
pub fn flag_is_set(flag: Flag) -> bool {
    #[cfg(feature = "hydrate")]
    {
        session_storage().is_some_and(|s| matches!(s.get_item(flag.key()), Ok(Some(_))))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback::SESSION.with(|m| m.borrow().contains_key(flag.key()))
    }
}
