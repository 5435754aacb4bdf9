use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the bearer token.
#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "jwt_token";

/// Single-slot credential store. Presence of a token is the only local
/// signal of "authenticated"; no expiry is checked here, a stale token is
/// discovered when the backend rejects it.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Token store backed by `window.localStorage`.
///
/// Off-browser (server-side rendering, native tests) every operation is a
/// safe no-op and `get` returns `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        None
    }

    fn set(&self, _token: &str) {}

    fn clear(&self) {}
}

/// In-memory token slot for tests and non-browser callers.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_iff_token_set_and_not_cleared() {
        let session = MemorySession::new();
        assert!(!session.is_authenticated());

        session.set("tok");
        assert!(session.is_authenticated());
        assert_eq!(session.get().as_deref(), Some("tok"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.get(), None);
    }

    #[test]
    fn set_overwrites_the_single_slot() {
        let session = MemorySession::new();
        session.set("first");
        session.set("second");
        assert_eq!(session.get().as_deref(), Some("second"));
    }

    #[test]
    fn clones_share_the_same_slot() {
        let session = MemorySession::new();
        let other = session.clone();
        session.set("tok");
        assert_eq!(other.get().as_deref(), Some("tok"));
        other.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn browser_session_is_a_no_op_off_browser() {
        let session = BrowserSession;
        session.set("tok");
        assert_eq!(session.get(), None);
        assert!(!session.is_authenticated());
        session.clear();
    }
}
