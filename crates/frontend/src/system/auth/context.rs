use leptos::prelude::*;

use super::storage::{LocalTokenStore, TokenStore};
use crate::shared::api_client::ApiClient;
use crate::shared::config::AppConfig;

/// Who is signed in. Only the bearer token is known client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Picks up a token persisted by an earlier visit.
    pub fn restore(store: &dyn TokenStore) -> Self {
        Self {
            token: store.load().filter(|t| !t.trim().is_empty()),
        }
    }

    /// Returns `false` and leaves the session untouched for a blank token.
    pub fn login(&mut self, store: &dyn TokenStore, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        store.save(token);
        self.token = Some(token.to_string());
        true
    }

    pub fn logout(&mut self, store: &dyn TokenStore) {
        store.clear();
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session plus configuration, provided once at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    config: StoredValue<AppConfig>,
}

impl SessionContext {
    pub fn new(config: AppConfig) -> Self {
        let session = Session::restore(&LocalTokenStore);
        log::debug!("session restored, authenticated: {}", session.is_authenticated());
        Self {
            session: RwSignal::new(session),
            config: StoredValue::new(config),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// Client carrying the current token; build one per request or screen.
    pub fn client(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token().map(str::to_string));
        let base = self.config.with_value(|c| c.api_base.clone());
        ApiClient::new(base, token)
    }

    pub fn login(&self, token: &str) -> bool {
        let accepted = self
            .session
            .try_update(|s| s.login(&LocalTokenStore, token))
            .unwrap_or(false);
        if accepted {
            log::info!("signed in");
        }
        accepted
    }

    pub fn logout(&self) {
        self.session.update(|s| s.logout(&LocalTokenStore));
        log::info!("signed out");
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryTokenStore;

    #[test]
    fn test_restore_from_store() {
        let store = MemoryTokenStore::with_token("abc");
        let session = Session::restore(&store);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));

        let empty = MemoryTokenStore::default();
        assert!(!Session::restore(&empty).is_authenticated());
    }

    #[test]
    fn test_login_and_logout_persist() {
        let store = MemoryTokenStore::default();
        let mut session = Session::default();

        assert!(!session.login(&store, "   "));
        assert!(!session.is_authenticated());

        assert!(session.login(&store, "tok-1"));
        assert_eq!(store.load().as_deref(), Some("tok-1"));

        session.logout(&store);
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_client_gets_bearer_from_token() {
        let store = MemoryTokenStore::with_token("tok-2");
        let session = Session::restore(&store);
        let client = ApiClient::new("https://api.example", session.token().map(str::to_string));
        assert_eq!(client.authorization().as_deref(), Some("Bearer tok-2"));
    }
}
