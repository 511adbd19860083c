use std::cell::RefCell;
use web_sys::window;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Where the session token survives page reloads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage`.
pub struct LocalTokenStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("could not persist the session token");
                }
            }
            None => log::warn!("localStorage is unavailable; session will not survive reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// In-process store for tests.
#[derive(Default)]
pub struct MemoryTokenStore(RefCell<Option<String>>);

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self(RefCell::new(Some(token.to_string())))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
