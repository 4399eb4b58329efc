//! Credential store — the persisted access/refresh token pair.
//!
//! Tokens are opaque strings kept under flat keys in `localStorage` so a
//! session survives page reloads within the origin. The session state machine
//! is the only writer; authenticated request helpers read the access token to
//! build bearer headers. Unavailable storage (disabled, SSR) is never an
//! error — it reads as "no credentials".
//!
//! Native test builds swap `localStorage` for a thread-local map so session
//! flows can stage stored tokens. The test harness runs each test on its own
//! thread, which keeps the staged state isolated per test.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The persisted token pair. Both tokens are opaque — nothing in the client
/// inspects their content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
thread_local! {
    static TEST_STORE: RefCell<HashMap<&'static str, String>> = RefCell::new(HashMap::new());
}

#[cfg(all(feature = "hydrate", not(test)))]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist both tokens. A failed write degrades to an unauthenticated
/// next reload, which the startup check already handles.
pub fn save(pair: &CredentialPair) {
    #[cfg(test)]
    {
        TEST_STORE.with(|store| {
            let mut store = store.borrow_mut();
            store.insert(ACCESS_TOKEN_KEY, pair.access_token.clone());
            store.insert(REFRESH_TOKEN_KEY, pair.refresh_token.clone());
        });
    }
    #[cfg(all(feature = "hydrate", not(test)))]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &pair.access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &pair.refresh_token);
        }
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = pair;
    }
}

/// Read the stored pair, or `None` if either token is missing or storage is
/// unavailable.
pub fn read() -> Option<CredentialPair> {
    #[cfg(test)]
    {
        TEST_STORE.with(|store| {
            let store = store.borrow();
            Some(CredentialPair {
                access_token: store.get(ACCESS_TOKEN_KEY)?.clone(),
                refresh_token: store.get(REFRESH_TOKEN_KEY)?.clone(),
            })
        })
    }
    #[cfg(all(feature = "hydrate", not(test)))]
    {
        let storage = storage()?;
        let access_token = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
        let refresh_token = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten()?;
        Some(CredentialPair { access_token, refresh_token })
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        None
    }
}

/// Read just the access token, for bearer headers and the startup check.
pub fn access_token() -> Option<String> {
    #[cfg(test)]
    {
        TEST_STORE.with(|store| store.borrow().get(ACCESS_TOKEN_KEY).cloned())
    }
    #[cfg(all(feature = "hydrate", not(test)))]
    {
        storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        None
    }
}

/// Read just the refresh token.
pub fn refresh_token() -> Option<String> {
    #[cfg(test)]
    {
        TEST_STORE.with(|store| store.borrow().get(REFRESH_TOKEN_KEY).cloned())
    }
    #[cfg(all(feature = "hydrate", not(test)))]
    {
        storage()?.get_item(REFRESH_TOKEN_KEY).ok().flatten()
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        None
    }
}

/// Remove both tokens. Runs on logout, on startup-check failure, and when a
/// protected call resolves to an unrecoverable 401.
pub fn clear() {
    #[cfg(test)]
    {
        TEST_STORE.with(|store| store.borrow_mut().clear());
    }
    #[cfg(all(feature = "hydrate", not(test)))]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
