//! Bearer token persistence.
//!
//! The access token is the only client-persisted state: one opaque string
//! under a single localStorage key. Code that needs the token goes through
//! the [`TokenStore`] trait so the login/logout flows can be exercised with
//! an in-memory store in tests; the browser implementation wraps
//! `window.localStorage` and requires the `hydrate` feature.

use thiserror::Error;

/// localStorage key holding the bearer token.
pub const STORAGE_KEY: &str = "cineverse_access_token";

/// Failure writing to or clearing persistent storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("storage rejected the operation")]
    Rejected,
}

/// Read/write/clear access to the persisted bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Read the bearer token directly from localStorage.
///
/// Used on every outgoing request so a token refreshed between view loads is
/// honored. Returns `None` outside a browser or when no token is stored.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `TokenStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn get(&self) -> Option<String> {
        read()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError::Unavailable)?;
            storage
                .set_item(STORAGE_KEY, token)
                .map_err(|_| StoreError::Rejected)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StoreError::Unavailable)?;
            storage
                .remove_item(STORAGE_KEY)
                .map_err(|_| StoreError::Rejected)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}
