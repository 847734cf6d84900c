//! Post-sign-in return path kept in `sessionStorage`.
//!
//! The copy in `AuthState` is lost on a full page load, and social sign-in
//! leaves the app entirely. The stored copy is read back once at startup and
//! cleared when the login page consumes it. It still passes through
//! `safe_return_path` on use, so a tampered entry only ever leads home.

#[cfg(test)]
#[path = "return_path_test.rs"]
mod return_path_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "loanlink-return-to";

/// Stored value -> path. Blank entries count as absent.
pub fn parse_stored(raw: Option<String>) -> Option<String> {
    raw.map(|path| path.trim().to_owned()).filter(|path| !path.is_empty())
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        parse_stored(session_storage()?.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn store(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(STORAGE_KEY, path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
