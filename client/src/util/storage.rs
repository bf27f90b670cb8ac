//! Session marker persistence in `localStorage`.
//!
//! The marker is the signed-in user serialized as JSON. Outside the browser
//! every call is a no-op and reads return `None`.

use crate::net::types::User;

/// Read and decode the stored session user. Corrupt entries read as `None`.
pub fn read_session(key: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("discarding unreadable session marker: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `user` as the session marker, or remove the marker when `None`.
pub fn write_session(key: &str, user: Option<&User>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(json) => {
                    let _ = storage.set_item(key, &json);
                }
                Err(e) => log::warn!("failed to encode session marker: {e}"),
            },
            None => {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, user);
    }
}
