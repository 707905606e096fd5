//! Token Storage
//!
//! The session token is the only thing persisted in the browser.

use web_sys::Storage;

use crate::config::TOKEN_STORAGE_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    let Some(storage) = local_storage() else {
        tracing::warn!("localStorage unavailable, token not saved");
        return;
    };
    if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token) {
        tracing::warn!(error = ?e, "failed to save token");
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
            tracing::warn!(error = ?e, "failed to clear token");
        }
    }
}
