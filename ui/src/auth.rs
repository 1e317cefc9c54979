//! Token persistence. The token is read once at startup (and written at
//! login); everything else gets it from the session in the store.

const TOKEN_STORAGE_KEY: &str = "shelfshare_admin_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage()
        && storage.set_item(TOKEN_STORAGE_KEY, token).is_err()
    {
        tracing::warn!("failed to persist session token");
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
