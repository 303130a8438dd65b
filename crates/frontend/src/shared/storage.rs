use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a value from localStorage
pub fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Save a value to localStorage
pub fn save(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}
