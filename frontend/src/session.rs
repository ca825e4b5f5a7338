use web_sys::{window, Storage};

fn session_storage() -> Option<Storage> {
    window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn get_flag(key: &str) -> Option<String> {
    session_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_flag(key: &str, value: &str) {
    match session_storage() {
        Some(storage) => {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("could not store {}: {:?}", key, err);
            }
        }
        None => log::debug!("no session storage, {} not kept", key),
    }
}
