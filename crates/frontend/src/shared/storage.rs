//! Доступ к localStorage. Ошибки браузера игнорируются: без хранилища
//! сайт работает с настройками по умолчанию.

use web_sys::window;

pub fn load_item(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn save_item(key: &str, value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist '{}' to localStorage", key);
        }
    }
}
