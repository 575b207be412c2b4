//! Theme persistence: a single string in `localStorage`. Failures are logged
//! and otherwise ignored.

use crate::constants::THEME_STORAGE_KEY;
use crate::theme::Theme;
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    match web::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("[theme] localStorage unavailable: {:?}", e);
            None
        }
    }
}

pub fn load_theme() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let theme = Theme::from_stored(stored.as_deref());
    log::info!("[theme] loaded {}", theme.as_str());
    theme
}

pub fn save_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("[theme] save failed: {:?}", e);
    }
}
