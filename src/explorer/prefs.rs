//! User preference persistence over localStorage.
//!
//! Two flags survive across sessions: disclaimer acceptance and the dark
//! mode choice. Storage being unavailable (disabled, private browsing)
//! degrades to defaults; nothing here can fail loudly.

#[cfg(target_arch = "wasm32")]
const CONSENT_KEY: &str = "career_explorer_disclaimer_accepted";
#[cfg(target_arch = "wasm32")]
const DARK_MODE_KEY: &str = "career_explorer_dark_mode";

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn read_flag(key: &str) -> bool {
    match storage() {
        Some(storage) => matches!(storage.get_item(key), Ok(Some(value)) if value == "true"),
        None => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn write_flag(key: &str, value: bool) {
    if let Some(storage) = storage() {
        if let Err(err) = storage.set_item(key, if value { "true" } else { "false" }) {
            web_sys::console::warn_1(
                &format!("career explorer: could not persist {key}: {err:?}").into(),
            );
        }
    }
}

/// Whether the disclaimer has been accepted in a previous session.
pub fn has_consented() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        read_flag(CONSENT_KEY)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

pub fn record_consent() {
    #[cfg(target_arch = "wasm32")]
    write_flag(CONSENT_KEY, true);
}

pub fn dark_mode() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        read_flag(DARK_MODE_KEY)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

pub fn set_dark_mode(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    write_flag(DARK_MODE_KEY, enabled);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = enabled;
}
