//! Thin wrappers over blocking browser dialogs and navigation

/// Show a blocking `window.alert`
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, alert dropped: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("alert failed: {:?}", e);
    }
}

/// Reload the current page so freshly created records are reflected
pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("page reload failed: {:?}", e);
    }
}
