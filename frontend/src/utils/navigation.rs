/// Full-page navigation; the destination re-runs the session check.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}

/// Like [`redirect`] but leaves no history entry, so Back skips the guarded page.
#[cfg(target_arch = "wasm32")]
pub fn replace(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace(path: &str) {
    log::debug!("replace with {} skipped outside the browser", path);
}
