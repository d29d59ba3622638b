//! Copying cell values to the system clipboard (Web Clipboard API)

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copies `text` and calls `on_copied` once the browser confirms the write.
/// Failures (permission denied, insecure context) are logged.
pub fn copy_to_clipboard<F>(text: &str, on_copied: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_copied(),
            Err(e) => log::warn!("Clipboard write failed: {:?}", e),
        }
    });
}
