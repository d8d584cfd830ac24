//! Clipboard utilities for copying text
//!
//! Thin wrapper over the Web Clipboard API. Write-only, plain text.

use wasm_bindgen::JsValue;

/// Copy text to the system clipboard
///
/// Suspends on the Clipboard API promise, so permission prompts never
/// block other page interactions.
///
/// # Returns
/// * `Ok(())` if the text was successfully copied
/// * `Err(JsValue)` if the environment rejected the write
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();
    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}
