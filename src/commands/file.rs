//! File Commands
//!
//! Reading user-selected files.

use wasm_bindgen_futures::JsFuture;

/// Read a user-selected file as UTF-8 text
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let name = file.name();
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", name, e))?;
    value
        .as_string()
        .ok_or_else(|| format!("{} did not produce text", name))
}
