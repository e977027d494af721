//! Browser Helpers
//!
//! Thin wrappers over window APIs: URL query handling, file download,
//! file reading and confirmation dialogs.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Return whether `param` is in the page URL, removing it if so
pub fn take_query_flag(param: &str) -> bool {
    let Some(window) = web_sys::window() else { return false; };
    let Ok(href) = window.location().href() else { return false; };
    let Ok(url) = web_sys::Url::new(&href) else { return false; };

    let params = url.search_params();
    if !params.has(param) {
        return false;
    }
    params.delete(param);
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href()));
    }
    true
}

/// Offer `content` as a JSON file download
pub fn download_json(file_name: &str, content: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Read a picked file as text
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let value = JsFuture::from(file.text()).await.map_err(|e| format!("{:?}", e))?;
    value.as_string().ok_or_else(|| "file content is not text".to_string())
}

/// Native confirm dialog; `false` when unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
