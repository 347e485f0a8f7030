//! Saving an [`api::Export`] on the user's machine.

use api::Export;

/// How long an export's object URL outlives the click that downloads it.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
const REVOKE_DELAY_MS: u32 = 1_000;

/// Offer the export as a browser download.
///
/// Builds a `Blob` from the bytes, points a temporary `<a download>` at an
/// object URL for it, clicks it, and revokes the URL once the browser has
/// had a moment to pick it up.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn save_export(export: &Export) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let bytes = js_sys::Uint8Array::from(export.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &export.content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&export.filename);
    anchor.click();

    // The download starts asynchronously; keep the URL alive until it has.
    crate::spawn_detached(async move {
        gloo_timers::future::TimeoutFuture::new(REVOKE_DELAY_MS).await;
        let _ = web_sys::Url::revoke_object_url(&url);
    });
    Ok(())
}

/// Native builds have nowhere to put a download.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn save_export(export: &Export) -> Result<(), String> {
    tracing::warn!(
        filename = %export.filename,
        bytes = export.bytes.len(),
        "export downloads are only available in the browser"
    );
    Err("downloads are only available in the browser".to_string())
}
