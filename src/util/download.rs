//! Hand fetched file bytes to the browser, as a download or a new tab.
//!
//! Both helpers wrap the bytes in a `Blob`, point an object URL at it and
//! release the URL again. Outside the browser they fail with a message.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Save `bytes` under `filename` through a temporary `<a download>` link.
///
/// # Errors
///
/// Returns a description of the DOM call that failed.
pub fn save_bytes(bytes: &[u8], content_type: Option<&str>, filename: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = object_url(bytes, content_type)?;
        let result = click_link(&url, |a| a.set_download(filename));
        let _ = web_sys::Url::revoke_object_url(&url);
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, content_type, filename);
        Err("downloads require a browser".to_owned())
    }
}

/// Open `bytes` in a new browser tab.
///
/// The object URL is not revoked, since the new tab still reads from it.
///
/// # Errors
///
/// Returns a description of the DOM call that failed.
pub fn open_bytes(bytes: &[u8], content_type: Option<&str>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = object_url(bytes, content_type)?;
        click_link(&url, |a| {
            a.set_target("_blank");
            a.set_rel("noopener");
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, content_type);
        Err("previews require a browser".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn object_url(bytes: &[u8], content_type: Option<&str>) -> Result<String, String> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob: {e:?}"))?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("object url: {e:?}"))
}

#[cfg(feature = "hydrate")]
fn click_link(url: &str, configure: impl FnOnce(&web_sys::HtmlAnchorElement)) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("create link: {e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "link is not an anchor")?;
    anchor.set_href(url);
    configure(&anchor);
    anchor.click();
    Ok(())
}
