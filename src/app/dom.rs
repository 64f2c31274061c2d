//! Browser-only measurements and side effects.

use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollToOptions, Url,
};

use crate::{
    content::profile,
    motion::{anchor_target, SectionDescriptor},
    resume::{self, RESUME_FILE_NAME},
};

fn section_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

pub fn viewport_size() -> (f64, f64) {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64());
    let height = w.inner_height().ok().and_then(|v| v.as_f64());
    (width.unwrap_or_default(), height.unwrap_or_default())
}

/// Layout of every listed section currently in the document.
pub fn measure_sections<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionDescriptor> {
    ids.into_iter()
        .filter_map(|id| {
            let el = section_element(id)?;
            Some(SectionDescriptor::new(
                id,
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            ))
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = section_element(id) else {
        log::debug!("no section #{id} to scroll to");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(anchor_target(f64::from(el.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Offers `text` to the user as a file download.
pub fn download_text(file_name: &str, text: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let bag = BlobPropertyBag::new();
    bag.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    // The object URL is released whether or not the click went through.
    let clicked = click_download(&url, file_name);
    let revoked = Url::revoke_object_url(&url);
    clicked.and(revoked)
}

fn click_download(url: &str, file_name: &str) -> Result<(), JsValue> {
    let doc = document();
    let anchor: HtmlAnchorElement = doc.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    let body = doc.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

pub fn download_resume() -> Result<(), JsValue> {
    let today = chrono::Local::now().date_naive();
    let text = resume::render(profile(), today);
    download_text(RESUME_FILE_NAME, &text)
}
