//! Small DOM utilities shared by the control panel components.
//!
//! - **Notifications**: a blocking `alert` for errors that stop an action and a transient toast
//!   for confirmations.
//! - **Queries**: turning `NodeList` results into element vectors.
//! - **Dirty tracking**: MD5 fingerprints and the global `app_dirty` flag.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList};

/// Shows a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            gloo_console::warn!("Could not show alert:", message);
        }
    }
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` and removed again after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        html_toast.remove();
                    });
                }
            }
        }
    }
}

/// Collects the elements of a `querySelectorAll` result. A failed query yields nothing.
pub fn collect_elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Hex MD5 digest, used to detect unsaved changes.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Mirrors the unsaved-changes state into `window.app_dirty`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_is_hex_encoded() {
        assert_eq!(compute_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
