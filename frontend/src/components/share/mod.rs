//! Share buttons (`.share[data-url][data-title]`).

use common::share::{share, SharePlatform, ShareTarget};
use gloo_events::EventListener;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::context::PanelContext;
use crate::helpers::{collect_elements, show_toast};

/// `navigator.share` when the browser has it, `navigator.clipboard` plus a toast otherwise.
pub struct BrowserShare {
    window: Window,
}

impl BrowserShare {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn native_share(&self) -> Option<Function> {
        Reflect::get(&self.window.navigator(), &JsValue::from_str("share"))
            .ok()
            .and_then(|share| share.dyn_into::<Function>().ok())
    }
}

impl SharePlatform for BrowserShare {
    fn can_share(&self) -> bool {
        self.native_share().is_some()
    }

    fn share(&self, target: &ShareTarget) {
        let Some(native) = self.native_share() else {
            return;
        };
        let data = Object::new();
        let _ = Reflect::set(&data, &"url".into(), &JsValue::from_str(&target.url));
        let _ = Reflect::set(&data, &"title".into(), &JsValue::from_str(&target.title));

        match native.call1(&self.window.navigator(), &data) {
            Ok(promise) => {
                let promise: Promise = promise.unchecked_into();
                wasm_bindgen_futures::spawn_local(async move {
                    // Rejected when the user dismisses the share sheet.
                    if let Err(err) = JsFuture::from(promise).await {
                        gloo_console::log!("Share cancelled:", err);
                    }
                });
            }
            Err(err) => gloo_console::error!("navigator.share failed:", err),
        }
    }

    fn copy_to_clipboard(&self, text: &str) {
        let promise = self.window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                gloo_console::warn!("Could not copy link to clipboard:", err);
            }
        });
    }

    fn notify(&self, message: &str) {
        show_toast(message);
    }
}

/// Binds every share button that declares a `data-url`. Returns how many were bound.
pub fn bind_share_buttons(ctx: &PanelContext) -> usize {
    let mut bound = 0;
    for button in collect_elements(ctx.document.query_selector_all(".share")) {
        let Some(target) = ShareTarget::from_attributes(
            button.get_attribute("data-url"),
            button.get_attribute("data-title"),
        ) else {
            continue;
        };
        let platform = BrowserShare::new(ctx.window.clone());
        EventListener::new(&button, "click", move |_| {
            share(&platform, &target);
        })
        .forget();
        bound += 1;
    }
    bound
}
