//! Page-level handles resolved once at load time and handed to every component.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTemplateElement, Window};

use crate::error::SetupError;

/// Template the synthesized dialogs are cloned from.
pub const DIALOG_TEMPLATE: &str = "template#dialog-template";

/// Container synthesized dialogs are appended to.
pub const DIALOGS_CONTAINER: &str = ".dialogs-go-here";

pub struct PanelContext {
    pub window: Window,
    pub document: Document,
    dialog_template: Option<HtmlTemplateElement>,
    dialogs_container: Option<Element>,
}

impl PanelContext {
    pub fn resolve() -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let dialog_template = document
            .query_selector(DIALOG_TEMPLATE)?
            .map(|element| element.dyn_into::<HtmlTemplateElement>())
            .transpose()
            .map_err(|_| SetupError::WrongElement(DIALOG_TEMPLATE.to_string()))?;
        let dialogs_container = document.query_selector(DIALOGS_CONTAINER)?;

        Ok(Self {
            window,
            document,
            dialog_template,
            dialogs_container,
        })
    }

    /// Whether the page wants synthesized dialogs at all.
    pub fn synthesizes_dialogs(&self) -> bool {
        self.dialogs_container.is_some()
    }

    pub fn dialog_template(&self) -> Result<&HtmlTemplateElement, SetupError> {
        self.dialog_template
            .as_ref()
            .ok_or_else(|| SetupError::MissingElement(DIALOG_TEMPLATE.to_string()))
    }

    pub fn dialogs_container(&self) -> Result<&Element, SetupError> {
        self.dialogs_container
            .as_ref()
            .ok_or_else(|| SetupError::MissingElement(DIALOGS_CONTAINER.to_string()))
    }
}
