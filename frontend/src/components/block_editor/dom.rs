//! Reading blocks and form fields out of the live DOM.

use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use common::error::BlockError;
use common::model::block::Block;
use common::model::sequence::BlockSequence;

use crate::error::EditorError;
use crate::helpers::collect_elements;

pub const EDITOR_SELECTOR: &str = ".block-editor";
pub const BLOCK_SELECTOR: &str = ":scope > .block";
pub const BLOCK_TYPE_ATTRIBUTE: &str = "data-block-type";

/// Reads a rendered block node back into a [`Block`].
///
/// The kind comes from `data-block-type`, each field from the value of the node's `.{field}`
/// control (or its text for non-form elements).
pub fn serialize_block(element: &Element) -> Result<Block, EditorError> {
    let tag = element
        .get_attribute(BLOCK_TYPE_ATTRIBUTE)
        .ok_or_else(|| BlockError::UnknownKind(String::new()))?;
    Ok(Block::from_fields(&tag, |field| read_field(element, field))?)
}

/// Hydrates every direct `.block` child of `host`, in document order.
pub fn read_blocks(host: &Element) -> Result<BlockSequence, EditorError> {
    collect_elements(host.query_selector_all(BLOCK_SELECTOR))
        .iter()
        .map(serialize_block)
        .collect()
}

/// Enumerates the named, non-file fields of `form` in document order.
pub fn form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, EditorError> {
    let data = FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(Vec::new());
    };

    let mut fields = Vec::new();
    for entry in entries {
        let entry: js_sys::Array = entry?.unchecked_into();
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(fields)
}

fn read_field(element: &Element, field: &str) -> Option<String> {
    let control = element.query_selector(&format!(".{field}")).ok().flatten()?;

    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(textarea) = control.dyn_ref::<HtmlTextAreaElement>() {
        Some(textarea.value())
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        control.text_content()
    }
}
