//! Modal dialog wiring.
//!
//! Dialogs either already exist in the page markup, keyed by a shared identifier, or are
//! synthesized from `<template id="dialog-template">` and a [`DialogDescriptor`]. Either way a
//! trigger click opens the dialog modally and its close button closes it without submitting the
//! dialog form.

use common::error::DialogError;
use common::model::dialog::{DialogDescriptor, DialogTarget, InputDescriptor};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentFragment, Element, HtmlDialogElement};

use crate::context::PanelContext;
use crate::error::SetupError;
use crate::helpers::collect_elements;

const CLOSE_BUTTON: &str = ".btn.close-dialog";

/// Wires every dialog already present in the markup.
///
/// Two conventions are recognised: `data-dialog-button="x"` paired with `data-dialog-box="x"`,
/// and `.show-dialog#x` paired with `#dialog-x` and close button `#close-x`. Triggers whose
/// dialog is not in the markup are skipped, their dialog is synthesized later.
pub fn wire_markup_dialogs(ctx: &PanelContext) -> Result<usize, SetupError> {
    let mut wired = 0;

    for trigger in collect_elements(ctx.document.query_selector_all("[data-dialog-button]")) {
        let Some(id) = trigger.get_attribute("data-dialog-button") else {
            continue;
        };
        let selector = format!("[data-dialog-box=\"{id}\"]");
        let Some(dialog) = ctx.document.query_selector(&selector)? else {
            continue;
        };
        let dialog = as_dialog(dialog, &selector)?;
        let close = required(dialog.query_selector(CLOSE_BUTTON), CLOSE_BUTTON)?;
        bind_dialog(&trigger, &dialog, &close);
        wired += 1;
    }

    for trigger in collect_elements(ctx.document.query_selector_all(".show-dialog")) {
        let id = trigger.id();
        if id.is_empty() {
            continue;
        }
        let dialog_id = format!("dialog-{id}");
        let dialog = ctx
            .document
            .get_element_by_id(&dialog_id)
            .ok_or_else(|| SetupError::MissingElement(format!("#{dialog_id}")))?;
        let dialog = as_dialog(dialog, &dialog_id)?;
        let close_id = format!("close-{id}");
        let close = ctx
            .document
            .get_element_by_id(&close_id)
            .ok_or_else(|| SetupError::MissingElement(format!("#{close_id}")))?;
        bind_dialog(&trigger, &dialog, &close);
        wired += 1;
    }

    Ok(wired)
}

/// Builds the dialog described by `descriptor`, appends it to the dialogs container and hooks
/// it up to its trigger button.
///
/// The trigger must exist and carry both `data-dialog-method` and `data-dialog-action`.
pub fn create_dialog(
    ctx: &PanelContext,
    descriptor: &DialogDescriptor,
) -> Result<HtmlDialogElement, SetupError> {
    let trigger = ctx
        .document
        .query_selector(&format!("[data-dialog-button=\"{}\"]", descriptor.id))?
        .ok_or_else(|| DialogError::MissingTrigger(descriptor.id.clone()))?;
    let target = DialogTarget::from_attributes(
        &descriptor.id,
        trigger.get_attribute("data-dialog-method"),
        trigger.get_attribute("data-dialog-action"),
    )?;

    let fragment: DocumentFragment = ctx
        .dialog_template()?
        .content()
        .clone_node_with_deep(true)?
        .dyn_into()
        .map_err(|_| SetupError::WrongElement("dialog template content".into()))?;
    let dialog = as_dialog(required(fragment.query_selector("dialog"), "dialog")?, "dialog")?;
    dialog.set_attribute("data-dialog-box", &descriptor.id)?;

    let form = required(dialog.query_selector("form"), "form")?;
    form.set_attribute("method", target.method.as_str())?;
    form.set_attribute("action", &target.action)?;

    let prompt = ctx.document.create_element("h2")?;
    prompt.set_attribute("slot", "prompt")?;
    prompt.set_attribute("icon", &descriptor.prompt_icon)?;
    prompt.set_text_content(Some(&descriptor.prompt));
    dialog.append_child(&prompt)?;

    for input in &descriptor.inputs {
        let input = build_input(&ctx.document, input)?;
        form.append_child(&input)?;
    }

    let close = required(dialog.query_selector(CLOSE_BUTTON), CLOSE_BUTTON)?;
    bind_dialog(&trigger, &dialog, &close);

    dialog.append_child(&form)?;
    ctx.dialogs_container()?.append_child(&dialog)?;

    Ok(dialog)
}

fn build_input(document: &Document, input: &InputDescriptor) -> Result<Element, SetupError> {
    let element = match input.kind.input_type() {
        Some(input_type) => {
            let element = document.create_element("input")?;
            element.set_attribute("type", input_type)?;
            element
        }
        None => document.create_element("textarea")?,
    };
    if let Some(placeholder) = &input.placeholder {
        element.set_attribute("placeholder", placeholder)?;
    }
    element.set_attribute("name", &input.name)?;
    element.set_id(&input.name);
    Ok(element)
}

fn bind_dialog(trigger: &Element, dialog: &HtmlDialogElement, close: &Element) {
    let opened = dialog.clone();
    EventListener::new(trigger, "click", move |_| {
        if let Err(err) = opened.show_modal() {
            gloo_console::error!("Could not open dialog:", err);
        }
    })
    .forget();

    let closed = dialog.clone();
    EventListener::new_with_options(
        close,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            closed.close();
        },
    )
    .forget();
}

fn required(found: Result<Option<Element>, JsValue>, selector: &str) -> Result<Element, SetupError> {
    found?.ok_or_else(|| SetupError::MissingElement(selector.to_string()))
}

fn as_dialog(element: Element, selector: &str) -> Result<HtmlDialogElement, SetupError> {
    element
        .dyn_into()
        .map_err(|_| SetupError::WrongElement(selector.to_string()))
}
