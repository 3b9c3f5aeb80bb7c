//! Rich-text toolbars of `.editor` sections.
//!
//! Each `.editor` holds an `.actions` bar of icon buttons, a contenteditable `.textbox` and the
//! counters `#char-count`, `#char-count-no-ws` and `#word-count`.

use common::editing::{EditCommand, KeyChord, TextStats, IMAGE_PROMPT};
use gloo_events::{EventListener, EventListenerOptions};
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement, KeyboardEvent, Window};

use crate::context::PanelContext;
use crate::error::SetupError;
use crate::helpers::collect_elements;

/// Binds every `.editor` on the page. Returns how many were bound.
pub fn bind_rich_text_editors(ctx: &PanelContext) -> Result<usize, SetupError> {
    let editors = collect_elements(ctx.document.query_selector_all(".editor"));
    if editors.is_empty() {
        return Ok(0);
    }

    let document: HtmlDocument = ctx
        .document
        .clone()
        .dyn_into()
        .map_err(|_| SetupError::WrongElement("document".into()))?;
    document.exec_command_with_show_ui_and_value("defaultParagraphSeparator", false, "p")?;

    for editor in &editors {
        bind_editor(&document, &ctx.window, editor)?;
    }
    Ok(editors.len())
}

fn bind_editor(document: &HtmlDocument, window: &Window, editor: &Element) -> Result<(), SetupError> {
    let textbox: HtmlElement = editor
        .query_selector(".textbox")?
        .ok_or_else(|| SetupError::MissingElement(".editor .textbox".into()))?
        .dyn_into()
        .map_err(|_| SetupError::WrongElement(".textbox".into()))?;

    if let Some(actions) = editor.query_selector(".actions")? {
        for command in EditCommand::TOOLBAR {
            let Some(button) = actions.query_selector(&format!("[icon=\"{}\"]", command.icon()))? else {
                continue;
            };
            let (document, window, textbox) = (document.clone(), window.clone(), textbox.clone());
            EventListener::new_with_options(
                &button,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    textbox.focus().ok();
                    run_command(&document, &window, command);
                },
            )
            .forget();
        }
    }

    {
        let (document, window) = (document.clone(), window.clone());
        EventListener::new_with_options(
            &textbox,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let chord = KeyChord::new(event.ctrl_key(), event.alt_key(), event.shift_key(), &event.key());
                if let Some(command) = chord.command() {
                    event.prevent_default();
                    run_command(&document, &window, command);
                }
            },
        )
        .forget();
    }

    let counters = Counters {
        chars: editor.query_selector("#char-count")?,
        chars_no_whitespace: editor.query_selector("#char-count-no-ws")?,
        words: editor.query_selector("#word-count")?,
    };
    counters.show(&textbox);
    let counted = textbox.clone();
    EventListener::new(&textbox, "input", move |_| counters.show(&counted)).forget();

    Ok(())
}

fn run_command(document: &HtmlDocument, window: &Window, command: EditCommand) {
    let value = if command.needs_prompt() {
        match window.prompt_with_message(IMAGE_PROMPT) {
            Ok(Some(answer)) if !answer.trim().is_empty() => answer,
            _ => return,
        }
    } else {
        command.exec_value().unwrap_or_default().to_string()
    };

    if let Err(err) = document.exec_command_with_show_ui_and_value(command.exec_name(), false, &value) {
        gloo_console::warn!(format!("execCommand({}) failed:", command.exec_name()), err);
    }
}

struct Counters {
    chars: Option<Element>,
    chars_no_whitespace: Option<Element>,
    words: Option<Element>,
}

impl Counters {
    fn show(&self, textbox: &HtmlElement) {
        let stats = TextStats::of(&textbox.text_content().unwrap_or_default());
        for (element, count) in [
            (&self.chars, stats.chars),
            (&self.chars_no_whitespace, stats.chars_no_whitespace),
            (&self.words, stats.words),
        ] {
            if let Some(element) = element {
                element.set_text_content(Some(&format_count(count)));
            }
        }
    }
}

/// Counter text with Swedish digit grouping.
fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::sv)
}
