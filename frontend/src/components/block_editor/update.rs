//! Update function for the block editor component.
//!
//! Elm-style: mutate the component for a `Msg` and return whether to re-render.
//! Structural edits go through `BlockSequence`; a submission is prepared synchronously and sent
//! on a spawned future whose result comes back as `Submitted` or `SubmitFailed`.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{alert, set_window_dirty_flag};

use super::messages::Msg;
use super::state::BlockEditorComponent;
use super::submit;

pub fn update(
    component: &mut BlockEditorComponent,
    ctx: &Context<BlockEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SelectKind(kind) => {
            component.selected_kind = kind;
            false
        }
        Msg::AddBlock => {
            component.add_block();
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::AddBelow(index) => {
            if let Err(err) = component.add_below(index) {
                alert("Att lägga till ett block här stöds inte ännu.");
                gloo_console::warn!(format!("Block {index}: {err}"));
            }
            false
        }
        Msg::RemoveBlock(index) => {
            let removed = component.blocks.remove(index).is_some();
            set_window_dirty_flag(component.is_dirty());
            removed
        }
        Msg::MoveUp(index) => {
            let moved = component.blocks.move_up(index);
            set_window_dirty_flag(component.is_dirty());
            moved
        }
        Msg::MoveDown(index) => {
            let moved = component.blocks.move_down(index);
            set_window_dirty_flag(component.is_dirty());
            moved
        }
        Msg::EditField {
            index,
            field,
            value,
        } => match component.set_field(index, field, value) {
            Ok(changed) => {
                set_window_dirty_flag(component.is_dirty());
                changed
            }
            Err(err) => {
                gloo_console::error!(format!("Block {index}: {err}"));
                false
            }
        },
        Msg::Submit(fields) => {
            if component.submitting {
                gloo_console::log!("Submission already in progress, ignoring submit.");
                return false;
            }
            let Some(form) = ctx.props().form.as_ref() else {
                return false;
            };

            let request = match submit::prepare(
                form.get_attribute("method"),
                form.get_attribute("action"),
                fields,
                component.blocks.clone(),
            ) {
                Ok(request) => request,
                Err(err) => {
                    alert(&format!("Texten kunde inte sparas: {err}"));
                    gloo_console::error!(format!("Could not prepare submission: {err}"));
                    return false;
                }
            };

            if !component.begin_submit() {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                match submit::send(request).await {
                    Ok(redirect) => link.send_message(Msg::Submitted(redirect)),
                    Err(err) => link.send_message(Msg::SubmitFailed(err)),
                }
            });
            true
        }
        Msg::Submitted(redirect) => {
            component.submit_succeeded();
            set_window_dirty_flag(false);

            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(&redirect) {
                    gloo_console::error!(format!("Could not navigate to {redirect}: {err:?}"));
                }
            }
            true
        }
        Msg::SubmitFailed(err) => {
            component.submit_failed();
            alert("Något gick fel när texten skulle sparas.");
            gloo_console::error!(format!("Submission failed: {err}"));
            true
        }
    }
}
