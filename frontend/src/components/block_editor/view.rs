//! View rendering for the block editor.
//!
//! Every block is a `.block[data-block-type]` shell holding its controls (move up, move down,
//! delete, add below) and one input per field. Inputs carry the field name as their class and
//! no `name` attribute, so the enclosing form's own fields stay the only top-level ones.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::block::{Block, BlockKind};

use super::messages::Msg;
use super::state::BlockEditorComponent;

pub fn view(component: &BlockEditorComponent, ctx: &Context<BlockEditorComponent>) -> Html {
    let link = ctx.link();
    let last = component.blocks.len().saturating_sub(1);

    html! {
        <div class="block-editor-root">
            <div class="blocks">
                { for component.blocks.iter().enumerate().map(|(index, block)| {
                    build_block(block, index, last, link)
                }) }
            </div>
            { build_add_bar(component, link) }
        </div>
    }
}

fn build_block(block: &Block, index: usize, last: usize, link: &Scope<BlockEditorComponent>) -> Html {
    let kind = block.kind();
    html! {
        <div class="block" data-block-type={kind.tag()}>
            <div class="block-controls">
                <span class="block-label">{ kind.label() }</span>
                { icon_button("arrow_upward", "Flytta upp", link.callback(move |_| Msg::MoveUp(index)), index == 0) }
                { icon_button("arrow_downward", "Flytta ned", link.callback(move |_| Msg::MoveDown(index)), index == last) }
                { icon_button("delete", "Ta bort", link.callback(move |_| Msg::RemoveBlock(index)), false) }
                { icon_button("add", "Lägg till nedanför", link.callback(move |_| Msg::AddBelow(index)), false) }
            </div>
            { for block.fields().into_iter().map(|(field, value)| build_field(kind, index, field, value, link)) }
        </div>
    }
}

fn build_field(
    kind: BlockKind,
    index: usize,
    field: &'static str,
    value: &str,
    link: &Scope<BlockEditorComponent>,
) -> Html {
    if kind.is_multiline(field) {
        let oninput = link.callback(move |e: InputEvent| Msg::EditField {
            index,
            field,
            value: e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        });
        html! {
            <textarea class={field} value={value.to_string()} {oninput} />
        }
    } else {
        let oninput = link.callback(move |e: InputEvent| Msg::EditField {
            index,
            field,
            value: e.target_unchecked_into::<HtmlInputElement>().value(),
        });
        html! {
            <input type="text" class={field} value={value.to_string()} {oninput} />
        }
    }
}

/// Kind selector, add button and the unsaved-changes marker.
fn build_add_bar(component: &BlockEditorComponent, link: &Scope<BlockEditorComponent>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>()
            .value()
            .parse::<BlockKind>()
            .ok()
            .map(Msg::SelectKind)
    });

    html! {
        <div class="block-add-bar">
            <select class="block-kind" {onchange}>
                { for BlockKind::ALL.iter().map(|kind| html! {
                    <option value={kind.tag()} selected={*kind == component.selected_kind}>
                        { kind.label() }
                    </option>
                }) }
            </select>
            { icon_button("add_box", "Lägg till block", link.callback(|_| Msg::AddBlock), false) }
            if component.is_dirty() {
                <span class="dirty-dot" title="Osparade ändringar" />
            }
            if component.submitting {
                <span class="saving">{ "Sparar…" }</span>
            }
        </div>
    }
}

fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button type="button" class="icon-btn" title={label.to_string()} {disabled} onclick={on_click}>
            <i class="material-icons">{ icon_name.to_string() }</i>
        </button>
    }
}
