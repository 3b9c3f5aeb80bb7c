//! Markdown text area with a live, syntax-echoing preview pane.
//!
//! The preview is rebuilt from scratch on every input event. Scrolling the source pane moves
//! the preview pane to the same relative position.

use web_sys::{Element, HtmlTextAreaElement};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

mod render;

use crate::context::PanelContext;
use crate::helpers::collect_elements;
use render::{render_preview, synced_scroll_top};

/// Hosts the preview editor is mounted into.
pub const HOST_SELECTOR: &str = "[data-markdown-editor]";

const DEFAULT_FIELD_NAME: &str = "text-body";

#[derive(Properties, PartialEq, Clone)]
pub struct MarkdownPreviewProps {
    /// Form field name of the source text area.
    pub name: AttrValue,
    #[prop_or_default]
    pub initial: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

pub enum Msg {
    UpdateText(String),
    SyncScroll,
}

pub struct MarkdownPreview {
    text: String,
    source_ref: NodeRef,
    preview_ref: NodeRef,
}

impl Component for MarkdownPreview {
    type Message = Msg;
    type Properties = MarkdownPreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            text: ctx.props().initial.to_string(),
            source_ref: NodeRef::default(),
            preview_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateText(text) => {
                self.text = text;
                true
            }
            Msg::SyncScroll => {
                if let (Some(source), Some(preview)) = (
                    self.source_ref.cast::<Element>(),
                    self.preview_ref.cast::<Element>(),
                ) {
                    preview.set_scroll_top(synced_scroll_top(
                        source.scroll_top(),
                        source.scroll_height(),
                        source.client_height(),
                        preview.scroll_height(),
                        preview.client_height(),
                    ));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let preview_html = AttrValue::from(render_preview(&self.text));

        html! {
            <div class="markdown-editor">
                <textarea
                    class="markdown-source"
                    ref={self.source_ref.clone()}
                    name={props.name.clone()}
                    placeholder={props.placeholder.clone()}
                    value={self.text.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateText(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                    onscroll={link.callback(|_: Event| Msg::SyncScroll)}
                />
                <div class="markdown-preview" ref={self.preview_ref.clone()}>
                    { Html::from_html_unchecked(preview_html) }
                </div>
            </div>
        }
    }
}

/// Replaces every `[data-markdown-editor]` host with a live preview editor.
///
/// The host's text becomes the initial source, `data-name` the field name of the text area and
/// `data-placeholder` its placeholder.
pub fn mount_all(ctx: &PanelContext) -> usize {
    let hosts = collect_elements(ctx.document.query_selector_all(HOST_SELECTOR));
    for host in &hosts {
        let props = MarkdownPreviewProps {
            name: host
                .get_attribute("data-name")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string())
                .into(),
            initial: host.text_content().unwrap_or_default().into(),
            placeholder: host.get_attribute("data-placeholder").unwrap_or_default().into(),
        };
        host.set_inner_html("");
        yew::Renderer::<MarkdownPreview>::with_root_and_props(host.clone(), props).render();
    }
    hosts.len()
}
