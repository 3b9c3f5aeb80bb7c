//! Block editor: root module wiring the Yew `Component` implementation with submodules for
//! state, update logic, view rendering, DOM reading and form submission.
//!
//! Responsibilities
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, intercept `submit` of the enclosing form exactly once.
//! - Expose [`mount_all`] which hydrates server-rendered blocks and mounts one editor per
//!   `.block-editor` container.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;
use yew::prelude::*;

mod dom;
mod messages;
mod props;
mod state;
mod submit;
mod update;
mod view;

use crate::context::PanelContext;
use crate::helpers::{alert, collect_elements};
pub use messages::Msg;
pub use props::BlockEditorProps;
pub use state::BlockEditorComponent;

impl Component for BlockEditorComponent {
    type Message = Msg;
    type Properties = BlockEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        BlockEditorComponent::new(ctx.props().initial.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(form) = &ctx.props().form {
                let link = ctx.link().clone();
                let target = form.clone();
                self.submit_listener = Some(EventListener::new_with_options(
                    form,
                    "submit",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        match dom::form_fields(&target) {
                            Ok(fields) => link.send_message(Msg::Submit(fields)),
                            Err(err) => {
                                gloo_console::error!(format!("Could not read form fields: {err}"))
                            }
                        }
                    },
                ));
            } else {
                gloo_console::warn!("Block editor is not inside a form, submission is disabled.");
            }
        }
    }
}

/// Mounts a block editor into every `.block-editor` container on the page.
///
/// Blocks already rendered inside the container become the editor's initial content. A
/// container whose blocks cannot be read is left untouched. Returns how many editors were
/// mounted.
pub fn mount_all(ctx: &PanelContext) -> usize {
    let mut mounted = 0;
    for host in collect_elements(ctx.document.query_selector_all(dom::EDITOR_SELECTOR)) {
        let initial = match dom::read_blocks(&host) {
            Ok(blocks) => blocks,
            Err(err) => {
                alert(&format!("Texten innehåller ett okänt block: {err}"));
                gloo_console::error!(format!("Block editor hydration failed: {err}"));
                continue;
            }
        };
        let form = host
            .closest("form")
            .ok()
            .flatten()
            .and_then(|form| form.dyn_into::<HtmlFormElement>().ok());

        host.set_inner_html("");
        yew::Renderer::<BlockEditorComponent>::with_root_and_props(
            host,
            BlockEditorProps { initial, form },
        )
        .render();
        mounted += 1;
    }
    mounted
}
