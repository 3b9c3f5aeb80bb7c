//! Properties for the `BlockEditorComponent`.

use common::model::sequence::BlockSequence;
use web_sys::HtmlFormElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BlockEditorProps {
    /// Blocks shown when the editor mounts, usually read from server-rendered markup.
    #[prop_or_default]
    pub initial: BlockSequence,

    /// The form whose submission this editor takes over. Without one, nothing is submitted.
    #[prop_or_default]
    pub form: Option<HtmlFormElement>,
}
