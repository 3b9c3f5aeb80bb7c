//! Component state for the block editor.
//!
//! The `BlockSequence` is the source of truth; the view only projects it. Helpers here are
//! pure so they can be tested without a browser.

use gloo_events::EventListener;

use common::model::block::{Block, BlockKind};
use common::model::sequence::BlockSequence;

use crate::error::EditorError;
use crate::helpers::compute_md5;

pub struct BlockEditorComponent {
    /// Blocks in render order.
    pub blocks: BlockSequence,

    /// Kind chosen in the "add block" selector.
    pub selected_kind: BlockKind,

    /// Set while a submission is in flight. Further submits are ignored until it settles.
    pub submitting: bool,

    /// MD5 of the serialized blocks at mount or at the last successful submit.
    pub original_md5: String,

    /// Keeps the form `submit` interception alive for the lifetime of the component.
    pub submit_listener: Option<EventListener>,

    /// Guard so the form is rigged only once.
    pub loaded: bool,
}

impl BlockEditorComponent {
    pub fn new(initial: BlockSequence) -> Self {
        let original_md5 = fingerprint(&initial);
        Self {
            blocks: initial,
            selected_kind: BlockKind::Paragraph,
            submitting: false,
            original_md5,
            submit_listener: None,
            loaded: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        fingerprint(&self.blocks) != self.original_md5
    }

    /// Records the current blocks as saved.
    pub fn mark_saved(&mut self) {
        self.original_md5 = fingerprint(&self.blocks);
    }

    /// Claims the single in-flight submission slot. `false` while another submission runs.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// The server accepted the blocks: they become the saved state.
    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.mark_saved();
    }

    /// The submission failed. Blocks and their order stay as they are.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    /// Appends an empty block of the selected kind to the end of the sequence.
    pub fn add_block(&mut self) {
        self.blocks.push(Block::empty(self.selected_kind));
    }

    /// Inserting below an existing block is not available; callers report it to the user.
    pub fn add_below(&self, _index: usize) -> Result<(), EditorError> {
        Err(EditorError::Unsupported("adding a block below another block"))
    }

    /// Writes `value` into `field` of the block at `index`.
    ///
    /// Returns whether anything changed. An index past the end is ignored.
    pub fn set_field(
        &mut self,
        index: usize,
        field: &str,
        value: String,
    ) -> Result<bool, EditorError> {
        let Some(block) = self.blocks.get_mut(index) else {
            return Ok(false);
        };
        if block.field(field) == Some(value.as_str()) {
            return Ok(false);
        }
        block.set_field(field, value)?;
        Ok(true)
    }
}

fn fingerprint(blocks: &BlockSequence) -> String {
    compute_md5(&serde_json::to_string(blocks).unwrap_or_default())
}
