use common::model::block::BlockKind;

use crate::error::SubmitError;

pub enum Msg {
    SelectKind(BlockKind),
    AddBlock,
    AddBelow(usize),
    RemoveBlock(usize),
    MoveUp(usize),
    MoveDown(usize),
    EditField {
        index: usize,
        field: &'static str,
        value: String,
    },
    /// Enumerated top-level form fields of an intercepted submit.
    Submit(Vec<(String, String)>),
    Submitted(String),
    SubmitFailed(SubmitError),
}
