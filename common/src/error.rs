use thiserror::Error;

use crate::model::block::BlockKind;

/// Failures while turning editor input into a [`Block`](crate::model::block::Block).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("unknown block type `{0}`")]
    UnknownKind(String),

    #[error("{kind} block is missing its `{field}` field")]
    MissingField { kind: BlockKind, field: &'static str },

    #[error("{kind} blocks have no field named `{field}`")]
    UnknownField { kind: BlockKind, field: String },
}

/// Failures while assembling a [`TextDocument`](crate::model::document::TextDocument).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("field `{field}` must be a whole number, got `{value}`")]
    InvalidIdentifier { field: &'static str, value: String },
}

/// Setup-time misconfiguration of a dialog trigger in the page markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("no element has data-dialog-button=\"{0}\"")]
    MissingTrigger(String),

    #[error("dialog button `{id}` does not specify `{attribute}`")]
    MissingAttribute { id: String, attribute: &'static str },

    #[error("unsupported form method `{0}`")]
    InvalidMethod(String),
}
