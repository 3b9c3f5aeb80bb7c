//! Error types of the browser side.
//!
//! `SetupError` is a page markup problem found while wiring components at load time.
//! `EditorError` stops a block editor action, `SubmitError` a form submission.

use common::error::{BlockError, DialogError, DocumentError};
use common::model::dialog::FormMethod;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("cannot find `{0}`")]
    MissingElement(String),

    #[error("`{0}` is not the expected kind of element")]
    WrongElement(String),

    #[error(transparent)]
    Dialog(#[from] DialogError),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Dom(format!("{value:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Block(#[from] BlockError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Form(#[from] DialogError),

    #[error("the form has no `action` to submit to")]
    MissingAction,

    #[error("a form submitted with {0} cannot carry a document")]
    BodylessMethod(FormMethod),

    #[error("{0} is not supported yet")]
    Unsupported(&'static str),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for EditorError {
    fn from(value: JsValue) -> Self {
        EditorError::Dom(format!("{value:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("could not encode the document: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Response(String),
}
