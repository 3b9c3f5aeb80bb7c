//! Shared model of the control panel.
//!
//! Everything here is target independent: the wasm frontend builds and edits these types in the
//! browser, the development server deserializes them from submitted documents and renders them.

pub mod editing;
pub mod error;
pub mod model;
pub mod requests;
pub mod share;
