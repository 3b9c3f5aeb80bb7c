pub mod block;
pub mod dialog;
pub mod document;
pub mod render;
pub mod sequence;
