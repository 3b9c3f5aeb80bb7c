pub mod block_editor;
pub mod dialogs;
pub mod markdown_preview;
pub mod share;
pub mod toolbar;
