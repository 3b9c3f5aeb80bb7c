//! Rich-text toolbar model: commands, keyboard chords and live counters.

mod commands;
mod stats;

pub use commands::{BlockFormat, EditCommand, KeyChord, DASH_SNIPPET, IMAGE_PROMPT};
pub use stats::TextStats;
