//! The document submitted by the text editor form.
//!
//! Top-level form fields are flattened next to the `blocks` array, so a submitted edit looks like
//! `{"text-id": 5, "title": "...", "blocks": [...]}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::sequence::BlockSequence;
use crate::error::DocumentError;

/// Form field holding the numeric id of the text being edited.
pub const TEXT_ID_FIELD: &str = "text-id";

/// Form field holding the text title.
pub const TITLE_FIELD: &str = "title";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub blocks: BlockSequence,
}

impl TextDocument {
    /// Builds a document from enumerated form fields and the editor's blocks.
    ///
    /// `text-id` is coerced to an integer; an empty id means the text has not been saved yet and
    /// is left out. Every other field is kept as a string, a repeated name keeps its last value.
    pub fn from_form<I, K, V>(fields: I, blocks: BlockSequence) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (name, value) in fields {
            let name = name.into();
            let value = value.into();
            if name == TEXT_ID_FIELD {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let id = trimmed
                    .parse::<i64>()
                    .map_err(|_| DocumentError::InvalidIdentifier {
                        field: TEXT_ID_FIELD,
                        value: value.clone(),
                    })?;
                map.insert(name, Value::from(id));
            } else {
                map.insert(name, Value::String(value));
            }
        }
        Ok(Self {
            fields: map,
            blocks,
        })
    }

    pub fn text_id(&self) -> Option<i64> {
        self.fields.get(TEXT_ID_FIELD).and_then(Value::as_i64)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> &str {
        self.field(TITLE_FIELD).unwrap_or_default()
    }
}
