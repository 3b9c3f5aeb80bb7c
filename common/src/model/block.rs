//! Typed content blocks of the block editor.
//!
//! A block's kind fixes its field set exactly. The JSON form of a block is internally tagged,
//! `{"type": "Heading", "heading": "..."}`, and deserialization rejects both unknown and missing
//! fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BlockError;

/// The kinds of block the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    Image,
    Quote,
    Heading,
    RawHtml,
    YouTube,
}

impl BlockKind {
    /// Every kind, in the order the kind selector lists them.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::Quote,
        BlockKind::Image,
        BlockKind::YouTube,
        BlockKind::RawHtml,
    ];

    /// The tag written to `data-block-type` and to the `type` key of the JSON payload.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Image => "Image",
            BlockKind::Quote => "Quote",
            BlockKind::Heading => "Heading",
            BlockKind::RawHtml => "RawHtml",
            BlockKind::YouTube => "YouTube",
        }
    }

    /// Registered field names, in the order they are rendered and serialized.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            BlockKind::Paragraph => &["body_text"],
            BlockKind::Image => &["id", "caption"],
            BlockKind::Quote => &["quote", "citation"],
            BlockKind::Heading => &["heading"],
            BlockKind::RawHtml => &["html"],
            BlockKind::YouTube => &["video_id", "caption"],
        }
    }

    /// Whether `field` of this kind holds free text edited over several lines.
    pub fn is_multiline(self, field: &str) -> bool {
        matches!(
            (self, field),
            (BlockKind::Paragraph, "body_text")
                | (BlockKind::Quote, "quote")
                | (BlockKind::RawHtml, "html")
        )
    }

    /// Name shown to editors in the kind selector.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "Stycke",
            BlockKind::Image => "Bild",
            BlockKind::Quote => "Citat",
            BlockKind::Heading => "Rubrik",
            BlockKind::RawHtml => "HTML",
            BlockKind::YouTube => "YouTube-video",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BlockKind {
    type Err = BlockError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Paragraph" => Ok(BlockKind::Paragraph),
            "Image" => Ok(BlockKind::Image),
            "Quote" => Ok(BlockKind::Quote),
            "Heading" => Ok(BlockKind::Heading),
            "RawHtml" => Ok(BlockKind::RawHtml),
            "YouTube" => Ok(BlockKind::YouTube),
            other => Err(BlockError::UnknownKind(other.to_string())),
        }
    }
}

/// One unit of structured content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum Block {
    /// Markdown body text.
    Paragraph { body_text: String },
    /// An uploaded image, referenced by id, with a caption.
    Image { id: String, caption: String },
    Quote { quote: String, citation: String },
    /// Rendered as an `<h2>`.
    Heading { heading: String },
    /// Inserted into the page verbatim.
    RawHtml { html: String },
    YouTube { video_id: String, caption: String },
}

impl Block {
    /// A block of `kind` with every field empty.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Paragraph => Block::Paragraph {
                body_text: String::new(),
            },
            BlockKind::Image => Block::Image {
                id: String::new(),
                caption: String::new(),
            },
            BlockKind::Quote => Block::Quote {
                quote: String::new(),
                citation: String::new(),
            },
            BlockKind::Heading => Block::Heading {
                heading: String::new(),
            },
            BlockKind::RawHtml => Block::RawHtml {
                html: String::new(),
            },
            BlockKind::YouTube => Block::YouTube {
                video_id: String::new(),
                caption: String::new(),
            },
        }
    }

    /// Builds a block from a kind tag and a field reader.
    ///
    /// `lookup` is asked for every field registered for the kind and nothing else. The tag must
    /// name a known kind and every field must be present, otherwise no block is produced.
    pub fn from_fields<F>(tag: &str, lookup: F) -> Result<Self, BlockError>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let kind = tag.parse::<BlockKind>()?;
        Block::from_kind_fields(kind, lookup)
    }

    /// Like [`Block::from_fields`] for an already parsed kind.
    pub fn from_kind_fields<F>(kind: BlockKind, mut lookup: F) -> Result<Self, BlockError>
    where
        F: FnMut(&'static str) -> Option<String>,
    {
        let mut block = Block::empty(kind);
        for &field in kind.fields() {
            let value = lookup(field).ok_or(BlockError::MissingField { kind, field })?;
            if let Some(slot) = block.field_mut(field) {
                *slot = value;
            }
        }
        Ok(block)
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::Image { .. } => BlockKind::Image,
            Block::Quote { .. } => BlockKind::Quote,
            Block::Heading { .. } => BlockKind::Heading,
            Block::RawHtml { .. } => BlockKind::RawHtml,
            Block::YouTube { .. } => BlockKind::YouTube,
        }
    }

    /// `(name, value)` pairs in registration order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let values: Vec<&str> = match self {
            Block::Paragraph { body_text } => vec![body_text.as_str()],
            Block::Image { id, caption } => vec![id.as_str(), caption.as_str()],
            Block::Quote { quote, citation } => vec![quote.as_str(), citation.as_str()],
            Block::Heading { heading } => vec![heading.as_str()],
            Block::RawHtml { html } => vec![html.as_str()],
            Block::YouTube { video_id, caption } => vec![video_id.as_str(), caption.as_str()],
        };
        self.kind().fields().iter().copied().zip(values).collect()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Overwrites one field. Naming a field the kind does not have is an error.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), BlockError> {
        let kind = self.kind();
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(BlockError::UnknownField {
                kind,
                field: name.to_string(),
            }),
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match (self, name) {
            (Block::Paragraph { body_text }, "body_text") => Some(body_text),
            (Block::Image { id, .. }, "id") => Some(id),
            (Block::Image { caption, .. }, "caption") => Some(caption),
            (Block::Quote { quote, .. }, "quote") => Some(quote),
            (Block::Quote { citation, .. }, "citation") => Some(citation),
            (Block::Heading { heading }, "heading") => Some(heading),
            (Block::RawHtml { html }, "html") => Some(html),
            (Block::YouTube { video_id, .. }, "video_id") => Some(video_id),
            (Block::YouTube { caption, .. }, "caption") => Some(caption),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_kind_reads_exactly_its_registered_fields() {
        for kind in BlockKind::ALL {
            let mut asked = Vec::new();
            let block = Block::from_fields(kind.tag(), |field| {
                asked.push(field);
                Some(format!("{field}-value"))
            })
            .unwrap();

            assert_eq!(asked, kind.fields());
            assert_eq!(block.kind(), kind);
            let names: Vec<_> = block.fields().into_iter().map(|(name, _)| name).collect();
            assert_eq!(names, kind.fields());
            for (name, value) in block.fields() {
                assert_eq!(value, format!("{name}-value"));
            }
        }
    }

    #[test]
    fn only_free_text_fields_are_multiline() {
        let multiline: Vec<(BlockKind, &str)> = BlockKind::ALL
            .iter()
            .flat_map(|kind| kind.fields().iter().map(move |field| (*kind, *field)))
            .filter(|(kind, field)| kind.is_multiline(field))
            .collect();
        assert_eq!(
            multiline,
            vec![
                (BlockKind::Paragraph, "body_text"),
                (BlockKind::Quote, "quote"),
                (BlockKind::RawHtml, "html"),
            ]
        );
        assert!(!BlockKind::Heading.is_multiline("body_text"));
    }

    #[test]
    fn unknown_tag_is_rejected_without_reading_fields() {
        let mut reads = 0;
        let result = Block::from_fields("Carousel", |_| {
            reads += 1;
            Some(String::new())
        });

        assert_eq!(result, Err(BlockError::UnknownKind("Carousel".into())));
        assert_eq!(reads, 0);
    }

    #[test]
    fn missing_field_yields_no_partial_block() {
        let values = HashMap::from([("quote", "To be")]);
        let result = Block::from_fields("Quote", |field| values.get(field).map(|v| v.to_string()));

        assert_eq!(
            result,
            Err(BlockError::MissingField {
                kind: BlockKind::Quote,
                field: "citation"
            })
        );
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.tag().parse::<BlockKind>(), Ok(kind));
        }
        assert!("paragraph".parse::<BlockKind>().is_err());
    }

    #[test]
    fn set_field_rejects_foreign_fields() {
        let mut block = Block::empty(BlockKind::Heading);
        block.set_field("heading", "Hej").unwrap();
        assert_eq!(block.field("heading"), Some("Hej"));

        assert_eq!(
            block.set_field("caption", "x"),
            Err(BlockError::UnknownField {
                kind: BlockKind::Heading,
                field: "caption".into()
            })
        );
    }

    #[test]
    fn json_shape_is_internally_tagged() {
        let blocks = vec![
            Block::Heading {
                heading: "Hi".into(),
            },
            Block::YouTube {
                video_id: "dQw4w9WgXcQ".into(),
                caption: String::new(),
            },
        ];

        let json = serde_json::to_string(&blocks).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"Heading","heading":"Hi"},{"type":"YouTube","video_id":"dQw4w9WgXcQ","caption":""}]"#
        );
    }

    #[test]
    fn deserializing_rejects_extra_and_missing_fields() {
        assert!(
            serde_json::from_str::<Block>(r#"{"type":"Heading","heading":"a","extra":"b"}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<Block>(r#"{"type":"Quote","quote":"a"}"#).is_err());
        assert!(serde_json::from_str::<Block>(r#"{"type":"Gallery"}"#).is_err());
    }
}
