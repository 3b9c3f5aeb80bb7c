//! Published HTML for stored blocks.

use std::sync::LazyLock;

use pulldown_cmark::{html, Parser};
use regex::Regex;

use super::block::Block;
use super::sequence::BlockSequence;

static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(youtu\.be|youtube\.com|www\.youtube\.com)/(watch\?v=|shorts/|live/|embed/)?")
        .expect("youtube link pattern is valid")
});

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text or attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders markdown with pulldown-cmark's default options.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut output = String::new();
    html::push_html(&mut output, Parser::new(markdown));
    output
}

/// Reduces a pasted YouTube link to its video id. Bare ids pass through.
pub fn youtube_video_id(link: &str) -> &str {
    let trimmed = link.trim();
    let id = match YOUTUBE_LINK.find(trimmed) {
        Some(prefix) => &trimmed[prefix.end()..],
        None => trimmed,
    };
    id.split(['&', '?', '/']).next().unwrap_or_default()
}

impl Block {
    pub fn render_html(&self) -> String {
        match self {
            Block::Heading { heading } => format!("<h2>{}</h2>", escape_html(heading)),
            Block::Paragraph { body_text } => markdown_to_html(body_text),
            Block::Quote { quote, citation } => format!(
                r#"<blockquote cite="{}">{}</blockquote>"#,
                escape_html(citation),
                escape_html(quote)
            ),
            Block::Image { id, caption } => format!(
                r#"<img src="/dynamic-data/images/m/{}.webp" alt="{}" /><p class="caption">{}</p>"#,
                escape_html(id),
                escape_html(caption),
                escape_html(caption)
            ),
            Block::RawHtml { html } => html.clone(),
            Block::YouTube { video_id, caption } => format!(
                r#"<iframe class="youtube-video" src="https://www.youtube.com/embed/{}" title="YouTube video player" frameborder="0" allowfullscreen></iframe><p class="caption">{}</p>"#,
                escape_html(youtube_video_id(video_id)),
                escape_html(caption)
            ),
        }
    }
}

impl BlockSequence {
    /// Concatenated HTML of every block, top to bottom.
    pub fn render_html(&self) -> String {
        self.iter().map(Block::render_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_and_quote_are_escaped() {
        let heading = Block::Heading {
            heading: "<b>Hej</b>".into(),
        };
        assert_eq!(heading.render_html(), "<h2>&lt;b&gt;Hej&lt;/b&gt;</h2>");

        let quote = Block::Quote {
            quote: "Ja & nej".into(),
            citation: "\"Någon\"".into(),
        };
        assert_eq!(
            quote.render_html(),
            r#"<blockquote cite="&quot;Någon&quot;">Ja &amp; nej</blockquote>"#
        );
    }

    #[test]
    fn paragraph_is_markdown() {
        let paragraph = Block::Paragraph {
            body_text: "Hello **world**".into(),
        };
        assert_eq!(
            paragraph.render_html(),
            "<p>Hello <strong>world</strong></p>\n"
        );
    }

    #[test]
    fn raw_html_is_verbatim() {
        let raw = Block::RawHtml {
            html: "<hr class=\"x\">".into(),
        };
        assert_eq!(raw.render_html(), "<hr class=\"x\">");
    }

    #[test]
    fn youtube_links_are_reduced_to_ids() {
        assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=abc123&t=4"), "abc123");
        assert_eq!(youtube_video_id("https://youtu.be/abc123"), "abc123");
        assert_eq!(youtube_video_id("youtube.com/shorts/abc123"), "abc123");
        assert_eq!(youtube_video_id("abc123"), "abc123");
    }

    #[test]
    fn sequence_renders_in_order() {
        let sequence = BlockSequence::from(vec![
            Block::Heading { heading: "A".into() },
            Block::RawHtml { html: "<hr>".into() },
        ]);
        assert_eq!(sequence.render_html(), "<h2>A</h2><hr>");
    }
}
