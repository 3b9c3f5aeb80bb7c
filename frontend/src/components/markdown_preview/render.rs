//! Markdown to "see the syntax, see the effect" preview HTML.
//!
//! The preview keeps the markdown markers visible: `**bold**` renders bold *and* still shows both
//! `**`, headings keep their `#`s, list items their bullet or number. Markers are taken from the
//! source text so `_x_` and `*x*` echo what was typed. Closing `#`s and setext underlines
//! (`===`, `---`) are echoed after the heading text. Everything that is not a paragraph,
//! heading, strong, emphasis, list or item is left to pulldown-cmark's HTML writer.

use std::ops::Range;
use std::sync::LazyLock;

use common::model::render::escape_html;
use pulldown_cmark::{html, CowStr, Event, Parser, Tag, TagEnd};
use regex::{Captures, Regex};

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern is valid"));

static DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("dash pattern is valid"));

/// Renders `source` for the live preview pane.
pub fn render_preview(source: &str) -> String {
    let text = substitute(source);
    let mut output = String::with_capacity(text.len() * 2);
    let events = Parser::new(&text)
        .into_offset_iter()
        .map(|(event, range)| echo_syntax(&text, event, range));
    html::push_html(&mut output, events);
    output
}

/// Literal substitutions applied before parsing.
///
/// Line endings are normalised, blank lines beyond the first in a run stay visible as empty
/// paragraphs, `---` becomes an em dash and `--` an en dash. Longer runs are kept, and so are
/// lines made only of dashes, pipes and colons (thematic breaks, setext underlines, table
/// delimiter rows).
fn substitute(source: &str) -> String {
    let text = source.replace("\r\n", "\n");
    let text = BLANK_LINE_RUN.replace_all(&text, |caps: &Captures| {
        let extra = caps[0].len() - 2;
        format!("\n\n{}", "&nbsp;\n\n".repeat(extra))
    });
    DASH_RUN
        .replace_all(&text, |caps: &Captures| {
            caps.get(0)
                .map(|run| typographic_dash(&text, run.range()))
                .unwrap_or_default()
        })
        .into_owned()
}

fn typographic_dash(text: &str, run: Range<usize>) -> String {
    let dashes = &text[run.clone()];
    let line_start = text[..run.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[run.end..].find('\n').map_or(text.len(), |i| run.end + i);
    let structural = text[line_start..line_end]
        .chars()
        .all(|c| matches!(c, '-' | '|' | ':' | ' ' | '\t'));
    if structural {
        return dashes.to_string();
    }
    match dashes.len() {
        2 => "–".to_string(),
        3 => "—".to_string(),
        _ => dashes.to_string(),
    }
}

fn echo_syntax<'a>(source: &str, event: Event<'a>, range: Range<usize>) -> Event<'a> {
    let html = match event {
        Event::Start(Tag::Paragraph) => r#"<p class="md-paragraph">"#.to_string(),
        Event::End(TagEnd::Paragraph) => "</p>\n".to_string(),
        Event::Start(Tag::Heading { level, .. }) => {
            let hashes = source
                .get(range)
                .map(|s| s.trim_start().chars().take_while(|c| *c == '#').count())
                .unwrap_or_default();
            let marker = if hashes > 0 {
                format!("{} ", "#".repeat(hashes))
            } else {
                String::new()
            };
            format!(r#"<h{} class="md-heading">{}"#, level as usize, syntax(&marker))
        }
        Event::End(TagEnd::Heading(level)) => format!(
            "{}</h{}>\n",
            heading_closing(source.get(range).unwrap_or_default()),
            level as usize
        ),
        Event::Start(Tag::Strong) => format!("<strong>{}", syntax(opening(source, &range, 2))),
        Event::End(TagEnd::Strong) => format!("{}</strong>", syntax(closing(source, &range, 2))),
        Event::Start(Tag::Emphasis) => format!("<em>{}", syntax(opening(source, &range, 1))),
        Event::End(TagEnd::Emphasis) => format!("{}</em>", syntax(closing(source, &range, 1))),
        Event::Start(Tag::List(Some(1))) => "<ol class=\"md-list\">\n".to_string(),
        Event::Start(Tag::List(Some(start))) => format!("<ol class=\"md-list\" start=\"{start}\">\n"),
        Event::Start(Tag::List(None)) => "<ul class=\"md-list\">\n".to_string(),
        Event::End(TagEnd::List(true)) => "</ol>\n".to_string(),
        Event::End(TagEnd::List(false)) => "</ul>\n".to_string(),
        Event::Start(Tag::Item) => {
            let marker = source
                .get(range)
                .and_then(|s| s.split_whitespace().next())
                .map(|marker| format!("{marker} "))
                .unwrap_or_default();
            format!("<li>{}", syntax(&marker))
        }
        Event::End(TagEnd::Item) => "</li>\n".to_string(),
        other => return other,
    };
    Event::Html(CowStr::from(html))
}

fn syntax(marker: &str) -> String {
    if marker.is_empty() {
        return String::new();
    }
    format!(r#"<span class="md-syntax">{}</span>"#, escape_html(marker))
}

/// Echo of what follows a heading's text: an ATX closing sequence or a setext underline.
fn heading_closing(heading: &str) -> String {
    let heading = heading.trim_end();
    if let Some((_, underline)) = heading.rsplit_once('\n') {
        let underline = underline.trim();
        let is_underline = !underline.is_empty()
            && (underline.chars().all(|c| c == '=') || underline.chars().all(|c| c == '-'));
        return if is_underline {
            format!("<br>{}", syntax(underline))
        } else {
            String::new()
        };
    }

    let content = heading.trim_end_matches('#');
    let closing = &heading[content.len()..];
    if closing.is_empty() || !content.ends_with([' ', '\t']) {
        return String::new();
    }
    syntax(&format!(" {closing}"))
}

fn opening<'s>(source: &'s str, range: &Range<usize>, width: usize) -> &'s str {
    source
        .get(range.start..range.start + width)
        .unwrap_or_default()
}

fn closing<'s>(source: &'s str, range: &Range<usize>, width: usize) -> &'s str {
    source
        .get(range.end.saturating_sub(width)..range.end)
        .unwrap_or_default()
}

/// Scroll offset for the preview pane that matches the source pane's relative position.
pub fn synced_scroll_top(
    source_top: i32,
    source_scroll_height: i32,
    source_client_height: i32,
    preview_scroll_height: i32,
    preview_client_height: i32,
) -> i32 {
    let source_range = (source_scroll_height - source_client_height).max(1) as f64;
    let preview_range = (preview_scroll_height - preview_client_height).max(0) as f64;
    let ratio = (source_top.max(0) as f64 / source_range).min(1.0);
    (ratio * preview_range).round() as i32
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bold_keeps_its_markers() {
        assert_eq!(
            render_preview("Hej **du**"),
            concat!(
                r#"<p class="md-paragraph">Hej <strong><span class="md-syntax">**</span>du"#,
                r#"<span class="md-syntax">**</span></strong></p>"#,
                "\n"
            )
        );
    }

    #[test]
    fn italic_echoes_the_typed_marker() {
        assert_eq!(
            render_preview("_lutande_"),
            concat!(
                r#"<p class="md-paragraph"><em><span class="md-syntax">_</span>lutande"#,
                r#"<span class="md-syntax">_</span></em></p>"#,
                "\n"
            )
        );
    }

    #[test]
    fn heading_shows_hashes() {
        assert_eq!(
            render_preview("## Rubrik"),
            "<h2 class=\"md-heading\"><span class=\"md-syntax\">## </span>Rubrik</h2>\n"
        );
    }

    #[test]
    fn list_items_show_bullets_and_numbers() {
        assert_eq!(
            render_preview("- a\n- b"),
            concat!(
                "<ul class=\"md-list\">\n",
                "<li><span class=\"md-syntax\">- </span>a</li>\n",
                "<li><span class=\"md-syntax\">- </span>b</li>\n",
                "</ul>\n"
            )
        );
        assert!(render_preview("3. c").starts_with(
            "<ol class=\"md-list\" start=\"3\">\n<li><span class=\"md-syntax\">3. </span>c</li>"
        ));
    }

    #[test]
    fn extra_blank_lines_stay_visible() {
        let html = render_preview("a\n\n\n\nb");
        assert_eq!(html.matches(r#"<p class="md-paragraph">"#).count(), 4);
        assert_eq!(substitute("a\n\n\nb"), "a\n\n&nbsp;\n\nb");
    }

    #[test]
    fn dashes_become_typographic() {
        assert_eq!(substitute("ja -- nej"), "ja – nej");
        assert_eq!(substitute("ja --- nej"), "ja — nej");
        assert_eq!(substitute("a----b"), "a----b");
    }

    #[test]
    fn neighbouring_dash_runs_are_all_replaced() {
        assert_eq!(substitute("a--b--c"), "a–b–c");
        assert_eq!(substitute("x --y-- z"), "x –y– z");
        assert_eq!(substitute("a---b---c"), "a—b—c");
        assert_eq!(substitute("--a"), "–a");
    }

    #[test]
    fn structural_dash_lines_are_kept() {
        assert_eq!(substitute("---"), "---");
        assert_eq!(substitute("a\n---\nb"), "a\n---\nb");
        assert_eq!(substitute("| a | b |\n|---|:--|"), "| a | b |\n|---|:--|");
    }

    #[test]
    fn setext_headings_echo_their_underline() {
        assert_eq!(
            render_preview("Rubrik\n==="),
            "<h1 class=\"md-heading\">Rubrik<br><span class=\"md-syntax\">===</span></h1>\n"
        );
        assert!(render_preview("Rubrik\n---").contains("<br><span class=\"md-syntax\">---</span></h2>"));
    }

    #[test]
    fn closing_hashes_are_echoed() {
        assert_eq!(
            render_preview("## Rubrik ##"),
            concat!(
                "<h2 class=\"md-heading\"><span class=\"md-syntax\">## </span>Rubrik",
                "<span class=\"md-syntax\"> ##</span></h2>\n"
            )
        );
    }

    #[test]
    fn text_is_escaped() {
        assert!(render_preview("1 < 2").contains("1 &lt; 2"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let source = "# Titel\n\nEtt *stycke* med **fetstil**.\n\n1. ett\n2. två\n";
        assert_eq!(render_preview(source), render_preview(source));
    }

    #[test]
    fn scroll_sync_is_proportional() {
        assert_eq!(synced_scroll_top(50, 200, 100, 400, 200), 100);
        assert_eq!(synced_scroll_top(0, 200, 100, 400, 200), 0);
        assert_eq!(synced_scroll_top(500, 200, 100, 400, 200), 200);
        assert_eq!(synced_scroll_top(10, 100, 100, 400, 200), 200);
    }
}
