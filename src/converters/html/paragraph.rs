//! Groups styled lines into paragraphs and resolves image directives.

use log::{debug, warn};
use regex::{Captures, Regex};
use std::fmt::Write;
use std::sync::LazyLock;

use super::{
    constants::*,
    emphasis::style_line,
    error::Result,
};
use crate::models::{box_custom::BoxCustom, config::Config, custom::Custom};

/// A line consisting of nothing but an image directive.
static IMAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{img::(.*?)\}\}$").expect("image line pattern is valid"));
/// An image directive anywhere in the assembled body.
static IMAGE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{img::(.*?)\}\}").expect("image directive pattern is valid"));

/// Splits `text` into ordered chunks: one per paragraph (blank-line
/// separated, lines joined with `<br/>`) and one per image directive line.
///
/// Image chunks are left as the literal `{{img::url}}` directive; see
/// [`render_body`] for their substitution.
pub fn assemble(text: &str, custom: &Custom) -> Result<Vec<String>> {
    let box_custom = &custom.box_custom;
    if box_custom.is_custom_mode && !box_custom.custom_p_tag.contains(LINE_PLACEHOLDER) {
        warn!("Custom paragraph tag has no {LINE_PLACEHOLDER}; paragraph text will be dropped");
    }

    let mut chunks = Vec::new();
    let mut current_lines: Vec<String> = Vec::new();

    for line in text.lines() {
        if IMAGE_LINE.is_match(line) {
            // An image keeps its place between the paragraphs around it.
            flush_paragraph(&mut current_lines, box_custom, &mut chunks)?;
            chunks.push(line.to_string());
        } else if !line.trim().is_empty() {
            current_lines.push(style_line(line, &custom.text)?);
        } else {
            flush_paragraph(&mut current_lines, box_custom, &mut chunks)?;
        }
    }
    flush_paragraph(&mut current_lines, box_custom, &mut chunks)?;

    debug!("[assemble] {} chunks", chunks.len());
    Ok(chunks)
}

/// Produces the box body: assembled chunks joined by newlines, image
/// directives rendered through `custom_image_tag`, and, when
/// `config.remove_asterisk` is set, every remaining `*` removed.
pub fn render_body(text: &str, config: &Config, custom: &Custom) -> Result<String> {
    let chunks = assemble(text, custom)?;
    let joined = chunks.join(CHUNK_SEPARATOR);

    let image_tag = &custom.box_custom.custom_image_tag;
    let body = IMAGE_DIRECTIVE.replace_all(&joined, |caps: &Captures| {
        image_tag.replacen(IMG_PLACEHOLDER, &caps[1], 1)
    });

    if config.remove_asterisk {
        Ok(body.replace('*', ""))
    } else {
        Ok(body.into_owned())
    }
}

/// Moves the buffered lines into `chunks` as one paragraph.
fn flush_paragraph(
    lines: &mut Vec<String>,
    box_custom: &BoxCustom,
    chunks: &mut Vec<String>,
) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let joined = lines.join(LINE_BREAK);
    lines.clear();

    if box_custom.is_custom_mode {
        chunks.push(box_custom.custom_p_tag.replace(LINE_PLACEHOLDER, &joined));
    } else {
        let mut paragraph = String::with_capacity(joined.len() + 48);
        write!(
            paragraph,
            "{}{}{}",
            FIXED_PARAGRAPH_OPEN, joined, FIXED_PARAGRAPH_CLOSE
        )?;
        chunks.push(paragraph);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(text: &str) -> String {
        format!(r#"<span style="color:#000000">{}</span>"#, text)
    }

    fn custom_mode(p_tag: &str) -> Custom {
        let mut custom = Custom::default();
        custom.box_custom.is_custom_mode = true;
        custom.box_custom.custom_p_tag = p_tag.to_string();
        custom
    }

    #[test]
    fn blank_lines_separate_paragraphs() {
        let chunks = assemble("line1\nline2\n\nline3", &Custom::default()).unwrap();
        assert_eq!(
            chunks,
            vec![
                format!(r#"<p style="margin:1.25em 0">{}<br/>{}</p>"#, span("line1"), span("line2")),
                format!(r#"<p style="margin:1.25em 0">{}</p>"#, span("line3")),
            ]
        );
    }

    #[test]
    fn repeated_blank_lines_do_not_create_empty_paragraphs() {
        let chunks = assemble("a\n\n\n   \nb", &Custom::default()).unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn image_line_is_its_own_chunk_in_order() {
        let chunks = assemble("text\n{{img::http://x/y.png}}\ntext2", &Custom::default()).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].contains("text"));
        assert_eq!(chunks[1], "{{img::http://x/y.png}}");
        assert!(chunks[2].contains("text2"));
    }

    #[test]
    fn indented_image_directive_is_text() {
        let chunks = assemble("  {{img::u}}", &Custom::default()).unwrap();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].starts_with("<p"));
    }

    #[test]
    fn custom_paragraph_tag_wraps_lines() {
        let chunks = assemble("a\nb", &custom_mode("<div>{{line}}</div>")).unwrap();
        assert_eq!(chunks, vec![format!("<div>{}<br/>{}</div>", span("a"), span("b"))]);
    }

    #[test]
    fn paragraph_tag_without_line_drops_content() {
        let chunks = assemble("lost words", &custom_mode("<hr/>")).unwrap();
        assert_eq!(chunks, vec!["<hr/>".to_string()]);
    }

    #[test]
    fn images_render_through_image_tag() {
        let mut custom = Custom::default();
        custom.box_custom.custom_image_tag = "<img src=\"{{img}}\"/>".into();
        let config = Config {
            remove_asterisk: false,
            ..Config::default()
        };
        let body = render_body("{{img::https://a/1.png}}\n\n{{img::https://a/2.png}}", &config, &custom).unwrap();
        assert_eq!(body, "<img src=\"https://a/1.png\"/>\n<img src=\"https://a/2.png\"/>");
    }

    #[test]
    fn remove_asterisk_strips_unpaired_markers() {
        let config = Config {
            remove_asterisk: true,
            ..Config::default()
        };
        let body = render_body("**bold** and a lone * here ***", &config, &Custom::default()).unwrap();
        assert!(!body.contains('*'));
        assert!(body.contains("bold"));
    }

    #[test]
    fn asterisks_survive_when_not_removed() {
        let config = Config {
            remove_asterisk: false,
            ..Config::default()
        };
        let body = render_body("a * b", &config, &Custom::default()).unwrap();
        assert!(body.contains("a * b"));
    }
}
