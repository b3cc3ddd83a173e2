//! Styles a single line of chat text: quotation runs first, then emphasis
//! markers, as a fixed sequence of independent regex substitutions.
//!
//! Pass order:
//! 1. `"…"` / `“…”` runs become `doubleQuote` spans (quotes kept), the text
//!    between them becomes `normal` spans.
//! 2. `'…'` / `‘…’` runs become `singleQuote` spans (quotes consumed).
//! 3. `***…***` becomes an `italicBold` span.
//! 4. `**…**` becomes a `bold` span.
//! 5. `*…*` becomes an `italic` span.
//!
//! Each pass works on the markup produced by the previous one, so emphasis
//! inside a quotation ends up nested inside the quotation span. Markers that
//! never pair up are left in place.

use log::debug;
use regex::{Captures, Regex};
use std::fmt::Write;
use std::sync::LazyLock;

use super::error::Result;
use crate::models::text_style::{TextCustom, TextStyleKind};

static DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["“][^"“]*?["”]"#).expect("double quote pattern is valid"));
static SINGLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['‘](.*?)['’]").expect("single quote pattern is valid"));
static TRIPLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").expect("triple star pattern is valid"));
static DOUBLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("double star pattern is valid"));
static SINGLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("single star pattern is valid"));

/// Converts one non-blank line into an HTML fragment of styled spans.
pub fn style_line(line: &str, styles: &TextCustom) -> Result<String> {
    let mut styled = wrap_quotations(line, styles)?;

    let passes: [(&Regex, TextStyleKind); 4] = [
        (&*SINGLE_QUOTE, TextStyleKind::SingleQuote),
        (&*TRIPLE_STAR, TextStyleKind::ItalicBold),
        (&*DOUBLE_STAR, TextStyleKind::Bold),
        (&*SINGLE_STAR, TextStyleKind::Italic),
    ];
    for (pattern, kind) in passes {
        styled = replace_with_span(pattern, &styled, &styles.declaration(kind));
    }

    debug!("[style_line] {:?} -> {} bytes of markup", line, styled.len());
    Ok(styled)
}

/// Splits the line into narration and quotation spans.
fn wrap_quotations(line: &str, styles: &TextCustom) -> Result<String> {
    let narration_style = styles.declaration(TextStyleKind::Normal);
    let quote_style = styles.declaration(TextStyleKind::DoubleQuote);

    let mut html = String::with_capacity(line.len() * 2);
    let mut last_end = 0;

    for quote in DOUBLE_QUOTE.find_iter(line) {
        if quote.start() > last_end {
            write!(
                html,
                r#"<span style="{}">{}</span>"#,
                narration_style,
                &line[last_end..quote.start()]
            )?;
        }
        write!(
            html,
            r#"<span style="{};">{}</span>"#,
            quote_style,
            quote.as_str()
        )?;
        last_end = quote.end();
    }

    if last_end < line.len() {
        write!(
            html,
            r#"<span style="{}">{}</span>"#,
            narration_style,
            &line[last_end..]
        )?;
    }

    Ok(html)
}

/// Replaces every match of `pattern` with a span around its first capture
/// group. The closure keeps `$` in custom CSS from being read as a group ref.
fn replace_with_span(pattern: &Regex, input: &str, declaration: &str) -> String {
    pattern
        .replace_all(input, |caps: &Captures| {
            format!("<span style='{}'>{}</span>", declaration, &caps[1])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::text_style::TextStyle;
    use pretty_assertions::assert_eq;

    const NORMAL: &str = r#"<span style="color:#000000">"#;
    const QUOTE: &str = r#"<span style="color:#8BE9FD;">"#;
    const SINGLE: &str = "<span style='color:#50FA7B'>";
    const ITALIC: &str = "<span style='font-style:italic; color:#A0A0A0'>";
    const BOLD: &str = "<span style='font-weight:bold; color:#FFB86C'>";
    const ITALIC_BOLD: &str = "<span style='font-style:italic; font-weight:bold; color:#FF79C6'>";

    fn styled(line: &str) -> String {
        style_line(line, &TextCustom::default()).unwrap()
    }

    #[test]
    fn plain_line_is_one_normal_span() {
        assert_eq!(styled("just narration"), format!("{NORMAL}just narration</span>"));
    }

    #[test]
    fn quotation_splits_narration() {
        assert_eq!(
            styled(r#"She said "hello" and left"#),
            format!(r#"{NORMAL}She said </span>{QUOTE}"hello"</span>{NORMAL} and left</span>"#)
        );
    }

    #[test]
    fn curly_quotes_are_recognised() {
        assert_eq!(
            styled("“hi”"),
            format!("{QUOTE}“hi”</span>")
        );
    }

    #[test]
    fn curly_single_quotes_are_consumed() {
        assert_eq!(
            styled("a ‘thought’ here"),
            format!("{NORMAL}a {SINGLE}thought</span> here</span>")
        );
    }

    #[test]
    fn quotation_custom_css_keeps_trailing_semicolon() {
        let styles = TextCustom::default().with_style(
            TextStyleKind::DoubleQuote,
            TextStyle {
                color: "#000000".into(),
                custom_css: "color: red; text-decoration: underline".into(),
                use_custom_css: true,
            },
        );
        assert_eq!(
            style_line(r#""hi""#, &styles).unwrap(),
            r#"<span style="color: red; text-decoration: underline;">"hi"</span>"#
        );
    }

    #[test]
    fn unterminated_quote_stays_narration() {
        assert_eq!(
            styled(r#"He began "but never"#),
            format!(r#"{NORMAL}He began "but never</span>"#)
        );
    }

    #[test]
    fn single_quotes_are_consumed() {
        assert_eq!(
            styled("a 'thought' here"),
            format!("{NORMAL}a {SINGLE}thought</span> here</span>")
        );
    }

    #[test]
    fn emphasis_levels_map_to_styles() {
        assert_eq!(
            styled("***x*** **y** *z*"),
            format!("{NORMAL}{ITALIC_BOLD}x</span> {BOLD}y</span> {ITALIC}z</span></span>")
        );
    }

    #[test]
    fn italic_nests_inside_bold() {
        assert_eq!(
            styled("**a*b*c**"),
            format!("{NORMAL}{BOLD}a{ITALIC}b</span>c</span></span>")
        );
    }

    #[test]
    fn emphasis_inside_quotation_is_nested() {
        assert_eq!(
            styled(r#""so *very* nice""#),
            format!(r#"{QUOTE}"so {ITALIC}very</span> nice"</span>"#)
        );
    }

    #[test]
    fn lone_asterisk_is_left_in_place() {
        assert_eq!(styled("5 * 3"), format!("{NORMAL}5 * 3</span>"));
    }

    #[test]
    fn custom_css_replaces_synthesized_style() {
        let styles = TextCustom::default().with_style(
            TextStyleKind::Bold,
            TextStyle {
                color: "#000000".into(),
                custom_css: "color: $1; text-shadow: 0 0 2px red;".into(),
                use_custom_css: true,
            },
        );
        assert_eq!(
            style_line("**b**", &styles).unwrap(),
            format!("{NORMAL}<span style='color: $1; text-shadow: 0 0 2px red;'>b</span></span>")
        );
    }
}
