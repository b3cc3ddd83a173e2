//! Wraps the assembled body in the fixed styled box or in the profile's
//! custom HTML template.

use log::debug;
use std::fmt::Write;

use super::{
    constants::*,
    error::Result,
    placeholders::{fill_positional, PlaceholderKind},
    sanitize::sanitize_html,
};
use crate::models::{box_custom::BoxCustom, custom::Custom};

/// Renders the complete HTML fragment for `body`, shown under `name`.
pub fn render_box(body: &str, custom: &Custom, name: &str) -> Result<String> {
    if custom.box_custom.is_custom_mode {
        Ok(render_template(body, &custom.box_custom, name))
    } else {
        render_fixed(body, custom, name)
    }
}

/// Fixed mode: a centred container built only from numeric and colour fields,
/// so the result is not sanitized.
fn render_fixed(body: &str, custom: &Custom, name: &str) -> Result<String> {
    let box_custom = &custom.box_custom;
    let shadow = &box_custom.shadow;

    let mut html = String::with_capacity(body.len() + 400);
    write!(
        html,
        r#"<div style="max-width:{}px; border-radius:{}px; margin:0 auto; padding:{}; box-shadow:{}px {}px {}px {}px {}; background-color:{}">"#,
        BOX_MAX_WIDTH_PX,
        box_custom.border_radius,
        BOX_PADDING,
        shadow.x,
        shadow.y,
        shadow.blur,
        shadow.spread,
        shadow.color,
        box_custom.background_color
    )?;
    write!(
        html,
        r#"<span style="font-size:{}; line-height:{}; color:{}">{}</span>"#,
        NAME_FONT_SIZE, NAME_LINE_HEIGHT, custom.text.normal.color, name
    )?;
    html.push_str(body);
    html.push_str("</div>");
    Ok(html)
}

/// Custom-template mode: positional slots are filled per kind, then
/// `{{content}}` and `{{name}}`, then line breaks are stripped and the result
/// is sanitized. The HTML parser normalizes a bare `\r` to `\n`, so breaks are
/// stripped from the sanitized output as well.
fn render_template(body: &str, box_custom: &BoxCustom, name: &str) -> String {
    let mut html = box_custom.custom_html.clone();
    for kind in PlaceholderKind::FILL_ORDER {
        let values = match kind {
            PlaceholderKind::Image => &box_custom.custom_images,
            PlaceholderKind::Text => &box_custom.custom_texts,
            PlaceholderKind::Color => &box_custom.custom_colors,
        };
        html = fill_positional(&html, kind, values);
    }

    let html = html
        .replace(CONTENT_PLACEHOLDER, body)
        .replace(NAME_PLACEHOLDER, name)
        .replace(LINE_BREAK_CHARS, "");
    debug!("[render_template] {} bytes before sanitizing", html.len());

    sanitize_html(&html)
        .replace(LINE_BREAK_CHARS, "")
        .trim()
        .to_string()
}
