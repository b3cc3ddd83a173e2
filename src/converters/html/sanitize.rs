//! Sanitizes user-authored template output with `ammonia`.
//!
//! Scripts, event-handler attributes and dangerous URL schemes are removed.
//! Inline `style` attributes stay, since every template relies on them, as do
//! the layout tags and `id`/`data-*` attributes templates commonly carry.
//! `data:` URLs are accepted for `<img src>` only.

use ammonia::Builder;
use std::borrow::Cow;

/// Attributes allowed on every tag in addition to ammonia's defaults.
const TEMPLATE_ATTRIBUTES: [&str; 4] = ["style", "class", "align", "id"];
/// Structural tags ammonia drops by default.
const TEMPLATE_TAGS: [&str; 3] = ["section", "main", "font"];
const FONT_ATTRIBUTES: [&str; 3] = ["color", "face", "size"];

/// Returns `html` with script-executing markup removed.
pub fn sanitize_html(html: &str) -> String {
    let mut builder = Builder::default();
    builder
        .add_tags(&TEMPLATE_TAGS)
        .add_tag_attributes("font", &FONT_ATTRIBUTES)
        .add_generic_attributes(&TEMPLATE_ATTRIBUTES)
        .add_generic_attribute_prefixes(&["data-"])
        .add_url_schemes(&["data"])
        .attribute_filter(inline_images_only)
        .link_rel(None);
    builder.clean(html).to_string()
}

/// Drops `data:` URLs everywhere except on `<img src>`.
fn inline_images_only<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    let is_data_url = value
        .trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"));
    if is_data_url && !(element == "img" && attribute == "src") {
        return None;
    }
    Some(Cow::Borrowed(value))
}
