//! Fixed markup and placeholder tokens used by the HTML conversion.

// Placeholders filled from a single value, every occurrence.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";
pub const NAME_PLACEHOLDER: &str = "{{name}}";
pub const LINE_PLACEHOLDER: &str = "{{line}}"; // only inside `custom_p_tag`
pub const IMG_PLACEHOLDER: &str = "{{img}}"; // only inside `custom_image_tag`

/// Joins the lines of one paragraph.
pub const LINE_BREAK: &str = "<br/>";
/// Joins paragraph and image chunks before image substitution.
pub const CHUNK_SEPARATOR: &str = "\n";
/// Characters removed from custom-template output.
pub const LINE_BREAK_CHARS: [char; 2] = ['\r', '\n'];

/// Paragraph wrapper used outside custom-template mode.
pub const FIXED_PARAGRAPH_OPEN: &str = r#"<p style="margin:1.25em 0">"#;
pub const FIXED_PARAGRAPH_CLOSE: &str = "</p>";

// Fixed-mode box
pub const BOX_MAX_WIDTH_PX: u32 = 800;
pub const BOX_PADDING: &str = "2rem";
pub const NAME_FONT_SIZE: &str = "1.25rem";
pub const NAME_LINE_HEIGHT: &str = "1.75rem";

// Defaults for a fresh profile
pub const DEFAULT_PARAGRAPH_TAG: &str = r#"<p style="margin:1.2rem 0;">{{line}}</p>"#;
pub const DEFAULT_IMAGE_TAG: &str = r#"<img src="{{img}}" style="max-width:100%;"/>"#;
