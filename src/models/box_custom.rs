use serde::{Deserialize, Serialize};

use crate::converters::html::constants::{
    DEFAULT_IMAGE_TAG, DEFAULT_PARAGRAPH_TAG, IMG_PLACEHOLDER, LINE_PLACEHOLDER,
};
use crate::converters::html::placeholders::{placeholder_count, PlaceholderKind};

/// Value a newly exposed `{{color}}` slot starts with.
pub const DEFAULT_SLOT_COLOR: &str = "#ffffff";

/// Drop shadow of the fixed-mode box, in CSS `box-shadow` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            blur: 8.0,
            spread: 0.0,
            color: "#ababab".to_string(),
        }
    }
}

/// Box-level presentation: the fixed container settings plus the custom
/// template and its positional value lists.
///
/// `custom_colors`, `custom_texts` and `custom_images` track the number of
/// `{{color}}`, `{{text}}` and `{{image}}` placeholders in `custom_html`.
/// Use [`BoxCustom::with_custom_html`] to keep them in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxCustom {
    pub background_color: String,
    pub border_radius: f64,
    pub shadow: Shadow,
    pub is_custom_mode: bool,
    #[serde(rename = "customHTML")]
    pub custom_html: String,
    /// Per-paragraph template, `{{line}}` receives the joined lines.
    pub custom_p_tag: String,
    /// Per-image template, `{{img}}` receives the image URL.
    pub custom_image_tag: String,
    pub custom_images: Vec<String>,
    pub custom_colors: Vec<String>,
    pub custom_texts: Vec<String>,
}

impl Default for BoxCustom {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            border_radius: 4.0,
            shadow: Shadow::default(),
            is_custom_mode: false,
            custom_html: String::new(),
            custom_p_tag: DEFAULT_PARAGRAPH_TAG.to_string(),
            custom_image_tag: DEFAULT_IMAGE_TAG.to_string(),
            custom_images: Vec::new(),
            custom_colors: Vec::new(),
            custom_texts: Vec::new(),
        }
    }
}

/// Template problems that make the renderer silently drop content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateWarning {
    /// `custom_p_tag` has no `{{line}}`, so paragraph text disappears.
    ParagraphTagWithoutLine,
    /// `custom_image_tag` has no `{{img}}`, so image URLs disappear.
    ImageTagWithoutImg,
}

impl BoxCustom {
    /// Replaces the template and resizes the positional lists to its
    /// placeholder counts.
    pub fn with_custom_html(mut self, custom_html: impl Into<String>) -> Self {
        self.custom_html = custom_html.into();
        self.resize_slots();
        self
    }

    /// Switches between fixed and custom-template mode.
    ///
    /// Entering custom mode with an empty template seeds a starter template
    /// that reproduces the fixed box, and an empty paragraph tag is reset to
    /// the default one.
    pub fn with_custom_mode(mut self, enabled: bool) -> Self {
        self.is_custom_mode = enabled;
        if enabled && self.custom_html.is_empty() {
            self.custom_html = self.starter_template();
            if self.custom_colors.is_empty() {
                self.custom_colors = vec![
                    self.shadow.color.clone(),
                    self.background_color.clone(),
                    "#000000".to_string(),
                ];
            }
        }
        if enabled && self.custom_p_tag.is_empty() {
            self.custom_p_tag = DEFAULT_PARAGRAPH_TAG.to_string();
        }
        self.resize_slots();
        self
    }

    pub fn template_warnings(&self) -> Vec<TemplateWarning> {
        let mut warnings = Vec::new();
        if !self.custom_p_tag.contains(LINE_PLACEHOLDER) {
            warnings.push(TemplateWarning::ParagraphTagWithoutLine);
        }
        if !self.custom_image_tag.contains(IMG_PLACEHOLDER) {
            warnings.push(TemplateWarning::ImageTagWithoutImg);
        }
        warnings
    }

    fn resize_slots(&mut self) {
        let html = &self.custom_html;
        resize(
            &mut self.custom_colors,
            placeholder_count(html, PlaceholderKind::Color),
            DEFAULT_SLOT_COLOR,
        );
        resize(
            &mut self.custom_texts,
            placeholder_count(html, PlaceholderKind::Text),
            "",
        );
        resize(
            &mut self.custom_images,
            placeholder_count(html, PlaceholderKind::Image),
            "",
        );
    }

    fn starter_template(&self) -> String {
        format!(
            r#"<div style="max-width: 800px;
margin: 0 auto;
padding: 2rem;
border-radius: {radius}px;
box-shadow: {x}px {y}px {blur}px {spread}px {{{{color::box shadow color}}}};
background-color: {{{{color::box background color}}}};
">
  <span style="font-size: 1.25rem;
  line-height: 1.75rem;
  color: {{{{color::name color}}}};">
    {{{{name}}}}
  </span>
  {{{{content}}}}
</div>"#,
            radius = self.border_radius,
            x = self.shadow.x,
            y = self.shadow.y,
            blur = self.shadow.blur,
            spread = self.shadow.spread,
        )
    }
}

fn resize(list: &mut Vec<String>, len: usize, fill: &str) {
    list.truncate(len);
    while list.len() < len {
        list.push(fill.to_string());
    }
}
