use serde::{Deserialize, Serialize};

/// The six fixed text styles a chat log line can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyleKind {
    /// Narration outside of any quote or emphasis run.
    Normal,
    /// `*text*`
    Italic,
    /// `**text**`
    Bold,
    /// `***text***`
    ItalicBold,
    /// `'text'` or `‘text’`
    SingleQuote,
    /// `"text"` or `“text”`
    DoubleQuote,
}

impl TextStyleKind {
    /// CSS declarations prepended to the colour when the style is synthesized.
    fn synthesized_prefix(self) -> &'static str {
        match self {
            TextStyleKind::Italic => "font-style:italic; ",
            TextStyleKind::Bold => "font-weight:bold; ",
            TextStyleKind::ItalicBold => "font-style:italic; font-weight:bold; ",
            TextStyleKind::Normal | TextStyleKind::SingleQuote | TextStyleKind::DoubleQuote => "",
        }
    }
}

/// Presentation of one text style: either a solid colour or verbatim custom CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Any CSS colour string, e.g. `#8BE9FD`.
    pub color: String,
    /// A CSS declaration list used verbatim when `use_custom_css` is set.
    #[serde(rename = "customCSS")]
    pub custom_css: String,
    #[serde(rename = "useCustomCSS")]
    pub use_custom_css: bool,
}

impl TextStyle {
    /// A colour-only style whose custom CSS mirrors the colour.
    pub fn from_color(color: &str) -> Self {
        Self {
            color: color.to_string(),
            custom_css: format!("color: {};", color),
            use_custom_css: false,
        }
    }

    /// Returns the declaration list to place in a `style` attribute for `kind`.
    /// Custom CSS and the synthesized declaration are never merged.
    pub fn declaration(&self, kind: TextStyleKind) -> String {
        if self.use_custom_css {
            self.custom_css.clone()
        } else {
            format!("{}color:{}", kind.synthesized_prefix(), self.color)
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle::from_color("#000000")
    }
}

/// The complete style table. All six keys are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextCustom {
    pub normal: TextStyle,
    pub italic: TextStyle,
    pub bold: TextStyle,
    pub italic_bold: TextStyle,
    pub single_quote: TextStyle,
    pub double_quote: TextStyle,
}

impl TextCustom {
    pub fn get(&self, kind: TextStyleKind) -> &TextStyle {
        match kind {
            TextStyleKind::Normal => &self.normal,
            TextStyleKind::Italic => &self.italic,
            TextStyleKind::Bold => &self.bold,
            TextStyleKind::ItalicBold => &self.italic_bold,
            TextStyleKind::SingleQuote => &self.single_quote,
            TextStyleKind::DoubleQuote => &self.double_quote,
        }
    }

    /// Returns a copy of the table with the style for `kind` replaced.
    pub fn with_style(mut self, kind: TextStyleKind, style: TextStyle) -> Self {
        let slot = match kind {
            TextStyleKind::Normal => &mut self.normal,
            TextStyleKind::Italic => &mut self.italic,
            TextStyleKind::Bold => &mut self.bold,
            TextStyleKind::ItalicBold => &mut self.italic_bold,
            TextStyleKind::SingleQuote => &mut self.single_quote,
            TextStyleKind::DoubleQuote => &mut self.double_quote,
        };
        *slot = style;
        self
    }

    /// Style attribute value for `kind`.
    pub fn declaration(&self, kind: TextStyleKind) -> String {
        self.get(kind).declaration(kind)
    }
}

impl Default for TextCustom {
    fn default() -> Self {
        Self {
            normal: TextStyle::from_color("#000000"),
            italic: TextStyle::from_color("#A0A0A0"),
            bold: TextStyle {
                color: "#FFB86C".to_string(),
                custom_css: "color: #dbccbd;".to_string(),
                use_custom_css: false,
            },
            italic_bold: TextStyle::from_color("#FF79C6"),
            single_quote: TextStyle::from_color("#50FA7B"),
            double_quote: TextStyle::from_color("#8BE9FD"),
        }
    }
}
