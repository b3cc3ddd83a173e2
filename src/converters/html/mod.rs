//! Converts plain chat-log text into styled HTML for re-posting.
//!
//! The conversion is a one-way pipeline of pure functions:
//! raw text → styled lines ([`emphasis`]) → paragraph and image chunks
//! ([`paragraph`]) → boxed fragment ([`boxes`]), sanitized when a
//! user-authored template produced it.
//!
//! # Current Features & Limitations:
//! *   `*`, `**`, `***` emphasis and straight/curly quotation styling.
//! *   Blank-line paragraphs and whole-line `{{img::url}}` directives.
//! *   Fixed box or custom template with positional `{{color}}`, `{{text}}`,
//!     `{{image}}` slots plus `{{content}}` and `{{name}}`.
//! *   Styling is regex substitution, not a markup parser: unpaired markers
//!     stay in the text and nothing in the input is HTML-escaped.

mod boxes;
pub mod constants;
mod emphasis;
mod error;
mod paragraph;
pub mod placeholders;
mod sanitize;

pub use boxes::render_box;
pub use emphasis::style_line;
pub use error::{HtmlConversionError, Result};
pub use paragraph::{assemble, render_body};
pub use sanitize::sanitize_html;

use log::debug;

use crate::models::{
    config::{Config, SelectedMode},
    custom::{Custom, LogCustom},
};

/// Anything that can supply the profile for a speaker role: a single
/// [`Custom`] used for both roles, or a [`LogCustom`] holding one per role.
pub trait ProfileSource {
    fn profile(&self, mode: SelectedMode) -> &Custom;
}

impl ProfileSource for Custom {
    fn profile(&self, _mode: SelectedMode) -> &Custom {
        self
    }
}

impl ProfileSource for LogCustom {
    fn profile(&self, mode: SelectedMode) -> &Custom {
        self.selected(mode)
    }
}

/// Converts a chat log into a complete HTML fragment.
///
/// The profile and display name follow `config.selected_mode`. Inputs are
/// only read; flipping the mode afterwards (`change_mode`) is up to the caller,
/// see [`Config::after_conversion`].
///
/// # Arguments
/// * `text` - The raw log; surrounding whitespace is ignored.
/// * `config` - Conversion options.
/// * `profiles` - A [`Custom`] or a [`LogCustom`].
///
/// # Returns
/// The HTML string. Malformed templates degrade instead of failing; the only
/// error is a formatting failure while writing the output.
pub fn convert_to_html<P>(text: &str, config: &Config, profiles: &P) -> Result<String>
where
    P: ProfileSource + ?Sized,
{
    let custom = profiles.profile(config.selected_mode);
    let name = config.display_name();
    debug!(
        "[convert_to_html] mode={:?} custom_mode={} input={} bytes",
        config.selected_mode,
        custom.box_custom.is_custom_mode,
        text.len()
    );

    let body = render_body(text.trim(), config, custom)?;
    render_box(&body, custom, name)
}
