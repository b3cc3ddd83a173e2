//! The positional CBS placeholders of a custom box template.
//!
//! `{{color}}`, `{{text}}` and `{{image}}` may carry an optional `::label`.
//! The label only captions the slot for whoever edits the values; lookup is
//! purely by order of appearance.

use log::warn;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static COLOR_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{color(?:::(.*?))?\}\}").expect("color slot pattern is valid"));
static TEXT_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{text(?:::(.*?))?\}\}").expect("text slot pattern is valid"));
static IMAGE_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{image(?:::(.*?))?\}\}").expect("image slot pattern is valid"));

/// A category of positional placeholder, each backed by its own value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Color,
    Text,
    Image,
}

impl PlaceholderKind {
    /// Fill order used by the box renderer.
    pub const FILL_ORDER: [PlaceholderKind; 3] = [
        PlaceholderKind::Image,
        PlaceholderKind::Text,
        PlaceholderKind::Color,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            PlaceholderKind::Color => &COLOR_SLOT,
            PlaceholderKind::Text => &TEXT_SLOT,
            PlaceholderKind::Image => &IMAGE_SLOT,
        }
    }
}

/// Number of `kind` placeholders in `template`.
pub fn placeholder_count(template: &str, kind: PlaceholderKind) -> usize {
    kind.pattern().find_iter(template).count()
}

/// Labels of the `kind` placeholders in order of appearance (`None` for a bare
/// placeholder).
pub fn placeholder_labels(template: &str, kind: PlaceholderKind) -> Vec<Option<String>> {
    kind.pattern()
        .captures_iter(template)
        .map(|caps| caps.get(1).map(|label| label.as_str().to_string()))
        .collect()
}

/// Replaces the `kind` placeholders left to right with successive entries of
/// `values`. Placeholders beyond the end of the list become empty strings.
pub fn fill_positional(template: &str, kind: PlaceholderKind, values: &[String]) -> String {
    let mut next = 0;
    let filled = kind.pattern().replace_all(template, |_: &Captures| {
        let value = values.get(next).cloned().unwrap_or_default();
        next += 1;
        value
    });
    if next > values.len() {
        warn!(
            "{:?} placeholders outnumber their values ({} > {}); extra slots left empty",
            kind,
            next,
            values.len()
        );
    }
    filled.into_owned()
}

/// The whole-line directive that places an image in a chat log.
pub fn image_directive(url: &str) -> String {
    format!("{{{{img::{}}}}}", url)
}
