//! Presentation profiles and conversion options, serialized with the field
//! names the web UI persists.

pub mod box_custom;
pub mod config;
pub mod custom;
pub mod text_style;

pub use box_custom::{BoxCustom, Shadow, TemplateWarning};
pub use config::{Config, ImageUploadHost, SelectedMode};
pub use custom::{Custom, LogCustom};
pub use text_style::{TextCustom, TextStyle, TextStyleKind};
