pub mod client;
pub mod converters;
pub mod errors;
pub mod models;
pub mod storage;

pub use client::ImageUploader;
pub use converters::html::{convert_to_html, ProfileSource};
pub use errors::{LogToolsError, Result};
pub use models::{Config, Custom, LogCustom};

use wasm_bindgen::prelude::*;

/// Runs a conversion from the JSON shapes the web UI keeps in its state.
///
/// `profile_json` is either a `LogCustom` (an object with a `character` key)
/// or a single `Custom`.
pub fn convert_json(text: &str, config_json: &str, profile_json: &str) -> Result<String> {
    let config: Config = serde_json::from_str(config_json)?;
    let profile: serde_json::Value = serde_json::from_str(profile_json)?;

    let html = if profile.get("character").is_some() {
        let log_custom: LogCustom = serde_json::from_value(profile)?;
        convert_to_html(text, &config, &log_custom)?
    } else {
        let custom: Custom = serde_json::from_value(profile)?;
        convert_to_html(text, &config, &custom)?
    };
    Ok(html)
}

#[wasm_bindgen(js_name = convertToHtml)]
pub fn convert_to_html_js(
    text: &str,
    config_json: &str,
    profile_json: &str,
) -> std::result::Result<String, JsError> {
    convert_json(text, config_json, profile_json).map_err(|e| JsError::new(&e.to_string()))
}

/// Routes `log` output to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second call finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}
