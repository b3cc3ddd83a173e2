//! Compressed persistence of profiles and config.
//!
//! State is stored as JSON compressed with LZ-string's base64 variant, the
//! same encoding the web UI writes to its cookie and to `?style=` share links,
//! so either side can read what the other wrote.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{LogToolsError, Result};
use crate::models::{config::Config, custom::LogCustom};

/// Cookie name the web UI keeps its state under.
pub const STORAGE_KEY: &str = "app_state";
/// Cookie lifetime in days.
pub const STORAGE_EXPIRES_DAYS: u32 = 30;
pub const STORAGE_PATH: &str = "/";

/// Everything the UI persists. Either half may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_custom: Option<LogCustom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
}

impl StorageState {
    pub fn with_log_custom(mut self, log_custom: LogCustom) -> Self {
        self.log_custom = Some(log_custom);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

/// Serializes and compresses `state` into a cookie/URL-safe string.
pub fn compress_state(state: &StorageState) -> Result<String> {
    let json = serde_json::to_string(state)?;
    let compressed = lz_str::compress_to_base64(json.as_str());
    debug!(
        "[compress_state] {} bytes of JSON -> {} bytes",
        json.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Inverse of [`compress_state`]. Keys missing from the stored JSON are
/// filled with their defaults.
pub fn decompress_state(compressed: &str) -> Result<StorageState> {
    if compressed.trim().is_empty() {
        return Err(LogToolsError::StorageDecode(
            "stored state is empty".to_string(),
        ));
    }

    let wide = lz_str::decompress_from_base64(compressed).ok_or_else(|| {
        warn!("Failed to decompress stored state ({} bytes)", compressed.len());
        LogToolsError::StorageDecode("not valid LZ-string base64 data".to_string())
    })?;
    let json = String::from_utf16(&wide)
        .map_err(|e| LogToolsError::StorageDecode(format!("invalid UTF-16 payload: {}", e)))?;
    if json.is_empty() {
        return Err(LogToolsError::StorageDecode(
            "decompressed state is empty".to_string(),
        ));
    }

    Ok(serde_json::from_str(&json)?)
}

/// Reads the profiles out of a shared style link parameter.
pub fn load_shared_log_custom(param: &str) -> Result<LogCustom> {
    decompress_state(param)?
        .log_custom
        .ok_or_else(|| LogToolsError::StorageDecode("shared state has no profiles".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::SelectedMode;

    #[test]
    fn state_survives_compression() {
        let mut log_custom = LogCustom::default();
        log_custom.character.box_custom.background_color = "#101010".into();
        log_custom.character.text.bold.custom_css = "color: gold; /* 별 */".into();
        let state = StorageState::default()
            .with_log_custom(log_custom)
            .with_config(Config {
                bot_name: "Rin".into(),
                selected_mode: SelectedMode::Persona,
                ..Config::default()
            });

        let compressed = compress_state(&state).unwrap();
        assert!(!compressed.contains('{'));
        assert_eq!(decompress_state(&compressed).unwrap(), state);
    }

    #[test]
    fn partial_json_is_backfilled_with_defaults() {
        let json = r##"{"logCustom":{"character":{"box":{"borderRadius":16}}},"config":{"botName":"Kai"}}"##;
        let compressed = lz_str::compress_to_base64(json);

        let state = decompress_state(&compressed).unwrap();
        let log_custom = state.log_custom.unwrap();
        assert_eq!(log_custom.character.box_custom.border_radius, 16.0);
        assert_eq!(log_custom.character.box_custom.background_color, "#ffffff");
        assert_eq!(log_custom.persona, crate::models::Custom::default());
        assert!(log_custom.persona_use_character_custom);

        let config = state.config.unwrap();
        assert_eq!(config.bot_name, "Kai");
        assert!(config.remove_asterisk);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            decompress_state("  "),
            Err(LogToolsError::StorageDecode(_))
        ));
    }

    #[test]
    fn non_json_payload_is_a_json_error() {
        let compressed = lz_str::compress_to_base64("not a cookie");
        assert!(matches!(
            decompress_state(&compressed),
            Err(LogToolsError::JsonDeserialization(_))
        ));
    }

    #[test]
    fn shared_link_without_profiles_is_an_error() {
        let compressed = compress_state(&StorageState::default().with_config(Config::default())).unwrap();
        assert!(load_shared_log_custom(&compressed).is_err());
    }
}
