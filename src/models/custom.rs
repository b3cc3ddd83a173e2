use serde::{Deserialize, Serialize};

use super::box_custom::BoxCustom;
use super::config::SelectedMode;
use super::text_style::TextCustom;

/// One complete presentation profile for a speaker role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Custom {
    #[serde(rename = "box")]
    pub box_custom: BoxCustom, // `box` is reserved in Rust
    pub text: TextCustom,
}

/// Profiles for both speaker roles of a chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogCustom {
    pub character: Custom,
    pub persona: Custom,
    /// When set, `persona` holds a copy of `character` taken at toggle time.
    pub persona_use_character_custom: bool,
}

impl Default for LogCustom {
    fn default() -> Self {
        Self {
            character: Custom::default(),
            persona: Custom::default(),
            persona_use_character_custom: true,
        }
    }
}

impl LogCustom {
    /// Sets the shared-design flag. Turning it on copies `character` into
    /// `persona` once; later edits to `character` do not carry over.
    pub fn with_persona_use_character_custom(mut self, enabled: bool) -> Self {
        if enabled {
            self.persona = self.character.clone();
        }
        self.persona_use_character_custom = enabled;
        self
    }

    /// Profile used when converting as `mode`.
    pub fn selected(&self, mode: SelectedMode) -> &Custom {
        match mode {
            SelectedMode::Bot => &self.character,
            SelectedMode::Persona => &self.persona,
        }
    }

    /// Replaces the profile for `mode` as a whole value.
    pub fn with_selected(mut self, mode: SelectedMode, custom: Custom) -> Self {
        match mode {
            SelectedMode::Bot => self.character = custom,
            SelectedMode::Persona => self.persona = custom,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_copy_is_detached_from_character() {
        let log = LogCustom {
            persona_use_character_custom: false,
            ..LogCustom::default()
        };
        let mut character = log.character.clone();
        character.box_custom.background_color = "#222222".into();
        let log = log
            .with_selected(SelectedMode::Bot, character)
            .with_persona_use_character_custom(true);
        assert_eq!(log.persona.box_custom.background_color, "#222222");

        let mut edited = log.character.clone();
        edited.box_custom.background_color = "#333333".into();
        edited.text.normal.color = "#444444".into();
        let log = log.with_selected(SelectedMode::Bot, edited);

        assert_eq!(log.character.box_custom.background_color, "#333333");
        assert_eq!(log.persona.box_custom.background_color, "#222222");
        assert_eq!(log.persona.text.normal.color, "#000000");
    }

    #[test]
    fn turning_shared_design_off_keeps_persona() {
        let log = LogCustom::default();
        let mut persona = log.persona.clone();
        persona.box_custom.border_radius = 20.0;
        let log = log
            .with_selected(SelectedMode::Persona, persona)
            .with_persona_use_character_custom(false);
        assert!(!log.persona_use_character_custom);
        assert_eq!(log.persona.box_custom.border_radius, 20.0);
    }

    #[test]
    fn box_field_uses_web_name() {
        let json = serde_json::to_value(Custom::default()).unwrap();
        assert!(json.get("box").is_some());
        assert!(json["box"].get("customHTML").is_some());
        assert!(json["box"].get("customPTag").is_some());
    }
}
