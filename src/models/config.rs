use serde::{Deserialize, Serialize};

/// Which speaker the next conversion is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedMode {
    #[default]
    Bot,
    Persona,
}

impl SelectedMode {
    pub fn toggled(self) -> Self {
        match self {
            SelectedMode::Bot => SelectedMode::Persona,
            SelectedMode::Persona => SelectedMode::Bot,
        }
    }
}

/// Image hosts the paste flow can re-upload images to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageUploadHost {
    #[default]
    Ibb,
    Arca,
}

/// Conversion-wide options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Strip every `*` left in the output after styling.
    pub remove_asterisk: bool,
    pub preview: bool,
    pub bot_name: String,
    pub persona_name: String,
    pub selected_mode: SelectedMode,
    /// Flip `selected_mode` after each conversion.
    pub change_mode: bool,
    pub image_upload: bool,
    pub image_upload_host: ImageUploadHost,
    pub beautify_paste: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remove_asterisk: true,
            preview: false,
            bot_name: String::new(),
            persona_name: String::new(),
            selected_mode: SelectedMode::Bot,
            change_mode: false,
            image_upload: true,
            image_upload_host: ImageUploadHost::Ibb,
            beautify_paste: false,
        }
    }
}

impl Config {
    /// Name shown in the rendered box for the selected speaker.
    pub fn display_name(&self) -> &str {
        match self.selected_mode {
            SelectedMode::Bot => &self.bot_name,
            SelectedMode::Persona => &self.persona_name,
        }
    }

    /// The config to use for the next conversion.
    pub fn after_conversion(mut self) -> Self {
        if self.change_mode {
            self.selected_mode = self.selected_mode.toggled();
        }
        self
    }
}
