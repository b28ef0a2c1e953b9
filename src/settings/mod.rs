//! Saved generation defaults.

mod file;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use safepass::{CharacterClass, ClassSet, GenerationRequest, LengthPolicy};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&file::path()?)
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save(self, &file::path()?)
    }

    pub fn classes(&self) -> ClassSet {
        let mut classes = ClassSet::empty();
        classes.set(CharacterClass::Lowercase, self.lowercase);
        classes.set(CharacterClass::Uppercase, self.uppercase);
        classes.set(CharacterClass::Digit, self.numbers);
        classes.set(CharacterClass::Symbol, self.symbols);
        classes
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes(), self.exclude_similar)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: LengthPolicy::DEFAULT_LENGTH,
            count: 1,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
            exclude_similar: true,
        }
    }
}
