use crate::mood::{CatalogError, Mood, MoodCatalog};
use crate::quotes::QuoteStore;
use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;

pub const CONFIG_PATH: &str = "moodboard.toml";
const ENV_PREFIX: &str = "MOODBOARD_";
const DEFAULT_TICK_RATE_MS: u64 = 50;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
    #[error("existing settings file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    /// Catalog order as shown in the mood filter.
    pub moods: Vec<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes_file: Option<PathBuf>,
    /// Fixed seed for reproducible quote selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            moods: Mood::iter().collect(),
            quotes_file: None,
            seed: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Settings {
    /// Load `moodboard.toml` from the working directory, writing the
    /// defaults there when it does not exist yet.
    pub fn new() -> Result<Self, SettingsError> {
        let path = Path::new(CONFIG_PATH);
        let settings = Self::load_from(path)?;
        if !path.exists() {
            settings.save_to(path)?;
        }
        Ok(settings)
    }

    /// Defaults, overridden by the TOML file at `path` (if present), then by
    /// `MOODBOARD_*` environment variables.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| SettingsError::Extract(Box::new(e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Persist only the theme key. Every other key in the file at `path` is
    /// kept as written, even when it failed to load, and a file that is not
    /// TOML at all is left alone.
    pub fn save_theme_to(path: &Path, theme: ThemeVariant) -> Result<(), SettingsError> {
        let mut table = match fs::read_to_string(path) {
            Ok(contents) => contents.parse::<toml::Table>()?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(err) => return Err(err.into()),
        };
        table.insert("theme".to_string(), toml::Value::try_from(theme)?);
        fs::write(path, toml::to_string_pretty(&table)?)?;
        tracing::debug!(path = %path.display(), ?theme, "theme saved");
        Ok(())
    }

    pub fn catalog(&self) -> Result<MoodCatalog, CatalogError> {
        MoodCatalog::new(self.moods.clone())
    }

    /// The configured quote file, or the bundled quotes when none is set.
    pub fn quote_store(&self, catalog: &MoodCatalog) -> Result<QuoteStore, CatalogError> {
        match &self.quotes_file {
            Some(path) => QuoteStore::from_toml_file(path, catalog),
            None => Ok(QuoteStore::builtin(catalog)),
        }
    }
}
