use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// The closed set of moods a user can pick from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Focused,
    Relaxed,
    Motivated,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
    #[error("mood '{0}' is not part of the catalog")]
    NotInCatalog(Mood),
    #[error("mood '{0}' is listed more than once")]
    DuplicateMood(Mood),
    #[error("the mood catalog is empty")]
    EmptyCatalog,
    #[error("quote #{index} has empty text")]
    EmptyQuote { index: usize },
    #[error("failed to load quotes from {path}: {source}")]
    QuoteFile {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}

/// Ordered, immutable list of the moods offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCatalog {
    moods: Vec<Mood>,
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self {
            moods: Mood::iter().collect(),
        }
    }
}

impl MoodCatalog {
    pub fn new(moods: Vec<Mood>) -> Result<Self, CatalogError> {
        if moods.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (i, mood) in moods.iter().enumerate() {
            if moods[..i].contains(mood) {
                return Err(CatalogError::DuplicateMood(*mood));
            }
        }
        Ok(Self { moods })
    }

    pub fn all_moods(&self) -> &[Mood] {
        &self.moods
    }

    pub fn contains(&self, mood: Mood) -> bool {
        self.moods.contains(&mood)
    }

    /// Mood at a display position, used for numbered key bindings.
    pub fn get(&self, index: usize) -> Option<Mood> {
        self.moods.get(index).copied()
    }

    pub fn position(&self, mood: Mood) -> Option<usize> {
        self.moods.iter().position(|m| *m == mood)
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    /// Validate a mood name coming from outside the process.
    pub fn resolve(&self, name: &str) -> Result<Mood, CatalogError> {
        let mood = Mood::from_str(name.trim())
            .map_err(|_| CatalogError::UnknownMood(name.to_string()))?;
        if !self.contains(mood) {
            return Err(CatalogError::NotInCatalog(mood));
        }
        Ok(mood)
    }
}
