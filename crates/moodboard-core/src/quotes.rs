use crate::mood::{CatalogError, Mood, MoodCatalog};
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_QUOTES: &[(&str, Mood)] = &[
    ("Happiness is not by chance, but by choice.", Mood::Happy),
    ("Keep your face always toward the sunshine.", Mood::Happy),
    ("The most wasted of days is one without laughter.", Mood::Happy),
    ("Joy is the simplest form of gratitude.", Mood::Happy),
    ("Where focus goes, energy flows.", Mood::Focused),
    ("Do one thing at a time, and do it well.", Mood::Focused),
    ("Concentrate all your thoughts upon the work at hand.", Mood::Focused),
    ("The successful warrior is the average person with laser-like focus.", Mood::Focused),
    ("Breathe. Let go. This moment is the only one you have.", Mood::Relaxed),
    ("Almost everything will work again if you unplug it for a few minutes.", Mood::Relaxed),
    ("Rest is not idleness.", Mood::Relaxed),
    ("Slow down and everything you are chasing will come around and catch you.", Mood::Relaxed),
    ("It always seems impossible until it's done.", Mood::Motivated),
    ("Don't watch the clock; do what it does. Keep going.", Mood::Motivated),
    ("The secret of getting ahead is getting started.", Mood::Motivated),
    ("Small steps every day add up to big results.", Mood::Motivated),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub mood: Mood,
}

impl Quote {
    pub fn new(text: impl Into<String>, mood: Mood) -> Self {
        Self {
            text: text.into(),
            mood,
        }
    }
}

#[derive(Deserialize)]
struct QuoteFile {
    #[serde(default)]
    quotes: Vec<Quote>,
}

/// Immutable collection of quotes, each tagged with a catalog mood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Build a store, checking every quote against the catalog.
    pub fn new(quotes: Vec<Quote>, catalog: &MoodCatalog) -> Result<Self, CatalogError> {
        for (index, quote) in quotes.iter().enumerate() {
            if quote.text.trim().is_empty() {
                return Err(CatalogError::EmptyQuote { index });
            }
            if !catalog.contains(quote.mood) {
                return Err(CatalogError::NotInCatalog(quote.mood));
            }
        }
        Ok(Self { quotes })
    }

    /// The bundled quotes, restricted to the moods present in `catalog`.
    pub fn builtin(catalog: &MoodCatalog) -> Self {
        let quotes = BUILTIN_QUOTES
            .iter()
            .filter(|(_, mood)| catalog.contains(*mood))
            .map(|(text, mood)| Quote::new(*text, *mood))
            .collect();
        Self { quotes }
    }

    /// Load `[[quotes]]` tables from a TOML file.
    pub fn from_toml_file(path: &Path, catalog: &MoodCatalog) -> Result<Self, CatalogError> {
        let wrap = |source: figment::Error| CatalogError::QuoteFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        if !path.is_file() {
            return Err(wrap(figment::Error::from(String::from("file not found"))));
        }
        let file: QuoteFile = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(wrap)?;
        let store = Self::new(file.quotes, catalog)?;
        tracing::info!(path = %path.display(), count = store.len(), "loaded quotes");
        Ok(store)
    }

    pub fn quotes_for(&self, mood: Mood) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.mood == mood).collect()
    }

    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
