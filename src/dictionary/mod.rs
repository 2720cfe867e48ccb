//! Candidate word list for building scorebooks
//!
//! The dictionary is loaded once per process and shared read-only afterwards.

pub mod loader;

use crate::error::DictionaryError;
use std::path::PathBuf;
use std::sync::OnceLock;

pub use loader::DEFAULT_DICTIONARY_URL;

/// Normalized candidate words: lowercase, ASCII letters only, sorted, unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Normalize and collect words, dropping anything with non-letter characters
    pub fn new<'w>(words: impl IntoIterator<Item = &'w str>) -> Self {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where the candidate words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Url(String),
    File(PathBuf),
}

impl WordSource {
    /// Interpret a `--wordlist` value: `url` for the default download, otherwise a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "url" => Self::Url(DEFAULT_DICTIONARY_URL.to_string()),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Self::Url(other.to_string())
            }
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the words from this source
    ///
    /// # Errors
    ///
    /// Propagates loader failures and rejects a dictionary with no usable words.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        let dictionary = match self {
            Self::Url(url) => loader::fetch_from_url(url)?,
            Self::File(path) => loader::load_from_file(path)?,
        };
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dictionary)
    }
}

static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

/// Load the process-wide dictionary on first use and return it thereafter
///
/// Later calls return the cached dictionary and never touch `source`.
///
/// # Errors
///
/// Returns the loading error from the first call; nothing is cached on failure.
pub fn load_once(source: &WordSource) -> Result<&'static Dictionary, DictionaryError> {
    if let Some(dictionary) = DICTIONARY.get() {
        return Ok(dictionary);
    }

    let dictionary = source.load()?;
    log::info!("Loaded {} candidate words from {source:?}", dictionary.len());
    Ok(DICTIONARY.get_or_init(|| dictionary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_filters_and_dedups() {
        let dictionary = Dictionary::new(["Labia", "labia", "co-op", "", "naïve", "plaint"]);
        assert_eq!(dictionary.words(), &["labia", "plaint"]);
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(
            WordSource::from_arg("url"),
            WordSource::Url(DEFAULT_DICTIONARY_URL.to_string())
        );
        assert_eq!(
            WordSource::from_arg("https://example.com/w.json"),
            WordSource::Url("https://example.com/w.json".to_string())
        );
        assert_eq!(
            WordSource::from_arg("data/words.txt"),
            WordSource::File(PathBuf::from("data/words.txt"))
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("terminal_bee_empty_{}.txt", std::process::id()));
        std::fs::write(&path, "\n\n").unwrap();
        let result = WordSource::File(path.clone()).load();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }
}
