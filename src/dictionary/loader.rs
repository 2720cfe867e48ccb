//! Word list loading utilities
//!
//! Reads candidate words from a local file or downloads them over HTTP.

use super::Dictionary;
use crate::error::DictionaryError;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Word list used when no local file is given: a JSON object keyed by word
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/lzha97/spelling_bee/master/words.json";

/// Load words from a file
///
/// Files ending in `.json` are read as an object whose keys are the words;
/// anything else is one word per line.
///
/// # Errors
///
/// Returns a `DictionaryError` if the file cannot be read or the JSON is malformed.
///
/// # Examples
/// ```no_run
/// use terminal_bee::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        words_from_json(&content)
    } else {
        Ok(words_from_lines(&content))
    }
}

/// Download the word list at `url`
///
/// A spinner is shown on stderr while the request is in flight.
///
/// # Errors
///
/// Returns a `DictionaryError` on network failure, a non-success status, or
/// a body that is not a JSON object.
pub fn fetch_from_url(url: &str) -> Result<Dictionary, DictionaryError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Downloading word list...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(15))
        .build()
        .and_then(|client| client.get(url).send())
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text);

    let body = match result {
        Ok(body) => body,
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err.into());
        }
    };

    let dictionary = words_from_json(&body);
    match &dictionary {
        Ok(d) => spinner.finish_with_message(format!("Loaded {} words", d.len())),
        Err(_) => spinner.finish_and_clear(),
    }
    dictionary
}

/// Build a dictionary from the keys of a JSON object
///
/// # Errors
///
/// Returns `DictionaryError::Parse` if `json` is not valid JSON, and
/// `DictionaryError::NotAnObject` if it is valid but not an object.
pub fn words_from_json(json: &str) -> Result<Dictionary, DictionaryError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(DictionaryError::NotAnObject)?;
    Ok(Dictionary::new(object.keys().map(String::as_str)))
}

/// Build a dictionary from newline separated words, skipping blank lines
#[must_use]
pub fn words_from_lines(content: &str) -> Dictionary {
    Dictionary::new(content.lines().filter(|line| !line.trim().is_empty()))
}

/// Convert a string slice to a dictionary
///
/// # Examples
/// ```
/// use terminal_bee::dictionary::loader::words_from_slice;
///
/// let dictionary = words_from_slice(&["labia", "Plaint", "blab"]);
/// assert_eq!(dictionary.len(), 3);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().copied())
}
