//! Puzzle letter sets
//!
//! A `LetterSet` is one mandatory center letter plus six optional outer letters.

use crate::error::LetterSetError;
use std::fmt;
use std::str::FromStr;

/// Letter used to fill the placeholder set when generation fails
pub const PLACEHOLDER_LETTER: char = '?';

/// Seven puzzle letters: one center letter every answer must use, six outer letters
///
/// Letters are stored lowercase. The center letter never appears among the
/// outer letters, and all seven letters are distinct (except for the
/// [`placeholder`](Self::placeholder) set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet {
    center: char,
    outer: [char; 6],
}

impl LetterSet {
    /// Build a letter set from a center letter and six outer letters
    ///
    /// # Errors
    /// Returns `LetterSetError` if any letter is not ASCII alphabetic or if
    /// a letter is repeated.
    pub fn new(center: char, outer: [char; 6]) -> Result<Self, LetterSetError> {
        let center = center.to_ascii_lowercase();
        let outer = outer.map(|c| c.to_ascii_lowercase());

        if !center.is_ascii_alphabetic() || !outer.iter().all(char::is_ascii_alphabetic) {
            return Err(LetterSetError::NotAlphabetic);
        }

        let mut seen = [false; 26];
        for letter in std::iter::once(center).chain(outer) {
            let idx = (letter as u8 - b'a') as usize;
            if seen[idx] {
                return Err(LetterSetError::DuplicateLetter(letter));
            }
            seen[idx] = true;
        }

        Ok(Self { center, outer })
    }

    /// The sentinel set of seven `?` letters returned when no good puzzle was found
    ///
    /// Its scorebook is always empty; play continues in a degraded state.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            center: PLACEHOLDER_LETTER,
            outer: [PLACEHOLDER_LETTER; 6],
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.center == PLACEHOLDER_LETTER
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    #[inline]
    #[must_use]
    pub const fn outer(&self) -> &[char; 6] {
        &self.outer
    }

    /// Outer letters sorted alphabetically, independent of display order
    #[must_use]
    pub fn sorted_outer(&self) -> [char; 6] {
        let mut sorted = self.outer;
        sorted.sort_unstable();
        sorted
    }

    /// Whether `letter` is one of the seven puzzle letters (case-insensitive)
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.center == letter || self.outer.contains(&letter)
    }

    /// Same letters with the outer letters placed in a different order
    #[must_use]
    pub const fn with_outer_order(&self, outer: [char; 6]) -> Self {
        Self {
            center: self.center,
            outer,
        }
    }
}

impl FromStr for LetterSet {
    type Err = LetterSetError;

    /// Parse seven letters, the first being the center letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 7 {
            return Err(LetterSetError::WrongLength(chars.len()));
        }
        if !chars.iter().all(char::is_ascii_alphabetic) {
            return Err(LetterSetError::NotAlphabetic);
        }

        let outer = [chars[1], chars[2], chars[3], chars[4], chars[5], chars[6]];
        Self::new(chars[0], outer)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.center.to_ascii_uppercase())?;
        for letter in self.outer {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
