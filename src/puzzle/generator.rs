//! Random letter set generation
//!
//! Draws vowels and consonants at random and keeps the first set whose
//! scorebook is neither too small nor too large and contains a pangram.

use super::cache::ScorebookBuilder;
use crate::core::LetterSet;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Candidates tried before giving up and returning the placeholder set
pub const MAX_ATTEMPTS: usize = 1000;

/// A good puzzle has strictly more answers than this
pub const MIN_ANSWERS_EXCLUSIVE: usize = 10;

/// A good puzzle has strictly fewer answers than this
pub const MAX_ANSWERS_EXCLUSIVE: usize = 100;

/// Generate a random playable letter set
///
/// Returns [`LetterSet::placeholder`] when no candidate passes
/// [`is_good_selection`] within [`MAX_ATTEMPTS`] tries.
pub fn generate<R: Rng + ?Sized>(builder: &mut ScorebookBuilder<'_>, rng: &mut R) -> LetterSet {
    for attempt in 1..=MAX_ATTEMPTS {
        let candidate = random_candidate(rng);
        if is_good_selection(builder, &candidate) {
            let (hits, misses) = builder.cache().stats();
            log::info!(
                "Generated letter set {candidate} after {attempt} attempts \
                 (scorebook cache: {hits} hits, {misses} misses)"
            );
            return candidate;
        }
    }

    let (hits, misses) = builder.cache().stats();
    log::warn!(
        "No good letter set found in {MAX_ATTEMPTS} attempts, using placeholder \
         (scorebook cache: {hits} hits, {misses} misses)"
    );
    LetterSet::placeholder()
}

/// Draw 2 or 3 vowels and fill to seven with consonants, then shuffle
///
/// The first shuffled letter becomes the center.
pub fn random_candidate<R: Rng + ?Sized>(rng: &mut R) -> LetterSet {
    let vowel_count = rng.random_range(2..=3);

    let mut letters: Vec<char> = VOWELS
        .choose_multiple(rng, vowel_count)
        .chain(CONSONANTS.choose_multiple(rng, 7 - vowel_count))
        .copied()
        .collect();
    letters.shuffle(rng);

    let outer = [
        letters[1], letters[2], letters[3], letters[4], letters[5], letters[6],
    ];
    // Vowels and consonants are disjoint and drawn without replacement
    LetterSet::new(letters[0], outer).unwrap_or_else(|_| LetterSet::placeholder())
}

/// Whether a letter set makes a reasonable puzzle
///
/// Accepts answer counts in `11..=99` with at least one pangram.
pub fn is_good_selection(builder: &mut ScorebookBuilder<'_>, letters: &LetterSet) -> bool {
    let book = builder.for_letters(letters);
    let n_words = book.len();
    let n_pangrams = book.pangram_count();
    log::debug!("Checking set {letters} with n_words={n_words} and n_pangrams={n_pangrams}");

    n_words > MIN_ANSWERS_EXCLUSIVE && n_words < MAX_ANSWERS_EXCLUSIVE && n_pangrams >= 1
}
