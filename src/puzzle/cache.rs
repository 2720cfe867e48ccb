//! Memoized scorebook construction
//!
//! Puzzle generation may evaluate up to a thousand letter sets, so built
//! scorebooks are cached by their letters with least-recently-used eviction.

use super::scorebook::Scorebook;
use crate::core::{LetterSet, MIN_WORD_LENGTH};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Default number of scorebooks kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache key: outer letters are sorted so display order does not matter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScorebookKey {
    required: char,
    optional: Vec<char>,
    min_size: usize,
}

impl ScorebookKey {
    fn new(required: char, optional: &[char], min_size: usize) -> Self {
        let mut optional: Vec<char> = optional.iter().map(char::to_ascii_lowercase).collect();
        optional.sort_unstable();
        optional.dedup();
        Self {
            required: required.to_ascii_lowercase(),
            optional,
            min_size,
        }
    }
}

/// Bounded LRU map from letters to shared scorebooks
#[derive(Debug)]
pub struct ScorebookCache {
    capacity: usize,
    entries: FxHashMap<ScorebookKey, (Arc<Scorebook>, u64)>,
    clock: u64,
    hits: u64,
    misses: u64,
}

impl ScorebookCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: FxHashMap::default(),
            clock: 0,
            hits: 0,
            misses: 0,
        }
    }

    fn get(&mut self, key: &ScorebookKey) -> Option<Arc<Scorebook>> {
        self.clock += 1;
        let clock = self.clock;
        if let Some((book, last_used)) = self.entries.get_mut(key) {
            *last_used = clock;
            self.hits += 1;
            Some(Arc::clone(book))
        } else {
            self.misses += 1;
            None
        }
    }

    fn insert(&mut self, key: ScorebookKey, book: Arc<Scorebook>) {
        if self.entries.len() >= self.capacity
            && !self.entries.contains_key(&key)
            && let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, (_, last_used))| *last_used)
                .map(|(k, _)| k.clone())
        {
            self.entries.remove(&oldest);
        }
        self.clock += 1;
        self.entries.insert(key, (book, self.clock));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation
    #[must_use]
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for ScorebookCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Builds scorebooks against one dictionary, reusing cached results
#[derive(Debug)]
pub struct ScorebookBuilder<'a> {
    dictionary: &'a Dictionary,
    cache: ScorebookCache,
}

impl<'a> ScorebookBuilder<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_cache(dictionary, ScorebookCache::default())
    }

    #[must_use]
    pub const fn with_cache(dictionary: &'a Dictionary, cache: ScorebookCache) -> Self {
        Self { dictionary, cache }
    }

    /// Scorebook for `required` plus `optional`, built on first request
    pub fn build(&mut self, required: char, optional: &[char], min_size: usize) -> Arc<Scorebook> {
        let key = ScorebookKey::new(required, optional, min_size);
        if let Some(book) = self.cache.get(&key) {
            return book;
        }

        let book = Arc::new(Scorebook::build(
            self.dictionary,
            required,
            optional,
            min_size,
        ));
        self.cache.insert(key, Arc::clone(&book));
        book
    }

    /// Scorebook for a puzzle's letters at the standard minimum word length
    pub fn for_letters(&mut self, letters: &LetterSet) -> Arc<Scorebook> {
        self.build(letters.center(), letters.outer(), MIN_WORD_LENGTH)
    }

    #[must_use]
    pub const fn cache(&self) -> &ScorebookCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        words_from_slice(&["labia", "albit", "tibia", "blab", "pinball", "cabin"])
    }

    #[test]
    fn repeated_builds_hit_the_cache() {
        let dictionary = dictionary();
        let mut builder = ScorebookBuilder::new(&dictionary);

        let first = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);
        let second = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builder.cache().stats(), (1, 1));
    }

    #[test]
    fn outer_order_and_case_share_an_entry() {
        let dictionary = dictionary();
        let mut builder = ScorebookBuilder::new(&dictionary);

        let first = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);
        let second = builder.build('B', &['T', 'p', 'n', 'l', 'i', 'a'], 4);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builder.cache().len(), 1);
    }

    #[test]
    fn min_size_is_part_of_the_key() {
        let dictionary = dictionary();
        let mut builder = ScorebookBuilder::new(&dictionary);

        let four = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);
        let six = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 6);

        assert!(!Arc::ptr_eq(&four, &six));
        assert_eq!(builder.cache().len(), 2);
        assert!(four.contains("labia"));
        assert!(!six.contains("labia"));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let dictionary = dictionary();
        let mut builder = ScorebookBuilder::with_cache(&dictionary, ScorebookCache::new(2));

        let b = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);
        let c = builder.build('c', &['a', 'b', 'i', 'n', 'p', 't'], 4);
        // Touch `b` so `c` becomes the eviction candidate
        builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);
        builder.build('a', &['b', 'i', 'l', 'n', 'p', 't'], 4);

        assert_eq!(builder.cache().len(), 2);
        let b_again = builder.build('b', &['a', 'i', 'l', 'n', 'p', 't'], 4);
        assert!(Arc::ptr_eq(&b, &b_again));
        let c_again = builder.build('c', &['a', 'b', 'i', 'n', 'p', 't'], 4);
        assert!(!Arc::ptr_eq(&c, &c_again));
    }

    #[test]
    fn for_letters_uses_minimum_length() {
        let dictionary = dictionary();
        let mut builder = ScorebookBuilder::new(&dictionary);
        let letters: LetterSet = "bailnpt".parse().unwrap();

        let book = builder.for_letters(&letters);
        assert!(book.contains("blab"));
        assert!(book.contains("pinball"));
        assert!(!book.contains("cabin"));
    }
}
