//! Length-bucketed dictionary for passphrase generation.
//!
//! A [`WordBank`] maps word length to the words of exactly that length. It is
//! built once from a raw word list (bundled or user-supplied), then queried
//! read-only per generation session. The bundled list is embedded at compile
//! time and parsed lazily on first access.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::GeneratorError;

/// A word pool must hold strictly more words than this floor, bounding the
/// minimum seen-entropy the generator will silently produce
/// (`log2(101) ≈ 6.7` bits per word).
pub const WORD_POOL_FLOOR: usize = 100;

const BUILTIN_RAW: &str = include_str!("wordlists/builtin.txt");

static BUILTIN_LOCK: OnceLock<WordBank> = OnceLock::new();

/// A dictionary bucketed by word length.
///
/// Invariant: every word in bucket `k` has a character count of exactly `k`.
/// Bucketing is computed from the actual character counts at build time, so
/// the invariant holds by construction regardless of the input source.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl WordBank {
    /// Build a bank from an iterator of words.
    ///
    /// Words are trimmed; empty entries are skipped. Input order within a
    /// bucket is preserved.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            buckets
                .entry(word.chars().count())
                .or_default()
                .push(word.to_owned());
        }
        Self { buckets }
    }

    /// Build a bank from a reader yielding one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Wordlist`] on read failure or if the source
    /// contains no words at all.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GeneratorError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| GeneratorError::Wordlist(e.to_string()))?;
            lines.push(line);
        }
        let bank = Self::from_words(lines);
        if bank.is_empty() {
            return Err(GeneratorError::Wordlist(
                "source contains no words".to_owned(),
            ));
        }
        Ok(bank)
    }

    /// Load a bank from a word file, one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Wordlist`] if the file cannot be opened or
    /// read, or if it contains no words.
    pub fn load_path(path: &Path) -> Result<Self, GeneratorError> {
        let file = File::open(path)
            .map_err(|e| GeneratorError::Wordlist(format!("{}: {e}", path.display())))?;
        Self::from_reader(BufReader::new(file))
    }

    /// The bundled English wordlist, parsed once per process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_LOCK.get_or_init(|| Self::from_words(BUILTIN_RAW.lines()))
    }

    /// Words of exactly the given length, in input order.
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Flatten every bucket within `[min..=max]` into one pool, in bucket
    /// order. The floor check belongs to the caller preparing a generation
    /// request; the raw query itself never fails. Inverted bounds yield an
    /// empty pool.
    #[must_use]
    pub fn pool(&self, min: usize, max: usize) -> Vec<&str> {
        if min > max {
            return Vec::new();
        }
        self.buckets
            .range(min..=max)
            .flat_map(|(_, words)| words.iter().map(String::as_str))
            .collect()
    }

    /// Total word count across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether the bank holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_hold_exact_lengths() {
        let bank = WordBank::from_words(["oak", "pine", "cedar", "fir", "elm"]);
        assert_eq!(bank.bucket(3), ["oak", "fir", "elm"]);
        assert_eq!(bank.bucket(4), ["pine"]);
        assert_eq!(bank.bucket(5), ["cedar"]);
        assert!(bank.bucket(6).is_empty());
    }

    #[test]
    fn from_words_trims_and_skips_empties() {
        let bank = WordBank::from_words(["  oak ", "", "   ", "pine"]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.bucket(3), ["oak"]);
    }

    #[test]
    fn bucketing_counts_chars_not_bytes() {
        let bank = WordBank::from_words(["über"]);
        assert_eq!(bank.bucket(4), ["über"]);
    }

    #[test]
    fn pool_flattens_range_in_bucket_order() {
        let bank = WordBank::from_words(["oak", "pine", "cedar", "fir"]);
        assert_eq!(bank.pool(3, 4), vec!["oak", "fir", "pine"]);
        assert_eq!(bank.pool(1, 9).len(), 4);
        assert!(bank.pool(6, 9).is_empty());
        assert!(bank.pool(4, 3).is_empty());
    }

    #[test]
    fn from_reader_rejects_empty_source() {
        let err = WordBank::from_reader("\n  \n\n".as_bytes());
        assert!(matches!(err, Err(GeneratorError::Wordlist(_))));
    }

    #[test]
    fn builtin_clears_floor_for_default_bounds() {
        let bank = WordBank::builtin();
        assert!(bank.pool(4, 8).len() > WORD_POOL_FLOOR);
    }

    #[test]
    fn builtin_is_lowercase_ascii() {
        for (_, words) in WordBank::builtin().buckets.iter() {
            for word in words {
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "unexpected character in builtin word {word}"
                );
            }
        }
    }
}
