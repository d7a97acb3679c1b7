//! Passphrase-mode password generation.
//!
//! A passphrase is an ordered component sequence joined by one randomly
//! chosen separator character:
//!
//! ```text
//! [prefix symbols...] [digit block] [words...] [digit block] [suffix symbols...]
//! ```
//!
//! Each padding symbol is its own component; each digit block is a single
//! component of the configured width. Every selected word is upper-cased
//! whole-word with probability 1/2, one fair coin per word. The coin is
//! binary by design: the `log2(2)` per-word seen-entropy term depends on it,
//! and a per-character model would change the security claims.

use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use crate::alphabet::{dedup_chars, DIGITS};
use crate::entropy::StructuralParams;
use crate::error::GeneratorError;
use crate::generate::PasswordResult;
use crate::wordbank::{WordBank, WORD_POOL_FLOOR};

/// Default number of words.
pub const DEFAULT_WORD_COUNT: usize = 4;

/// Default minimum word length.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Default maximum word length.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 8;

/// Default padding-symbol alphabet.
pub const DEFAULT_PADDING_SYMBOLS: &str = "!@$%^&*+=:|~?";

/// Default separator alphabet.
pub const DEFAULT_SEPARATORS: &str = "-_.";

/// Resolved configuration for one Passphrase-mode request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassphraseSpec {
    /// Number of words to draw.
    pub word_count: usize,
    /// Shortest eligible word length.
    pub min_word_length: usize,
    /// Longest eligible word length.
    pub max_word_length: usize,
    /// Digits in the block before the words.
    pub prefix_digits: usize,
    /// Digits in the block after the words.
    pub suffix_digits: usize,
    /// Padding symbols before everything else.
    pub prefix_symbols: usize,
    /// Padding symbols after everything else.
    pub suffix_symbols: usize,
    /// Alphabet the padding symbols are drawn from (deduplicated on use).
    pub padding_symbols: String,
    /// Alphabet the separator is drawn from (deduplicated on use).
    pub separators: String,
}

impl Default for PassphraseSpec {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            prefix_digits: 2,
            suffix_digits: 2,
            prefix_symbols: 2,
            suffix_symbols: 2,
            padding_symbols: DEFAULT_PADDING_SYMBOLS.to_owned(),
            separators: DEFAULT_SEPARATORS.to_owned(),
        }
    }
}

/// A validated Passphrase-mode request.
///
/// The word pool and the deduplicated character sets are derived once here
/// and reused across every password of a batch; re-deriving them per
/// password would change nothing observable.
#[derive(Debug)]
pub struct PassphraseContext<'a> {
    word_count: usize,
    prefix_digits: usize,
    suffix_digits: usize,
    prefix_symbols: usize,
    suffix_symbols: usize,
    pool: Vec<&'a str>,
    padding_set: Vec<char>,
    separator_set: Vec<char>,
}

impl<'a> PassphraseContext<'a> {
    /// Validate a spec against a word bank and derive the request-scoped
    /// pool and character sets.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidConfiguration`] for inverted or zero length
    /// bounds, an empty separator set, or an empty padding set while padding
    /// symbols were requested. [`GeneratorError::InsufficientWordPool`] when
    /// the length bounds yield [`WORD_POOL_FLOOR`] or fewer words.
    pub fn prepare(spec: &PassphraseSpec, bank: &'a WordBank) -> Result<Self, GeneratorError> {
        if spec.min_word_length == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "minimum word length must be at least 1".to_owned(),
            ));
        }
        if spec.max_word_length < spec.min_word_length {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "maximum word length ({}) is below minimum word length ({})",
                spec.max_word_length, spec.min_word_length
            )));
        }

        let separator_set = dedup_chars(&spec.separators);
        if separator_set.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "separator alphabet must not be empty".to_owned(),
            ));
        }

        let padding_set = dedup_chars(&spec.padding_symbols);
        let symbols_requested = spec.prefix_symbols.saturating_add(spec.suffix_symbols);
        if padding_set.is_empty() && symbols_requested > 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "padding symbols requested but the padding alphabet is empty".to_owned(),
            ));
        }

        let pool = bank.pool(spec.min_word_length, spec.max_word_length);
        if pool.len() <= WORD_POOL_FLOOR {
            return Err(GeneratorError::insufficient_pool(pool.len()));
        }

        Ok(Self {
            word_count: spec.word_count,
            prefix_digits: spec.prefix_digits,
            suffix_digits: spec.suffix_digits,
            prefix_symbols: spec.prefix_symbols,
            suffix_symbols: spec.suffix_symbols,
            pool,
            padding_set,
            separator_set,
        })
    }

    /// Number of words eligible for selection.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Draw one passphrase.
    pub fn generate<R: Rng + CryptoRng>(&self, rng: &mut R) -> PasswordResult {
        let capacity = self
            .prefix_symbols
            .saturating_add(self.suffix_symbols)
            .saturating_add(self.word_count)
            .saturating_add(2);
        let mut components: Vec<String> = Vec::with_capacity(capacity);

        for _ in 0..self.prefix_symbols {
            components.push(self.draw_symbol(rng).to_string());
        }
        if self.prefix_digits > 0 {
            components.push(self.draw_digit_block(self.prefix_digits, rng));
        }
        for _ in 0..self.word_count {
            let word = self.pool[rng.gen_range(0..self.pool.len())];
            // One fair coin per word: whole-word uppercase or original case.
            if rng.gen_bool(0.5) {
                components.push(word.to_uppercase());
            } else {
                components.push(word.to_owned());
            }
        }
        if self.suffix_digits > 0 {
            components.push(self.draw_digit_block(self.suffix_digits, rng));
        }
        for _ in 0..self.suffix_symbols {
            components.push(self.draw_symbol(rng).to_string());
        }

        // A single-member set needs no randomness; it is still the one
        // separator draw the seen estimate accounts for.
        let separator = if self.separator_set.len() == 1 {
            self.separator_set[0]
        } else {
            self.separator_set[rng.gen_range(0..self.separator_set.len())]
        };

        let password = components.join(&separator.to_string());
        for component in &mut components {
            component.zeroize();
        }

        let rendered_length = password.chars().count();
        PasswordResult {
            password,
            params: StructuralParams::Passphrase {
                word_pool_size: self.pool.len(),
                word_count: self.word_count,
                prefix_symbol_count: self.prefix_symbols,
                suffix_symbol_count: self.suffix_symbols,
                padding_symbol_set_size: self.padding_set.len(),
                prefix_digit_count: self.prefix_digits,
                suffix_digit_count: self.suffix_digits,
                separator_set_size: self.separator_set.len(),
                rendered_length,
            },
        }
    }

    fn draw_symbol<R: Rng + CryptoRng>(&self, rng: &mut R) -> char {
        self.padding_set[rng.gen_range(0..self.padding_set.len())]
    }

    fn draw_digit_block<R: Rng + CryptoRng>(&self, width: usize, rng: &mut R) -> String {
        let digits = DIGITS.as_bytes();
        (0..width)
            .map(|_| char::from(digits[rng.gen_range(0..digits.len())]))
            .collect()
    }
}
