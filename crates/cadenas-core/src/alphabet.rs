//! Character categories and alphabet composition.
//!
//! The four category constants are fixed, ordered, duplicate-free ASCII
//! strings. They compose by concatenation into the alphabet a Character-mode
//! request samples from, and their combined size defines the universe the
//! blind-entropy estimate assumes.

use serde::{Deserialize, Serialize};

/// Uppercase letters (A-Z).
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letters (a-z).
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Decimal digits (0-9).
pub const DIGITS: &str = "0123456789";

/// Printable ASCII symbols (29 characters).
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:',.<>?/~";

/// Configuration for which character categories compose the alphabet.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharsetConfig {
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols (!@#$%^&*...).
    pub symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetConfig {
    /// Compose the enabled categories into one ordered alphabet.
    ///
    /// Categories concatenate in declaration order (upper, lower, digits,
    /// symbols). The result is empty when every category is disabled; the
    /// character generator rejects that case.
    #[must_use]
    pub fn compose(&self) -> Vec<char> {
        let mut alphabet = Vec::new();
        if self.uppercase {
            alphabet.extend(UPPERCASE.chars());
        }
        if self.lowercase {
            alphabet.extend(LOWERCASE.chars());
        }
        if self.digits {
            alphabet.extend(DIGITS.chars());
        }
        if self.symbols {
            alphabet.extend(SYMBOLS.chars());
        }
        alphabet
    }
}

/// Deduplicate a character string into an ordered set.
///
/// First occurrence wins, so the displayed order of a separator or padding
/// alphabet is reproducible. Order is irrelevant to the entropy math; only
/// the set size enters the formulas.
#[must_use]
pub fn dedup_chars(s: &str) -> Vec<char> {
    let mut set: Vec<char> = Vec::new();
    for c in s.chars() {
        if !set.contains(&c) {
            set.push(c);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_duplicate_free() {
        for cat in [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS] {
            let deduped = dedup_chars(cat);
            assert_eq!(deduped.len(), cat.chars().count(), "duplicate in {cat}");
        }
    }

    #[test]
    fn default_composes_all_categories() {
        let alphabet = CharsetConfig::default().compose();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 29);
    }

    #[test]
    fn alphanumeric_composes_62() {
        let config = CharsetConfig {
            symbols: false,
            ..CharsetConfig::default()
        };
        assert_eq!(config.compose().len(), 62);
    }

    #[test]
    fn nothing_enabled_composes_empty() {
        let config = CharsetConfig {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        };
        assert!(config.compose().is_empty());
    }

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        assert_eq!(dedup_chars("abcabca"), vec!['a', 'b', 'c']);
        assert_eq!(dedup_chars("--__--"), vec!['-', '_']);
        assert_eq!(dedup_chars(""), Vec::<char>::new());
    }
}
