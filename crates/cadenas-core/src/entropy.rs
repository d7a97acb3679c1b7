//! Dual entropy estimation.
//!
//! Two theoretical figures, both in bits, are computed for every generated
//! password from its structural parameters alone (never from the secret
//! text):
//!
//! - **Blind entropy** models an attacker who sees only the rendered string:
//!   the search space is the full printable universe raised to the rendered
//!   length.
//! - **Seen entropy** models an attacker who knows the exact generation
//!   parameters but not the random draws: the search space is the product of
//!   the independent combinatorial factors that were actually sampled.
//!
//! Estimation is a pure function. Calling it twice on the same parameters
//! returns bit-identical figures.

use serde::{Deserialize, Serialize};

/// Size of the printable universe assumed by the blind estimate: the four
/// category constants in [`crate::alphabet`] concatenated
/// (26 upper + 26 lower + 10 digits + 29 symbols).
///
/// Reported figures are only comparable across versions while this constant
/// is stable. Do not change it.
pub const GENERIC_ALPHABET_SIZE: usize = 91;

/// Number of choices a single random digit carries.
pub const DIGIT_SET_SIZE: usize = 10;

/// The exact structural parameters a password was built from.
///
/// This record, not the password text, is the sole input to entropy
/// estimation. Set sizes are post-deduplication; `rendered_length` is the
/// character count of the final emitted string, separators and casing
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum StructuralParams {
    /// Character mode: independent uniform draws from one alphabet.
    Character {
        /// Number of characters drawn.
        length: usize,
        /// Size of the composed alphabet.
        alphabet_size: usize,
    },
    /// Passphrase mode: words plus optional padding, separator-joined.
    Passphrase {
        /// Number of words eligible for selection.
        word_pool_size: usize,
        /// Words drawn.
        word_count: usize,
        /// Padding symbols before the first component.
        prefix_symbol_count: usize,
        /// Padding symbols after the last component.
        suffix_symbol_count: usize,
        /// Deduplicated padding-symbol set size.
        padding_symbol_set_size: usize,
        /// Digits in the leading digit block.
        prefix_digit_count: usize,
        /// Digits in the trailing digit block.
        suffix_digit_count: usize,
        /// Deduplicated separator set size.
        separator_set_size: usize,
        /// Character count of the final emitted string.
        rendered_length: usize,
    },
}

/// Blind and seen entropy for one generated password, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntropyReport {
    /// Search-space bits assuming the attacker knows only the rendered
    /// length.
    pub blind_entropy: f64,
    /// Search-space bits assuming the attacker knows the generation
    /// parameters but not the random draws.
    pub seen_entropy: f64,
}

/// Bits contributed by `count` independent uniform draws from `choices`
/// alternatives.
///
/// A factor with count 0 contributes nothing, whatever its base. A base of 1
/// contributes 0 (a fixed single choice carries no entropy); that is
/// `log2(1) = 0`, not a fault. A base of 0 only occurs alongside count 0
/// after validation, and the guard keeps the result finite either way.
#[allow(clippy::cast_precision_loss)]
fn factor_bits(count: usize, choices: usize) -> f64 {
    if count == 0 || choices == 0 {
        return 0.0;
    }
    (count as f64) * (choices as f64).log2()
}

/// Compute both entropy figures from structural parameters.
///
/// For Character mode blind equals seen by design: the alphabet is assumed
/// public knowledge under both attacker models, so the only secret is which
/// of `alphabet_size^length` strings was drawn. For Passphrase mode the seen
/// estimate sums the log2 of each independent factor (word choices, one case
/// coin per word, padding symbols, digits, separator choice) while the blind
/// estimate sees only a rendered string over the generic universe.
#[must_use]
pub fn estimate(params: &StructuralParams) -> EntropyReport {
    match *params {
        StructuralParams::Character {
            length,
            alphabet_size,
        } => {
            let bits = factor_bits(length, alphabet_size);
            EntropyReport {
                blind_entropy: bits,
                seen_entropy: bits,
            }
        }
        StructuralParams::Passphrase {
            word_pool_size,
            word_count,
            prefix_symbol_count,
            suffix_symbol_count,
            padding_symbol_set_size,
            prefix_digit_count,
            suffix_digit_count,
            separator_set_size,
            rendered_length,
        } => {
            let symbol_count = prefix_symbol_count.saturating_add(suffix_symbol_count);
            let digit_count = prefix_digit_count.saturating_add(suffix_digit_count);
            let seen = factor_bits(word_count, word_pool_size)
                + factor_bits(word_count, 2)
                + factor_bits(symbol_count, padding_symbol_set_size)
                + factor_bits(digit_count, DIGIT_SET_SIZE)
                + factor_bits(1, separator_set_size);
            EntropyReport {
                blind_entropy: factor_bits(rendered_length, GENERIC_ALPHABET_SIZE),
                seen_entropy: seen,
            }
        }
    }
}
