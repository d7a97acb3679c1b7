//! Character-mode password generation.
//!
//! Draws every position independently and uniformly (with replacement) from
//! the composed alphabet. There is no guaranteed-one-per-category placement
//! and no shuffle: the seen-entropy figure `length * log2(alphabet_size)` is
//! exact only under pure independent sampling.

use rand::{CryptoRng, Rng};

use crate::alphabet::CharsetConfig;
use crate::entropy::StructuralParams;
use crate::error::GeneratorError;
use crate::generate::PasswordResult;

/// Minimum allowed password length.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Maximum allowed password length.
pub const MAX_PASSWORD_LENGTH: usize = 255;

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 20;

/// Resolved configuration for one Character-mode request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSpec {
    /// Target length in characters.
    pub length: usize,
    /// Which categories compose the alphabet.
    pub charsets: CharsetConfig,
}

impl Default for CharacterSpec {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            charsets: CharsetConfig::default(),
        }
    }
}

/// A validated Character-mode request: the alphabet is composed once and
/// reused across every password of a batch.
#[derive(Debug)]
pub struct CharacterContext {
    length: usize,
    alphabet: Vec<char>,
}

impl CharacterContext {
    /// Validate a spec and compose its alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfiguration`] if the length is
    /// outside [`MIN_PASSWORD_LENGTH`]`..=`[`MAX_PASSWORD_LENGTH`] or no
    /// category is enabled.
    pub fn prepare(spec: &CharacterSpec) -> Result<Self, GeneratorError> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&spec.length) {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {}",
                spec.length
            )));
        }
        let alphabet = spec.charsets.compose();
        if alphabet.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "at least one character category must be enabled".to_owned(),
            ));
        }
        Ok(Self {
            length: spec.length,
            alphabet,
        })
    }

    /// Size of the composed alphabet.
    #[must_use]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.len()
    }

    /// Draw one password.
    pub fn generate<R: Rng + CryptoRng>(&self, rng: &mut R) -> PasswordResult {
        let password: String = (0..self.length)
            .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
            .collect();
        PasswordResult {
            password,
            params: StructuralParams::Character {
                length: self.length,
                alphabet_size: self.alphabet.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn emits_exact_length_and_alphabet_membership() {
        let spec = CharacterSpec {
            length: 30,
            charsets: CharsetConfig {
                symbols: false,
                ..CharsetConfig::default()
            },
        };
        let ctx = CharacterContext::prepare(&spec).expect("valid spec");
        assert_eq!(ctx.alphabet_size(), 62);
        for _ in 0..20 {
            let result = ctx.generate(&mut OsRng);
            assert_eq!(result.password.chars().count(), 30);
            let alphabet = spec.charsets.compose();
            assert!(result.password.chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn surfaces_length_and_alphabet_size() {
        let ctx = CharacterContext::prepare(&CharacterSpec::default()).expect("valid spec");
        let result = ctx.generate(&mut OsRng);
        assert_eq!(
            result.params,
            StructuralParams::Character {
                length: DEFAULT_PASSWORD_LENGTH,
                alphabet_size: 91,
            }
        );
    }

    #[test]
    fn rejects_empty_alphabet() {
        let spec = CharacterSpec {
            length: 20,
            charsets: CharsetConfig {
                uppercase: false,
                lowercase: false,
                digits: false,
                symbols: false,
            },
        };
        let err = CharacterContext::prepare(&spec);
        assert!(matches!(
            err,
            Err(GeneratorError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_out_of_bounds_lengths() {
        for length in [0, MIN_PASSWORD_LENGTH - 1, MAX_PASSWORD_LENGTH + 1] {
            let spec = CharacterSpec {
                length,
                ..CharacterSpec::default()
            };
            assert!(CharacterContext::prepare(&spec).is_err(), "length {length}");
        }
    }

    #[test]
    fn accepts_boundary_lengths() {
        for length in [MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH] {
            let spec = CharacterSpec {
                length,
                ..CharacterSpec::default()
            };
            let ctx = CharacterContext::prepare(&spec).expect("boundary length");
            assert_eq!(ctx.generate(&mut OsRng).password.chars().count(), length);
        }
    }
}
