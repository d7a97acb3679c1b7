//! Generation orchestration.
//!
//! Resolves a [`GenerationSpec`] into a prepared context, drives repeated
//! generation for a requested count, and pairs every password with its
//! entropy report. Validation happens before the first draw: a batch either
//! fully succeeds or fully fails.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::character::{CharacterContext, CharacterSpec};
use crate::entropy::{estimate, EntropyReport, StructuralParams};
use crate::error::GeneratorError;
use crate::passphrase::{PassphraseContext, PassphraseSpec};
use crate::wordbank::WordBank;

/// The resolved configuration for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum GenerationSpec {
    /// Independent random characters from a composed alphabet.
    Character(CharacterSpec),
    /// Dictionary words with optional padding, separator-joined.
    Passphrase(PassphraseSpec),
}

/// A generated secret plus the structural parameters it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResult {
    /// The secret value.
    pub password: String,
    /// The exact parameters used, the sole input to entropy estimation.
    pub params: StructuralParams,
}

/// One orchestrator output record: password, parameters, entropy figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPassword {
    /// The secret value.
    pub password: String,
    /// Structural parameters the password was built from.
    pub params: StructuralParams,
    /// Blind and seen entropy, in bits.
    pub entropy: EntropyReport,
}

enum PreparedContext<'a> {
    Character(CharacterContext),
    Passphrase(PassphraseContext<'a>),
}

impl PreparedContext<'_> {
    fn generate<R: Rng + CryptoRng>(&self, rng: &mut R) -> PasswordResult {
        match self {
            Self::Character(ctx) => ctx.generate(rng),
            Self::Passphrase(ctx) => ctx.generate(rng),
        }
    }
}

/// Generate `count` independent passwords with the OS CSPRNG.
///
/// Passphrase mode requires a word bank; Character mode ignores it. The word
/// pool, deduplicated character sets, and composed alphabet are prepared
/// once and reused across all iterations. Results are independent draws and
/// may contain duplicates.
///
/// # Errors
///
/// Any validation failure is surfaced before a single password is generated:
/// [`GeneratorError::InvalidConfiguration`] for a bad spec, a zero count, or
/// passphrase mode without a bank; [`GeneratorError::InsufficientWordPool`]
/// when the word pool does not clear its floor.
pub fn generate_batch(
    spec: &GenerationSpec,
    bank: Option<&WordBank>,
    count: usize,
) -> Result<Vec<GeneratedPassword>, GeneratorError> {
    generate_batch_with_rng(spec, bank, count, &mut OsRng)
}

/// [`generate_batch`] with a caller-supplied RNG.
///
/// The RNG is only consulted through uniform sampling, so substituting a
/// different `CryptoRng` changes no combinatorial formula.
///
/// # Errors
///
/// Same conditions as [`generate_batch`].
pub fn generate_batch_with_rng<R: Rng + CryptoRng>(
    spec: &GenerationSpec,
    bank: Option<&WordBank>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>, GeneratorError> {
    if count == 0 {
        return Err(GeneratorError::InvalidConfiguration(
            "count must be at least 1".to_owned(),
        ));
    }

    let context = match spec {
        GenerationSpec::Character(spec) => PreparedContext::Character(CharacterContext::prepare(spec)?),
        GenerationSpec::Passphrase(spec) => {
            let bank = bank.ok_or_else(|| {
                GeneratorError::InvalidConfiguration(
                    "passphrase mode requires a word bank".to_owned(),
                )
            })?;
            PreparedContext::Passphrase(PassphraseContext::prepare(spec, bank)?)
        }
    };

    let mut results = Vec::with_capacity(count);
    for _ in 0..count {
        let result = context.generate(rng);
        let entropy = estimate(&result.params);
        results.push(GeneratedPassword {
            password: result.password,
            params: result.params,
            entropy,
        });
    }
    Ok(results)
}
