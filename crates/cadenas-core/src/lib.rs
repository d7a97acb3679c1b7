//! `cadenas-core` — Password and passphrase generation with dual entropy
//! estimation.
//!
//! This crate is the audit target: zero I/O beyond wordlist ingestion, zero
//! async, zero terminal dependencies. Every generated password is paired
//! with two entropy figures, one for an attacker who sees only the rendered
//! string (blind) and one for an attacker who knows the generation
//! parameters but not the random draws (seen).

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod alphabet;

pub mod wordbank;

pub mod entropy;

pub mod character;

pub mod passphrase;

pub mod generate;

pub use alphabet::{dedup_chars, CharsetConfig, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use character::{
    CharacterContext, CharacterSpec, DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use entropy::{
    estimate, EntropyReport, StructuralParams, DIGIT_SET_SIZE, GENERIC_ALPHABET_SIZE,
};
pub use error::GeneratorError;
pub use generate::{
    generate_batch, generate_batch_with_rng, GeneratedPassword, GenerationSpec, PasswordResult,
};
pub use passphrase::{
    PassphraseContext, PassphraseSpec, DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH,
    DEFAULT_PADDING_SYMBOLS, DEFAULT_SEPARATORS, DEFAULT_WORD_COUNT,
};
pub use wordbank::{WordBank, WORD_POOL_FLOOR};
