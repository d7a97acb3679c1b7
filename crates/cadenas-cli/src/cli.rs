//! Command line interface definition and spec resolution.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cadenas_core::{
    CharacterSpec, CharsetConfig, GenerationSpec, PassphraseSpec, DEFAULT_MAX_WORD_LENGTH,
    DEFAULT_MIN_WORD_LENGTH, DEFAULT_PADDING_SYMBOLS, DEFAULT_PASSWORD_LENGTH, DEFAULT_SEPARATORS,
    DEFAULT_WORD_COUNT,
};

/// CADENAS generates random passwords and passphrases and reports, for each,
/// the entropy an attacker faces with and without knowledge of how it was
/// built.
#[derive(Parser, Debug)]
#[command(name = "cadenas", author, version, about, long_about = None)]
pub struct Cli {
    /// The generation strategy to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Number of passwords to generate.
    #[arg(short = 'n', long, global = true, default_value_t = 1)]
    pub count: usize,

    /// Emit records as a JSON array instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Print passwords only, without entropy columns.
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Increase diagnostic verbosity (-v debug, -vv trace). Diagnostics go
    /// to stderr; generated passwords never appear in them.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available generation strategies.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Independent random characters from a configurable alphabet.
    Chars(CharArgs),
    /// Dictionary words with optional digit and symbol padding.
    Words(WordArgs),
}

/// Options for character-mode generation.
#[allow(clippy::struct_excessive_bools)] // CLI flags are legitimately booleans
#[derive(Args, Debug)]
pub struct CharArgs {
    /// Password length in characters.
    #[arg(short, long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
    pub length: usize,

    /// Exclude uppercase letters.
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters.
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude digits.
    #[arg(long)]
    pub no_digits: bool,

    /// Include symbols.
    #[arg(long)]
    pub symbols: bool,
}

/// Options for passphrase-mode generation.
#[derive(Args, Debug)]
pub struct WordArgs {
    /// Number of words.
    #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
    pub words: usize,

    /// Shortest eligible word length.
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    pub min_length: usize,

    /// Longest eligible word length.
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    pub max_length: usize,

    /// Digits in the block before the words.
    #[arg(long, default_value_t = 2)]
    pub digits_before: usize,

    /// Digits in the block after the words.
    #[arg(long, default_value_t = 2)]
    pub digits_after: usize,

    /// Padding symbols before everything else.
    #[arg(long, default_value_t = 2)]
    pub symbols_before: usize,

    /// Padding symbols after everything else.
    #[arg(long, default_value_t = 2)]
    pub symbols_after: usize,

    /// Alphabet the padding symbols are drawn from.
    #[arg(long, default_value = DEFAULT_PADDING_SYMBOLS)]
    pub padding: String,

    /// Alphabet the separator is drawn from.
    #[arg(long, default_value = DEFAULT_SEPARATORS)]
    pub separators: String,

    /// Word file to use instead of the bundled list, one word per line.
    #[arg(long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,
}

impl Commands {
    /// Resolve the parsed arguments into an immutable generation spec.
    #[must_use]
    pub fn to_spec(&self) -> GenerationSpec {
        match self {
            Self::Chars(args) => GenerationSpec::Character(CharacterSpec {
                length: args.length,
                charsets: CharsetConfig {
                    uppercase: !args.no_upper,
                    lowercase: !args.no_lower,
                    digits: !args.no_digits,
                    symbols: args.symbols,
                },
            }),
            Self::Words(args) => GenerationSpec::Passphrase(PassphraseSpec {
                word_count: args.words,
                min_word_length: args.min_length,
                max_word_length: args.max_length,
                prefix_digits: args.digits_before,
                suffix_digits: args.digits_after,
                prefix_symbols: args.symbols_before,
                suffix_symbols: args.symbols_after,
                padding_symbols: args.padding.clone(),
                separators: args.separators.clone(),
            }),
        }
    }
}
