//! `cadenas` — command line password and passphrase generator.
//!
//! Resolves arguments into a generation spec, loads a word bank when the
//! passphrase strategy needs one, drives the batch orchestrator, and renders
//! each generated password alongside its blind and seen entropy figures.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

mod cli;
mod output;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cadenas_core::{generate_batch, WordBank};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let spec = cli.command.to_spec();
    debug!(count = cli.count, "resolved generation request");

    // The bank outlives the batch; the bundled list is process-static.
    let loaded;
    let bank: Option<&WordBank> = match &cli.command {
        Commands::Words(args) => match &args.wordlist {
            Some(path) => {
                loaded = WordBank::load_path(path)
                    .with_context(|| format!("loading wordlist {}", path.display()))?;
                debug!(words = loaded.len(), path = %path.display(), "loaded wordlist");
                Some(&loaded)
            }
            None => {
                let builtin = WordBank::builtin();
                debug!(words = builtin.len(), "using bundled wordlist");
                Some(builtin)
            }
        },
        Commands::Chars(_) => None,
    };

    let records = generate_batch(&spec, bank, cli.count)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        output::render_json(&mut out, &records)?;
    } else if cli.quiet {
        output::render_quiet(&mut out, &records)?;
    } else {
        output::render_text(&mut out, &records)?;
    }
    out.flush()?;
    Ok(())
}

/// Route diagnostics to stderr. `RUST_LOG` overrides the `-v` mapping.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use clap::Parser;

    use cadenas_core::{generate_batch, GenerationSpec, WordBank};

    use crate::cli::{Cli, Commands};

    #[test]
    fn end_to_end_chars_request() {
        let cli = Cli::parse_from(["cadenas", "-n", "3", "chars", "--length", "12"]);
        let spec = cli.command.to_spec();
        let records = generate_batch(&spec, None, cli.count).expect("valid request");
        assert_eq!(records.len(), 3);
        for record in &records {
            assert_eq!(record.password.chars().count(), 12);
        }
    }

    #[test]
    fn end_to_end_words_request_with_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        for i in 0..150 {
            writeln!(file, "word{i:03}").expect("write word");
        }
        let path = file.path().to_str().expect("utf8 path");

        let cli = Cli::parse_from([
            "cadenas",
            "words",
            "--wordlist",
            path,
            "--min-length",
            "7",
            "--max-length",
            "7",
        ]);
        let spec = cli.command.to_spec();
        let bank = match &cli.command {
            Commands::Words(args) => {
                WordBank::load_path(args.wordlist.as_deref().expect("path set"))
                    .expect("loadable wordlist")
            }
            Commands::Chars(_) => panic!("wrong mode"),
        };
        let records = generate_batch(&spec, Some(&bank), cli.count).expect("valid request");
        assert_eq!(records.len(), 1);
        assert!(!records[0].password.is_empty());
    }

    #[test]
    fn missing_wordlist_file_is_a_context_error() {
        let err = WordBank::load_path(std::path::Path::new("/nonexistent/words.txt"));
        assert!(err.is_err());
    }

    #[test]
    fn bad_spec_exits_before_output() {
        let cli = Cli::parse_from(["cadenas", "chars", "--length", "2"]);
        let spec = cli.command.to_spec();
        assert!(generate_batch(&spec, None, cli.count).is_err());
    }

    #[test]
    fn words_mode_requires_a_bank() {
        let cli = Cli::parse_from(["cadenas", "words"]);
        let spec = cli.command.to_spec();
        assert!(matches!(spec, GenerationSpec::Passphrase(_)));
        assert!(generate_batch(&spec, None, cli.count).is_err());
    }
}
