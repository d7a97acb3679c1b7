//! Output rendering for generated records.

use std::io::Write;

use anyhow::Result;

use cadenas_core::GeneratedPassword;

/// Write one line per record: the password followed by both entropy figures.
pub fn render_text<W: Write>(out: &mut W, records: &[GeneratedPassword]) -> Result<()> {
    for record in records {
        writeln!(
            out,
            "{}  [blind {:.2} bits, seen {:.2} bits]",
            record.password, record.entropy.blind_entropy, record.entropy.seen_entropy
        )?;
    }
    Ok(())
}

/// Write passwords only, one per line.
pub fn render_quiet<W: Write>(out: &mut W, records: &[GeneratedPassword]) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record.password)?;
    }
    Ok(())
}

/// Write the full records as a pretty-printed JSON array.
pub fn render_json<W: Write>(out: &mut W, records: &[GeneratedPassword]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenas_core::{estimate, EntropyReport, StructuralParams};

    fn record() -> GeneratedPassword {
        let params = StructuralParams::Character {
            length: 4,
            alphabet_size: 62,
        };
        let entropy: EntropyReport = estimate(&params);
        GeneratedPassword {
            password: "aB3x".to_owned(),
            params,
            entropy,
        }
    }

    #[test]
    fn text_includes_password_and_both_figures() {
        let mut buf = Vec::new();
        render_text(&mut buf, &[record()]).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("aB3x"));
        assert!(text.contains("blind 23.82 bits"));
        assert!(text.contains("seen 23.82 bits"));
    }

    #[test]
    fn quiet_emits_passwords_only() {
        let mut buf = Vec::new();
        render_quiet(&mut buf, &[record(), record()]).expect("write to vec");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "aB3x\naB3x\n");
    }

    #[test]
    fn json_round_trips_the_records() {
        let mut buf = Vec::new();
        render_json(&mut buf, &[record()]).expect("write to vec");
        let parsed: Vec<GeneratedPassword> =
            serde_json::from_slice(&buf).expect("valid JSON records");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].password, "aB3x");
    }
}
