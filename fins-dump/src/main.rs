//! fins-dump: terminal inspector for OMRON FINS/UDP payloads
//!
//! Feeds hex-encoded payloads through the FINS dissector and prints the
//! decoded field tree with byte offsets, or JSON with `--json`. Payloads
//! come from the command line, a file, or stdin, one per line.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fins_protocol::{Dissection, Dissector, DissectorConfig, FrameBuilder};

#[derive(Debug, Parser)]
#[command(
    name = "fins-dump",
    about = "Dissect OMRON FINS/UDP payloads",
    version
)]
struct Args {
    /// Hex-encoded payloads (whitespace, colons and 0x prefixes are
    /// ignored); reads one payload per line from stdin when omitted
    #[arg(value_name = "HEX")]
    payloads: Vec<String>,

    /// Read hex payloads, one per line, from a file; `#` lines are comments
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Emit JSON instead of the indented field tree
    #[arg(long)]
    json: bool,

    /// Suppress length-mismatch annotations; bodies that fit no expected
    /// shape are skipped silently
    #[arg(long)]
    lenient: bool,

    /// Dissect a few built-in sample frames and exit
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fins_dump=info,fins_protocol=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let dissector = Dissector::with_config(DissectorConfig {
        legacy_silent_mismatch: args.lenient,
    });

    let payloads = if args.demo {
        demo_payloads()
    } else {
        gather_payloads(&args)?
    };
    if payloads.is_empty() {
        bail!("no payloads to dissect");
    }

    let mut unrecognized = 0usize;
    for (index, payload) in payloads.iter().enumerate() {
        match dissector.dissect(payload) {
            Some(dissection) => print_dissection(index, payload, &dissection, args.json)?,
            None => {
                unrecognized += 1;
                eprintln!(
                    "payload {index}: not recognized as FINS ({} bytes)",
                    payload.len()
                );
            }
        }
    }

    if unrecognized > 0 {
        std::process::exit(2);
    }
    Ok(())
}

fn gather_payloads(args: &Args) -> Result<Vec<Vec<u8>>> {
    let mut lines: Vec<String> = args.payloads.clone();
    if let Some(path) = &args.file {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        lines.extend(text.lines().map(str::to_owned));
    }
    if lines.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading stdin")?;
        lines.extend(text.lines().map(str::to_owned));
    }
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_hex)
        .collect()
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let separated = text.replace([',', ':'], " ");
    let digits: String = separated
        .split_whitespace()
        .map(|chunk| chunk.trim_start_matches("0x"))
        .collect();
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits in `{text}`");
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("bad hex byte `{}`", &digits[i..i + 2]))
        })
        .collect()
}

fn print_dissection(index: usize, payload: &[u8], d: &Dissection, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(d)?);
        return Ok(());
    }
    println!(
        "== payload {index}: {} bytes captured, {} dissected ==",
        payload.len(),
        d.consumed
    );
    print!("{}", d.tree.render());
    println!();
    Ok(())
}

/// A handful of frames showing a clean command/response pair, a variable
/// record response, and two malformed cases.
fn demo_payloads() -> Vec<Vec<u8>> {
    vec![
        // Memory Area Read command: 10 words of DM from word 100
        FrameBuilder::command(0x0101)
            .destination(0x00, 0x05, 0x00)
            .source(0x00, 0x22, 0x00)
            .service_id(0x07)
            .body(&[0x90, 0x00, 0x64, 0x00, 0x00, 0x0A])
            .build(),
        // Matching response: end code plus two data words
        FrameBuilder::response(0x0101)
            .destination(0x00, 0x22, 0x00)
            .source(0x00, 0x05, 0x00)
            .service_id(0x07)
            .end_code(0x0000)
            .body(&[0x12, 0x34, 0xAB, 0xCD])
            .build(),
        // Multiple Memory Area Read response: one word and one bit record
        FrameBuilder::response(0x0104)
            .end_code(0x0000)
            .body(&[0x80, 0x12, 0x34, 0x00, 0x01])
            .build(),
        // Clock Read response
        FrameBuilder::response(0x0701)
            .end_code(0x0000)
            .body(&[0x26, 0x08, 0x06, 0x0E, 0x1E, 0x2D, 0x04])
            .build(),
        // Stop command with a body it must not have
        FrameBuilder::command(0x0402).body(&[0x00, 0x00]).build(),
        // Command code outside the catalog
        FrameBuilder::command(0x1234).body(&[0xDE, 0xAD]).build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::parse_hex;

    #[test]
    fn hex_accepts_common_separators() {
        assert_eq!(
            parse_hex("80 00 02").unwrap(),
            vec![0x80, 0x00, 0x02]
        );
        assert_eq!(
            parse_hex("0x80,0x00,0x02").unwrap(),
            vec![0x80, 0x00, 0x02]
        );
        assert_eq!(parse_hex("80:00:02").unwrap(), vec![0x80, 0x00, 0x02]);
        assert_eq!(parse_hex("800002").unwrap(), vec![0x80, 0x00, 0x02]);
    }

    #[test]
    fn hex_rejects_odd_or_bad_input() {
        assert!(parse_hex("800").is_err());
        assert!(parse_hex("zz").is_err());
    }
}
