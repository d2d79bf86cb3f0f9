//! CLI entrypoint for stutils.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stutils::conversion::parse_int;
use stutils::file::read_entire_file;
use stutils::search::contains_char;
use stutils::split::{split, tokens};
use stutils::str::{ends_with, replace_char, string_length};

/// Command-line front end for the stutils string routines.
#[derive(Debug, Parser)]
#[command(name = "stutils")]
#[command(about = "Split, parse and inspect NUL-terminated byte strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the length of TEXT.
    Len { text: String },
    /// Exit successfully if CHAR occurs in TEXT.
    Contains { ch: char, text: String },
    /// Split TEXT (or a file) on any of the delimiter bytes, one token per line.
    Split {
        /// Delimiter bytes.
        #[arg(short, long, default_value = " ")]
        delimiters: String,
        /// Read the text from this file instead.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        text: Option<String>,
    },
    /// Parse a signed integer and print the value and the unparsed rest.
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Numeric base (2..=36).
        #[arg(short, long, default_value_t = 10)]
        base: u32,
    },
    /// Exit successfully if TEXT ends with SUFFIX.
    EndsWith { text: String, suffix: String },
    /// Replace every FROM byte in TEXT with TO.
    Replace { text: String, from: char, to: char },
}

fn ascii_byte(c: char) -> Result<u8, Box<dyn std::error::Error>> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(format!("'{c}' is not a single-byte character").into())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    if !run(cli.command, &mut out)? {
        out.flush()?;
        std::process::exit(1);
    }

    Ok(())
}

/// Execute one command, writing its report to `out`. Returns `false` when
/// a predicate command (`contains`, `ends-with`) did not match.
fn run(command: Command, out: &mut impl Write) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Command::Len { text } => {
            writeln!(out, "{}", string_length(text.as_bytes()))?;
        }
        Command::Contains { ch, text } => {
            let found = contains_char(ascii_byte(ch)?, text.as_bytes());
            writeln!(out, "{found}")?;
            return Ok(found);
        }
        Command::Split {
            delimiters,
            file,
            text,
        } => {
            let mut buf = match (file, text) {
                (Some(path), _) => read_entire_file(path)?,
                (None, Some(text)) => text.into_bytes(),
                (None, None) => return Err("split needs TEXT or --file".into()),
            };
            let spans = split(&mut buf, delimiters.as_bytes());
            eprintln!("{} tokens", spans.len());
            for token in tokens(&buf, &spans) {
                out.write_all(token)?;
                out.write_all(b"\n")?;
            }
        }
        Command::Parse { text, base } => {
            let parsed = parse_int(text.as_bytes(), base)?;
            if parsed.saturated {
                eprintln!("warning: {text} is out of range, value clamped");
            }
            writeln!(out, "{} = {}", text, parsed.value)?;
            writeln!(out, "end: {}", &text[parsed.end..])?;
        }
        Command::EndsWith { text, suffix } => {
            let matched = ends_with(text.as_bytes(), suffix.as_bytes());
            writeln!(out, "{matched}")?;
            return Ok(matched);
        }
        Command::Replace { text, from, to } => {
            let mut buf = text.into_bytes();
            let count = replace_char(&mut buf, ascii_byte(from)?, ascii_byte(to)?);
            eprintln!("{count} replaced");
            out.write_all(&buf)?;
            out.write_all(b"\n")?;
        }
    }

    Ok(true)
}
