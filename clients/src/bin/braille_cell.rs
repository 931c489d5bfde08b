//! `braille-cell`: converts single Braille cells between codepoint,
//! character and dot-matrix form.
//!
//! **Usage:**
//! ```
//! braille-cell encode <ROW> <ROW> <ROW> [<ROW>]   # e.g. 10 01 00 00
//! braille-cell decode <CELL> [--bool]             # U+2811, 0x2811, 10257 or ⠑
//! braille-cell table
//! ```
//!
//! `--json` switches any command to JSON output. Exits non-zero on invalid
//! input.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{anyhow, bail, Context, Result};
use braille::{BrailleCell, DotStyle, StyledMatrix};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

/// Convert Braille cells between codepoint, character and dot matrix.
#[derive(Parser)]
#[command(
    name = "braille-cell",
    about = "Convert Braille cells between codepoint, character and dot matrix"
)]
struct Args {
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack a dot matrix into a codepoint and character.
    Encode {
        /// Rows of two dots each, top to bottom (3 or 4 rows), e.g. `10 01 00`.
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// Unpack a codepoint or character into a dot matrix.
    Decode {
        /// `U+2811`, `0x2811`, `10257`, or the character itself.
        cell: String,

        /// Print dots as `true`/`false` instead of `1`/`0`.
        #[arg(long = "bool")]
        boolean: bool,
    },
    /// List all 256 cells.
    Table,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Encode { rows } => {
            let cell = encode(&rows)?;
            emit(&cell, DotStyle::Integer, args.json);
        }
        Command::Decode { cell, boolean } => {
            let cell = decode(&cell)?;
            let style = if boolean {
                DotStyle::Boolean
            } else {
                DotStyle::Integer
            };
            emit(&cell, style, args.json);
        }
        Command::Table => {
            if args.json {
                let cells: Vec<Value> = BrailleCell::all()
                    .map(|cell| describe(&cell, DotStyle::Integer))
                    .collect();
                println!("{}", Value::Array(cells));
            } else {
                for cell in BrailleCell::all() {
                    println!("{}", summary_line(&cell));
                }
            }
        }
    }

    Ok(())
}

/// Parses rows like `10` / `01` into a cell.
fn encode(rows: &[String]) -> Result<BrailleCell> {
    let parsed = rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(row).with_context(|| format!("row {i}: '{row}'")))
        .collect::<Result<Vec<_>>>()?;
    BrailleCell::from_matrix(&parsed).context("invalid dot matrix")
}

fn parse_row(row: &str) -> Result<Vec<u8>> {
    row.chars()
        .filter(|c| !matches!(c, ',' | ' ' | '[' | ']'))
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| anyhow!("'{c}' is not a dot value"))
        })
        .collect()
}

/// Parses a codepoint (`U+XXXX`, `0xXXXX`, decimal) or a single character.
fn decode(input: &str) -> Result<BrailleCell> {
    let input = input.trim();
    if input.is_empty() {
        bail!("empty cell");
    }

    let hex = input
        .strip_prefix("U+")
        .or_else(|| input.strip_prefix("u+"))
        .or_else(|| input.strip_prefix("0x"))
        .or_else(|| input.strip_prefix("0X"));

    let cell = if let Some(digits) = hex {
        let cp = u32::from_str_radix(digits, 16)
            .with_context(|| format!("'{input}' is not a hexadecimal codepoint"))?;
        BrailleCell::from_codepoint(cp)?
    } else if input.chars().all(|c| c.is_ascii_digit()) {
        let cp: u32 = input
            .parse()
            .with_context(|| format!("'{input}' is not a decimal codepoint"))?;
        BrailleCell::from_codepoint(cp)?
    } else {
        BrailleCell::from_text(input)?
    };
    Ok(cell)
}

fn summary_line(cell: &BrailleCell) -> String {
    let dots: Vec<String> = cell
        .raised_dots()
        .map(|dot| dot.number().to_string())
        .collect();
    let dots = if dots.is_empty() {
        "-".to_string()
    } else {
        dots.join("")
    };
    format!("U+{:04X} {} {}", cell.codepoint(), cell.character(), dots)
}

fn matrix_lines(cell: &BrailleCell, style: DotStyle) -> Vec<String> {
    match cell.matrix().styled(style) {
        StyledMatrix::Integer(rows) => rows
            .iter()
            .map(|[left, right]| format!("{left} {right}"))
            .collect(),
        StyledMatrix::Boolean(rows) => rows
            .iter()
            .map(|[left, right]| format!("{left} {right}"))
            .collect(),
    }
}

fn describe(cell: &BrailleCell, style: DotStyle) -> Value {
    let matrix = match cell.matrix().styled(style) {
        StyledMatrix::Integer(rows) => json!(rows),
        StyledMatrix::Boolean(rows) => json!(rows),
    };
    json!({
        "codepoint": cell.codepoint(),
        "hex": format!("U+{:04X}", cell.codepoint()),
        "character": cell.character().to_string(),
        "matrix": matrix,
    })
}

fn emit(cell: &BrailleCell, style: DotStyle, as_json: bool) {
    if as_json {
        println!("{}", describe(cell, style));
        return;
    }
    println!("{}", summary_line(cell));
    for line in matrix_lines(cell, style) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn encode_four_and_three_rows() {
        let four = encode(&rows(&["10", "01", "00", "00"])).unwrap();
        let three = encode(&rows(&["1,0", "[0, 1]", "00"])).unwrap();
        assert_eq!(four.codepoint(), 0x2811);
        assert_eq!(four, three);
    }

    #[test]
    fn encode_rejects_bad_rows() {
        assert!(encode(&rows(&["10", "01"])).is_err());
        assert!(encode(&rows(&["101", "00", "00"])).is_err());
        assert!(encode(&rows(&["12", "00", "00"])).is_err());
        assert!(encode(&rows(&["1x", "00", "00"])).is_err());
    }

    #[test]
    fn decode_accepts_every_notation() {
        let expected = BrailleCell::from_codepoint(0x2811).unwrap();
        for input in ["U+2811", "u+2811", "0x2811", "10257", "⠑", " ⠑ "] {
            assert_eq!(decode(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn decode_rejects_out_of_block() {
        assert!(decode("U+2900").is_err());
        assert!(decode("0").is_err());
        assert!(decode("A").is_err());
        assert!(decode("⠑⠑").is_err());
        assert!(decode("").is_err());
        assert!(decode("U+zz").is_err());
    }

    #[test]
    fn summary_and_matrix_lines() {
        let cell = BrailleCell::from_codepoint(0x2811).unwrap();
        assert_eq!(summary_line(&cell), "U+2811 ⠑ 15");
        assert_eq!(summary_line(&BrailleCell::BLANK), "U+2800 \u{2800} -");
        assert_eq!(
            matrix_lines(&cell, DotStyle::Integer),
            vec!["1 0", "0 1", "0 0", "0 0"]
        );
        assert_eq!(
            matrix_lines(&cell, DotStyle::Boolean),
            vec!["true false", "false true", "false false", "false false"]
        );
    }

    #[test]
    fn describe_as_json() {
        let cell = BrailleCell::from_codepoint(0x2880).unwrap();
        let value = describe(&cell, DotStyle::Integer);
        assert_eq!(value["codepoint"], 0x2880);
        assert_eq!(value["hex"], "U+2880");
        assert_eq!(value["character"], "⢀");
        assert_eq!(value["matrix"], json!([[0, 0], [0, 0], [0, 0], [0, 1]]));
    }
}
