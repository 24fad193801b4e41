//! Reference manual rendering for wiring personnel.
//!
//! The text form is the canonical manual: a two-line header followed by one
//! `"<n> : <Major> <Minor>"` line per pair number. A JSON form is provided
//! for tooling.

use crate::colors::{color_from_pair_number, MajorColor, MinorColor, NUMBER_OF_PAIRS};
use crate::errors::{ColorCodeError, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::instrument;

pub const MANUAL_TITLE: &str = "Color Code Reference Manual";
pub const MANUAL_SEPARATOR: &str = "----------------------------";

/// Supported renderings of the manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parses a format name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ColorCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ColorCodeError::UnknownFormat(s.to_string()))
    }
}

/// One row of the manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManualEntry {
    pub pair_number: u32,
    pub major: MajorColor,
    pub minor: MinorColor,
}

impl fmt::Display for ManualEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} {}", self.pair_number, self.major, self.minor)
    }
}

/// Collects every manual row by walking pair numbers `1..=25`.
pub fn manual_entries() -> Result<Vec<ManualEntry>> {
    (1..=NUMBER_OF_PAIRS)
        .map(|pair_number| {
            let pair = color_from_pair_number(pair_number)?;
            Ok(ManualEntry {
                pair_number,
                major: pair.major(),
                minor: pair.minor(),
            })
        })
        .collect()
}

/// Renders the text manual.
pub fn render_reference_manual() -> Result<String> {
    let mut manual = String::new();
    manual.push_str(MANUAL_TITLE);
    manual.push('\n');
    manual.push_str(MANUAL_SEPARATOR);
    manual.push('\n');

    for entry in manual_entries()? {
        manual.push_str(&entry.to_string());
        manual.push('\n');
    }

    Ok(manual)
}

/// Renders the manual as a pretty-printed JSON array.
pub fn render_reference_manual_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&manual_entries()?)?)
}

/// Writes the manual to `writer` in the given format.
#[instrument(skip(writer))]
pub fn write_reference_manual<W: Write>(writer: &mut W, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_reference_manual()?,
        OutputFormat::Json => {
            let mut json = render_reference_manual_json()?;
            json.push('\n');
            json
        }
    };

    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;

    tracing::debug!(bytes = rendered.len(), "Reference manual written");
    Ok(())
}

/// Prints the text manual to standard output.
pub fn print_reference_manual() -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_reference_manual(&mut handle, OutputFormat::Text)
}
