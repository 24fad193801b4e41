//! Command-line interface for telco-colors.
//!
//! Handles argument parsing and dispatch for lookups and the reference manual.

use crate::colors::{color_from_pair_number, pair_number_from_color, MajorColor, MinorColor};
use crate::config::{CliOverrides, Config};
use crate::errors::Result;
use crate::manual::{write_reference_manual, OutputFormat};
use crate::selftest;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

/// Command-line arguments for telco-colors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", global = true)]
    pub log_level: Option<Level>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up the colors for a pair number.
    Pair {
        /// Pair number, 1 to 25.
        number: u32,
    },

    /// Look up the pair number for a major and minor color.
    Number {
        /// Major color (White, Red, Black, Yellow, Violet).
        major: MajorColor,
        /// Minor color (Blue, Orange, Green, Brown, Slate).
        minor: MinorColor,
    },

    /// Render the reference manual.
    Manual {
        /// Output format: text or json.
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write the manual to a file instead of standard output.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the self-test without printing the manual.
    SelfTest,
}

impl Cli {
    /// Configuration overrides carried by these arguments.
    pub fn overrides(&self) -> CliOverrides {
        let format = match &self.command {
            Some(Command::Manual { format, .. }) => *format,
            _ => None,
        };
        CliOverrides::from_cli_args(self.log_level, format)
    }
}

fn write_manual_to(path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_reference_manual(&mut writer, format)?;

    tracing::info!("Successfully wrote {}.", path.to_string_lossy());
    Ok(())
}

/// Executes the parsed command, writing lookup results to `out`.
///
/// With no subcommand the self-test runs first and the text manual follows.
pub fn run<W: Write>(cli: Cli, config: &Config, out: &mut W) -> Result<()> {
    match cli.command {
        None => {
            selftest::run()?;
            write_reference_manual(out, OutputFormat::Text)?;
        }
        Some(Command::Pair { number }) => {
            let pair = color_from_pair_number(number)?;
            tracing::debug!(pair_number = number, %pair, "Resolved pair number");
            writeln!(out, "{}", pair)?;
        }
        Some(Command::Number { major, minor }) => {
            let pair_number = pair_number_from_color(major, minor);
            tracing::debug!(%major, %minor, pair_number, "Resolved color pair");
            writeln!(out, "{}", pair_number)?;
        }
        Some(Command::Manual { output: Some(path), .. }) => {
            write_manual_to(&path, config.format)?;
        }
        Some(Command::Manual { output: None, .. }) => {
            write_reference_manual(out, config.format)?;
        }
        Some(Command::SelfTest) => {
            selftest::run()?;
            tracing::info!("Self-test passed.");
        }
    }

    Ok(())
}
