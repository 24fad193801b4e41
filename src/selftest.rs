//! Startup self-test.
//!
//! Checks a handful of known mappings and the completeness of the rendered
//! manual before anything is printed.

use crate::colors::{
    all_pairs, color_from_pair_number, pair_number_from_color, MajorColor, MinorColor,
    NUMBER_OF_PAIRS,
};
use crate::errors::{ColorCodeError, Result};
use crate::manual::render_reference_manual;

fn check(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(ColorCodeError::SelfTest(message()))
    }
}

/// Verifies that `pair_number` decodes to the expected colors.
pub fn verify_number_to_pair(
    pair_number: u32,
    expected_major: MajorColor,
    expected_minor: MinorColor,
) -> Result<()> {
    let pair = color_from_pair_number(pair_number)?;
    tracing::info!("Got pair {}", pair);

    check(pair.major() == expected_major, || {
        format!(
            "pair {} has major {}, expected {}",
            pair_number,
            pair.major(),
            expected_major
        )
    })?;
    check(pair.minor() == expected_minor, || {
        format!(
            "pair {} has minor {}, expected {}",
            pair_number,
            pair.minor(),
            expected_minor
        )
    })
}

/// Verifies that a color combination encodes the expected pair number.
pub fn verify_pair_to_number(
    major: MajorColor,
    minor: MinorColor,
    expected_pair_number: u32,
) -> Result<()> {
    let pair_number = pair_number_from_color(major, minor);
    tracing::info!("Got pair number {}", pair_number);

    check(pair_number == expected_pair_number, || {
        format!(
            "{} {} encodes {}, expected {}",
            major, minor, pair_number, expected_pair_number
        )
    })
}

/// Verifies the manual has the header plus one entry per pair number, checked
/// against every color combination.
pub fn verify_reference_manual() -> Result<()> {
    let manual = render_reference_manual()?;

    let entry_lines = manual.lines().count().saturating_sub(2);
    check(entry_lines == NUMBER_OF_PAIRS as usize, || {
        format!(
            "manual has {} entries, expected {}",
            entry_lines, NUMBER_OF_PAIRS
        )
    })?;

    check(manual.contains("1 : White Blue"), || {
        "manual is missing the first entry".to_string()
    })?;
    check(manual.contains("25 : Violet Slate"), || {
        "manual is missing the last entry".to_string()
    })?;

    for (pair_number, pair) in all_pairs() {
        let entry = format!("{} : {}", pair_number, pair);
        check(manual.lines().any(|line| line == entry), || {
            format!("manual is missing entry '{}'", entry)
        })?;
    }

    Ok(())
}

/// Runs the full self-test sequence.
pub fn run() -> Result<()> {
    verify_number_to_pair(4, MajorColor::White, MinorColor::Brown)?;
    verify_number_to_pair(5, MajorColor::White, MinorColor::Slate)?;

    verify_pair_to_number(MajorColor::Black, MinorColor::Orange, 12)?;
    verify_pair_to_number(MajorColor::Violet, MinorColor::Slate, 25)?;

    verify_reference_manual()?;

    tracing::debug!("Self-test passed");
    Ok(())
}
