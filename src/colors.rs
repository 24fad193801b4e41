//! The 25-pair telephony color code.
//!
//! A pair number in `1..=25` maps to one major color (the "tens" digit) and
//! one minor color (the "units" digit). The minor color varies fastest.

use crate::errors::{ColorCodeError, ColorKind, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

include!(concat!(env!("OUT_DIR"), "/color_names.rs"));

pub const NUMBER_OF_MAJOR_COLORS: u32 = 5;
pub const NUMBER_OF_MINOR_COLORS: u32 = 5;
pub const NUMBER_OF_PAIRS: u32 = NUMBER_OF_MAJOR_COLORS * NUMBER_OF_MINOR_COLORS;

/// Major (first) color of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MajorColor {
    White,
    Red,
    Black,
    Yellow,
    Violet,
}

/// Minor (second) color of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MinorColor {
    Blue,
    Orange,
    Green,
    Brown,
    Slate,
}

impl MajorColor {
    /// All major colors in code order.
    pub const ALL: [MajorColor; NUMBER_OF_MAJOR_COLORS as usize] = [
        MajorColor::White,
        MajorColor::Red,
        MajorColor::Black,
        MajorColor::Yellow,
        MajorColor::Violet,
    ];

    /// Zero-based position in the code order.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Display name, e.g. `"White"`.
    pub fn name(self) -> &'static str {
        MAJOR_COLOR_DISPLAY_NAMES[self as usize]
    }

    /// Looks up a major color by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        MAJOR_COLOR_NAMES
            .get(name.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ColorCodeError::UnknownColor {
                kind: ColorKind::Major,
                name: name.to_string(),
            })
    }

    fn from_ordinal(ordinal: u32) -> Self {
        Self::ALL[ordinal as usize]
    }
}

impl MinorColor {
    /// All minor colors in code order.
    pub const ALL: [MinorColor; NUMBER_OF_MINOR_COLORS as usize] = [
        MinorColor::Blue,
        MinorColor::Orange,
        MinorColor::Green,
        MinorColor::Brown,
        MinorColor::Slate,
    ];

    /// Zero-based position in the code order.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Display name, e.g. `"Slate"`.
    pub fn name(self) -> &'static str {
        MINOR_COLOR_DISPLAY_NAMES[self as usize]
    }

    /// Looks up a minor color by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        MINOR_COLOR_NAMES
            .get(name.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ColorCodeError::UnknownColor {
                kind: ColorKind::Minor,
                name: name.to_string(),
            })
    }

    fn from_ordinal(ordinal: u32) -> Self {
        Self::ALL[ordinal as usize]
    }
}

impl fmt::Display for MajorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MinorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MajorColor {
    type Err = ColorCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl FromStr for MinorColor {
    type Err = ColorCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// A major and minor color identifying one wire pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorPair {
    major: MajorColor,
    minor: MinorColor,
}

impl ColorPair {
    pub fn new(major: MajorColor, minor: MinorColor) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> MajorColor {
        self.major
    }

    pub fn minor(&self) -> MinorColor {
        self.minor
    }

    /// The pair number this combination encodes.
    pub fn pair_number(&self) -> u32 {
        pair_number_from_color(self.major, self.minor)
    }
}

impl fmt::Display for ColorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major, self.minor)
    }
}

/// Converts a one-based pair number into its color pair.
///
/// # Errors
///
/// Returns [`ColorCodeError::PairNumberOutOfRange`] unless
/// `1 <= pair_number <= 25`.
pub fn color_from_pair_number(pair_number: u32) -> Result<ColorPair> {
    if !(1..=NUMBER_OF_PAIRS).contains(&pair_number) {
        return Err(ColorCodeError::PairNumberOutOfRange {
            pair_number,
            max: NUMBER_OF_PAIRS,
        });
    }

    let zero_based = pair_number - 1;
    Ok(ColorPair::new(
        MajorColor::from_ordinal(zero_based / NUMBER_OF_MINOR_COLORS),
        MinorColor::from_ordinal(zero_based % NUMBER_OF_MINOR_COLORS),
    ))
}

/// Converts a color combination into its one-based pair number.
pub fn pair_number_from_color(major: MajorColor, minor: MinorColor) -> u32 {
    major.ordinal() * NUMBER_OF_MINOR_COLORS + minor.ordinal() + 1
}

/// Every `(pair_number, ColorPair)` in ascending pair order.
pub fn all_pairs() -> impl Iterator<Item = (u32, ColorPair)> {
    MajorColor::ALL.into_iter().flat_map(|major| {
        MinorColor::ALL.into_iter().map(move |minor| {
            let pair = ColorPair::new(major, minor);
            (pair.pair_number(), pair)
        })
    })
}
