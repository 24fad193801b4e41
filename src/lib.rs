//! telco-colors - the 25-pair telephony color code.
//!
//! Converts between cable pair numbers and their major/minor color pairs and
//! renders the reference manual used by wiring personnel.

pub mod colors;
pub mod config;
pub mod errors;
pub mod manual;
pub mod selftest;

#[cfg(feature = "cli")]
pub mod cli;
