//! Sounding ingestion adapters
//!
//! Parsers for the two text formats soundings commonly arrive in -
//! University-of-Wyoming fixed-width listings and delimited tables - plus an
//! advisory quality validator. These are pure I/O adapters: all decision
//! logic lives in [`physics`](crate::physics) and [`risk`](crate::risk),
//! and every parser funnels into the same validated
//! [`SoundingProfile`](crate::SoundingProfile) constructor.

pub mod csv;
pub mod quality;
pub mod wyoming;

pub use csv::{parse_csv, CsvColumns};
pub use quality::{validate, SoundingQuality};
pub use wyoming::parse_wyoming;

use crate::core_types::StructuralError;
use std::fmt;

/// Failure while turning input text into a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No parseable data rows were found
    NoDataRows,
    /// A required column is missing from the header
    MissingColumn(String),
    /// A data field failed to parse as a number
    Parse {
        /// 1-based line number in the input text
        line: usize,
        /// What failed to parse
        message: String,
    },
    /// The parsed rows violate the profile's structural invariants
    Structure(StructuralError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoDataRows => write!(f, "no parseable sounding rows in input"),
            LoadError::MissingColumn(name) => write!(f, "required column '{name}' not found"),
            LoadError::Parse { line, message } => {
                write!(f, "parse failure at line {line}: {message}")
            }
            LoadError::Structure(err) => write!(f, "parsed rows are not a valid profile: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Structure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StructuralError> for LoadError {
    fn from(err: StructuralError) -> Self {
        LoadError::Structure(err)
    }
}
