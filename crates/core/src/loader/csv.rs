//! Delimited-table sounding parser
//!
//! Accepts comma-separated tables with a header row naming the pressure,
//! temperature, and dewpoint columns. Column names are configurable so
//! exports from other tools load without editing; extra columns are ignored.

use crate::core_types::SoundingProfile;
use crate::loader::LoadError;
use tracing::{debug, info};

/// Column names to look for in the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvColumns {
    /// Pressure column (hPa)
    pub pressure: String,
    /// Temperature column (°C)
    pub temperature: String,
    /// Dewpoint column (°C)
    pub dewpoint: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            pressure: "pressure".to_string(),
            temperature: "temperature".to_string(),
            dewpoint: "dewpoint".to_string(),
        }
    }
}

/// Parse a comma-separated sounding table into a profile
///
/// Rows with an empty critical field are dropped (exports commonly blank
/// missing observations); a non-empty field that fails to parse is an
/// error, not a silent skip. Unlike the Wyoming parser, out-of-order
/// pressure rows are not repaired: a curated table is expected to already
/// be monotonic, and a violation surfaces as [`LoadError::Structure`].
///
/// # Errors
/// [`LoadError::MissingColumn`] when the header lacks a configured column,
/// [`LoadError::Parse`] on malformed numerics, [`LoadError::NoDataRows`]
/// when nothing survives, [`LoadError::Structure`] when the rows fail the
/// profile invariants.
///
/// # Example
/// ```
/// use convective_risk_core::loader::{parse_csv, CsvColumns};
///
/// let text = "pressure,temperature,dewpoint\n1000,24,18\n850,14,10\n700,4,-2\n";
/// let profile = parse_csv(text, &CsvColumns::default())?;
/// assert_eq!(profile.level_count(), 3);
/// # Ok::<(), convective_risk_core::loader::LoadError>(())
/// ```
pub fn parse_csv(text: &str, columns: &CsvColumns) -> Result<SoundingProfile, LoadError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or(LoadError::NoDataRows)?;

    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let find = |name: &str| -> Result<usize, LoadError> {
        names
            .iter()
            .position(|&n| n == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let pressure_col = find(&columns.pressure)?;
    let temperature_col = find(&columns.temperature)?;
    let dewpoint_col = find(&columns.dewpoint)?;

    let mut pressure = Vec::new();
    let mut temperature = Vec::new();
    let mut dewpoint = Vec::new();
    let mut dropped = 0usize;

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let raw = |col: usize| fields.get(col).copied().unwrap_or("");

        let critical = [
            raw(pressure_col),
            raw(temperature_col),
            raw(dewpoint_col),
        ];
        if critical.iter().any(|field| field.is_empty()) {
            dropped += 1;
            continue;
        }

        let parse = |field: &str, what: &str| -> Result<f64, LoadError> {
            field.parse().map_err(|_| LoadError::Parse {
                line: index + 1,
                message: format!("{what} value '{field}' is not a number"),
            })
        };
        pressure.push(parse(critical[0], "pressure")?);
        temperature.push(parse(critical[1], "temperature")?);
        dewpoint.push(parse(critical[2], "dewpoint")?);
    }

    if pressure.is_empty() {
        return Err(LoadError::NoDataRows);
    }
    if dropped > 0 {
        debug!(dropped, "dropped CSV rows with empty critical fields");
    }

    let profile = SoundingProfile::new(pressure, temperature, dewpoint)?;
    info!(
        levels = profile.level_count(),
        surface = %profile.surface_pressure(),
        "parsed CSV sounding"
    );
    Ok(profile)
}
