//! University-of-Wyoming sounding text parser
//!
//! The Wyoming archive serves fixed-width listings: a station banner, a
//! column-header block, then one 7-character-wide field per column
//! (PRES, HGHT, TEMP, DWPT, ...). Missing observations are blank fields,
//! not sentinel numbers, so slicing by column position is the only reliable
//! way to read them.

use crate::core_types::SoundingProfile;
use crate::loader::LoadError;
use tracing::{debug, info};

/// Width of every Wyoming data column (characters)
const FIELD_WIDTH: usize = 7;

/// Column positions of the fields this parser consumes
const PRESSURE_FIELD: usize = 0;
const TEMPERATURE_FIELD: usize = 2;
const DEWPOINT_FIELD: usize = 3;

/// Parse a Wyoming-format sounding listing into a profile
///
/// Rows missing temperature or dewpoint are dropped, as are rows that fail
/// to continue the strict pressure decrease (duplicate mandatory/significant
/// levels are common in the archive; the first occurrence wins).
///
/// # Errors
/// Returns [`LoadError::NoDataRows`] when nothing parseable remains and
/// [`LoadError::Structure`] when the surviving rows do not form a valid
/// profile.
///
/// # Example
/// ```
/// use convective_risk_core::loader::parse_wyoming;
///
/// let text = "\
///    PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT
///     hPa     m      C      C      %    g/kg    deg   knot
/// -----------------------------------------------------------
///  1000.0     88   24.0   18.0     69  13.21    150     10
///   925.0    766   19.2   14.8     75  11.52    160     15
///   850.0   1486   14.0   10.0     77   9.61    170     18
///   700.0   3082    4.2   -1.8     65   5.37    180     22
/// ";
/// let profile = parse_wyoming(text)?;
/// assert_eq!(profile.level_count(), 4);
/// # Ok::<(), convective_risk_core::loader::LoadError>(())
/// ```
pub fn parse_wyoming(text: &str) -> Result<SoundingProfile, LoadError> {
    let lines: Vec<&str> = text.lines().collect();

    // Locate the start of the data block: the line after the PRES header,
    // or the first numeric line when the header is absent.
    let data_start = lines
        .iter()
        .position(|line| line.contains("PRES") || line.contains("hPa"))
        .map(|i| i + 1)
        .or_else(|| {
            lines.iter().position(|line| {
                line.trim_start()
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit())
            })
        })
        .ok_or(LoadError::NoDataRows)?;

    let mut pressure = Vec::new();
    let mut temperature = Vec::new();
    let mut dewpoint = Vec::new();
    let mut dropped = 0usize;

    for line in &lines[data_start..] {
        // Separator and units lines have no pressure field
        let Some(p) = fixed_width_field(line, PRESSURE_FIELD) else {
            continue;
        };
        let temp = fixed_width_field(line, TEMPERATURE_FIELD);
        let dwpt = fixed_width_field(line, DEWPOINT_FIELD);
        let (Some(temp), Some(dwpt)) = (temp, dwpt) else {
            dropped += 1;
            continue;
        };
        // Keep-first on duplicate or out-of-order pressure levels
        if pressure.last().is_some_and(|&last| p >= last) {
            dropped += 1;
            continue;
        }
        pressure.push(p);
        temperature.push(temp);
        dewpoint.push(dwpt);
    }

    if pressure.is_empty() {
        return Err(LoadError::NoDataRows);
    }
    if dropped > 0 {
        debug!(dropped, "dropped incomplete or out-of-order Wyoming rows");
    }

    let profile = SoundingProfile::new(pressure, temperature, dewpoint)?;
    info!(
        levels = profile.level_count(),
        surface = %profile.surface_pressure(),
        "parsed Wyoming sounding"
    );
    Ok(profile)
}

/// Extract the numeric value of the `index`-th 7-character column, if present
fn fixed_width_field(line: &str, index: usize) -> Option<f64> {
    let start = index * FIELD_WIDTH;
    let end = start + FIELD_WIDTH;
    let raw = if line.len() >= end {
        line.get(start..end)?
    } else if line.len() > start {
        line.get(start..)?
    } else {
        return None;
    };
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
94866 Test Station Observations at 00Z 01 Jan 2024

-----------------------------------------------------------------------------
   PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV
    hPa     m      C      C      %    g/kg    deg   knot     K      K      K
-----------------------------------------------------------------------------
 1007.0      8   21.4   14.4     64  10.31    150     10  294.5  324.4  296.3
 1000.0     68   20.6   14.2     67  10.26    155     12  294.3  324.1  296.1
  925.0    746   15.8   11.8     77   9.58    170     16  296.0  324.2  297.7
  850.0   1467   10.4    8.4     87   8.50    185     20  297.8  323.1  299.3
  700.0   3064    0.2   -4.8     69   4.27    210     24  302.7  316.1  303.5
";

    #[test]
    fn test_parse_complete_listing() {
        let profile = parse_wyoming(SAMPLE).expect("sample must parse");
        assert_eq!(profile.level_count(), 5);
        assert_eq!(*profile.surface_pressure(), 1007.0);
        assert_eq!(profile.temperature()[4], 0.2);
        assert_eq!(profile.dewpoint()[4], -4.8);
    }

    #[test]
    fn test_rows_with_missing_dewpoint_are_dropped() {
        let text = "\
   PRES   HGHT   TEMP   DWPT
 1000.0     68   20.6   14.2
  925.0    746   15.8
  850.0   1467   10.4    8.4
  700.0   3064    0.2   -4.8
";
        let profile = parse_wyoming(text).expect("must parse around the gap");
        assert_eq!(profile.level_count(), 3);
        assert_eq!(profile.pressure(), &[1000.0, 850.0, 700.0]);
    }

    #[test]
    fn test_duplicate_pressure_keeps_first() {
        let text = "\
   PRES   HGHT   TEMP   DWPT
 1000.0     68   20.6   14.2
 1000.0     68   21.0   14.0
  850.0   1467   10.4    8.4
  700.0   3064    0.2   -4.8
";
        let profile = parse_wyoming(text).expect("duplicate level must be skipped");
        assert_eq!(profile.level_count(), 3);
        assert_eq!(profile.temperature()[0], 20.6);
    }

    #[test]
    fn test_headerless_numeric_block() {
        let text = "\
 1000.0     68   20.6   14.2
  850.0   1467   10.4    8.4
  700.0   3064    0.2   -4.8
";
        let profile = parse_wyoming(text).expect("numeric block without header must parse");
        assert_eq!(profile.level_count(), 3);
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(parse_wyoming(""), Err(LoadError::NoDataRows));
        assert_eq!(
            parse_wyoming("station banner only\n"),
            Err(LoadError::NoDataRows)
        );
    }

    #[test]
    fn test_too_few_rows_is_structural() {
        let text = "\
   PRES   HGHT   TEMP   DWPT
 1000.0     68   20.6   14.2
  850.0   1467   10.4    8.4
";
        assert!(matches!(
            parse_wyoming(text),
            Err(LoadError::Structure(_))
        ));
    }
}
