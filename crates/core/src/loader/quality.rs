//! Advisory sounding-quality validation
//!
//! Scores a structurally valid profile against data-quality heuristics:
//! level coverage, pressure span, inversions, dewpoint depression. The
//! report never blocks an analysis - only
//! [`StructuralError`](crate::StructuralError) does that - but callers can
//! refuse to present low-scoring soundings.

use crate::core_types::units::HectoPascals;
use crate::core_types::SoundingProfile;
use serde::{Deserialize, Serialize};

/// Level count below which the report carries an error
pub const MIN_REQUIRED_LEVELS: usize = 10;

/// Level count below which the report carries a warning
pub const RECOMMENDED_LEVELS: usize = 20;

/// Surface pressure below which surface data is probably missing (hPa)
pub const SURFACE_PRESSURE_FLOOR: f64 = 900.0;

/// Profile-top pressure above which upper-air coverage is limited (hPa)
pub const UPPER_AIR_CEILING: f64 = 300.0;

/// Dewpoint depression above which a very dry layer is flagged (°C)
pub const DRY_LAYER_DEPRESSION: f64 = 30.0;

/// Dewpoint depression below which a layer counts as near-saturated (°C)
pub const SATURATION_DEPRESSION: f64 = 0.1;

/// Score deducted per warning
const WARNING_PENALTY: u32 = 10;

/// Score deducted per error
const ERROR_PENALTY: u32 = 30;

/// Quality report for a sounding profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundingQuality {
    /// True when no errors were found (warnings alone do not invalidate)
    pub valid: bool,
    /// 0-100 score: 100 minus 10 per warning and 30 per error
    pub quality_score: u8,
    /// Number of levels in the profile
    pub level_count: usize,
    /// Pressure span as (surface, top)
    pub pressure_range: (HectoPascals, HectoPascals),
    /// Advisory findings
    pub warnings: Vec<String>,
    /// Disqualifying findings
    pub errors: Vec<String>,
}

/// Validate a profile and produce its quality report
///
/// # Example
/// ```
/// use convective_risk_core::loader::validate;
/// use convective_risk_core::SoundingProfile;
///
/// let report = validate(&SoundingProfile::moderate_summer());
/// assert!(report.valid);
/// ```
#[must_use]
pub fn validate(profile: &SoundingProfile) -> SoundingQuality {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let level_count = profile.level_count();
    if level_count < MIN_REQUIRED_LEVELS {
        errors.push(format!(
            "insufficient data points: {level_count} (minimum {MIN_REQUIRED_LEVELS} required)"
        ));
    } else if level_count < RECOMMENDED_LEVELS {
        warnings.push(format!(
            "limited data points: {level_count} ({RECOMMENDED_LEVELS}+ recommended)"
        ));
    }

    let (surface, top) = profile.pressure_span();
    if *surface < SURFACE_PRESSURE_FLOOR {
        warnings.push(format!("missing surface data? max pressure {surface}"));
    }
    if *top > UPPER_AIR_CEILING {
        warnings.push(format!("limited upper air data? min pressure {top}"));
    }

    let temperature = profile.temperature();
    let inversions = temperature
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .count();
    if inversions > 0 {
        warnings.push(format!(
            "temperature inversion detected ({inversions} layers)"
        ));
    }

    let depressions: Vec<f64> = temperature
        .iter()
        .zip(profile.dewpoint())
        .map(|(t, td)| t - td)
        .collect();
    if depressions.iter().any(|&d| d < 0.0) {
        errors.push("invalid data: dewpoint above temperature".to_string());
    }
    let max_depression = depressions.iter().fold(f64::MIN, |a, &b| a.max(b));
    if max_depression > DRY_LAYER_DEPRESSION {
        warnings.push(format!(
            "very dry layer detected (depression {max_depression:.1}°C)"
        ));
    }
    if depressions
        .iter()
        .any(|&d| (0.0..SATURATION_DEPRESSION).contains(&d))
    {
        warnings.push("near-saturated layer present (cloud/fog)".to_string());
    }

    let deductions =
        WARNING_PENALTY * warnings.len() as u32 + ERROR_PENALTY * errors.len() as u32;
    let quality_score = 100u32.saturating_sub(deductions) as u8;

    SoundingQuality {
        valid: errors.is_empty(),
        quality_score,
        level_count,
        pressure_range: (surface, top),
        warnings,
        errors,
    }
}
