//! Atmospheric sounding profile container and structural validation
//!
//! A [`SoundingProfile`] is the immutable input to the parcel engine: one
//! pressure/temperature/dewpoint triple per level, surface first, pressure
//! strictly decreasing with height. Construction is the only place the
//! structural invariants are enforced; everything downstream trusts them.
//!
//! Physical plausibility (dewpoint depression, inversion layers, coverage)
//! is the concern of [`crate::loader::quality`], not of this type.

use crate::core_types::units::{Celsius, HectoPascals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of levels a profile must carry
///
/// Two levels cannot bracket a buoyancy transition; three is the smallest
/// column the integration is defined on.
pub const MIN_LEVELS: usize = 3;

/// Structural defect in a sounding profile
///
/// The only fatal failure kind the core produces. Physically degenerate but
/// structurally sound profiles (isothermal, superadiabatic, bone-dry) are
/// never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Fewer than [`MIN_LEVELS`] levels
    TooFewLevels {
        /// Number of levels supplied
        found: usize,
    },
    /// Pressure/temperature/dewpoint sequences differ in length
    LengthMismatch {
        /// Pressure sequence length
        pressure: usize,
        /// Temperature sequence length
        temperature: usize,
        /// Dewpoint sequence length
        dewpoint: usize,
    },
    /// Pressure fails to strictly decrease at the given level index
    NonMonotonicPressure {
        /// Index of the first offending level
        index: usize,
    },
    /// Pressure is zero or negative at the given level index
    NonPositivePressure {
        /// Index of the offending level
        index: usize,
    },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::TooFewLevels { found } => {
                write!(f, "sounding has {found} levels, minimum is {MIN_LEVELS}")
            }
            StructuralError::LengthMismatch {
                pressure,
                temperature,
                dewpoint,
            } => write!(
                f,
                "sequence lengths differ: pressure {pressure}, temperature {temperature}, dewpoint {dewpoint}"
            ),
            StructuralError::NonMonotonicPressure { index } => {
                write!(f, "pressure does not strictly decrease at level {index}")
            }
            StructuralError::NonPositivePressure { index } => {
                write!(f, "non-positive pressure at level {index}")
            }
        }
    }
}

impl std::error::Error for StructuralError {}

/// Vertical atmospheric sounding: one (pressure, temperature, dewpoint)
/// triple per level, surface first
///
/// Invariants, enforced at construction and relied on everywhere else:
/// - at least [`MIN_LEVELS`] levels
/// - all three sequences the same length
/// - pressure positive and strictly decreasing (surface at index 0)
///
/// The `dewpoint <= temperature` relation is a data-quality concern of the
/// external validator; the parcel engine only clamps defensively.
///
/// # Example
/// ```
/// use convective_risk_core::SoundingProfile;
///
/// let profile = SoundingProfile::new(
///     vec![1000.0, 850.0, 700.0, 500.0],
///     vec![25.0, 15.0, 5.0, -15.0],
///     vec![18.0, 10.0, -2.0, -25.0],
/// )?;
/// assert_eq!(profile.level_count(), 4);
/// # Ok::<(), convective_risk_core::StructuralError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundingProfile {
    /// Level pressures (hPa), strictly decreasing
    pressure: Vec<f64>,
    /// Environment temperature per level (°C)
    temperature: Vec<f64>,
    /// Environment dewpoint per level (°C)
    dewpoint: Vec<f64>,
}

impl SoundingProfile {
    /// Build a profile from raw level sequences, validating the structural
    /// invariants
    ///
    /// Units: pressure in hPa, temperature and dewpoint in °C, all three in
    /// the same level order with the surface first.
    ///
    /// # Errors
    /// Returns [`StructuralError`] if the sequences differ in length, carry
    /// fewer than [`MIN_LEVELS`] levels, or the pressure column is not
    /// positive and strictly decreasing.
    pub fn new(
        pressure: Vec<f64>,
        temperature: Vec<f64>,
        dewpoint: Vec<f64>,
    ) -> Result<Self, StructuralError> {
        if temperature.len() != pressure.len() || dewpoint.len() != pressure.len() {
            return Err(StructuralError::LengthMismatch {
                pressure: pressure.len(),
                temperature: temperature.len(),
                dewpoint: dewpoint.len(),
            });
        }
        if pressure.len() < MIN_LEVELS {
            return Err(StructuralError::TooFewLevels {
                found: pressure.len(),
            });
        }
        for (i, &p) in pressure.iter().enumerate() {
            if p <= 0.0 || !p.is_finite() {
                return Err(StructuralError::NonPositivePressure { index: i });
            }
        }
        for i in 1..pressure.len() {
            if pressure[i] >= pressure[i - 1] {
                return Err(StructuralError::NonMonotonicPressure { index: i });
            }
        }

        Ok(Self {
            pressure,
            temperature,
            dewpoint,
        })
    }

    /// Number of levels in the profile
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.pressure.len()
    }

    /// Level pressures (hPa), surface first
    #[must_use]
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Environment temperatures (°C), surface first
    #[must_use]
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Environment dewpoints (°C), surface first
    #[must_use]
    pub fn dewpoint(&self) -> &[f64] {
        &self.dewpoint
    }

    /// Surface (lowest-level) pressure
    #[must_use]
    pub fn surface_pressure(&self) -> HectoPascals {
        HectoPascals::new(self.pressure[0])
    }

    /// Surface (lowest-level) temperature
    #[must_use]
    pub fn surface_temperature(&self) -> Celsius {
        Celsius::new(self.temperature[0])
    }

    /// Surface (lowest-level) dewpoint
    #[must_use]
    pub fn surface_dewpoint(&self) -> Celsius {
        Celsius::new(self.dewpoint[0])
    }

    /// Pressure span of the profile as (surface, top)
    #[must_use]
    pub fn pressure_span(&self) -> (HectoPascals, HectoPascals) {
        (
            HectoPascals::new(self.pressure[0]),
            HectoPascals::new(self.pressure[self.pressure.len() - 1]),
        )
    }

    // ------------------------------------------------------------------
    // Synthetic example profiles
    //
    // Known-good level data, constructed directly without re-validation.
    // ------------------------------------------------------------------

    /// Strongly capped, minimally unstable winter-morning column
    ///
    /// Cold surface under a dry airmass: the parcel stays far from
    /// saturation and the column yields near-zero CAPE. Safe flying
    /// conditions for every stakeholder.
    #[must_use]
    pub fn capped_stable() -> Self {
        Self {
            pressure: vec![
                1013.0, 1000.0, 975.0, 950.0, 925.0, 900.0, 850.0, 800.0, 750.0, 700.0, 650.0,
                600.0, 550.0, 500.0, 450.0, 400.0, 350.0, 300.0, 250.0, 200.0,
            ],
            temperature: vec![
                10.0, 9.0, 7.0, 5.0, 3.0, 1.0, -2.0, -5.0, -8.0, -11.0, -14.0, -17.5, -21.0,
                -25.0, -29.5, -34.5, -40.0, -46.5, -54.0, -62.0,
            ],
            dewpoint: vec![
                -5.0, -5.5, -6.0, -6.5, -7.0, -8.0, -10.0, -12.0, -14.0, -16.0, -18.5, -21.5,
                -25.0, -29.0, -33.5, -38.5, -44.0, -50.5, -58.0, -66.0,
            ],
        }
    }

    /// Weakly capped, moderately unstable summer-afternoon column
    ///
    /// Warm moist surface air under a near-moist-adiabatic environment;
    /// produces moderate CAPE with little inhibition. A typical summer
    /// soaring day with some overdevelopment risk.
    #[must_use]
    pub fn moderate_summer() -> Self {
        Self {
            pressure: vec![
                1000.0, 975.0, 950.0, 925.0, 900.0, 850.0, 800.0, 750.0, 700.0, 650.0, 600.0,
                550.0, 500.0, 450.0, 400.0, 350.0, 300.0, 250.0, 200.0,
            ],
            temperature: vec![
                26.0, 24.0, 22.0, 20.0, 18.0, 14.0, 10.0, 6.0, 2.0, -2.0, -6.0, -10.5, -15.0,
                -20.0, -25.5, -31.5, -38.5, -46.5, -55.5,
            ],
            dewpoint: vec![
                18.0, 17.0, 16.0, 15.0, 14.0, 11.0, 8.0, 4.0, 0.0, -4.0, -9.0, -14.5, -20.0,
                -26.0, -32.5, -39.5, -47.5, -56.5, -66.5,
            ],
        }
    }

    /// Uncapped, strongly unstable pre-storm column
    ///
    /// Hot, very moist surface air with a steep environmental lapse rate:
    /// large CAPE, negligible CIN, severe thunderstorm potential.
    #[must_use]
    pub fn high_instability() -> Self {
        Self {
            pressure: vec![
                1000.0, 975.0, 950.0, 925.0, 900.0, 850.0, 800.0, 750.0, 700.0, 650.0, 600.0,
                550.0, 500.0, 450.0, 400.0, 350.0, 300.0, 250.0, 200.0,
            ],
            temperature: vec![
                28.0, 26.0, 24.0, 22.0, 20.0, 16.0, 12.0, 8.0, 4.0, 0.0, -4.0, -8.0, -12.0,
                -17.0, -22.0, -28.0, -35.0, -44.0, -54.0,
            ],
            dewpoint: vec![
                22.0, 20.0, 18.0, 16.0, 14.0, 10.0, 6.0, 2.0, -2.0, -6.0, -10.0, -14.0, -18.0,
                -23.0, -28.0, -34.0, -41.0, -50.0, -60.0,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_accepted() {
        let profile = SoundingProfile::new(
            vec![1000.0, 850.0, 700.0],
            vec![20.0, 10.0, 0.0],
            vec![15.0, 5.0, -10.0],
        );
        assert!(profile.is_ok());
    }

    #[test]
    fn test_too_few_levels_rejected() {
        let result = SoundingProfile::new(vec![1000.0, 850.0], vec![20.0, 10.0], vec![15.0, 5.0]);
        assert_eq!(result, Err(StructuralError::TooFewLevels { found: 2 }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = SoundingProfile::new(
            vec![1000.0, 850.0, 700.0],
            vec![20.0, 10.0],
            vec![15.0, 5.0, -10.0],
        );
        assert!(matches!(
            result,
            Err(StructuralError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_non_monotonic_pressure_rejected() {
        let result = SoundingProfile::new(
            vec![1000.0, 850.0, 900.0],
            vec![20.0, 10.0, 12.0],
            vec![15.0, 5.0, 6.0],
        );
        assert_eq!(
            result,
            Err(StructuralError::NonMonotonicPressure { index: 2 })
        );

        // Repeated level counts as non-monotonic too
        let repeated = SoundingProfile::new(
            vec![1000.0, 850.0, 850.0],
            vec![20.0, 10.0, 10.0],
            vec![15.0, 5.0, 5.0],
        );
        assert_eq!(
            repeated,
            Err(StructuralError::NonMonotonicPressure { index: 2 })
        );
    }

    #[test]
    fn test_non_positive_pressure_rejected() {
        let result = SoundingProfile::new(
            vec![1000.0, 850.0, 0.0],
            vec![20.0, 10.0, 0.0],
            vec![15.0, 5.0, -10.0],
        );
        assert_eq!(result, Err(StructuralError::NonPositivePressure { index: 2 }));
    }

    #[test]
    fn test_surface_accessors() {
        let profile = SoundingProfile::moderate_summer();
        assert_eq!(*profile.surface_pressure(), 1000.0);
        assert_eq!(*profile.surface_temperature(), 26.0);
        assert_eq!(*profile.surface_dewpoint(), 18.0);
    }

    #[test]
    fn test_example_profiles_are_structurally_valid() {
        for profile in [
            SoundingProfile::capped_stable(),
            SoundingProfile::moderate_summer(),
            SoundingProfile::high_instability(),
        ] {
            // Round-trip through the validating constructor
            let revalidated = SoundingProfile::new(
                profile.pressure().to_vec(),
                profile.temperature().to_vec(),
                profile.dewpoint().to_vec(),
            );
            assert!(revalidated.is_ok(), "example profile failed validation");
            assert!(profile.level_count() >= MIN_LEVELS);
        }
    }

    #[test]
    fn test_error_display() {
        let err = StructuralError::NonMonotonicPressure { index: 4 };
        assert_eq!(
            err.to_string(),
            "pressure does not strictly decrease at level 4"
        );
    }
}
