//! Moist-thermodynamic primitives for parcel analysis
//!
//! Pure functions over raw f64 quantities; the parcel engine composes them
//! into the full ascent. Temperatures are °C at the API boundary where noted
//! and Kelvin inside the adiabatic relations; pressures are hPa; mixing
//! ratios are dimensionless (kg water vapor per kg dry air).
//!
//! # References
//! - Bolton, D. (1980). "The computation of equivalent potential temperature."
//!   Monthly Weather Review, 108(7), 1046-1053.
//! - Poisson relation and pseudo-adiabatic lapse rate: standard forms, e.g.
//!   American Meteorological Society Glossary of Meteorology.

/// Physical constants used by the parcel relations
///
/// Values follow the conventional meteorological choices; they are grouped
/// here so the integration and the tests reference one set of numbers.
pub mod constants {
    /// Specific gas constant of dry air (J/(kg·K))
    pub const DRY_AIR_GAS_CONSTANT: f64 = 287.04;

    /// Offset between the Celsius and Kelvin scales (K)
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Specific heat of dry air at constant pressure (J/(kg·K))
    pub const DRY_AIR_SPECIFIC_HEAT: f64 = 1005.0;

    /// Standard gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.80665;

    /// Latent heat of vaporization of water near 0°C (J/kg)
    pub const LATENT_HEAT_VAPORIZATION: f64 = 2.501e6;

    /// Ratio of the gas constants of dry air and water vapor (dimensionless)
    pub const EPSILON: f64 = 0.622;

    /// Poisson exponent `R_d / c_p` for dry-adiabatic ascent
    pub const POISSON_EXPONENT: f64 = DRY_AIR_GAS_CONSTANT / DRY_AIR_SPECIFIC_HEAT;
}

use constants::{
    DRY_AIR_GAS_CONSTANT, DRY_AIR_SPECIFIC_HEAT, EPSILON, LATENT_HEAT_VAPORIZATION,
    POISSON_EXPONENT,
};

// Bolton (1980) saturation vapor pressure coefficients
const BOLTON_BASE_PRESSURE: f64 = 6.112; // hPa - saturation vapor pressure at 0°C
const BOLTON_A: f64 = 17.67; // Dimensionless coefficient
const BOLTON_B: f64 = 243.5; // °C - temperature offset

/// Saturation vapor pressure over liquid water (hPa)
///
/// # Formula
/// ```text
/// e_s(T) = 6.112 × exp(17.67 × T / (T + 243.5))
/// ```
/// with `T` in °C. Accurate to within 0.3% over -35°C to +35°C
/// (Bolton 1980).
#[must_use]
pub fn saturation_vapor_pressure(temperature_c: f64) -> f64 {
    BOLTON_BASE_PRESSURE * (BOLTON_A * temperature_c / (temperature_c + BOLTON_B)).exp()
}

/// Dewpoint (°C) corresponding to a vapor pressure (hPa)
///
/// Inverse of [`saturation_vapor_pressure`]. The input is clamped to a tiny
/// positive floor so that a perfectly dry parcel resolves to a very cold
/// dewpoint instead of a singularity.
#[must_use]
pub fn dewpoint_from_vapor_pressure(vapor_pressure_hpa: f64) -> f64 {
    const MIN_VAPOR_PRESSURE: f64 = 1e-9; // hPa

    let ln_ratio = (vapor_pressure_hpa.max(MIN_VAPOR_PRESSURE) / BOLTON_BASE_PRESSURE).ln();
    BOLTON_B * ln_ratio / (BOLTON_A - ln_ratio)
}

/// Mixing ratio (kg/kg) from vapor pressure and total pressure (both hPa)
///
/// # Formula
/// ```text
/// w = ε × e / (p - e)
/// ```
/// The denominator is floored at a small positive value so near-vacuum
/// levels degrade instead of dividing by zero.
#[must_use]
pub fn mixing_ratio(vapor_pressure_hpa: f64, pressure_hpa: f64) -> f64 {
    const MIN_DRY_PRESSURE: f64 = 1e-6; // hPa

    EPSILON * vapor_pressure_hpa / (pressure_hpa - vapor_pressure_hpa).max(MIN_DRY_PRESSURE)
}

/// Saturation mixing ratio (kg/kg) at a temperature (°C) and pressure (hPa)
#[must_use]
pub fn saturation_mixing_ratio(temperature_c: f64, pressure_hpa: f64) -> f64 {
    mixing_ratio(saturation_vapor_pressure(temperature_c), pressure_hpa)
}

/// Vapor pressure (hPa) carried by a mixing ratio at a total pressure
///
/// Inverse of [`mixing_ratio`]; used to track the dewpoint of an unsaturated
/// parcel whose mixing ratio is conserved during dry ascent.
#[must_use]
pub fn vapor_pressure_from_mixing_ratio(mixing_ratio_kgkg: f64, pressure_hpa: f64) -> f64 {
    mixing_ratio_kgkg * pressure_hpa / (EPSILON + mixing_ratio_kgkg)
}

/// Parcel temperature (K) after dry-adiabatic displacement
///
/// Poisson relation at constant potential temperature:
/// ```text
/// T = T_0 × (p / p_0)^(R_d/c_p)
/// ```
#[must_use]
pub fn dry_adiabatic_temperature(
    start_temperature_k: f64,
    start_pressure_hpa: f64,
    pressure_hpa: f64,
) -> f64 {
    start_temperature_k * (pressure_hpa / start_pressure_hpa).powf(POISSON_EXPONENT)
}

/// Pseudo-adiabatic lapse rate dT/dp (K/hPa) for a saturated parcel
///
/// # Formula
/// ```text
/// dT/dp = (1/p) × (R_d·T + L_v·r_s) / (c_p + L_v²·r_s·ε / (R_d·T²))
/// ```
/// with `T` in K, `p` in hPa, and `r_s` the saturation mixing ratio at
/// (T, p). All condensate is assumed removed on formation (pseudo-adiabatic
/// process); latent heat is treated as constant along the path.
///
/// The value is positive: temperature falls as pressure falls.
#[must_use]
pub fn moist_adiabatic_lapse_rate(temperature_k: f64, pressure_hpa: f64) -> f64 {
    let temperature_c = temperature_k - constants::KELVIN_OFFSET;
    let rs = saturation_mixing_ratio(temperature_c, pressure_hpa);

    let numerator = DRY_AIR_GAS_CONSTANT * temperature_k + LATENT_HEAT_VAPORIZATION * rs;
    let denominator = DRY_AIR_SPECIFIC_HEAT
        + LATENT_HEAT_VAPORIZATION * LATENT_HEAT_VAPORIZATION * rs * EPSILON
            / (DRY_AIR_GAS_CONSTANT * temperature_k * temperature_k);

    numerator / denominator / pressure_hpa
}

/// Virtual temperature (K) of moist air
///
/// # Formula
/// ```text
/// T_v = T × (1 + w/ε) / (1 + w)
/// ```
/// Accounts for the density reduction from water vapor; applied to both
/// parcel and environment when the virtual-temperature correction toggle
/// is set.
#[must_use]
pub fn virtual_temperature(temperature_k: f64, mixing_ratio_kgkg: f64) -> f64 {
    temperature_k * (1.0 + mixing_ratio_kgkg / EPSILON) / (1.0 + mixing_ratio_kgkg)
}

/// Hydrostatic thickness (m) of the layer between two pressures
///
/// # Formula
/// ```text
/// Δz = R_d × T̄ / g × ln(p_lower / p_upper)
/// ```
/// with `T̄` the layer-mean absolute temperature. This is the thickness the
/// CAPE/CIN integrals sum over.
#[must_use]
pub fn hydrostatic_thickness(
    lower_pressure_hpa: f64,
    upper_pressure_hpa: f64,
    mean_temperature_k: f64,
) -> f64 {
    DRY_AIR_GAS_CONSTANT * mean_temperature_k / constants::GRAVITY
        * (lower_pressure_hpa / upper_pressure_hpa).ln()
}
