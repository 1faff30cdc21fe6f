//! Surface-based parcel lifting and CAPE/CIN integration
//!
//! Implements the parcel engine: a surface parcel is lifted dry-adiabatically
//! to its lifting condensation level, then pseudo-adiabatically to the top of
//! the profile, and the buoyancy it accumulates against the environment is
//! integrated into CAPE and CIN with the hydrostatic layer thickness.
//!
//! The ascent is evaluated at the input pressure levels only - the profile
//! is never resampled, so the result is consistent with the input resolution.
//!
//! Degenerate columns (no saturation, no free convection, isothermal) always
//! resolve to valid zero/absent indices; structural defects are rejected
//! earlier, at [`SoundingProfile`](crate::SoundingProfile) construction.

use crate::core_types::units::{Celsius, HectoPascals, JoulesPerKilogram};
use crate::core_types::{ConvectiveIndices, SoundingProfile};
use crate::physics::thermo::{
    self,
    constants::{GRAVITY, KELVIN_OFFSET},
};

/// Options for the parcel ascent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParcelOptions {
    /// Apply the virtual-temperature correction to both parcel and
    /// environment before differencing buoyancy (off by default)
    pub virtual_temperature_correction: bool,
}

/// Pressure decrement for the LCL search walk (hPa)
const LCL_SEARCH_STEP: f64 = 1.0;

/// Bisection refinements once the LCL is bracketed
const LCL_BISECTION_ITERATIONS: usize = 40;

/// Maximum pressure step for the pseudo-adiabatic integration (hPa)
const MOIST_ASCENT_STEP: f64 = 1.0;

/// Dewpoint-excess tolerance (°C) below which the parcel counts as
/// saturated; absorbs round-trip rounding in the mixing-ratio inversion
const SATURATION_TOLERANCE: f64 = 1e-9;

/// Lifting condensation level of the surface parcel
///
/// Explicit discovered-or-not state: `None` means the parcel never
/// saturates within the profile's pressure range, which is a physically
/// valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LiftedCondensationLevel {
    /// Pressure at saturation (hPa)
    pressure: f64,
    /// Parcel temperature at saturation (K)
    temperature_k: f64,
}

/// Compute convective indices for a surface-based parcel
///
/// Never fails for a structurally valid profile: columns with no saturation
/// or no free convection degrade to zero CAPE and absent critical levels.
///
/// # Example
/// ```
/// use convective_risk_core::physics::{compute_indices, ParcelOptions};
/// use convective_risk_core::SoundingProfile;
///
/// let profile = SoundingProfile::high_instability();
/// let indices = compute_indices(&profile, ParcelOptions::default());
/// assert!(*indices.cape > 0.0);
/// ```
#[must_use]
pub fn compute_indices(profile: &SoundingProfile, options: ParcelOptions) -> ConvectiveIndices {
    let pressure = profile.pressure();
    let temperature = profile.temperature();

    let surface_pressure = pressure[0];
    let surface_temperature_c = temperature[0];
    // Defensive clamp: dewpoint above temperature is the external
    // validator's problem, but it must not poison the ascent.
    let surface_dewpoint_c = profile.dewpoint()[0].min(surface_temperature_c);
    let surface_temperature_k = surface_temperature_c + KELVIN_OFFSET;

    let surface_vapor_pressure = thermo::saturation_vapor_pressure(surface_dewpoint_c);
    let surface_mixing_ratio = thermo::mixing_ratio(surface_vapor_pressure, surface_pressure);

    let profile_top = pressure[pressure.len() - 1];
    let lcl = find_lcl(
        surface_pressure,
        surface_temperature_k,
        surface_mixing_ratio,
        profile_top,
    );

    let parcel_k = parcel_temperatures(pressure, surface_pressure, surface_temperature_k, lcl);
    let parcel_profile: Vec<Celsius> = parcel_k
        .iter()
        .map(|&t| Celsius::new(t - KELVIN_OFFSET))
        .collect();

    // No saturation within the profile: quiescent column by definition.
    let Some(lcl) = lcl else {
        return ConvectiveIndices {
            cape: JoulesPerKilogram::ZERO,
            cin: JoulesPerKilogram::ZERO,
            lcl_pressure: None,
            lcl_temperature: None,
            lfc_pressure: None,
            lfc_temperature: None,
            el_pressure: None,
            el_temperature: None,
            surface_temperature: Celsius::new(surface_temperature_c),
            surface_dewpoint: Celsius::new(surface_dewpoint_c),
            parcel_profile,
        };
    };

    let buoyancy = buoyancy_profile(
        profile,
        &parcel_k,
        surface_mixing_ratio,
        lcl.pressure,
        options.virtual_temperature_correction,
    );

    // LFC: first level at or above the LCL where buoyancy turns positive.
    let lfc_index = (0..pressure.len())
        .find(|&i| pressure[i] <= lcl.pressure && buoyancy[i] > 0.0);

    let (cape, cin, lfc_index, el_index) = match lfc_index {
        Some(lfc) => {
            // EL: top of the first contiguous positive run starting at the
            // LFC. Elevated positive excursions above it are ignored.
            let mut el = lfc;
            while el + 1 < pressure.len() && buoyancy[el + 1] > 0.0 {
                el += 1;
            }
            let cape = integrate_positive(profile, &buoyancy, lfc, el);
            let cin = integrate_negative(profile, &buoyancy, 0, lfc);
            (cape, cin, Some(lfc), Some(el))
        }
        None => {
            // No free convection: zero CAPE, but the inhibition of the full
            // column is still reported as barrier strength.
            let cin = integrate_negative(profile, &buoyancy, 0, pressure.len() - 1);
            (0.0, cin, None, None)
        }
    };

    ConvectiveIndices {
        cape: JoulesPerKilogram::new(cape),
        cin: JoulesPerKilogram::new(cin),
        lcl_pressure: Some(HectoPascals::new(lcl.pressure)),
        lcl_temperature: Some(Celsius::new(lcl.temperature_k - KELVIN_OFFSET)),
        lfc_pressure: lfc_index.map(|i| HectoPascals::new(pressure[i])),
        lfc_temperature: lfc_index.map(|i| Celsius::new(temperature[i])),
        el_pressure: el_index.map(|i| HectoPascals::new(pressure[i])),
        el_temperature: el_index.map(|i| Celsius::new(temperature[i])),
        surface_temperature: Celsius::new(surface_temperature_c),
        surface_dewpoint: Celsius::new(surface_dewpoint_c),
        parcel_profile,
    }
}

/// Walk the dry adiabat downward in pressure until the parcel saturates
///
/// The parcel's dewpoint is recomputed at every step from its conserved
/// mixing ratio; saturation is where the dry-adiabatic temperature meets
/// that dewpoint. The crossing is bracketed by the walk and refined by
/// bisection.
fn find_lcl(
    surface_pressure: f64,
    surface_temperature_k: f64,
    surface_mixing_ratio: f64,
    profile_top: f64,
) -> Option<LiftedCondensationLevel> {
    // Positive while unsaturated, zero/negative at and beyond saturation
    let dewpoint_excess = |p: f64| -> f64 {
        let t_c =
            thermo::dry_adiabatic_temperature(surface_temperature_k, surface_pressure, p)
                - KELVIN_OFFSET;
        let vapor = thermo::vapor_pressure_from_mixing_ratio(surface_mixing_ratio, p);
        t_c - thermo::dewpoint_from_vapor_pressure(vapor)
    };

    if dewpoint_excess(surface_pressure) <= SATURATION_TOLERANCE {
        // Saturated at the surface: LCL is the surface itself
        return Some(LiftedCondensationLevel {
            pressure: surface_pressure,
            temperature_k: surface_temperature_k,
        });
    }

    let mut unsaturated = surface_pressure;
    let mut probe = surface_pressure - LCL_SEARCH_STEP;
    while probe > profile_top {
        if dewpoint_excess(probe) <= 0.0 {
            // Bracketed: refine the crossing between `probe` (saturated)
            // and `unsaturated`
            let mut saturated = probe;
            for _ in 0..LCL_BISECTION_ITERATIONS {
                let mid = 0.5 * (saturated + unsaturated);
                if dewpoint_excess(mid) <= 0.0 {
                    saturated = mid;
                } else {
                    unsaturated = mid;
                }
            }
            let temperature_k = thermo::dry_adiabatic_temperature(
                surface_temperature_k,
                surface_pressure,
                saturated,
            );
            return Some(LiftedCondensationLevel {
                pressure: saturated,
                temperature_k,
            });
        }
        unsaturated = probe;
        probe -= LCL_SEARCH_STEP;
    }

    // Check the profile top itself before giving up
    if dewpoint_excess(profile_top) <= 0.0 {
        let mut saturated = profile_top;
        for _ in 0..LCL_BISECTION_ITERATIONS {
            let mid = 0.5 * (saturated + unsaturated);
            if dewpoint_excess(mid) <= 0.0 {
                saturated = mid;
            } else {
                unsaturated = mid;
            }
        }
        let temperature_k =
            thermo::dry_adiabatic_temperature(surface_temperature_k, surface_pressure, saturated);
        return Some(LiftedCondensationLevel {
            pressure: saturated,
            temperature_k,
        });
    }

    None
}

/// Parcel temperature (K) at every input level
///
/// Dry adiabat up to the LCL, pseudo-adiabat above it. The moist segment is
/// integrated once, level to level, so each level costs only the pressure
/// interval since the previous one.
fn parcel_temperatures(
    pressure: &[f64],
    surface_pressure: f64,
    surface_temperature_k: f64,
    lcl: Option<LiftedCondensationLevel>,
) -> Vec<f64> {
    let mut temps = Vec::with_capacity(pressure.len());

    // Moist-ascent cursor, positioned at the LCL once levels pass above it
    let mut cursor = lcl.map(|l| (l.pressure, l.temperature_k));

    for &p in pressure {
        let above_lcl = lcl.is_some_and(|l| p < l.pressure);
        if above_lcl {
            let (cursor_p, cursor_t) = cursor.take().unwrap_or((surface_pressure, surface_temperature_k));
            let t = moist_ascent(cursor_p, cursor_t, p);
            cursor = Some((p, t));
            temps.push(t);
        } else {
            temps.push(thermo::dry_adiabatic_temperature(
                surface_temperature_k,
                surface_pressure,
                p,
            ));
        }
    }

    temps
}

/// Integrate the pseudo-adiabat from (`start_pressure`, `start_temperature`)
/// down to `target_pressure` with 4th-order Runge-Kutta steps
fn moist_ascent(start_pressure: f64, start_temperature_k: f64, target_pressure: f64) -> f64 {
    let mut p = start_pressure;
    let mut t = start_temperature_k;

    while p > target_pressure + f64::EPSILON {
        let dp = (p - target_pressure).min(MOIST_ASCENT_STEP);

        let k1 = thermo::moist_adiabatic_lapse_rate(t, p);
        let k2 = thermo::moist_adiabatic_lapse_rate(t - 0.5 * dp * k1, p - 0.5 * dp);
        let k3 = thermo::moist_adiabatic_lapse_rate(t - 0.5 * dp * k2, p - 0.5 * dp);
        let k4 = thermo::moist_adiabatic_lapse_rate(t - dp * k3, p - dp);

        t -= dp * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
        p -= dp;
    }

    t
}

/// Buoyancy `(T_parcel - T_env) / T_env` at every level, in absolute units
///
/// With the virtual-temperature correction enabled, both temperatures are
/// converted first: the environment from its own dewpoint's mixing ratio,
/// the parcel from its conserved surface mixing ratio below the LCL and the
/// saturation mixing ratio above it.
fn buoyancy_profile(
    profile: &SoundingProfile,
    parcel_k: &[f64],
    surface_mixing_ratio: f64,
    lcl_pressure: f64,
    virtual_correction: bool,
) -> Vec<f64> {
    let pressure = profile.pressure();
    let temperature = profile.temperature();
    let dewpoint = profile.dewpoint();

    (0..pressure.len())
        .map(|i| {
            let p = pressure[i];
            let env_k = temperature[i] + KELVIN_OFFSET;
            let parcel = parcel_k[i];

            if virtual_correction {
                let env_dewpoint = dewpoint[i].min(temperature[i]);
                let env_w =
                    thermo::mixing_ratio(thermo::saturation_vapor_pressure(env_dewpoint), p);
                let parcel_w = if p < lcl_pressure {
                    thermo::saturation_mixing_ratio(parcel - KELVIN_OFFSET, p)
                } else {
                    surface_mixing_ratio
                };
                let env_v = thermo::virtual_temperature(env_k, env_w);
                let parcel_v = thermo::virtual_temperature(parcel, parcel_w);
                (parcel_v - env_v) / env_v
            } else {
                (parcel - env_k) / env_k
            }
        })
        .collect()
}

/// Trapezoidal CAPE over the layers from `from` to `to` (level indices)
///
/// Layer thickness comes from the hydrostatic relation on the layer-mean
/// environment temperature; the sum is scaled by `g` per the standard CAPE
/// formula. The result is non-negative by construction.
fn integrate_positive(
    profile: &SoundingProfile,
    buoyancy: &[f64],
    from: usize,
    to: usize,
) -> f64 {
    let pressure = profile.pressure();
    let temperature = profile.temperature();

    let mut cape = 0.0;
    for i in from..to {
        let mean_temperature_k =
            0.5 * (temperature[i] + temperature[i + 1]) + KELVIN_OFFSET;
        let thickness =
            thermo::hydrostatic_thickness(pressure[i], pressure[i + 1], mean_temperature_k);
        let mean_buoyancy = 0.5 * (buoyancy[i].max(0.0) + buoyancy[i + 1].max(0.0));
        cape += GRAVITY * thickness * mean_buoyancy;
    }
    cape.max(0.0)
}

/// Trapezoidal negative-buoyancy energy over the layers from `from` to `to`,
/// reported as a non-negative magnitude (barrier strength)
fn integrate_negative(
    profile: &SoundingProfile,
    buoyancy: &[f64],
    from: usize,
    to: usize,
) -> f64 {
    let pressure = profile.pressure();
    let temperature = profile.temperature();

    let mut deficit = 0.0;
    for i in from..to {
        let mean_temperature_k =
            0.5 * (temperature[i] + temperature[i + 1]) + KELVIN_OFFSET;
        let thickness =
            thermo::hydrostatic_thickness(pressure[i], pressure[i + 1], mean_temperature_k);
        let mean_buoyancy = 0.5 * (buoyancy[i].min(0.0) + buoyancy[i + 1].min(0.0));
        deficit += GRAVITY * thickness * mean_buoyancy;
    }
    (-deficit).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcl_for_warm_moist_surface() {
        // T 30°C / Td 25°C at 1000 hPa: LCL near 930 hPa (rule of thumb
        // ~125 m per °C of dewpoint depression)
        let w = thermo::mixing_ratio(thermo::saturation_vapor_pressure(25.0), 1000.0);
        let lcl = find_lcl(1000.0, 30.0 + KELVIN_OFFSET, w, 200.0)
            .expect("warm moist parcel must saturate");
        assert!(
            (900.0..=960.0).contains(&lcl.pressure),
            "LCL for 5°C depression should sit near 930 hPa, got {:.1}",
            lcl.pressure
        );
        // Parcel cooled dry-adiabatically to the LCL
        assert!(lcl.temperature_k < 30.0 + KELVIN_OFFSET);
    }

    #[test]
    fn test_lcl_at_surface_when_saturated() {
        let w = thermo::mixing_ratio(thermo::saturation_vapor_pressure(20.0), 1000.0);
        let lcl = find_lcl(1000.0, 20.0 + KELVIN_OFFSET, w, 200.0)
            .expect("saturated surface is its own LCL");
        assert_eq!(lcl.pressure, 1000.0);
    }

    #[test]
    fn test_no_lcl_for_very_dry_shallow_profile() {
        // 40°C of dewpoint depression but only 150 hPa of profile depth:
        // the parcel never saturates before running out of levels
        let w = thermo::mixing_ratio(thermo::saturation_vapor_pressure(-20.0), 1000.0);
        let lcl = find_lcl(1000.0, 20.0 + KELVIN_OFFSET, w, 850.0);
        assert!(lcl.is_none());
    }

    #[test]
    fn test_moist_ascent_cools_slower_than_dry() {
        let t_start = 293.15;
        let moist = moist_ascent(900.0, t_start, 700.0);
        let dry = thermo::dry_adiabatic_temperature(t_start, 900.0, 700.0);
        assert!(
            moist > dry,
            "latent heat release must keep the saturated parcel warmer: moist {moist:.2} K, dry {dry:.2} K"
        );
        assert!(moist < t_start);
    }

    #[test]
    fn test_parcel_profile_length_matches_input() {
        let profile = SoundingProfile::moderate_summer();
        let indices = compute_indices(&profile, ParcelOptions::default());
        assert_eq!(indices.parcel_profile.len(), profile.level_count());
    }

    #[test]
    fn test_unstable_profile_has_cape_and_levels() {
        let profile = SoundingProfile::high_instability();
        let indices = compute_indices(&profile, ParcelOptions::default());

        assert!(*indices.cape > 0.0, "pre-storm column must carry CAPE");
        assert!(indices.lcl_pressure.is_some());
        assert!(indices.lfc_pressure.is_some());
        assert!(indices.el_pressure.is_some());

        // Levels must stack: LCL below (higher pressure than) LFC, LFC below EL
        let lcl = *indices.lcl_pressure.unwrap();
        let lfc = *indices.lfc_pressure.unwrap();
        let el = *indices.el_pressure.unwrap();
        assert!(lcl >= lfc, "LCL {lcl:.1} must not sit above LFC {lfc:.1}");
        assert!(lfc > el, "LFC {lfc:.1} must sit below EL {el:.1}");
    }

    #[test]
    fn test_capped_profile_has_no_free_convection() {
        let profile = SoundingProfile::capped_stable();
        let indices = compute_indices(&profile, ParcelOptions::default());

        assert_eq!(*indices.cape, 0.0);
        assert!(indices.lfc_pressure.is_none());
        assert!(indices.el_pressure.is_none());
        // The cold dry column still reports its full-column inhibition
        assert!(*indices.cin > 0.0);
    }

    #[test]
    fn test_virtual_correction_changes_but_preserves_invariants() {
        let profile = SoundingProfile::high_instability();
        let plain = compute_indices(&profile, ParcelOptions::default());
        let corrected = compute_indices(
            &profile,
            ParcelOptions {
                virtual_temperature_correction: true,
            },
        );

        assert!(*corrected.cape >= 0.0);
        assert!(*corrected.cin >= 0.0);
        assert_ne!(
            *plain.cape, *corrected.cape,
            "virtual temperature correction should shift the integral"
        );
    }

    #[test]
    fn test_dewpoint_above_temperature_is_clamped() {
        // Structurally valid but physically inconsistent surface level
        let profile = SoundingProfile::new(
            vec![1000.0, 850.0, 700.0, 500.0],
            vec![20.0, 10.0, 0.0, -20.0],
            vec![25.0, 5.0, -5.0, -25.0],
        )
        .unwrap();
        let indices = compute_indices(&profile, ParcelOptions::default());
        assert_eq!(indices.surface_dewpoint, indices.surface_temperature);
    }
}
