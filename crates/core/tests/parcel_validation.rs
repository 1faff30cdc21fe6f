//! Parcel Engine Validation Suite
//!
//! Validates the thermodynamic primitives against published reference
//! values and the full parcel integration against the synthetic profiles
//! and the degenerate-column policy.
//!
//! # Test Categories
//! 1. Thermodynamic primitive validation (Bolton 1980, hydrostatic checks)
//! 2. Critical-level placement (LCL/LFC/EL)
//! 3. CAPE/CIN magnitudes across the synthetic profiles
//! 4. Degenerate-column policy (never an error, always valid indices)
//!
//! # References
//! - Bolton, D. (1980). Monthly Weather Review, 108(7), 1046-1053.
//! - Doswell & Rasmussen (1994). Weather and Forecasting, 9(4), 625-629.
//!
//! Run with: `cargo test --test parcel_validation`

use approx::assert_relative_eq;
use convective_risk_core::physics::thermo;
use convective_risk_core::{compute_indices, ParcelOptions, SoundingProfile};

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 1: THERMODYNAMIC PRIMITIVE VALIDATION
// ═══════════════════════════════════════════════════════════════════════════

/// Bolton (1980) gives e_s(30°C) = 42.43 hPa
#[test]
fn test_saturation_vapor_pressure_warm_reference() {
    let es = thermo::saturation_vapor_pressure(30.0);
    assert_relative_eq!(es, 42.43, max_relative = 0.005);
}

/// The 1000-500 hPa thickness of a 0°C-mean column is a classic forecast
/// quantity: about 5400-5700 m around the freezing threshold
#[test]
fn test_thickness_against_forecast_rule() {
    let dz = thermo::hydrostatic_thickness(1000.0, 500.0, 273.15);
    assert!(
        (5400.0..5700.0).contains(&dz),
        "1000-500 thickness at 0°C mean should be ~5540 m, got {dz:.0}"
    );
}

/// Saturation mixing ratio doubles roughly every 10°C in the warm range
#[test]
fn test_mixing_ratio_doubling_rule() {
    let w10 = thermo::saturation_mixing_ratio(10.0, 1000.0);
    let w20 = thermo::saturation_mixing_ratio(20.0, 1000.0);
    let ratio = w20 / w10;
    assert!(
        (1.7..2.2).contains(&ratio),
        "w_s should roughly double from 10°C to 20°C, got factor {ratio:.2}"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 2: CRITICAL-LEVEL PLACEMENT
// ═══════════════════════════════════════════════════════════════════════════

/// The pre-storm profile (28°C/22°C surface) condenses near 916 hPa by the
/// Bolton LCL formula; the iterative walk must land close by
#[test]
fn test_lcl_placement_high_instability() {
    let indices = compute_indices(
        &SoundingProfile::high_instability(),
        ParcelOptions::default(),
    );
    let lcl = *indices.lcl_pressure.expect("moist surface parcel must saturate");
    assert!(
        (880.0..950.0).contains(&lcl),
        "LCL for 6°C depression at 1000 hPa should sit near 916 hPa, got {lcl:.1}"
    );
}

/// Critical levels must stack in ascent order wherever they all exist
#[test]
fn test_critical_levels_stack_in_ascent_order() {
    let indices = compute_indices(
        &SoundingProfile::high_instability(),
        ParcelOptions::default(),
    );
    let lcl = *indices.lcl_pressure.unwrap();
    let lfc = *indices.lfc_pressure.unwrap();
    let el = *indices.el_pressure.unwrap();

    assert!(lcl >= lfc, "LCL {lcl:.1} hPa must not sit above LFC {lfc:.1} hPa");
    assert!(lfc > el, "LFC {lfc:.1} hPa must sit below EL {el:.1} hPa");
    assert!(el < 450.0, "EL of a deep convective column should reach the upper troposphere");
}

/// The parcel profile starts at the observed surface temperature and spans
/// every input level
#[test]
fn test_parcel_profile_anchored_at_surface() {
    let profile = SoundingProfile::moderate_summer();
    let indices = compute_indices(&profile, ParcelOptions::default());

    assert_eq!(indices.parcel_profile.len(), profile.level_count());
    assert_relative_eq!(
        indices.parcel_profile[0].value(),
        profile.temperature()[0],
        epsilon = 1e-9
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 3: CAPE/CIN ACROSS THE SYNTHETIC PROFILES
// ═══════════════════════════════════════════════════════════════════════════

/// Magnitude convention: CAPE and CIN are non-negative for every profile
#[test]
fn test_cape_cin_never_negative() {
    for profile in [
        SoundingProfile::capped_stable(),
        SoundingProfile::moderate_summer(),
        SoundingProfile::high_instability(),
    ] {
        for virtual_correction in [false, true] {
            let indices = compute_indices(
                &profile,
                ParcelOptions {
                    virtual_temperature_correction: virtual_correction,
                },
            );
            assert!(*indices.cape >= 0.0);
            assert!(*indices.cin >= 0.0);
        }
    }
}

/// The capped winter column yields zero CAPE but a real inhibition barrier
#[test]
fn test_capped_stable_is_quiescent_with_inhibition() {
    let indices = compute_indices(&SoundingProfile::capped_stable(), ParcelOptions::default());

    assert_eq!(*indices.cape, 0.0);
    assert!(indices.lfc_pressure.is_none());
    assert!(indices.el_pressure.is_none());
    assert!(
        *indices.cin > 100.0,
        "cold capped column should carry a strong barrier, got {}",
        indices.cin
    );
}

/// The summer column carries meaningful CAPE under a shallow warm cap
#[test]
fn test_moderate_summer_carries_cape() {
    let indices = compute_indices(&SoundingProfile::moderate_summer(), ParcelOptions::default());

    assert!(
        *indices.cape > 300.0,
        "summer column should carry workable CAPE, got {}",
        indices.cape
    );
    assert!(
        *indices.cin < 100.0,
        "summer cap is shallow, got CIN {}",
        indices.cin
    );
    assert!(indices.lfc_pressure.is_some());
}

/// The pre-storm column must out-energize the ordinary summer day
#[test]
fn test_instability_ordering_across_profiles() {
    let summer = compute_indices(&SoundingProfile::moderate_summer(), ParcelOptions::default());
    let storm = compute_indices(
        &SoundingProfile::high_instability(),
        ParcelOptions::default(),
    );

    assert!(
        *storm.cape > *summer.cape,
        "pre-storm CAPE ({}) must exceed summer CAPE ({})",
        storm.cape,
        summer.cape
    );
    assert!(
        *storm.cape > 800.0,
        "pre-storm column should be strongly unstable, got {}",
        storm.cape
    );
}

/// The virtual-temperature correction moves the integral without breaking
/// the magnitude convention
#[test]
fn test_virtual_temperature_toggle() {
    let profile = SoundingProfile::high_instability();
    let plain = compute_indices(&profile, ParcelOptions::default());
    let corrected = compute_indices(
        &profile,
        ParcelOptions {
            virtual_temperature_correction: true,
        },
    );

    assert_ne!(*plain.cape, *corrected.cape);
    assert!(*corrected.cape > 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// SECTION 4: DEGENERATE-COLUMN POLICY
// ═══════════════════════════════════════════════════════════════════════════

/// A parcel that never saturates leaves every critical level absent and
/// both integrals at zero
#[test]
fn test_no_saturation_means_all_absent() {
    // 50°C of dewpoint depression over a shallow 3-level column
    let profile = SoundingProfile::new(
        vec![1000.0, 950.0, 900.0],
        vec![20.0, 17.0, 14.0],
        vec![-30.0, -32.0, -34.0],
    )
    .unwrap();
    let indices = compute_indices(&profile, ParcelOptions::default());

    assert_eq!(*indices.cape, 0.0);
    assert_eq!(*indices.cin, 0.0);
    assert!(indices.lcl_pressure.is_none());
    assert!(indices.lfc_pressure.is_none());
    assert!(indices.el_pressure.is_none());
    assert_eq!(indices.parcel_profile.len(), 3);
}

/// An isothermal column is extremely stable, never an error
#[test]
fn test_isothermal_column_resolves() {
    let profile = SoundingProfile::new(
        vec![1000.0, 900.0, 800.0, 700.0, 600.0, 500.0],
        vec![15.0; 6],
        vec![5.0; 6],
    )
    .unwrap();
    let indices = compute_indices(&profile, ParcelOptions::default());

    assert_eq!(*indices.cape, 0.0, "isothermal column cannot be buoyant");
    assert!(*indices.cin > 0.0);
}

/// A superadiabatic surface layer makes the parcel buoyant almost at once;
/// the run is still integrated without error
#[test]
fn test_superadiabatic_column_resolves() {
    let profile = SoundingProfile::new(
        vec![1000.0, 850.0, 700.0, 550.0],
        vec![30.0, 10.0, -10.0, -30.0],
        vec![25.0, 8.0, -12.0, -32.0],
    )
    .unwrap();
    let indices = compute_indices(&profile, ParcelOptions::default());

    assert!(*indices.cape > 0.0, "steep lapse rate must yield CAPE");
    assert!(indices.lfc_pressure.is_some());
    assert!(
        *indices.cin < 50.0,
        "superadiabatic column has little inhibition, got {}",
        indices.cin
    );
}

/// A saturated column (fog from the surface up) puts the LCL at the surface
#[test]
fn test_saturated_column_lcl_at_surface() {
    let profile = SoundingProfile::new(
        vec![1000.0, 900.0, 800.0, 700.0],
        vec![10.0, 4.0, -2.0, -8.0],
        vec![10.0, 4.0, -2.0, -8.0],
    )
    .unwrap();
    let indices = compute_indices(&profile, ParcelOptions::default());

    let lcl = *indices.lcl_pressure.expect("saturated surface is its own LCL");
    assert_relative_eq!(lcl, 1000.0, epsilon = 1e-9);
}
