//! Semantic unit types for type-safe meteorological quantity handling
//!
//! This module provides newtype wrappers for the physical quantities the
//! sounding analysis works in, to prevent accidental mixing of incompatible
//! units (e.g., Celsius with Kelvin, or pressure with specific energy).
//!
//! # Design Philosophy
//! - All quantities use f64: parcel integration accumulates many small
//!   layer contributions and benefits from the extra precision
//! - Implements common traits (`Ord`, `Display`, conversions, serde)
//! - Total ordering via `total_cmp` (NaN sorts greater than all values)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use convective_risk_core::core_types::units::{Celsius, Kelvin};
//!
//! let temp = Celsius::new(25.0);
//! let kelvin: Kelvin = temp.into();
//! assert!((*kelvin - 298.15).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

// ============================================================================
// TEMPERATURE TYPES
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    /// Water freezing point
    pub const FREEZING: Celsius = Celsius(0.0);

    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= -Self::CELSIUS_KELVIN_OFFSET,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= -273.15 (absolute zero).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Celsius(value)
    }

    /// Convert to Kelvin
    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(self.0 + Self::CELSIUS_KELVIN_OFFSET)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Kelvin {
        c.to_kelvin()
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius(v)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

impl PartialEq<f64> for Celsius {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Celsius {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Temperature in Kelvin (absolute scale)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

impl Eq for Kelvin {}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Kelvin {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kelvin {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Kelvin = Kelvin(0.0);

    /// Create a new Kelvin temperature. Asserts value >= absolute zero (0 K).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "Kelvin::new: value is below absolute zero (0 K)"
        );
        Kelvin(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (absolute zero).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Kelvin(value)
    }

    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius::new(self.0 - Celsius::CELSIUS_KELVIN_OFFSET)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Celsius {
        k.to_celsius()
    }
}

impl From<f64> for Kelvin {
    fn from(v: f64) -> Self {
        Kelvin::new(v)
    }
}

impl From<Kelvin> for f64 {
    fn from(k: Kelvin) -> f64 {
        k.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} K", self.0)
    }
}

// ============================================================================
// PRESSURE TYPE
// ============================================================================

/// Atmospheric pressure in hectopascals (millibars)
///
/// Sounding levels, critical levels (LCL/LFC/EL), and the integration grid
/// are all expressed on this scale. Standard sea-level pressure is
/// 1013.25 hPa; the usable sounding range is roughly 1050 down to 10 hPa.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HectoPascals(f64);

impl Eq for HectoPascals {}

impl PartialOrd for HectoPascals {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HectoPascals {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for HectoPascals {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl HectoPascals {
    /// Standard sea-level pressure (ICAO standard atmosphere)
    pub const STANDARD_SEA_LEVEL: HectoPascals = HectoPascals(1013.25);

    /// Create a new pressure. Asserts value > 0 (vacuum is not a sounding level).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value > 0.0,
            "HectoPascals::new: non-positive pressure is invalid"
        );
        HectoPascals(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value > 0.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        HectoPascals(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for HectoPascals {
    fn from(v: f64) -> Self {
        HectoPascals(v)
    }
}

impl From<HectoPascals> for f64 {
    fn from(p: HectoPascals) -> f64 {
        p.0
    }
}

impl PartialEq<f64> for HectoPascals {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for HectoPascals {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for HectoPascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} hPa", self.0)
    }
}

// ============================================================================
// SPECIFIC ENERGY TYPE
// ============================================================================

/// Specific energy in joules per kilogram
///
/// CAPE and CIN are both reported on this scale. Both are magnitudes here:
/// CIN carries the barrier-strength convention (non-negative), independent
/// of the sign the integral produces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct JoulesPerKilogram(f64);

impl Eq for JoulesPerKilogram {}

impl PartialOrd for JoulesPerKilogram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JoulesPerKilogram {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for JoulesPerKilogram {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl JoulesPerKilogram {
    /// Zero energy (no buoyant area)
    pub const ZERO: JoulesPerKilogram = JoulesPerKilogram(0.0);

    /// Create a new specific energy. Asserts value >= 0 (magnitude convention).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "JoulesPerKilogram::new: negative energy magnitude is invalid"
        );
        JoulesPerKilogram(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (magnitude convention).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        JoulesPerKilogram(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for JoulesPerKilogram {
    fn from(v: f64) -> Self {
        JoulesPerKilogram(v)
    }
}

impl From<JoulesPerKilogram> for f64 {
    fn from(e: JoulesPerKilogram) -> f64 {
        e.0
    }
}

impl Add for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn add(self, rhs: JoulesPerKilogram) -> JoulesPerKilogram {
        JoulesPerKilogram(self.0 + rhs.0)
    }
}

impl Sub for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn sub(self, rhs: JoulesPerKilogram) -> JoulesPerKilogram {
        // Clamped at 0 to preserve the magnitude convention
        JoulesPerKilogram((self.0 - rhs.0).max(0.0))
    }
}

impl PartialEq<f64> for JoulesPerKilogram {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for JoulesPerKilogram {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for JoulesPerKilogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} J/kg", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_kelvin_round_trip() {
        let c = Celsius::new(25.0);
        let k = c.to_kelvin();
        assert!((*k - 298.15).abs() < 1e-9);
        assert_eq!(k.to_celsius(), c);
    }

    #[test]
    fn test_celsius_ordering() {
        let cold = Celsius::new(-40.0);
        let warm = Celsius::new(30.0);
        assert!(cold < warm);
        assert_eq!(cold.min(warm), cold);
    }

    #[test]
    #[should_panic(expected = "below absolute zero")]
    fn test_celsius_below_absolute_zero_panics() {
        let _ = Celsius::new(-300.0);
    }

    #[test]
    #[should_panic(expected = "non-positive pressure")]
    fn test_zero_pressure_panics() {
        let _ = HectoPascals::new(0.0);
    }

    #[test]
    fn test_energy_magnitude_subtraction_clamps() {
        let small = JoulesPerKilogram::new(100.0);
        let large = JoulesPerKilogram::new(400.0);
        assert_eq!(small - large, JoulesPerKilogram::ZERO);
        assert_eq!(large - small, JoulesPerKilogram::new(300.0));
    }

    #[test]
    fn test_pressure_display() {
        let p = HectoPascals::new(1013.25);
        assert_eq!(format!("{p}"), "1013.2 hPa");
    }
}
