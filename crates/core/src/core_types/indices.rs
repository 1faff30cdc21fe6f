//! Convective index results produced by the parcel engine
//!
//! [`ConvectiveIndices`] is an immutable value object: the parcel engine
//! fills it in one pass and the risk engine (or an export collaborator)
//! consumes it without further transformation.

use crate::core_types::units::{Celsius, HectoPascals, JoulesPerKilogram};
use serde::{Deserialize, Serialize};

/// Results of a surface-based parcel analysis
///
/// Critical levels are `Option`al: a level that does not exist for a given
/// profile is absent, never encoded as zero or a sentinel pressure. A fully
/// quiescent column reports `cape = cin = 0` with all three levels absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvectiveIndices {
    /// Convective available potential energy (J/kg), always >= 0
    pub cape: JoulesPerKilogram,
    /// Convective inhibition magnitude (J/kg), always >= 0
    pub cin: JoulesPerKilogram,
    /// Lifting condensation level pressure, absent when the parcel never
    /// saturates within the profile
    pub lcl_pressure: Option<HectoPascals>,
    /// Parcel temperature at the LCL
    pub lcl_temperature: Option<Celsius>,
    /// Level of free convection pressure, absent when buoyancy never turns
    /// positive
    pub lfc_pressure: Option<HectoPascals>,
    /// Environment temperature at the LFC level
    pub lfc_temperature: Option<Celsius>,
    /// Equilibrium level pressure: top of the first positive-buoyancy run
    pub el_pressure: Option<HectoPascals>,
    /// Environment temperature at the EL level
    pub el_temperature: Option<Celsius>,
    /// Surface temperature the parcel was initialized with
    pub surface_temperature: Celsius,
    /// Surface dewpoint the parcel was initialized with
    pub surface_dewpoint: Celsius,
    /// Parcel temperature at every input pressure level, in level order
    pub parcel_profile: Vec<Celsius>,
}

impl ConvectiveIndices {
    /// Whether the column shows any convective signal at all
    ///
    /// False for profiles where the parcel never saturates or never becomes
    /// buoyant; such columns are indistinguishable from a calm atmosphere.
    #[must_use]
    pub fn has_positive_area(&self) -> bool {
        *self.cape > 0.0 && self.lfc_pressure.is_some()
    }

    /// Discovered critical levels in ascent order, for plotting collaborators
    ///
    /// Each entry is (label, pressure, temperature). Absent levels are
    /// skipped, so a capped column yields only the LCL entry.
    #[must_use]
    pub fn key_levels(&self) -> Vec<(&'static str, HectoPascals, Celsius)> {
        let mut levels = Vec::with_capacity(3);
        if let (Some(p), Some(t)) = (self.lcl_pressure, self.lcl_temperature) {
            levels.push(("lcl", p, t));
        }
        if let (Some(p), Some(t)) = (self.lfc_pressure, self.lfc_temperature) {
            levels.push(("lfc", p, t));
        }
        if let (Some(p), Some(t)) = (self.el_pressure, self.el_temperature) {
            levels.push(("el", p, t));
        }
        levels
    }
}
