//! Parcel thermodynamics engine
//!
//! [`thermo`] holds the moist-thermodynamic primitives; [`parcel`] composes
//! them into the surface-based ascent and the CAPE/CIN integration.
//!
//! # Scientific References
//!
//! - Bolton, D. (1980). "The computation of equivalent potential
//!   temperature." Monthly Weather Review, 108(7), 1046-1053.
//! - Doswell, C.A. and Rasmussen, E.N. (1994). "The effect of neglecting the
//!   virtual temperature correction on CAPE calculations." Weather and
//!   Forecasting, 9(4), 625-629.

pub mod parcel;
pub mod thermo;

pub use parcel::{compute_indices, ParcelOptions};
