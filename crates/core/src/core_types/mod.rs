//! Core types and utilities

pub mod indices;
pub mod sounding;
pub mod units;

pub use indices::ConvectiveIndices;
pub use sounding::{SoundingProfile, StructuralError, MIN_LEVELS};
pub use units::{Celsius, HectoPascals, JoulesPerKilogram, Kelvin};
