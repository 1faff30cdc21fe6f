//! Convective Risk Core Library
//!
//! Turns a vertical atmospheric sounding (pressure, temperature, dewpoint)
//! into thermodynamic instability indices and independent go/no-go risk
//! decisions for five categories of light aviation operations.
//!
//! ## Analysis pipeline
//!
//! 1. A [`SoundingProfile`] is built (directly, from a Wyoming listing, or
//!    from a CSV table) and validated structurally.
//! 2. The parcel engine lifts the surface parcel and integrates CAPE, CIN,
//!    and the LCL/LFC/EL critical levels.
//! 3. The risk engine evaluates one ordered rule list per stakeholder -
//!    paragliding, hang gliding, hot-air balloon, sailplanes, general
//!    aviation - over the same indices.
//!
//! Both engines are stateless pure computations: independent analyses can
//! run concurrently without coordination.

// Core types and utilities
pub mod core_types;

// Analysis engines
pub mod physics;
pub mod risk;

// I/O adapters and the one-call facade
pub mod analysis;
pub mod loader;

// Re-export core types
pub use core_types::{Celsius, HectoPascals, JoulesPerKilogram, Kelvin};
pub use core_types::{ConvectiveIndices, SoundingProfile, StructuralError};

// Re-export engine entry points
pub use analysis::{analyze, quick_assessment, SoundingAnalysis};
pub use physics::{compute_indices, ParcelOptions};
pub use risk::{
    OperatingWindow, RiskAssessment, RiskAssessor, RiskLevel, RiskThresholds, StakeholderRisk,
};
