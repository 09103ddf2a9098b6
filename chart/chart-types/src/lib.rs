//! Clinical data model for dental charting.
//!
//! This crate provides the foundational types for periodontal charting:
//!
//! - [`ToothNumber`] - Validated FDI two-digit tooth identity
//! - [`SiteKey`] / [`SurfaceSide`] - The six fixed probing sites per tooth
//! - [`SiteMeasurement`] - Probing depth, gingival margin, and observation flags
//! - [`PeriodontalRecord`] / [`ToothRecord`] - Per-tooth measurement records
//! - [`ChartStore`] - The per-patient map of tooth records
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They carry no interaction logic, no
//! geometry, no rendering. They're the common language between:
//!
//! - Interactive probing views (perio-wave)
//! - Chart overview rendering
//! - Serialization and mock-data generation
//!
//! # Units and Conventions
//!
//! - Probing depth: millimeters, 0-12, with 13 standing in for ">12"
//! - Gingival margin: millimeters relative to the cemento-enamel junction,
//!   stored as 0 or negative (recession depth)
//! - Site triplets are always ordered mesial, central, distal
//!
//! # Example
//!
//! ```
//! use chart_types::{ChartStore, SiteKey, SiteMeasurement, ToothNumber, ToothRecord};
//!
//! let mut chart = ChartStore::new();
//! let number = ToothNumber::new(36)?;
//! chart.insert(ToothRecord::new(number));
//!
//! chart.update_tooth(number, |tooth| {
//!     tooth.periodontal
//!         .set_site(SiteKey::MesioBuccal, SiteMeasurement::new(5, -2));
//! });
//!
//! let site = chart.tooth(number).map(|t| *t.periodontal.site(SiteKey::MesioBuccal));
//! assert_eq!(site.map(|s| s.probing_depth), Some(5));
//! # Ok::<(), chart_types::ChartError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args
)]

mod error;
mod measurement;
mod site;
mod store;
mod tooth;

pub use error::ChartError;
pub use measurement::{PeriodontalRecord, SiteMeasurement, PROBING_DEPTH_MAX};
pub use site::{SiteKey, SurfaceSide};
pub use store::{ChartStore, ToothRecord};
pub use tooth::{Jaw, ToothNumber};

/// Result type for chart data operations.
pub type Result<T> = std::result::Result<T, ChartError>;
