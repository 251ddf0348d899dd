#![forbid(unsafe_code)]
//! pyroprep: Preprocessing of volumetric simulation fields for offline fire/smoke rendering.
//!
//! Modules:
//! - field: dense 3D scalar fields and the pure transforms over them
//!   (axis reordering, fire/smoke channel splitting, range normalization)
//! - ramp: piecewise-linear color ramps baked into fixed-size lookup tables
//!
//! Loading fields from disk and persisting the derived channels is left to the
//! caller; every transform consumes a field by reference and returns a freshly
//! allocated one.
pub mod error;
pub mod field;
pub mod ramp;

/// Convenient re-exports for common types. Import with `use pyroprep::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::normalize::normalize;
    pub use crate::field::reorder::{swap_axes, to_render_order, AxisSwap};
    pub use crate::field::split::{split, PolicyPair, Provenance, ThresholdPolicy};
    pub use crate::field::{GridShape, ScalarField};
    pub use crate::ramp::{ColorRamp, ColorTable, ControlPoint};
}
