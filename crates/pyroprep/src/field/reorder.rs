//! Axis reordering between serialization layouts.
//!
//! Simulation exports and the renderer disagree on which axis varies fastest
//! on disk. The remap is expressed as a closed-form source-coordinate rule per
//! target coordinate rather than an in-place shuffle; values are copied
//! unchanged, only their positions move.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::{GridShape, ScalarField};

/// One of the three axis transpositions of a 3D field.
///
/// Every swap is its own inverse: applying the same swap twice restores the
/// original layout.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSwap {
    /// Exchange axes 0 and 1.
    FirstSecond,
    /// Exchange axes 0 and 2.
    FirstLast,
    /// Exchange axes 1 and 2.
    SecondLast,
}

impl AxisSwap {
    /// Shape produced by applying this swap to `shape`.
    pub fn apply(&self, shape: GridShape) -> GridShape {
        match self {
            AxisSwap::FirstSecond => GridShape::new(shape.ys, shape.xs, shape.zs),
            AxisSwap::FirstLast => GridShape::new(shape.zs, shape.ys, shape.xs),
            AxisSwap::SecondLast => GridShape::new(shape.xs, shape.zs, shape.ys),
        }
    }

    /// Source coordinate holding the value for target coordinate `(i, j, k)`.
    #[inline]
    fn source_coord(&self, i: usize, j: usize, k: usize) -> (usize, usize, usize) {
        match self {
            AxisSwap::FirstSecond => (j, i, k),
            AxisSwap::FirstLast => (k, j, i),
            AxisSwap::SecondLast => (i, k, j),
        }
    }
}

/// Permutes a field into the layout produced by `swap`.
///
/// The output is freshly allocated and holds exactly the input's elements,
/// reindexed; the total element count is preserved by construction.
pub fn swap_axes(field: &ScalarField, swap: AxisSwap) -> ScalarField {
    let src = field.shape;
    let dst = swap.apply(src);

    let mut data = vec![0.0; dst.len()];
    for i in 0..dst.xs {
        for j in 0..dst.ys {
            for k in 0..dst.zs {
                let (si, sj, sk) = swap.source_coord(i, j, k);
                data[dst.flat_index(i, j, k)] = field.data[src.flat_index(si, sj, sk)];
            }
        }
    }

    debug!(?src, ?dst, ?swap, "swapped field axes");
    ScalarField { shape: dst, data }
}

/// Converts a field from the simulation export's axis order into the
/// renderer's expected order, then adds `offset` uniformly to every element.
///
/// The reference exporter serializes with the first and last axes exchanged
/// relative to the renderer, and additionally transposes the two leading axes
/// of the intermediate layout. `offset` shifts the values into render units
/// (pass `0.0` for none) and is applied only after the full remap completes.
pub fn to_render_order(field: &ScalarField, offset: f32) -> ScalarField {
    let swapped = swap_axes(field, AxisSwap::FirstLast);
    let mut out = swap_axes(&swapped, AxisSwap::FirstSecond);
    if offset != 0.0 {
        for v in &mut out.data {
            *v += offset;
        }
    }
    out
}
