//! Dense 3D scalar fields and the transforms that prepare them for rendering.
//!
//! This module defines [`GridShape`] and [`ScalarField`], the shared data
//! model of the pipeline. Transforms never mutate their input; each consumes a
//! field by reference and allocates a fresh one.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod normalize;
pub mod reorder;
pub mod split;

pub use normalize::normalize;
pub use reorder::{swap_axes, to_render_order, AxisSwap};
pub use split::{split, PolicyPair, Provenance, ThresholdPolicy};

/// Extents of the three serialized axes of a field.
///
/// Axis 0 is the slowest-varying axis, axis 2 the fastest: the flat index of
/// coordinate `(i, j, k)` is `i * ys * zs + j * zs + k`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Extent along axis 0 (slowest).
    pub xs: usize,
    /// Extent along axis 1.
    pub ys: usize,
    /// Extent along axis 2 (fastest).
    pub zs: usize,
}

impl GridShape {
    /// Creates a shape from the three axis extents.
    pub fn new(xs: usize, ys: usize, zs: usize) -> Self {
        Self { xs, ys, zs }
    }

    /// Total number of elements a field of this shape holds.
    pub fn len(&self) -> usize {
        self.xs * self.ys * self.zs
    }

    /// Returns `true` if any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of coordinate `(i, j, k)`.
    #[inline]
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> usize {
        i * self.ys * self.zs + j * self.zs + k
    }
}

/// A dense grid of single-precision scalars with a known shape.
///
/// `data.len() == shape.len()` holds for every constructed field; use
/// [`ScalarField::from_vec`] to adopt a loader-supplied buffer with that
/// invariant checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    pub shape: GridShape,
    pub data: Vec<f32>,
}

impl ScalarField {
    /// Adopts a flat buffer under the given shape.
    ///
    /// Fails with [`Error::ShapeMismatch`] if the buffer length disagrees with
    /// the shape's element count.
    pub fn from_vec(shape: GridShape, data: Vec<f32>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(Error::ShapeMismatch {
                expected: shape.len(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a field of the given shape with every element set to `value`.
    pub fn filled(shape: GridShape, value: f32) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the field holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at coordinate `(i, j, k)`, or `0.0` if out of bounds.
    pub fn get(&self, i: usize, j: usize, k: usize) -> f32 {
        if i >= self.shape.xs || j >= self.shape.ys || k >= self.shape.zs {
            return 0.0;
        }
        self.data[self.shape.flat_index(i, j, k)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_is_row_major_with_axis_two_fastest() {
        let shape = GridShape::new(2, 3, 4);
        assert_eq!(shape.flat_index(0, 0, 0), 0);
        assert_eq!(shape.flat_index(0, 0, 3), 3);
        assert_eq!(shape.flat_index(0, 1, 0), 4);
        assert_eq!(shape.flat_index(1, 0, 0), 12);
        assert_eq!(shape.flat_index(1, 2, 3), 23);
    }

    #[test]
    fn from_vec_enforces_element_count() {
        let shape = GridShape::new(2, 2, 2);
        let err = ScalarField::from_vec(shape, vec![0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::ShapeMismatch {
                expected: 8,
                actual: 7
            }
        ));

        let field = ScalarField::from_vec(shape, vec![0.0; 8]).unwrap();
        assert_eq!(field.len(), field.shape.len());
    }

    #[test]
    fn filled_covers_whole_shape() {
        let field = ScalarField::filled(GridShape::new(3, 1, 2), 1.5);
        assert_eq!(field.len(), 6);
        assert!(field.data.iter().all(|v| *v == 1.5));
    }

    #[test]
    fn get_returns_zero_outside_bounds() {
        let field = ScalarField::filled(GridShape::new(2, 2, 2), 9.0);
        assert_eq!(field.get(1, 1, 1), 9.0);
        assert_eq!(field.get(2, 0, 0), 0.0);
        assert_eq!(field.get(0, 0, 5), 0.0);
    }
}
