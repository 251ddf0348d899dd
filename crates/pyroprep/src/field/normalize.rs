//! Linear range normalization of field values.
use tracing::debug;

use crate::error::{Error, Result};
use crate::field::ScalarField;

/// Rescales a field so its minimum maps to `0.0` and its maximum to `scale`.
///
/// Runs two passes: a min/max reduction, then the rescale. A field whose
/// observed minimum and maximum coincide has no range to stretch and fails
/// with [`Error::DegenerateRange`] instead of dividing by zero. NaN elements
/// are ignored by the reduction and propagate through the rescale.
pub fn normalize(field: &ScalarField, scale: f32) -> Result<ScalarField> {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for v in &field.data {
        lo = lo.min(*v);
        hi = hi.max(*v);
    }

    if hi <= lo {
        return Err(Error::DegenerateRange { lo, hi });
    }

    debug!(lo, hi, scale, "normalizing field range");
    let span = hi - lo;
    let data = field.data.iter().map(|v| (v - lo) / span * scale).collect();
    Ok(ScalarField {
        shape: field.shape,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GridShape;

    #[test]
    fn output_spans_zero_to_scale() {
        let field = ScalarField::from_vec(
            GridShape::new(1, 2, 3),
            vec![674.0, 700.0, 750.0, 800.0, 900.0, 949.0],
        )
        .unwrap();
        let out = normalize(&field, 100.0).unwrap();
        assert_eq!(out.shape, field.shape);

        let min = out.data.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = out.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min, 0.0);
        assert!((max - 100.0).abs() < 1e-3);
    }

    #[test]
    fn rescale_is_linear_between_extremes() {
        let field =
            ScalarField::from_vec(GridShape::new(1, 1, 3), vec![10.0, 15.0, 20.0]).unwrap();
        let out = normalize(&field, 1.0).unwrap();
        assert_eq!(out.data, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn constant_field_is_degenerate() {
        let field = ScalarField::filled(GridShape::new(2, 2, 2), 42.0);
        let err = normalize(&field, 100.0).unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { lo, hi } if lo == 42.0 && hi == 42.0));
    }

    #[test]
    fn nan_elements_propagate_without_poisoning_the_range() {
        let field =
            ScalarField::from_vec(GridShape::new(1, 1, 3), vec![0.0, f32::NAN, 2.0]).unwrap();
        let out = normalize(&field, 1.0).unwrap();
        assert_eq!(out.data[0], 0.0);
        assert!(out.data[1].is_nan());
        assert_eq!(out.data[2], 1.0);
    }

    #[test]
    fn input_field_is_untouched() {
        let field = ScalarField::from_vec(GridShape::new(1, 1, 2), vec![1.0, 3.0]).unwrap();
        let before = field.clone();
        let _ = normalize(&field, 10.0).unwrap();
        assert_eq!(field, before);
    }
}
