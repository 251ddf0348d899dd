//! Fire/smoke channel splitting via elementwise threshold policies.
//!
//! A source temperature field carries both combustion and smoke information;
//! the renderer wants them as separate channels. Each channel is cut out of
//! the source by a [`ThresholdPolicy`], and the fire/smoke policies of a
//! [`PolicyPair`] cover non-overlapping value bands, so at most one channel is
//! nonzero at any element.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::ScalarField;

/// Fire cutoff for fields still in simulation temperature units.
pub const RAW_FIRE_CUTOFF: f32 = 950.0;
/// Smoke band floor for fields still in simulation temperature units.
pub const RAW_SMOKE_FLOOR: f32 = 674.0;
/// Fire cutoff for fields in the derived post-processed scale.
pub const DERIVED_FIRE_CUTOFF: f32 = 2.6;
/// Smoke band floor for fields in the derived post-processed scale.
pub const DERIVED_SMOKE_FLOOR: f32 = 1.0;
/// Intensity divisor for fields in the derived post-processed scale.
pub const DERIVED_SCALE_DIVISOR: f32 = 30.0;

/// An elementwise threshold rule: values inside the rule's band pass through
/// divided by `divisor`, everything else becomes `0.0`.
///
/// NaN and infinite inputs are not special-cased; they fall through ordinary
/// float comparison and division rules.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThresholdPolicy {
    /// Pass `v` where `v >= cutoff`.
    AboveInclusive { cutoff: f32, divisor: f32 },
    /// Pass `v` where `v > cutoff`.
    AboveExclusive { cutoff: f32, divisor: f32 },
    /// Pass `v` where `lo <= v < hi`.
    Band { lo: f32, hi: f32, divisor: f32 },
}

impl ThresholdPolicy {
    /// Applies the rule to a single scalar.
    #[inline]
    pub fn apply(&self, v: f32) -> f32 {
        match *self {
            ThresholdPolicy::AboveInclusive { cutoff, divisor } => {
                if v >= cutoff {
                    v / divisor
                } else {
                    0.0
                }
            }
            ThresholdPolicy::AboveExclusive { cutoff, divisor } => {
                if v > cutoff {
                    v / divisor
                } else {
                    0.0
                }
            }
            ThresholdPolicy::Band { lo, hi, divisor } => {
                if v >= lo && v < hi {
                    v / divisor
                } else {
                    0.0
                }
            }
        }
    }
}

/// Which upstream process produced a field, selecting the matching preset.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Values are still in the simulation's combustion-temperature-like unit.
    RawSimulation,
    /// Values are in the smaller post-processed unit of a derived field.
    DerivedScale,
}

/// A fire policy and a smoke policy applied together to one source field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolicyPair {
    pub fire: ThresholdPolicy,
    pub smoke: ThresholdPolicy,
}

impl PolicyPair {
    /// Preset matching the given provenance.
    pub fn for_provenance(provenance: Provenance) -> Self {
        match provenance {
            Provenance::RawSimulation => Self::raw_simulation(),
            Provenance::DerivedScale => Self::derived_scale(),
        }
    }

    /// Preset for raw simulation temperatures: fire at and above 950, smoke
    /// in [674, 950), values passed through unscaled.
    pub fn raw_simulation() -> Self {
        Self {
            fire: ThresholdPolicy::AboveInclusive {
                cutoff: RAW_FIRE_CUTOFF,
                divisor: 1.0,
            },
            smoke: ThresholdPolicy::Band {
                lo: RAW_SMOKE_FLOOR,
                hi: RAW_FIRE_CUTOFF,
                divisor: 1.0,
            },
        }
    }

    /// Preset for derived-scale fields: fire above 2.6, smoke in [1.0, 2.6),
    /// both divided down by 30.
    pub fn derived_scale() -> Self {
        Self {
            fire: ThresholdPolicy::AboveExclusive {
                cutoff: DERIVED_FIRE_CUTOFF,
                divisor: DERIVED_SCALE_DIVISOR,
            },
            smoke: ThresholdPolicy::Band {
                lo: DERIVED_SMOKE_FLOOR,
                hi: DERIVED_FIRE_CUTOFF,
                divisor: DERIVED_SCALE_DIVISOR,
            },
        }
    }
}

/// Splits a source field into `(fire, smoke)` channel fields of the same
/// shape.
///
/// Each output element depends only on the corresponding source element; the
/// input is left untouched.
pub fn split(field: &ScalarField, pair: &PolicyPair) -> (ScalarField, ScalarField) {
    let fire = ScalarField {
        shape: field.shape,
        data: field.data.iter().map(|v| pair.fire.apply(*v)).collect(),
    };
    let smoke = ScalarField {
        shape: field.shape,
        data: field.data.iter().map(|v| pair.smoke.apply(*v)).collect(),
    };
    (fire, smoke)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GridShape;

    fn mixed_field() -> ScalarField {
        ScalarField::from_vec(
            GridShape::new(2, 2, 2),
            vec![0.0, 500.0, 674.0, 800.0, 949.9, 950.0, 1200.0, 3000.0],
        )
        .unwrap()
    }

    #[test]
    fn raw_preset_assigns_shared_cutoff_to_fire() {
        let pair = PolicyPair::raw_simulation();
        assert_eq!(pair.fire.apply(950.0), 950.0);
        assert_eq!(pair.smoke.apply(950.0), 0.0);
        assert_eq!(pair.fire.apply(949.9), 0.0);
        assert_eq!(pair.smoke.apply(949.9), 949.9);
        assert_eq!(pair.smoke.apply(674.0), 674.0);
        assert_eq!(pair.smoke.apply(673.9), 0.0);
    }

    #[test]
    fn channels_are_mutually_exclusive() {
        let field = mixed_field();
        for pair in [PolicyPair::raw_simulation(), PolicyPair::derived_scale()] {
            let (fire, smoke) = split(&field, &pair);
            for (f, s) in fire.data.iter().zip(smoke.data.iter()) {
                assert!(*f == 0.0 || *s == 0.0);
            }
        }
    }

    #[test]
    fn raw_split_of_small_values_is_all_zero() {
        let field = ScalarField::from_vec(
            GridShape::new(2, 2, 2),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        )
        .unwrap();
        let (fire, smoke) = split(&field, &PolicyPair::raw_simulation());
        assert_eq!(fire.shape, GridShape::new(2, 2, 2));
        assert_eq!(smoke.shape, GridShape::new(2, 2, 2));
        assert!(fire.data.iter().all(|v| *v == 0.0));
        assert!(smoke.data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn derived_preset_rescales_passed_values() {
        let pair = PolicyPair::derived_scale();
        assert!((pair.fire.apply(5.0) - 5.0 / 30.0).abs() < 1e-6);
        assert_eq!(pair.smoke.apply(5.0), 0.0);
        assert_eq!(pair.fire.apply(1.5), 0.0);
        assert!((pair.smoke.apply(1.5) - 0.05).abs() < 1e-6);
        // Exactly 2.6 falls in neither band.
        assert_eq!(pair.fire.apply(DERIVED_FIRE_CUTOFF), 0.0);
        assert_eq!(pair.smoke.apply(DERIVED_FIRE_CUTOFF), 0.0);
    }

    #[test]
    fn nan_and_inf_follow_float_comparison_rules() {
        let pair = PolicyPair::derived_scale();
        // NaN compares false against every cutoff, so both channels drop it.
        assert_eq!(pair.fire.apply(f32::NAN), 0.0);
        assert_eq!(pair.smoke.apply(f32::NAN), 0.0);
        // Infinity passes the open-ended fire rule untouched.
        assert_eq!(pair.fire.apply(f32::INFINITY), f32::INFINITY);
    }

    #[test]
    fn split_leaves_source_untouched() {
        let field = mixed_field();
        let before = field.clone();
        let _ = split(&field, &PolicyPair::raw_simulation());
        assert_eq!(field, before);
    }
}
