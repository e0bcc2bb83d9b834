//! Gordon et al. (2003) SMC Bar average extinction curve.
//!
//! ## Purpose
//!
//! This module provides the fixed-shape SMC Bar average curve, the
//! "component B" of the G16 mixture. It has no free parameters; the shape is
//! the published average of the SMC Bar sightlines.
//!
//! ## Key concepts
//!
//! * **Average curve**: Alongside the analytic curve, the calibration
//!   publishes the averaged observed data themselves
//!   ([`SMCBAR_OBSDATA_X`] / [`SMCBAR_OBSDATA_AXAV`]); the analytic curve
//!   reproduces them within [`SMCBAR_OBSDATA_TOLERANCE`].
//! * **Anchor ordinates**: published directly in `A(x)/A(V)`, with the
//!   2.198 and 1.25 micron values adjusted for smooth interpolation as noted
//!   in Gordon et al. (2016).
//!
//! ## References
//!
//! * Gordon, K. D., et al. (2003), ApJ, 594, 279.

// External dependencies
use num_traits::Float;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::model::ExtinctionModel;
use crate::math::cast;
use crate::math::fm90::Fm90;
use crate::models::curve::FitzpatrickCurve;

// ============================================================================
// Published Calibration
// ============================================================================

/// Valid wavenumber domain (1/micron).
pub(crate) const X_RANGE: (f64, f64) = (0.3, 10.0);

/// Effective Rv of the SMC Bar average.
const RV: f64 = 2.74;

/// Optical/NIR anchor wavelengths in micron.
const OPTNIR_ANCHORS_MICRON: [f64; 8] = [2.198, 1.65, 1.25, 0.81, 0.65, 0.55, 0.44, 0.37];

/// Optical/NIR anchor ordinates in `A(x)/A(V)`.
const OPTNIR_AXAV: [f64; 8] = [0.11, 0.169, 0.25, 0.567, 0.801, 1.00, 1.374, 1.672];

/// Averaged observed wavenumbers of the SMC Bar sample (1/micron).
pub const SMCBAR_OBSDATA_X: [f64; 30] = [
    0.455, 0.606, 0.800, 1.235, 1.538, 1.818, 2.273, 2.703, 3.375, 3.625, 3.875, 4.125, 4.375,
    4.625, 4.875, 5.125, 5.375, 5.625, 5.875, 6.125, 6.375, 6.625, 6.875, 7.125, 7.375, 7.625,
    7.875, 8.125, 8.375, 8.625,
];

/// Averaged observed `A(x)/A(V)` of the SMC Bar sample.
pub const SMCBAR_OBSDATA_AXAV: [f64; 30] = [
    0.110, 0.169, 0.250, 0.567, 0.801, 1.000, 1.374, 1.672, 2.000, 2.220, 2.428, 2.661, 2.947,
    3.161, 3.293, 3.489, 3.637, 3.866, 4.013, 4.243, 4.472, 4.776, 5.000, 5.272, 5.575, 5.795,
    6.074, 6.297, 6.436, 6.992,
];

/// Relative tolerance within which the analytic curve reproduces the
/// averaged observed data.
pub const SMCBAR_OBSDATA_TOLERANCE: f64 = 6e-2;

// ============================================================================
// G03 SMC Bar Model
// ============================================================================

/// The fixed-shape SMC Bar average extinction curve.
///
/// Parameter-free, so construction is infallible and takes no builder.
#[derive(Debug, Clone, PartialEq)]
pub struct G03SmcBar<T> {
    curve: FitzpatrickCurve<T>,
}

impl<T: Float> Default for G03SmcBar<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> G03SmcBar<T> {
    /// Build the SMC Bar average curve.
    pub fn new() -> Self {
        let fm90 = Fm90 {
            c1: cast(-4.959),
            c2: cast(2.264),
            c3: cast(0.389),
            c4: cast(0.461),
            x0: cast(4.6),
            gamma: cast(1.0),
        };

        let optnir_x: Vec<f64> = OPTNIR_ANCHORS_MICRON.iter().map(|&w| 1.0 / w).collect();
        let optnir_y: Vec<T> = OPTNIR_AXAV.iter().map(|&v| cast(v)).collect();

        Self {
            curve: FitzpatrickCurve::assemble(fm90, cast(RV), &optnir_x, &optnir_y),
        }
    }
}

impl<T: Float> ExtinctionModel<T> for G03SmcBar<T> {
    fn name(&self) -> &'static str {
        "G03_SMCBar"
    }

    fn x_range(&self) -> (f64, f64) {
        X_RANGE
    }

    fn evaluate_normalized(&self, x: &[T]) -> Vec<T> {
        self.curve.axav_array(x)
    }
}
