//! Fitzpatrick (1999) Milky-Way extinction curve.
//!
//! ## Purpose
//!
//! This module provides the F99 Milky-Way-type curve, parameterized by the
//! total-to-selective extinction ratio Rv. It is both a standalone model and
//! the "component A" of the G16 mixture.
//!
//! ## Key concepts
//!
//! * **Rv dependence**: The FM90 linear background (C1, C2) and the optical
//!   anchor ordinates are analytic functions of Rv; the bump and far-UV
//!   coefficients are fixed.
//! * **Anchor units**: Fitzpatrick publishes the optical/NIR anchors in
//!   `A(x)/E(B-V)`; they are divided by Rv to obtain `A(x)/A(V)`.
//!
//! ## References
//!
//! * Fitzpatrick, E. L. (1999), PASP, 111, 63.

// External dependencies
use num_traits::Float;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::model::ExtinctionModel;
use crate::engine::validator::Validator;
use crate::math::cast;
use crate::math::fm90::Fm90;
use crate::models::curve::FitzpatrickCurve;
use crate::primitives::errors::ExtinctionResult;

// ============================================================================
// Published Calibration
// ============================================================================

/// Valid wavenumber domain (1/micron).
pub(crate) const X_RANGE: (f64, f64) = (0.3, 10.0);

/// Valid interval for the Rv parameter.
pub(crate) const RV_RANGE: (f64, f64) = (2.0, 6.0);

/// Default Rv: the Milky-Way diffuse-ISM average.
pub(crate) const RV_DEFAULT: f64 = 3.1;

/// Optical/NIR anchor wavelengths in angstrom (Fitzpatrick 1999, Table 4).
const OPTNIR_ANCHORS_ANGSTROM: [f64; 6] = [26500.0, 12200.0, 6000.0, 5470.0, 4670.0, 4110.0];

// ============================================================================
// F99 Builder
// ============================================================================

/// Builder for the [`F99`] model.
#[derive(Debug, Clone)]
pub struct F99Builder<T> {
    rv: T,
}

impl<T: Float> Default for F99Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> F99Builder<T> {
    /// Create a builder with the default Rv of 3.1.
    pub fn new() -> Self {
        Self {
            rv: cast(RV_DEFAULT),
        }
    }

    /// Set the total-to-selective extinction ratio Rv (valid in [2.0, 6.0]).
    pub fn rv(mut self, rv: T) -> Self {
        self.rv = rv;
        self
    }

    /// Validate the parameter and build the immutable model.
    pub fn build(self) -> ExtinctionResult<F99<T>> {
        Validator::validate_parameter("Rv", self.rv, RV_RANGE)?;
        Ok(F99 {
            rv: self.rv,
            curve: build_curve(self.rv),
        })
    }
}

// ============================================================================
// F99 Model
// ============================================================================

/// The Fitzpatrick (1999) Milky-Way extinction curve at a fixed Rv.
#[derive(Debug, Clone, PartialEq)]
pub struct F99<T> {
    rv: T,
    curve: FitzpatrickCurve<T>,
}

impl<T: Float> F99<T> {
    /// Start building an F99 model.
    pub fn builder() -> F99Builder<T> {
        F99Builder::new()
    }

    /// The Rv value this model was built with.
    pub fn rv(&self) -> T {
        self.rv
    }
}

impl<T: Float> ExtinctionModel<T> for F99<T> {
    fn name(&self) -> &'static str {
        "F99"
    }

    fn x_range(&self) -> (f64, f64) {
        X_RANGE
    }

    fn evaluate_normalized(&self, x: &[T]) -> Vec<T> {
        self.curve.axav_array(x)
    }
}

// ============================================================================
// Curve Assembly
// ============================================================================

/// Assemble the F99 piecewise curve for a given Rv.
///
/// Shared with the G16 mixture, which embeds an F99 component at RvA.
pub(crate) fn build_curve<T: Float>(rv: T) -> FitzpatrickCurve<T> {
    // FM90 UV coefficients: bump and far-UV terms are fixed, the linear
    // background follows Rv (Fitzpatrick 1999, eq. 4).
    let c2 = cast::<T>(-0.824) + cast::<T>(4.717) / rv;
    let c1 = cast::<T>(2.030) - cast::<T>(3.007) * c2;
    let fm90 = Fm90 {
        c1,
        c2,
        c3: cast(3.23),
        c4: cast(0.41),
        x0: cast(4.596),
        gamma: cast(0.99),
    };

    let optnir_x: Vec<f64> = OPTNIR_ANCHORS_ANGSTROM
        .iter()
        .map(|&w| 1.0e4 / w)
        .collect();

    // Anchor ordinates in A(x)/E(B-V): two NIR points scaling linearly with
    // Rv, four optical points from Fitzpatrick's Rv polynomials. The final
    // optical anchor keeps the +1.208 sign that reproduces Table 3 (the
    // -1.208 printed in Table 4 does not).
    let rv31 = rv / cast(3.1);
    let axebv: [T; 6] = [
        cast::<T>(0.265) * rv31,
        cast::<T>(0.829) * rv31,
        cast::<T>(-0.426) + cast::<T>(1.0044) * rv,
        cast::<T>(-0.050) + cast::<T>(1.0016) * rv,
        cast::<T>(0.701) + cast::<T>(1.0016) * rv,
        cast::<T>(1.208) + cast::<T>(1.0032) * rv - cast::<T>(0.00033) * rv * rv,
    ];
    let axav: Vec<T> = axebv.iter().map(|&v| v / rv).collect();

    FitzpatrickCurve::assemble(fm90, rv, &optnir_x, &axav)
}
