//! Shared Fitzpatrick-method piecewise extinction curve.
//!
//! ## Purpose
//!
//! This module assembles the piecewise curve construction common to every
//! component model in the crate (the "F99 method"): an analytic FM90
//! function in the ultraviolet, and an interpolating cubic spline through
//! published anchor knots in the optical/NIR.
//!
//! ## Key concepts
//!
//! * **UV cutoff**: 1e4/2700 ≈ 3.7037 1/micron. At and above it the curve
//!   is the FM90 function converted to `A(x)/A(V)`; below it, the spline.
//! * **Spline knots**: an implicit zero-extinction anchor at x = 0, the
//!   model's optical/NIR anchors, then two UV anchors at 1e4/2700 and
//!   1e4/2600 whose ordinates come from the FM90 function itself, so the
//!   two segments agree at the cutoff by construction.
//! * **Precomputation**: The spline is solved once when the owning model is
//!   built; evaluation never rebuilds it.
//!
//! ## Invariants
//!
//! * Optical/NIR anchor abscissae are strictly increasing and lie strictly
//!   between 0 and the UV cutoff.
//! * `axav` is continuous at the cutoff within interpolation round-off.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::cast;
use crate::math::fm90::Fm90;
use crate::math::spline::CubicSpline;

// ============================================================================
// Segment Boundaries
// ============================================================================

/// Wavenumber at and above which the FM90 parameterization is used
/// (1/micron). Corresponds to 2700 angstrom.
pub const X_CUT_UV: f64 = 1.0e4 / 2700.0;

/// UV anchor knots feeding the optical/NIR spline (2700 and 2600 angstrom).
const X_ANCHOR_UV: [f64; 2] = [1.0e4 / 2700.0, 1.0e4 / 2600.0];

// ============================================================================
// Piecewise Curve
// ============================================================================

/// A fully assembled piecewise extinction curve in `A(x)/A(V)` units.
#[derive(Debug, Clone, PartialEq)]
pub struct FitzpatrickCurve<T> {
    fm90: Fm90<T>,
    rv: T,
    spline: CubicSpline<T>,
}

impl<T: Float> FitzpatrickCurve<T> {
    /// Assemble a curve from its UV coefficients and optical/NIR anchors.
    ///
    /// `optnir_x` are anchor wavenumbers in 1/micron, strictly increasing;
    /// `optnir_y` are the matching `A(x)/A(V)` ordinates.
    pub fn assemble(fm90: Fm90<T>, rv: T, optnir_x: &[f64], optnir_y: &[T]) -> Self {
        debug_assert_eq!(optnir_x.len(), optnir_y.len());

        let n = optnir_x.len() + 3;
        let mut knots_x: Vec<T> = Vec::with_capacity(n);
        let mut knots_y: Vec<T> = Vec::with_capacity(n);

        // Zero extinction at infinite wavelength.
        knots_x.push(T::zero());
        knots_y.push(T::zero());

        for (&xk, &yk) in optnir_x.iter().zip(optnir_y) {
            knots_x.push(cast(xk));
            knots_y.push(yk);
        }

        // Tie the spline to the FM90 function at the UV end.
        for &xa in &X_ANCHOR_UV {
            let xa_t = cast::<T>(xa);
            knots_x.push(xa_t);
            knots_y.push(axav_uv(&fm90, rv, xa_t));
        }

        let spline = CubicSpline::new(knots_x, knots_y);
        Self { fm90, rv, spline }
    }

    /// Evaluate `A(x)/A(V)` at a normalized wavenumber (1/micron).
    pub fn axav(&self, x: T) -> T {
        if x >= cast(X_CUT_UV) {
            axav_uv(&self.fm90, self.rv, x)
        } else {
            self.spline.eval_one(x)
        }
    }

    /// Evaluate `A(x)/A(V)` over a normalized wavenumber array.
    pub fn axav_array(&self, x: &[T]) -> Vec<T> {
        x.iter().map(|&xi| self.axav(xi)).collect()
    }
}

/// Convert the FM90 color-excess form to `A(x)/A(V)`.
#[inline]
fn axav_uv<T: Float>(fm90: &Fm90<T>, rv: T, x: T) -> T {
    fm90.exv_ebv(x) / rv + T::one()
}
