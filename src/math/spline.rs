//! Interpolating cubic spline in second-derivative form.
//!
//! ## Purpose
//!
//! This module provides the cubic spline used for the optical/NIR segment of
//! every extinction curve in this crate. The published calibrations define
//! that segment only through a handful of anchor knots; the spline supplies
//! the smooth curve between them.
//!
//! ## Design notes
//!
//! * **Two phases**: Second derivatives at the knots are solved once at
//!   construction (tridiagonal back-substitution); evaluation is then a
//!   binary search plus a closed-form cubic per query point.
//! * **Natural boundary**: Zero second derivative at both end knots. The
//!   regression points of the published calibrations sit on knots, where
//!   every interpolating spline flavor agrees exactly.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Knot x values are strictly increasing; at least three knots.
//! * The spline reproduces knot ordinates exactly.
//! * Evaluation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not apply any out-of-range policy beyond the knot
//!   span; callers must dispatch to the analytic UV form above the last
//!   knots.
//! * This module does not smooth or fit; it interpolates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::cast;

// ============================================================================
// Cubic Spline
// ============================================================================

/// An interpolating cubic spline with natural boundary conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<T> {
    /// Knot abscissae, strictly increasing.
    x: Vec<T>,
    /// Knot ordinates.
    y: Vec<T>,
    /// Second derivatives of the spline at the knots.
    d2: Vec<T>,
}

impl<T: Float> CubicSpline<T> {
    /// Build a spline through the given knots.
    ///
    /// `x` must be strictly increasing and hold at least three knots.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        debug_assert!(x.len() >= 3);
        debug_assert!(x.windows(2).all(|w| w[0] < w[1]));

        let d2 = second_derivatives(&x, &y);
        Self { x, y, d2 }
    }

    /// The knot abscissae.
    pub fn knots_x(&self) -> &[T] {
        &self.x
    }

    /// The knot ordinates.
    pub fn knots_y(&self) -> &[T] {
        &self.y
    }

    /// Evaluate the spline at a single point.
    ///
    /// Points outside the knot span are evaluated on the nearest end segment.
    pub fn eval_one(&self, xv: T) -> T {
        let n = self.x.len();

        // Bracket indices via binary search.
        let hi = match self.x.partition_point(|&v| v < xv) {
            i if i >= n => n - 1,
            0 => 1,
            i => i,
        };
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - xv) / h;
        let b = (xv - self.x[lo]) / h;

        let six = cast::<T>(6.0);
        a * self.y[lo]
            + b * self.y[hi]
            + (h * h / six) * ((a * a * a - a) * self.d2[lo] + (b * b * b - b) * self.d2[hi])
    }

    /// Evaluate the spline at each point of an array.
    pub fn eval(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&xv| self.eval_one(xv)).collect()
    }
}

// ============================================================================
// Second Derivatives
// ============================================================================

/// Solve for the spline's second derivatives at the knots.
///
/// Standard tridiagonal forward sweep plus back substitution, with natural
/// boundary conditions (`d2 = 0` at both ends).
fn second_derivatives<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    let two = cast::<T>(2.0);
    let six = cast::<T>(6.0);

    let mut d2 = vec![T::zero(); n];
    let mut u = vec![T::zero(); n];

    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * d2[i - 1] + two;
        d2[i] = (sig - T::one()) / p;

        let slope_hi = (y[i + 1] - y[i]) / (x[i + 1] - x[i]);
        let slope_lo = (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (six * (slope_hi - slope_lo) / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    for i in (0..n - 1).rev() {
        d2[i] = d2[i] * d2[i + 1] + u[i];
    }

    d2
}
