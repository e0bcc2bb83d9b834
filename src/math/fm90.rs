//! Fitzpatrick & Massa (1990) ultraviolet extinction parameterization.
//!
//! ## Purpose
//!
//! This module provides the six-coefficient FM90 shape function shared by
//! every ultraviolet segment in this crate: a linear background, a Drude
//! profile for the 2175 angstrom bump, and a far-UV curvature term.
//!
//! ## Key concepts
//!
//! * **Output units**: The function returns `E(x-V)/E(B-V)`; callers convert
//!   to `A(x)/A(V)` via `value/Rv + 1`.
//! * **Drude profile**: `D(x) = x^2 / ((x^2 - x0^2)^2 + x^2 gamma^2)` with
//!   bump center `x0` and width `gamma`.
//! * **Far-UV term**: a cubic in `(x - 5.9)`, active only for x >= 5.9
//!   1/micron and exactly zero at the knee, so the curve is continuous there.
//!
//! ## Non-goals
//!
//! * This module does not carry model-specific coefficient values; those
//!   live with the models that publish them.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::cast;

/// Wavenumber above which the far-UV curvature term is active (1/micron).
const FUV_KNEE: f64 = 5.9;

// ============================================================================
// FM90 Shape Function
// ============================================================================

/// FM90 coefficient set for one ultraviolet extinction curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fm90<T> {
    /// Linear background intercept.
    pub c1: T,
    /// Linear background slope.
    pub c2: T,
    /// Bump amplitude.
    pub c3: T,
    /// Far-UV curvature amplitude.
    pub c4: T,
    /// Bump center (1/micron).
    pub x0: T,
    /// Bump width (1/micron).
    pub gamma: T,
}

impl<T: Float> Fm90<T> {
    /// Evaluate `E(x-V)/E(B-V)` at wavenumber `x` (1/micron).
    pub fn exv_ebv(&self, x: T) -> T {
        let x2 = x * x;

        // Drude bump profile.
        let denom = (x2 - self.x0 * self.x0).powi(2) + x2 * self.gamma * self.gamma;
        let drude = x2 / denom;

        let mut exv = self.c1 + self.c2 * x + self.c3 * drude;

        // Far-UV curvature, zero below the knee.
        let knee = cast::<T>(FUV_KNEE);
        if x >= knee {
            let y = x - knee;
            let quad = cast::<T>(0.5392);
            let cubic = cast::<T>(0.05644);
            exv = exv + self.c4 * (quad * y * y + cubic * y * y * y);
        }

        exv
    }
}
