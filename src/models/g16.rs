//! Gordon et al. (2016) two-component mixture model.
//!
//! ## Purpose
//!
//! This module provides G16, the composite extinction model that linearly
//! blends a Milky-Way-type F99 curve (at ratio RvA) with the fixed-shape
//! G03 SMC Bar curve, weighted by the mixing fraction fA:
//!
//! ```text
//! A(x)/A(V) = fA * A_F99(x; RvA) + (1 - fA) * A_SMCBar(x)
//! ```
//!
//! ## Design notes
//!
//! * **Same contract as a component**: G16 implements [`ExtinctionModel`]
//!   like any single curve; its x range is the intersection of its
//!   components' ranges, since a mixed value is only meaningful where both
//!   are defined.
//! * **Exact reduction**: at fA = 1 the arithmetic `1*a + 0*b` returns
//!   component A bit-exactly; at fA = 0, component B likewise.
//! * **Error propagation**: component errors surface unchanged; the mixture
//!   adds no error kinds of its own.
//!
//! ## References
//!
//! * Gordon, K. D., et al. (2016), ApJ, 826, 104.

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
use crate::models::f99::{self, F99};
use crate::models::g03::G03SmcBar;
use crate::primitives::errors::ExtinctionResult;

// ============================================================================
// Published Calibration
// ============================================================================

/// Valid interval for the mixing fraction fA.
pub(crate) const FA_RANGE: (f64, f64) = (0.0, 1.0);

/// Default mixing fraction: pure Milky-Way-type curve.
const FA_DEFAULT: f64 = 1.0;

// ============================================================================
// G16 Builder
// ============================================================================

/// Builder for the [`G16`] mixture model.
#[derive(Debug, Clone)]
pub struct G16Builder<T> {
    rv_a: T,
    f_a: T,
}

impl<T: Float> Default for G16Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> G16Builder<T> {
    /// Create a builder with the defaults RvA = 3.1, fA = 1.0.
    pub fn new() -> Self {
        Self {
            rv_a: cast(f99::RV_DEFAULT),
            f_a: cast(FA_DEFAULT),
        }
    }

    /// Set the ratio RvA of the Milky-Way-type component (valid in [2.0, 6.0]).
    pub fn rv_a(mut self, rv_a: T) -> Self {
        self.rv_a = rv_a;
        self
    }

    /// Set the mixing fraction fA (valid in [0.0, 1.0]).
    pub fn f_a(mut self, f_a: T) -> Self {
        self.f_a = f_a;
        self
    }

    /// Validate both parameters and build the immutable mixture.
    ///
    /// Both components are constructed here, once; evaluation only blends
    /// their outputs.
    pub fn build(self) -> ExtinctionResult<G16<T>> {
        Validator::validate_parameter("RvA", self.rv_a, f99::RV_RANGE)?;
        Validator::validate_parameter("fA", self.f_a, FA_RANGE)?;

        let component_a = F99::builder().rv(self.rv_a).build()?;
        let component_b = G03SmcBar::new();

        // Tightest common bound of the two component domains.
        let (a_lo, a_hi) = component_a.x_range();
        let (b_lo, b_hi) = component_b.x_range();
        let x_range = (a_lo.max(b_lo), a_hi.min(b_hi));

        Ok(G16 {
            f_a: self.f_a,
            component_a,
            component_b,
            x_range,
        })
    }
}

// ============================================================================
// G16 Model
// ============================================================================

/// The Gordon et al. (2016) mixture of an F99 curve and the SMC Bar curve.
#[derive(Debug, Clone, PartialEq)]
pub struct G16<T> {
    f_a: T,
    component_a: F99<T>,
    component_b: G03SmcBar<T>,
    x_range: (f64, f64),
}

impl<T: Float> G16<T> {
    /// Start building a G16 model.
    pub fn builder() -> G16Builder<T> {
        G16Builder::new()
    }

    /// The ratio RvA of the Milky-Way-type component.
    pub fn rv_a(&self) -> T {
        self.component_a.rv()
    }

    /// The mixing fraction fA.
    pub fn f_a(&self) -> T {
        self.f_a
    }
}

impl<T: Float> ExtinctionModel<T> for G16<T> {
    fn name(&self) -> &'static str {
        "G16"
    }

    fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    fn evaluate_normalized(&self, x: &[T]) -> Vec<T> {
        let axav_a = self.component_a.evaluate_normalized(x);
        let axav_b = self.component_b.evaluate_normalized(x);

        let one_minus_fa = T::one() - self.f_a;
        axav_a
            .into_iter()
            .zip(axav_b)
            .map(|(a, b)| self.f_a * a + one_minus_fa * b)
            .collect()
    }
}
