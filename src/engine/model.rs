//! The shared extinction model evaluation contract.
//!
//! ## Purpose
//!
//! This module defines [`ExtinctionModel`], the trait every curve in the
//! crate implements. It fixes the evaluation pipeline (unit normalization,
//! then domain validation, then the pure curve function) in one place, so
//! component curves and mixtures expose the identical calling contract.
//!
//! ## Design notes
//!
//! * **Validate-once, evaluate-many**: Parameters are checked at
//!   construction by the model builders; `evaluate` only re-checks the
//!   per-call x input.
//! * **Pure core**: `evaluate_normalized` is a deterministic, side-effect
//!   free function from an in-range 1/micron array to `A(x)/A(V)` values of
//!   equal length. Repeated identical calls produce bit-identical output.
//! * **Thread safety**: Models are immutable after construction; independent
//!   instances may be evaluated concurrently without locking.
//!
//! ## Invariants
//!
//! * `x_range()` returns `(lo, hi)` with `0 < lo < hi`, in 1/micron,
//!   inclusive at both bounds.
//! * Domain validation always runs after unit normalization, never before.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::ExtinctionResult;
use crate::primitives::units::Wavenumbers;

// ============================================================================
// Model Trait
// ============================================================================

/// A named extinction curve with a calibrated wavenumber domain.
///
/// Implementors supply the curve name, its valid x range, and the pure
/// evaluation rule; the provided [`evaluate`](ExtinctionModel::evaluate)
/// method runs the full input pipeline on top of them.
pub trait ExtinctionModel<T: Float> {
    /// Model name as it appears in domain diagnostics (e.g. `G16`).
    fn name(&self) -> &'static str;

    /// Valid wavenumber domain `(lo, hi)` in 1/micron, inclusive.
    fn x_range(&self) -> (f64, f64);

    /// Evaluate `A(x)/A(V)` over a normalized, in-range wavenumber array.
    ///
    /// Callers outside the crate should prefer
    /// [`evaluate`](ExtinctionModel::evaluate), which normalizes and
    /// validates the input first.
    fn evaluate_normalized(&self, x: &[T]) -> Vec<T>;

    /// Evaluate `A(x)/A(V)` for a scalar, array, or unit-tagged input.
    ///
    /// Pipeline: unit normalization to 1/micron, whole-array domain
    /// validation against [`x_range`](ExtinctionModel::x_range), then the
    /// pure curve function. Fails with no partial results if any element is
    /// out of range; the model remains valid for later calls.
    fn evaluate<I>(&self, input: I) -> ExtinctionResult<Vec<T>>
    where
        I: Into<Wavenumbers<T>>,
    {
        let x = input.into().into_inverse_micron();
        Validator::validate_x_range(self.name(), &x, self.x_range())?;
        Ok(self.evaluate_normalized(&x))
    }
}
