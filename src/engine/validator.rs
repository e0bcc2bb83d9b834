//! Parameter and domain validation for extinction models.
//!
//! ## Purpose
//!
//! This module enforces the two validation contracts of the crate: model
//! parameters against their published closed intervals at construction, and
//! normalized wavenumbers against a model's calibrated x range at every
//! evaluation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation; the whole call
//!   fails with no partial results.
//! * **All-or-nothing**: A single out-of-range element rejects the entire
//!   input array.
//! * **Ordering**: Domain checks run on normalized values only; callers must
//!   convert units first so a value valid only in another unit system is
//!   still judged correctly.
//!
//! ## Invariants
//!
//! * Interval bounds are inclusive; boundary values are valid.
//! * Non-finite values never pass either check.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp, truncate, or otherwise repair inputs;
//!   guessing past a calibrated domain is forbidden.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{ExtinctionError, ExtinctionResult};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for extinction model parameters and inputs.
///
/// All methods return `Result<(), ExtinctionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a construction-time parameter against its closed interval.
    ///
    /// Runs exactly once, at `build()`; a constructed model is guaranteed
    /// parameter-valid for its entire lifetime.
    pub fn validate_parameter<T: Float>(
        name: &'static str,
        value: T,
        range: (f64, f64),
    ) -> ExtinctionResult<()> {
        let (lo, hi) = range;
        let v = value.to_f64().unwrap_or(f64::NAN);
        if !(v >= lo && v <= hi) {
            return Err(ExtinctionError::InvalidParameter { name, lo, hi });
        }
        Ok(())
    }

    /// Validate a normalized wavenumber array against a model's x range.
    ///
    /// `x` must already be in 1/micron. The comparison is written so that
    /// NaN fails it.
    pub fn validate_x_range<T: Float>(
        model: &'static str,
        x: &[T],
        range: (f64, f64),
    ) -> ExtinctionResult<()> {
        let (lo, hi) = range;
        let lo_t = T::from(lo).unwrap();
        let hi_t = T::from(hi).unwrap();

        for &xi in x {
            if !(xi >= lo_t && xi <= hi_t) {
                return Err(ExtinctionError::OutsideRange { model, lo, hi });
            }
        }
        Ok(())
    }
}
