//! Error types for extinction curve evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when constructing
//! or evaluating an extinction model: out-of-interval parameters, wavenumbers
//! outside a model's calibrated domain, and unrecognized unit labels.
//!
//! ## Design notes
//!
//! * **Structured**: Errors carry the offending model/parameter name and the
//!   declared bounds, not pre-rendered text.
//! * **Exact rendering**: The `Display` impls reproduce the diagnostic strings
//!   consumed by downstream tooling verbatim; the wording and ordering are a
//!   compatibility contract and must not change.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//!
//! ## Invariants
//!
//! * Interval bounds are rendered as decimal text (`2.0`, not `2`), matching
//!   the published calibration intervals.
//! * Every error is scoped to a single construction or evaluation call; a
//!   model that returns an evaluation error remains valid for later calls.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery, clamping, or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Crate-wide result alias for operations that may produce [`ExtinctionError`].
pub type ExtinctionResult<T> = core::result::Result<T, ExtinctionError>;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for extinction model construction and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtinctionError {
    /// A construction-time parameter lies outside its declared closed interval.
    ///
    /// Surfaced eagerly at `build()`; a model with an invalid parameter is
    /// never constructible.
    InvalidParameter {
        /// Published parameter name (e.g. `RvA`, `fA`).
        name: &'static str,
        /// Lower interval bound (inclusive).
        lo: f64,
        /// Upper interval bound (inclusive).
        hi: f64,
    },

    /// A normalized wavenumber lies outside the model's calibrated x range.
    ///
    /// The whole call fails; no partial results are returned.
    OutsideRange {
        /// Model name as it appears in the diagnostic (e.g. `G16`).
        model: &'static str,
        /// Lower x bound in 1/micron (inclusive).
        lo: f64,
        /// Upper x bound in 1/micron (inclusive).
        hi: f64,
    },

    /// An input carried a unit label outside the closed set of recognized
    /// wavenumber/wavelength units.
    UnrecognizedUnit {
        /// The label as supplied by the caller.
        label: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ExtinctionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            // `{:?}` keeps trailing decimals on round floats (`2.0`, `10.0`),
            // which the compatibility contract requires.
            Self::InvalidParameter { name, lo, hi } => {
                write!(f, "parameter {name} must be between {lo:?} and {hi:?}")
            }
            Self::OutsideRange { model, lo, hi } => {
                write!(
                    f,
                    "Input x outside of range defined for {model} [{lo:?} <= x <= {hi:?}, x has units 1/micron]"
                )
            }
            Self::UnrecognizedUnit { label } => {
                write!(
                    f,
                    "Unrecognized wavenumber unit '{label}' (expected one of: 1/micron, micron, angstrom)"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ExtinctionError {}
