//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the
//! extinction curves:
//! - Interpolating cubic splines for the optical/NIR segments
//! - The Fitzpatrick & Massa (1990) ultraviolet parameterization
//!
//! These are reusable numeric pieces with no model-specific coefficients.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Models
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

/// Interpolating cubic spline (second-derivative form).
pub mod spline;

/// Fitzpatrick & Massa (1990) UV extinction parameterization.
pub mod fm90;

/// Convert a published `f64` coefficient into the working float type.
///
/// Every calibration constant in this crate fits in an `f64`, so the
/// conversion cannot fail for the supported float types.
#[inline]
pub fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}
