//! Layer 4: Models
//!
//! # Purpose
//!
//! This layer holds the named extinction curves and their published
//! calibration coefficients:
//! - Shared Fitzpatrick-method curve assembly (UV function + spline)
//! - F99: the Fitzpatrick (1999) Milky-Way curve, parameterized by Rv
//! - G03 SMC Bar: the Gordon et al. (2003) fixed-shape SMC average curve
//! - G16: the Gordon et al. (2016) two-component mixture
//!
//! Each model file pairs a fluent builder with an immutable evaluator.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Models ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shared Fitzpatrick-method piecewise curve.
pub mod curve;

/// Fitzpatrick (1999) Milky-Way extinction curve.
pub mod f99;

/// Gordon et al. (2003) SMC Bar average extinction curve.
pub mod g03;

/// Gordon et al. (2016) two-component mixture model.
pub mod g16;
