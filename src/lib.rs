//! # Extinction — Interstellar Dust Extinction Curves for Rust
//!
//! Evaluate interstellar dust extinction curves A(x)/A(V), the ratio of
//! light attenuation at wavenumber x (inverse wavelength) to attenuation at
//! visual wavelength, for empirically parameterized astrophysical models,
//! including the Gordon et al. (2016) two-component mixture.
//!
//! ## What is an extinction curve?
//!
//! Dust along a line of sight dims and reddens starlight. An extinction
//! curve describes that attenuation as a function of inverse wavelength,
//! normalized to the attenuation in the visual band. Astronomers divide an
//! observed spectrum by the curve to recover the intrinsic spectrum.
//!
//! ## Quick Start
//!
//! ```rust
//! use extinction::prelude::*;
//!
//! // Build the mixture model (parameters validated here, once)
//! let model = G16::builder()
//!     .rv_a(3.1)      // Milky-Way-type total-to-selective ratio
//!     .f_a(1.0)       // mixing fraction of the Milky-Way component
//!     .build()?;
//!
//! // Evaluate A(x)/A(V) over wavenumbers in 1/micron
//! let axav = model.evaluate(vec![0.5, 1.0, 2.0, 4.6])?;
//! assert_eq!(axav.len(), 4);
//! # Result::<(), ExtinctionError>::Ok(())
//! ```
//!
//! ### Unit-tagged input
//!
//! Inputs may be bare numbers (implicitly 1/micron) or tagged with a
//! wavelength unit; everything is normalized before the domain check:
//!
//! ```rust
//! use extinction::prelude::*;
//!
//! let model = G03SmcBar::new();
//!
//! let from_wavenumber: Vec<f64> = model.evaluate(2.0)?;
//! let from_micron = model.evaluate(Wavenumbers::new(vec![0.5], Micron))?;
//! let from_angstrom = model.evaluate(Wavenumbers::new(vec![5000.0], Angstrom))?;
//!
//! assert!((from_wavenumber[0] - from_micron[0]).abs() < 1e-12);
//! assert!((from_wavenumber[0] - from_angstrom[0]).abs() < 1e-12);
//! # Result::<(), ExtinctionError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Construction and evaluation return `Result<_, ExtinctionError>`:
//!
//! * **`InvalidParameter`**: a construction parameter lies outside its
//!   published interval; the model is never built.
//! * **`OutsideRange`**: an evaluation wavenumber lies outside the model's
//!   calibrated domain; the call fails whole, the model stays usable.
//! * **`UnrecognizedUnit`**: a textual unit label outside the closed set
//!   of recognized units.
//!
//! There is no clamping and there are no partial results: a physical ratio
//! model must not guess past its calibrated domain.
//!
//! ```rust
//! use extinction::prelude::*;
//!
//! let err = G16::builder().rv_a(10.0).build().unwrap_err();
//! assert_eq!(err.to_string(), "parameter RvA must be between 2.0 and 6.0");
//! ```
//!
//! ## Models
//!
//! | Model | Parameters | x range (1/micron) | Shape |
//! |-----------|----------------------------|--------------------|---------------------------------|
//! | `F99` | `Rv` in [2.0, 6.0] | [0.3, 10.0] | Fitzpatrick (1999) Milky Way |
//! | `G03SmcBar` | none | [0.3, 10.0] | Gordon (2003) SMC Bar average |
//! | `G16` | `RvA` in [2.0, 6.0], `fA` in [0.0, 1.0] | [0.3, 10.0] | fA·F99 + (1−fA)·SMC Bar |
//!
//! At `fA = 1.0` the mixture reduces exactly to its F99 component; at
//! `fA = 0.0`, exactly to the SMC Bar curve.
//!
//! ## Concurrency
//!
//! Models are immutable after construction and hold no interior mutability;
//! independent instances may be evaluated from multiple threads without
//! locking. Evaluation is deterministic: identical inputs produce
//! bit-identical outputs.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! extinction = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! * Fitzpatrick, E. L. (1999). "Correcting for the Effects of Interstellar
//!   Extinction"
//! * Gordon, K. D., et al. (2003). "A Quantitative Comparison of SMC, LMC
//!   and Milky Way UV to NIR Extinction Curves"
//! * Gordon, K. D., et al. (2016). "The Panchromatic Hubble Andromeda
//!   Treasury. XV."

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and unit-tagged inputs.
mod primitives;

// Layer 2: Math - spline interpolation and the FM90 UV function.
mod math;

// Layer 3: Engine - validation and the shared evaluation pipeline.
mod engine;

// Layer 4: Models - named curves and their published calibrations.
mod models;

// Standard extinction prelude.
pub mod prelude {
    pub use crate::engine::model::ExtinctionModel;
    pub use crate::models::f99::{F99, F99Builder};
    pub use crate::models::g03::{
        G03SmcBar, SMCBAR_OBSDATA_AXAV, SMCBAR_OBSDATA_TOLERANCE, SMCBAR_OBSDATA_X,
    };
    pub use crate::models::g16::{G16, G16Builder};
    pub use crate::primitives::errors::{ExtinctionError, ExtinctionResult};
    pub use crate::primitives::units::{
        WavenumberUnit,
        WavenumberUnit::{Angstrom, InverseMicron, Micron},
        Wavenumbers,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod models {
        pub use crate::models::*;
    }
}
