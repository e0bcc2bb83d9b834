//! Wavenumber units and input normalization.
//!
//! ## Purpose
//!
//! This module converts caller-supplied spectral coordinates into the
//! canonical internal unit, inverse micron (1/micron), before any domain
//! check or curve evaluation takes place.
//!
//! ## Design notes
//!
//! * **Closed set**: Exactly three units are recognized: inverse micron
//!   (identity), micron (`x = 1/value`), and angstrom (`x = 1e4/value`).
//!   There is no implicit unit guessing beyond these.
//! * **Tagged union**: Inputs are a value array plus a [`WavenumberUnit`]
//!   tag rather than a generic unit-algebra type; unknown textual labels are
//!   rejected explicitly via [`WavenumberUnit::from_label`].
//! * **Pure**: Normalization is a side-effect-free transformation.
//!
//! ## Key concepts
//!
//! * **Wavenumber x**: inverse wavelength; the canonical coordinate of every
//!   extinction curve in this crate.
//! * **Bare numbers**: untagged scalars and arrays are assumed to already be
//!   in 1/micron, matching the convention of the published calibrations.
//!
//! ## Non-goals
//!
//! * This module does not range-check values against a model's domain.
//! * This module does not support frequency or energy units.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{ExtinctionError, ExtinctionResult};

// ============================================================================
// Unit Tag
// ============================================================================

/// Recognized units for spectral coordinates supplied to `evaluate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavenumberUnit {
    /// Inverse micron (1/micron): the canonical unit, converted by identity.
    #[default]
    InverseMicron,

    /// Wavelength in micron: converted as `x = 1/value`.
    Micron,

    /// Wavelength in angstrom: converted as `x = 1e4/value`.
    Angstrom,
}

impl WavenumberUnit {
    /// Parse a textual unit label into a [`WavenumberUnit`].
    ///
    /// Accepts the canonical labels (`1/micron`, `micron`, `angstrom`) plus
    /// the common short forms used in spectral data files. Any other label is
    /// a usage error.
    pub fn from_label(label: &str) -> ExtinctionResult<Self> {
        match label.trim() {
            "1/micron" | "1/um" | "micron^-1" | "um^-1" => Ok(Self::InverseMicron),
            "micron" | "um" => Ok(Self::Micron),
            "angstrom" | "Angstrom" | "AA" => Ok(Self::Angstrom),
            other => Err(ExtinctionError::UnrecognizedUnit {
                label: String::from(other),
            }),
        }
    }

    /// The canonical label for this unit.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InverseMicron => "1/micron",
            Self::Micron => "micron",
            Self::Angstrom => "angstrom",
        }
    }
}

// ============================================================================
// Tagged Input
// ============================================================================

/// A scalar or array of spectral coordinates tagged with a unit.
///
/// This is the single input type of the evaluation interface. Bare numbers
/// and arrays convert into it via `From`, carrying the implicit
/// [`WavenumberUnit::InverseMicron`] tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavenumbers<T> {
    values: Vec<T>,
    unit: WavenumberUnit,
}

impl<T: Float> Wavenumbers<T> {
    /// Tag an array of values with an explicit unit.
    pub fn new(values: Vec<T>, unit: WavenumberUnit) -> Self {
        Self { values, unit }
    }

    /// Tag an array of values with a textual unit label.
    ///
    /// Fails with [`ExtinctionError::UnrecognizedUnit`] for labels outside
    /// the closed set of recognized units.
    pub fn with_unit_label(values: Vec<T>, label: &str) -> ExtinctionResult<Self> {
        Ok(Self::new(values, WavenumberUnit::from_label(label)?))
    }

    /// Number of values carried.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are carried.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The unit tag.
    pub fn unit(&self) -> WavenumberUnit {
        self.unit
    }

    /// Normalize to a plain array in 1/micron.
    pub fn into_inverse_micron(self) -> Vec<T> {
        let unit = self.unit;
        let convert = move |v: T| match unit {
            WavenumberUnit::InverseMicron => v,
            WavenumberUnit::Micron => T::one() / v,
            WavenumberUnit::Angstrom => T::from(1.0e4).unwrap() / v,
        };
        self.values.into_iter().map(convert).collect()
    }
}

// ============================================================================
// Bare-Number Conversions
// ============================================================================

impl<T: Float> From<T> for Wavenumbers<T> {
    /// A bare scalar is assumed to already be in 1/micron.
    fn from(value: T) -> Self {
        Self::new(vec![value], WavenumberUnit::InverseMicron)
    }
}

impl<T: Float> From<Vec<T>> for Wavenumbers<T> {
    /// A bare array is assumed to already be in 1/micron.
    fn from(values: Vec<T>) -> Self {
        Self::new(values, WavenumberUnit::InverseMicron)
    }
}

impl<T: Float> From<&[T]> for Wavenumbers<T> {
    fn from(values: &[T]) -> Self {
        Self::new(values.to_vec(), WavenumberUnit::InverseMicron)
    }
}

impl<T: Float, const N: usize> From<[T; N]> for Wavenumbers<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(values.to_vec(), WavenumberUnit::InverseMicron)
    }
}

impl<T: Float, const N: usize> From<&[T; N]> for Wavenumbers<T> {
    fn from(values: &[T; N]) -> Self {
        Self::new(values.to_vec(), WavenumberUnit::InverseMicron)
    }
}
