//! Tests for wavenumber units and input normalization.
//!
//! These tests verify the unit normalizer's contract:
//! - Equivalence of the three supported unit systems
//! - Rejection of unrecognized textual unit labels
//! - Bare-number and array input conversions
//!
//! ## Test Organization
//!
//! 1. **Unit Equivalence** - identical results across unit systems
//! 2. **Label Parsing** - recognized and unrecognized labels
//! 3. **Input Forms** - scalars, slices, vectors

use approx::assert_relative_eq;

use extinction::prelude::*;

// ============================================================================
// Unit Equivalence Tests
// ============================================================================

/// Test that the same physical input yields identical output in all three
/// unit systems.
#[test]
fn test_unit_system_equivalence() {
    let model = G16::builder().rv_a(3.1).f_a(0.5).build().unwrap();

    for v in [0.45, 1.0, 2.35, 4.6, 9.8] {
        let bare = model.evaluate(v).unwrap()[0];
        let micron = model
            .evaluate(Wavenumbers::new(vec![1.0 / v], Micron))
            .unwrap()[0];
        let angstrom = model
            .evaluate(Wavenumbers::new(vec![1.0e4 / v], Angstrom))
            .unwrap()[0];

        assert_relative_eq!(bare, micron, max_relative = 1e-10);
        assert_relative_eq!(bare, angstrom, max_relative = 1e-10);
    }
}

/// Test that an explicit inverse-micron tag is the identity conversion.
#[test]
fn test_inverse_micron_identity() {
    let model = G03SmcBar::new();

    let bare = model.evaluate(vec![0.5, 2.0, 6.0]).unwrap();
    let tagged = model
        .evaluate(Wavenumbers::new(vec![0.5, 2.0, 6.0], InverseMicron))
        .unwrap();
    assert_eq!(bare, tagged);
}

// ============================================================================
// Label Parsing Tests
// ============================================================================

/// Test that canonical and short-form labels parse to the right unit.
#[test]
fn test_recognized_labels() {
    assert_eq!(
        WavenumberUnit::from_label("1/micron").unwrap(),
        InverseMicron
    );
    assert_eq!(WavenumberUnit::from_label("micron").unwrap(), Micron);
    assert_eq!(WavenumberUnit::from_label("um").unwrap(), Micron);
    assert_eq!(WavenumberUnit::from_label("angstrom").unwrap(), Angstrom);
    assert_eq!(WavenumberUnit::from_label("AA").unwrap(), Angstrom);
}

/// Test that unrecognized labels fail with the unit error.
#[test]
fn test_unrecognized_labels() {
    for label in ["nm", "Hz", "eV", "parsec", ""] {
        let err = WavenumberUnit::from_label(label).unwrap_err();
        assert!(
            matches!(err, ExtinctionError::UnrecognizedUnit { .. }),
            "label = {label:?}"
        );
        assert!(err.to_string().contains("Unrecognized wavenumber unit"));
    }
}

/// Test label-tagged construction end to end.
#[test]
fn test_with_unit_label() {
    let model = G03SmcBar::new();

    let tagged = Wavenumbers::with_unit_label(vec![5500.0], "angstrom").unwrap();
    let from_label = model.evaluate(tagged).unwrap()[0];
    let bare = model.evaluate(1.0e4 / 5500.0).unwrap()[0];
    assert_relative_eq!(from_label, bare, max_relative = 1e-12);

    assert!(Wavenumbers::<f64>::with_unit_label(vec![1.0], "nm").is_err());
}

/// Test the canonical label round-trip.
#[test]
fn test_canonical_labels() {
    assert_eq!(InverseMicron.label(), "1/micron");
    assert_eq!(Micron.label(), "micron");
    assert_eq!(Angstrom.label(), "angstrom");
}

// ============================================================================
// Input Form Tests
// ============================================================================

/// Test that scalars, slices, arrays, and vectors all evaluate alike.
#[test]
fn test_input_forms() {
    let model = F99::builder().build().unwrap();

    let from_scalar = model.evaluate(2.0).unwrap();
    let from_vec = model.evaluate(vec![2.0]).unwrap();
    let from_slice = model.evaluate(&[2.0][..]).unwrap();
    let from_array = model.evaluate([2.0]).unwrap();

    assert_eq!(from_scalar, from_vec);
    assert_eq!(from_scalar, from_slice);
    assert_eq!(from_scalar, from_array);
}

/// Test the accessor surface of the tagged input type.
#[test]
fn test_wavenumbers_accessors() {
    let w = Wavenumbers::new(vec![1.0, 2.0], Micron);
    assert_eq!(w.len(), 2);
    assert!(!w.is_empty());
    assert_eq!(w.unit(), Micron);
    assert_eq!(w.into_inverse_micron(), vec![1.0, 0.5]);
}
