//! Tests for the G03 SMC Bar average extinction curve.
//!
//! These tests verify the fixed-shape SMC Bar model as a standalone curve:
//! - Reproduction of the published averaged observed data
//! - Domain validation with its own model name
//! - Parameter-free construction
//!
//! ## Test Organization
//!
//! 1. **Construction** - infallible, no parameters
//! 2. **Domain Validation** - out-of-range wavenumbers
//! 3. **Regression Values** - averaged observed data reproduction

use approx::assert_relative_eq;

use extinction::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test parameter-free construction and introspection.
#[test]
fn test_construction() {
    let model = G03SmcBar::<f64>::new();
    assert_eq!(model.x_range(), (0.3, 10.0));

    // Default trait mirrors new().
    let defaulted = G03SmcBar::<f64>::default();
    assert_eq!(
        model.evaluate(2.0).unwrap(),
        defaulted.evaluate(2.0).unwrap()
    );
}

// ============================================================================
// Domain Validation Tests
// ============================================================================

/// Test that the domain diagnostic carries the SMC Bar model name.
#[test]
fn test_invalid_wavenumbers() {
    let model = G03SmcBar::new();
    for x_invalid in [-1.0, 0.1, 12.0, 100.0] {
        let err = model.evaluate(x_invalid).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input x outside of range defined for G03_SMCBar [0.3 <= x <= 10.0, x has units 1/micron]",
            "x = {x_invalid}"
        );
    }
}

// ============================================================================
// Regression Value Tests
// ============================================================================

/// Test reproduction of the published averaged observed data.
#[test]
fn test_extinction_g03_values() {
    let model = G03SmcBar::new();

    let axav = model.evaluate(SMCBAR_OBSDATA_X.to_vec()).unwrap();
    for (i, &expected) in SMCBAR_OBSDATA_AXAV.iter().enumerate() {
        assert_relative_eq!(axav[i], expected, max_relative = SMCBAR_OBSDATA_TOLERANCE);
    }
}

/// Test that the optical anchor points are reproduced tightly.
///
/// An interpolating spline is exact at its own knots.
#[test]
fn test_anchor_points_exact() {
    let model = G03SmcBar::new();

    let x = vec![1.0 / 2.198, 1.0 / 1.65, 1.0 / 1.25];
    let axav = model.evaluate(x).unwrap();
    assert_relative_eq!(axav[0], 0.11, max_relative = 1e-10);
    assert_relative_eq!(axav[1], 0.169, max_relative = 1e-10);
    assert_relative_eq!(axav[2], 0.25, max_relative = 1e-10);
}

/// Test idempotence of the fixed-shape curve.
#[test]
fn test_idempotent_evaluation() {
    let model = G03SmcBar::new();
    let x = vec![0.5, 1.9, 4.6, 8.1];

    let first = model.evaluate(x.clone()).unwrap();
    let second = model.evaluate(x).unwrap();
    assert_eq!(first, second);
}
