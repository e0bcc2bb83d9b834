#![cfg(feature = "dev")]
//! Tests for the math layer: cubic spline and the FM90 UV function.
//!
//! These tests verify the numeric building blocks in isolation:
//! - Spline exactness at knots and on linear data
//! - FM90 continuity at the far-UV knee and Drude bump shape
//!
//! ## Test Organization
//!
//! 1. **Spline** - knot exactness, linear reproduction, bracketing
//! 2. **FM90** - knee continuity, bump peak location

use approx::assert_relative_eq;

use extinction::internals::math::fm90::Fm90;
use extinction::internals::math::spline::CubicSpline;

// ============================================================================
// Spline Tests
// ============================================================================

/// Test that the spline reproduces its knot ordinates exactly.
#[test]
fn test_spline_exact_at_knots() {
    let x = vec![0.0, 0.4, 1.1, 2.0, 3.7];
    let y = vec![0.0, 0.2, 0.9, 1.4, 2.6];
    let spline = CubicSpline::new(x.clone(), y.clone());

    for (&xi, &yi) in x.iter().zip(&y) {
        assert_relative_eq!(spline.eval_one(xi), yi, max_relative = 1e-12);
    }
}

/// Test that linear data is reproduced exactly between knots.
///
/// A natural cubic spline through collinear points has zero second
/// derivatives everywhere, so it degenerates to the line itself.
#[test]
fn test_spline_linear_data() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 3.0, 5.0, 7.0];
    let spline = CubicSpline::new(x, y);

    for xv in [0.25, 0.5, 1.5, 2.75] {
        assert_relative_eq!(spline.eval_one(xv), 1.0 + 2.0 * xv, max_relative = 1e-12);
    }
}

/// Test batch evaluation against per-point evaluation.
#[test]
fn test_spline_batch_matches_single() {
    let spline = CubicSpline::new(vec![0.0, 1.0, 2.5, 4.0], vec![0.0, 1.2, 0.7, 2.0]);
    let xs = vec![0.3, 1.0, 1.9, 3.3];

    let batch = spline.eval(&xs);
    for (i, &xv) in xs.iter().enumerate() {
        assert_eq!(batch[i], spline.eval_one(xv));
    }
}

/// Test that knot accessors expose the construction data.
#[test]
fn test_spline_knot_accessors() {
    let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.5, 1.5, 2.5]);
    assert_eq!(spline.knots_x(), &[0.0, 1.0, 2.0]);
    assert_eq!(spline.knots_y(), &[0.5, 1.5, 2.5]);
}

// ============================================================================
// FM90 Tests
// ============================================================================

fn milky_way_fm90() -> Fm90<f64> {
    // F99-style coefficients at Rv = 3.1.
    let c2 = -0.824 + 4.717 / 3.1;
    let c1 = 2.030 - 3.007 * c2;
    Fm90 {
        c1,
        c2,
        c3: 3.23,
        c4: 0.41,
        x0: 4.596,
        gamma: 0.99,
    }
}

/// Test that the far-UV term joins continuously at the 5.9 knee.
#[test]
fn test_fm90_continuous_at_knee() {
    let fm90 = milky_way_fm90();

    let below = fm90.exv_ebv(5.9 - 1e-9);
    let above = fm90.exv_ebv(5.9 + 1e-9);
    assert!((below - above).abs() < 1e-6, "{below} vs {above}");
}

/// Test that the Drude bump peaks near its center x0.
#[test]
fn test_fm90_bump_peaks_at_center() {
    let fm90 = milky_way_fm90();

    let at_center = fm90.exv_ebv(4.596);
    for offset in [-0.4, -0.2, 0.2, 0.4] {
        let off_center = fm90.exv_ebv(4.596 + offset);
        assert!(
            at_center > off_center,
            "offset {offset}: {at_center} vs {off_center}"
        );
    }
}

/// Test that the far-UV term strictly increases the curve above the knee.
#[test]
fn test_fm90_fuv_rise() {
    let fm90 = milky_way_fm90();

    let linear_only = fm90.c1 + fm90.c2 * 8.0;
    assert!(fm90.exv_ebv(8.0) > linear_only);
}
