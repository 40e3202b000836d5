//! Correlation reconstruction from a frequency table.
//!
//! The estimator never looks at the angles for magnitudes — those come from
//! the measured frequencies alone. The angles are consulted only to restore
//! the signs that the square roots destroy.

use crate::event::{Orientation, Tag};
use crate::series::FrequencyTable;

/// Square root with an explicit floor at zero.
///
/// A combined probability term can be pushed below zero by hand-built tables
/// or floating-point noise; its root must contribute nothing rather than
/// poison the estimate with NaN.
fn clamped_sqrt(term: f64) -> f64 {
    if term <= 0.0 { 0.0 } else { term.sqrt() }
}

/// Algebraic sign of `cos(phi)`, as ±1.
fn cosine_sign(phi: f64) -> f64 {
    if phi.cos() < 0.0 { -1.0 } else { 1.0 }
}

/// Algebraic sign of `sin(phi)`, as ±1.
fn sine_sign(phi: f64) -> f64 {
    if phi.sin() < 0.0 { -1.0 } else { 1.0 }
}

/// Estimate the correlation coefficient from a series table.
///
/// The 8 counters are folded into four joint-probability terms, one per
/// product of squared cosines/sines of the two angles; square roots recover
/// the unsigned factor magnitudes, the input angles restore the signs, and
/// the angle-difference identities rebuild `cos(φ1-φ2)` and `sin(φ1-φ2)`.
/// The returned value is `-(c12² - s12²)`, which converges to the nominal
/// `-cos(2(φ1-φ2))` as the trial count grows.
pub fn estimate_correlation(table: &FrequencyTable, angle1: f64, angle2: f64) -> f64 {
    use Orientation::{Clockwise as Cw, Counterclockwise as Ccw};
    use Tag::{Minus, Plus};

    let f = |o, t1, t2| table.frequency(o, t1, t2);

    // Each joint term sums two disjoint counters, one per orientation.
    let cc2 = f(Ccw, Minus, Plus) + f(Cw, Plus, Minus); // cos²φ1·cos²φ2
    let cs2 = f(Ccw, Minus, Minus) + f(Cw, Plus, Plus); // cos²φ1·sin²φ2
    let sc2 = f(Ccw, Plus, Plus) + f(Cw, Minus, Minus); // sin²φ1·cos²φ2
    let ss2 = f(Ccw, Plus, Minus) + f(Cw, Minus, Plus); // sin²φ1·sin²φ2

    let cc = cosine_sign(angle1) * cosine_sign(angle2) * clamped_sqrt(cc2);
    let cs = cosine_sign(angle1) * sine_sign(angle2) * clamped_sqrt(cs2);
    let sc = sine_sign(angle1) * cosine_sign(angle2) * clamped_sqrt(sc2);
    let ss = sine_sign(angle1) * sine_sign(angle2) * clamped_sqrt(ss2);

    let c12 = cc + ss;
    let s12 = sc - cs;

    -(c12 * c12 - s12 * s12)
}

/// The closed-form prediction the estimator is measured against.
pub fn nominal_correlation(angle1: f64, angle2: f64) -> f64 {
    -(2.0 * (angle1 - angle2)).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn clamped_sqrt_floors_negative_terms() {
        assert_eq!(clamped_sqrt(-0.25), 0.0);
        assert_eq!(clamped_sqrt(-0.0), 0.0);
        assert_eq!(clamped_sqrt(0.0), 0.0);
        assert_eq!(clamped_sqrt(0.25), 0.5);
    }

    #[test]
    fn sign_helpers_follow_the_quadrant() {
        assert_eq!(cosine_sign(0.0), 1.0);
        assert_eq!(cosine_sign(PI), -1.0);
        assert_eq!(sine_sign(FRAC_PI_2), 1.0);
        assert_eq!(sine_sign(-FRAC_PI_2), -1.0);
    }

    #[test]
    fn nominal_matches_closed_form() {
        let n = nominal_correlation(0.0, PI / 8.0);
        assert!((n - (-(FRAC_PI_4.cos()))).abs() < 1e-12);
        assert_eq!(nominal_correlation(0.3, 0.3), -1.0);
    }

    #[test]
    fn exact_table_reproduces_nominal_exactly_enough() {
        // A table holding the exact expected counts for φ1 = π/4, φ2 = π/8
        // (scaled to integers) should estimate the nominal value closely —
        // no sampling noise, only the integer rounding of the counts.
        let phi1 = FRAC_PI_4;
        let phi2 = PI / 8.0;
        let n = 1_000_000_000.0f64;
        let (c1, s1) = (phi1.cos().powi(2), phi1.sin().powi(2));
        let (c2, s2) = (phi2.cos().powi(2), phi2.sin().powi(2));
        // Arm 1 measures the conjugate basis, arm 2 the orientation basis.
        let counts = [
            (0.5 * s1 * c2 * n) as u64, // ccw + +
            (0.5 * s1 * s2 * n) as u64, // ccw + -
            (0.5 * c1 * c2 * n) as u64, // ccw - +
            (0.5 * c1 * s2 * n) as u64, // ccw - -
            (0.5 * c1 * s2 * n) as u64, // cw  + +
            (0.5 * c1 * c2 * n) as u64, // cw  + -
            (0.5 * s1 * s2 * n) as u64, // cw  - +
            (0.5 * s1 * c2 * n) as u64, // cw  - -
        ];
        let table = FrequencyTable::from_counts(counts);
        let rho = estimate_correlation(&table, phi1, phi2);
        assert!(
            (rho - nominal_correlation(phi1, phi2)).abs() < 1e-4,
            "rho = {rho}"
        );
    }

    #[test]
    fn degenerate_single_count_table_stays_finite() {
        let mut counts = [0u64; 8];
        counts[3] = 1;
        let table = FrequencyTable::from_counts(counts);
        let rho = estimate_correlation(&table, 0.0, 0.0);
        assert!(rho.is_finite());
    }

    #[test]
    fn vanished_terms_contribute_zero() {
        // All mass on two counters: the other joint terms are exactly zero
        // and must pass through the root as zero, never NaN.
        let table = FrequencyTable::from_counts([0, 0, 5, 0, 0, 5, 0, 0]);
        let rho = estimate_correlation(&table, 0.0, 0.0);
        // cc² = 1 and every other term 0: c12 = ±1, s12 = 0, so ρ = -1.
        assert_eq!(rho, -1.0);
    }
}
