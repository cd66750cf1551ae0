//! Closed-form case solvers.
//!
//! Each solver represents the unknown rotation as a point on the unit circle
//! in the complex plane and solves the resulting quadratic through the
//! complex square root and logarithm. The branch choices are part of the
//! contract: all three solvers assume the caller has already verified the
//! matching classification guard and return a silently wrong (but finite)
//! angle outside that regime. Degenerate geometry (`r = 0`, target on a
//! circle center) propagates as NaN/Inf.
//!
//! The solvers are not quadrant-aware; the dispatcher reflects its arguments
//! so they always see a canonical first-quadrant configuration.

use nalgebra::Complex;

use super::REFERENCE_HEADING;

/// Principal-branch complex square root: the root with non-negative real
/// part. Named so the branch choice is a visible, testable contract.
pub(crate) fn sqrt_principal(z: Complex<f64>) -> Complex<f64> {
    z.sqrt()
}

/// Angle of `z` extracted as `Re(-i * ln z)` on the principal branch,
/// in `(-pi, pi]`.
pub(crate) fn principal_angle(z: Complex<f64>) -> f64 {
    (-Complex::<f64>::i() * z.ln()).re
}

/// Rounds the real and imaginary parts to the nearest integer (half away
/// from zero). The double-arc derivation applies this to two intermediate
/// terms before they meet under the square root; without it the root can
/// land on the other branch. Only meaningful when `r` is large relative to
/// one unit, as in the original derivation.
fn stabilize(z: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re.round(), z.im.round())
}

/// Steering angle for the direct-tangent configuration: one arc of curvature
/// `1/r` on the near osculating circle followed by a straight tangent line
/// through `(xn, yn)`.
pub fn direct_tangent_angle(x0: f64, y0: f64, xn: f64, yn: f64, r: f64) -> f64 {
    let dx = xn - x0;
    let dy = yn - y0;
    let i: Complex<f64> = Complex::i();

    let a = r * (0.5 * i * REFERENCE_HEADING).exp();
    let b = -i * r * (dx + i * dy);
    let c = (i * REFERENCE_HEADING).exp() * (dx * dx + dy * dy);
    let d = i * r * (2.0 * i * REFERENCE_HEADING).exp() * (dx - i * dy);
    let e = i * r * (1.5 * i * REFERENCE_HEADING).exp()
        + (0.5 * i * REFERENCE_HEADING).exp() * (dx + i * dy);

    principal_angle((-a + sqrt_principal(b + c + d) * i) / e)
}

/// Steering angle for the bitangent configuration: the go-around maneuver
/// along the external tangent of the opposite osculating circle.
pub fn bitangent_angle(x0: f64, y0: f64, xn: f64, yn: f64, r: f64) -> f64 {
    let dx = xn - x0;
    let dy = yn - y0;
    let i: Complex<f64> = Complex::i();

    let a = (0.5 * i * REFERENCE_HEADING).exp();
    let b = i * r * (dx - dy);
    let c = (i * REFERENCE_HEADING).exp() * (dx * dx + dy * dy);
    let d = -i * r * (2.0 * i * REFERENCE_HEADING).exp() * (dx + dy);
    let e = -r * (i * REFERENCE_HEADING).exp() * i;
    let f = r - (i * REFERENCE_HEADING).exp() * (i * dx + dy);

    principal_angle((a * sqrt_principal(b + c + d) + e) / f)
}

/// Intermediate angle `gamma` for the double-arc configuration: the angular
/// position of the tangency between the two opposite-curvature arcs,
/// measured on the opposite circle. Not the final steering angle; the
/// dispatcher derives that from the tangency pivot.
pub fn double_arc_gamma(x0: f64, y0: f64, xn: f64, yn: f64, r: f64) -> f64 {
    let dx = xn - x0;
    let dy = yn - y0;
    let i: Complex<f64> = Complex::i();
    let rot = (i * REFERENCE_HEADING).exp();
    let rot2 = (2.0 * i * REFERENCE_HEADING).exp();

    let a = -0.25 * r * (dx + i * dy);
    let b = stabilize(2.0 * r * r - 2.0 * r * rot * (i * dx + dy));
    let c = stabilize(2.0 * r * r * rot2 + 2.0 * r * rot * (i * dx - dy));
    let d = -r * (dx + i * dy);
    let e = 4.0 * i * r * r * rot;
    let f = i * rot * (dx * dx + dy * dy);
    let g = r * rot2 * (dx - i * dy);
    let h = i * r * r * rot;
    let j = 0.25 * i * rot * (dx * dx + dy * dy);
    let k = 0.25 * r * rot2 * (dx - i * dy);
    let l = r * r * rot2 + r * rot * (i * dx - dy);

    let sum = d + e + f + g;
    let radicand = 4.0 * b * c + sum * sum;

    principal_angle((a + 0.25 * sqrt_principal(radicand) + (h + j + k)) / l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn sqrt_principal_takes_non_negative_real_root() {
        let root = sqrt_principal(Complex::new(-4.0, 0.0));
        assert!(root.re.abs() < 1e-12);
        assert!((root.im - 2.0).abs() < 1e-12);

        let root = sqrt_principal(Complex::new(0.0, 2.0));
        assert!(root.re > 0.0);
        assert!((root * root - Complex::new(0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn principal_angle_is_argument_in_half_open_interval() {
        assert!((principal_angle(Complex::i()) - PI / 2.0).abs() < 1e-12);
        // Negative real axis belongs to the +pi side of the branch cut.
        assert!((principal_angle(Complex::new(-1.0, 0.0)) - PI).abs() < 1e-12);
        assert!(principal_angle(Complex::new(1.0, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn stabilize_rounds_half_away_from_zero() {
        let z = stabilize(Complex::new(2.5, -2.5));
        assert_eq!(z.re, 3.0);
        assert_eq!(z.im, -3.0);
        let z = stabilize(Complex::new(79999.6, -0.4));
        assert_eq!(z.re, 80000.0);
        assert_eq!(z.im, -0.0);
    }

    #[test]
    fn direct_tangent_angle_for_target_straight_up() {
        // Straight up the tangent line leaves the start point itself.
        let angle = direct_tangent_angle(0.0, 0.0, 0.0, 2.0, 1.0);
        assert!(angle.abs() < 1e-9);
    }

    #[test]
    fn double_arc_gamma_matches_tangency_geometry() {
        // At scales where the stabilization is negligible, the pivot derived
        // from gamma sits exactly one radius away from the target: the
        // second arc passes through it.
        let r = 200.0;
        for &(xn, yn) in &[(180.0, 60.0), (100.0, 100.0), (240.0, 40.0)] {
            let gamma = double_arc_gamma(0.0, 0.0, xn, yn, r);
            let px = -r + 2.0 * r * gamma.cos();
            let py = -2.0 * r * gamma.sin();
            let dist = ((xn - px).powi(2) + (yn - py).powi(2)).sqrt();
            assert!(
                (dist - r).abs() < 1e-6 * r,
                "pivot distance {} for target ({}, {})",
                dist,
                xn,
                yn
            );
        }
    }
}
