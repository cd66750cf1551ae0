//! Frame transform: expresses a world-frame target in the start pose's
//! reference frame, where the heading points straight up.

use std::f64::consts::FRAC_PI_2;

/// Rotate `(xf, yf)` about `(x0, y0)` by the start orientation `theta` so the
/// result is expressed in the reference frame. When `offset` is set the
/// caller's orientation is already quarter-turn relative and the rotation is
/// by `theta - pi/2` instead.
///
/// Pure function, defined for all real inputs.
pub fn to_reference_frame(
    x0: f64,
    y0: f64,
    xf: f64,
    yf: f64,
    theta: f64,
    offset: bool,
) -> (f64, f64) {
    let t = if offset { theta - FRAC_PI_2 } else { theta };
    let (sin_t, cos_t) = t.sin_cos();
    let xn = (xf - x0) * cos_t + (yf - y0) * sin_t + x0;
    let yn = -(xf - x0) * sin_t + (yf - y0) * cos_t + y0;
    (xn, yn)
}
