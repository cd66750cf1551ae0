//! Steering-angle solver for a fixed minimum turning radius.
//!
//! The two osculating circles of radius `r`, tangent to the reference heading
//! at the start position and centered at `(x0 +/- r, y0)`, define the two
//! available turning directions. [`OmegaSolver::omega`] classifies the target
//! against both circles, invokes the matching closed-form case solver on
//! canonicalized (reflected) coordinates, and applies the per-quadrant
//! combination of the result with the reference heading.

pub mod cases;
pub mod classify;
pub mod frame;

use std::f64::consts::{FRAC_PI_2, PI};

use self::cases::{bitangent_angle, direct_tangent_angle, double_arc_gamma};
use self::classify::{classify, ManeuverCase, Quadrant};
use crate::common::types::Pose2D;

/// Fixed reference heading in the local frame: the start pose points
/// straight up. Case solvers and the combination rules are written against
/// this constant, not a hidden literal.
pub const REFERENCE_HEADING: f64 = FRAC_PI_2;

/// Stateless closed-form steering solver.
///
/// Every query is a pure function of its scalar inputs; the solver holds no
/// state and is trivially safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OmegaSolver;

impl OmegaSolver {
    /// Create a new solver
    pub fn new() -> Self {
        OmegaSolver
    }

    /// Steering direction (radians, local x axis = 0) that places a single
    /// constant-curvature arc of radius `r`, or a tangent pair of such arcs,
    /// through `(xn, yn)`. The target must already be expressed in the
    /// reference frame; a target straight ahead yields [`REFERENCE_HEADING`].
    ///
    /// Requires `r > 0`; degenerate geometry is not validated and propagates
    /// as NaN/Inf.
    pub fn omega(&self, x0: f64, y0: f64, xn: f64, yn: f64, r: f64) -> f64 {
        let class = classify(x0, y0, xn, yn, r);
        match (class.quadrant, class.maneuver) {
            (Quadrant::Q1, ManeuverCase::DirectTangent) => {
                REFERENCE_HEADING - direct_tangent_angle(x0, y0, xn, yn, r)
            }
            (Quadrant::Q1, ManeuverCase::Bitangent) => {
                REFERENCE_HEADING - (PI - bitangent_angle(x0, y0, xn, yn, r))
            }
            (Quadrant::Q1, ManeuverCase::DoubleArc) => {
                let gamma = double_arc_gamma(x0, y0, xn, yn, r);
                let px = (x0 - r) + 2.0 * r * gamma.cos();
                let py = y0 - 2.0 * r * gamma.sin();
                REFERENCE_HEADING - (PI - (yn - py).atan2(xn - px))
            }
            (Quadrant::Q2, ManeuverCase::DirectTangent) => {
                REFERENCE_HEADING + direct_tangent_angle(xn, y0, x0, yn, r)
            }
            (Quadrant::Q2, ManeuverCase::Bitangent) => {
                REFERENCE_HEADING + (PI - bitangent_angle(xn, y0, x0, yn, r))
            }
            (Quadrant::Q2, ManeuverCase::DoubleArc) => {
                let gamma = double_arc_gamma(xn, y0, x0, yn, r);
                let px = (x0 + r) + 2.0 * r * (PI - gamma).cos();
                let py = y0 - 2.0 * r * (PI - gamma).sin();
                REFERENCE_HEADING + (yn - py).atan2(xn - px)
            }
            (Quadrant::Q3, ManeuverCase::DirectTangent) => {
                REFERENCE_HEADING - direct_tangent_angle(xn, yn, x0, y0, r)
            }
            (Quadrant::Q3, ManeuverCase::Bitangent) => {
                REFERENCE_HEADING - (PI - bitangent_angle(xn, yn, x0, y0, r))
            }
            (Quadrant::Q3, ManeuverCase::DoubleArc) => {
                let gamma = double_arc_gamma(xn, yn, x0, y0, r);
                let px = (x0 + r) + 2.0 * r * (PI - gamma).cos();
                let py = y0 + 2.0 * r * (PI - gamma).sin();
                REFERENCE_HEADING + (yn - py).atan2(xn - px)
            }
            (Quadrant::Q4, ManeuverCase::DirectTangent) => {
                REFERENCE_HEADING + direct_tangent_angle(x0, yn, xn, y0, r)
            }
            (Quadrant::Q4, ManeuverCase::Bitangent) => {
                REFERENCE_HEADING + (PI - bitangent_angle(x0, yn, xn, y0, r))
            }
            (Quadrant::Q4, ManeuverCase::DoubleArc) => {
                let gamma = double_arc_gamma(x0, yn, xn, y0, r);
                let px = (x0 - r) + 2.0 * r * gamma.cos();
                let py = y0 + 2.0 * r * gamma.sin();
                REFERENCE_HEADING + (PI + (yn - py).atan2(xn - px))
            }
        }
    }

    /// Same query with the target in world coordinates and the full start
    /// pose `(x0, y0, theta)`; `offset` selects the quarter-turn-relative
    /// orientation convention of the frame transform.
    pub fn omega_oriented(&self, start: Pose2D, xf: f64, yf: f64, r: f64, offset: bool) -> f64 {
        let (x0, y0, theta) = start;
        let (xn, yn) = frame::to_reference_frame(x0, y0, xf, yf, theta, offset);
        self.omega(x0, y0, xn, yn, r)
    }
}
