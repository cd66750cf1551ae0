//! Query classification: quadrant and geometric maneuver selection.
//!
//! The thresholds are the turning radius `r` (can the relevant osculating
//! circle reach the target with a tangent line?) and `sqrt(5) * r` (is the
//! opposite circle far enough for an external bitangent?). Targets inside
//! both thresholds are boxed in between the circles and need two arcs of
//! opposite curvature.

use crate::common::distance;

/// Quadrant of the target relative to the start position, by the signs of
/// `(xn - x0, yn - y0)`. Ties resolve to the first match in Q1..Q4 order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// `(+, +)`
    Q1,
    /// `(-, +)`
    Q2,
    /// `(-, -)`
    Q3,
    /// `(+, -)`
    Q4,
}

/// Geometric maneuver family for one query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManeuverCase {
    /// One arc on the near osculating circle, then a straight tangent line
    DirectTangent,
    /// Go-around: external bitangent involving the opposite circle
    Bitangent,
    /// Two arcs of opposite curvature joined at a tangency point
    DoubleArc,
}

/// Result of classifying one query
#[derive(Clone, Copy, Debug)]
pub struct Classification {
    pub quadrant: Quadrant,
    pub maneuver: ManeuverCase,
    /// Distance from the target to the right circle center `(x0 + r, y0)`
    pub d1: f64,
    /// Distance from the target to the left circle center `(x0 - r, y0)`
    pub d2: f64,
}

/// Classify a reference-frame query into a quadrant and maneuver case.
///
/// The maneuver guards are evaluated in order: direct tangent, bitangent,
/// double arc. The double-arc branch is the catch-all, which keeps the
/// classification total and resolves threshold-boundary ties
/// deterministically (an exact `d1 == r` hit still satisfies the inclusive
/// direct-tangent guard and is taken there).
pub fn classify(x0: f64, y0: f64, xn: f64, yn: f64, r: f64) -> Classification {
    let d1 = distance((xn, yn), (x0 + r, y0));
    let d2 = distance((xn, yn), (x0 - r, y0));
    let bitangent_reach = 5.0f64.sqrt() * r;

    let quadrant = if xn >= x0 && yn >= y0 {
        Quadrant::Q1
    } else if xn <= x0 && yn >= y0 {
        Quadrant::Q2
    } else if xn <= x0 && yn <= y0 {
        Quadrant::Q3
    } else {
        Quadrant::Q4
    };

    let maneuver = match quadrant {
        Quadrant::Q1 => {
            if d1 >= r && (yn >= y0 + r || xn < x0 + r) {
                ManeuverCase::DirectTangent
            } else if d2 >= bitangent_reach && yn < y0 + r && xn > x0 + r {
                ManeuverCase::Bitangent
            } else {
                ManeuverCase::DoubleArc
            }
        }
        Quadrant::Q2 => {
            if d2 >= r && (yn >= y0 + r || xn > x0 - r) {
                ManeuverCase::DirectTangent
            } else if d1 >= bitangent_reach && yn <= y0 + r && xn < x0 - r {
                ManeuverCase::Bitangent
            } else {
                ManeuverCase::DoubleArc
            }
        }
        Quadrant::Q3 => {
            if d2 >= r && (yn <= y0 - r || xn > x0 - r) {
                ManeuverCase::DirectTangent
            } else if d1 >= bitangent_reach && yn >= y0 - r && xn < x0 - r {
                ManeuverCase::Bitangent
            } else {
                ManeuverCase::DoubleArc
            }
        }
        Quadrant::Q4 => {
            if d1 >= r && (yn <= y0 - r || xn < x0 + r) {
                ManeuverCase::DirectTangent
            } else if d2 >= bitangent_reach && yn >= y0 - r && xn > x0 + r {
                ManeuverCase::Bitangent
            } else {
                ManeuverCase::DoubleArc
            }
        }
    };

    Classification {
        quadrant,
        maneuver,
        d1,
        d2,
    }
}
