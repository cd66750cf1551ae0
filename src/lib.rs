//! Closed-form steering geometry for a robot with a fixed minimum turning radius.
//!
//! Given a start pose and a target point, [`OmegaSolver`] answers a single
//! question: at what angle must the robot steer so that one constant-curvature
//! arc (or a pair of tangent arcs) of radius `r` passes through the target?
//! Every query is a case-selected algebraic expression: no search, no
//! iteration, no state between calls. Evaluated over a grid, the answers form
//! a scalar field usable as a reactive heading guide; [`field`] sweeps such a
//! grid and [`render`] turns it into a heatmap image with contour lines.

pub mod common;
pub mod error;
pub mod field;
pub mod render;
pub mod steering;

pub use crate::error::FieldError;
pub use crate::field::{FieldConfig, OmegaField};
pub use crate::steering::{OmegaSolver, REFERENCE_HEADING};
