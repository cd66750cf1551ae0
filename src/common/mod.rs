//! Common utilities and types for the steering solver

/// Common types used across the codebase
pub mod types {
    /// A 2D point
    pub type Point2D = (f64, f64);

    /// A 2D pose (x, y, theta)
    pub type Pose2D = (f64, f64, f64);
}

/// Euclidean distance between two planar points
pub fn distance(a: types::Point2D, b: types::Point2D) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
