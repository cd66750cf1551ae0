//! Steering-field generation: one solver query per grid cell.
//!
//! The field layer is a consumer of the solver, not part of it. It sweeps a
//! rectangular grid of targets around a fixed start pose and records the
//! world-frame steering direction for each cell, producing the scalar field
//! that the renderer turns into a heatmap.

use std::collections::HashMap;

use log::{debug, info};

use crate::error::{FieldError, Result};
use crate::steering::OmegaSolver;

/// Grid sweep parameters
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Start position x
    pub x0: f64,
    /// Start position y
    pub y0: f64,
    /// Grid width in cells
    pub nx: usize,
    /// Grid height in cells
    pub ny: usize,
    /// Minimum turning radius
    pub radius: f64,
    /// World-frame start orientation
    pub heading: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            x0: 500.0,
            y0: 500.0,
            nx: 1000,
            ny: 1000,
            radius: 200.0,
            heading: 0.0,
        }
    }
}

impl FieldConfig {
    /// Apply a parameter map, validating each entry
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(&radius) = params.get("radius") {
            if radius <= 0.0 {
                return Err(FieldError::Config(
                    "Turning radius must be positive".to_string(),
                ));
            }
            self.radius = radius;
        }

        if let Some(&nx) = params.get("nx") {
            if nx < 1.0 {
                return Err(FieldError::Config(
                    "Grid width must be at least one cell".to_string(),
                ));
            }
            self.nx = nx as usize;
        }

        if let Some(&ny) = params.get("ny") {
            if ny < 1.0 {
                return Err(FieldError::Config(
                    "Grid height must be at least one cell".to_string(),
                ));
            }
            self.ny = ny as usize;
        }

        if let Some(&x0) = params.get("x0") {
            self.x0 = x0;
        }

        if let Some(&y0) = params.get("y0") {
            self.y0 = y0;
        }

        if let Some(&heading) = params.get("heading") {
            self.heading = heading;
        }

        Ok(())
    }
}

/// Steering-direction field over a rectangular grid
pub struct OmegaField {
    config: FieldConfig,
}

impl OmegaField {
    /// Create a field generator for the given grid
    pub fn new(config: FieldConfig) -> Self {
        OmegaField { config }
    }

    /// Sweep the grid with one solver query per cell.
    ///
    /// Cell `(i, j)` in world coordinates is stored at `values[i][ny - 1 - j]`
    /// (column-major, y flipped so row 0 renders at the top of the image),
    /// and holds `omega + heading`: the steering direction back in the world
    /// frame.
    pub fn generate(&self, solver: &OmegaSolver) -> Vec<Vec<f64>> {
        let cfg = &self.config;
        debug!(
            "sweeping {}x{} grid, start ({}, {}), r = {}, heading = {:.4}",
            cfg.nx, cfg.ny, cfg.x0, cfg.y0, cfg.radius, cfg.heading
        );

        let mut values = vec![vec![0.0; cfg.ny]; cfg.nx];
        for i in 0..cfg.nx {
            for j in 0..cfg.ny {
                let omega = solver.omega_oriented(
                    (cfg.x0, cfg.y0, cfg.heading),
                    i as f64,
                    j as f64,
                    cfg.radius,
                    false,
                );
                values[i][cfg.ny - j - 1] = omega + cfg.heading;
            }
        }

        info!("generated steering field with {} cells", cfg.nx * cfg.ny);
        values
    }

    /// Grid configuration in use
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
