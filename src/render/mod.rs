//! Heatmap rendering for steering fields.
//!
//! Normalizes a field to [0, 1], maps it through a jet colormap and overlays
//! 30 iso-value contour lines in black before writing a raster image. The
//! input is expected to be a rectangular array of doubles; NaN values are
//! rendering-undefined (they come out as corrupted pixels, matching the
//! solver's contract that degenerate queries are not validated).

use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use crate::error::{FieldError, Result};

const CONTOUR_LEVELS: usize = 30;
const CONTOUR_BAND: f64 = 0.002;

/// Jet colormap over a normalized value in [0, 1]
pub fn jet_color(value: f64) -> Rgb<u8> {
    let color_index = (255.0 * value) as i32;
    let (r, g, b) = if color_index < 32 {
        (0.0, 0.0, 0.5156 + 0.0156 * color_index as f64)
    } else if color_index < 96 {
        (0.0, 0.0156 + 0.9844 * (color_index as f64 - 32.0) / 64.0, 1.0)
    } else if color_index < 158 {
        (
            0.0156 + (color_index as f64 - 96.0) / 64.0,
            1.0,
            0.9844 - (color_index as f64 - 96.0) / 64.0,
        )
    } else if color_index < 223 {
        (1.0, 1.0 - (color_index as f64 - 158.0) / 65.0, 0.0)
    } else {
        ((2.0 - (color_index as f64 - 223.0) / 32.0) / 2.0, 0.0, 0.0)
    };
    Rgb([
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    ])
}

/// Render a column-major field into a heatmap with contour lines
pub fn render_field(values: &[Vec<f64>]) -> Result<RgbImage> {
    let nx = values.len();
    if nx == 0 || values[0].is_empty() {
        return Err(FieldError::EmptyField);
    }
    let ny = values[0].len();

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for column in values {
        for &v in column {
            if v > max {
                max = v;
            }
            if v < min {
                min = v;
            }
        }
    }
    if !(max > min) {
        return Err(FieldError::FlatField);
    }
    let range = max - min;

    let mut image = RgbImage::new(nx as u32, ny as u32);
    for i in 0..nx {
        for j in 0..ny {
            let normalized = (values[i][j] - min) / range;
            image.put_pixel(i as u32, j as u32, jet_color(normalized));
        }
    }

    // Iso-value contour lines: mark every cell within a narrow band of a level.
    let step = range / CONTOUR_LEVELS as f64;
    let mut level = min;
    while level <= max {
        for i in 0..nx {
            for j in 0..ny {
                if (values[i][j] - level).abs() <= CONTOUR_BAND * range {
                    image.put_pixel(i as u32, j as u32, Rgb([0, 0, 0]));
                }
            }
        }
        level += step;
    }

    Ok(image)
}

/// Render a field and write it as an image file
pub fn save_field_image<P: AsRef<Path>>(values: &[Vec<f64>], path: P) -> Result<()> {
    let image = render_field(values)?;
    image.save(&path)?;
    info!("wrote field image to {}", path.as_ref().display());
    Ok(())
}
