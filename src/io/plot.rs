//! Log-log chart rendering for count sequences and fitted scaling laws
//!
//! Renders a minimal log-log scatter of (ε, N(ε)) with the fitted power law
//! overlaid, straight to a PNG. Both axes are logarithmic, so an exact power
//! law appears as a straight line through the markers.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::regression::PowerLawFit;
use crate::io::configuration::{
    AXIS_COLOR, FIT_LINE_COLOR, MARKER_COLOR, MARKER_RADIUS, PLOT_BACKGROUND, PLOT_HEIGHT,
    PLOT_MARGIN, PLOT_WIDTH,
};
use crate::io::error::{BoxCountError, Result, invalid_parameter};

// Log-space ranges of the plotted data, padded so markers stay inside the frame
struct LogExtents {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl LogExtents {
    fn from_data(box_sizes: &[u32], counts: &[usize], fit: &PowerLawFit) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for (&epsilon, &count) in box_sizes.iter().zip(counts) {
            let x = f64::from(epsilon).ln();
            let y = (count.max(1) as f64).ln();
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y.min(fit.predicted_count(epsilon).max(1e-12).ln()));
            y_max = y_max.max(y.max(fit.predicted_count(epsilon).max(1e-12).ln()));
        }

        // Flat data still needs a drawable span
        if (x_max - x_min).abs() < 1e-12 {
            x_min -= 0.5;
            x_max += 0.5;
        }
        if (y_max - y_min).abs() < 1e-12 {
            y_min -= 0.5;
            y_max += 0.5;
        }

        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let inner_width = f64::from(PLOT_WIDTH - 2 * PLOT_MARGIN);
        let inner_height = f64::from(PLOT_HEIGHT - 2 * PLOT_MARGIN);

        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);

        // Pixel rows grow downward, log-count grows upward
        let px = fx.mul_add(inner_width, f64::from(PLOT_MARGIN));
        let py = (1.0 - fy).mul_add(inner_height, f64::from(PLOT_MARGIN));
        (px.round() as i64, py.round() as i64)
    }
}

fn draw_pixel(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 4]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgba(color));
    }
}

fn draw_marker(img: &mut RgbaImage, cx: i64, cy: i64, color: [u8; 4]) {
    let radius = i64::from(MARKER_RADIUS);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            draw_pixel(img, cx + dx, cy + dy, color);
        }
    }
}

// Integer line rasterization, stepping along the longer axis
fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: [u8; 4]) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = ((x1 - x0) as f64).mul_add(t, x0 as f64).round() as i64;
        let y = ((y1 - y0) as f64).mul_add(t, y0 as f64).round() as i64;
        draw_pixel(img, x, y, color);
    }
}

fn draw_axes(img: &mut RgbaImage) {
    let left = i64::from(PLOT_MARGIN);
    let right = i64::from(PLOT_WIDTH - PLOT_MARGIN);
    let top = i64::from(PLOT_MARGIN);
    let bottom = i64::from(PLOT_HEIGHT - PLOT_MARGIN);

    draw_line(img, (left, bottom), (right, bottom), AXIS_COLOR);
    draw_line(img, (left, top), (left, bottom), AXIS_COLOR);
}

/// Render the count sequence and fitted line as a log-log PNG chart
///
/// # Errors
///
/// Returns an error if the inputs are empty or mismatched, the parent
/// directory cannot be created, or the PNG cannot be written.
pub fn export_loglog_plot(
    box_sizes: &[u32],
    counts: &[usize],
    fit: &PowerLawFit,
    output_path: &Path,
) -> Result<()> {
    if box_sizes.is_empty() || box_sizes.len() != counts.len() {
        return Err(invalid_parameter(
            "counts",
            &counts.len(),
            &"plot requires equal, non-empty size and count sequences",
        ));
    }

    let mut img = ImageBuffer::from_pixel(PLOT_WIDTH, PLOT_HEIGHT, Rgba(PLOT_BACKGROUND));
    let extents = LogExtents::from_data(box_sizes, counts, fit);

    draw_axes(&mut img);

    // Fitted line first so markers stay visible on top of it
    let mut previous: Option<(i64, i64)> = None;
    for &epsilon in box_sizes {
        let x = f64::from(epsilon).ln();
        let y = fit.predicted_count(epsilon).max(1e-12).ln();
        let pixel = extents.to_pixel(x, y);
        if let Some(last) = previous {
            draw_line(&mut img, last, pixel, FIT_LINE_COLOR);
        }
        previous = Some(pixel);
    }

    for (&epsilon, &count) in box_sizes.iter().zip(counts) {
        let x = f64::from(epsilon).ln();
        let y = (count.max(1) as f64).ln();
        let (px, py) = extents.to_pixel(x, y);
        draw_marker(&mut img, px, py, MARKER_COLOR);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| BoxCountError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| BoxCountError::PlotExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_inputs_are_rejected() {
        let fit = PowerLawFit {
            dimension: 1.0,
            intercept: 0.0,
        };
        let result = export_loglog_plot(&[1, 2], &[4], &fit, Path::new("unused.png"));
        assert!(result.is_err());
    }

    #[test]
    fn pixel_mapping_keeps_data_inside_the_frame() {
        let fit = PowerLawFit {
            dimension: 2.0,
            intercept: 256f64.ln(),
        };
        let sizes = [1u32, 2, 4, 8, 16];
        let counts = [256usize, 64, 16, 4, 1];
        let extents = LogExtents::from_data(&sizes, &counts, &fit);

        for (&epsilon, &count) in sizes.iter().zip(&counts) {
            let (px, py) = extents.to_pixel(f64::from(epsilon).ln(), (count as f64).ln());
            assert!(px >= i64::from(PLOT_MARGIN));
            assert!(px <= i64::from(PLOT_WIDTH - PLOT_MARGIN));
            assert!(py >= i64::from(PLOT_MARGIN));
            assert!(py <= i64::from(PLOT_HEIGHT - PLOT_MARGIN));
        }
    }
}
