//! Log-log least-squares fit of the box-counting scaling law
//!
//! With counts following `N(ε) ≈ exp(intercept) * ε^(-D)`, regressing
//! `ln N` on `-ln ε` makes the slope the dimension estimate directly. The
//! problem has two unknowns, so the closed-form simple-regression formulas
//! are used rather than a general solver.

use crate::io::error::{Result, computation_error, invalid_parameter};

/// Fitted scaling-law parameters
///
/// The independent variable is encoded as `-ln ε`, so `dimension` is the raw
/// regression slope and is non-negative for any physically meaningful mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    /// Estimated box-counting dimension (the regression slope)
    pub dimension: f64,
    /// Regression intercept; `exp(intercept)` scales the fitted power law
    pub intercept: f64,
}

impl PowerLawFit {
    /// Evaluate the fitted count prediction at a box size
    pub fn predicted_count(&self, box_size: u32) -> f64 {
        (self.intercept - self.dimension * f64::from(box_size).ln()).exp()
    }
}

/// Fit `ln N` against `-ln ε` by ordinary least squares
///
/// Zero-count policy: a trailing run of zero counts (the largest box sizes)
/// is excluded before fitting, since a sparse mask can leave coarse boxes
/// empty without invalidating the scaling range below them. A zero count
/// anywhere before that tail is an error.
///
/// # Errors
///
/// Returns an error if the slices differ in length, fewer than two usable
/// samples remain after tail exclusion, a non-trailing count is zero, the
/// box sizes contain fewer than two distinct values, or the fit produces a
/// non-finite result.
pub fn fit_power_law(box_sizes: &[u32], counts: &[usize]) -> Result<PowerLawFit> {
    if box_sizes.len() != counts.len() {
        return Err(invalid_parameter(
            "counts",
            &counts.len(),
            &format!("expected one count per box size ({})", box_sizes.len()),
        ));
    }

    let usable = counts
        .iter()
        .rposition(|&n| n > 0)
        .map_or(0, |last| last + 1);

    if usable < 2 {
        return Err(computation_error(
            "log-log fit",
            &"at least two box sizes with non-zero counts are required",
        ));
    }

    let sizes = box_sizes.get(..usable).unwrap_or_default();
    let kept = counts.get(..usable).unwrap_or_default();

    if let Some(position) = kept.iter().position(|&n| n == 0) {
        return Err(computation_error(
            "log-log fit",
            &format!("count is zero at box size index {position}, inside the scaling range"),
        ));
    }

    let n = sizes.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for (&epsilon, &count) in sizes.iter().zip(kept) {
        sum_x += -f64::from(epsilon).ln();
        sum_y += (count as f64).ln();
    }
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (&epsilon, &count) in sizes.iter().zip(kept) {
        let dx = -f64::from(epsilon).ln() - mean_x;
        let dy = (count as f64).ln() - mean_y;
        covariance = dx.mul_add(dy, covariance);
        variance = dx.mul_add(dx, variance);
    }

    // Duplicate box sizes collapse the abscissa and make the slope undefined
    if variance <= f64::EPSILON {
        return Err(computation_error(
            "log-log fit",
            &"box sizes must contain at least two distinct values",
        ));
    }

    let dimension = covariance / variance;
    let intercept = dimension.mul_add(-mean_x, mean_y);

    if !dimension.is_finite() || !intercept.is_finite() {
        return Err(computation_error(
            "log-log fit",
            &"regression produced a non-finite result",
        ));
    }

    Ok(PowerLawFit {
        dimension,
        intercept,
    })
}
