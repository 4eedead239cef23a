//! Validated foreground coordinate sets

use crate::io::error::{BoxCountError, Result};

/// Foreground pixel coordinates plus the image shape they index into
///
/// Row and column vectors are parallel: entry `i` of each names one
/// foreground pixel. The constructor enforces equal lengths and bounds, so
/// consumers can iterate without re-checking. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundPoints {
    rows: Vec<u32>,
    cols: Vec<u32>,
    shape: (u32, u32),
}

impl ForegroundPoints {
    /// Build a coordinate set, validating lengths, shape, and bounds
    ///
    /// An empty coordinate pair is accepted here so a blank mask remains
    /// representable; the counting stage rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`BoxCountError::InvalidSourceData`] if the vectors differ in
    /// length, the shape has a zero extent, or any coordinate falls outside
    /// the shape.
    pub fn new(rows: Vec<u32>, cols: Vec<u32>, shape: (u32, u32)) -> Result<Self> {
        if rows.len() != cols.len() {
            return Err(BoxCountError::InvalidSourceData {
                reason: format!(
                    "row and column vectors differ in length ({} rows, {} cols)",
                    rows.len(),
                    cols.len()
                ),
            });
        }
        if shape.0 == 0 || shape.1 == 0 {
            return Err(BoxCountError::InvalidSourceData {
                reason: format!("image shape {}x{} must have positive extents", shape.0, shape.1),
            });
        }
        if let Some(&bad) = rows.iter().find(|&&r| r >= shape.0) {
            return Err(BoxCountError::InvalidSourceData {
                reason: format!("row index {bad} exceeds image extent {}", shape.0),
            });
        }
        if let Some(&bad) = cols.iter().find(|&&c| c >= shape.1) {
            return Err(BoxCountError::InvalidSourceData {
                reason: format!("column index {bad} exceeds image extent {}", shape.1),
            });
        }

        Ok(Self { rows, cols, shape })
    }

    // Mask extraction produces coordinates that are in bounds by
    // construction, so validation is skipped.
    pub(crate) const fn from_mask_extraction(
        rows: Vec<u32>,
        cols: Vec<u32>,
        shape: (u32, u32),
    ) -> Self {
        Self { rows, cols, shape }
    }

    /// Row indices, one per foreground pixel
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Column indices, parallel to [`Self::rows`]
    pub fn cols(&self) -> &[u32] {
        &self.cols
    }

    /// Image shape as (rows, cols)
    pub const fn shape(&self) -> (u32, u32) {
        self.shape
    }

    /// Number of foreground pixels
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Test whether the set contains no pixels
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
