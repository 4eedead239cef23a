//! Bit-packed binary occupancy mask

use bitvec::prelude::*;
use ndarray::Array2;
use std::fmt;

use crate::spatial::points::ForegroundPoints;

/// Row-major binary occupancy raster
///
/// Stores one bit per pixel, so masks the size of large photographs stay
/// small. Out-of-range accesses read as background and are ignored on write.
#[derive(Clone, Debug)]
pub struct BinaryMask {
    bits: BitVec,
    rows: u32,
    cols: u32,
}

impl BinaryMask {
    /// Create an all-background mask
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            bits: bitvec![0; (rows as usize) * (cols as usize)],
            rows,
            cols,
        }
    }

    /// Binarize an intensity raster: values below `threshold` become foreground
    ///
    /// Dark-is-foreground matches the usual convention for fractal scans on
    /// white backgrounds.
    pub fn from_intensities(intensities: &Array2<u8>, threshold: u8) -> Self {
        let (rows, cols) = intensities.dim();
        let mut mask = Self::new(rows as u32, cols as u32);

        for ((r, c), &value) in intensities.indexed_iter() {
            if value < threshold {
                mask.set(r as u32, c as u32, true);
            }
        }
        mask
    }

    /// Number of rows in the raster
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the raster
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Set one pixel's occupancy
    pub fn set(&mut self, row: u32, col: u32, occupied: bool) {
        if row < self.rows && col < self.cols {
            let index = (row as usize) * (self.cols as usize) + col as usize;
            self.bits.set(index, occupied);
        }
    }

    /// Test one pixel's occupancy
    pub fn get(&self, row: u32, col: u32) -> bool {
        if row < self.rows && col < self.cols {
            let index = (row as usize) * (self.cols as usize) + col as usize;
            self.bits.get(index).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Count foreground pixels
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if the mask has no foreground pixels
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract foreground coordinates in row-major order
    pub fn foreground_points(&self) -> ForegroundPoints {
        let mut point_rows = Vec::with_capacity(self.count_ones());
        let mut point_cols = Vec::with_capacity(self.count_ones());

        let width = self.cols.max(1) as usize;
        for index in self.bits.iter_ones() {
            point_rows.push((index / width) as u32);
            point_cols.push((index % width) as u32);
        }

        ForegroundPoints::from_mask_extraction(point_rows, point_cols, (self.rows, self.cols))
    }
}

impl fmt::Display for BinaryMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryMask({}x{}, {} foreground)",
            self.rows,
            self.cols,
            self.count_ones()
        )
    }
}
