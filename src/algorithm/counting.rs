//! Occupied-box counting over foreground pixel coordinates
//!
//! For each box size ε the image is tiled by an ε×ε grid and the number of
//! distinct grid cells containing at least one foreground pixel is counted.
//! Each (`box_row`, `box_col`) pair is packed into a single `u64` cell
//! identifier so distinct cells can be counted with one sort-and-dedup pass
//! over a scratch buffer reused across sizes.

use crate::io::error::{BoxCountError, Result, invalid_parameter};
use crate::spatial::points::ForegroundPoints;

/// Count the distinct occupied grid cells at each box size
///
/// Returns one count per entry of `box_sizes`, in the same order. When each
/// size divides the next, as in the default power-of-two ladder, counts are
/// non-increasing as the box size grows: every coarser box is then a union
/// of finer ones. Sizes without that nesting are still accepted, but their
/// origin-anchored grids are independent, and a coarser grid can split two
/// pixels that shared a finer box, so no ordering holds between their
/// counts.
///
/// An empty foreground set is rejected rather than mapped to zero counts,
/// since zero counts have no defined logarithm downstream.
///
/// # Errors
///
/// Returns an error if any box size is zero or the foreground set is empty.
/// Box sizes are validated before any counting work begins.
pub fn count_occupied_boxes(points: &ForegroundPoints, box_sizes: &[u32]) -> Result<Vec<usize>> {
    if let Some(&bad) = box_sizes.iter().find(|&&epsilon| epsilon == 0) {
        return Err(invalid_parameter(
            "box_size",
            &bad,
            &"box sizes must be positive",
        ));
    }
    if points.is_empty() {
        return Err(BoxCountError::InvalidSourceData {
            reason: "foreground coordinate set must contain at least one pixel".to_string(),
        });
    }

    let (rows, _) = points.shape();
    let mut counts = Vec::with_capacity(box_sizes.len());
    let mut cells: Vec<u64> = Vec::with_capacity(points.len());

    for &epsilon in box_sizes {
        counts.push(count_at_size(points, epsilon, rows, &mut cells));
    }

    Ok(counts)
}

// The multiplier ceil(rows/ε) strictly exceeds every possible box_row, so
// box_col * ceil(rows/ε) + box_row is injective over valid grid cells. Both
// factors fit in u32, so the u64 product cannot overflow.
fn count_at_size(points: &ForegroundPoints, epsilon: u32, rows: u32, cells: &mut Vec<u64>) -> usize {
    let row_cells = u64::from(rows.div_ceil(epsilon));

    cells.clear();
    for (&r, &c) in points.rows().iter().zip(points.cols()) {
        let box_row = u64::from(r / epsilon);
        let box_col = u64::from(c / epsilon);
        cells.push(box_col * row_cells + box_row);
    }

    cells.sort_unstable();
    cells.dedup();
    cells.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(rows: Vec<u32>, cols: Vec<u32>, shape: (u32, u32)) -> ForegroundPoints {
        ForegroundPoints::new(rows, cols, shape).expect("valid test coordinates")
    }

    #[test]
    fn single_pixel_occupies_one_box_at_every_size() {
        let points = points(vec![0], vec![0], (4, 4));
        let counts = count_occupied_boxes(&points, &[1, 2, 4]).expect("counting failed");
        assert_eq!(counts, vec![1, 1, 1]);
    }

    #[test]
    fn full_grid_matches_ceiling_product() {
        let (rows, cols) = (4u32, 4u32);
        let mut rs = Vec::new();
        let mut cs = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                rs.push(r);
                cs.push(c);
            }
        }
        let points = points(rs, cs, (rows, cols));
        let counts = count_occupied_boxes(&points, &[1, 2, 4]).expect("counting failed");
        assert_eq!(counts, vec![16, 4, 1]);
    }

    #[test]
    fn full_grid_with_non_divisible_size_uses_ceiling() {
        let (rows, cols) = (5u32, 3u32);
        let mut rs = Vec::new();
        let mut cs = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                rs.push(r);
                cs.push(c);
            }
        }
        let points = points(rs, cs, (rows, cols));
        let counts = count_occupied_boxes(&points, &[2]).expect("counting failed");
        // ceil(5/2) * ceil(3/2)
        assert_eq!(counts, vec![6]);
    }

    #[test]
    fn counts_are_monotonically_non_increasing() {
        let points = points(
            vec![0, 1, 3, 6, 7, 7, 2, 5],
            vec![0, 2, 3, 1, 7, 0, 6, 5],
            (8, 8),
        );
        let counts = count_occupied_boxes(&points, &[1, 2, 4, 8]).expect("counting failed");
        for pair in counts.windows(2) {
            assert!(pair.first() >= pair.last(), "counts must not increase: {counts:?}");
        }
    }

    #[test]
    fn counts_are_non_increasing_for_non_dyadic_divisibility_chains() {
        // 1 | 3 | 6 | 12: each size divides the next, so the nesting
        // argument applies beyond powers of two
        let points = points(
            vec![0, 2, 5, 7, 10, 11, 4, 9],
            vec![11, 3, 8, 0, 6, 1, 4, 10],
            (12, 12),
        );
        let counts = count_occupied_boxes(&points, &[1, 3, 6, 12]).expect("counting failed");
        for pair in counts.windows(2) {
            assert!(pair.first() >= pair.last(), "counts must not increase: {counts:?}");
        }
    }

    #[test]
    fn non_nested_sizes_are_counted_on_independent_grids() {
        // Rows 4 and 7 share the size-4 box covering [4, 8) but fall into
        // the separate size-5 boxes [0, 5) and [5, 10); without divisibility
        // the coarser count may exceed the finer one.
        let points = points(vec![4, 7], vec![0, 0], (8, 1));
        let counts = count_occupied_boxes(&points, &[4, 5]).expect("counting failed");
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn counts_respect_upper_bounds() {
        let points = points(vec![0, 1, 2, 3, 4], vec![4, 3, 2, 1, 0], (5, 5));
        let counts = count_occupied_boxes(&points, &[1, 2, 3]).expect("counting failed");
        for (&epsilon, &count) in [1u32, 2, 3].iter().zip(&counts) {
            let grid_cells = (5u32.div_ceil(epsilon) * 5u32.div_ceil(epsilon)) as usize;
            assert!(count <= 5);
            assert!(count <= grid_cells);
        }
    }

    #[test]
    fn cell_encoding_is_collision_free_on_small_grids() {
        // Every pixel of a 7x5 image lands in its own cell at epsilon = 1, so
        // any identifier collision between distinct cells would shrink the
        // distinct count below the pixel total.
        for rows in 1..=7u32 {
            for cols in 1..=5u32 {
                let mut rs = Vec::new();
                let mut cs = Vec::new();
                for r in 0..rows {
                    for c in 0..cols {
                        rs.push(r);
                        cs.push(c);
                    }
                }
                let points = ForegroundPoints::new(rs, cs, (rows, cols))
                    .expect("valid test coordinates");
                let counts = count_occupied_boxes(&points, &[1]).expect("counting failed");
                assert_eq!(counts, vec![(rows * cols) as usize]);
            }
        }
    }

    #[test]
    fn distinct_columns_in_same_box_row_do_not_collide() {
        // Tall narrow image: box_row range is large relative to box_col, the
        // regime where a wrongly chosen multiplier would overlap identifiers.
        let points = points(vec![9, 9], vec![0, 1], (10, 2));
        let counts = count_occupied_boxes(&points, &[1]).expect("counting failed");
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn zero_box_size_is_rejected_before_counting() {
        let points = points(vec![0], vec![0], (4, 4));
        let result = count_occupied_boxes(&points, &[1, 0, 4]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_foreground_is_rejected_as_invalid_source_data() {
        let points = points(vec![], vec![], (4, 4));
        let result = count_occupied_boxes(&points, &[1, 2]);
        assert!(matches!(
            result,
            Err(BoxCountError::InvalidSourceData { .. })
        ));
    }
}
