//! Box-size ladder generation

/// Generate the default power-of-two box-size ladder for an image
///
/// Sizes ascend from 1 to the smallest power of two covering the larger
/// image dimension, so the coarsest grid is a single box over the whole
/// raster. Degenerate shapes still yield `[1]`.
pub fn power_of_two_sizes(rows: u32, cols: u32) -> Vec<u32> {
    let max_len = rows.max(cols).max(1);
    let top = max_len.next_power_of_two();

    let mut sizes = Vec::new();
    let mut epsilon = 1u32;
    loop {
        sizes.push(epsilon);
        if epsilon >= top {
            break;
        }
        epsilon *= 2;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_covers_power_of_two_image_exactly() {
        assert_eq!(power_of_two_sizes(4, 4), vec![1, 2, 4]);
        assert_eq!(power_of_two_sizes(16, 8), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn ladder_rounds_up_to_next_power_of_two() {
        assert_eq!(power_of_two_sizes(5, 3), vec![1, 2, 4, 8]);
        assert_eq!(power_of_two_sizes(1, 100), vec![1, 2, 4, 8, 16, 32, 64, 128]);
    }

    #[test]
    fn degenerate_shape_yields_unit_ladder() {
        assert_eq!(power_of_two_sizes(0, 0), vec![1]);
        assert_eq!(power_of_two_sizes(1, 1), vec![1]);
    }
}
