/// Choose where to cut a contiguous run of items so both sides carry roughly
/// equal priority.
///
/// Returns the smallest `k` in `1..len` whose leading priority sum reaches half
/// the run's total, or `len - 1` if no earlier cut gets there. The run must hold
/// at least two items.
pub fn split_point(priorities: &[f64]) -> usize {
    debug_assert!(priorities.len() >= 2);
    let target = priorities.iter().sum::<f64>() / 2.0;

    let last = priorities.len() - 1;
    let mut running = 0.0;
    let mut k = 0;
    while running < target && k < last {
        running += priorities[k];
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::split_point;

    #[test]
    fn equal_pair_splits_in_the_middle() {
        assert_eq!(split_point(&[1.0, 1.0]), 1);
    }

    #[test]
    fn odd_run_keeps_the_larger_half_on_the_left() {
        // 1 < 1.5, 2 >= 1.5
        assert_eq!(split_point(&[1.0, 1.0, 1.0]), 2);
        assert_eq!(split_point(&[1.0; 4]), 2);
        assert_eq!(split_point(&[1.0; 5]), 3);
    }

    #[test]
    fn heavy_first_item_stands_alone() {
        assert_eq!(split_point(&[10.0, 1.0, 1.0, 1.0]), 1);
    }

    #[test]
    fn heavy_last_item_caps_at_len_minus_one() {
        assert_eq!(split_point(&[1.0, 1.0, 1.0, 100.0]), 3);
    }

    #[test]
    fn exact_half_stops_immediately() {
        assert_eq!(split_point(&[2.0, 1.0, 1.0]), 1);
    }
}
