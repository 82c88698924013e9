//! Day allocation across destinations

/// Split `total_days` across `count` destinations.
///
/// Every destination gets the floor share; the remainder goes to the
/// earliest destinations one day each, so the result always sums to
/// `total_days`.
#[must_use]
pub fn allocate_days(total_days: u32, count: usize) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }

    let count = count as u32;
    let base = total_days / count;
    let remainder = total_days % count;

    (0..count)
        .map(|idx| base + u32::from(idx < remainder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(7, 3, vec![3, 2, 2])]
    #[case(6, 3, vec![2, 2, 2])]
    #[case(7, 1, vec![7])]
    #[case(2, 3, vec![1, 1, 0])]
    #[case(0, 2, vec![0, 0])]
    #[case(10, 4, vec![3, 3, 2, 2])]
    fn test_allocates_expected_shares(
        #[case] total_days: u32,
        #[case] count: usize,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(allocate_days(total_days, count), expected);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(7, 3)]
    #[case(13, 5)]
    #[case(30, 7)]
    fn test_allocation_sums_to_total(#[case] total_days: u32, #[case] count: usize) {
        let allocation = allocate_days(total_days, count);
        assert_eq!(allocation.len(), count);
        assert_eq!(allocation.iter().sum::<u32>(), total_days);
    }

    #[test]
    fn test_no_destinations() {
        assert!(allocate_days(7, 0).is_empty());
    }
}
