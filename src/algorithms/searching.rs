//! Searches over slices.
//!
//! Everything except [`linear_search`] expects the slice sorted ascending.
//! A hit is reported as `Some(index)`; with duplicates, [`binary_search`]
//! and friends may return any matching index while [`find_first`] and
//! [`find_last`] pin down the ends of the run.

use std::cmp::Ordering;

/// Index of the first element equal to `target`; works on unsorted input.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Iterative binary search over `[lo, hi)`.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, items.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Recursive binary search; recursion depth is `O(log n)`.
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let mid = items.len() / 2;
    match items[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => binary_search_recursive(&items[..mid], target),
        Ordering::Less => {
            binary_search_recursive(&items[mid + 1..], target).map(|i| i + mid + 1)
        },
    }
}

/// Probes where `target` would sit if values were evenly spread.
///
/// Averages `O(log log n)` on uniform data and degrades to `O(n)` on skewed
/// data. Arithmetic is widened to `i128`, so extreme values cannot overflow.
pub fn interpolation_search(items: &[i64], target: i64) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0usize, items.len() - 1);
    while lo <= hi && target >= items[lo] && target <= items[hi] {
        if items[lo] == items[hi] {
            return (items[lo] == target).then_some(lo);
        }
        let span = i128::from(items[hi]) - i128::from(items[lo]);
        let offset = (i128::from(target) - i128::from(items[lo])) * (hi - lo) as i128 / span;
        let pos = lo + offset as usize;
        match items[pos].cmp(&target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => lo = pos + 1,
            // items[lo] <= target, so pos > lo here
            Ordering::Greater => hi = pos - 1,
        }
    }
    None
}

/// Doubles a bound until it passes `target`, then binary searches the last
/// doubling interval.
pub fn exponential_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let first = items.first()?;
    if first == target {
        return Some(0);
    }
    let mut bound = 1;
    while bound < items.len() && items[bound] < *target {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = (bound + 1).min(items.len());
    binary_search(&items[lo..hi], target).map(|i| i + lo)
}

/// Scans blocks of `floor(sqrt(n))` elements, then walks the block that can
/// hold `target`.
pub fn jump_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let n = items.len();
    if n == 0 {
        return None;
    }
    let step = n.isqrt().max(1);
    let mut start = 0;
    let mut end = step.min(n);
    while items[end - 1] < *target {
        start = end;
        if start >= n {
            return None;
        }
        end = (end + step).min(n);
    }
    (start..end).find(|&i| items[i] == *target)
}

/// Splits `[lo, hi)` at two probes and keeps one of the three parts.
pub fn ternary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, items.len());
    while lo < hi {
        let third = (hi - lo) / 3;
        let m1 = lo + third;
        let m2 = hi - 1 - third;
        if items[m1] == *target {
            return Some(m1);
        }
        if items[m2] == *target {
            return Some(m2);
        }
        if *target < items[m1] {
            hi = m1;
        } else if *target > items[m2] {
            lo = m2 + 1;
        } else {
            lo = m1 + 1;
            hi = m2;
        }
    }
    None
}

/// Lowest index holding `target`.
pub fn find_first<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, items.len());
    let mut found = None;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                hi = mid;
            },
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    found
}

/// Highest index holding `target`.
pub fn find_last<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, items.len());
    let mut found = None;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            },
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    found
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: on sorted unique input every search agrees with std.
        #[test]
        #[cfg_attr(miri, ignore)]
        fn prop_searches_agree_on_unique_sorted(
            set in prop::collection::btree_set(-1000i64..1000, 0..100),
            target in -1100i64..1100
        ) {
            let items: Vec<i64> = set.into_iter().collect();
            let expected = items.binary_search(&target).ok();

            prop_assert_eq!(binary_search(&items, &target), expected);
            prop_assert_eq!(binary_search_recursive(&items, &target), expected);
            prop_assert_eq!(interpolation_search(&items, target), expected);
            prop_assert_eq!(exponential_search(&items, &target), expected);
            prop_assert_eq!(jump_search(&items, &target), expected);
            prop_assert_eq!(ternary_search(&items, &target), expected);
        }

        /// Property: find_first/find_last bound the run of equal values.
        #[test]
        #[cfg_attr(miri, ignore)]
        fn prop_first_last_bound_runs(
            mut items in prop::collection::vec(0u8..10, 0..80),
            target in 0u8..10
        ) {
            items.sort();
            let first = items.iter().position(|&v| v == target);
            let last = items.iter().rposition(|&v| v == target);
            prop_assert_eq!(find_first(&items, &target), first);
            prop_assert_eq!(find_last(&items, &target), last);
        }
    }
}
