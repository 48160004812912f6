//! Classic comparison sorts plus counting sort.
//!
//! Every function copies its input and returns the sorted copy; the input
//! slice is never touched.
//!
//! | Function           | Time (avg)   | Stable | Notes                              |
//! |--------------------|--------------|--------|------------------------------------|
//! | [`bubble_sort`]    | O(n²)        | yes    | stops after a pass with no swaps   |
//! | [`selection_sort`] | O(n²)        | no     |                                    |
//! | [`insertion_sort`] | O(n²)        | yes    | O(n) on sorted input               |
//! | [`merge_sort`]     | O(n log n)   | yes    | top-down, O(n) scratch             |
//! | [`quick_sort`]     | O(n log n)   | no     | Lomuto partition, last-element pivot |
//! | [`heap_sort`]      | O(n log n)   | no     | in-place max-heap                  |
//! | [`counting_sort`]  | O(n + k)     | yes    | non-negative integers only         |

use crate::error::{DsError, Result};

/// Repeated adjacent swaps; exits early once a pass makes no swap.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut v = input.to_vec();
    let n = v.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    v
}

pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut v = input.to_vec();
    let n = v.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if v[j] < v[min] {
                min = j;
            }
        }
        v.swap(i, min);
    }
    v
}

pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut v = input.to_vec();
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
    v
}

/// Top-down merge sort. Equal elements keep their input order.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }
    out
}

/// Quicksort with Lomuto partitioning around the last element.
///
/// Already-sorted input hits the O(n²) worst case.
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut v = input.to_vec();
    quick_sort_in_place(&mut v);
    v
}

fn quick_sort_in_place<T: Ord>(v: &mut [T]) {
    // Recurse on the smaller side and loop on the larger to bound stack depth.
    let mut slice = v;
    while slice.len() > 1 {
        let p = partition(slice);
        let (left, rest) = std::mem::take(&mut slice).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort_in_place(left);
            slice = right;
        } else {
            quick_sort_in_place(right);
            slice = left;
        }
    }
}

fn partition<T: Ord>(v: &mut [T]) -> usize {
    let pivot = v.len() - 1;
    let mut store = 0;
    for j in 0..pivot {
        if v[j] <= v[pivot] {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, pivot);
    store
}

pub fn heap_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut v = input.to_vec();
    let n = v.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut v, n, i);
    }
    for end in (1..n).rev() {
        v.swap(0, end);
        sift_down(&mut v, end, 0);
    }
    v
}

fn sift_down<T: Ord>(v: &mut [T], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && v[left] > v[largest] {
            largest = left;
        }
        if right < len && v[right] > v[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        v.swap(root, largest);
        root = largest;
    }
}

/// Largest value [`counting_sort`] accepts.
pub const COUNTING_SORT_MAX_VALUE: i64 = (1 << 24) - 1;

/// Counting sort for non-negative integers.
///
/// Allocates one counter per value in `0..=max`, so it suits small ranges.
/// Any negative element fails the whole call with [`DsError::NegativeValue`];
/// a maximum above [`COUNTING_SORT_MAX_VALUE`] fails with
/// [`DsError::ValueTooLarge`] before anything is allocated.
pub fn counting_sort(input: &[i64]) -> Result<Vec<i64>> {
    if let Some(&value) = input.iter().find(|&&v| v < 0) {
        return Err(DsError::NegativeValue { value });
    }
    let Some(&max) = input.iter().max() else {
        return Ok(Vec::new());
    };
    if max > COUNTING_SORT_MAX_VALUE {
        return Err(DsError::ValueTooLarge {
            value: max,
            limit: COUNTING_SORT_MAX_VALUE,
        });
    }

    let mut counts = vec![0usize; max as usize + 1];
    for &v in input {
        counts[v as usize] += 1;
    }

    let mut out = Vec::with_capacity(input.len());
    for (value, &count) in counts.iter().enumerate() {
        out.extend(std::iter::repeat_n(value as i64, count));
    }
    Ok(out)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every comparison sort matches the standard library sort.
        #[test]
        #[cfg_attr(miri, ignore)]
        fn prop_sorts_match_std(input in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = input.clone();
            expected.sort();
            prop_assert_eq!(&bubble_sort(&input), &expected);
            prop_assert_eq!(&selection_sort(&input), &expected);
            prop_assert_eq!(&insertion_sort(&input), &expected);
            prop_assert_eq!(&merge_sort(&input), &expected);
            prop_assert_eq!(&quick_sort(&input), &expected);
            prop_assert_eq!(&heap_sort(&input), &expected);
        }

        /// Property: counting sort matches std sort on small non-negative values.
        #[test]
        #[cfg_attr(miri, ignore)]
        fn prop_counting_sort_matches_std(input in prop::collection::vec(0i64..500, 0..200)) {
            let mut expected = input.clone();
            expected.sort();
            prop_assert_eq!(counting_sort(&input), Ok(expected));
        }
    }
}
