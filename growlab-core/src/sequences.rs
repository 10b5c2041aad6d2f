//! ## growlab-core::sequences
//! **Single-pass transformations over integer sequences**
//!
//! Every function here is pure and total: empty input yields a defined
//! empty (or `None`) result rather than a panic, and integer overflow is
//! reported as an error.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::SimulationError;

/// Returns an element of maximal multiplicity, or `None` for empty input.
///
/// Ties are not broken deterministically: any element whose count equals the
/// maximum may be returned.
pub fn most_frequent(numbers: &[i64]) -> Option<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::with_capacity(numbers.len());
    for &n in numbers {
        *counts.entry(n).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(value, _)| value)
}

/// Removes duplicates, keeping the first occurrence of each value in its
/// original position.
pub fn remove_duplicates(numbers: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(numbers.len());
    numbers.iter().copied().filter(|n| seen.insert(*n)).collect()
}

/// Finds every unordered pair `{a, b}` with `a != b` and `a + b == target`.
///
/// Pairs are normalised to `(min, max)` so each is reported once. Input is
/// expected to hold distinct values; a repeated value never pairs with itself.
pub fn find_pairs(numbers: &[i64], target: i64) -> HashSet<(i64, i64)> {
    let mut seen = HashSet::with_capacity(numbers.len());
    let mut pairs = HashSet::new();
    for &n in numbers {
        let Some(complement) = target.checked_sub(n) else {
            seen.insert(n);
            continue;
        };
        if complement != n && seen.contains(&complement) {
            pairs.insert((n.min(complement), n.max(complement)));
        }
        seen.insert(n);
    }
    pairs
}

/// Addition that reports overflow instead of wrapping or panicking.
pub trait CheckedSum: Copy + Default {
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_checked_sum_int {
    ($($t:ty),*) => {
        $(impl CheckedSum for $t {
            #[inline]
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
        })*
    };
}

impl_checked_sum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats saturate to infinity rather than overflowing.
impl CheckedSum for f32 {
    #[inline]
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl CheckedSum for f64 {
    #[inline]
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

/// Prefix sums: element `i` of the output is the sum of `numbers[0..=i]`.
///
/// Fails with [`SimulationError::InvalidArgument`] when a prefix sum does not
/// fit in `T`.
pub fn running_total<T>(numbers: &[T]) -> Result<Vec<T>, SimulationError>
where
    T: CheckedSum + Display,
{
    let mut total = T::default();
    let mut totals = Vec::with_capacity(numbers.len());
    for (index, &n) in numbers.iter().enumerate() {
        total = total.checked_sum(n).ok_or_else(|| {
            SimulationError::InvalidArgument(format!(
                "running total overflows at index {index} (adding {n} to {total})"
            ))
        })?;
        totals.push(total);
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_most_frequent() {
        assert_eq!(most_frequent(&[1, 3, 2, 3, 4, 1, 3]), Some(3));
        assert_eq!(most_frequent(&[7]), Some(7));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent(&[]), None);
    }

    #[test]
    fn test_most_frequent_tie_returns_a_tied_value() {
        let result = most_frequent(&[1, 2, 1, 2, 3]).unwrap();
        assert!([1, 2].contains(&result));
    }

    #[test]
    fn test_remove_duplicates() {
        assert_eq!(remove_duplicates(&[4, 5, 4, 6, 5, 7]), vec![4, 5, 6, 7]);
        assert_eq!(remove_duplicates(&[]), Vec::<i64>::new());
        assert_eq!(remove_duplicates(&[9, 9, 9]), vec![9]);
    }

    #[test]
    fn test_find_pairs() {
        let pairs = find_pairs(&[1, 2, 3, 4], 5);
        let expected: HashSet<(i64, i64)> = [(1, 4), (2, 3)].into_iter().collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_find_pairs_empty_and_no_match() {
        assert!(find_pairs(&[], 5).is_empty());
        assert!(find_pairs(&[1, 2], 10).is_empty());
    }

    #[test]
    fn test_find_pairs_negative_and_self() {
        let pairs = find_pairs(&[-3, 8, 5, 2], 5);
        let expected: HashSet<(i64, i64)> = [(-3, 8)].into_iter().collect();
        assert_eq!(pairs, expected);

        // A value never pairs with itself.
        assert!(find_pairs(&[2, 2], 4).is_empty());
    }

    #[test]
    fn test_find_pairs_overflowing_target() {
        assert!(find_pairs(&[i64::MIN, 1], i64::MAX).is_empty());
    }

    #[test]
    fn test_running_total() {
        assert_eq!(running_total(&[1i64, 2, 3, 4]).unwrap(), vec![1, 3, 6, 10]);
        assert_eq!(running_total::<i64>(&[]).unwrap(), Vec::<i64>::new());
        assert_eq!(running_total(&[1.5f64, 2.5]).unwrap(), vec![1.5, 4.0]);
    }

    #[test]
    fn test_running_total_overflow_is_an_error() {
        let err = running_total(&[i64::MAX, 1]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidArgument(_)));
        assert!(err.to_string().contains("index 1"));

        assert!(running_total(&[i64::MIN, -1]).is_err());
        assert_eq!(
            running_total(&[i64::MAX, -1, 1]).unwrap(),
            vec![i64::MAX, i64::MAX - 1, i64::MAX]
        );
    }

    proptest! {
        #[test]
        fn prop_most_frequent_has_max_count(numbers in prop::collection::vec(-20i64..20, 1..64)) {
            let result = most_frequent(&numbers).unwrap();
            let count = |v: i64| numbers.iter().filter(|&&n| n == v).count();
            let best = numbers.iter().map(|&n| count(n)).max().unwrap();
            prop_assert_eq!(count(result), best);
        }

        #[test]
        fn prop_remove_duplicates_keeps_first_occurrences(numbers in prop::collection::vec(-20i64..20, 0..64)) {
            let deduped = remove_duplicates(&numbers);
            let unique: HashSet<i64> = numbers.iter().copied().collect();
            prop_assert_eq!(deduped.len(), unique.len());
            let mut last_index = None;
            for value in &deduped {
                let index = numbers.iter().position(|n| n == value);
                prop_assert!(index > last_index);
                last_index = index;
            }
        }

        #[test]
        fn prop_find_pairs_sum_to_target(
            numbers in prop::collection::hash_set(-50i64..50, 0..32),
            target in -100i64..100,
        ) {
            let numbers: Vec<i64> = numbers.into_iter().collect();
            let pairs = find_pairs(&numbers, target);
            for &(a, b) in &pairs {
                prop_assert!(a < b);
                prop_assert_eq!(a + b, target);
            }
            let brute: usize = numbers
                .iter()
                .enumerate()
                .map(|(i, a)| numbers[i + 1..].iter().filter(|&&b| a + b == target).count())
                .sum();
            prop_assert_eq!(pairs.len(), brute);
        }

        #[test]
        fn prop_running_total_last_is_sum(numbers in prop::collection::vec(-1000i64..1000, 0..64)) {
            let totals = running_total(&numbers).unwrap();
            prop_assert_eq!(totals.len(), numbers.len());
            prop_assert_eq!(totals.last().copied().unwrap_or(0), numbers.iter().sum::<i64>());
        }
    }
}
