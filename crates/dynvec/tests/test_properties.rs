//! Property-based tests for the algebraic laws of the array operations.

use dynvec::Array;
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100i32..100, 0..32)
}

fn non_empty() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100i32..100, 1..32)
}

proptest! {
    #[test]
    fn full_slice_matches_and_does_not_alias(v in elements()) {
        let a = Array::from(v);
        let mut b = a.slice(..);

        for i in 0..a.len() as isize {
            prop_assert_eq!(a.at(i), b.at(i));
        }

        let before = a.clone();
        b.push([1000]);
        b.shift();
        prop_assert_eq!(before, a);
    }

    #[test]
    fn push_then_pop_restores(v in elements(), x in any::<i32>()) {
        let mut a = Array::from(v);
        let before = a.clone();

        a.push([x]);
        prop_assert_eq!(Some(x), a.pop());
        prop_assert_eq!(before, a);
    }

    #[test]
    fn unshift_keeps_order(v in elements(), x in any::<i32>(), y in any::<i32>()) {
        let mut a = Array::from(v.clone());
        a.unshift([x, y]);

        prop_assert_eq!(Some(&x), a.at(0));
        prop_assert_eq!(Some(&y), a.at(1));
        prop_assert_eq!(v.len() + 2, a.len());
        prop_assert_eq!(&v[..], &a[2..]);
    }

    #[test]
    fn splice_everything_returns_original(v in elements()) {
        let original = Array::from(v);
        let mut a = original.clone();
        let len = a.len();

        prop_assert_eq!(original, a.splice(0, len, None));
        prop_assert!(a.is_empty());
    }

    #[test]
    fn splice_reassembles(
        v in elements(),
        start in -40isize..40,
        delete_count in 0usize..40,
        items in prop::collection::vec(any::<i32>(), 0..4),
    ) {
        let original = Array::from(v);
        let mut a = original.clone();
        let removed = a.splice(start, delete_count, items.clone());

        prop_assert!(removed.len() <= delete_count);
        prop_assert_eq!(original.len() - removed.len() + items.len(), a.len());
    }

    #[test]
    fn negative_begin_counts_from_end(v in non_empty(), k in 1usize..32) {
        let a = Array::from(v);
        let n = a.len() as isize;
        let k = (k as isize).min(n);

        prop_assert_eq!(a.slice(n - k..n), a.slice(-k..n));
    }

    #[test]
    fn end_before_start_is_empty(v in elements()) {
        let a = Array::from(v);
        let n = a.len() as isize;

        prop_assert!(a.slice(0..-n - 1).is_empty());
    }

    #[test]
    fn map_and_filter_lengths(v in elements()) {
        let a = Array::from(v);

        prop_assert_eq!(a.len(), a.map(|v, _| v.wrapping_mul(2)).len());
        prop_assert!(a.filter(|v, _| v % 3 == 0).len() <= a.len());
    }

    #[test]
    fn reverse_then_reduce_equals_reduce_right(v in elements()) {
        let a = Array::from(v);
        let push = |mut acc: Vec<i32>, v: &i32, _| {
            acc.push(*v);
            acc
        };

        prop_assert_eq!(
            a.reverse().reduce(push, Vec::new()),
            a.reduce_right(push, Vec::new())
        );
    }

    #[test]
    fn commutative_reduce_is_direction_independent(v in elements()) {
        let a = Array::from(v);
        let add = |acc: i32, v: &i32, _| acc.wrapping_add(*v);

        prop_assert_eq!(a.reduce(add, 0), a.reduce_right(add, 0));
    }

    #[test]
    fn sort_agrees_with_std(v in elements()) {
        let a = Array::from(v.clone());
        let mut expected = v;
        expected.sort();

        prop_assert_eq!(expected, a.sort(|a, b| a <= b).into_inner());
    }

    #[test]
    fn sort_is_a_permutation_for_any_predicate(v in elements(), seed in any::<u64>()) {
        let a = Array::from(v.clone());
        let mut state = seed;
        let sorted = a.sort(|_, _| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            state >> 63 == 1
        });

        let mut expected = v;
        expected.sort();
        let mut actual = sorted.into_inner();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }
}
