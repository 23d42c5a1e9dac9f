use crate::Array;
use std::mem;

impl<T> Array<T> {
    /// Construct a sorted copy of the array.
    ///
    /// The order is defined by `less_or_equal(a, b)`, which should return
    /// `true` if `a` does not come after `b`. The receiver is not modified.
    ///
    /// The sort is a merge sort, stable for reflexive predicates such as
    /// `a <= b`. Predicates which are not a consistent order still produce
    /// some permutation of the elements and never panic.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let a = array![3, 1, 2];
    /// assert_eq!(array![1, 2, 3], a.sort(|a, b| a <= b));
    /// assert_eq!(array![3, 2, 1], a.sort(|a, b| a >= b));
    /// assert_eq!(array![3, 1, 2], a);
    /// ```
    pub fn sort<F>(&self, mut less_or_equal: F) -> Array<T>
    where
        F: FnMut(&T, &T) -> bool,
        T: Clone,
    {
        let order = merge_sort(self.as_slice(), &mut less_or_equal);
        log::trace!("sort: sorted {} elements", order.len());
        order.into_iter().map(|index| self.as_slice()[index].clone()).collect()
    }

    /// Construct a copy of the array with the elements in reverse order.
    pub fn reverse(&self) -> Array<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    /// Construct a new array holding the elements of this array followed by
    /// the elements of each of `others`, in order.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let a = array![1, 2];
    /// let b = array![3, 4];
    /// let c = array![5, 6];
    /// assert_eq!(array![1, 2, 3, 4, 5, 6], a.concat([&b, &c]));
    /// ```
    pub fn concat<'a, I>(&self, others: I) -> Array<T>
    where
        I: IntoIterator<Item = &'a Array<T>>,
        T: 'a + Clone,
    {
        let mut result = self.clone();

        for other in others {
            result.push(other.iter().cloned());
        }

        result
    }

    /// Find the first index at or after `from_index` holding an element
    /// equal to `value`.
    ///
    /// A negative `from_index` searches from the start.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let a = array![1, 2, 1];
    /// assert_eq!(Some(0), a.index_of(&1, 0));
    /// assert_eq!(Some(2), a.index_of(&1, 1));
    /// assert_eq!(None, a.index_of(&3, 0));
    /// ```
    pub fn index_of(&self, value: &T, from_index: isize) -> Option<usize>
    where
        T: PartialEq,
    {
        let from = from_index.max(0) as usize;

        self.as_slice()
            .get(from..)?
            .iter()
            .position(|candidate| candidate == value)
            .map(|offset| from + offset)
    }

    /// Find the last index at or before `from_index` holding an element
    /// equal to `value`, searching backwards.
    ///
    /// `from_index` past the end searches from the last element. A negative
    /// `from_index` finds nothing.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let a = array![1, 2, 3, 1];
    /// assert_eq!(Some(3), a.last_index_of(&1, 4));
    /// assert_eq!(Some(0), a.last_index_of(&1, 2));
    /// assert_eq!(None, a.last_index_of(&1, -1));
    /// ```
    pub fn last_index_of(&self, value: &T, from_index: isize) -> Option<usize>
    where
        T: PartialEq,
    {
        if from_index < 0 || self.is_empty() {
            return None;
        }

        let end = (from_index as usize).min(self.len() - 1);

        self.as_slice()[..=end]
            .iter()
            .rposition(|candidate| candidate == value)
    }
}

/// Bottom-up merge sort, producing the permutation of positions which puts
/// `items` in order.
fn merge_sort<T, F>(items: &[T], less_or_equal: &mut F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    let mut order = (0..len).collect::<Vec<_>>();
    let mut buf = vec![0; len];
    let mut width = 1;

    while width < len {
        let mut start = 0;

        while start < len {
            let mid = start.saturating_add(width).min(len);
            let end = start.saturating_add(width.saturating_mul(2)).min(len);
            merge(
                items,
                &order[start..mid],
                &order[mid..end],
                &mut buf[start..end],
                less_or_equal,
            );
            start = end;
        }

        mem::swap(&mut order, &mut buf);
        width = width.saturating_mul(2);
    }

    order
}

/// Merge two sorted runs of positions into `out`, preferring the left run
/// when `less_or_equal` says its head does not come after the right one.
fn merge<T, F>(
    items: &[T],
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    less_or_equal: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let (mut l, mut r) = (0, 0);

    for slot in out.iter_mut() {
        let take_left = match (left.get(l), right.get(r)) {
            (Some(&a), Some(&b)) => less_or_equal(&items[a], &items[b]),
            (Some(..), None) => true,
            _ => false,
        };

        if take_left {
            *slot = left[l];
            l += 1;
        } else {
            *slot = right[r];
            r += 1;
        }
    }
}
