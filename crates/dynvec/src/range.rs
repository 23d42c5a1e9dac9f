//! Normalization of signed, possibly open-ended index ranges, and the range
//! operations built on top of it.

use crate::Array;
use std::ops;

/// A raw `[begin, end)` range where either bound may be omitted or negative.
///
/// Constructed from Rust's range syntax over `isize`:
///
/// ```rust
/// use dynvec::{array, Span};
///
/// let a = array![1, 2, 3, 4, 5];
///
/// assert_eq!(array![2, 3, 4], a.slice(1..4));
/// assert_eq!(array![3, 4, 5], a.slice(-3..));
/// assert_eq!(array![1, 2, 3], a.slice(..-2));
/// assert_eq!(a, a.slice(..));
/// assert_eq!(array![4, 5], a.slice(Span::new(Some(-2), None)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// The first index to include, or the start of the array.
    pub begin: Option<isize>,
    /// The first index to exclude, or the end of the array.
    pub end: Option<isize>,
}

impl Span {
    /// Construct a new span.
    pub const fn new(begin: Option<isize>, end: Option<isize>) -> Self {
        Self { begin, end }
    }

    /// The span covering the whole array.
    pub const fn full() -> Self {
        Self {
            begin: None,
            end: None,
        }
    }

    /// Resolve the span against an array of length `len`.
    ///
    /// Returns [`None`] if the span selects nothing.
    ///
    /// * A negative `begin` counts from the end, saturating at `0`.
    /// * A negative `end` counts from the end. If it is still negative the
    ///   span is empty rather than clamped.
    /// * Positive bounds past the end are clamped to `len`.
    pub fn resolve(self, len: usize) -> Option<ops::Range<usize>> {
        let begin = match self.begin {
            None => 0,
            Some(begin) if begin < 0 => len.saturating_sub(begin.unsigned_abs()),
            Some(begin) => (begin as usize).min(len),
        };

        let end = match self.end {
            None => len,
            Some(end) if end < 0 => len.checked_sub(end.unsigned_abs())?,
            Some(end) => (end as usize).min(len),
        };

        if end <= begin {
            return None;
        }

        Some(begin..end)
    }
}

impl From<ops::RangeFull> for Span {
    fn from(_: ops::RangeFull) -> Self {
        Self::full()
    }
}

impl From<ops::Range<isize>> for Span {
    fn from(range: ops::Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<ops::RangeFrom<isize>> for Span {
    fn from(range: ops::RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None)
    }
}

impl From<ops::RangeTo<isize>> for Span {
    fn from(range: ops::RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end))
    }
}

impl From<(Option<isize>, Option<isize>)> for Span {
    fn from((begin, end): (Option<isize>, Option<isize>)) -> Self {
        Self::new(begin, end)
    }
}

impl<T> Array<T> {
    /// Copy the elements selected by `span` into a new array.
    ///
    /// The receiver is not modified. Spans which select nothing produce an
    /// empty array, see [`Span::resolve`] for the normalization rules.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let a = array![1, 2, 3];
    /// assert!(a.slice(0..-4).is_empty());
    /// assert!(a.slice(2..1).is_empty());
    /// assert_eq!(array![2, 3], a.slice(1..100));
    /// ```
    pub fn slice<S>(&self, span: S) -> Array<T>
    where
        S: Into<Span>,
        T: Clone,
    {
        match span.into().resolve(self.len()) {
            Some(range) => Array::from(self.as_slice()[range].to_vec()),
            None => Array::new(),
        }
    }

    /// Remove `delete_count` elements starting at `start` and insert `items`
    /// in their place.
    ///
    /// `start` is normalized like the beginning of a [`Span`], so negative
    /// values count from the end. `delete_count` is clamped to the number of
    /// elements after `start`.
    ///
    /// The receiver becomes `head ++ items ++ tail`, and the removed
    /// elements are returned as a new array.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let mut a = array![1, 2, 3];
    /// let removed = a.splice(0, 1, [4, 5]);
    ///
    /// assert_eq!(array![1], removed);
    /// assert_eq!(array![4, 5, 2, 3], a);
    /// ```
    pub fn splice<I>(&mut self, start: isize, delete_count: usize, items: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
    {
        let start = Span::new(Some(start), None)
            .resolve(self.len())
            .map_or(self.len(), |range| range.start);

        let end = start.saturating_add(delete_count).min(self.len());

        log::trace!(
            "splice: removing {}..{} from array of length {}",
            start,
            end,
            self.len()
        );

        let removed: Vec<T> = self.inner_mut().splice(start..end, items).collect();
        Array::from(removed)
    }
}
