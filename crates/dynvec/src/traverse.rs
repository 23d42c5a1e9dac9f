//! Functional traversal over an [`Array`].
//!
//! Callbacks receive each element together with its index. [`Array::map`]
//! and [`Array::filter`] are folds into a fresh array.

use crate::Array;

impl<T> Array<T> {
    /// Call `f` with each element and its index, in ascending order.
    ///
    /// ```rust
    /// let mut sum = 0;
    /// dynvec::array![1, 2, 3, 4].for_each(|v, _| sum += v);
    /// assert_eq!(10, sum);
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, value) in self.iter().enumerate() {
            f(value, index);
        }
    }

    /// Fold the array from the front into a single value.
    ///
    /// ```rust
    /// let sum = dynvec::array![1, 2, 3, 4].reduce(|acc, v, _| acc + v, 0);
    /// assert_eq!(10, sum);
    /// ```
    pub fn reduce<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        let mut result = initial;

        for (index, value) in self.iter().enumerate() {
            result = f(result, value, index);
        }

        result
    }

    /// Fold the array from the back into a single value.
    ///
    /// ```rust
    /// let word = dynvec::array!["m", "e", "s", "s", "a", "g", "e"]
    ///     .reduce_right(|word, letter, _| word + *letter, String::new());
    /// assert_eq!("egassem", word);
    /// ```
    pub fn reduce_right<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        let mut result = initial;

        for (index, value) in self.iter().enumerate().rev() {
            result = f(result, value, index);
        }

        result
    }

    /// Construct a new array from the result of calling `f` on every element.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let doubled = array![1, 2, 3].map(|v, _| v * 2);
    /// assert_eq!(array![2, 4, 6], doubled);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Array<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.reduce(
            |mut result: Array<U>, value, index| {
                result.push([f(value, index)]);
                result
            },
            Array::with_capacity(self.len()),
        )
    }

    /// Construct a new array holding the elements for which `predicate`
    /// returns `true`, in their original order.
    ///
    /// ```rust
    /// use dynvec::array;
    ///
    /// let even = array![1, 2, 3, 4].filter(|v, _| v % 2 == 0);
    /// assert_eq!(array![2, 4], even);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Array<T>
    where
        P: FnMut(&T, usize) -> bool,
        T: Clone,
    {
        self.reduce(
            |mut result: Array<T>, value, index| {
                if predicate(value, index) {
                    result.push([value.clone()]);
                }

                result
            },
            Array::new(),
        )
    }

    /// Test if `predicate` holds for at least one element.
    ///
    /// Stops at the first element for which it does.
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .any(|(index, value)| predicate(value, index))
    }

    /// Test if `predicate` holds for every element.
    ///
    /// Stops at the first element for which it does not. Always `true` for an
    /// empty array.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .all(|(index, value)| predicate(value, index))
    }
}
