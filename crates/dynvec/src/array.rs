use crate::{FromValue, ToValue, Value, ValueError};
use std::fmt;
use std::iter;
use std::ops;
use std::slice;
use std::vec;

/// A dynamic, ordered and index-addressable container.
///
/// # Examples
///
/// ```rust
/// let mut array = dynvec::Array::new();
/// assert!(array.is_empty());
///
/// array.push(["foo", "bar"]);
/// array.unshift(["baz"]);
/// assert_eq!(3, array.len());
///
/// assert_eq!(Some(&"baz"), array.at(0));
/// assert_eq!(Some("bar"), array.pop());
/// assert_eq!(Some("baz"), array.shift());
/// assert_eq!(None, array.at(1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Array<T> {
    inner: vec::Vec<T>,
}

impl<T> Array<T> {
    /// Construct a new empty array.
    ///
    /// The array will not allocate until elements are pushed onto it.
    pub const fn new() -> Self {
        Self {
            inner: vec::Vec::new(),
        }
    }

    /// Construct a new array guaranteed to have room for at least the given
    /// number of elements.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: vec::Vec::with_capacity(cap),
        }
    }

    /// Convert into inner std vector.
    pub fn into_inner(self) -> vec::Vec<T> {
        self.inner
    }

    /// Mutable access to the underlying storage, for in-place operations.
    pub(crate) fn inner_mut(&mut self) -> &mut vec::Vec<T> {
        &mut self.inner
    }

    /// Access the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns `true` if the array contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements in the array, also referred to as its
    /// 'length'.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Get the element at the given index.
    ///
    /// Returns [`None`] for any index outside of `[0, len)`, including
    /// negative ones.
    ///
    /// ```rust
    /// let array = dynvec::array![1, 2, 3];
    ///
    /// assert_eq!(Some(&1), array.at(0));
    /// assert_eq!(None, array.at(3));
    /// assert_eq!(None, array.at(-1));
    /// ```
    pub fn at(&self, index: isize) -> Option<&T> {
        if index < 0 {
            return None;
        }

        self.inner.get(index as usize)
    }

    /// Get the element at the given unsigned index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Get the first element.
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Get the last element.
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Iterate over the elements in ascending index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Append every given value to the back of the array, in order.
    ///
    /// Returns the number of values appended.
    ///
    /// ```rust
    /// let mut array = dynvec::array![1];
    /// assert_eq!(2, array.push([2, 3]));
    /// assert_eq!(dynvec::array![1, 2, 3], array);
    /// ```
    pub fn push<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.inner.len();
        self.inner.extend(values);
        self.inner.len() - before
    }

    /// Removes the last element and returns it, or [`None`] if the array is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Removes the first element and returns it, or [`None`] if the array is
    /// empty.
    ///
    /// Every remaining element moves down one index.
    pub fn shift(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            return None;
        }

        Some(self.inner.remove(0))
    }

    /// Insert the given values at the front of the array.
    ///
    /// The values end up at the front in the order they were given, not
    /// reversed. Returns the number of values inserted.
    ///
    /// ```rust
    /// let mut array = dynvec::array!["baz"];
    /// assert_eq!(2, array.unshift(["foo", "bar"]));
    /// assert_eq!(dynvec::array!["foo", "bar", "baz"], array);
    /// ```
    pub fn unshift<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.inner.len();
        self.inner.splice(0..0, values);
        let count = self.inner.len() - before;
        log::trace!("unshift: inserted {} at front, len = {}", count, self.inner.len());
        count
    }

    /// Clears the array, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the
    /// array.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Copy the elements into a new std vector.
    pub fn to_vec(&self) -> vec::Vec<T>
    where
        T: Clone,
    {
        self.inner.clone()
    }
}

impl Array<Value> {
    /// Appends a value to the back of the array, converting it as necessary
    /// through the [`ToValue`] trait.
    ///
    /// ```rust
    /// let mut array = dynvec::Array::new();
    /// array.push_value(42u32);
    /// array.push_value(true);
    ///
    /// assert_eq!(Some(42u32), array.get_value(0)?);
    /// assert_eq!(Some(true), array.get_value(1)?);
    /// assert_eq!(None::<bool>, array.get_value(2)?);
    /// # Ok::<_, dynvec::ValueError>(())
    /// ```
    pub fn push_value<V>(&mut self, value: V) -> usize
    where
        V: ToValue,
    {
        self.push([value.to_value()])
    }

    /// Get the value at the given index, converted through the [`FromValue`]
    /// trait.
    pub fn get_value<V>(&self, index: isize) -> Result<Option<V>, ValueError>
    where
        V: FromValue,
    {
        let value = match self.at(index) {
            Some(value) => value.clone(),
            None => return Ok(None),
        };

        Ok(Some(V::from_value(value)?))
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Array<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&*self.inner).finish()
    }
}

impl<T> fmt::Display for Array<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.inner.iter().peekable();
        f.write_str("[")?;

        while let Some(value) = it.next() {
            fmt::Display::fmt(value, f)?;

            if it.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_str("]")
    }
}

impl<T> ops::Deref for Array<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> iter::FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push(iter);
    }
}

impl<T> From<vec::Vec<T>> for Array<T> {
    #[inline]
    fn from(inner: vec::Vec<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<Box<[T]>> for Array<T> {
    #[inline]
    fn from(inner: Box<[T]>) -> Self {
        Self {
            inner: inner.into_vec(),
        }
    }
}

impl<T> From<Array<T>> for vec::Vec<T> {
    #[inline]
    fn from(array: Array<T>) -> Self {
        array.inner
    }
}

#[cfg(test)]
mod tests {
    use super::Array;
    use crate::{array, Value};

    #[test]
    fn test_push_pop() {
        let mut a = array!["foo"];
        assert_eq!(2, a.push(["bar", "baz"]));
        assert_eq!(0, a.push(None));
        assert_eq!(array!["foo", "bar", "baz"], a);

        assert_eq!(Some("baz"), a.pop());
        assert_eq!(Some("bar"), a.pop());
        assert_eq!(Some("foo"), a.pop());
        assert_eq!(None, a.pop());
        assert!(a.is_empty());
    }

    #[test]
    fn test_shift_on_empty() {
        let mut a = array![1];
        assert_eq!(Some(1), a.shift());
        assert_eq!(None, a.shift());
        assert_eq!(None, a.shift());
        assert!(a.is_empty());
    }

    #[test]
    fn test_shift_moves_down() {
        let mut a = array!["foo", "bar"];
        assert_eq!(Some("foo"), a.shift());
        assert_eq!(Some(&"bar"), a.at(0));
        assert_eq!(1, a.len());
    }

    #[test]
    fn test_unshift_keeps_argument_order() {
        let mut a = array!["baz"];
        assert_eq!(2, a.unshift(["foo", "bar"]));
        assert_eq!(array!["foo", "bar", "baz"], a);

        let mut b = Array::new();
        assert_eq!(3, b.unshift(vec![5, 6, 7]));
        assert_eq!(array![5, 6, 7], b);
    }

    #[test]
    fn test_at_bounds() {
        let a = array!["foo", "bar", "baz"];

        for (i, v) in ["foo", "bar", "baz"].iter().enumerate() {
            assert_eq!(Some(v), a.at(i as isize));
        }

        assert_eq!(None, a.at(3));
        assert_eq!(None, a.at(-1));
        assert_eq!(None, a.at(isize::MIN));
        assert_eq!(None, a.at(isize::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!("[]", Array::<u32>::new().to_string());
        assert_eq!("[1, 2, 3]", array![1, 2, 3].to_string());
        assert_eq!("[\"a\"]", format!("{:?}", array!["a"]));
    }

    #[test]
    fn test_typed_values() {
        let mut a = Array::new();
        a.push_value(1u8);
        a.push_value("two");
        a.push_value(3.5f64);

        assert_eq!(Some(&Value::Unsigned(1)), a.at(0));
        assert_eq!(Some(String::from("two")), a.get_value(1).unwrap());
        assert!(a.get_value::<bool>(2).is_err());
        assert_eq!(None, a.get_value::<bool>(3).unwrap());
    }

    #[test]
    fn test_clone_does_not_alias() {
        let a = array![1, 2, 3];
        let mut b = a.clone();
        b.push([4]);
        assert_eq!(3, a.len());
        assert_eq!(4, b.len());
    }
}
