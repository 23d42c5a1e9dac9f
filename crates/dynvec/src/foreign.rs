//! Construction of arrays from foreign collections.
//!
//! A closed set of homogeneous collections is recognized through the
//! [`Foreign`] trait. Anything else can still be converted by handing
//! [`Array::from_any_with`] a fallback conversion function.

use crate::{Array, ToValue, Value};
use std::any::{self, Any};
use thiserror::Error;

/// An error raised when a foreign collection could not be converted into an
/// array.
///
/// No partially built array is ever returned alongside it.
#[derive(Debug, Error)]
pub enum ForeignError {
    /// The collection type is not recognized and no fallback was given.
    #[error("can't turn value of type `{type_name}` into an array")]
    Unrecognized {
        /// The name of the collection type.
        type_name: &'static str,
    },
    /// The fallback conversion function reported an error.
    #[error("can't turn value of type `{type_name}` into an array: {error}")]
    Fallback {
        /// The name of the collection type.
        type_name: &'static str,
        /// The error raised by the fallback.
        error: crate::Error,
    },
}

impl ForeignError {
    /// The name of the collection type which failed to convert.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unrecognized { type_name } => type_name,
            Self::Fallback { type_name, .. } => type_name,
        }
    }
}

/// A homogeneous collection which can be copied into an array of values.
///
/// Implemented for slices, vectors and fixed-size arrays of `bool`, every
/// standard integer and float width, `char`, `String`, `&str` and [`Value`],
/// for `str` and `String` (one [`Value::Char`] per character), and for
/// already-built arrays of any element type convertible into a [`Value`].
pub trait Foreign {
    /// Push every element of the collection, in order, onto `array`.
    fn extend_array(&self, array: &mut Array<Value>);
}

impl_foreign! {
    bool,
    i8, i16, i32, i64, isize,
    u8, u16, u32, u64, usize,
    f32, f64,
    char, String, &str, Value,
}

impl Foreign for str {
    fn extend_array(&self, array: &mut Array<Value>) {
        array.push(self.chars().map(Value::Char));
    }
}

impl Foreign for String {
    fn extend_array(&self, array: &mut Array<Value>) {
        self.as_str().extend_array(array);
    }
}

impl<T> Foreign for Array<T>
where
    T: Clone + ToValue,
{
    fn extend_array(&self, array: &mut Array<Value>) {
        array.push(self.iter().cloned().map(ToValue::to_value));
    }
}

impl Array<Value> {
    /// Construct an array by copying the elements of a recognized foreign
    /// collection, in order.
    ///
    /// ```rust
    /// use dynvec::{Array, Value};
    ///
    /// let a = Array::from_foreign(&[1u8, 2, 3]);
    /// assert_eq!(Some(&Value::Unsigned(2)), a.at(1));
    ///
    /// let a = Array::from_foreign("hé");
    /// assert_eq!(dynvec::array![Value::Char('h'), Value::Char('é')], a);
    /// ```
    pub fn from_foreign<C>(collection: &C) -> Self
    where
        C: ?Sized + Foreign,
    {
        let mut array = Array::new();
        collection.extend_array(&mut array);
        array
    }

    /// Construct an array from a collection whose type is only known at
    /// runtime.
    ///
    /// Succeeds if the concrete type is a `Vec` of one of the element types
    /// or an `Array` of one of the element types listed on [`Foreign`], a
    /// `String` or a `&'static str`.
    ///
    /// ```rust
    /// use dynvec::Array;
    ///
    /// let a = Array::from_any(&vec![true, false])?;
    /// assert_eq!(2, a.len());
    ///
    /// assert!(Array::from_any(&std::time::Duration::from_secs(1)).is_err());
    /// # Ok::<_, dynvec::ForeignError>(())
    /// ```
    pub fn from_any<C>(collection: &C) -> Result<Self, ForeignError>
    where
        C: Any,
    {
        let mut array = Array::new();

        if extend_recognized(collection, &mut array) {
            return Ok(array);
        }

        let type_name = any::type_name::<C>();
        log::warn!("from_any: unrecognized collection type `{}`", type_name);
        Err(ForeignError::Unrecognized { type_name })
    }

    /// Construct an array from a collection whose type is only known at
    /// runtime, calling `fallback` to populate the array if the type is not
    /// recognized by [`Array::from_any`].
    ///
    /// If `fallback` fails, its error is returned and the array it was
    /// populating is discarded.
    ///
    /// ```rust
    /// use dynvec::{Array, ToValue as _};
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// let points = vec![Point { x: 1, y: 2 }];
    ///
    /// let a = Array::from_any_with(&points, |collection, array| {
    ///     let points = collection
    ///         .downcast_ref::<Vec<Point>>()
    ///         .ok_or_else(|| anyhow::anyhow!("not a vector of points"))?;
    ///
    ///     for p in points {
    ///         array.push([vec![p.x, p.y].to_value()]);
    ///     }
    ///
    ///     Ok(())
    /// })?;
    ///
    /// assert_eq!("[[1, 2]]", a.to_string());
    /// # Ok::<_, dynvec::ForeignError>(())
    /// ```
    pub fn from_any_with<C, F>(collection: &C, fallback: F) -> Result<Self, ForeignError>
    where
        C: Any,
        F: FnOnce(&dyn Any, &mut Array<Value>) -> crate::Result<()>,
    {
        let mut array = Array::new();

        if extend_recognized(collection, &mut array) {
            return Ok(array);
        }

        let type_name = any::type_name::<C>();
        log::debug!("from_any: falling back to conversion for `{}`", type_name);

        match fallback(collection, &mut array) {
            Ok(()) => Ok(array),
            Err(error) => {
                log::warn!("from_any: conversion of `{}` failed: {}", type_name, error);
                Err(ForeignError::Fallback { type_name, error })
            }
        }
    }
}

/// Copy `collection` into `array` if its concrete type is recognized.
fn extend_recognized(collection: &dyn Any, array: &mut Array<Value>) -> bool {
    macro_rules! recognize {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(collection) = collection.downcast_ref::<$ty>() {
                    collection.extend_array(array);
                    return true;
                }
            )*
        };
    }

    recognize! {
        Vec<bool>,
        Vec<i8>, Vec<i16>, Vec<i32>, Vec<i64>, Vec<isize>,
        Vec<u8>, Vec<u16>, Vec<u32>, Vec<u64>, Vec<usize>,
        Vec<f32>, Vec<f64>,
        Vec<char>, Vec<String>, Vec<&'static str>, Vec<Value>,
        Array<bool>,
        Array<i8>, Array<i16>, Array<i32>, Array<i64>, Array<isize>,
        Array<u8>, Array<u16>, Array<u32>, Array<u64>, Array<usize>,
        Array<f32>, Array<f64>,
        Array<char>, Array<String>, Array<&'static str>, Array<Value>,
        String, &'static str,
    }

    false
}
