//! A dynamic ordered container for Rust.
//!
//! [`Array`] carries the method surface of a scripting language's native
//! array: index access, growth and shrinking at either end, range extraction
//! with negative indices, in-place splicing, functional traversal and
//! sorting by a caller-supplied predicate.
//!
//! ```rust
//! use dynvec::array;
//!
//! let mut a = array![1, 2, 3];
//! assert_eq!(2, a.push([4, 5]));
//! assert_eq!(array![3, 4, 5], a.slice(-3..));
//!
//! let removed = a.splice(0, 1, [9, 8]);
//! assert_eq!(array![1], removed);
//! assert_eq!(array![9, 8, 2, 3, 4, 5], a);
//! ```
//!
//! Operations taking `&self` never modify the receiver and return a new
//! container. Only [`push`], [`pop`], [`shift`], [`unshift`] and [`splice`]
//! mutate.
//!
//! Heterogeneous contents are stored as [`Value`], which is also what
//! [`Array::from_foreign`] and [`Array::from_any`] produce.
//!
//! [`push`]: Array::push
//! [`pop`]: Array::pop
//! [`shift`]: Array::shift
//! [`unshift`]: Array::unshift
//! [`splice`]: Array::splice

#![deny(missing_docs)]

#[macro_use]
mod macros;
mod array;
mod foreign;
mod from_value;
mod ordering;
mod range;
#[cfg(feature = "serde")]
mod serde;
mod to_value;
mod traverse;
mod value;
mod value_error;

/// Exported result type for convenience.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Exported boxed error type for convenience.
pub type Error = anyhow::Error;

pub use crate::array::Array;
pub use crate::foreign::{Foreign, ForeignError};
pub use crate::from_value::FromValue;
pub use crate::range::Span;
pub use crate::to_value::ToValue;
pub use crate::value::{Value, ValueType};
pub use crate::value_error::{ValueError, ValueErrorKind};
