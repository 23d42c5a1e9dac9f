use crate::ValueType;
use thiserror::Error;

/// Error raised when interacting with a [`Value`](crate::Value) as a
/// specific type.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ValueError {
    kind: Box<ValueErrorKind>,
}

impl ValueError {
    /// Construct an error indicating that a value of `expected` was wanted
    /// but something else was found.
    pub fn expected(expected: &'static str, actual: ValueType) -> Self {
        Self::from(ValueErrorKind::Expected { expected, actual })
    }

    /// Inspect the value error kind.
    pub fn kind(&self) -> &ValueErrorKind {
        &self.kind
    }

    /// Convert into the value error kind.
    pub fn into_kind(self) -> ValueErrorKind {
        *self.kind
    }
}

impl<E> From<E> for ValueError
where
    ValueErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            kind: Box::new(ValueErrorKind::from(err)),
        }
    }
}

/// The kind of a [`ValueError`].
#[derive(Debug, Error)]
pub enum ValueErrorKind {
    /// The value was of an unexpected type.
    #[error("expected `{expected}`, but found `{actual}`")]
    Expected {
        /// The name of the type that was expected.
        expected: &'static str,
        /// The type actually observed.
        actual: ValueType,
    },
    /// A stored number did not fit in the requested number type.
    #[error("failed to convert value `{from}` to number `{to}`")]
    NumberCoercion {
        /// Rendering of the number we tried to convert.
        from: String,
        /// The number type we tried to convert to.
        to: &'static str,
    },
    /// An element of an array failed to convert.
    #[error("bad element at index {index}: {error}")]
    Element {
        /// Index of the offending element.
        index: usize,
        /// The source error.
        #[source]
        error: ValueError,
    },
}

#[cfg(test)]
mod tests {
    use super::{ValueError, ValueErrorKind};
    use crate::ValueType;

    #[test]
    fn test_display() {
        let error = ValueError::expected("bool", ValueType::Integer);
        assert_eq!("expected `bool`, but found `integer`", error.to_string());

        let error = ValueError::from(ValueErrorKind::Element { index: 2, error });
        assert_eq!(
            "bad element at index 2: expected `bool`, but found `integer`",
            error.to_string()
        );
    }

    #[test]
    fn test_size() {
        assert_eq! {
            std::mem::size_of::<ValueError>(),
            std::mem::size_of::<usize>(),
        };
    }
}
