use crate::{Array, FromValue, ValueError};
use std::fmt;

/// A dynamically typed element.
///
/// Used as the element type of an [`Array`] when it needs to hold a mix of
/// types, and as the element type produced by the foreign collection
/// adapter.
///
/// Equality is strict: values of different variants are never equal, so
/// `Value::Integer(1)` is not equal to `Value::Float(1.0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A character.
    Char(char),
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer.
    Unsigned(u64),
    /// A float.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A nested array.
    Array(Array<Value>),
}

impl Value {
    /// Get the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Unit => ValueType::Unit,
            Self::Bool(..) => ValueType::Bool,
            Self::Char(..) => ValueType::Char,
            Self::Integer(..) => ValueType::Integer,
            Self::Unsigned(..) => ValueType::Unsigned,
            Self::Float(..) => ValueType::Float,
            Self::String(..) => ValueType::String,
            Self::Array(..) => ValueType::Array,
        }
    }

    /// Test if the value is the unit value.
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Try to coerce value into a boolean.
    #[inline]
    pub fn into_bool(self) -> Result<bool, ValueError> {
        match self {
            Self::Bool(b) => Ok(b),
            actual => Err(ValueError::expected("bool", actual.value_type())),
        }
    }

    /// Try to coerce value into a character.
    #[inline]
    pub fn into_char(self) -> Result<char, ValueError> {
        match self {
            Self::Char(c) => Ok(c),
            actual => Err(ValueError::expected("char", actual.value_type())),
        }
    }

    /// Try to coerce value into a signed integer.
    #[inline]
    pub fn into_integer(self) -> Result<i64, ValueError> {
        match self {
            Self::Integer(integer) => Ok(integer),
            actual => Err(ValueError::expected("i64", actual.value_type())),
        }
    }

    /// Try to coerce value into an unsigned integer.
    #[inline]
    pub fn into_unsigned(self) -> Result<u64, ValueError> {
        match self {
            Self::Unsigned(unsigned) => Ok(unsigned),
            actual => Err(ValueError::expected("u64", actual.value_type())),
        }
    }

    /// Try to coerce value into a float.
    #[inline]
    pub fn into_float(self) -> Result<f64, ValueError> {
        match self {
            Self::Float(float) => Ok(float),
            actual => Err(ValueError::expected("f64", actual.value_type())),
        }
    }

    /// Try to coerce value into a string.
    #[inline]
    pub fn into_string(self) -> Result<String, ValueError> {
        match self {
            Self::String(string) => Ok(string),
            actual => Err(ValueError::expected("String", actual.value_type())),
        }
    }

    /// Try to coerce value into an array.
    #[inline]
    pub fn into_array(self) -> Result<Array<Value>, ValueError> {
        match self {
            Self::Array(array) => Ok(array),
            actual => Err(ValueError::expected("Array", actual.value_type())),
        }
    }

    /// Convert the value into the given type.
    ///
    /// ```rust
    /// use dynvec::Value;
    ///
    /// let value = Value::Unsigned(42);
    /// assert_eq!(42u8, value.clone().convert::<u8>()?);
    /// assert!(value.convert::<bool>().is_err());
    /// # Ok::<_, dynvec::ValueError>(())
    /// ```
    pub fn convert<T>(self) -> Result<T, ValueError>
    where
        T: FromValue,
    {
        T::from_value(self)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Unit
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Char(c) => write!(f, "{}", c),
            Self::Integer(integer) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*integer))
            }
            Self::Unsigned(unsigned) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*unsigned))
            }
            Self::Float(float) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(*float))
            }
            Self::String(string) => f.write_str(string),
            Self::Array(array) => fmt::Display::fmt(array, f),
        }
    }
}

/// The type of a [`Value`], printable for human consumption through its
/// [Display][fmt::Display] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The unit type.
    Unit,
    /// A boolean.
    Bool,
    /// A character.
    Char,
    /// A signed integer.
    Integer,
    /// An unsigned integer.
    Unsigned,
    /// A float.
    Float,
    /// A string.
    String,
    /// An array.
    Array,
}

impl ValueType {
    /// The human readable name of the type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Integer => "integer",
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Value, ValueType};
    use crate::array;

    #[test]
    fn test_display() {
        assert_eq!("()", Value::Unit.to_string());
        assert_eq!("-42", Value::Integer(-42).to_string());
        assert_eq!("42", Value::Unsigned(42).to_string());
        assert_eq!("1.5", Value::Float(1.5).to_string());
        assert_eq!("1.0", Value::Float(1.0).to_string());
        assert_eq!("hello", Value::String(String::from("hello")).to_string());

        let nested = Value::Array(array![Value::Integer(1), Value::Char('x')]);
        assert_eq!("[1, x]", nested.to_string());
    }

    #[test]
    fn test_strict_equality() {
        assert_ne!(Value::Integer(1), Value::Unsigned(1));
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_eq!(Value::Char('a'), Value::Char('a'));
    }

    #[test]
    fn test_coercion_errors() {
        let error = Value::Char('a').into_bool().unwrap_err();
        assert_eq!("expected `bool`, but found `char`", error.to_string());
        assert_eq!(ValueType::Array, Value::Array(array![]).value_type());
    }
}
