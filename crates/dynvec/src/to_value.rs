use crate::{Array, Value};

/// Trait for converting types into values.
///
/// Every conversion provided here is lossless.
pub trait ToValue: Sized {
    /// Convert into a value.
    fn to_value(self) -> Value;
}

impl ToValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl ToValue for &Value {
    fn to_value(self) -> Value {
        self.clone()
    }
}

impl ToValue for () {
    fn to_value(self) -> Value {
        Value::Unit
    }
}

impl ToValue for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ToValue for char {
    fn to_value(self) -> Value {
        Value::Char(self)
    }
}

// String impls

impl ToValue for String {
    fn to_value(self) -> Value {
        Value::String(self)
    }
}

impl ToValue for &str {
    fn to_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for Box<str> {
    fn to_value(self) -> Value {
        Value::String(self.into_string())
    }
}

// Array impls

impl<T> ToValue for Array<T>
where
    T: ToValue,
{
    fn to_value(self) -> Value {
        Value::Array(self.into_iter().map(ToValue::to_value).collect())
    }
}

impl<T> ToValue for Vec<T>
where
    T: ToValue,
{
    fn to_value(self) -> Value {
        Value::Array(self.into_iter().map(ToValue::to_value).collect())
    }
}

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(self) -> Value {
        match self {
            Some(some) => some.to_value(),
            None => Value::Unit,
        }
    }
}

// number impls

number_value_trait!(i8, Integer, i64);
number_value_trait!(i16, Integer, i64);
number_value_trait!(i32, Integer, i64);
number_value_trait!(i64, Integer, i64);
number_value_trait!(u8, Unsigned, u64);
number_value_trait!(u16, Unsigned, u64);
number_value_trait!(u32, Unsigned, u64);
number_value_trait!(u64, Unsigned, u64);

// NB: pointer-sized integers are at most 64 bits wide on every supported
// platform.

impl ToValue for isize {
    fn to_value(self) -> Value {
        Value::Integer(self as i64)
    }
}

impl ToValue for usize {
    fn to_value(self) -> Value {
        Value::Unsigned(self as u64)
    }
}

impl ToValue for f32 {
    fn to_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ToValue for f64 {
    fn to_value(self) -> Value {
        Value::Float(self)
    }
}
