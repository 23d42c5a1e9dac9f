use crate::{Array, Value, ValueError, ValueErrorKind};

/// Trait for converting from a value.
pub trait FromValue: 'static + Sized {
    /// Try to convert to the given type, from the given value.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Unit => Ok(()),
            actual => Err(ValueError::expected("()", actual.value_type())),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        value.into_bool()
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        value.into_char()
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        value.into_string()
    }
}

impl FromValue for Box<str> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value.into_string()?.into_boxed_str())
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        value.into_float()
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        let float = value.into_float()?;
        let narrowed = float as f32;

        if float.is_finite() && narrowed.is_infinite() {
            return Err(ValueError::from(ValueErrorKind::NumberCoercion {
                from: float.to_string(),
                to: "f32",
            }));
        }

        Ok(narrowed)
    }
}

impl FromValue for isize {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        use std::convert::TryFrom as _;

        let integer = value.into_integer()?;

        isize::try_from(integer).map_err(|_| {
            ValueError::from(ValueErrorKind::NumberCoercion {
                from: integer.to_string(),
                to: "isize",
            })
        })
    }
}

impl FromValue for usize {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        use std::convert::TryFrom as _;

        let unsigned = value.into_unsigned()?;

        usize::try_from(unsigned).map_err(|_| {
            ValueError::from(ValueErrorKind::NumberCoercion {
                from: unsigned.to_string(),
                to: "usize",
            })
        })
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Unit => Ok(None),
            value => Ok(Some(T::from_value(value)?)),
        }
    }
}

impl<T> FromValue for Array<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, ValueError> {
        let array = value.into_array()?;
        let mut output = Array::with_capacity(array.len());

        for (index, value) in array.into_iter().enumerate() {
            match T::from_value(value) {
                Ok(value) => {
                    output.push([value]);
                }
                Err(error) => {
                    return Err(ValueError::from(ValueErrorKind::Element { index, error }));
                }
            }
        }

        Ok(output)
    }
}

impl<T> FromValue for Vec<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(Array::<T>::from_value(value)?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Array, FromValue, ToValue, Value, ValueErrorKind};

    #[test]
    fn test_numbers() {
        assert_eq!(-3i8, i8::from_value(Value::Integer(-3)).unwrap());
        assert_eq!(300u16, u16::from_value(Value::Unsigned(300)).unwrap());

        let error = u8::from_value(Value::Unsigned(300)).unwrap_err();
        assert!(matches!(error.kind(), ValueErrorKind::NumberCoercion { .. }));

        let error = u8::from_value(Value::Integer(3)).unwrap_err();
        assert!(matches!(error.kind(), ValueErrorKind::Expected { .. }));
    }

    #[test]
    fn test_f32_overflow() {
        assert_eq!(1.5f32, f32::from_value(Value::Float(1.5)).unwrap());
        assert!(f32::from_value(Value::Float(f64::INFINITY)).unwrap().is_infinite());
        assert!(f32::from_value(Value::Float(f64::NAN)).unwrap().is_nan());

        let error = f32::from_value(Value::Float(1e300)).unwrap_err();
        assert!(matches!(error.kind(), ValueErrorKind::NumberCoercion { .. }));
    }

    #[test]
    fn test_option() {
        assert_eq!(None, Option::<bool>::from_value(Value::Unit).unwrap());
        assert_eq!(Some(true), Option::<bool>::from_value(Value::Bool(true)).unwrap());
    }

    #[test]
    fn test_nested_array() {
        let value = array![1u32, 2, 3].to_value();
        let array = Array::<u32>::from_value(value).unwrap();
        assert_eq!(array![1, 2, 3], array);

        let value = Value::Array(array![Value::Unsigned(1), Value::Bool(false)]);
        let error = Vec::<u32>::from_value(value).unwrap_err();

        match error.kind() {
            ValueErrorKind::Element { index, .. } => assert_eq!(1, *index),
            kind => panic!("unexpected error kind: {:?}", kind),
        }
    }
}
