/// Construct an [`Array`](crate::Array) from a list of values.
///
/// ```rust
/// use dynvec::{array, Array};
///
/// let empty: Array<u32> = array![];
/// assert!(empty.is_empty());
///
/// let a = array!["foo", "bar"];
/// assert_eq!(Some(&"bar"), a.at(1));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };

    ($($value:expr),+ $(,)?) => {
        $crate::Array::from(vec![$($value),+])
    };
}

/// Implement [`ToValue`](crate::ToValue) and [`FromValue`](crate::FromValue)
/// for a number type which widens losslessly into a value variant.
macro_rules! number_value_trait {
    ($ty:ty, $variant:ident, $wide:ty) => {
        impl $crate::ToValue for $ty {
            fn to_value(self) -> $crate::Value {
                $crate::Value::$variant(<$wide>::from(self))
            }
        }

        impl $crate::FromValue for $ty {
            fn from_value(value: $crate::Value) -> Result<Self, $crate::ValueError> {
                use std::convert::TryFrom as _;

                match value {
                    $crate::Value::$variant(number) => match <$ty>::try_from(number) {
                        Ok(number) => Ok(number),
                        Err(..) => Err($crate::ValueError::from(
                            $crate::ValueErrorKind::NumberCoercion {
                                from: number.to_string(),
                                to: std::any::type_name::<$ty>(),
                            },
                        )),
                    },
                    actual => Err($crate::ValueError::expected(
                        std::any::type_name::<$ty>(),
                        actual.value_type(),
                    )),
                }
            }
        }
    };
}

/// Implement [`Foreign`](crate::Foreign) for slices, vectors and fixed-size
/// arrays of the given element types.
macro_rules! impl_foreign {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Foreign for [$ty] {
                fn extend_array(&self, array: &mut $crate::Array<$crate::Value>) {
                    array.push(self.iter().cloned().map($crate::ToValue::to_value));
                }
            }

            impl $crate::Foreign for Vec<$ty> {
                fn extend_array(&self, array: &mut $crate::Array<$crate::Value>) {
                    self.as_slice().extend_array(array);
                }
            }

            impl<const N: usize> $crate::Foreign for [$ty; N] {
                fn extend_array(&self, array: &mut $crate::Array<$crate::Value>) {
                    self[..].extend_array(array);
                }
            }
        )*
    };
}
