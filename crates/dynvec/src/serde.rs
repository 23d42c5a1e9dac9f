use crate::{Array, Value};
use serde::{de, ser};
use std::fmt;
use std::marker;

/// Arrays serialize as plain sequences.
impl<T> ser::Serialize for Array<T>
where
    T: ser::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use serde::ser::SerializeSeq as _;

        let mut serializer = serializer.serialize_seq(Some(self.len()))?;

        for value in self {
            serializer.serialize_element(value)?;
        }

        serializer.end()
    }
}

impl<'de, T> de::Deserialize<'de> for Array<T>
where
    T: de::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArrayVisitor {
            _marker: marker::PhantomData,
        })
    }
}

struct ArrayVisitor<T> {
    _marker: marker::PhantomData<T>,
}

impl<'de, T> de::Visitor<'de> for ArrayVisitor<T>
where
    T: de::Deserialize<'de>,
{
    type Value = Array<T>;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("a sequence")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: de::SeqAccess<'de>,
    {
        let mut array = Array::new();

        while let Some(elem) = visitor.next_element()? {
            array.push([elem]);
        }

        Ok(array)
    }
}

/// Serialize implementation for values.
impl ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Value::Unit => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::Integer(integer) => serializer.serialize_i64(*integer),
            Value::Unsigned(unsigned) => serializer.serialize_u64(*unsigned),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::String(string) => serializer.serialize_str(string),
            Value::Array(array) => ser::Serialize::serialize(array, serializer),
        }
    }
}

/// Deserialize implementation for values.
///
/// Self-describing formats do not distinguish characters from strings, so a
/// serialized [`Value::Char`] comes back as a [`Value::String`]. Likewise a
/// [`Value::Unsigned`] which fits in an `i64` comes back as a
/// [`Value::Integer`].
impl<'de> de::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("any valid value")
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(value.to_owned()))
    }

    #[inline]
    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(value))
    }

    #[inline]
    fn visit_char<E>(self, c: char) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Char(c))
    }

    #[inline]
    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Integer(v))
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        use std::convert::TryFrom as _;

        match i64::try_from(v) {
            Ok(v) => Ok(Value::Integer(v)),
            Err(..) => Ok(Value::Unsigned(v)),
        }
    }

    #[inline]
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(v))
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Unit)
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Unit)
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        de::Deserialize::deserialize(deserializer)
    }

    #[inline]
    fn visit_seq<V>(self, visitor: V) -> Result<Self::Value, V::Error>
    where
        V: de::SeqAccess<'de>,
    {
        let array = de::Visitor::visit_seq(
            ArrayVisitor {
                _marker: marker::PhantomData,
            },
            visitor,
        )?;

        Ok(Value::Array(array))
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Array, Value};
    use serde::de::{self, Deserialize as _};

    #[test]
    fn test_array_as_sequence() {
        let a = array![1, 2, 3];
        assert_eq!("[1,2,3]", serde_json::to_string(&a).unwrap());

        let b: Array<u32> = serde_json::from_str("[4, 5]").unwrap();
        assert_eq!(array![4, 5], b);
    }

    #[test]
    fn test_value_roundtrip() {
        let value = Value::Array(array![
            Value::Unit,
            Value::Bool(true),
            Value::Integer(-1),
            Value::Unsigned(u64::MAX),
            Value::Float(0.5),
            Value::String(String::from("hi")),
            Value::Array(array![]),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!("[null,true,-1,18446744073709551615,0.5,\"hi\",[]]", json);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    fn test_integer_roundtrip() {
        for value in [Value::Integer(5), Value::Integer(0), Value::Integer(i64::MAX)] {
            let json = serde_json::to_string(&value).unwrap();
            let back: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value, back);
        }

        let back: Value = serde_json::from_str("9223372036854775808").unwrap();
        assert_eq!(Value::Unsigned(1 << 63), back);
    }

    /// A sequence which claims to be far longer than it is.
    struct Oversized;

    impl<'de> de::SeqAccess<'de> for Oversized {
        type Error = de::value::Error;

        fn next_element_seed<T>(&mut self, _: T) -> Result<Option<T::Value>, Self::Error>
        where
            T: de::DeserializeSeed<'de>,
        {
            Ok(None)
        }

        fn size_hint(&self) -> Option<usize> {
            Some(usize::MAX / 2)
        }
    }

    impl<'de> de::Deserializer<'de> for Oversized {
        type Error = de::value::Error;

        fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: de::Visitor<'de>,
        {
            visitor.visit_seq(self)
        }

        serde::forward_to_deserialize_any! {
            bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
            bytes byte_buf option unit unit_struct newtype_struct seq tuple
            tuple_struct map struct enum identifier ignored_any
        }
    }

    #[test]
    fn test_size_hint_is_not_trusted() {
        let array = Array::<u64>::deserialize(Oversized).unwrap();
        assert!(array.is_empty());

        let value = Value::deserialize(Oversized).unwrap();
        assert_eq!(Value::Array(Array::new()), value);
    }

    #[test]
    fn test_char_becomes_string() {
        let json = serde_json::to_string(&Value::Char('x')).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(Value::String(String::from("x")), back);
    }
}
