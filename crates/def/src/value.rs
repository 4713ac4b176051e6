use {
    crate::DataType,
    std::{
        fmt::Display,
        hash::{Hash, Hasher},
    },
};

/// A single cell. Any cell may be null regardless of its column's type.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

pub type Row = Vec<Value>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Integer(_) => Some(DataType::Integer),
            Self::Float(_) => Some(DataType::Float),
            Self::Text(_) => Some(DataType::Text),
        }
    }
}

/// Bit pattern of a float with both zeros folded together, so that rows can
/// be used as set members.
fn float_key(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(v1), Self::Integer(v2)) => v1 == v2,
            (Self::Float(v1), Self::Float(v2)) => float_key(*v1) == float_key(*v2),
            (Self::Text(v1), Self::Text(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Integer(v) => v.hash(state),
            Self::Float(v) => float_key(*v).hash(state),
            Self::Text(v) => v.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Integer(v) => write!(f, "{}", v),
            // debug formatting keeps the fractional part of whole floats
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! value_conversions {
    ($(($raw:ty, $val:ident),)*) => {
        $(
            impl From<$raw> for Value {
                fn from(raw: $raw) -> Self {
                    Value::$val(raw.into())
                }
            }
        )*
    };
}

value_conversions! {
    (i8, Integer),
    (i16, Integer),
    (i32, Integer),
    (i64, Integer),
    (u8, Integer),
    (u16, Integer),
    (u32, Integer),
    (f32, Float),
    (f64, Float),
    (String, Text),
    (&str, Text),
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(raw: Option<T>) -> Self {
        raw.map_or(Value::Null, Into::into)
    }
}

/// Builds a [`Row`] from anything convertible into [`Value`].
///
/// ```
/// use def::{row, Value};
///
/// assert_eq!(
///     row![1, "a", None::<f64>],
///     vec![Value::Integer(1), Value::Text("a".into()), Value::Null],
/// );
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}
