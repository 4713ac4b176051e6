use {
    def::Value,
    std::{cmp::Ordering, fmt::Display},
};

/// The result of evaluating an expression. A superset of [`Value`]: logical
/// operators produce booleans and `in` operands may be lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Datum>),
}

impl Datum {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(v) => *v,
            Self::Integer(v) => *v != 0,
            Self::Float(v) => *v != 0.0,
            Self::Text(v) => !v.is_empty(),
            Self::List(v) => !v.is_empty(),
        }
    }

    /// Null reads as `false` for comparison and logical operators.
    pub(crate) fn or_false(self) -> Self {
        match self {
            Self::Null => Self::Boolean(false),
            v => v,
        }
    }

    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Self::Boolean(v) => Some(*v as i64 as f64),
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Equality across numeric types, used by `eq`, `neq`, `in` and `nin`.
    pub(crate) fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(v1), Self::Integer(v2)) => v1 == v2,
            (Self::Text(v1), Self::Text(v2)) => v1 == v2,
            (Self::List(v1), Self::List(v2)) => {
                v1.len() == v2.len() && v1.iter().zip(v2).all(|(a, b)| a.loose_eq(b))
            }
            (Self::Null, Self::Null) => true,
            (v1, v2) => match (v1.as_number(), v2.as_number()) {
                (Some(n1), Some(n2)) => n1 == n2,
                _ => false,
            },
        }
    }

    /// Ordering across numeric types and between texts; `None` for any other
    /// pairing.
    pub(crate) fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(v1), Self::Integer(v2)) => Some(v1.cmp(v2)),
            (Self::Text(v1), Self::Text(v2)) => Some(v1.cmp(v2)),
            (v1, v2) => v1.as_number()?.partial_cmp(&v2.as_number()?),
        }
    }

    /// Converts back into a cell value. Booleans and lists have no column
    /// type and yield `None`.
    pub fn into_value(self) -> Option<Value> {
        Some(match self {
            Self::Null => Value::Null,
            Self::Integer(v) => Value::Integer(v),
            Self::Float(v) => Value::Float(v),
            Self::Text(v) => Value::Text(v),
            Self::Boolean(_) | Self::List(_) => return None,
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

impl From<Value> for Datum {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Integer(v) => Self::Integer(v),
            Value::Float(v) => Self::Float(v),
            Value::Text(v) => Self::Text(v),
        }
    }
}

impl From<&Value> for Datum {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

macro_rules! datum_conversions {
    ($(($raw:ty, $val:ident),)*) => {
        $(
            impl From<$raw> for Datum {
                fn from(raw: $raw) -> Self {
                    Datum::$val(raw.into())
                }
            }
        )*
    };
}

datum_conversions! {
    (bool, Boolean),
    (i32, Integer),
    (i64, Integer),
    (f64, Float),
    (String, Text),
    (&str, Text),
}

impl<T: Into<Datum>> From<Vec<T>> for Datum {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Text(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}
