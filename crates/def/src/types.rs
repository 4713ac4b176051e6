use {
    crate::{
        error::{ConvertSnafu, Error, Result, UnknownTypeSnafu},
        Value,
    },
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    snafu::prelude::*,
    std::{fmt::Display, str::FromStr},
};

/// The closed set of column types. Each type knows how to parse raw text,
/// how to coerce an already typed value, and what its default value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Float,
    Text,
}

impl DataType {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
        }
    }

    /// The value given to existing rows when a column of this type is added.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Float => Value::Float(0.0),
            Self::Text => Value::Text(String::new()),
        }
    }

    pub fn parse(&self, raw: &str) -> Result<Value> {
        let fail = || -> Error {
            ConvertSnafu {
                value: raw,
                data_type: *self,
            }
            .build()
        };

        Ok(match self {
            Self::Integer => Value::Integer(raw.trim().parse().map_err(|_| fail())?),
            Self::Float => Value::Float(raw.trim().parse().map_err(|_| fail())?),
            Self::Text => Value::Text(raw.to_string()),
        })
    }

    /// Converts `value` into this type. Null stays null; floats are truncated
    /// toward zero when converted to integers.
    pub fn coerce(&self, value: Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),

            (Self::Integer, v @ Value::Integer(_)) => Ok(v),
            (Self::Integer, Value::Float(f)) => {
                ensure!(
                    f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64,
                    ConvertSnafu {
                        value: f.to_string(),
                        data_type: *self,
                    }
                );
                Ok(Value::Integer(f.trunc() as i64))
            }
            (Self::Integer | Self::Float, Value::Text(s)) => self.parse(&s),

            (Self::Float, Value::Integer(i)) => Ok(Value::Float(i as f64)),
            (Self::Float, v @ Value::Float(_)) => Ok(v),

            (Self::Text, v @ Value::Text(_)) => Ok(v),
            (Self::Text, v) => Ok(Value::Text(v.to_string())),
        }
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Ok(match name.to_ascii_lowercase().as_str() {
            "int" | "integer" => Self::Integer,
            "float" => Self::Float,
            "str" | "string" | "text" => Self::Text,
            _ => return UnknownTypeSnafu { name }.fail(),
        })
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
