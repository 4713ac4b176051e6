use {
    super::{Datum, Expression, MalformedSnafu, Result},
    serde_json::Value as Json,
    snafu::prelude::*,
};

const LITERAL: &str = "literal";

impl Expression {
    /// Parses the dictionary-shaped condition format, e.g.
    /// `{"and": [{"eq": ["val", {"literal": "George"}]}, {"gt": ["id", 1]}]}`.
    ///
    /// Strings are column references, `{"literal": ..}` forces a literal,
    /// arrays are list literals and every other object must hold exactly one
    /// operator name.
    pub fn from_json(json: &Json) -> Result<Self> {
        match json {
            Json::String(name) => Ok(Expression::column(name.as_str())),
            Json::Object(map) => {
                let mut entries = map.iter();
                let (name, operands) = match (entries.next(), entries.next()) {
                    (Some(entry), None) => entry,
                    _ => {
                        return MalformedSnafu {
                            expression: json.to_string(),
                        }
                        .fail()
                    }
                };

                if name == LITERAL {
                    return literal(operands).map(Expression::Literal);
                }

                let operands = match operands {
                    Json::Array(items) => items.iter().map(Self::from_json).collect::<Result<_>>()?,
                    operand => vec![Self::from_json(operand)?],
                };

                Self::apply(name, operands)
            }
            other => literal(other).map(Expression::Literal),
        }
    }
}

fn literal(json: &Json) -> Result<Datum> {
    Ok(match json {
        Json::Null => Datum::Null,
        Json::Bool(v) => Datum::Boolean(*v),
        Json::Number(n) => match n.as_i64() {
            Some(v) => Datum::Integer(v),
            None => Datum::Float(n.as_f64().context(MalformedSnafu {
                expression: n.to_string(),
            })?),
        },
        Json::String(v) => Datum::Text(v.clone()),
        Json::Array(items) => Datum::List(items.iter().map(literal).collect::<Result<_>>()?),
        Json::Object(_) => {
            return MalformedSnafu {
                expression: json.to_string(),
            }
            .fail()
        }
    })
}
