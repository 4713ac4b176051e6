use {
    super::{Bindings, Datum, Evaluate, Expression, Result},
    std::cmp::Ordering,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    LessThan,
    GreaterThan,
    Equal,
    LessThanOrEqual,
    GreaterThanOrEqual,
    NotEqual,
    Is,
    In,
    NotIn,
}

impl ComparisonOp {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "lt" => Self::LessThan,
            "gt" => Self::GreaterThan,
            "eq" => Self::Equal,
            "lte" => Self::LessThanOrEqual,
            "gte" => Self::GreaterThanOrEqual,
            "neq" => Self::NotEqual,
            "is" => Self::Is,
            "in" => Self::In,
            "nin" => Self::NotIn,
            _ => return None,
        })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::LessThan => "lt",
            Self::GreaterThan => "gt",
            Self::Equal => "eq",
            Self::LessThanOrEqual => "lte",
            Self::GreaterThanOrEqual => "gte",
            Self::NotEqual => "neq",
            Self::Is => "is",
            Self::In => "in",
            Self::NotIn => "nin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpression {
    pub op: ComparisonOp,
    pub lhs: Expression,
    pub rhs: Expression,
}

impl Evaluate for ComparisonExpression {
    fn evaluate(&self, row: &Bindings) -> Result<Datum> {
        let (lhs, rhs) = (self.lhs.evaluate(row)?, self.rhs.evaluate(row)?);

        // identity is decided before nulls are read as false
        if self.op == ComparisonOp::Is {
            return Ok(Datum::Boolean(lhs == rhs));
        }

        let (lhs, rhs) = (lhs.or_false(), rhs.or_false());
        let ordering = || lhs.loose_cmp(&rhs);

        Ok(Datum::Boolean(match self.op {
            ComparisonOp::Equal => lhs.loose_eq(&rhs),
            ComparisonOp::NotEqual => !lhs.loose_eq(&rhs),
            ComparisonOp::LessThan => ordering() == Some(Ordering::Less),
            ComparisonOp::GreaterThan => ordering() == Some(Ordering::Greater),
            ComparisonOp::LessThanOrEqual => {
                matches!(ordering(), Some(Ordering::Less | Ordering::Equal))
            }
            ComparisonOp::GreaterThanOrEqual => {
                matches!(ordering(), Some(Ordering::Greater | Ordering::Equal))
            }
            ComparisonOp::In => contains(&rhs, &lhs),
            ComparisonOp::NotIn => !contains(&rhs, &lhs),
            ComparisonOp::Is => unreachable!(),
        }))
    }
}

fn contains(haystack: &Datum, needle: &Datum) -> bool {
    match (haystack, needle) {
        (Datum::List(items), needle) => items.iter().any(|item| item.loose_eq(needle)),
        (Datum::Text(haystack), Datum::Text(needle)) => haystack.contains(needle.as_str()),
        _ => false,
    }
}
