use super::{Bindings, Datum, Evaluate, Expression, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum ExistenceExpression {
    Missing { child: Expression },
    Exists { child: Expression },
}

impl ExistenceExpression {
    pub(crate) fn from_name(name: &str) -> Option<fn(Expression) -> Self> {
        match name {
            "missing" => Some(|child| Self::Missing { child }),
            "exists" => Some(|child| Self::Exists { child }),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::Exists { .. } => "exists",
        }
    }

    pub fn child(&self) -> &Expression {
        match self {
            Self::Missing { child } | Self::Exists { child } => child,
        }
    }
}

impl Evaluate for ExistenceExpression {
    fn evaluate(&self, row: &Bindings) -> Result<Datum> {
        let is_null = self.child().evaluate(row)?.is_null();

        Ok(Datum::Boolean(match self {
            Self::Missing { .. } => is_null,
            Self::Exists { .. } => !is_null,
        }))
    }
}
