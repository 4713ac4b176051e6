use super::{Bindings, Datum, Evaluate, Expression, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Nests a chain of operands right to left: `and(a, b, c)` becomes
    /// `and(a, and(b, c))`. A single operand is returned as is.
    pub fn fold(self, operands: Vec<Expression>) -> Option<Expression> {
        operands.into_iter().rev().reduce(|rhs, lhs| {
            Expression::Logic(Box::new(LogicExpression { op: self, lhs, rhs }))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicExpression {
    pub op: LogicOp,
    pub lhs: Expression,
    pub rhs: Expression,
}

impl Evaluate for LogicExpression {
    // both sides are always evaluated
    fn evaluate(&self, row: &Bindings) -> Result<Datum> {
        let lhs = self.lhs.evaluate(row)?.or_false().is_truthy();
        let rhs = self.rhs.evaluate(row)?.or_false().is_truthy();

        Ok(Datum::Boolean(match self.op {
            LogicOp::And => lhs & rhs,
            LogicOp::Or => lhs | rhs,
        }))
    }
}
