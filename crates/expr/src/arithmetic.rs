use {
    super::{
        Bindings, Datum, DivisionByZeroSnafu, Evaluate, Expression, InvalidOperandsSnafu,
        OverflowSnafu, Result,
    },
    snafu::prelude::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Div,
    Mul,
}

impl ArithmeticOp {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "add" => Self::Add,
            "sub" => Self::Sub,
            "div" => Self::Div,
            "mul" => Self::Mul,
            _ => return None,
        })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Div => "div",
            Self::Mul => "mul",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticExpression {
    pub op: ArithmeticOp,
    pub lhs: Expression,
    pub rhs: Expression,
}

impl ArithmeticExpression {
    fn calculate(&self, lhs: Datum, rhs: Datum) -> Result<Datum> {
        let op = self.op.name();

        Ok(match (self.op, lhs, rhs) {
            (ArithmeticOp::Add, Datum::Text(lhs), Datum::Text(rhs)) => Datum::Text(lhs + &rhs),

            (ArithmeticOp::Div, lhs, rhs) => {
                let (lhs, rhs) = numbers(op, &lhs, &rhs)?;
                if rhs == 0.0 {
                    return DivisionByZeroSnafu.fail();
                }
                Datum::Float(lhs / rhs)
            }

            (_, Datum::Integer(lhs), Datum::Integer(rhs)) => {
                let result = match self.op {
                    ArithmeticOp::Add => lhs.checked_add(rhs),
                    ArithmeticOp::Sub => lhs.checked_sub(rhs),
                    ArithmeticOp::Mul => lhs.checked_mul(rhs),
                    ArithmeticOp::Div => unreachable!(),
                };
                Datum::Integer(result.context(OverflowSnafu { op })?)
            }

            (_, lhs, rhs) => {
                let (lhs, rhs) = numbers(op, &lhs, &rhs)?;
                Datum::Float(match self.op {
                    ArithmeticOp::Add => lhs + rhs,
                    ArithmeticOp::Sub => lhs - rhs,
                    ArithmeticOp::Mul => lhs * rhs,
                    ArithmeticOp::Div => unreachable!(),
                })
            }
        })
    }
}

fn numbers(op: &'static str, lhs: &Datum, rhs: &Datum) -> Result<(f64, f64)> {
    let number = |datum: &Datum| match datum {
        Datum::Integer(v) => Some(*v as f64),
        Datum::Float(v) => Some(*v),
        _ => None,
    };

    match (number(lhs), number(rhs)) {
        (Some(lhs), Some(rhs)) => Ok((lhs, rhs)),
        _ => InvalidOperandsSnafu {
            op,
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }
        .fail(),
    }
}

impl Evaluate for ArithmeticExpression {
    /// Null on either side makes the result null.
    fn evaluate(&self, row: &Bindings) -> Result<Datum> {
        let (lhs, rhs) = (self.lhs.evaluate(row)?, self.rhs.evaluate(row)?);
        if lhs.is_null() || rhs.is_null() {
            return Ok(Datum::Null);
        }

        self.calculate(lhs, rhs)
    }
}
