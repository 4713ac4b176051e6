mod arithmetic;
mod column;
mod comparison;
mod datum;
mod existence;
mod json;
mod literal;
mod logic;

pub use {
    arithmetic::{ArithmeticExpression, ArithmeticOp},
    column::{Bindings, ColumnRef},
    comparison::{ComparisonExpression, ComparisonOp},
    datum::Datum,
    existence::ExistenceExpression,
    logic::{LogicExpression, LogicOp},
};

use {snafu::prelude::*, std::fmt::Display};

/// A condition or computed value, evaluated eagerly against one row at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Datum),
    Column(ColumnRef),
    Comparison(Box<ComparisonExpression>),
    Logic(Box<LogicExpression>),
    Existence(Box<ExistenceExpression>),
    Arithmetic(Box<ArithmeticExpression>),
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("unknown operator {:?}", name))]
    UnknownOperator { name: String },

    #[snafu(display("operator {} expects {} operand(s), got {}", name, expected, found))]
    OperandCount {
        name: String,
        expected: &'static str,
        found: usize,
    },

    #[snafu(display("cannot evaluate expression: {}", expression))]
    Malformed { expression: String },

    #[snafu(display("cannot apply {} to {} and {}", op, lhs, rhs))]
    InvalidOperands {
        op: &'static str,
        lhs: String,
        rhs: String,
    },

    #[snafu(display("division by zero"))]
    DivisionByZero,

    #[snafu(display("integer overflow in {}", op))]
    Overflow { op: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait Evaluate {
    fn evaluate(&self, row: &Bindings) -> Result<Datum>;
}

impl Evaluate for Expression {
    fn evaluate(&self, row: &Bindings) -> Result<Datum> {
        match self {
            Expression::Literal(expr) => expr.evaluate(row),
            Expression::Column(expr) => expr.evaluate(row),
            Expression::Comparison(expr) => expr.evaluate(row),
            Expression::Logic(expr) => expr.evaluate(row),
            Expression::Existence(expr) => expr.evaluate(row),
            Expression::Arithmetic(expr) => expr.evaluate(row),
        }
    }
}

impl Expression {
    pub fn literal(value: impl Into<Datum>) -> Self {
        Self::Literal(value.into())
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::new(name))
    }

    /// Builds the application of the operator called `name`.
    ///
    /// `missing` and `exists` take one operand, `and` and `or` take two or
    /// more (folded right to left), every other operator takes exactly two.
    pub fn apply(name: &str, operands: Vec<Expression>) -> Result<Self> {
        let name = name.to_ascii_lowercase();

        if let Some(op) = LogicOp::from_name(&name) {
            let found = operands.len();
            return match op.fold(operands) {
                Some(expr) if found >= 2 => Ok(expr),
                _ => OperandCountSnafu {
                    name,
                    expected: "2 or more",
                    found,
                }
                .fail(),
            };
        }

        if let Some(make) = ExistenceExpression::from_name(&name) {
            let [child]: [Expression; 1] = operands.try_into().map_err(|ops: Vec<_>| {
                OperandCountSnafu {
                    name: name.as_str(),
                    expected: "1",
                    found: ops.len(),
                }
                .build()
            })?;
            return Ok(Self::Existence(Box::new(make(child))));
        }

        let binary = |operands: Vec<Expression>| -> Result<(Expression, Expression)> {
            let [lhs, rhs]: [Expression; 2] = operands.try_into().map_err(|ops: Vec<_>| {
                OperandCountSnafu {
                    name: name.as_str(),
                    expected: "2",
                    found: ops.len(),
                }
                .build()
            })?;
            Ok((lhs, rhs))
        };

        if let Some(op) = ComparisonOp::from_name(&name) {
            let (lhs, rhs) = binary(operands)?;
            return Ok(Self::Comparison(Box::new(ComparisonExpression { op, lhs, rhs })));
        }

        if let Some(op) = ArithmeticOp::from_name(&name) {
            let (lhs, rhs) = binary(operands)?;
            return Ok(Self::Arithmetic(Box::new(ArithmeticExpression { op, lhs, rhs })));
        }

        UnknownOperatorSnafu { name }.fail()
    }

    pub fn compare(op: ComparisonOp, lhs: Expression, rhs: Expression) -> Self {
        Self::Comparison(Box::new(ComparisonExpression { op, lhs, rhs }))
    }

    pub fn arithmetic(op: ArithmeticOp, lhs: Expression, rhs: Expression) -> Self {
        Self::Arithmetic(Box::new(ArithmeticExpression { op, lhs, rhs }))
    }

    pub fn and(lhs: Expression, rhs: Expression) -> Self {
        Self::Logic(Box::new(LogicExpression {
            op: LogicOp::And,
            lhs,
            rhs,
        }))
    }

    pub fn or(lhs: Expression, rhs: Expression) -> Self {
        Self::Logic(Box::new(LogicExpression {
            op: LogicOp::Or,
            lhs,
            rhs,
        }))
    }

    pub fn missing(child: Expression) -> Self {
        Self::Existence(Box::new(ExistenceExpression::Missing { child }))
    }

    pub fn exists(child: Expression) -> Self {
        Self::Existence(Box::new(ExistenceExpression::Exists { child }))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(datum) => literal::fmt_literal(datum, f),
            Expression::Column(col) => write!(f, "{}", col.name),
            Expression::Comparison(expr) => {
                write!(f, "{}({},{})", expr.op.name(), expr.lhs, expr.rhs)
            }
            Expression::Logic(expr) => write!(f, "{}({},{})", expr.op.name(), expr.lhs, expr.rhs),
            Expression::Existence(expr) => write!(f, "{}({})", expr.name(), expr.child()),
            Expression::Arithmetic(expr) => {
                write!(f, "{}({},{})", expr.op.name(), expr.lhs, expr.rhs)
            }
        }
    }
}
