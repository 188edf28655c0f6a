//! Numeric folding and comparison for `+ - * / eq? >`.
//!
//! Operators fold left to right: `(- a b c)` is `(a - b) - c`. A single
//! decimal operand makes the whole fold decimal; otherwise it stays in `i32`
//! with overflow and division by zero reported as errors.

use todalu_ir::Node;

use crate::errors::{division_by_zero, integer_overflow, EvalError, EvalResult};

/// The four arithmetic special forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// An operand already checked to be numeric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Number {
    Int(i32),
    Dec(f32),
}

impl Number {
    pub(crate) fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Integer(v) => Some(Number::Int(*v)),
            Node::Decimal(v) => Some(Number::Dec(*v)),
            _ => None,
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "mixed arithmetic is single precision"
    )]
    fn to_f32(self) -> f32 {
        match self {
            Number::Int(v) => v as f32,
            Number::Dec(v) => v,
        }
    }

    fn as_int(&self) -> Option<i32> {
        match self {
            Number::Int(v) => Some(*v),
            Number::Dec(_) => None,
        }
    }
}

impl ArithOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    /// Left fold over `operands`.
    pub(crate) fn fold(self, operands: &[Number]) -> EvalResult {
        if operands.iter().any(|n| matches!(n, Number::Dec(_))) {
            let mut values = operands.iter().map(|n| n.to_f32());
            let first = values.next().unwrap_or(0.0);
            return Ok(Node::Decimal(
                values.fold(first, |acc, v| self.apply_decimal(acc, v)),
            ));
        }

        let mut values = operands.iter().filter_map(Number::as_int);
        let mut acc = values.next().unwrap_or(0);
        for v in values {
            acc = self.apply_integer(acc, v)?;
        }
        Ok(Node::Integer(acc))
    }

    fn apply_integer(self, lhs: i32, rhs: i32) -> Result<i32, EvalError> {
        let result = match self {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mul => lhs.checked_mul(rhs),
            ArithOp::Div => {
                if rhs == 0 {
                    return Err(division_by_zero());
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or_else(|| integer_overflow(self.symbol()))
    }

    fn apply_decimal(self, lhs: f32, rhs: f32) -> f32 {
        match self {
            ArithOp::Add => lhs + rhs,
            ArithOp::Sub => lhs - rhs,
            ArithOp::Mul => lhs * rhs,
            ArithOp::Div => lhs / rhs,
        }
    }
}

/// `eq?`: same numeric variant and equal value. Everything else is unequal.
#[allow(clippy::float_cmp, reason = "eq? is exact numeric equality")]
pub(crate) fn numeric_eq(lhs: &Node, rhs: &Node) -> bool {
    match (lhs, rhs) {
        (Node::Integer(l), Node::Integer(r)) => l == r,
        (Node::Decimal(l), Node::Decimal(r)) => l == r,
        _ => false,
    }
}

/// `>`: same numeric variant compared; anything else is false.
pub(crate) fn numeric_gt(lhs: &Node, rhs: &Node) -> bool {
    match (lhs, rhs) {
        (Node::Integer(l), Node::Integer(r)) => l > r,
        (Node::Decimal(l), Node::Decimal(r)) => l > r,
        _ => false,
    }
}
