//! Tags naming each scalar operator, for callers that record which
//! elementary function produced a value and later need its backward step.

use std::fmt::Display;

use crate::{
    error::OpResult,
    operators::{self, exp, inv_back, log_back, relu_back, sigmoid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Id,
    Neg,
    Sigmoid,
    Relu,
    Log,
    Exp,
    Inv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
    Max,
    Lt,
    Eq,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Id,
        UnaryOp::Neg,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }

    /// Evaluates the operator at `x`.
    ///
    /// # Errors
    /// Propagates the failure of [`operators::log`] or [`operators::inv`].
    pub fn apply(self, x: f64) -> OpResult<f64> {
        match self {
            UnaryOp::Id => Ok(operators::id(x)),
            UnaryOp::Neg => Ok(operators::neg(x)),
            UnaryOp::Sigmoid => Ok(sigmoid(x)),
            UnaryOp::Relu => Ok(operators::relu(x)),
            UnaryOp::Log => operators::log(x),
            UnaryOp::Exp => Ok(exp(x)),
            UnaryOp::Inv => operators::inv(x),
        }
    }

    /// Local derivative at `x` times the upstream gradient `grad`.
    ///
    /// # Errors
    /// Same conditions as the matching `*_back` function in [`operators`].
    pub fn backward(self, x: f64, grad: f64) -> OpResult<f64> {
        match self {
            UnaryOp::Id => Ok(grad),
            UnaryOp::Neg => Ok(-grad),
            UnaryOp::Sigmoid => {
                let s = sigmoid(x);
                Ok(s * (1.0 - s) * grad)
            }
            UnaryOp::Relu => relu_back(x, grad),
            UnaryOp::Log => log_back(x, grad),
            UnaryOp::Exp => Ok(exp(x) * grad),
            UnaryOp::Inv => inv_back(x, grad),
        }
    }
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Mul,
        BinaryOp::Max,
        BinaryOp::Lt,
        BinaryOp::Eq,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Max => "max",
            BinaryOp::Lt => "lt",
            BinaryOp::Eq => "eq",
        }
    }

    /// Evaluates the operator; comparisons yield `1.0` or `0.0`.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => operators::add(x, y),
            BinaryOp::Mul => operators::mul(x, y),
            BinaryOp::Max => operators::max(x, y),
            BinaryOp::Lt => f64::from(u8::from(operators::lt(x, y))),
            BinaryOp::Eq => f64::from(u8::from(operators::eq(x, y))),
        }
    }

    /// Pushback of `grad` to `(x, y)`.
    ///
    /// `Max` routes the whole gradient to the argument [`operators::max`]
    /// returned, so ties go to `y`. Comparisons are flat and pass nothing back.
    pub fn backward(self, x: f64, y: f64, grad: f64) -> (f64, f64) {
        match self {
            BinaryOp::Add => (grad, grad),
            BinaryOp::Mul => (y * grad, x * grad),
            BinaryOp::Max => {
                if x > y {
                    (grad, 0.0)
                } else {
                    (0.0, grad)
                }
            }
            BinaryOp::Lt | BinaryOp::Eq => (0.0, 0.0),
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
