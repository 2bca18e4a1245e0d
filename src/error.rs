/// Failure raised by a scalar operator whose result is undefined at the given input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpError {
    /// Input lies outside the operator's domain, e.g. `log` of a non-positive number.
    Domain { op: &'static str, value: f64 },
    /// Input is exactly zero and the operator divides by it.
    DivisionByZero { op: &'static str },
    /// The derivative does not exist at `at`, e.g. `relu` at zero.
    UndefinedDerivative { op: &'static str, at: f64 },
}

pub type OpResult<T> = Result<T, OpError>;

impl OpError {
    pub(crate) fn domain(op: &'static str, value: f64) -> Self {
        log::trace!("{op}: rejected out-of-domain input {value}");
        OpError::Domain { op, value }
    }

    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        log::trace!("{op}: rejected zero divisor");
        OpError::DivisionByZero { op }
    }

    pub(crate) fn undefined_derivative(op: &'static str, at: f64) -> Self {
        log::trace!("{op}: derivative undefined at {at}");
        OpError::UndefinedDerivative { op, at }
    }

    /// Name of the operator that failed.
    pub fn op(&self) -> &'static str {
        match self {
            OpError::Domain { op, .. }
            | OpError::DivisionByZero { op }
            | OpError::UndefinedDerivative { op, .. } => *op,
        }
    }
}

impl std::error::Error for OpError {}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpError::Domain { op, value } => {
                write!(f, "{op}: math domain error for input {value}")
            }
            OpError::DivisionByZero { op } => {
                write!(f, "{op}: division by zero")
            }
            OpError::UndefinedDerivative { op, at } => {
                write!(f, "{op}: derivative does not exist at {at}")
            }
        }
    }
}
