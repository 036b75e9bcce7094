/// Failure of a checked arithmetic operation. Contracts convert it into their
/// own error enum with `From`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArithmeticError {
    Overflow,
    Underflow,
    DivisionByZero,
}

pub type MathResult<T = ()> = Result<T, ArithmeticError>;
