use soroban_fixed_point_math::FixedPoint;

use crate::{
    constants::PERCENTAGE_PRECISION,
    error::{ArithmeticError, MathResult},
};

/// `floor(amount * percentage / 100)` for a non-negative `amount`.
pub fn percentage_of(amount: i128, percentage: u32) -> MathResult<i128> {
    if amount < 0 {
        return Err(ArithmeticError::Underflow);
    }

    amount
        .fixed_mul_floor(i128::from(percentage), PERCENTAGE_PRECISION)
        .ok_or(ArithmeticError::Overflow)
}
