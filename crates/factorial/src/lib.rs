use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::debug;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_INPUT: i64 = 34;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactorialError {
    Negative(i64),
    Overflow(i64),
}

impl Display for FactorialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(n) => {
                write!(f, "factorial is not defined for negative numbers (got {n})")
            }
            Self::Overflow(n) => write!(f, "{n}! does not fit in 128 bits"),
        }
    }
}

impl Error for FactorialError {}

/// `n!` by recursion, one stack frame per factor.
///
/// Inputs above [`MAX_INPUT`] are rejected before recursing, which also bounds
/// the recursion depth.
pub fn factorial(n: i64) -> Result<u128, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    if n > MAX_INPUT {
        debug!("rejecting {n}! before recursing");
        return Err(FactorialError::Overflow(n));
    }
    Ok(factorial_recursive(n as u128))
}

fn factorial_recursive(n: u128) -> u128 {
    if n <= 1 {
        1
    } else {
        n * factorial_recursive(n - 1)
    }
}

/// `n!` by a running product in constant space.
pub fn factorial_iterative(n: i64) -> Result<u128, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    (2..=n as u128)
        .try_fold(1_u128, |acc, factor| acc.checked_mul(factor))
        .ok_or(FactorialError::Overflow(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_known_cases() {
        let cases = [
            (0_i64, 1_u128),
            (1, 1),
            (2, 2),
            (5, 120),
            (10, 3_628_800),
            (20, 2_432_902_008_176_640_000),
        ];

        for (n, expected) in cases {
            assert_eq!(factorial(n), Ok(expected), "n={n}");
            assert_eq!(factorial_iterative(n), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn factorial_impls_agree_up_to_limit() {
        for n in 0..=MAX_INPUT {
            assert_eq!(factorial(n), factorial_iterative(n), "n={n}");
        }
        assert!(factorial(MAX_INPUT).is_ok());
    }

    #[test]
    fn negative_input_is_rejected() {
        assert_eq!(factorial(-5), Err(FactorialError::Negative(-5)));
        assert_eq!(factorial_iterative(-1), Err(FactorialError::Negative(-1)));
    }

    #[test]
    fn overflow_is_reported() {
        for n in [MAX_INPUT + 1, 100, i64::MAX] {
            assert_eq!(factorial(n), Err(FactorialError::Overflow(n)));
            assert_eq!(factorial_iterative(n), Err(FactorialError::Overflow(n)));
        }
    }
}
