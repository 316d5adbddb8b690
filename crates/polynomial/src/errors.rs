// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.
//!
//! Every failure falls into one of three kinds (see [`ErrorKind`]): the argument had the
//! wrong shape, the argument had the right shape but an invalid value, or a division
//! reduced to a division by the zero monomial.

use thiserror::Error;

/// Coarse classification of a [`PolynomialError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument type at a boundary.
    Type,
    /// Right type, semantically invalid value.
    Value,
    /// Division by the zero monomial.
    DivisionByZero,
}

/// Errors that can occur during polynomial construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolynomialError {
    /// The coefficient container is not a number, a sequence or a mapping.
    #[error("Unsupported coefficient input: {found}")]
    UnsupportedInput { found: String },

    /// The symbol is not a string.
    #[error("Symbol must be a string, got {found}")]
    InvalidSymbol { found: String },

    /// A mapping key is not an integer.
    #[error("Exponents must be integers, got {found}")]
    NonIntegerExponent { found: String },

    /// A coefficient cannot be read as a number.
    #[error("Coefficients must be numeric, got {found}")]
    NonNumericCoefficient { found: String },

    /// A power is not an integer.
    #[error("The power must be an integer, got {found}")]
    NonIntegerPower { found: String },

    /// No coefficients were supplied.
    #[error("Coefficients are not provided")]
    EmptyCoefficients,

    /// A mapping key is below zero.
    #[error("Exponents must be greater than or equal to zero, got {exponent}")]
    NegativeExponent { exponent: i128 },

    /// A mapping key does not fit the exponent type.
    #[error("Exponent {exponent} is out of range")]
    ExponentOverflow { exponent: i128 },

    /// A coefficient is NaN or infinite.
    #[error("Coefficients must be well-defined, got {value}")]
    NonFiniteCoefficient { value: f64 },

    /// A power is below zero.
    #[error("The power must be greater than or equal to zero, got {power}")]
    NegativePower { power: i64 },

    /// Two explicit polynomials use different indeterminates.
    #[error("Polynomial symbols differ: '{left}' and '{right}'")]
    SymbolMismatch { left: String, right: String },

    /// A monomial operation received a polynomial with more than one term.
    #[error("Expected a monomial, got a polynomial with {terms} terms")]
    NotMonomial { terms: usize },

    /// The divisor monomial has a greater degree than the dividend.
    #[error("The dividend degree ({dividend}) must be at least the divisor degree ({divisor})")]
    MonomialDegree { dividend: usize, divisor: usize },

    /// Division by the zero polynomial.
    #[error("Division by zero polynomial")]
    DivisionByZero,
}

/// Result type alias for polynomial operations.
pub type PolynomialResult<T> = Result<T, PolynomialError>;

impl PolynomialError {
    /// Returns the kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PolynomialError::UnsupportedInput { .. }
            | PolynomialError::InvalidSymbol { .. }
            | PolynomialError::NonIntegerExponent { .. }
            | PolynomialError::NonNumericCoefficient { .. }
            | PolynomialError::NonIntegerPower { .. } => ErrorKind::Type,
            PolynomialError::EmptyCoefficients
            | PolynomialError::NegativeExponent { .. }
            | PolynomialError::ExponentOverflow { .. }
            | PolynomialError::NonFiniteCoefficient { .. }
            | PolynomialError::NegativePower { .. }
            | PolynomialError::SymbolMismatch { .. }
            | PolynomialError::NotMonomial { .. }
            | PolynomialError::MonomialDegree { .. } => ErrorKind::Value,
            PolynomialError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    /// Creates a symbol mismatch error for two symbols.
    pub fn symbol_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        PolynomialError::SymbolMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            PolynomialError::UnsupportedInput {
                found: "string".to_string()
            }
            .kind(),
            ErrorKind::Type
        );
        assert_eq!(PolynomialError::EmptyCoefficients.kind(), ErrorKind::Value);
        assert_eq!(
            PolynomialError::symbol_mismatch("x", "y").kind(),
            ErrorKind::Value
        );
        assert_eq!(
            PolynomialError::DivisionByZero.kind(),
            ErrorKind::DivisionByZero
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PolynomialError::symbol_mismatch("x", "y").to_string(),
            "Polynomial symbols differ: 'x' and 'y'"
        );
        assert_eq!(
            PolynomialError::NegativePower { power: -5 }.to_string(),
            "The power must be greater than or equal to zero, got -5"
        );
    }
}
