// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::coefficients::{check_finite, normalize, Coefficients, Operand};
use crate::errors::{PolynomialError, PolynomialResult};
use crate::utils::{format_coefficient, is_close};
use num_traits::Pow;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Neg;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symbol used for the indeterminate when none is given.
pub const DEFAULT_SYMBOL: &str = "x";

/// A single-variable polynomial with sparse `f64` coefficients.
///
/// The coefficients map exponents to non-zero, finite coefficients. The zero polynomial
/// is stored as the single entry `{0: 0.0}`. The symbol names the indeterminate; two
/// polynomials can only be combined when their symbols are identical.
///
/// Equality is exact: same symbol and bit-for-bit equal coefficients.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawPolynomial", into = "RawPolynomial")
)]
pub struct Polynomial {
    pub(crate) coefficients: BTreeMap<usize, f64>,
    pub(crate) symbol: String,
}

/// Unvalidated wire form of a [`Polynomial`].
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawPolynomial {
    coefficients: BTreeMap<i128, f64>,
    symbol: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolynomial> for Polynomial {
    type Error = PolynomialError;

    fn try_from(raw: RawPolynomial) -> Result<Self, Self::Error> {
        Polynomial::with_symbol(Coefficients::Sparse(raw.coefficients), raw.symbol)
    }
}

#[cfg(feature = "serde")]
impl From<Polynomial> for RawPolynomial {
    fn from(poly: Polynomial) -> Self {
        RawPolynomial {
            coefficients: poly
                .coefficients
                .into_iter()
                .map(|(exponent, c)| (exponent as i128, c))
                .collect(),
            symbol: poly.symbol,
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (1, Some(constant)) = (self.coefficients.len(), self.coefficients.get(&0)) {
            return f.write_str(&format_coefficient(*constant));
        }

        let mut out = String::new();
        for (&exponent, &coeff) in self.coefficients.iter().rev() {
            if !out.is_empty() {
                out.push_str(if coeff > 0.0 { "+ " } else { "- " });
            } else if coeff < 0.0 {
                out.push('-');
            }

            let magnitude = coeff.abs();
            if exponent == 0 {
                out.push_str(&format_coefficient(magnitude));
                continue;
            }

            if !is_close(magnitude, 1.0) {
                out.push_str(&format_coefficient(magnitude));
                out.push('*');
            }
            out.push_str(&self.symbol);
            if exponent > 1 {
                out.push_str(&format!("^{exponent}"));
            }
            out.push(' ');
        }

        f.write_str(out.trim())
    }
}

impl Polynomial {
    /// Creates a polynomial in the default symbol `x`.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - A scalar, a dense sequence in ascending order of degree, or an
    ///   exponent to coefficient mapping.
    ///
    /// # Errors
    ///
    /// Fails when the coefficients are empty, have a negative exponent, or contain NaN or
    /// infinite values.
    pub fn new(coefficients: impl Into<Coefficients>) -> PolynomialResult<Self> {
        Self::with_symbol(coefficients, DEFAULT_SYMBOL)
    }

    /// Creates a polynomial with an explicit symbol for the indeterminate.
    ///
    /// Any string is accepted as a symbol.
    pub fn with_symbol(
        coefficients: impl Into<Coefficients>,
        symbol: impl Into<String>,
    ) -> PolynomialResult<Self> {
        Ok(Self {
            coefficients: coefficients.into().into_terms()?,
            symbol: symbol.into(),
        })
    }

    /// Creates the single-term polynomial `coefficient * symbol^exponent`.
    pub fn monomial(
        exponent: usize,
        coefficient: f64,
        symbol: impl Into<String>,
    ) -> PolynomialResult<Self> {
        Self::from_terms(BTreeMap::from([(exponent, coefficient)]), symbol)
    }

    /// The canonical zero polynomial `{0: 0.0}`.
    pub fn zero(symbol: impl Into<String>) -> Self {
        Self {
            coefficients: BTreeMap::from([(0, 0.0)]),
            symbol: symbol.into(),
        }
    }

    /// The multiplicative identity `{0: 1.0}`.
    pub fn one(symbol: impl Into<String>) -> Self {
        Self {
            coefficients: BTreeMap::from([(0, 1.0)]),
            symbol: symbol.into(),
        }
    }

    /// Builds a polynomial from already keyed terms, re-checking finiteness.
    fn from_terms(
        terms: BTreeMap<usize, f64>,
        symbol: impl Into<String>,
    ) -> PolynomialResult<Self> {
        terms.values().try_for_each(|&c| check_finite(c))?;
        Ok(Self {
            coefficients: normalize(terms),
            symbol: symbol.into(),
        })
    }

    /// Returns the symbol of the indeterminate.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the exponent to coefficient mapping.
    pub fn coefficients(&self) -> &BTreeMap<usize, f64> {
        &self.coefficients
    }

    /// Returns the coefficient at `exponent`, or `0.0` when there is no such term.
    pub fn coefficient(&self, exponent: usize) -> f64 {
        self.coefficients.get(&exponent).copied().unwrap_or(0.0)
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.keys().next_back().copied().unwrap_or(0)
    }

    /// Returns the number of stored terms. The zero polynomial has one term.
    pub fn term_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Checks if the polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.values().all(|c| *c == 0.0)
    }

    /// Returns the highest-degree term as `(exponent, coefficient)`.
    pub fn leading_term(&self) -> (usize, f64) {
        self.coefficients
            .iter()
            .next_back()
            .map(|(&exponent, &c)| (exponent, c))
            .unwrap_or((0, 0.0))
    }

    /// Compares two polynomials coefficient-wise within an absolute `tolerance`.
    ///
    /// Unlike `==`, terms missing on one side compare against `0.0`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.symbol == other.symbol
            && self
                .coefficients
                .keys()
                .chain(other.coefficients.keys())
                .all(|&exponent| {
                    (self.coefficient(exponent) - other.coefficient(exponent)).abs() <= tolerance
                })
    }

    /// Evaluates the polynomial at `x` using Horner's method over the sparse terms.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut terms = self.coefficients.iter().rev();
        let Some((&top, &lead)) = terms.next() else {
            return 0.0;
        };

        let mut result = lead;
        let mut previous = top;
        for (&exponent, &coeff) in terms {
            result = result * num_traits::pow(x, previous - exponent) + coeff;
            previous = exponent;
        }
        result * num_traits::pow(x, previous)
    }

    /// Adds two polynomials together.
    ///
    /// # Arguments
    ///
    /// * `other` - A polynomial, or raw coefficients promoted to `self`'s symbol.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::SymbolMismatch` if `other` is a polynomial in another
    /// symbol, or a construction error if raw coefficients are invalid.
    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> PolynomialResult<Self> {
        let other = other.into().resolve(&self.symbol)?;
        let mut terms = self.coefficients.clone();
        for (&exponent, &coeff) in &other.coefficients {
            *terms.entry(exponent).or_insert(0.0) += coeff;
        }
        Self::from_terms(terms, self.symbol.as_str())
    }

    /// Subtracts one polynomial from another.
    ///
    /// Operand handling and errors are the same as for [`Polynomial::add`].
    pub fn sub<'a>(&self, other: impl Into<Operand<'a>>) -> PolynomialResult<Self> {
        let other = other.into().resolve(&self.symbol)?;
        let mut terms = self.coefficients.clone();
        for (&exponent, &coeff) in &other.coefficients {
            *terms.entry(exponent).or_insert(0.0) -= coeff;
        }
        Self::from_terms(terms, self.symbol.as_str())
    }

    /// Multiplies two polynomials by convolving their terms.
    ///
    /// Operand handling and errors are the same as for [`Polynomial::add`].
    pub fn mul<'a>(&self, other: impl Into<Operand<'a>>) -> PolynomialResult<Self> {
        let other = other.into().resolve(&self.symbol)?;
        let mut product = BTreeMap::new();
        for (&i, &a) in &self.coefficients {
            for (&j, &b) in &other.coefficients {
                let exponent = i
                    .checked_add(j)
                    .ok_or(PolynomialError::ExponentOverflow {
                        exponent: i as i128 + j as i128,
                    })?;
                *product.entry(exponent).or_insert(0.0) += a * b;
            }
        }
        Self::from_terms(product, self.symbol.as_str())
    }

    /// Raises the polynomial to a non-negative integer power by repeated multiplication.
    ///
    /// `p.pow(0)` is the identity `{0: 1.0}` for every `p`, the zero polynomial included.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::NegativePower` for a negative `power`.
    pub fn pow(&self, power: i64) -> PolynomialResult<Self> {
        if power < 0 {
            return Err(PolynomialError::NegativePower { power });
        }

        let mut result = Self::one(self.symbol.as_str());
        for _ in 0..power {
            result = result.mul(self)?;
        }
        Ok(result)
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// The result satisfies `self == quotient * divisor + remainder`, where the remainder
    /// is zero or has a lower degree than the divisor.
    ///
    /// # Arguments
    ///
    /// * `divisor` - A polynomial, or raw coefficients promoted to `self`'s symbol.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::SymbolMismatch` if the symbols differ and
    /// `PolynomialError::DivisionByZero` if the divisor is the zero polynomial.
    pub fn div_rem<'a>(&self, divisor: impl Into<Operand<'a>>) -> PolynomialResult<(Self, Self)> {
        let divisor = divisor.into().resolve(&self.symbol)?;
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }

        if self.degree() < divisor.degree() {
            debug!(
                dividend = self.degree(),
                divisor = divisor.degree(),
                "dividend degree below divisor degree, quotient is zero"
            );
            return Ok((Self::zero(self.symbol.as_str()), self.clone()));
        }

        let (lead_exponent, lead_coeff) = divisor.leading_term();
        let divisor_lead = Self::monomial(lead_exponent, lead_coeff, self.symbol.as_str())?;

        let mut remainder = self.clone();
        let mut quotient = Self::zero(self.symbol.as_str());
        while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
            let (exponent, coeff) = remainder.leading_term();
            let remainder_lead = Self::monomial(exponent, coeff, self.symbol.as_str())?;
            let term = div_monomials(&remainder_lead, &divisor_lead, &self.symbol)?;

            remainder = remainder.sub(term.mul(&*divisor)?)?;
            // The leading term cancels by construction; drop any rounding residue.
            remainder.remove_term(exponent);
            quotient = quotient.add(&term)?;

            trace!(
                quotient_term = %term,
                remainder_degree = remainder.degree(),
                "long division step"
            );
        }

        Ok((quotient, remainder))
    }

    fn remove_term(&mut self, exponent: usize) {
        self.coefficients.remove(&exponent);
        if self.coefficients.is_empty() {
            self.coefficients.insert(0, 0.0);
        }
    }
}

/// Divides one monomial by another of lower or equal degree.
///
/// Raw operands are promoted with `symbol`; explicit polynomials keep their own symbol.
///
/// # Errors
///
/// Checked in order:
/// - `PolynomialError::NotMonomial` if either operand has more than one term.
/// - `PolynomialError::SymbolMismatch` if the symbols differ.
/// - `PolynomialError::MonomialDegree` if the divisor has the greater degree.
/// - `PolynomialError::DivisionByZero` if the divisor is the zero polynomial.
pub fn div_monomials<'a, 'b>(
    dividend: impl Into<Operand<'a>>,
    divisor: impl Into<Operand<'b>>,
    symbol: &str,
) -> PolynomialResult<Polynomial> {
    let dividend = dividend.into().promote(symbol)?;
    let divisor = divisor.into().promote(symbol)?;

    for terms in [dividend.term_count(), divisor.term_count()] {
        if terms != 1 {
            return Err(PolynomialError::NotMonomial { terms });
        }
    }

    if dividend.symbol != divisor.symbol {
        return Err(PolynomialError::symbol_mismatch(
            dividend.symbol.as_str(),
            divisor.symbol.as_str(),
        ));
    }

    let (dividend_exponent, dividend_coeff) = dividend.leading_term();
    let (divisor_exponent, divisor_coeff) = divisor.leading_term();
    if dividend_exponent < divisor_exponent {
        return Err(PolynomialError::MonomialDegree {
            dividend: dividend_exponent,
            divisor: divisor_exponent,
        });
    }

    if divisor.is_zero() {
        return Err(PolynomialError::DivisionByZero);
    }

    Polynomial::monomial(
        dividend_exponent - divisor_exponent,
        dividend_coeff / divisor_coeff,
        dividend.symbol.as_str(),
    )
}

impl Polynomial {
    /// Associated form of the module-level [`div_monomials`].
    pub fn div_monomials<'a, 'b>(
        dividend: impl Into<Operand<'a>>,
        divisor: impl Into<Operand<'b>>,
        symbol: &str,
    ) -> PolynomialResult<Polynomial> {
        div_monomials(dividend, divisor, symbol)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coefficients: normalize(self.coefficients.iter().map(|(&e, &c)| (e, -c)).collect()),
            symbol: self.symbol.clone(),
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Pow<u32> for &Polynomial {
    type Output = PolynomialResult<Polynomial>;

    fn pow(self, power: u32) -> Self::Output {
        Polynomial::pow(self, i64::from(power))
    }
}
