// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Construction inputs for [`Polynomial`].
//!
//! A polynomial can be built from a scalar, a dense sequence (index = exponent) or a sparse
//! exponent to coefficient mapping. All numeric input types are converted to `f64` here,
//! at the boundary, so the arithmetic never has to inspect input types.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::Polynomial;
use ndarray::{Array1, ArrayView1};
use num_traits::{AsPrimitive, PrimInt};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Unvalidated polynomial coefficients.
#[derive(Clone, Debug, PartialEq)]
pub enum Coefficients {
    /// A constant polynomial.
    Scalar(f64),
    /// Coefficients in ascending order of degree.
    Dense(Vec<f64>),
    /// Exponent to coefficient mapping. Exponents are kept signed until validation.
    Sparse(BTreeMap<i128, f64>),
}

impl Coefficients {
    /// Validates the coefficients and converts them into the canonical sparse form.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::EmptyCoefficients` for an empty sequence or mapping,
    /// `PolynomialError::NegativeExponent` / `PolynomialError::ExponentOverflow` for an
    /// exponent outside `0..=usize::MAX`, and `PolynomialError::NonFiniteCoefficient` for
    /// NaN or infinite values.
    pub fn into_terms(self) -> PolynomialResult<BTreeMap<usize, f64>> {
        let terms: BTreeMap<usize, f64> = match self {
            Coefficients::Scalar(value) => {
                check_finite(value)?;
                BTreeMap::from([(0, value)])
            }
            Coefficients::Dense(values) => {
                if values.is_empty() {
                    return Err(PolynomialError::EmptyCoefficients);
                }
                values.iter().try_for_each(|&v| check_finite(v))?;
                values.into_iter().enumerate().collect()
            }
            Coefficients::Sparse(pairs) => {
                if pairs.is_empty() {
                    return Err(PolynomialError::EmptyCoefficients);
                }
                let exponents = pairs
                    .keys()
                    .map(|&exponent| validate_exponent(exponent))
                    .collect::<PolynomialResult<Vec<_>>>()?;
                pairs.values().try_for_each(|&v| check_finite(v))?;
                exponents.into_iter().zip(pairs.into_values()).collect()
            }
        };

        Ok(normalize(terms))
    }
}

/// Converts a raw exponent into a `usize`.
pub(crate) fn validate_exponent(exponent: i128) -> PolynomialResult<usize> {
    if exponent < 0 {
        return Err(PolynomialError::NegativeExponent { exponent });
    }
    usize::try_from(exponent).map_err(|_| PolynomialError::ExponentOverflow { exponent })
}

pub(crate) fn check_finite(value: f64) -> PolynomialResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PolynomialError::NonFiniteCoefficient { value })
    }
}

/// Drops zero coefficients, falling back to the canonical zero polynomial `{0: 0.0}`.
pub(crate) fn normalize(mut terms: BTreeMap<usize, f64>) -> BTreeMap<usize, f64> {
    terms.retain(|_, c| *c != 0.0);
    if terms.is_empty() {
        terms.insert(0, 0.0);
    }
    terms
}

fn sparse_from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Coefficients
where
    K: PrimInt,
    T: AsPrimitive<f64>,
{
    Coefficients::Sparse(
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_i128().unwrap_or(i128::MAX), v.as_()))
            .collect(),
    )
}

macro_rules! impl_scalar_inputs {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Coefficients {
                fn from(value: $t) -> Self {
                    Coefficients::Scalar(value.as_())
                }
            }

            impl From<$t> for Operand<'_> {
                fn from(value: $t) -> Self {
                    Operand::Raw(value.into())
                }
            }
        )*
    };
}

impl_scalar_inputs!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: AsPrimitive<f64>> From<Vec<T>> for Coefficients {
    fn from(values: Vec<T>) -> Self {
        Coefficients::Dense(values.into_iter().map(|v| v.as_()).collect())
    }
}

impl<T: AsPrimitive<f64>> From<&[T]> for Coefficients {
    fn from(values: &[T]) -> Self {
        Coefficients::Dense(values.iter().map(|v| v.as_()).collect())
    }
}

impl<T: AsPrimitive<f64>, const N: usize> From<[T; N]> for Coefficients {
    fn from(values: [T; N]) -> Self {
        Coefficients::Dense(values.iter().map(|v| v.as_()).collect())
    }
}

impl<T: AsPrimitive<f64>> From<Array1<T>> for Coefficients {
    fn from(values: Array1<T>) -> Self {
        Coefficients::Dense(values.iter().map(|v| v.as_()).collect())
    }
}

impl<T: AsPrimitive<f64>> From<ArrayView1<'_, T>> for Coefficients {
    fn from(values: ArrayView1<'_, T>) -> Self {
        Coefficients::Dense(values.iter().map(|v| v.as_()).collect())
    }
}

impl<K: PrimInt, T: AsPrimitive<f64>> From<BTreeMap<K, T>> for Coefficients {
    fn from(pairs: BTreeMap<K, T>) -> Self {
        sparse_from_pairs(pairs)
    }
}

impl<K: PrimInt + Hash, T: AsPrimitive<f64>, S: BuildHasher> From<HashMap<K, T, S>>
    for Coefficients
{
    fn from(pairs: HashMap<K, T, S>) -> Self {
        sparse_from_pairs(pairs)
    }
}

/// The right-hand side of a binary polynomial operation.
///
/// An explicit polynomial keeps its own symbol and must match the left operand's.
/// Raw coefficients are promoted to a polynomial in the left operand's symbol.
#[derive(Clone, Debug)]
pub enum Operand<'a> {
    Polynomial(Cow<'a, Polynomial>),
    Raw(Coefficients),
}

impl<'a> Operand<'a> {
    /// Builds the operand as a polynomial, promoting raw coefficients with `symbol`.
    ///
    /// An explicit polynomial is returned untouched, whatever its symbol.
    pub fn promote(self, symbol: &str) -> PolynomialResult<Cow<'a, Polynomial>> {
        match self {
            Operand::Polynomial(poly) => Ok(poly),
            Operand::Raw(coefficients) => {
                Polynomial::with_symbol(coefficients, symbol).map(Cow::Owned)
            }
        }
    }

    /// Like [`Operand::promote`], but an explicit polynomial must carry `symbol`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::SymbolMismatch` when an explicit polynomial uses another symbol.
    pub fn resolve(self, symbol: &str) -> PolynomialResult<Cow<'a, Polynomial>> {
        if let Operand::Polynomial(poly) = &self {
            if poly.symbol() != symbol {
                return Err(PolynomialError::symbol_mismatch(symbol, poly.symbol()));
            }
        }
        self.promote(symbol)
    }
}

impl From<Polynomial> for Operand<'_> {
    fn from(poly: Polynomial) -> Self {
        Operand::Polynomial(Cow::Owned(poly))
    }
}

impl<'a> From<&'a Polynomial> for Operand<'a> {
    fn from(poly: &'a Polynomial) -> Self {
        Operand::Polynomial(Cow::Borrowed(poly))
    }
}

impl From<Coefficients> for Operand<'_> {
    fn from(coefficients: Coefficients) -> Self {
        Operand::Raw(coefficients)
    }
}

impl<T: AsPrimitive<f64>> From<Vec<T>> for Operand<'_> {
    fn from(values: Vec<T>) -> Self {
        Operand::Raw(values.into())
    }
}

impl<T: AsPrimitive<f64>> From<&[T]> for Operand<'_> {
    fn from(values: &[T]) -> Self {
        Operand::Raw(values.into())
    }
}

impl<T: AsPrimitive<f64>, const N: usize> From<[T; N]> for Operand<'_> {
    fn from(values: [T; N]) -> Self {
        Operand::Raw(values.into())
    }
}

impl<T: AsPrimitive<f64>> From<Array1<T>> for Operand<'_> {
    fn from(values: Array1<T>) -> Self {
        Operand::Raw(values.into())
    }
}

impl<K: PrimInt, T: AsPrimitive<f64>> From<BTreeMap<K, T>> for Operand<'_> {
    fn from(pairs: BTreeMap<K, T>) -> Self {
        Operand::Raw(pairs.into())
    }
}

impl<K: PrimInt + Hash, T: AsPrimitive<f64>, S: BuildHasher> From<HashMap<K, T, S>>
    for Operand<'_>
{
    fn from(pairs: HashMap<K, T, S>) -> Self {
        Operand::Raw(pairs.into())
    }
}
