// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Construction from dynamically typed JSON values.
//!
//! Statically typed callers go through [`Coefficients`]. Untyped input (a JSON payload,
//! a config value) is checked here, where wrong input types surface as type errors:
//!
//! - a number is a constant polynomial;
//! - an array is a dense sequence, index = exponent;
//! - an object maps integer exponents (as keys) to coefficients.

use crate::coefficients::{check_finite, validate_exponent, Coefficients};
use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::Polynomial;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn number_to_f64(number: &Number) -> PolynomialResult<f64> {
    number
        .as_f64()
        .ok_or_else(|| PolynomialError::NonNumericCoefficient {
            found: number.to_string(),
        })
}

fn coefficient(value: &Value) -> PolynomialResult<&Number> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(PolynomialError::NonNumericCoefficient {
            found: describe(other),
        }),
    }
}

fn dense(values: &[Value]) -> PolynomialResult<Coefficients> {
    if values.is_empty() {
        return Err(PolynomialError::EmptyCoefficients);
    }
    let numbers = values
        .iter()
        .map(coefficient)
        .collect::<PolynomialResult<Vec<_>>>()?;
    numbers
        .into_iter()
        .map(number_to_f64)
        .collect::<PolynomialResult<Vec<_>>>()
        .map(Coefficients::Dense)
}

fn sparse(entries: &Map<String, Value>) -> PolynomialResult<Coefficients> {
    if entries.is_empty() {
        return Err(PolynomialError::EmptyCoefficients);
    }

    let exponents = entries
        .keys()
        .map(|key| {
            key.trim()
                .parse::<i128>()
                .map_err(|_| PolynomialError::NonIntegerExponent {
                    found: format!("{key:?}"),
                })
        })
        .collect::<PolynomialResult<Vec<_>>>()?;
    exponents
        .iter()
        .try_for_each(|&exponent| validate_exponent(exponent).map(|_| ()))?;

    let numbers = entries
        .values()
        .map(coefficient)
        .collect::<PolynomialResult<Vec<_>>>()?;
    let values = numbers
        .into_iter()
        .map(number_to_f64)
        .collect::<PolynomialResult<Vec<_>>>()?;
    values.iter().try_for_each(|&v| check_finite(v))?;

    let mut pairs = BTreeMap::new();
    for (exponent, value) in exponents.into_iter().zip(values) {
        *pairs.entry(exponent).or_insert(0.0) += value;
    }
    Ok(Coefficients::Sparse(pairs))
}

impl TryFrom<&Value> for Coefficients {
    type Error = PolynomialError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => number_to_f64(n).map(Coefficients::Scalar),
            Value::Array(values) => dense(values),
            Value::Object(entries) => sparse(entries),
            other => Err(PolynomialError::UnsupportedInput {
                found: describe(other),
            }),
        }
    }
}

impl Polynomial {
    /// Creates a polynomial from untyped JSON values.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - A number, an array, or an object keyed by integer exponents.
    /// * `symbol` - Must be a JSON string.
    ///
    /// # Errors
    ///
    /// Type errors (`UnsupportedInput`, `InvalidSymbol`, `NonIntegerExponent`,
    /// `NonNumericCoefficient`) for wrongly typed input, then the same value errors as
    /// [`Polynomial::with_symbol`].
    pub fn from_value(coefficients: &Value, symbol: &Value) -> PolynomialResult<Self> {
        if !matches!(
            coefficients,
            Value::Number(_) | Value::Array(_) | Value::Object(_)
        ) {
            return Err(PolynomialError::UnsupportedInput {
                found: describe(coefficients),
            });
        }
        let Value::String(symbol) = symbol else {
            return Err(PolynomialError::InvalidSymbol {
                found: describe(symbol),
            });
        };

        Polynomial::with_symbol(Coefficients::try_from(coefficients)?, symbol.as_str())
    }

    /// Raises the polynomial to a power given as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::NonIntegerPower` unless `power` is an integer, and
    /// `PolynomialError::NegativePower` for a negative one.
    pub fn pow_value(&self, power: &Value) -> PolynomialResult<Self> {
        match power {
            Value::Number(n) if n.is_i64() => self.pow(n.as_i64().unwrap_or_default()),
            Value::Number(n) if n.is_u64() => Err(PolynomialError::ExponentOverflow {
                exponent: i128::from(n.as_u64().unwrap_or_default()),
            }),
            other => Err(PolynomialError::NonIntegerPower {
                found: describe(other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;

    fn from_json(coefficients: Value) -> PolynomialResult<Polynomial> {
        Polynomial::from_value(&coefficients, &json!("x"))
    }

    #[test]
    fn test_wrong_input_types() {
        assert!(matches!(
            from_json(json!("abc")),
            Err(PolynomialError::UnsupportedInput { .. })
        ));
        assert!(matches!(
            from_json(json!(null)),
            Err(PolynomialError::UnsupportedInput { .. })
        ));
        assert!(matches!(
            Polynomial::from_value(&json!([0, 1, 2]), &json!(0)),
            Err(PolynomialError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(from_json(json!([])), Err(PolynomialError::EmptyCoefficients));
        assert_eq!(from_json(json!({})), Err(PolynomialError::EmptyCoefficients));
    }

    #[test]
    fn test_wrong_key_and_value_types() {
        let err = from_json(json!({"a": 1, "b": 2, "c": 3})).unwrap_err();
        assert!(matches!(err, PolynomialError::NonIntegerExponent { .. }));
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = from_json(json!({"1": "a", "2": "b", "3": "c"})).unwrap_err();
        assert!(matches!(err, PolynomialError::NonNumericCoefficient { .. }));
        assert_eq!(err.kind(), ErrorKind::Type);

        assert!(matches!(
            from_json(json!(["a", "b", "c"])),
            Err(PolynomialError::NonNumericCoefficient { .. })
        ));
    }

    #[test]
    fn test_negative_key_wins_over_value_type() {
        assert_eq!(
            from_json(json!({"-1": "a", "2": 2, "3": 3})),
            Err(PolynomialError::NegativeExponent { exponent: -1 })
        );
    }

    #[test]
    fn test_valid_inputs() {
        assert_eq!(from_json(json!(5)).unwrap(), Polynomial::new(5).unwrap());
        assert_eq!(
            from_json(json!([1, 0, 1])).unwrap(),
            Polynomial::new(vec![1, 0, 1]).unwrap()
        );
        assert_eq!(
            Polynomial::from_value(&json!({"1": 2, "3": 4.5}), &json!("y")).unwrap(),
            Polynomial::with_symbol(BTreeMap::from([(1, 2.0), (3, 4.5)]), "y").unwrap()
        );
        assert_eq!(
            from_json(json!({"0": 0, "2": 0, "5": 0})).unwrap(),
            Polynomial::zero("x")
        );
    }

    #[test]
    fn test_pow_value() {
        let p = Polynomial::new(vec![1, 1]).unwrap();
        assert_eq!(
            p.pow_value(&json!(2)).unwrap(),
            Polynomial::new(vec![1, 2, 1]).unwrap()
        );

        let err = p.pow_value(&json!(0.5)).unwrap_err();
        assert!(matches!(err, PolynomialError::NonIntegerPower { .. }));
        assert_eq!(err.kind(), ErrorKind::Type);

        assert_eq!(
            p.pow_value(&json!(-5)),
            Err(PolynomialError::NegativePower { power: -5 })
        );
    }
}
