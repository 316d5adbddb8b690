// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Sparse Polynomial Library
//!
//! A single-variable polynomial value type with sparse, double-precision coefficients.
//!
//! ## Features
//!
//! - Construction from a scalar, a dense sequence (slices, vectors, arrays, `ndarray`
//!   vectors) or an exponent to coefficient mapping, with validation and zero elision.
//! - Arithmetic: addition, subtraction, negation, multiplication and integer powers.
//! - Euclidean long division returning quotient and remainder.
//! - Exact equality and canonical string rendering.
//! - Construction from untyped JSON values.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Conventions
//!
//! - The zero polynomial is stored as `{0: 0.0}` and has degree 0.
//! - `p.pow(0)` is the identity polynomial for every `p`, including the zero polynomial.
//! - Binary operations accept raw coefficients on the right-hand side; they are promoted
//!   to the left operand's symbol. Two explicit polynomials must share the same symbol.
//!
//! ```
//! use sparse_polynomial::Polynomial;
//!
//! let p = Polynomial::new(vec![-3, -22, 23, -10, 2]).unwrap();
//! let (quotient, remainder) = p.div_rem(vec![5, -3, 1]).unwrap();
//! assert_eq!(quotient.to_string(), "2.0*x^2 - 4.0*x + 1.0");
//! assert_eq!(remainder.to_string(), "x - 8.0");
//! ```

pub mod coefficients;
pub mod errors;
pub mod polynomial;
pub mod utils;
pub mod value;

pub use coefficients::{Coefficients, Operand};
pub use errors::{ErrorKind, PolynomialError, PolynomialResult};
pub use polynomial::{div_monomials, Polynomial, DEFAULT_SYMBOL};
pub use utils::*;
