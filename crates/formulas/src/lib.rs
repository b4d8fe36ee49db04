//! Closed-form benchmark formulas for symbolic regression harnesses.
//!
//! Each formula is a fixed expression over a feature vector `x`, built from
//! addition, subtraction, multiplication, division, `abs`, `sin`, `cos`,
//! `sqrt`, and `ln`. Formulas are registered under stable identifiers
//! `"f0"`..`"f8"` and evaluated with `f64` arithmetic.
//!
//! Evaluation is pure. The only failures are an unknown identifier and an
//! input shorter than the formula's arity. Domain violations such as a zero
//! denominator are not intercepted and surface as NaN or infinity.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use symreg_formulas::{BatchConfig, evaluate, evaluate_batch};
//!
//! let y = evaluate("f6", &[1.0, 2.0]).unwrap();
//! assert!((y - 2.7).abs() < 1e-12);
//!
//! // Two features, three samples.
//! let x = array![[1.0, 0.0, 2.0], [2.0, 0.0, 2.0]];
//! let ys = evaluate_batch("f6", x.view(), &BatchConfig::default()).unwrap();
//! assert_eq!(ys.len(), 3);
//! ```

mod definitions;
mod error;
mod formula;
mod id;
pub mod registry;

pub use error::Error;
pub use formula::Formula;
pub use id::FormulaId;
pub use symreg_core::Model;
pub use symreg_core::batch::{Config as BatchConfig, ConfigError, Layout};

use ndarray::{Array1, ArrayView2};

/// Evaluates the formula registered as `name` on a single feature vector.
///
/// # Errors
///
/// Returns [`Error::UnknownFormula`] if `name` is not registered, or
/// [`Error::IndexOutOfRange`] if `x` is shorter than the formula's arity.
pub fn evaluate(name: &str, x: &[f64]) -> Result<f64, Error> {
    registry::get(name)?.evaluate(x)
}

/// Evaluates the formula registered as `name` on every sample of a batch.
///
/// See [`Formula::evaluate_batch`] for the axis convention.
///
/// # Errors
///
/// Returns [`Error::UnknownFormula`] if `name` is not registered, or
/// [`Error::IndexOutOfRange`] if the batch has fewer features than the
/// formula's arity.
pub fn evaluate_batch(
    name: &str,
    samples: ArrayView2<'_, f64>,
    config: &BatchConfig,
) -> Result<Array1<f64>, Error> {
    registry::get(name)?.evaluate_batch(samples, config)
}
