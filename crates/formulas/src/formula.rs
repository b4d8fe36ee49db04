use std::fmt;

use ndarray::{Array1, ArrayView2};
use symreg_core::{Model, batch};

use crate::{Error, FormulaId};

/// A closed-form expression over a feature vector.
///
/// A formula reads features `x[0]` through `x[arity - 1]`. Inputs are checked
/// against the arity once, before the expression runs; extra trailing features
/// are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    id: FormulaId,
    arity: usize,
    expression: &'static str,
    body: fn(&[f64]) -> f64,
}

impl Formula {
    /// Creates a formula.
    ///
    /// `body` may index `x[..arity]` freely; callers never reach it with a
    /// shorter input.
    pub(crate) const fn new(
        id: FormulaId,
        arity: usize,
        expression: &'static str,
        body: fn(&[f64]) -> f64,
    ) -> Self {
        Self {
            id,
            arity,
            expression,
            body,
        }
    }

    /// Returns the identifier this formula is registered under.
    #[must_use]
    pub fn id(&self) -> FormulaId {
        self.id
    }

    /// Returns the number of leading features the formula reads.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the expression in infix notation, e.g. `"sin(x[0])"`.
    #[must_use]
    pub fn expression(&self) -> &'static str {
        self.expression
    }

    /// Evaluates the formula on a single feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `x` has fewer than
    /// [`arity`](Self::arity) values.
    pub fn evaluate(&self, x: &[f64]) -> Result<f64, Error> {
        if x.len() < self.arity {
            return Err(Error::IndexOutOfRange {
                index: self.arity - 1,
                len: x.len(),
            });
        }

        Ok((self.body)(x))
    }

    /// Evaluates the formula independently on every sample of a batch.
    ///
    /// The axis holding samples is chosen by the config's [`batch::Layout`].
    /// The output has one value per sample, in sample order, and each value is
    /// bit-identical to [`evaluate`](Self::evaluate) on that sample alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the batch has fewer features than
    /// the formula's arity and at least one sample.
    pub fn evaluate_batch(
        &self,
        samples: ArrayView2<'_, f64>,
        config: &batch::Config,
    ) -> Result<Array1<f64>, Error> {
        batch::evaluate(self, samples, config).map_err(batch::Error::into_source)
    }
}

impl Model for Formula {
    type Input = [f64];
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &[f64]) -> Result<f64, Self::Error> {
        self.evaluate(input)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(x) = {}", self.id, self.expression)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn rejects_short_input_for_every_formula() {
        for id in FormulaId::ALL {
            let formula = id.formula();
            let short = vec![0.5; formula.arity() - 1];

            assert_eq!(
                formula.evaluate(&short),
                Err(Error::IndexOutOfRange {
                    index: formula.arity() - 1,
                    len: formula.arity() - 1,
                }),
                "{id} accepted an input of length {}",
                short.len(),
            );
        }
    }

    #[test]
    fn accepts_exact_and_longer_input() {
        for id in FormulaId::ALL {
            let formula = id.formula();
            let exact = vec![0.5; formula.arity()];
            let mut longer = exact.clone();
            longer.push(123.0);

            let y = formula.evaluate(&exact).unwrap();
            assert_eq!(y.to_bits(), formula.evaluate(&longer).unwrap().to_bits());
        }
    }

    #[test]
    fn display_shows_id_and_expression() {
        assert_eq!(FormulaId::F1.formula().to_string(), "f1(x) = sin(x[0])");
    }

    #[test]
    fn batch_rejects_too_few_features() {
        let batch = array![[1.0, 2.0, 3.0]];

        let error = FormulaId::F6
            .formula()
            .evaluate_batch(batch.view(), &batch::Config::default())
            .unwrap_err();

        assert_eq!(error, Error::IndexOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn model_call_matches_evaluate() {
        let formula = FormulaId::F4.formula();
        let x = [0.3, -1.2];

        assert_eq!(formula.call(&x[..]), formula.evaluate(&x));
    }
}
