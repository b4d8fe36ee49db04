//! Shared fixtures for cross-crate tests.

use ndarray::Array2;

/// Builds a deterministic `(features, samples)` batch with mixed signs and magnitudes.
///
/// Values stay away from the exact points where any formula divides by zero.
#[must_use]
pub fn sample_batch(features: usize, samples: usize) -> Array2<f64> {
    Array2::from_shape_fn((features, samples), |(i, j)| {
        let t = (j as f64 + 1.0) * 0.37 + i as f64 * 1.13;
        if (i + j) % 3 == 0 { -t.sqrt() * 2.5 } else { t.sin() * 7.0 + t }
    })
}

/// Returns column `sample` of a `(features, samples)` batch as a vector.
#[must_use]
pub fn column(batch: &Array2<f64>, sample: usize) -> Vec<f64> {
    batch.column(sample).to_vec()
}
