//! Batch evaluation of `[f64] -> f64` models.
//!
//! A batch is a two-dimensional array of feature values. The [`Layout`] decides
//! which axis indexes samples; each sample's features form one lane, and the
//! model is called once per lane with no state shared between lanes. The output
//! holds one value per sample, in sample order.
//!
//! Contiguous lanes are borrowed directly. Strided lanes (for example, samples
//! stored as columns of a row-major array) are gathered into a temporary buffer
//! first, so the model always sees a plain slice.
//!
//! # Parallelism
//!
//! With the `parallel` feature, lanes are evaluated on the `rayon` thread pool
//! in chunks of at least [`Config::min_chunk`] samples. Results are identical
//! to sequential evaluation, and the reported error is always the one for the
//! lowest failing sample index.

mod config;
mod error;
mod layout;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use layout::Layout;

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::Model;

/// Thread-safety required of a model by [`evaluate`].
///
/// Resolves to `Sync` when the `parallel` feature is enabled and to no bound
/// otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}

#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// Thread-safety required of a model by [`evaluate`].
///
/// Resolves to `Sync` when the `parallel` feature is enabled and to no bound
/// otherwise.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}

#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}

/// Evaluates `model` independently on every sample of `samples`.
///
/// # Errors
///
/// Returns [`Error::Model`] for the lowest-indexed sample on which the model
/// fails. A batch with zero samples never calls the model and returns an
/// empty array.
pub fn evaluate<M>(
    model: &M,
    samples: ArrayView2<'_, f64>,
    config: &Config,
) -> Result<Array1<f64>, Error<M::Error>>
where
    M: Model<Input = [f64], Output = f64> + MaybeSync,
{
    let layout = config.layout();
    log::trace!(
        "evaluating {} samples of {} features ({layout:?})",
        samples.len_of(layout.sample_axis()),
        samples.len_of(layout.feature_axis()),
    );

    evaluate_samples(model, samples, layout.sample_axis(), config)
        .map(Array1::from)
        .inspect_err(|err| log::debug!("batch evaluation aborted: {err}"))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_samples<M>(
    model: &M,
    samples: ArrayView2<'_, f64>,
    axis: Axis,
    _config: &Config,
) -> Result<Vec<f64>, Error<M::Error>>
where
    M: Model<Input = [f64], Output = f64>,
{
    samples
        .axis_iter(axis)
        .enumerate()
        .map(|(sample, lane)| evaluate_lane(model, sample, lane))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_samples<M>(
    model: &M,
    samples: ArrayView2<'_, f64>,
    axis: Axis,
    config: &Config,
) -> Result<Vec<f64>, Error<M::Error>>
where
    M: Model<Input = [f64], Output = f64> + Sync,
{
    use rayon::prelude::*;

    let results: Vec<_> = (0..samples.len_of(axis))
        .into_par_iter()
        .with_min_len(config.min_chunk())
        .map(|sample| evaluate_lane(model, sample, samples.index_axis(axis, sample)))
        .collect();

    // Sequential collect keeps the lowest failing index.
    results.into_iter().collect()
}

fn evaluate_lane<M>(
    model: &M,
    sample: usize,
    lane: ArrayView1<'_, f64>,
) -> Result<f64, Error<M::Error>>
where
    M: Model<Input = [f64], Output = f64>,
{
    let result = match lane.as_slice() {
        Some(features) => model.call(features),
        None => model.call(lane.to_vec().as_slice()),
    };

    result.map_err(|source| Error::Model { sample, source })
}
