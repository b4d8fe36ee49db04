use thiserror::Error;

/// Errors that can occur during batch evaluation.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The model failed on one sample.
    ///
    /// `sample` is the lowest failing sample index.
    #[error("model call failed for sample {sample}")]
    Model {
        sample: usize,
        #[source]
        source: E,
    },
}

impl<E> Error<E> {
    /// Returns the underlying model error.
    pub fn into_source(self) -> E {
        match self {
            Self::Model { source, .. } => source,
        }
    }
}
