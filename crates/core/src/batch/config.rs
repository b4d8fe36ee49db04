use thiserror::Error;

use super::Layout;

/// Configuration for batch evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    layout: Layout,
    min_chunk: usize,
}

/// Errors that can occur when validating a batch config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_chunk must be greater than zero")]
    ZeroChunk,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            min_chunk: 1024,
        }
    }
}

impl Config {
    /// Creates a new config with a validated chunk size.
    ///
    /// `min_chunk` is the smallest number of samples handed to one worker when
    /// the `parallel` feature is enabled. It has no effect otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_chunk` is zero.
    pub fn new(layout: Layout, min_chunk: usize) -> Result<Self, ConfigError> {
        if min_chunk == 0 {
            return Err(ConfigError::ZeroChunk);
        }

        Ok(Self { layout, min_chunk })
    }

    /// Returns a copy of this config using `layout`.
    #[must_use]
    pub fn with_layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }

    /// Returns the axis convention of the batch.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the minimum number of samples per parallel work unit.
    #[must_use]
    pub fn min_chunk(&self) -> usize {
        self.min_chunk
    }
}
