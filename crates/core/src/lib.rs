//! Core traits and types for evaluating benchmark formulas.
//!
//! This crate defines the evaluation contract that formula collections build on:
//!
//! - [`Model`] — a deterministic callable that maps a borrowed input to an output
//! - [`batch`] — applies a `[f64] -> f64` model independently to every sample
//!   of a two-dimensional array

pub mod batch;
mod model;

pub use model::Model;
