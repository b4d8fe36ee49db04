/// A callable model that maps a borrowed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input, and must not mutate the input or any shared state. This makes
/// evaluations safe to repeat, reorder, or run concurrently.
///
/// The input is taken by reference and may be unsized, so a model over a
/// feature vector can borrow `[f64]` without copying.
pub trait Model {
    type Input: ?Sized;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
