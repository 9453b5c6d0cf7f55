//! Crate error type.

/// Errors surfaced at engine construction time.
///
/// Every post-construction operation is infallible by contract: `step()` and
/// `snapshot()` involve no I/O and no external resources, so there is nothing
/// left to fail once the inputs have been validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested arm count was zero (or the supplied arm list was empty).
    #[error("arm count must be positive, got {0}")]
    InvalidArmCount(usize),

    /// A Beta prior parameter was non-finite or non-positive.
    #[error("prior parameters must be finite and > 0, got alpha0={alpha}, beta0={beta}")]
    InvalidPrior {
        /// The offending `alpha0`.
        alpha: f64,
        /// The offending `beta0`.
        beta: f64,
    },
}
