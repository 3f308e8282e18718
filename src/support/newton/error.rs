use std::convert::Infallible;

use thiserror::Error;

/// Errors that can occur during a Newton-Raphson solve.
///
/// `E` is the error type of a fallible function; it is [`Infallible`] for
/// plain `f64 -> f64` functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error<E = Infallible> {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("derivative {derivative:e} is numerically zero at x = {x} (iteration {iter})")]
    ZeroDerivative { x: f64, derivative: f64, iter: usize },

    #[error("no convergence after {iters} iterations: x = {x}, residual = {residual:e}")]
    NonConvergence { x: f64, residual: f64, iters: usize },

    #[error("non-finite function or derivative value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("function evaluation failed")]
    Function(#[source] E),
}

impl<E> Error<E> {
    /// Returns the last iterate reported by this error, if any.
    pub fn last_iterate(&self) -> Option<f64> {
        match self {
            Self::ZeroDerivative { x, .. }
            | Self::NonConvergence { x, .. }
            | Self::NonFinite { x, .. } => Some(*x),
            Self::NonFiniteGuess { x0 } => Some(*x0),
            Self::InvalidConfig { .. } | Self::Function(_) => None,
        }
    }
}
