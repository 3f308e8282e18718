use std::{fmt, panic::Location};

use thiserror::Error;

use crate::support::newton;

use super::Identity;

/// The kind of failure reported by an isotherm operation.
///
/// Parameter-domain kinds are named after the positional parameter and the
/// rule it broke, e.g. `BadK2LEOne` means "K2 was less than or equal to one".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Qmax must be greater than zero")]
    BadQmaxLEZero,
    #[error("K1 must be greater than zero")]
    BadK1LEZero,
    #[error("K2 must be greater than zero")]
    BadK2LEZero,
    #[error("K2 must not be negative")]
    BadK2LTZero,
    #[error("K2 must be greater than one")]
    BadK2LEOne,
    #[error("K3 must be greater than zero")]
    BadK3LEZero,
    #[error("K4 must be greater than zero")]
    BadK4LEZero,
    #[error("concentration must not be negative")]
    BadCeLTZero,
    #[error("temperature must be greater than zero")]
    BadTemperatureLEZero,
    #[error("target loading must not be negative")]
    BadQeLTZero,
    #[error("solver derivative vanished")]
    ZeroDerivative,
    #[error("solver did not converge")]
    NonConvergence,
    #[error("evaluation produced a non-finite value")]
    NonFiniteResidual,
    #[error("invalid solver configuration")]
    InvalidSolverConfig,
    #[error("model evaluation failed during a solve")]
    EvaluationFailed,
    #[error("bracketed solve failed")]
    BracketFailure,
    #[error("parameter index out of range")]
    OutOfRange,
}

/// An error raised by an isotherm model or one of its solvers.
///
/// Carries the [`ErrorKind`], the [`Identity`] of the model that failed, the
/// source location the failing operation was called from, and a detail
/// message with the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{identity}: {kind}: {detail} (at {location})")]
pub struct IsothermError {
    kind: ErrorKind,
    identity: Identity,
    location: &'static Location<'static>,
    detail: String,
}

impl IsothermError {
    /// Creates an error tagged with the caller's source location.
    #[track_caller]
    pub fn new(kind: ErrorKind, identity: Identity, detail: impl Into<String>) -> Self {
        Self {
            kind,
            identity,
            location: Location::caller(),
            detail: detail.into(),
        }
    }

    /// Converts a Newton-Raphson failure into an isotherm error.
    #[track_caller]
    pub(crate) fn from_solver<E>(identity: Identity, err: &newton::Error<E>) -> Self
    where
        newton::Error<E>: fmt::Display,
    {
        let kind = match err {
            newton::Error::ZeroDerivative { .. } => ErrorKind::ZeroDerivative,
            newton::Error::NonConvergence { .. } => ErrorKind::NonConvergence,
            newton::Error::NonFinite { .. } | newton::Error::NonFiniteGuess { .. } => {
                ErrorKind::NonFiniteResidual
            }
            newton::Error::InvalidConfig { .. } => ErrorKind::InvalidSolverConfig,
            newton::Error::Function(_) => ErrorKind::EvaluationFailed,
        };
        Self::new(kind, identity, err.to_string())
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the identity of the model that failed.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Returns the source location of the failing call.
    ///
    /// For evaluation errors, including implicit solves inside a model, this
    /// is the call to [`Isotherm::qe`](super::Isotherm::qe) or `qe_at`.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the detail message.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::isotherm::IsothermKind;

    const LANGMUIR: Identity = Identity::new("Langmuir", IsothermKind::Langmuir);

    #[test]
    fn records_where_it_was_raised() {
        let err = IsothermError::new(ErrorKind::BadQmaxLEZero, LANGMUIR, "Qmax = 0");
        let line = line!() - 1;

        assert_eq!(err.kind(), ErrorKind::BadQmaxLEZero);
        assert_eq!(err.identity(), LANGMUIR);
        assert_eq!(err.location().file(), file!());
        assert_eq!(err.location().line(), line);
        assert_eq!(err.detail(), "Qmax = 0");
    }

    #[test]
    fn message_names_model_and_rule() {
        let err = IsothermError::new(ErrorKind::BadCeLTZero, LANGMUIR, "Ce = -1");
        let message = err.to_string();

        assert!(message.starts_with("Langmuir: concentration must not be negative: Ce = -1"));
    }

    #[test]
    fn solver_failures_map_to_kinds() {
        let err: newton::Error = newton::Error::NonConvergence {
            x: 1.0,
            residual: 0.5,
            iters: 5,
        };
        let converted = IsothermError::from_solver(LANGMUIR, &err);
        assert_eq!(converted.kind(), ErrorKind::NonConvergence);
        assert!(converted.detail().contains("5 iterations"));

        let err: newton::Error = newton::Error::ZeroDerivative {
            x: 0.0,
            derivative: 0.0,
            iter: 1,
        };
        assert_eq!(
            IsothermError::from_solver(LANGMUIR, &err).kind(),
            ErrorKind::ZeroDerivative
        );
    }
}
