use std::fmt;

use crate::support::constraint::{
    Constraint, ConstraintError, GreaterThanOne, NonNegative, StrictlyPositive,
};

use super::{ErrorKind, Identity, IsothermError, ParameterDescriptor};

/// Fixed-length storage for a model's parameters.
///
/// The length `N` is part of the type, so it never changes after construction.
/// Values are replaced only by building a new set (see [`Parameters::replaced`])
/// and revalidating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet<const N: usize> {
    values: [f64; N],
}

impl<const N: usize> ParameterSet<N> {
    #[must_use]
    pub const fn new(values: [f64; N]) -> Self {
        Self { values }
    }

    /// Returns the value at position `I`.
    ///
    /// The position is checked at compile time.
    ///
    /// ```compile_fail
    /// # use isotherm_models::isotherm::ParameterSet;
    /// let set = ParameterSet::new([1.0, 2.0]);
    /// let _ = set.at::<2>();
    /// ```
    #[must_use]
    pub fn at<const I: usize>(&self) -> f64 {
        const { assert!(I < N, "parameter position out of range") };
        self.values[I]
    }

    /// Returns the value at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterates over the values in declared order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl<const N: usize> From<[f64; N]> for ParameterSet<N> {
    fn from(values: [f64; N]) -> Self {
        Self::new(values)
    }
}

/// Parameter storage usable by an [`IsothermModel`](super::IsothermModel).
pub trait Parameters: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Number of parameters.
    const LEN: usize;

    /// Returns the values in declared order.
    fn values(&self) -> &[f64];

    /// Returns a copy with the value at `index` replaced, or `None` if
    /// `index` is out of range. The result is not validated.
    fn replaced(&self, index: usize, value: f64) -> Option<Self>;
}

impl<const N: usize> Parameters for ParameterSet<N> {
    const LEN: usize = N;

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn replaced(&self, index: usize, value: f64) -> Option<Self> {
        let mut next = *self;
        *next.values.get_mut(index)? = value;
        Some(next)
    }
}

/// Domain rule for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `x > 0`
    Positive,
    /// `x >= 0`
    NonNegative,
    /// `x > 1`
    GreaterThanOne,
}

impl Bound {
    /// Checks `value` against this rule. Every rule also requires a finite
    /// value.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    pub fn check(self, value: f64) -> Result<(), ConstraintError> {
        if value.is_infinite() {
            return Err(ConstraintError::Infinite);
        }
        match self {
            Self::Positive => StrictlyPositive::check(&value),
            Self::NonNegative => NonNegative::check(&value),
            Self::GreaterThanOne => GreaterThanOne::check(&value),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "> 0",
            Self::NonNegative => ">= 0",
            Self::GreaterThanOne => "> 1",
        })
    }
}

/// Parameters that passed every rule of a model's schema.
///
/// Only [`IsothermModel::try_from_parameters`](super::IsothermModel::try_from_parameters)
/// produces these, so a model built from one always holds valid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validated<P>(P);

impl<P: Parameters> Validated<P> {
    /// Checks each value against its descriptor, in declared order, and
    /// fails on the first violation.
    #[track_caller]
    pub(crate) fn check(
        parameters: P,
        identity: Identity,
        schema: &[ParameterDescriptor],
    ) -> Result<Self, IsothermError> {
        for (&value, descriptor) in parameters.values().iter().zip(schema) {
            if let Err(reason) = descriptor.bound.check(value) {
                return Err(IsothermError::new(
                    descriptor.violation,
                    identity,
                    format!(
                        "{} = {value} ({reason}; required {})",
                        descriptor.name, descriptor.bound
                    ),
                ));
            }
        }
        Ok(Self(parameters))
    }

    /// Returns the validated parameters.
    pub fn into_inner(self) -> P {
        self.0
    }
}

/// Fails with [`ErrorKind::OutOfRange`] for positions past `len`.
#[track_caller]
pub(crate) fn out_of_range(identity: Identity, index: usize, len: usize) -> IsothermError {
    IsothermError::new(
        ErrorKind::OutOfRange,
        identity,
        format!("index {index} but the model has {len} parameters"),
    )
}
