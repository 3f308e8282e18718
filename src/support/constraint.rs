//! Type-level numeric constraints.
//!
//! A [`Constrained<T, C>`] value is checked once, at construction, against the
//! marker constraint `C`. Code that receives one never has to check it again.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`GreaterThanOne`]: Greater than one
//!
//! `NaN` never satisfies a constraint.
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for your own zero-sized marker type.

mod greater_than_one;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use greater_than_one::GreaterThanOne;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing how the value falls short.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The way in which a value violated a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use isotherm_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let capacity = Constrained::<f64, StrictlyPositive>::new(2.5).unwrap();
/// assert_eq!(capacity.into_inner(), 2.5);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<C: Constraint<f64>> Constrained<f64, C> {
    /// Returns the inner value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }
}
