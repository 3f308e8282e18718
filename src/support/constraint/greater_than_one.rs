use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values strictly greater than one.
///
/// Used for heterogeneity exponents such as the Freundlich `n`, where
/// `n > 1` describes favourable adsorption.
///
/// # Examples
///
/// ```
/// use isotherm_models::support::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(1.5).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs a [`Constrained<T, GreaterThanOne>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is at or below one, or `NaN`.
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
