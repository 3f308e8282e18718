use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values strictly greater than zero.
///
/// Capacities, affinity constants and absolute temperatures all carry this
/// constraint.
///
/// # Examples
///
/// ```
/// use isotherm_models::support::constraint::StrictlyPositive;
///
/// let k = StrictlyPositive::new(0.35).unwrap();
/// assert_eq!(k.into_inner(), 0.35);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_how_the_value_failed() {
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::check(&-3.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn accepts_tiny_and_huge_values() {
        assert!(StrictlyPositive::new(f64::MIN_POSITIVE).is_ok());
        assert!(StrictlyPositive::new(f64::MAX).is_ok());
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
    }

    #[test]
    fn integers() {
        assert_eq!(StrictlyPositive::new(7).unwrap().as_ref(), &7);
        assert!(StrictlyPositive::new(0).is_err());
    }
}
