//! The shared framework every isotherm model is built on.
//!
//! A model is a plain struct holding a [`ParameterSet`] that implements
//! [`IsothermModel`]: it declares its [`Identity`], a `const` schema of
//! [`ParameterDescriptor`]s (names, descriptions and domain rules), and the
//! formula for the quantity adsorbed. Everything else comes for free through
//! the object-safe [`Isotherm`] trait:
//!
//! - validation of every parameter at construction and on every mutation,
//! - transactional setters that leave the model untouched on failure,
//! - the non-negative concentration check in [`Isotherm::qe`],
//! - parameter metadata through the [`registry`].
//!
//! # Example
//!
//! ```
//! use isotherm_models::isotherm::{ErrorKind, Isotherm};
//! use isotherm_models::models::Langmuir;
//!
//! let mut model = Langmuir::new(2.5, 0.4).unwrap();
//! assert!((model.qe_at(1.0).unwrap() - 2.5 * 0.4 / 1.4).abs() < 1e-12);
//!
//! let err = model.set_qmax(-1.0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadQmaxLEZero);
//! assert_eq!(model.qmax(), 2.5);
//!
//! let err = model.qe_at(-1.0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadCeLTZero);
//! ```

mod error;
mod identity;
mod parameters;
mod schema;

pub mod inverse;
pub mod registry;

pub use error::{ErrorKind, IsothermError};
pub use identity::{Identity, IsothermKind};
pub use parameters::{Bound, ParameterSet, Parameters, Validated};
pub use schema::{Descriptors, ParameterDescriptor, Schema};

use std::fmt;

use crate::support::constraint::{Constrained, NonNegative};

use parameters::out_of_range;

/// Implementor-facing contract for a concrete isotherm model.
///
/// Implementing this trait provides [`Isotherm`] automatically.
pub trait IsothermModel: Clone + fmt::Debug + Send + Sync + 'static {
    /// Storage for the model's parameters, typically `ParameterSet<N>`.
    type Parameters: Parameters;

    /// Name and type tag of the model.
    const IDENTITY: Identity;

    /// One descriptor per parameter position, in storage order.
    const SCHEMA: &'static [ParameterDescriptor];

    /// Returns the stored parameters.
    fn parameters(&self) -> &Self::Parameters;

    /// Builds the model from parameters that already passed validation.
    fn from_validated(parameters: Validated<Self::Parameters>) -> Self;

    /// Evaluates the quantity adsorbed at a checked concentration.
    ///
    /// # Errors
    ///
    /// Returns an error for model-specific input rules (such as a
    /// non-positive temperature) or when an implicit solve fails.
    fn equilibrium(
        &self,
        ce: Constrained<f64, NonNegative>,
        temperature: f64,
    ) -> Result<f64, IsothermError>;

    /// Validates `parameters` against [`Self::SCHEMA`] and builds the model.
    ///
    /// # Errors
    ///
    /// Fails with the violated parameter's [`ErrorKind`] on the first
    /// parameter that breaks its rule.
    #[track_caller]
    fn try_from_parameters(parameters: Self::Parameters) -> Result<Self, IsothermError> {
        const {
            assert!(
                Self::SCHEMA.len() == <Self::Parameters as Parameters>::LEN,
                "schema must describe every parameter position"
            );
        };
        Validated::check(parameters, Self::IDENTITY, Self::SCHEMA).map(Self::from_validated)
    }
}

/// Caller-facing capabilities shared by every isotherm model.
///
/// This trait is object safe, so heterogeneous models can be stored as
/// `Box<dyn Isotherm>`.
pub trait Isotherm: fmt::Debug + Send + Sync {
    /// Returns the model's name and type tag.
    fn identity(&self) -> Identity;

    /// Returns the fixed number of parameters.
    fn parameter_count(&self) -> usize;

    /// Returns the parameter at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::OutOfRange`] if `index >= parameter_count()`.
    fn parameter(&self, index: usize) -> Result<f64, IsothermError>;

    /// Replaces the parameter at `index` and revalidates the whole model.
    ///
    /// The model is only updated if validation succeeds.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::OutOfRange`] for a bad index, or with the
    /// parameter's violation kind if `value` breaks its rule.
    fn set_parameter(&mut self, index: usize, value: f64) -> Result<(), IsothermError>;

    /// Returns the quantity adsorbed at equilibrium concentration `ce`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadCeLTZero`] if `ce` is negative or `NaN`,
    /// with [`ErrorKind::NonFiniteResidual`] if the model evaluates to an
    /// infinite or `NaN` loading, and with model-specific kinds otherwise.
    fn qe(&self, ce: f64, temperature: f64) -> Result<f64, IsothermError>;

    /// Returns the type-level parameter metadata.
    fn schema(&self) -> Schema;

    /// Clones the model into a new box.
    fn boxed_clone(&self) -> Box<dyn Isotherm>;

    /// Evaluates [`Isotherm::qe`] at a temperature of zero.
    ///
    /// Temperature-dependent models reject this with
    /// [`ErrorKind::BadTemperatureLEZero`].
    ///
    /// # Errors
    ///
    /// See [`Isotherm::qe`].
    #[track_caller]
    fn qe_at(&self, ce: f64) -> Result<f64, IsothermError> {
        self.qe(ce, 0.0)
    }

    /// Returns the descriptor of the parameter at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::OutOfRange`] if `index >= parameter_count()`.
    #[track_caller]
    fn describe(&self, index: usize) -> Result<&'static ParameterDescriptor, IsothermError> {
        self.schema().describe(index)
    }
}

impl<T: IsothermModel> Isotherm for T {
    fn identity(&self) -> Identity {
        T::IDENTITY
    }

    fn parameter_count(&self) -> usize {
        <T::Parameters as Parameters>::LEN
    }

    #[track_caller]
    fn parameter(&self, index: usize) -> Result<f64, IsothermError> {
        match self.parameters().values().get(index) {
            Some(&value) => Ok(value),
            None => Err(out_of_range(T::IDENTITY, index, <T::Parameters as Parameters>::LEN)),
        }
    }

    #[track_caller]
    fn set_parameter(&mut self, index: usize, value: f64) -> Result<(), IsothermError> {
        let Some(candidate) = self.parameters().replaced(index, value) else {
            return Err(out_of_range(T::IDENTITY, index, <T::Parameters as Parameters>::LEN));
        };
        let next = T::try_from_parameters(candidate)?;
        *self = next;
        Ok(())
    }

    #[track_caller]
    fn qe(&self, ce: f64, temperature: f64) -> Result<f64, IsothermError> {
        let qe = match NonNegative::new(ce) {
            Ok(ce) => self.equilibrium(ce, temperature)?,
            Err(reason) => {
                return Err(IsothermError::new(
                    ErrorKind::BadCeLTZero,
                    T::IDENTITY,
                    format!("Ce = {ce} ({reason})"),
                ));
            }
        };

        if !qe.is_finite() {
            return Err(IsothermError::new(
                ErrorKind::NonFiniteResidual,
                T::IDENTITY,
                format!("Qe = {qe} at Ce = {ce}"),
            ));
        }
        Ok(qe)
    }

    fn schema(&self) -> Schema {
        registry::schema::<T>()
    }

    fn boxed_clone(&self) -> Box<dyn Isotherm> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Isotherm> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::{Freundlich, Langmuir, Sips};

    #[test]
    fn getters_return_constructed_values() {
        let model = Sips::new(3.0, 0.2, 0.8).unwrap();

        assert_eq!(model.parameter_count(), 3);
        assert_eq!(model.parameter(0).unwrap(), 3.0);
        assert_eq!(model.parameter(1).unwrap(), 0.2);
        assert_eq!(model.parameter(2).unwrap(), 0.8);
        assert_eq!(model.parameter(3).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn failed_mutation_keeps_original_state() {
        let mut model = Freundlich::new(1.2, 2.0).unwrap();
        let before = *model.parameters();

        let err = model.set_parameter(1, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadK2LEOne);
        assert_eq!(*model.parameters(), before);

        let err = model.set_parameter(7, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(*model.parameters(), before);
    }

    #[test]
    fn mutation_changes_only_one_position() {
        let mut model = Sips::new(3.0, 0.2, 0.8).unwrap();
        model.set_parameter(1, 0.7).unwrap();

        assert_eq!(model.parameter(0).unwrap(), 3.0);
        assert_eq!(model.parameter(1).unwrap(), 0.7);
        assert_eq!(model.parameter(2).unwrap(), 0.8);
    }

    #[test]
    fn boxed_clones_are_independent() {
        let original: Box<dyn Isotherm> = Box::new(Langmuir::new(2.0, 1.0).unwrap());
        let mut copy = original.clone();
        copy.set_parameter(0, 5.0).unwrap();

        assert_eq!(original.parameter(0).unwrap(), 2.0);
        assert_eq!(copy.parameter(0).unwrap(), 5.0);
        assert_eq!(copy.identity(), original.identity());
    }

    #[test]
    fn negative_concentration_is_rejected_before_the_formula() {
        let model = Langmuir::new(2.0, 1.0).unwrap();

        for ce in [-1e-9, -5.0, f64::NAN, f64::NEG_INFINITY] {
            let err = model.qe(ce, 298.15).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadCeLTZero);
            assert_eq!(err.identity(), Langmuir::IDENTITY);
        }

        assert_relative_eq!(model.qe(0.0, 298.15).unwrap(), 0.0);
    }

    #[test]
    fn errors_point_at_the_caller() {
        let err = Langmuir::new(0.0, 1.0).unwrap_err();
        let line = line!() - 1;

        assert_eq!(err.location().file(), file!());
        assert_eq!(err.location().line(), line);
    }

    #[test]
    fn describe_uses_the_registry() {
        let model: Box<dyn Isotherm> = Box::new(Sips::new(3.0, 0.2, 0.8).unwrap());

        assert_eq!(model.describe(2).unwrap().name, "K2");
        assert_eq!(model.describe(3).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(model.schema(), registry::schema::<Sips>());
    }
}
