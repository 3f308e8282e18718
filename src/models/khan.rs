use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};

use super::saturation;

const QMAX: usize = 0;
const K1: usize = 1;
const K2: usize = 2;

/// Khan isotherm for bi-solute and single-solute systems.
///
/// ```text
/// Qe = Qmax·K1·Ce / (1 + K1·Ce)^K2
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Khan {
    parameters: ParameterSet<3>,
}

impl Khan {
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`], [`ErrorKind::BadK1LEZero`] or
    /// [`ErrorKind::BadK2LEZero`].
    #[track_caller]
    pub fn new(qmax: f64, k1: f64, k2: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([qmax, k1, k2]))
    }

    #[must_use]
    pub fn qmax(&self) -> f64 {
        self.parameters.at::<QMAX>()
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
    }

    #[must_use]
    pub fn k2(&self) -> f64 {
        self.parameters.at::<K2>()
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`].
    #[track_caller]
    pub fn set_qmax(&mut self, qmax: f64) -> Result<(), IsothermError> {
        self.set_parameter(QMAX, qmax)
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn set_k1(&mut self, k1: f64) -> Result<(), IsothermError> {
        self.set_parameter(K1, k1)
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK2LEZero`].
    #[track_caller]
    pub fn set_k2(&mut self, k2: f64) -> Result<(), IsothermError> {
        self.set_parameter(K2, k2)
    }
}

impl IsothermModel for Khan {
    type Parameters = ParameterSet<3>;

    const IDENTITY: Identity = Identity::new("Khan", IsothermKind::Khan);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Maximum adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Khan affinity constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new("K2", "Khan exponent", Bound::Positive, ErrorKind::BadK2LEZero),
    ];

    fn parameters(&self) -> &Self::Parameters {
        &self.parameters
    }

    fn from_validated(parameters: Validated<Self::Parameters>) -> Self {
        Self {
            parameters: parameters.into_inner(),
        }
    }

    #[track_caller]
    fn equilibrium(
        &self,
        ce: Constrained<f64, NonNegative>,
        _temperature: f64,
    ) -> Result<f64, IsothermError> {
        let kc = self.k1() * ce.get();
        Ok(self.qmax() * saturation(kc) * (1.0 + kc).powf(1.0 - self.k2()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::Langmuir;

    #[test]
    fn unit_exponent_is_langmuir() {
        let khan = Khan::new(2.0, 0.4, 1.0).unwrap();
        let langmuir = Langmuir::new(2.0, 0.4).unwrap();

        assert_relative_eq!(khan.qe_at(3.0).unwrap(), langmuir.qe_at(3.0).unwrap());
    }

    #[test]
    fn closed_form() {
        let model = Khan::new(2.0, 1.0, 2.0).unwrap();
        assert_relative_eq!(model.qe_at(1.0).unwrap(), 0.5);
    }
}
