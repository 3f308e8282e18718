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

/// Sips (Langmuir–Freundlich) isotherm.
///
/// ```text
/// Qe = Qmax·(K1·Ce)^K2 / (1 + (K1·Ce)^K2)
/// ```
///
/// Reduces to Langmuir when `K2 = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sips {
    parameters: ParameterSet<3>,
}

impl Sips {
    /// Creates a Sips isotherm.
    ///
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

    /// Heterogeneity exponent.
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

impl IsothermModel for Sips {
    type Parameters = ParameterSet<3>;

    const IDENTITY: Identity = Identity::new("Sips", IsothermKind::Sips);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Maximum adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Sips affinity constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Heterogeneity exponent",
            Bound::Positive,
            ErrorKind::BadK2LEZero,
        ),
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
        Ok(self.qmax() * saturation((self.k1() * ce.get()).powf(self.k2())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::Langmuir;

    #[test]
    fn unit_exponent_is_langmuir() {
        let sips = Sips::new(3.0, 0.2, 1.0).unwrap();
        let langmuir = Langmuir::new(3.0, 0.2).unwrap();

        for ce in [0.1, 5.0, 50.0] {
            assert_relative_eq!(sips.qe_at(ce).unwrap(), langmuir.qe_at(ce).unwrap());
        }
    }

    #[test]
    fn half_capacity_at_inverse_affinity() {
        let model = Sips::new(3.0, 0.2, 0.8).unwrap();
        assert_relative_eq!(model.qe_at(5.0).unwrap(), 1.5);
    }

    #[test]
    fn rejects_bad_exponent() {
        assert_eq!(Sips::new(3.0, 0.2, 0.0).unwrap_err().kind(), ErrorKind::BadK2LEZero);
    }
}
