use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};

const QMAX: usize = 0;
const K1: usize = 1;
const K2: usize = 2;

/// Toth isotherm.
///
/// ```text
/// Qe = Qmax·K1·Ce / (1 + (K1·Ce)^K2)^(1/K2)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Toth {
    parameters: ParameterSet<3>,
}

impl Toth {
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

impl IsothermModel for Toth {
    type Parameters = ParameterSet<3>;

    const IDENTITY: Identity = Identity::new("Toth", IsothermKind::Toth);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Maximum adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Toth affinity constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Toth heterogeneity exponent",
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
        let kc = self.k1() * ce.get();
        let t = self.k2();
        if kc <= 1.0 {
            Ok(self.qmax() * kc / (1.0 + kc.powf(t)).powf(t.recip()))
        } else {
            // Divided through by kc so kc^t cannot overflow.
            Ok(self.qmax() * (1.0 + kc.powf(-t)).powf(-t.recip()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closed_form() {
        let model = Toth::new(2.0, 0.5, 2.0).unwrap();

        // K1·Ce = 2: 2·2 / sqrt(1 + 4)
        assert_relative_eq!(model.qe_at(4.0).unwrap(), 4.0 / 5.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn saturates_at_capacity() {
        let model = Toth::new(2.0, 0.5, 0.6).unwrap();
        assert_relative_eq!(model.qe_at(1e12).unwrap(), 2.0, max_relative = 1e-6);
    }
}
