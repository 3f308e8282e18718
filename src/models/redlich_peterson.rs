use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};

const K1: usize = 0;
const K2: usize = 1;
const K3: usize = 2;

/// Redlich–Peterson isotherm.
///
/// ```text
/// Qe = K1·Ce / (1 + K2·Ce^K3)
/// ```
///
/// Behaves like Henry's law at low concentration and like Freundlich at high
/// concentration when `K3 < 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct RedlichPeterson {
    parameters: ParameterSet<3>,
}

impl RedlichPeterson {
    /// Creates a Redlich–Peterson isotherm.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`], [`ErrorKind::BadK2LEZero`] or
    /// [`ErrorKind::BadK3LEZero`].
    #[track_caller]
    pub fn new(k1: f64, k2: f64, k3: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([k1, k2, k3]))
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
    }

    #[must_use]
    pub fn k2(&self) -> f64 {
        self.parameters.at::<K2>()
    }

    #[must_use]
    pub fn k3(&self) -> f64 {
        self.parameters.at::<K3>()
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

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK3LEZero`].
    #[track_caller]
    pub fn set_k3(&mut self, k3: f64) -> Result<(), IsothermError> {
        self.set_parameter(K3, k3)
    }
}

impl IsothermModel for RedlichPeterson {
    type Parameters = ParameterSet<3>;

    const IDENTITY: Identity = Identity::new("Redlich-Peterson", IsothermKind::RedlichPeterson);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "K1",
            "Redlich-Peterson capacity constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Redlich-Peterson affinity constant",
            Bound::Positive,
            ErrorKind::BadK2LEZero,
        ),
        ParameterDescriptor::new(
            "K3",
            "Redlich-Peterson exponent",
            Bound::Positive,
            ErrorKind::BadK3LEZero,
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
        let ce = ce.get();
        Ok(self.k1() * ce / (1.0 + self.k2() * ce.powf(self.k3())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closed_form() {
        let model = RedlichPeterson::new(1.5, 0.3, 0.5).unwrap();
        assert_relative_eq!(model.qe_at(4.0).unwrap(), 6.0 / 1.6);
    }

    #[test]
    fn henry_limit() {
        let model = RedlichPeterson::new(1.5, 0.3, 0.9).unwrap();
        assert_relative_eq!(model.qe_at(1e-10).unwrap(), 1.5e-10, max_relative = 1e-6);
    }

    #[test]
    fn every_position_is_validated() {
        assert_eq!(RedlichPeterson::new(0.0, 1.0, 1.0).unwrap_err().kind(), ErrorKind::BadK1LEZero);
        assert_eq!(RedlichPeterson::new(1.0, 0.0, 1.0).unwrap_err().kind(), ErrorKind::BadK2LEZero);
        assert_eq!(RedlichPeterson::new(1.0, 1.0, 0.0).unwrap_err().kind(), ErrorKind::BadK3LEZero);
    }
}
