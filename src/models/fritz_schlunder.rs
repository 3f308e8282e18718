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
const K3: usize = 3;
const K4: usize = 4;

/// Fritz–Schlunder five-parameter isotherm.
///
/// ```text
/// Qe = Qmax·K1·Ce^K3 / (1 + K2·Ce^K4)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FritzSchlunder {
    parameters: ParameterSet<5>,
}

impl FritzSchlunder {
    /// Creates a Fritz–Schlunder isotherm.
    ///
    /// # Errors
    ///
    /// Fails with the violation kind of the first non-positive parameter.
    #[track_caller]
    pub fn new(qmax: f64, k1: f64, k2: f64, k3: f64, k4: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([qmax, k1, k2, k3, k4]))
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

    #[must_use]
    pub fn k3(&self) -> f64 {
        self.parameters.at::<K3>()
    }

    #[must_use]
    pub fn k4(&self) -> f64 {
        self.parameters.at::<K4>()
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

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK3LEZero`].
    #[track_caller]
    pub fn set_k3(&mut self, k3: f64) -> Result<(), IsothermError> {
        self.set_parameter(K3, k3)
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK4LEZero`].
    #[track_caller]
    pub fn set_k4(&mut self, k4: f64) -> Result<(), IsothermError> {
        self.set_parameter(K4, k4)
    }
}

impl IsothermModel for FritzSchlunder {
    type Parameters = ParameterSet<5>;

    const IDENTITY: Identity = Identity::new("Fritz-Schlunder", IsothermKind::FritzSchlunder);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Maximum adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Fritz-Schlunder equilibrium constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Fritz-Schlunder denominator constant",
            Bound::Positive,
            ErrorKind::BadK2LEZero,
        ),
        ParameterDescriptor::new(
            "K3",
            "Numerator exponent",
            Bound::Positive,
            ErrorKind::BadK3LEZero,
        ),
        ParameterDescriptor::new(
            "K4",
            "Denominator exponent",
            Bound::Positive,
            ErrorKind::BadK4LEZero,
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
        Ok(self.qmax() * self.k1() * ce.powf(self.k3()) / (1.0 + self.k2() * ce.powf(self.k4())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closed_form() {
        let model = FritzSchlunder::new(3.0, 0.5, 1.0, 1.0, 0.5).unwrap();

        // 3·0.5·4 / (1 + 2)
        assert_relative_eq!(model.qe_at(4.0).unwrap(), 2.0);
    }

    #[test]
    fn fifth_parameter_is_validated_last() {
        let err = FritzSchlunder::new(3.0, 0.5, 1.0, 1.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadK4LEZero);
        assert!(err.detail().starts_with("K4 = 0"));

        let err = FritzSchlunder::new(0.0, 0.5, 1.0, 1.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadQmaxLEZero);
    }

    #[test]
    fn getters_follow_declared_order() {
        let model = FritzSchlunder::new(1.0, 2.0, 3.0, 4.0, 5.0).unwrap();

        assert_eq!(
            [model.qmax(), model.k1(), model.k2(), model.k3(), model.k4()],
            [1.0, 2.0, 3.0, 4.0, 5.0]
        );
        let by_index: Vec<f64> = (0..5).map(|i| model.parameter(i).unwrap()).collect();
        assert_eq!(by_index, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
