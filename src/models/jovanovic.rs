use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};

const QMAX: usize = 0;
const K1: usize = 1;

/// Jovanovic isotherm: Langmuir-like monolayer with mechanical contact
/// between adsorbed molecules.
///
/// ```text
/// Qe = Qmax·(1 − exp(−K1·Ce))
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Jovanovic {
    parameters: ParameterSet<2>,
}

impl Jovanovic {
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`] or [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn new(qmax: f64, k1: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([qmax, k1]))
    }

    #[must_use]
    pub fn qmax(&self) -> f64 {
        self.parameters.at::<QMAX>()
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
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
}

impl IsothermModel for Jovanovic {
    type Parameters = ParameterSet<2>;

    const IDENTITY: Identity = Identity::new("Jovanovic", IsothermKind::Jovanovic);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Monolayer adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Jovanovic affinity constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
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
        Ok(self.qmax() * -(-self.k1() * ce.get()).exp_m1())
    }
}
