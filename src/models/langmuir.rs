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

/// Langmuir isotherm: monolayer adsorption on identical, independent sites.
///
/// ```text
/// Qe = Qmax·K1·Ce / (1 + K1·Ce)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Langmuir {
    parameters: ParameterSet<2>,
}

impl Langmuir {
    /// Creates a Langmuir isotherm.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`] or [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn new(qmax: f64, k1: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([qmax, k1]))
    }

    /// Monolayer capacity.
    #[must_use]
    pub fn qmax(&self) -> f64 {
        self.parameters.at::<QMAX>()
    }

    /// Affinity constant.
    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
    }

    /// Replaces the capacity, leaving the model unchanged on failure.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`].
    #[track_caller]
    pub fn set_qmax(&mut self, qmax: f64) -> Result<(), IsothermError> {
        self.set_parameter(QMAX, qmax)
    }

    /// Replaces the affinity constant, leaving the model unchanged on failure.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn set_k1(&mut self, k1: f64) -> Result<(), IsothermError> {
        self.set_parameter(K1, k1)
    }
}

impl IsothermModel for Langmuir {
    type Parameters = ParameterSet<2>;

    const IDENTITY: Identity = Identity::new("Langmuir", IsothermKind::Langmuir);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Monolayer adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Langmuir affinity constant",
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
        Ok(self.qmax() * saturation(self.k1() * ce.get()))
    }
}
