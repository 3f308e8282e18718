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
const K3: usize = 3;

/// Bi-Langmuir isotherm: two independent Langmuir site populations.
///
/// ```text
/// Qe = Qmax·K1·Ce / (1 + K1·Ce) + K2·K3·Ce / (1 + K3·Ce)
/// ```
///
/// `Qmax` and `K1` describe the first population; `K2` is the capacity and
/// `K3` the affinity of the second.
#[derive(Debug, Clone, PartialEq)]
pub struct BiLangmuir {
    parameters: ParameterSet<4>,
}

impl BiLangmuir {
    /// Creates a Bi-Langmuir isotherm.
    ///
    /// # Errors
    ///
    /// Fails with the violation kind of the first non-positive parameter.
    #[track_caller]
    pub fn new(qmax: f64, k1: f64, k2: f64, k3: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([qmax, k1, k2, k3]))
    }

    /// Capacity of the first site population.
    #[must_use]
    pub fn qmax(&self) -> f64 {
        self.parameters.at::<QMAX>()
    }

    /// Affinity of the first site population.
    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
    }

    /// Capacity of the second site population.
    #[must_use]
    pub fn k2(&self) -> f64 {
        self.parameters.at::<K2>()
    }

    /// Affinity of the second site population.
    #[must_use]
    pub fn k3(&self) -> f64 {
        self.parameters.at::<K3>()
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
}

impl IsothermModel for BiLangmuir {
    type Parameters = ParameterSet<4>;

    const IDENTITY: Identity = Identity::new("Bi-Langmuir", IsothermKind::BiLangmuir);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Capacity of the first site population",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Affinity of the first site population",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Capacity of the second site population",
            Bound::Positive,
            ErrorKind::BadK2LEZero,
        ),
        ParameterDescriptor::new(
            "K3",
            "Affinity of the second site population",
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
        Ok(self.qmax() * saturation(self.k1() * ce) + self.k2() * saturation(self.k3() * ce))
    }
}
