use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};

const K1: usize = 0;
const K2: usize = 1;

/// Freundlich isotherm for heterogeneous surfaces.
///
/// ```text
/// Qe = K1·Ce^(1/K2)
/// ```
///
/// `K2` is the heterogeneity factor `n` and must exceed one, so the isotherm
/// is favorable (concave).
#[derive(Debug, Clone, PartialEq)]
pub struct Freundlich {
    parameters: ParameterSet<2>,
}

impl Freundlich {
    /// Creates a Freundlich isotherm.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`] or [`ErrorKind::BadK2LEOne`].
    #[track_caller]
    pub fn new(k1: f64, k2: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([k1, k2]))
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
    /// Fails with [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn set_k1(&mut self, k1: f64) -> Result<(), IsothermError> {
        self.set_parameter(K1, k1)
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK2LEOne`].
    #[track_caller]
    pub fn set_k2(&mut self, k2: f64) -> Result<(), IsothermError> {
        self.set_parameter(K2, k2)
    }
}

impl IsothermModel for Freundlich {
    type Parameters = ParameterSet<2>;

    const IDENTITY: Identity = Identity::new("Freundlich", IsothermKind::Freundlich);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "K1",
            "Freundlich capacity constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Heterogeneity factor n",
            Bound::GreaterThanOne,
            ErrorKind::BadK2LEOne,
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
        Ok(self.k1() * ce.get().powf(self.k2().recip()))
    }
}
