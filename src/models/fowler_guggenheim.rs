use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::{
        constraint::{Constrained, NonNegative},
        newton,
    },
};
use uom::si::{f64::MolarEnergy, molar_energy::joule_per_mole};

use super::{GAS_CONSTANT, absolute_temperature, coverage_solver, logistic};

const QMAX: usize = 0;
const K1: usize = 1;
const K2: usize = 2;

/// Fowler–Guggenheim isotherm: localized monolayer with lateral interactions.
///
/// The coverage `θ = Qe / Qmax` satisfies
///
/// ```text
/// K1·Ce = θ / (1 − θ) · exp(2·K2·θ / (R·T))
/// ```
///
/// where `K2` is the interaction energy in J/mol. With `a = 2·K2 / (R·T)` and
/// the logit `u = ln(θ / (1 − θ))` the residual is `u + a·θ(u) − ln(K1·Ce)`
/// with derivative `1 + a·θ·(1 − θ)`, which never vanishes.
#[derive(Debug, Clone, PartialEq)]
pub struct FowlerGuggenheim {
    parameters: ParameterSet<3>,
}

impl FowlerGuggenheim {
    /// Creates a Fowler–Guggenheim isotherm.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`], [`ErrorKind::BadK1LEZero`] or
    /// [`ErrorKind::BadK2LTZero`].
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

    /// Interaction energy between adsorbed molecules, J/mol.
    #[must_use]
    pub fn k2(&self) -> f64 {
        self.parameters.at::<K2>()
    }

    /// [`Self::k2`] as a typed quantity.
    #[must_use]
    pub fn interaction_energy(&self) -> MolarEnergy {
        MolarEnergy::new::<joule_per_mole>(self.k2())
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
    /// Fails with [`ErrorKind::BadK2LTZero`].
    #[track_caller]
    pub fn set_k2(&mut self, k2: f64) -> Result<(), IsothermError> {
        self.set_parameter(K2, k2)
    }
}

impl IsothermModel for FowlerGuggenheim {
    type Parameters = ParameterSet<3>;

    const IDENTITY: Identity =
        Identity::new("Fowler-Guggenheim", IsothermKind::FowlerGuggenheim);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Monolayer adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Fowler-Guggenheim equilibrium constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Lateral interaction energy (J/mol)",
            Bound::NonNegative,
            ErrorKind::BadK2LTZero,
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
        temperature: f64,
    ) -> Result<f64, IsothermError> {
        let temperature = absolute_temperature(Self::IDENTITY, temperature)?;
        let activity = self.k1() * ce.get();
        if activity == 0.0 {
            return Ok(0.0);
        }

        let log_activity = activity.ln();
        let a = 2.0 * self.k2() / (GAS_CONSTANT * temperature);

        let solution = match newton::solve(
            |u| u + a * logistic(u) - log_activity,
            |u| {
                let theta = logistic(u);
                1.0 + a * theta * (1.0 - theta)
            },
            log_activity,
            &coverage_solver(),
        ) {
            Ok(solution) => solution,
            Err(err) => return Err(IsothermError::from_solver(Self::IDENTITY, &err)),
        };

        Ok(self.qmax() * logistic(solution.x))
    }
}
