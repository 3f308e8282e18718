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

use super::{coverage_solver, logistic};

const QMAX: usize = 0;
const K1: usize = 1;
const K2: usize = 2;

/// Kiselev isotherm: localized monolayer with lateral complex formation.
///
/// The coverage `θ = Qe / Qmax` satisfies
///
/// ```text
/// K1·Ce = θ / ((1 − θ)·(1 + K2·θ))
/// ```
///
/// Written in the logit `u = ln(θ / (1 − θ))` the residual
/// `u − ln(1 + K2·θ(u)) − ln(K1·Ce)` is strictly increasing, so Newton-Raphson
/// with a central-difference derivative finds the unique root from the
/// `K2 = 0` (Langmuir) starting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Kiselev {
    parameters: ParameterSet<3>,
}

impl Kiselev {
    /// Creates a Kiselev isotherm.
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

    /// Complex formation constant.
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
    /// Fails with [`ErrorKind::BadK2LTZero`].
    #[track_caller]
    pub fn set_k2(&mut self, k2: f64) -> Result<(), IsothermError> {
        self.set_parameter(K2, k2)
    }
}

impl IsothermModel for Kiselev {
    type Parameters = ParameterSet<3>;

    const IDENTITY: Identity = Identity::new("Kiselev", IsothermKind::Kiselev);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Monolayer adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Kiselev equilibrium constant",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
        ParameterDescriptor::new(
            "K2",
            "Complex formation constant between adsorbed molecules",
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
        _temperature: f64,
    ) -> Result<f64, IsothermError> {
        let activity = self.k1() * ce.get();
        if activity == 0.0 {
            return Ok(0.0);
        }

        let log_activity = activity.ln();
        let k2 = self.k2();

        let solution = match newton::solve_numeric(
            |u| u - (k2 * logistic(u)).ln_1p() - log_activity,
            log_activity,
            &coverage_solver(),
        ) {
            Ok(solution) => solution,
            Err(err) => return Err(IsothermError::from_solver(Self::IDENTITY, &err)),
        };

        Ok(self.qmax() * logistic(solution.x))
    }
}
