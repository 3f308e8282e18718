use tracing::trace;

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

use super::coverage_solver;

const QMAX: usize = 0;
const K1: usize = 1;

/// Elovich isotherm: multilayer adsorption with exponentially increasing
/// site occupation.
///
/// The coverage `θ = Qe / Qmax` is defined implicitly by
///
/// ```text
/// θ = K1·Ce·exp(−θ)
/// ```
///
/// and is found by Newton-Raphson on `r(θ) = θ·e^θ − K1·Ce`, with the analytic
/// derivative `(1 + θ)·e^θ`. Starting from `ln(1 + K1·Ce)`, which always lies
/// at or above the root, the iterates decrease monotonically.
#[derive(Debug, Clone, PartialEq)]
pub struct Elovich {
    parameters: ParameterSet<2>,
}

impl Elovich {
    /// Creates an Elovich isotherm.
    ///
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

impl IsothermModel for Elovich {
    type Parameters = ParameterSet<2>;

    const IDENTITY: Identity = Identity::new("Elovich", IsothermKind::Elovich);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Maximum adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Elovich equilibrium constant",
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
        let target = self.k1() * ce.get();
        if target == 0.0 {
            return Ok(0.0);
        }

        let solution = match newton::solve(
            |theta| theta * theta.exp() - target,
            |theta| (1.0 + theta) * theta.exp(),
            target.ln_1p(),
            &coverage_solver(),
        ) {
            Ok(solution) => solution,
            Err(err) => return Err(IsothermError::from_solver(Self::IDENTITY, &err)),
        };

        trace!(target, theta = solution.x, iters = solution.iters, "elovich coverage");
        Ok(self.qmax() * solution.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn satisfies_the_implicit_equation() {
        let model = Elovich::new(2.0, 0.7).unwrap();

        for ce in [0.05, 1.0, 3.0, 250.0] {
            let theta = model.qe_at(ce).unwrap() / 2.0;
            assert_relative_eq!(theta, 0.7 * ce * (-theta).exp(), max_relative = 1e-10);
        }
    }

    #[test]
    fn known_coverage() {
        // θ·e^θ = e gives θ = 1.
        let model = Elovich::new(3.0, 1.0).unwrap();
        assert_relative_eq!(model.qe_at(std::f64::consts::E).unwrap(), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn linear_at_low_concentration() {
        let model = Elovich::new(2.0, 0.7).unwrap();
        assert_relative_eq!(model.qe_at(1e-9).unwrap(), 2.0 * 0.7e-9, max_relative = 1e-6);
    }
}
