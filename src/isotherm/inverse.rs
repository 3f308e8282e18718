//! Inverting isotherms: the concentration that yields a target loading.
//!
//! Two strategies are provided:
//!
//! - [`concentration`] runs Newton-Raphson on `ln(c)`, which keeps every
//!   iterate at a positive concentration and needs only a starting guess.
//! - [`concentration_in_bracket`] runs bisection on a known bracket through
//!   the Twine solver stack, trading speed for guaranteed progress.
//!
//! Both fail explicitly when the target cannot be reached, for example a
//! target at or above a Langmuir capacity.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;

use crate::support::{
    constraint::NonNegative,
    newton::{self, Convergence},
};

use super::{ErrorKind, Identity, Isotherm, IsothermError};

/// Configuration for Newton-based inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseConfig {
    /// Solver settings, applied to the variable `ln(c)`.
    pub newton: newton::Config,

    /// Starting concentration.
    pub initial_concentration: f64,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            newton: newton::Config {
                max_iters: 200,
                tolerance: 1e-10,
                convergence: Convergence::Either,
                ..newton::Config::default()
            },
            initial_concentration: 1.0,
        }
    }
}

impl InverseConfig {
    /// Validates the solver settings and the starting concentration.
    ///
    /// # Errors
    ///
    /// Returns a static reason if any setting is unusable.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.newton.validate()?;
        if !self.initial_concentration.is_finite() || self.initial_concentration <= 0.0 {
            return Err("initial_concentration must be finite and positive");
        }
        Ok(())
    }
}

/// Configuration for bracketed inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the concentration.
    pub concentration_tol: f64,

    /// Absolute tolerance on the loading residual (achieved - target).
    pub qe_tol: f64,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            concentration_tol: 1e-12,
            qe_tol: 1e-12,
        }
    }
}

impl BracketConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the bisection [`ConfigError`](bisection::ConfigError) if a
    /// tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), bisection::ConfigError> {
        self.bisection().validate()
    }

    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.concentration_tol,
            x_rel_tol: 0.0,
            residual_tol: self.qe_tol,
        }
    }
}

/// Finds the concentration at which `isotherm` adsorbs `target_qe`.
///
/// # Errors
///
/// - [`ErrorKind::BadQeLTZero`] if `target_qe` is negative or `NaN`.
/// - [`ErrorKind::InvalidSolverConfig`] if `config` is invalid.
/// - A solver kind ([`ErrorKind::NonConvergence`], [`ErrorKind::ZeroDerivative`],
///   [`ErrorKind::NonFiniteResidual`]) if the target cannot be reached.
/// - Any error the model itself raises during evaluation, unchanged.
///
/// # Example
///
/// ```
/// use isotherm_models::isotherm::{Isotherm, inverse};
/// use isotherm_models::models::Langmuir;
///
/// let model = Langmuir::new(10.0, 0.5).unwrap();
/// let ce = inverse::concentration(&model, 5.0, 0.0, &Default::default()).unwrap();
///
/// assert!((ce - 2.0).abs() < 1e-8);
/// assert!((model.qe_at(ce).unwrap() - 5.0).abs() < 1e-8);
/// ```
#[track_caller]
pub fn concentration<I>(
    isotherm: &I,
    target_qe: f64,
    temperature: f64,
    config: &InverseConfig,
) -> Result<f64, IsothermError>
where
    I: Isotherm + ?Sized,
{
    let identity = isotherm.identity();
    let target = checked_target(identity, target_qe)?;
    if target == 0.0 {
        return Ok(0.0);
    }

    if let Err(reason) = config.validate() {
        return Err(IsothermError::new(
            ErrorKind::InvalidSolverConfig,
            identity,
            reason,
        ));
    }

    let residual = |u: f64| isotherm.qe(u.exp(), temperature).map(|qe| qe - target);

    match newton::try_solve_numeric(residual, config.initial_concentration.ln(), &config.newton) {
        Ok(solution) => Ok(solution.x.exp()),
        Err(newton::Error::Function(err)) => Err(err),
        Err(err) => Err(IsothermError::from_solver(identity, &err)),
    }
}

/// Finds the concentration in `bracket` at which `isotherm` adsorbs `target_qe`.
///
/// # Errors
///
/// - [`ErrorKind::BadQeLTZero`] if `target_qe` is negative or `NaN`.
/// - [`ErrorKind::BadCeLTZero`] if either end of the bracket is negative.
/// - [`ErrorKind::InvalidSolverConfig`] if `config` is invalid.
/// - [`ErrorKind::BracketFailure`] if the bracket does not contain the target.
/// - [`ErrorKind::NonConvergence`] if the iteration limit is reached.
/// - Any error the model itself raises during evaluation, unchanged.
#[track_caller]
pub fn concentration_in_bracket<I>(
    isotherm: &I,
    target_qe: f64,
    temperature: f64,
    bracket: [f64; 2],
    config: &BracketConfig,
) -> Result<f64, IsothermError>
where
    I: Isotherm + ?Sized,
{
    let identity = isotherm.identity();
    let target = checked_target(identity, target_qe)?;

    for end in bracket {
        if let Err(reason) = NonNegative::new(end) {
            return Err(IsothermError::new(
                ErrorKind::BadCeLTZero,
                identity,
                format!("bracket end {end} ({reason})"),
            ));
        }
    }

    if let Err(reason) = config.validate() {
        return Err(IsothermError::new(
            ErrorKind::InvalidSolverConfig,
            identity,
            reason.to_string(),
        ));
    }

    let model = QeModel::new(isotherm, temperature);
    let problem = TargetLoading { target };

    let solution = match bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    ) {
        Ok(solution) => solution,
        Err(bisection::Error::Model(source)) => {
            return Err(match source.downcast::<IsothermError>() {
                Ok(err) => *err,
                Err(other) => IsothermError::new(
                    ErrorKind::EvaluationFailed,
                    identity,
                    other.to_string(),
                ),
            });
        }
        Err(err) => {
            return Err(IsothermError::new(
                ErrorKind::BracketFailure,
                identity,
                err.to_string(),
            ));
        }
    };

    if solution.status != bisection::Status::Converged {
        return Err(IsothermError::new(
            ErrorKind::NonConvergence,
            identity,
            format!(
                "bisection hit iteration limit: residual = {:e} after {} iterations",
                solution.residual, solution.iters
            ),
        ));
    }

    Ok(solution.snapshot.input)
}

#[track_caller]
fn checked_target(identity: Identity, target_qe: f64) -> Result<f64, IsothermError> {
    match NonNegative::new(target_qe) {
        Ok(target) => Ok(target.into_inner()),
        Err(reason) => Err(IsothermError::new(
            ErrorKind::BadQeLTZero,
            identity,
            format!("target Qe = {target_qe} ({reason})"),
        )),
    }
}

/// [`Model`] adapter mapping a concentration to the quantity adsorbed at a
/// fixed temperature.
#[derive(Debug)]
pub struct QeModel<'a, I: ?Sized> {
    isotherm: &'a I,
    temperature: f64,
}

impl<'a, I: Isotherm + ?Sized> QeModel<'a, I> {
    pub fn new(isotherm: &'a I, temperature: f64) -> Self {
        Self {
            isotherm,
            temperature,
        }
    }
}

impl<I: Isotherm + ?Sized> Model for QeModel<'_, I> {
    type Input = f64;
    type Output = f64;
    type Error = IsothermError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.isotherm.qe(*input, self.temperature)
    }
}

/// Equation problem with residual `qe - target`.
struct TargetLoading {
    target: f64,
}

impl EquationProblem<1> for TargetLoading {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &Self::Input, output: &Self::Output) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.target])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        isotherm::IsothermModel,
        models::{DubininRadushkevich, FowlerGuggenheim, Freundlich, Langmuir},
    };

    #[test]
    fn freundlich_round_trip() {
        let model = Freundlich::new(2.0, 3.0).unwrap();

        for target in [0.5, 2.0, 7.5] {
            let ce = concentration(&model, target, 0.0, &InverseConfig::default()).unwrap();
            assert_relative_eq!(model.qe_at(ce).unwrap(), target, max_relative = 1e-9);
        }
    }

    #[test]
    fn zero_target_needs_no_solve() {
        let model = Langmuir::new(1.0, 1.0).unwrap();
        assert_eq!(concentration(&model, 0.0, 0.0, &InverseConfig::default()), Ok(0.0));
    }

    #[test]
    fn negative_target_is_rejected() {
        let model = Langmuir::new(1.0, 1.0).unwrap();

        let err = concentration(&model, -0.1, 0.0, &InverseConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadQeLTZero);

        let err = concentration_in_bracket(&model, -0.1, 0.0, [0.0, 1.0], &BracketConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadQeLTZero);
    }

    #[test]
    fn saturation_cannot_be_reached() {
        let model = Langmuir::new(1.0, 1.0).unwrap();
        let err = concentration(&model, 1.5, 0.0, &InverseConfig::default()).unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::NonConvergence | ErrorKind::ZeroDerivative | ErrorKind::NonFiniteResidual
        ));
        assert_eq!(err.identity(), Langmuir::IDENTITY);
    }

    #[test]
    fn model_errors_pass_through_unchanged() {
        // Temperature-dependent model evaluated at zero temperature.
        let model = DubininRadushkevich::new(3.0, 1e-8).unwrap();
        let err = concentration(&model, 1.0, 0.0, &InverseConfig::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadTemperatureLEZero);
    }

    #[test]
    fn bracketed_model_errors_pass_through_unchanged() {
        let model = DubininRadushkevich::new(3.0, 1e-8).unwrap();
        let err =
            concentration_in_bracket(&model, 1.0, 0.0, [0.0, 10.0], &BracketConfig::default())
                .unwrap_err();

        let newton = concentration(&model, 1.0, 0.0, &InverseConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadTemperatureLEZero);
        assert_eq!(err.kind(), newton.kind());
        assert_eq!(err.identity(), newton.identity());
        assert_eq!(err.detail(), newton.detail());
    }

    #[test]
    fn invalid_config_is_reported() {
        let model = Langmuir::new(1.0, 1.0).unwrap();
        let config = InverseConfig {
            initial_concentration: 0.0,
            ..InverseConfig::default()
        };

        let err = concentration(&model, 0.5, 0.0, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSolverConfig);
    }

    #[test]
    fn bracket_agrees_with_newton() {
        let model = Langmuir::new(10.0, 0.5).unwrap();

        let newton = concentration(&model, 4.0, 0.0, &InverseConfig::default()).unwrap();
        let bracketed =
            concentration_in_bracket(&model, 4.0, 0.0, [0.0, 100.0], &BracketConfig::default())
                .unwrap();

        assert_relative_eq!(newton, 4.0 / 3.0, max_relative = 1e-9);
        assert_relative_eq!(bracketed, newton, max_relative = 1e-9);
    }

    #[test]
    fn bracket_inverts_an_implicit_model() {
        let model = FowlerGuggenheim::new(2.0, 0.8, 1500.0).unwrap();
        let temperature = 298.15;

        let ce = concentration_in_bracket(&model, 1.0, temperature, [0.0, 50.0], &BracketConfig::default())
            .unwrap();

        assert_relative_eq!(model.qe(ce, temperature).unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn bracket_must_be_non_negative() {
        let model = Langmuir::new(1.0, 1.0).unwrap();
        let err = concentration_in_bracket(&model, 0.5, 0.0, [-1.0, 1.0], &BracketConfig::default())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadCeLTZero);
    }

    #[test]
    fn invalid_bracket_config_is_reported() {
        let model = Langmuir::new(1.0, 1.0).unwrap();
        let config = BracketConfig {
            qe_tol: -1.0,
            ..BracketConfig::default()
        };
        let err = concentration_in_bracket(&model, 0.5, 0.0, [0.0, 10.0], &config).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidSolverConfig);
    }

    #[test]
    fn bracket_without_root_fails() {
        let model = Langmuir::new(1.0, 1.0).unwrap();
        let err = concentration_in_bracket(&model, 0.9, 0.0, [0.0, 1.0], &BracketConfig::default())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BracketFailure);
    }

    #[test]
    fn qe_model_adapts_any_isotherm() {
        let boxed: Box<dyn Isotherm> = Box::new(Langmuir::new(2.0, 1.0).unwrap());
        let model = QeModel::new(boxed.as_ref(), 0.0);

        assert_relative_eq!(model.call(&1.0).unwrap(), 1.0);
        assert_eq!(model.call(&-1.0).unwrap_err().kind(), ErrorKind::BadCeLTZero);
    }
}
