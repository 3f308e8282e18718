//! Newton-Raphson root finding for scalar functions.
//!
//! Each step moves the estimate by `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
//! The derivative is either supplied by the caller ([`solve`]) or
//! approximated with a central difference ([`solve_numeric`]).
//!
//! The loop is bounded by [`Config::max_iters`] and never divides by a
//! derivative smaller than [`Config::min_derivative`].
//!
//! # Example
//!
//! ```
//! use isotherm_models::support::newton::{self, Config};
//!
//! let solution = newton::solve(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &Config::new(1e-9, 50))
//!     .unwrap();
//!
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-9);
//! assert!(solution.iters < 10);
//! ```

mod config;
mod error;
mod solution;

pub use config::{Config, Convergence};
pub use error::Error;
pub use solution::Solution;

use std::convert::Infallible;

use tracing::{debug, trace};

/// Finds a root of `f` using its analytic derivative `df`.
///
/// # Errors
///
/// Returns an [`Error`] if the config or initial guess is invalid, the
/// derivative vanishes, a non-finite value appears, or the iteration cap is
/// reached without convergence.
pub fn solve<F, D>(mut f: F, mut df: D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
{
    iterate(
        |x| Ok::<_, Infallible>(f(x)),
        |_, x| Ok(df(x)),
        x0,
        config,
    )
}

/// Finds a root of `f` using a central-difference derivative.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_numeric<F>(mut f: F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
{
    let step = config.step;
    iterate(
        |x| Ok::<_, Infallible>(f(x)),
        |f, x| central_difference(f, x, step),
        x0,
        config,
    )
}

/// Finds a root of a fallible function using its analytic derivative.
///
/// The first evaluation error stops the solve and is returned as
/// [`Error::Function`].
///
/// # Errors
///
/// See [`solve`].
pub fn try_solve<F, D, E>(f: F, mut df: D, x0: f64, config: &Config) -> Result<Solution, Error<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
    D: FnMut(f64) -> Result<f64, E>,
{
    iterate(f, |_, x| df(x), x0, config)
}

/// Finds a root of a fallible function using a central-difference derivative.
///
/// # Errors
///
/// See [`try_solve`].
pub fn try_solve_numeric<F, E>(f: F, x0: f64, config: &Config) -> Result<Solution, Error<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let step = config.step;
    iterate(f, |f, x| central_difference(f, x, step), x0, config)
}

fn central_difference<F, E>(f: &mut F, x: f64, step: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let forward = f(x + step)?;
    let backward = f(x - step)?;
    Ok((forward - backward) / (2.0 * step))
}

fn iterate<F, D, E>(mut f: F, mut derivative: D, x0: f64, config: &Config) -> Result<Solution, Error<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
    D: FnMut(&mut F, f64) -> Result<f64, E>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut x = x0;
    let mut residual = finite(x, f(x).map_err(Error::Function)?)?;

    for iter in 1..=config.max_iters {
        let slope = finite(x, derivative(&mut f, x).map_err(Error::Function)?)?;
        if slope.abs() < config.min_derivative {
            debug!(iter, x, slope, "newton: derivative vanished");
            return Err(Error::ZeroDerivative {
                x,
                derivative: slope,
                iter,
            });
        }

        let next = x - residual / slope;
        let next_residual = finite(next, f(next).map_err(Error::Function)?)?;
        let step = (next - x).abs();
        trace!(iter, x = next, residual = next_residual, step, "newton: step");

        x = next;
        residual = next_residual;

        let converged = match config.convergence {
            Convergence::Step => step < config.tolerance,
            Convergence::Residual => residual.abs() < config.tolerance,
            Convergence::Either => step < config.tolerance || residual.abs() < config.tolerance,
        };
        if converged {
            debug!(iter, x, residual, "newton: converged");
            return Ok(Solution {
                x,
                residual,
                iters: iter,
            });
        }
    }

    debug!(iters = config.max_iters, x, residual, "newton: iteration limit reached");
    Err(Error::NonConvergence {
        x,
        residual,
        iters: config.max_iters,
    })
}

fn finite<E>(x: f64, value: f64) -> Result<f64, Error<E>> {
    if value.is_finite() && x.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { x, value })
    }
}
