/// Which test ends a Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Convergence {
    /// Stop when `|x_{n+1} - x_n| < tolerance`.
    Step,
    /// Stop when `|f(x_{n+1})| < tolerance`.
    Residual,
    /// Stop when either the step or the residual test passes.
    #[default]
    Either,
}

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of Newton steps.
    pub max_iters: usize,

    /// Absolute tolerance used by the convergence test.
    pub tolerance: f64,

    /// Convergence test applied after each step.
    pub convergence: Convergence,

    /// Derivatives with a magnitude below this are treated as zero.
    pub min_derivative: f64,

    /// Step `h` for the central difference `(f(x+h) - f(x-h)) / 2h`.
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-12,
            convergence: Convergence::Either,
            min_derivative: 1e-14,
            step: 1e-6,
        }
    }
}

impl Config {
    /// Returns a configuration with the given tolerance and iteration cap.
    #[must_use]
    pub fn new(tolerance: f64, max_iters: usize) -> Self {
        Self {
            tolerance,
            max_iters,
            ..Self::default()
        }
    }

    /// Returns this configuration with a different convergence test.
    #[must_use]
    pub fn with_convergence(self, convergence: Convergence) -> Self {
        Self {
            convergence,
            ..self
        }
    }

    /// Validates tolerances and the difference step.
    ///
    /// # Errors
    ///
    /// Returns a static reason if any setting is unusable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if !self.min_derivative.is_finite() || self.min_derivative < 0.0 {
            return Err("min_derivative must be finite and non-negative");
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("step must be finite and positive");
        }
        Ok(())
    }
}
