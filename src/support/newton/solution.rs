/// The result of a converged Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Root estimate.
    pub x: f64,
    /// Function value at `x`.
    pub residual: f64,
    /// Number of Newton steps taken.
    pub iters: usize,
}
